use log::debug;
use thiserror::Error;

/// Returned in place of a summary when there is no transcript text to work
/// with; the external service is not contacted in that case.
pub const NO_TRANSCRIPT_SENTINEL: &str = "No transcript available to generate response.";

/// Failure classes for summary generation. The HTTP layer maps all of these
/// to a 502 with a fixed error message.
#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("Gemini API request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Gemini API returned {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("unexpected Gemini API response format")]
    MalformedResponse,
}

/// Client for Gemini's generateContent endpoint.
#[derive(Clone)]
pub struct Summarizer {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl Summarizer {
    pub fn new(client: reqwest::Client, base_url: String, api_key: String, model: String) -> Self {
        Self {
            client,
            base_url,
            api_key,
            model,
        }
    }

    /// Summarize transcript text in the given display language.
    pub async fn summarize(
        &self,
        transcript_text: &str,
        language: &str,
    ) -> Result<String, SummarizeError> {
        if transcript_text.is_empty() {
            return Ok(NO_TRANSCRIPT_SENTINEL.to_string());
        }

        debug!("Summarizing via Gemini API with model {}", self.model);

        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let body = serde_json::json!({
            "contents": [
                {
                    "parts": [
                        { "text": build_prompt(transcript_text, language) }
                    ]
                }
            ]
        });

        let resp = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(SummarizeError::Api { status, body });
        }

        let json: serde_json::Value = resp.json().await?;
        extract_candidate_text(&json).ok_or(SummarizeError::MalformedResponse)
    }
}

fn build_prompt(transcript_text: &str, language: &str) -> String {
    format!(
        "Summarize or answer questions based on the following text in {language}:\n\n'{transcript_text}'"
    )
}

fn extract_candidate_text(json: &serde_json::Value) -> Option<String> {
    let parts = json
        .get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .as_array()?;

    let text: String = parts
        .iter()
        .filter_map(|part| part.get("text")?.as_str().map(str::to_string))
        .collect::<Vec<_>>()
        .join("");

    if text.is_empty() { None } else { Some(text) }
}
