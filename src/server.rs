use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::gemini::Summarizer;
use crate::{extract_video_id, language_label, youtube};

/// Shared per-process state; cloned per request, no mutation after startup.
#[derive(Clone)]
pub struct AppState {
    pub client: reqwest::Client,
    pub config: Config,
    pub summarizer: Summarizer,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let client = reqwest::Client::new();
        let summarizer = Summarizer::new(
            client.clone(),
            config.gemini_base_url.clone(),
            config.gemini_api_key.clone(),
            config.model.clone(),
        );
        Self {
            client,
            config,
            summarizer,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/summarize", post(summarize))
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

fn default_languages() -> Vec<String> {
    vec!["en".to_string(), "nl".to_string()]
}

#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SummarizeResponse {
    pub video_id: String,
    pub language: String,
    pub summary: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
        .into_response()
}

#[axum::debug_handler]
pub async fn summarize(
    State(state): State<AppState>,
    Json(req): Json<SummarizeRequest>,
) -> Response {
    let url = match req.url.as_deref() {
        Some(url) if !url.is_empty() => url,
        _ => return error_response(StatusCode::BAD_REQUEST, "No URL provided"),
    };

    let Some(video_id) = extract_video_id(url) else {
        return error_response(StatusCode::BAD_REQUEST, "Invalid YouTube URL");
    };

    let transcript = match youtube::fetch_transcript(
        &state.client,
        &state.config.youtube_base_url,
        &video_id,
        &req.languages,
    )
    .await
    {
        Ok(transcript) => transcript,
        Err(e) => {
            warn!("No transcript for {video_id}: {e}");
            return error_response(StatusCode::NOT_FOUND, "No transcript available");
        }
    };

    let transcript_text = transcript.text();
    if transcript_text.is_empty() {
        warn!("Empty transcript for {video_id} (track lang={})", transcript.language);
        return error_response(StatusCode::NOT_FOUND, "No transcript available");
    }

    let language = language_label(&req.languages);
    debug!(
        "Summarizing {video_id}: {} segments, track lang={}, output language={language}",
        transcript.segments.len(),
        transcript.language
    );

    match state.summarizer.summarize(&transcript_text, language).await {
        Ok(summary) => (
            StatusCode::OK,
            Json(SummarizeResponse {
                video_id,
                language: language.to_string(),
                summary,
            }),
        )
            .into_response(),
        Err(e) => {
            warn!("Summary generation failed for {video_id}: {e}");
            error_response(StatusCode::BAD_GATEWAY, "Summary generation failed")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_languages() {
        assert_eq!(default_languages(), vec!["en", "nl"]);
    }

    #[test]
    fn test_request_defaults() {
        let req: SummarizeRequest = serde_json::from_str("{}").unwrap();
        assert!(req.url.is_none());
        assert_eq!(req.languages, vec!["en", "nl"]);
    }

    #[test]
    fn test_request_explicit_languages() {
        let req: SummarizeRequest =
            serde_json::from_str(r#"{"url": "https://youtu.be/abc", "languages": ["nl"]}"#)
                .unwrap();
        assert_eq!(req.url.as_deref(), Some("https://youtu.be/abc"));
        assert_eq!(req.languages, vec!["nl"]);
    }
}
