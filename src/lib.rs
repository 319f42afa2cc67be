pub mod config;
pub mod gemini;
pub mod server;
pub mod youtube;

/// A single captioned segment
#[derive(Debug, Clone)]
pub struct Segment {
    pub text: String,
    pub start: f64,
    pub duration: f64,
}

/// Complete transcript for a video
#[derive(Debug, Clone)]
pub struct Transcript {
    pub video_id: String,
    pub language: String,
    pub segments: Vec<Segment>,
}

impl Transcript {
    /// All segment texts joined by single spaces, in caption order.
    pub fn text(&self) -> String {
        self.segments
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

const VIDEO_ID_MARKERS: [&str; 2] = ["watch?v=", "youtu.be/"];

/// Extract a video ID from a YouTube URL.
///
/// The ID is everything after the last occurrence of `watch?v=` or
/// `youtu.be/`. Trailing query parameters (`&t=30s` and friends) are kept as
/// part of the ID; stripping them is an open question (see DESIGN.md).
pub fn extract_video_id(url: &str) -> Option<String> {
    for marker in VIDEO_ID_MARKERS {
        if let Some(pos) = url.rfind(marker) {
            let id = &url[pos + marker.len()..];
            if id.is_empty() {
                return None;
            }
            return Some(id.to_string());
        }
    }
    None
}

/// Display label for the first recognized code in a language priority list.
///
/// Region subtags are ignored (`en-US` counts as `en`); a list with no
/// recognized code falls back to English.
pub fn language_label(languages: &[String]) -> &'static str {
    languages
        .iter()
        .find_map(|code| label_for(code))
        .unwrap_or("English")
}

fn label_for(code: &str) -> Option<&'static str> {
    let base = code.split(['-', '_']).next().unwrap_or(code);
    match base {
        "en" => Some("English"),
        "nl" => Some("Dutch"),
        "de" => Some("German"),
        "fr" => Some("French"),
        "es" => Some("Spanish"),
        "it" => Some("Italian"),
        "pt" => Some("Portuguese"),
        _ => None,
    }
}
