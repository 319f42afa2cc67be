use std::path::PathBuf;

use eyre::Result;
use log::debug;
use serde::{Deserialize, Serialize};

pub const GEMINI_API_KEY_VAR: &str = "GEMINI_API_KEY";

const DEFAULT_BIND: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MODEL: &str = "gemini-1.5-flash";
const YOUTUBE_BASE_URL: &str = "https://www.youtube.com";
const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Optional defaults from ~/.config/ytsum/config.toml
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct FileConfig {
    pub bind: Option<String>,
    pub port: Option<u16>,
    pub default_model: Option<String>,
}

impl FileConfig {
    /// Load config from ~/.config/ytsum/config.toml if it exists
    pub fn load() -> Result<Self> {
        let path = config_path();
        if path.exists() {
            debug!("Loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)?;
            let config: FileConfig = toml::from_str(&content)?;
            Ok(config)
        } else {
            debug!("No config file found at {}", path.display());
            Ok(FileConfig::default())
        }
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from(".config"))
        .join("ytsum")
        .join("config.toml")
}

/// Resolved runtime configuration, validated at startup and handed to the
/// components that need it.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind: String,
    pub port: u16,
    pub model: String,
    pub gemini_api_key: String,
    pub youtube_base_url: String,
    pub gemini_base_url: String,
}

impl Config {
    /// Merge CLI flags over file config over built-in defaults, and read the
    /// Gemini API key from the environment. A missing key is fatal.
    pub fn resolve(
        file: FileConfig,
        bind: Option<String>,
        port: Option<u16>,
        model: Option<String>,
    ) -> Result<Self> {
        let gemini_api_key = std::env::var(GEMINI_API_KEY_VAR).map_err(|_| {
            eyre::eyre!("{GEMINI_API_KEY_VAR} not found. Make sure it's set in the environment!")
        })?;
        Ok(Self::with_key(file, bind, port, model, gemini_api_key))
    }

    pub fn with_key(
        file: FileConfig,
        bind: Option<String>,
        port: Option<u16>,
        model: Option<String>,
        gemini_api_key: String,
    ) -> Self {
        Config {
            bind: bind.or(file.bind).unwrap_or_else(|| DEFAULT_BIND.to_string()),
            port: port.or(file.port).unwrap_or(DEFAULT_PORT),
            model: model
                .or(file.default_model)
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            gemini_api_key,
            youtube_base_url: YOUTUBE_BASE_URL.to_string(),
            gemini_base_url: GEMINI_BASE_URL.to_string(),
        }
    }
}
