use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::Deserialize;
use std::{fs, path::Path, path::PathBuf, time::Duration};

use crate::relaxation::DEFAULT_PHASE_SECS;

pub const DEFAULT_INFERENCE_URL: &str = "https://api-inference.huggingface.co/models";
pub const DEFAULT_GENERATION_MODEL: &str = "google/flan-t5-large";
pub const DEFAULT_SENTIMENT_MODEL: &str =
    "distilbert/distilbert-base-uncased-finetuned-sst-2-english";

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the inference service. The model id is appended to it.
    pub inference_url: String,
    /// Model used for companion replies.
    pub generation_model: String,
    /// Model used for mood detection.
    pub sentiment_model: String,
    /// Bearer token sent to the inference service, if any.
    pub api_token: Option<String>,
    /// Per-request timeout. `None` waits for as long as the backend takes.
    pub request_timeout_secs: Option<u64>,
    /// Length of each inhale/hold/exhale phase of the breathing exercise.
    pub breath_phase_secs: u64,
    /// Preferred editor for long journal entries. Optional; the CLI will fall back to $VISUAL/$EDITOR.
    pub editor: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    inference_url: Option<String>,
    generation_model: Option<String>,
    sentiment_model: Option<String>,
    api_token: Option<String>,
    request_timeout_secs: Option<u64>,
    breath_phase_secs: Option<u64>,
    editor: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_file_config(FileConfig::default())
    }
}

impl Config {
    /// Public entrypoint: load config from disk (first XDG path, then native) and apply defaults.
    pub fn load() -> Result<Self> {
        let file_config = Self::read_file_config()?;
        Ok(Self::from_file_config(file_config))
    }

    /// Loads a specific config file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let s = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let file_config =
            Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()))?;
        Ok(Self::from_file_config(file_config))
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    pub fn breath_phase(&self) -> Duration {
        Duration::from_secs(self.breath_phase_secs)
    }

    fn from_file_config(file_config: FileConfig) -> Self {
        let inference_url = file_config
            .inference_url
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_INFERENCE_URL.to_string());

        Self {
            inference_url,
            generation_model: file_config
                .generation_model
                .unwrap_or_else(|| DEFAULT_GENERATION_MODEL.to_string()),
            sentiment_model: file_config
                .sentiment_model
                .unwrap_or_else(|| DEFAULT_SENTIMENT_MODEL.to_string()),
            api_token: file_config.api_token.filter(|t| !t.trim().is_empty()),
            request_timeout_secs: file_config.request_timeout_secs,
            breath_phase_secs: file_config.breath_phase_secs.unwrap_or(DEFAULT_PHASE_SECS),
            editor: file_config.editor,
        }
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            let xdg = b
                .home_dir()
                .join(".config")
                .join("calma")
                .join("config.toml");
            v.push(xdg);
            let native = b.config_dir().join("calma").join("config.toml");
            v.push(native);
        }
        v
    }

    /// Read the first existing config file and parse it.
    fn read_file_config() -> Result<FileConfig> {
        for path in Self::config_file_paths() {
            if !path.exists() {
                continue;
            }
            let s =
                fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            tracing::debug!(path = %path.display(), "loaded config file");
            return Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()));
        }
        Ok(FileConfig::default())
    }

    /// Parse a TOML string into `FileConfig`.
    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }
}
