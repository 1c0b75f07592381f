use calma_core::Config;
use clap::{Parser, ValueEnum};
use std::io::{self, IsTerminal};
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

/// calma — Mental health companion dashboard for your terminal
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,
    /// Read configuration from this file instead of the standard locations.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Token for the inference service.
    #[arg(long, env = "HF_TOKEN", hide_env_values = true)]
    pub token: Option<String>,
    /// Base URL of the inference service (e.g. `http://localhost:8080/models`).
    #[arg(long, env = "CALMA_INFERENCE_URL")]
    pub inference_url: Option<String>,
    /// Seconds per inhale/hold/exhale phase of the breathing exercise.
    #[arg(long)]
    pub breath_phase_secs: Option<u64>,
}

impl Cli {
    pub fn load_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        self.apply(&mut config);
        Ok(config)
    }

    /// Command line flags win over the config file.
    pub fn apply(&self, config: &mut Config) {
        if let Some(token) = self.token.as_deref().filter(|t| !t.trim().is_empty()) {
            config.api_token = Some(token.to_string());
        }
        if let Some(url) = &self.inference_url {
            config.inference_url = url.trim_end_matches('/').to_string();
        }
        if let Some(secs) = self.breath_phase_secs {
            config.breath_phase_secs = secs;
        }
    }

    pub fn use_color(&self) -> bool {
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                if std::env::var_os("NO_COLOR").is_some() {
                    false
                } else {
                    io::stdout().is_terminal()
                }
            }
        }
    }
}
