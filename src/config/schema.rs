use crate::error::ConfigError;
use directories::UserDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use url::Url;

// ── Top-level config ──────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// App data directory - computed from home, not serialized
    #[serde(skip)]
    pub data_dir: PathBuf,
    /// Path to config.toml - computed from home, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Review period shown in screen headers, e.g. "Q1 2025".
    #[serde(default = "default_quarter")]
    pub quarter: String,

    #[serde(default)]
    pub tone: ToneConfig,
}

fn default_quarter() -> String {
    "Q1 2025".into()
}

// ── Tone advisory service ─────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToneConfig {
    /// Endpoint of the tone-analysis function. One POST per check, no retry.
    #[serde(default = "default_tone_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_tone_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_tone_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

fn default_tone_endpoint() -> String {
    "http://localhost:54321/functions/v1/tonality".into()
}

fn default_tone_timeout_secs() -> u64 {
    15
}

fn default_tone_connect_timeout_secs() -> u64 {
    5
}

impl Default for ToneConfig {
    fn default() -> Self {
        Self {
            endpoint: default_tone_endpoint(),
            api_key: None,
            timeout_secs: default_tone_timeout_secs(),
            connect_timeout_secs: default_tone_connect_timeout_secs(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let home =
            UserDirs::new().map_or_else(|| PathBuf::from("."), |u| u.home_dir().to_path_buf());
        let vibecode_dir = home.join(".vibecode");

        Self {
            data_dir: vibecode_dir.clone(),
            config_path: vibecode_dir.join("config.toml"),
            quarter: default_quarter(),
            tone: ToneConfig::default(),
        }
    }
}

impl Config {
    /// Where the simulated login session is persisted.
    #[must_use]
    pub fn session_path(&self) -> PathBuf {
        self.data_dir.join("session.json")
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let parsed = Url::parse(&self.tone.endpoint)
            .map_err(|e| ConfigError::Validation(format!("tone.endpoint: {e}")))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ConfigError::Validation(format!(
                "tone.endpoint must be http(s), got {}",
                parsed.scheme()
            )));
        }
        if self.tone.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "tone.timeout_secs must be greater than zero".into(),
            ));
        }
        if self.quarter.trim().is_empty() {
            return Err(ConfigError::Validation("quarter must not be empty".into()));
        }
        Ok(())
    }

    pub fn apply_env_overrides(&mut self) {
        if let Ok(endpoint) = std::env::var("VIBECODE_TONE_ENDPOINT")
            && !endpoint.is_empty()
        {
            self.tone.endpoint = endpoint;
        }

        if let Ok(key) = std::env::var("VIBECODE_TONE_API_KEY")
            && !key.is_empty()
        {
            self.tone.api_key = Some(key);
        }

        if let Ok(timeout_str) = std::env::var("VIBECODE_TONE_TIMEOUT_SECS")
            && let Ok(timeout) = timeout_str.parse::<u64>()
            && timeout > 0
        {
            self.tone.timeout_secs = timeout;
        }
    }
}
