//! agui configuration types and loading

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main agui configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Data-source collaborator configuration
    pub source: SourceConfig,

    /// Event stream configuration
    pub stream: StreamConfig,
}

impl Config {
    /// Validate configuration before use
    ///
    /// Call this early in startup to fail fast with clear messages.
    pub fn validate(&self) -> Result<()> {
        match self.source.provider.as_str() {
            "github" => {
                if self.source.user.trim().is_empty() {
                    return Err(eyre::eyre!(
                        "The github source needs a user. Set source.user in the config or pass --user."
                    ));
                }
            }
            "stub" | "stub-empty" | "stub-failing" => {}
            other => {
                return Err(eyre::eyre!(
                    "Unknown source provider '{}'. Supported: github, stub, stub-empty, stub-failing",
                    other
                ));
            }
        }
        if self.stream.channel_capacity == 0 {
            return Err(eyre::eyre!("stream.channel-capacity must be at least 1"));
        }
        Ok(())
    }

    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // Try project-local config: .agui.yml
        let local_config = PathBuf::from(".agui.yml");
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {}", local_config.display(), e);
                }
            }
        }

        // Try user config: ~/.config/agui/agui.yml
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("agui").join("agui.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        // No config file found, use defaults
        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}

/// Data-source collaborator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Provider name: "github" or one of the stub modes
    pub provider: String,

    /// Account the github provider reports on
    pub user: String,

    /// API base URL
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Environment variable holding an optional API token
    #[serde(rename = "token-env")]
    pub token_env: String,

    /// Request timeout in milliseconds
    #[serde(rename = "timeout-ms")]
    pub timeout_ms: u64,

    /// Rows in ranked listings
    #[serde(rename = "top-repos")]
    pub top_repos: usize,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            provider: "stub".to_string(),
            user: String::new(),
            base_url: "https://api.github.com".to_string(),
            token_env: "GITHUB_TOKEN".to_string(),
            timeout_ms: 10_000,
            top_repos: 5,
        }
    }
}

/// Event stream configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamConfig {
    /// Event channel capacity per query
    #[serde(rename = "channel-capacity")]
    pub channel_capacity: usize,

    /// Status text for the initial loading event
    #[serde(rename = "loading-message")]
    pub loading_message: String,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 32,
            loading_message: "Analyzing your request...".to_string(),
        }
    }
}
