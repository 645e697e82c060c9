use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{ParleyError, Result};

/// Response used when nothing in the store resembles the input.
pub const DEFAULT_RESPONSE: &str = "I am sorry, but I do not understand.";

/// Top-level configuration for Parley.
///
/// Loaded from `~/.parley/config.toml` by default. Every section falls back
/// to its defaults when missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParleyConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub training: TrainingConfig,
}

impl ParleyConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: ParleyConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }

    /// Reject values the engine or server cannot run with.
    pub fn validate(&self) -> Result<()> {
        let threshold = self.engine.maximum_similarity_threshold;
        if !(threshold > 0.0 && threshold <= 1.0) {
            return Err(ParleyError::Config(format!(
                "engine.maximum_similarity_threshold must be in (0, 1], got {}",
                threshold
            )));
        }
        if self.engine.default_responses.is_empty() {
            return Err(ParleyError::Config(
                "engine.default_responses must not be empty".to_string(),
            ));
        }
        if self.server.port == 0 {
            return Err(ParleyError::Config(
                "server.port must not be 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
    /// Name the bot introduces itself with on the chat page.
    pub bot_name: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            bot_name: "Parley".to_string(),
        }
    }
}

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

impl ServerConfig {
    /// `host:port` string suitable for `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// How two pieces of text are scored against each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparatorKind {
    /// Normalized character edit distance.
    #[default]
    Levenshtein,
    /// Word-set intersection over union.
    Jaccard,
}

/// How one reply is picked when a matched statement has several responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseSelection {
    First,
    #[default]
    MostFrequent,
    Random,
}

/// Conversational engine settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub comparator: ComparatorKind,
    pub response_selection: ResponseSelection,
    /// Stop scanning candidates once a match is at least this close.
    pub maximum_similarity_threshold: f32,
    /// Replies used when no stored statement matches the input.
    pub default_responses: Vec<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            comparator: ComparatorKind::default(),
            response_selection: ResponseSelection::default(),
            maximum_similarity_threshold: 0.95,
            default_responses: vec![DEFAULT_RESPONSE.to_string()],
        }
    }
}

/// Startup training settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    /// Train from the English corpus compiled into the binary.
    pub bundled_corpus: bool,
    /// Additional JSON corpus files to train from, in order.
    pub corpus_files: Vec<PathBuf>,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            bundled_corpus: true,
            corpus_files: Vec::new(),
        }
    }
}
