//! Runtime configuration for the shiritori service.

use crate::games::shiritori::{
    DEFAULT_START_SOUND, EngineError, KanaAnalyzer, Lexicon, TurnEngine,
};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Configuration loaded once at process start.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct ShiritoriConfig {
    /// Lexicon JSON file. The built-in vocabulary is used when unset.
    #[serde(default)]
    lexicon_path: Option<PathBuf>,

    /// Analyzer user dictionary (TOML `[[entries]]`).
    #[serde(default)]
    dictionary_path: Option<PathBuf>,

    /// Sound the opening word starts with.
    #[serde(default = "default_start_sound")]
    start_sound: char,

    /// How long to wait for the analyzer before giving up on a turn.
    #[serde(default = "default_analyzer_timeout_ms")]
    analyzer_timeout_ms: u64,
}

#[instrument]
fn default_start_sound() -> char {
    DEFAULT_START_SOUND
}

#[instrument]
fn default_analyzer_timeout_ms() -> u64 {
    3000
}

impl Default for ShiritoriConfig {
    fn default() -> Self {
        Self {
            lexicon_path: None,
            dictionary_path: None,
            start_sound: default_start_sound(),
            analyzer_timeout_ms: default_analyzer_timeout_ms(),
        }
    }
}

impl ShiritoriConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            start_sound = %config.start_sound,
            timeout_ms = config.analyzer_timeout_ms,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads the file if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Overrides the lexicon file.
    pub fn with_lexicon_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.lexicon_path = Some(path.into());
        self
    }

    /// Analyzer timeout as a duration.
    pub fn analyzer_timeout(&self) -> Duration {
        Duration::from_millis(self.analyzer_timeout_ms)
    }

    /// Loads the lexicon this configuration points at.
    #[instrument(skip(self))]
    pub fn load_lexicon(&self) -> Result<Lexicon, EngineError> {
        let lexicon = match &self.lexicon_path {
            Some(path) => Lexicon::from_file(path)?,
            None => Lexicon::builtin()?,
        };
        Ok(lexicon)
    }

    /// Builds the analyzer this configuration points at.
    #[instrument(skip(self))]
    pub fn load_analyzer(&self) -> Result<KanaAnalyzer, EngineError> {
        let analyzer = match &self.dictionary_path {
            Some(path) => KanaAnalyzer::from_dictionary_file(path)?,
            None => KanaAnalyzer::new(),
        };
        Ok(analyzer)
    }

    /// Loads the lexicon and builds an engine around it.
    #[instrument(skip(self))]
    pub fn build_engine(&self) -> Result<TurnEngine, EngineError> {
        let lexicon = Arc::new(self.load_lexicon()?);
        Ok(TurnEngine::with_start_sound(lexicon, self.start_sound))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
