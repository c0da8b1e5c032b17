//! Front-end configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tictactoe_rules::Mark;
use tracing::{debug, info, instrument};

/// Configuration file read when `--config` is not given, if it exists.
pub const DEFAULT_CONFIG_PATH: &str = "tictactoe.toml";

/// Front-end settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Where the interactive game writes its log.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Default tracing filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Track the mouse for hover and click.
    #[serde(default = "default_mouse")]
    mouse: bool,

    /// Allow restarting before the game has ended.
    #[serde(default)]
    allow_early_restart: bool,

    /// How each mark is drawn.
    #[serde(default)]
    symbols: Symbols,
}

/// Glyphs drawn for each mark.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Symbols {
    /// Glyph for the first player.
    #[serde(default = "default_x")]
    x: String,
    /// Glyph for the second player.
    #[serde(default = "default_o")]
    o: String,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_mouse() -> bool {
    true
}

fn default_x() -> String {
    "X".to_string()
}

fn default_o() -> String {
    "O".to_string()
}

impl Default for Symbols {
    fn default() -> Self {
        Self {
            x: default_x(),
            o: default_o(),
        }
    }
}

impl Symbols {
    /// Glyph for a mark.
    pub fn symbol(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => &self.x,
            Mark::O => &self.o,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            log_filter: default_log_filter(),
            mouse: default_mouse(),
            allow_early_restart: false,
            symbols: Symbols::default(),
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        info!("Config loaded successfully");
        Ok(config)
    }

    /// Loads the explicit path if given, else the default path if it exists,
    /// else built-in defaults.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::from_file(DEFAULT_CONFIG_PATH),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Replaces the log file path.
    pub fn with_log_file(mut self, log_file: PathBuf) -> Self {
        self.log_file = log_file;
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let Symbols { x, o } = &self.symbols;
        if x.trim().is_empty() || o.trim().is_empty() {
            return Err(ConfigError::new("Symbols must not be blank"));
        }
        if x == o {
            return Err(ConfigError::new(format!(
                "Both players would be drawn as {:?}",
                x
            )));
        }
        Ok(())
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
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
