use std::path::Path;

use rand::Rng;

use crate::board::Side;
use crate::engine::Strategy;
use crate::error::ConfigError;

/// Deepest search the front end offers
pub const MAX_DEPTH: u8 = 8;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub search: SearchConfig,
    pub game: GameConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Plies the engine looks ahead
    pub depth: u8,
    pub strategy: Strategy,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 1,
            strategy: Strategy::Minimax,
        }
    }
}

/// Who plays against whom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    /// Human against the engine
    #[default]
    Solo,
    /// Two humans sharing the board
    TwoPlayer,
}

/// Which side opens the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FirstSide {
    #[default]
    Random,
    White,
    Black,
}

impl FirstSide {
    /// Resolve to a concrete side, drawing a coin for `Random`
    pub fn pick(self) -> Side {
        match self {
            FirstSide::White => Side::White,
            FirstSide::Black => Side::Black,
            FirstSide::Random => {
                if rand::rng().random_bool(0.5) {
                    Side::White
                } else {
                    Side::Black
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub mode: GameMode,
    /// Side the human plays in solo games
    pub human_side: Side,
    pub first_side: FirstSide,
    /// Pause before the engine starts thinking
    pub ai_delay_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::Solo,
            human_side: Side::White,
            first_side: FirstSide::Random,
            ai_delay_ms: 500,
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default `tracing` filter, overridden by `RUST_LOG`
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Parse and validate a TOML document
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_DEPTH).contains(&self.search.depth) {
            return Err(ConfigError::Validation(format!(
                "search.depth must be between 1 and {MAX_DEPTH}"
            )));
        }
        if self.game.ai_delay_ms > 10_000 {
            return Err(ConfigError::Validation(
                "game.ai_delay_ms must be at most 10000".to_string(),
            ));
        }
        Ok(())
    }
}
