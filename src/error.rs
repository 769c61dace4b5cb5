use std::path::PathBuf;

use crate::board::Pos;

/// Reasons a requested move is rejected.
///
/// Returned instead of mutating the board; the caller re-prompts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("square ({x}, {y}) is off the board")]
    OutOfBounds { x: i32, y: i32 },

    #[error("square {0} is already occupied")]
    Occupied(Pos),

    #[error("move at {0} brackets no opponent discs")]
    NoBracket(Pos),

    #[error("the game is over")]
    GameOver,

    #[error("it is not this player's turn")]
    NotYourTurn,

    #[error("the engine is still thinking")]
    SearchInFlight,

    #[error("cannot pass while a legal move exists")]
    PassNotAllowed,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        assert_eq!(
            MoveError::OutOfBounds { x: 8, y: -1 }.to_string(),
            "square (8, -1) is off the board"
        );
        assert_eq!(
            MoveError::Occupied(Pos::new(3, 3)).to_string(),
            "square (3, 3) is already occupied"
        );
        assert_eq!(
            MoveError::NoBracket(Pos::new(0, 0)).to_string(),
            "move at (0, 0) brackets no opponent discs"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("search.depth must be between 1 and 8".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: search.depth must be between 1 and 8"
        );
    }
}
