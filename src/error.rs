//! Error types for the oxo crate

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the oxo crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid action ({row}, {col}): {reason}")]
    InvalidAction {
        row: usize,
        col: usize,
        reason: &'static str,
    },

    #[error("game already over")]
    GameOver,

    #[error("board string must have {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid action '{input}' (expected two numbers 0-2: 'row col')")]
    InvalidActionFormat { input: String },

    #[error("board cannot arise from legal play: {reason}")]
    UnreachableBoard { reason: String },

    #[error("failed to load config '{}': {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
