use thiserror::Error;

/// Structural problems with level data, raised before a puzzle is built.
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("level has no cells")]
    Empty,

    #[error("column {column} has {found} cells, expected {expected}")]
    Ragged {
        column: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown cell code: {code}")]
    UnknownCell { code: u8 },

    #[error("invalid symbol {symbol:?} on line {line}")]
    InvalidSymbol { symbol: char, line: usize },

    #[error("level {index} does not exist, pack has {count} levels")]
    UnknownLevel { index: usize, count: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Level(#[from] LevelError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },
}

impl AppError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}
