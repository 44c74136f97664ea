use std::path::PathBuf;
use thiserror::Error;

use crate::vector::Vector;

/// Result type used across the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while parsing commands, building chains or loading files
#[derive(Debug, Error)]
pub enum Error {
    /// Line is not of the form `<letter> <count>`
    #[error("line {line}: malformed command {text:?}, expected \"<R|L|U|D> <count>\"")]
    MalformedCommand { line: usize, text: String },

    #[error("line {line}: unknown direction {letter:?}")]
    UnknownDirection { line: usize, letter: String },

    #[error("line {line}: step count {text:?} is not a non-negative integer")]
    InvalidCount { line: usize, text: String },

    /// A chain needs a head and at least one follower
    #[error("a chain needs at least 2 knots, got {0}")]
    InvalidKnotCount(usize),

    /// Start position outside the `i32` range
    #[error("chain start {0} is outside the 32-bit coordinate range")]
    StartOutOfRange(Vector),

    #[error("render window of {rows}x{cols} cells exceeds the limit of {limit} cells")]
    RenderTooLarge { rows: i64, cols: i64, limit: usize },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("run report: {0}")]
    Report(#[from] serde_json::Error),
}

impl Error {
    /// Attach a line number to a parse error produced without one
    pub(crate) fn at_line(self, line: usize) -> Self {
        match self {
            Error::MalformedCommand { text, .. } => Error::MalformedCommand { line, text },
            Error::UnknownDirection { letter, .. } => Error::UnknownDirection { line, letter },
            Error::InvalidCount { text, .. } => Error::InvalidCount { line, text },
            other => other,
        }
    }
}
