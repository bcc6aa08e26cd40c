//! Submodule defining the errors used across the crate.

use crate::sql::ParseError;

/// Errors that can occur while converting a dump statement.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The statement does not match the grammar.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Reading the input or writing the output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Serializing the statement as JSON failed.
    #[cfg(feature = "json")]
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
