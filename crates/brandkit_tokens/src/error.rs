//! Token pipeline error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading and resolving token sources
#[derive(Error, Debug)]
pub enum TokenError {
    /// Failed to read a source file
    #[error("failed to read token source {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Source file is not valid JSON
    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A token leaf carried a value that is neither a string nor a number
    #[error("token `{path}` has an unsupported value: {found}")]
    UnsupportedValue { path: String, found: String },

    /// An alias points at a path no token defines
    #[error("token `{path}` references unknown token `{reference}`")]
    UnknownReference { path: String, reference: String },

    /// Aliases form a cycle
    #[error("circular reference: {}", .chain.join(" -> "))]
    CircularReference { chain: Vec<String> },

    /// Unrecognized brand, mode, or format identifier
    #[error("unknown {kind} `{value}`")]
    UnknownId { kind: &'static str, value: String },
}

/// Result type for token pipeline operations
pub type Result<T> = std::result::Result<T, TokenError>;
