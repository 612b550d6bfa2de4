use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Errors from the durable storage layer.
///
/// A corrupt payload is deliberately not represented here: the repository
/// recovers from it locally by falling back to the seed set. Only conditions
/// the caller may want to surface (a failed durable write, an unreadable
/// path) are errors.
#[derive(Debug, Error, Diagnostic)]
pub enum StoreError {
    #[error("failed to read collection from {}", path.display())]
    #[diagnostic(code(store::read))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write collection to {}", path.display())]
    #[diagnostic(
        code(store::write),
        help("The in-memory collection keeps your changes; fix the storage path and save again")
    )]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create directory {}", path.display())]
    #[diagnostic(code(store::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize collection")]
    #[diagnostic(code(store::serialize))]
    Serialize {
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, StoreError>;
