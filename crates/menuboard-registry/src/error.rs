//! Error types for the registry crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when editing, loading or saving a registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Reading or writing the registry file failed.
    #[error("failed to access '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The registry file is not valid JSON or has the wrong shape.
    #[error("invalid registry file '{path}': {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// No page with the given name exists.
    #[error("page '{0}' not found")]
    PageNotFound(String),

    /// A page with the given name already exists.
    #[error("page '{0}' already exists")]
    DuplicatePage(String),
}

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
