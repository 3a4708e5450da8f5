use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all gitdep operations.
#[derive(Debug, Error, Diagnostic)]
pub enum GitDepError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or malformed manifest (GitDepend.json).
    #[error("Manifest error: {message}")]
    #[diagnostic(help("Check your GitDepend.json for syntax errors"))]
    Manifest { message: String },

    /// Repository or configuration resolution failed.
    #[error("Resolution failed: {message}")]
    Resolution { message: String },

    /// An external process could not be started or reported failure.
    #[error("Process error: {message}")]
    Process { message: String },

    /// The artifact cache could not be read or written.
    #[error("Cache error: {message}")]
    Cache { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type GitDepResult<T> = miette::Result<T>;
