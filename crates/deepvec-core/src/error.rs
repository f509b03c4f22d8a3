//! Error types and result aliases for deep cloning.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for list cloning operations.
#[derive(Error, Debug, Diagnostic)]
pub enum CloneError {
    /// The source list reference was absent.
    #[error("source list is missing")]
    #[diagnostic(code(deepvec::missing_source))]
    MissingSource,
}

/// Result type alias using the [`CloneError`] type.
pub type Result<T> = std::result::Result<T, CloneError>;
