//! Error types for the conventioner library.

use thiserror::Error;

/// Main error type for conventioner operations.
///
/// Conversion itself is pure and total over any JSON value; the only
/// fallible surface is parsing a target tag string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConventionerError {
    /// A target tag was not one of the documented tags.
    #[error("unknown target tag '{0}': expected \"_\" or \"PC\"")]
    UnknownTarget(String),
}

/// Result type alias for conventioner operations.
pub type Result<T> = std::result::Result<T, ConventionerError>;
