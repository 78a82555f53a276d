//! Error types for Asociar operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for Asociar operations.
///
/// Covers malformed inputs to the association statistics: sequences of
/// unequal length, empty sequences, and ill-shaped pre-tabulated counts.
///
/// # Examples
///
/// ```
/// use asociar::error::AsociarError;
///
/// let err = AsociarError::DimensionMismatch {
///     expected: "6 labels".to_string(),
///     actual: "4 labels".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug)]
pub enum AsociarError {
    /// Input sequence or table dimensions don't match for the operation.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// I/O error (file not found, permission denied, etc.).
    Io(std::io::Error),

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for AsociarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AsociarError::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "Input dimension mismatch: expected {expected}, got {actual}"
                )
            }
            AsociarError::Io(e) => write!(f, "I/O error: {e}"),
            AsociarError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for AsociarError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AsociarError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for AsociarError {
    fn from(err: std::io::Error) -> Self {
        AsociarError::Io(err)
    }
}

impl From<&str> for AsociarError {
    fn from(msg: &str) -> Self {
        AsociarError::Other(msg.to_string())
    }
}

impl From<String> for AsociarError {
    fn from(msg: String) -> Self {
        AsociarError::Other(msg)
    }
}

impl AsociarError {
    /// Create a dimension mismatch error with descriptive context
    #[must_use]
    pub fn dimension_mismatch(context: &str, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            expected: format!("{context}={expected}"),
            actual: format!("{actual}"),
        }
    }

    /// Create an empty input error
    #[must_use]
    pub fn empty_input(context: &str) -> Self {
        Self::Other(format!("empty input: {context}"))
    }
}

#[allow(clippy::cmp_owned)]
impl PartialEq<&str> for AsociarError {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

#[allow(clippy::cmp_owned)]
impl PartialEq<AsociarError> for &str {
    fn eq(&self, other: &AsociarError) -> bool {
        *self == other.to_string()
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, AsociarError>;
