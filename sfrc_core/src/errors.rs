//! # Error Types
//!
//! Structured error types for sfrc_core. Two families matter to the engine:
//!
//! - [`CalcError::InvalidInput`] - the inputs violate basic geometric or
//!   material sanity (`d >= h`, `fc <= 0`, ...). Raised by `validate()`
//!   before any formula is evaluated.
//! - [`CalcError::Domain`] - a derived quantity needs the square root of a
//!   negative number or a division by a (near-)zero denominator. The closed-form
//!   model has no admissible solution for that input combination.
//!
//! Neither is recoverable: the engine is deterministic, so evaluating the same
//! inputs again reproduces the same failure.
//!
//! ## Example
//!
//! ```rust
//! use sfrc_core::errors::{CalcError, CalcResult};
//!
//! fn validate_height(h_mm: f64) -> CalcResult<()> {
//!     if h_mm <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "h_mm",
//!             h_mm.to_string(),
//!             "Height must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_height(-5.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for sfrc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is out of range (non-positive strength, `d >= h`, ...)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A derived quantity has no real value for these inputs
    #[error("Domain error in '{quantity}': {reason}")]
    Domain { quantity: String, reason: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a Domain error
    pub fn domain(quantity: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::Domain {
            quantity: quantity.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// True for errors raised by the analytical engine itself
    pub fn is_engine_error(&self) -> bool {
        matches!(self, CalcError::InvalidInput { .. } | CalcError::Domain { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::Domain { .. } => "DOMAIN_ERROR",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error =
            CalcError::invalid_input("d_mm", "520", "Effective depth must be less than height");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::domain("k21y", "negative radicand").error_code(), "DOMAIN_ERROR");
        assert_eq!(CalcError::serialization("eof").error_code(), "SERIALIZATION_ERROR");
        assert_eq!(
            CalcError::file_error("read", "a.json", "missing").error_code(),
            "FILE_ERROR"
        );
    }

    #[test]
    fn test_engine_errors() {
        assert!(CalcError::domain("Vai", "wb = 0.01").is_engine_error());
        assert!(!CalcError::serialization("bad").is_engine_error());
    }

    #[test]
    fn test_display_mentions_quantity() {
        let error = CalcError::domain("k31", "negative radicand (-2.5)");
        assert_eq!(error.to_string(), "Domain error in 'k31': negative radicand (-2.5)");
    }
}
