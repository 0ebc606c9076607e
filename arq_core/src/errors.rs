//! # Error Types
//!
//! Structured error types for arq_core. The calculators themselves never
//! fail (see the crate docs on best-effort results); errors only arise at
//! the edges - parsing unit names from user text, mixing dimensions in a
//! conversion request, and identity-provider operations.
//!
//! ## Example
//!
//! ```rust
//! use arq_core::errors::{ArqError, ArqResult};
//! use arq_core::units::LengthUnit;
//!
//! fn parse_unit(s: &str) -> ArqResult<LengthUnit> {
//!     LengthUnit::from_str_flexible(s)
//! }
//!
//! assert!(parse_unit("furlong").is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::units::Dimension;

/// Result type alias for arq_core operations
pub type ArqResult<T> = Result<T, ArqError>;

/// Structured error type for the library's fallible edges.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic handling by UI layers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum ArqError {
    /// A unit name could not be parsed for the given dimension
    #[error("Unknown {dimension} unit: {name}")]
    UnknownUnit { dimension: Dimension, name: String },

    /// A conversion request mixed units of different dimensions
    #[error("Cannot convert {from} to {to}: dimensions differ")]
    DimensionMismatch { from: Dimension, to: Dimension },

    /// An identity-provider operation failed (bad credentials, etc.)
    ///
    /// The reason is human-readable and safe to show to the user.
    #[error("Authentication failed: {reason}")]
    AuthFailed { reason: String },
}

impl ArqError {
    /// Create an UnknownUnit error
    pub fn unknown_unit(dimension: Dimension, name: impl Into<String>) -> Self {
        ArqError::UnknownUnit {
            dimension,
            name: name.into(),
        }
    }

    /// Create an AuthFailed error
    pub fn auth_failed(reason: impl Into<String>) -> Self {
        ArqError::AuthFailed {
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ArqError::UnknownUnit { .. } => "UNKNOWN_UNIT",
            ArqError::DimensionMismatch { .. } => "DIMENSION_MISMATCH",
            ArqError::AuthFailed { .. } => "AUTH_FAILED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = ArqError::unknown_unit(Dimension::Length, "furlong");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: ArqError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        // The library's fallible edges are exactly these three: unit-name
        // parsing, mixed-dimension conversion, and the identity provider.
        let every_variant = [
            ArqError::unknown_unit(Dimension::Length, "furlong"),
            ArqError::DimensionMismatch {
                from: Dimension::Length,
                to: Dimension::Area,
            },
            ArqError::auth_failed("bad password"),
        ];
        let codes: Vec<_> = every_variant.iter().map(|e| e.error_code()).collect();
        assert_eq!(codes, ["UNKNOWN_UNIT", "DIMENSION_MISMATCH", "AUTH_FAILED"]);
    }

    #[test]
    fn test_error_display() {
        let error = ArqError::DimensionMismatch {
            from: Dimension::Length,
            to: Dimension::Area,
        };
        assert_eq!(error.to_string(), "Cannot convert length to area: dimensions differ");
    }
}
