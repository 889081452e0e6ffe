//! # Error Types
//!
//! Structured error types for ride_core. Every failure carries enough context
//! (which field, what value, why) for a caller to turn it into a validation
//! message without parsing strings.
//!
//! ## Example
//!
//! ```rust
//! use ride_core::errors::{CalcError, CalcResult};
//!
//! fn validate_air_density(rho: f64) -> CalcResult<()> {
//!     if rho <= 0.0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "air_density_kg_m3".to_string(),
//!             value: rho.to_string(),
//!             reason: "Air density must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for ride_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is out of its domain (non-positive height, NaN, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Calculation produced an unusable result
    #[error("Calculation failed: {calculation_type} - {reason}")]
    CalculationFailed {
        calculation_type: String,
        reason: String,
    },

    /// File I/O error (settings files)
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create a CalculationFailed error
    pub fn calculation_failed(calculation_type: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::CalculationFailed {
            calculation_type: calculation_type.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// True for out-of-domain input, the only kind a caller can fix by re-entering values
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, CalcError::InvalidInput { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::CalculationFailed { .. } => "CALCULATION_FAILED",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(e: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("height_m", "-5", "Height must be at least 1 m");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::missing_field("ride_type").error_code(), "MISSING_FIELD");
        assert_eq!(
            CalcError::calculation_failed("Wind Load", "non-finite").error_code(),
            "CALCULATION_FAILED"
        );
        assert!(CalcError::invalid_input("x", "0", "bad").is_invalid_input());
        assert!(!CalcError::missing_field("x").is_invalid_input());
    }

    #[test]
    fn test_display_message() {
        let error = CalcError::invalid_input("air_density_kg_m3", "0", "Air density must be positive");
        assert_eq!(
            error.to_string(),
            "Invalid input for 'air_density_kg_m3': 0 - Air density must be positive"
        );
    }

    #[test]
    fn test_from_serde_error() {
        let parse: Result<u32, _> = serde_json::from_str("not json");
        let error: CalcError = parse.unwrap_err().into();
        assert_eq!(error.error_code(), "SERIALIZATION_ERROR");
    }
}
