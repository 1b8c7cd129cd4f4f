//! Error types for the bias calculator.
//!
//! The calculation engine itself never fails: [`crate::bias::compute`] and
//! [`crate::load_line::sample`] are total over numeric inputs and let
//! non-finite values propagate. [`BiasError`] covers the surrounding layers:
//! topology selection, opt-in parameter validation, value parsing and output.

use thiserror::Error;

/// Result type alias using [`BiasError`].
pub type Result<T> = std::result::Result<T, BiasError>;

/// Unified error type for all bias calculator operations.
#[derive(Error, Debug)]
pub enum BiasError {
    // ============ Selection Errors ============
    /// Topology name not recognised
    #[error("Unknown topology '{name}' (expected one of: emitter, fixed, divider, mosfet)")]
    UnknownTopology { name: String },

    // ============ Parameter Errors ============
    /// Parameter value rejected by validation
    #[error("Invalid parameter '{param}' = {value}: {message}")]
    InvalidParameter {
        param: String,
        value: f64,
        message: String,
    },

    /// Parameter value outside the control's range
    #[error("Parameter '{param}' = {value} is outside the range [{min}, {max}]")]
    OutOfRange {
        param: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Text could not be parsed as a numeric value
    #[error("Invalid value '{text}' (expected a number with optional suffix such as 100k or 4.7M)")]
    InvalidValue { text: String },

    // ============ Output Errors ============
    /// Failed to serialize results
    #[error("Failed to serialize results: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },

    /// Failed to write results
    #[error("Output error: {message}")]
    OutputError { message: String },
}

impl BiasError {
    /// Create an invalid parameter error
    pub fn invalid_parameter(param: impl Into<String>, value: f64, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            param: param.into(),
            value,
            message: message.into(),
        }
    }

    /// Create an unknown topology error
    pub fn unknown_topology(name: impl Into<String>) -> Self {
        Self::UnknownTopology { name: name.into() }
    }
}
