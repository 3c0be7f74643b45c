//! # Error Types
//!
//! Structured error types for rebar_core. Every failure a design request
//! can hit is one of these variants, so callers pattern-match on the
//! variant (or its `error_code()`) instead of probing strings.
//!
//! ## Example
//!
//! ```rust
//! use rebar_core::errors::{DesignError, DesignResult};
//!
//! fn validate_width(width_mm: f64) -> DesignResult<()> {
//!     if width_mm <= 0.0 {
//!         return Err(DesignError::InvalidInput {
//!             field: "width_mm".to_string(),
//!             value: width_mm.to_string(),
//!             reason: "Width must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for rebar_core operations
pub type DesignResult<T> = Result<T, DesignError>;

/// Structured error type for section design operations.
///
/// All variants are terminal for a single request and recoverable for the
/// process: a caller retries only by supplying different inputs.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum DesignError {
    /// An input value is invalid (non-positive dimension, cover >= height, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Concrete or rebar grade name not present in the material table
    #[error("Unknown {material} grade: {grade}")]
    UnknownGrade { material: String, grade: String },

    /// The moment exceeds what the section can resist in the
    /// under-reinforced regime (xi > xi_b, or alpha_s > 0.5 making the
    /// governing square root undefined)
    #[error("Section overstressed: moment too large for section; increase section size or concrete grade")]
    SectionOverstressed,

    /// Every catalog diameter fails both single- and double-row width checks
    #[error("No bar arrangement fits: increase section width or change rebar grade")]
    NoArrangementFits,

    /// File I/O error while loading a material table
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// Material table file did not match the expected schema
    #[error("Malformed material table: {reason}")]
    MalformedTable { reason: String },
}

impl DesignError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        DesignError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnknownGrade error
    pub fn unknown_grade(material: impl Into<String>, grade: impl Into<String>) -> Self {
        DesignError::UnknownGrade {
            material: material.into(),
            grade: grade.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        DesignError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a MalformedTable error
    pub fn malformed_table(reason: impl Into<String>) -> Self {
        DesignError::MalformedTable {
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            DesignError::InvalidInput { .. } => "INVALID_INPUT",
            DesignError::UnknownGrade { .. } => "UNKNOWN_GRADE",
            DesignError::SectionOverstressed => "SECTION_OVERSTRESSED",
            DesignError::NoArrangementFits => "NO_ARRANGEMENT_FITS",
            DesignError::FileError { .. } => "FILE_ERROR",
            DesignError::MalformedTable { .. } => "MALFORMED_TABLE",
        }
    }
}
