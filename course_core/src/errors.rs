//! # Error Types
//!
//! Structured error types for course_core. Every failure the solvers can
//! report is recoverable: callers surface the message and drop any stale
//! result from a prior successful call. Nothing here panics, and the
//! deterministic calculations are never worth retrying.
//!
//! ## Example
//!
//! ```rust
//! use course_core::errors::{CourseError, CourseResult};
//!
//! fn validate_joint(joint_mm: f64) -> CourseResult<()> {
//!     if joint_mm < 0.0 {
//!         return Err(CourseError::non_positive(
//!             "mortar_joint_mm",
//!             joint_mm.to_string(),
//!             "Mortar joint must not be negative",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for course_core operations
pub type CourseResult<T> = Result<T, CourseError>;

/// Structured error type for layout calculations and the snapshot store.
///
/// Each variant provides specific context about what went wrong, enabling
/// programmatic handling by any front-end.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CourseError {
    /// A required field is not a finite number
    #[error("Invalid number for '{field}': {value}")]
    InvalidNumber { field: String, value: String },

    /// A dimension, size, or count is out of its valid range
    #[error("Invalid input for '{field}': {value} - {reason}")]
    NonPositiveInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Unit size plus mortar joint collapses to a non-positive pitch
    #[error("Degenerate unit: effective size {effective_mm} mm must be positive")]
    DegenerateUnit { effective_mm: f64 },

    /// Discretizing the ideal count produced zero or fewer units
    #[error("Calculation resulted in zero or fewer {unit_term}")]
    ZeroUnitsResult { unit_term: String },

    /// Snapshot file I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Snapshot schema version mismatch
    #[error("Version mismatch: snapshot version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl CourseError {
    /// Create an InvalidNumber error
    pub fn invalid_number(field: impl Into<String>, value: impl Into<String>) -> Self {
        CourseError::InvalidNumber {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create a NonPositiveInput error
    pub fn non_positive(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CourseError::NonPositiveInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a DegenerateUnit error
    pub fn degenerate_unit(effective_mm: f64) -> Self {
        CourseError::DegenerateUnit { effective_mm }
    }

    /// Create a ZeroUnitsResult error
    pub fn zero_units(unit_term: impl Into<String>) -> Self {
        CourseError::ZeroUnitsResult {
            unit_term: unit_term.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CourseError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CourseError::InvalidNumber { .. } => "INVALID_NUMBER",
            CourseError::NonPositiveInput { .. } => "NON_POSITIVE_INPUT",
            CourseError::DegenerateUnit { .. } => "DEGENERATE_UNIT",
            CourseError::ZeroUnitsResult { .. } => "ZERO_UNITS_RESULT",
            CourseError::FileError { .. } => "FILE_ERROR",
            CourseError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CourseError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}
