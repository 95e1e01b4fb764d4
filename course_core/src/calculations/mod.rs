//! # Layout Calculations
//!
//! The two solver directions, each following the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable, with `validate()`)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CourseError>` - Pure function
//!
//! ## Available Calculations
//!
//! - [`forward`] - Target dimension → discretized unit count + adjusted
//!   dimension (Course Solver)
//! - [`inverse`] - Unit count → total dimension (Dimension Composer)
//!
//! Both directions share one joint-counting routine
//! (`inverse::composed_dimension_mm`), so a count produced by the forward
//! solver always composes back to its own adjusted dimension.

pub mod forward;
pub mod inverse;

use serde::{Deserialize, Serialize};

use crate::connection::{Connection, LengthConnection};
use crate::errors::{CourseError, CourseResult};

// Re-export commonly used types
pub use forward::{ForwardInput, ForwardResult};
pub use inverse::{InverseInput, InverseResult};

/// Brick/block size and mortar joint along one axis, in millimetres.
///
/// For a length calculation `unit_size_mm` is the unit's face length; for a
/// height calculation it is the face height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitSpec {
    /// Unit face size along the calculation axis (mm, must be positive)
    pub unit_size_mm: f64,

    /// Mortar joint thickness (mm, must not be negative)
    pub mortar_joint_mm: f64,
}

impl UnitSpec {
    /// Create a new spec
    pub fn new(unit_size_mm: f64, mortar_joint_mm: f64) -> Self {
        UnitSpec {
            unit_size_mm,
            mortar_joint_mm,
        }
    }

    /// The per-unit pitch: unit size plus one joint
    pub fn effective_size_mm(&self) -> f64 {
        self.unit_size_mm + self.mortar_joint_mm
    }

    /// Validate size and joint ranges.
    pub fn validate(&self) -> CourseResult<()> {
        if !self.unit_size_mm.is_finite() {
            return Err(CourseError::invalid_number(
                "unit_size_mm",
                self.unit_size_mm.to_string(),
            ));
        }
        if !self.mortar_joint_mm.is_finite() {
            return Err(CourseError::invalid_number(
                "mortar_joint_mm",
                self.mortar_joint_mm.to_string(),
            ));
        }
        if self.unit_size_mm <= 0.0 {
            return Err(CourseError::non_positive(
                "unit_size_mm",
                self.unit_size_mm.to_string(),
                "Unit size must be positive",
            ));
        }
        if self.mortar_joint_mm < 0.0 {
            return Err(CourseError::non_positive(
                "mortar_joint_mm",
                self.mortar_joint_mm.to_string(),
                "Mortar joint must not be negative",
            ));
        }
        Ok(())
    }
}

/// Round a millimetre dimension to 2 decimal places.
pub(crate) fn round_mm(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// One piece in a course, as drawn by a front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitPiece {
    Full,
    Half,
}

/// The ordered pieces of a course for a discretized unit count.
///
/// Any fractional part shows as one half piece: prepended for
/// `HalfUnitLeft`, appended otherwise. Non-positive or non-finite counts
/// yield an empty course.
pub fn unit_layout(unit_count: f64, connection: &Connection) -> Vec<UnitPiece> {
    if !unit_count.is_finite() || unit_count <= 0.0 {
        return Vec::new();
    }

    let full_units = unit_count.floor() as usize;
    let mut pieces = vec![UnitPiece::Full; full_units];

    if unit_count.fract() != 0.0 {
        match connection {
            Connection::Length(LengthConnection::HalfUnitLeft) => {
                pieces.insert(0, UnitPiece::Half)
            }
            _ => pieces.push(UnitPiece::Half),
        }
    }

    pieces
}
