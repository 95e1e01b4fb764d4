//! # Dimension Composer (inverse: units → dimension)
//!
//! Composes the total dimension produced by a given unit count. Opening
//! rules charge one joint per unit (coordinating size); everything else
//! charges one joint fewer than the unit count (work size), with any
//! fractional half unit still paying a full joint at its boundary.
//!
//! ## Example
//!
//! ```rust
//! use course_core::calculations::inverse::{calculate, InverseInput};
//! use course_core::calculations::UnitSpec;
//! use course_core::connection::{Connection, LengthConnection};
//!
//! let input = InverseInput {
//!     unit_count: 4.0,
//!     connection: Connection::Length(LengthConnection::BetweenFaces),
//!     spec: UnitSpec::new(215.0, 10.0),
//! };
//!
//! // 4 units + 3 joints = 860 + 30
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.total_dimension_mm, 890.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::{round_mm, UnitSpec};
use crate::connection::Connection;
use crate::errors::{CourseError, CourseResult};
use crate::units::{convert, LengthUnit};

/// Input parameters for the inverse calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InverseInput {
    /// Number of units (whole or half; must be positive)
    pub unit_count: f64,

    /// Connection rule, bound to its axis
    pub connection: Connection,

    /// Unit size and mortar joint along the calculation axis
    pub spec: UnitSpec,
}

impl InverseInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CourseResult<()> {
        if !self.unit_count.is_finite() {
            return Err(CourseError::invalid_number(
                "unit_count",
                self.unit_count.to_string(),
            ));
        }
        self.spec.validate()?;
        if self.unit_count <= 0.0 {
            return Err(CourseError::non_positive(
                "unit_count",
                self.unit_count.to_string(),
                "Unit count must be positive",
            ));
        }
        Ok(())
    }
}

/// Results from the inverse calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InverseResult {
    /// Total composed dimension in millimetres, rounded to 2 decimals
    pub total_dimension_mm: f64,
}

impl InverseResult {
    /// The total dimension converted to a display unit
    pub fn total_dimension(&self, unit: LengthUnit) -> f64 {
        convert(self.total_dimension_mm, LengthUnit::Millimetres, unit)
    }
}

/// Compose the unrounded dimension for a unit count.
///
/// This single routine backs both the public inverse operation and the
/// forward solver's adjusted dimension, which keeps the two joint counts
/// identical and the round-trip exact.
pub(crate) fn composed_dimension_mm(
    unit_count: f64,
    spec: &UnitSpec,
    connection: &Connection,
) -> f64 {
    if connection.is_coordinating() {
        unit_count * spec.unit_size_mm + unit_count * spec.mortar_joint_mm
    } else {
        // Work size: one joint fewer than units. A lone unit (or lone half
        // unit) has no joint; a trailing half unit still costs a full joint.
        let joint_count = (unit_count - 1.0).max(0.0).ceil();
        unit_count * spec.unit_size_mm + joint_count * spec.mortar_joint_mm
    }
}

/// Compose the total dimension for a unit count.
///
/// # Arguments
///
/// * `input` - Unit count, connection rule, and unit spec
///
/// # Returns
///
/// * `Ok(InverseResult)` - Total dimension in mm
/// * `Err(CourseError)` - Structured error if inputs are invalid
pub fn calculate(input: &InverseInput) -> CourseResult<InverseResult> {
    input.validate()?;

    let total = composed_dimension_mm(input.unit_count, &input.spec, &input.connection);

    Ok(InverseResult {
        total_dimension_mm: round_mm(total),
    })
}
