//! # Course Solver (forward: dimension → units)
//!
//! Maps a continuous target dimension to a discrete, physically buildable
//! unit count, then reports the adjusted dimension that count actually
//! produces.
//!
//! Discretization reflects the half-unit granularity of a cut brick: length
//! counts land on the nearest half unit, height counts on the nearest whole
//! course. The half-unit rules instead pick the nearest count ending in .5,
//! supporting bond patterns that must start or end on a half unit regardless
//! of which count is numerically closest.
//!
//! ## Example
//!
//! ```rust
//! use course_core::calculations::forward::{calculate, ForwardInput};
//! use course_core::calculations::UnitSpec;
//! use course_core::connection::{Connection, HeightConnection};
//! use course_core::units::LengthUnit;
//!
//! // Courses of standard UK brick to reach a 1 m wall top
//! let input = ForwardInput {
//!     target_dimension: 1000.0,
//!     input_unit: LengthUnit::Millimetres,
//!     connection: Connection::Height(HeightConnection::Overall),
//!     spec: UnitSpec::new(65.0, 10.0),
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.units_required, 13.0);
//! assert_eq!(result.adjusted_dimension_mm, 965.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::inverse::composed_dimension_mm;
use crate::calculations::{round_mm, UnitSpec};
use crate::connection::{Axis, Connection};
use crate::errors::{CourseError, CourseResult};
use crate::units::{convert, LengthUnit};

/// Input parameters for the forward calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "target_dimension": 1000.0,
///   "input_unit": "Millimetres",
///   "connection": { "axis": "Length", "rule": "BetweenFaces" },
///   "spec": { "unit_size_mm": 215.0, "mortar_joint_mm": 10.0 }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForwardInput {
    /// Target dimension in `input_unit` (must be positive)
    pub target_dimension: f64,

    /// Unit the target dimension is expressed in
    pub input_unit: LengthUnit,

    /// Connection rule, bound to its axis
    pub connection: Connection,

    /// Unit size and mortar joint along the calculation axis
    pub spec: UnitSpec,
}

impl ForwardInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CourseResult<()> {
        if !self.target_dimension.is_finite() {
            return Err(CourseError::invalid_number(
                "target_dimension",
                self.target_dimension.to_string(),
            ));
        }
        self.spec.validate()?;
        if self.target_dimension <= 0.0 {
            return Err(CourseError::non_positive(
                "target_dimension",
                self.target_dimension.to_string(),
                "Target dimension must be positive",
            ));
        }
        Ok(())
    }
}

/// Results from the forward calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForwardResult {
    /// Discretized unit count: a multiple of 0.5 on the length axis, an
    /// integer on the height axis
    pub units_required: f64,

    /// Dimension the discretized count actually produces (mm, rounded to
    /// 2 decimals)
    pub adjusted_dimension_mm: f64,
}

impl ForwardResult {
    /// The adjusted dimension converted to a display unit
    pub fn adjusted_dimension(&self, unit: LengthUnit) -> f64 {
        convert(self.adjusted_dimension_mm, LengthUnit::Millimetres, unit)
    }
}

/// Solve a target dimension for the required unit count.
///
/// # Arguments
///
/// * `input` - Target dimension, connection rule, and unit spec
///
/// # Returns
///
/// * `Ok(ForwardResult)` - Discretized count and adjusted dimension
/// * `Err(CourseError)` - Structured error if inputs are invalid or the
///   target rounds to zero units
pub fn calculate(input: &ForwardInput) -> CourseResult<ForwardResult> {
    input.validate()?;

    let target_mm = convert(input.target_dimension, input.input_unit, LengthUnit::Millimetres);

    let pitch_mm = input.spec.effective_size_mm();
    if pitch_mm <= 0.0 {
        // Unreachable with a validated spec, but the division below must
        // never see a non-positive pitch.
        return Err(CourseError::degenerate_unit(pitch_mm));
    }

    // Coordinating targets already span outer mortar face to outer mortar
    // face; work-size targets get one joint added back before dividing by
    // the per-unit pitch.
    let ideal_units = if input.connection.is_coordinating() {
        target_mm / pitch_mm
    } else {
        (target_mm + input.spec.mortar_joint_mm) / pitch_mm
    };

    let units_required = discretize(ideal_units, &input.connection);

    if units_required <= 0.0 {
        return Err(CourseError::zero_units(
            input.connection.axis().unit_term().to_lowercase(),
        ));
    }

    let adjusted = composed_dimension_mm(units_required, &input.spec, &input.connection);

    Ok(ForwardResult {
        units_required,
        adjusted_dimension_mm: round_mm(adjusted),
    })
}

/// Snap a continuous unit count to a buildable one.
fn discretize(ideal_units: f64, connection: &Connection) -> f64 {
    if connection.forces_half_unit() {
        // Nearest count ending in .5, never below a lone half unit.
        let full_units = (ideal_units - 0.5).round();
        (full_units + 0.5).max(0.5)
    } else {
        match connection.axis() {
            Axis::Length => (ideal_units * 2.0).round() / 2.0,
            Axis::Height => ideal_units.round(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::{HeightConnection, LengthConnection};

    fn brick_spec() -> UnitSpec {
        UnitSpec::new(215.0, 10.0)
    }

    fn forward(target: f64, connection: Connection, spec: UnitSpec) -> ForwardInput {
        ForwardInput {
            target_dimension: target,
            input_unit: LengthUnit::Millimetres,
            connection,
            spec,
        }
    }

    #[test]
    fn test_between_faces_scenario() {
        // ideal = (1000 + 10) / 225 = 4.488..., nearest half = 4.5
        // adjusted = 4.5 x 215 + ceil(3.5) x 10 = 967.5 + 40 = 1007.5
        let input = forward(
            1000.0,
            Connection::Length(LengthConnection::BetweenFaces),
            brick_spec(),
        );
        let result = calculate(&input).unwrap();
        assert_eq!(result.units_required, 4.5);
        assert_eq!(result.adjusted_dimension_mm, 1007.5);
    }

    #[test]
    fn test_opening_size_scenario() {
        // ideal = 1000 / 225 = 4.444..., nearest half = 4.5
        // adjusted = 4.5 x 215 + 4.5 x 10 = 1012.5
        let input = forward(
            1000.0,
            Connection::Length(LengthConnection::OpeningSize),
            brick_spec(),
        );
        let result = calculate(&input).unwrap();
        assert_eq!(result.units_required, 4.5);
        assert_eq!(result.adjusted_dimension_mm, 1012.5);
    }

    #[test]
    fn test_height_overall_scenario() {
        // ideal = (1000 + 10) / 75 = 13.47, nearest course = 13
        // adjusted = 13 x 65 + 12 x 10 = 965
        let input = forward(
            1000.0,
            Connection::Height(HeightConnection::Overall),
            UnitSpec::new(65.0, 10.0),
        );
        let result = calculate(&input).unwrap();
        assert_eq!(result.units_required, 13.0);
        assert_eq!(result.adjusted_dimension_mm, 965.0);
    }

    #[test]
    fn test_centimetre_input() {
        let input = ForwardInput {
            target_dimension: 100.0,
            input_unit: LengthUnit::Centimetres,
            connection: Connection::Length(LengthConnection::BetweenFaces),
            spec: brick_spec(),
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.units_required, 4.5);
        assert_eq!(result.adjusted_dimension_mm, 1007.5);
        assert_eq!(result.adjusted_dimension(LengthUnit::Centimetres), 100.75);
    }

    #[test]
    fn test_half_unit_forcing_property() {
        // Whatever the target, the forced rules must land on .5.
        for rule in [LengthConnection::HalfUnitLeft, LengthConnection::HalfUnitRight] {
            let mut target = 40.0;
            while target < 2000.0 {
                let input = forward(target, Connection::Length(rule), brick_spec());
                let result = calculate(&input).unwrap();
                assert_eq!(
                    result.units_required.fract(),
                    0.5,
                    "target {target} gave {}",
                    result.units_required
                );
                target += 37.0;
            }
        }
    }

    #[test]
    fn test_half_unit_forcing_minimum() {
        // A tiny target still yields at least a lone half unit.
        let input = forward(
            1.0,
            Connection::Length(LengthConnection::HalfUnitLeft),
            brick_spec(),
        );
        let result = calculate(&input).unwrap();
        assert_eq!(result.units_required, 0.5);
        assert_eq!(result.adjusted_dimension_mm, 107.5);
    }

    #[test]
    fn test_forced_half_overrides_nearest() {
        // ideal = 475 / 100 = 4.75: plain rounding gives 5.0, the forced
        // rule steps back to 4.5.
        let spec = UnitSpec::new(100.0, 0.0);
        let plain = forward(475.0, Connection::Length(LengthConnection::Overall), spec);
        assert_eq!(calculate(&plain).unwrap().units_required, 5.0);

        let forced = forward(475.0, Connection::Length(LengthConnection::HalfUnitRight), spec);
        assert_eq!(calculate(&forced).unwrap().units_required, 4.5);
    }

    #[test]
    fn test_height_whole_courses_property() {
        for rule in [HeightConnection::Overall, HeightConnection::Opening] {
            let mut target = 40.0;
            while target < 3000.0 {
                let input = forward(target, Connection::Height(rule), UnitSpec::new(65.0, 10.0));
                let result = calculate(&input).unwrap();
                assert_eq!(
                    result.units_required.fract(),
                    0.0,
                    "target {target} gave {}",
                    result.units_required
                );
                target += 53.0;
            }
        }
    }

    #[test]
    fn test_monotonicity() {
        let mut previous = 0.0;
        let mut target = 50.0;
        while target <= 3000.0 {
            let input = forward(
                target,
                Connection::Length(LengthConnection::BetweenFaces),
                brick_spec(),
            );
            let units = calculate(&input).unwrap().units_required;
            assert!(
                units >= previous,
                "units dropped from {previous} to {units} at target {target}"
            );
            previous = units;
            target += 10.0;
        }
    }

    #[test]
    fn test_round_trip_work_size() {
        use crate::calculations::inverse::{self, InverseInput};

        // Compose a dimension from a count, then solve it back.
        let mut count = 0.5;
        while count <= 12.0 {
            let composed = inverse::calculate(&InverseInput {
                unit_count: count,
                connection: Connection::Length(LengthConnection::BetweenFaces),
                spec: brick_spec(),
            })
            .unwrap();

            let solved = calculate(&forward(
                composed.total_dimension_mm,
                Connection::Length(LengthConnection::BetweenFaces),
                brick_spec(),
            ))
            .unwrap();

            assert_eq!(
                solved.units_required, count,
                "round trip through {} mm",
                composed.total_dimension_mm
            );
            assert_eq!(solved.adjusted_dimension_mm, composed.total_dimension_mm);
            count += 0.5;
        }
    }

    #[test]
    fn test_round_trip_coordinating() {
        use crate::calculations::inverse::{self, InverseInput};

        for count in 1..=15 {
            let count = count as f64;
            let composed = inverse::calculate(&InverseInput {
                unit_count: count,
                connection: Connection::Height(HeightConnection::Opening),
                spec: UnitSpec::new(65.0, 10.0),
            })
            .unwrap();

            let solved = calculate(&forward(
                composed.total_dimension_mm,
                Connection::Height(HeightConnection::Opening),
                UnitSpec::new(65.0, 10.0),
            ))
            .unwrap();

            assert_eq!(solved.units_required, count);
        }
    }

    #[test]
    fn test_tiny_target_yields_zero_units_error() {
        let input = forward(
            1.0,
            Connection::Length(LengthConnection::BetweenFaces),
            brick_spec(),
        );
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.error_code(), "ZERO_UNITS_RESULT");
        assert!(err.to_string().contains("units"));

        let input = forward(
            1.0,
            Connection::Height(HeightConnection::Overall),
            UnitSpec::new(65.0, 10.0),
        );
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.error_code(), "ZERO_UNITS_RESULT");
        assert!(err.to_string().contains("courses"));
    }

    #[test]
    fn test_negative_joint_rejected() {
        let input = forward(
            1000.0,
            Connection::Length(LengthConnection::BetweenFaces),
            UnitSpec::new(215.0, -1.0),
        );
        assert_eq!(
            calculate(&input).unwrap_err().error_code(),
            "NON_POSITIVE_INPUT"
        );
    }

    #[test]
    fn test_non_finite_inputs_rejected() {
        let input = forward(
            f64::NAN,
            Connection::Length(LengthConnection::BetweenFaces),
            brick_spec(),
        );
        assert_eq!(calculate(&input).unwrap_err().error_code(), "INVALID_NUMBER");

        let input = forward(
            1000.0,
            Connection::Length(LengthConnection::BetweenFaces),
            UnitSpec::new(f64::INFINITY, 10.0),
        );
        assert_eq!(calculate(&input).unwrap_err().error_code(), "INVALID_NUMBER");
    }

    #[test]
    fn test_non_positive_target_rejected() {
        for target in [0.0, -100.0] {
            let input = forward(
                target,
                Connection::Length(LengthConnection::BetweenFaces),
                brick_spec(),
            );
            assert_eq!(
                calculate(&input).unwrap_err().error_code(),
                "NON_POSITIVE_INPUT"
            );
        }
    }

    #[test]
    fn test_zero_unit_size_rejected() {
        let input = forward(
            1000.0,
            Connection::Length(LengthConnection::BetweenFaces),
            UnitSpec::new(0.0, 10.0),
        );
        assert_eq!(
            calculate(&input).unwrap_err().error_code(),
            "NON_POSITIVE_INPUT"
        );
    }

    #[test]
    fn test_serialization_roundtrip() {
        let input = forward(
            1000.0,
            Connection::Length(LengthConnection::BetweenFaces),
            brick_spec(),
        );
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: ForwardInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input.target_dimension, roundtrip.target_dimension);
        assert_eq!(input.connection, roundtrip.connection);

        let result = calculate(&input).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("units_required"));
        assert!(json.contains("adjusted_dimension_mm"));
    }
}
