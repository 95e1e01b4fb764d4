//! # Linear Units
//!
//! Conversion between the supported entry units (millimetres, centimetres,
//! metres). All core calculations run in millimetres; front-ends convert at
//! the edges.
//!
//! ## Precision trim
//!
//! Rescaling can introduce binary floating-point noise (`12.3 cm` →
//! `122.99999999999999 mm`). When a converted value carries more than 5
//! fractional digits it is rounded to 8 significant digits; shorter results
//! are returned untouched so legitimate small values keep their exact form.
//!
//! ## Example
//!
//! ```rust
//! use course_core::units::{convert, LengthUnit};
//!
//! assert_eq!(convert(1.0, LengthUnit::Metres, LengthUnit::Millimetres), 1000.0);
//! assert_eq!(convert(50.0, LengthUnit::Millimetres, LengthUnit::Centimetres), 5.0);
//! ```

use serde::{Deserialize, Serialize};

/// Supported linear units for dimension entry and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LengthUnit {
    /// Millimetres (the internal calculation unit)
    #[default]
    Millimetres,
    /// Centimetres
    Centimetres,
    /// Metres
    Metres,
}

impl LengthUnit {
    /// All units for UI selection
    pub const ALL: [LengthUnit; 3] = [
        LengthUnit::Millimetres,
        LengthUnit::Centimetres,
        LengthUnit::Metres,
    ];

    /// Scale factor to millimetres
    pub fn factor_mm(&self) -> f64 {
        match self {
            LengthUnit::Millimetres => 1.0,
            LengthUnit::Centimetres => 10.0,
            LengthUnit::Metres => 1000.0,
        }
    }

    /// Get the display symbol (e.g., "mm")
    pub fn symbol(&self) -> &'static str {
        match self {
            LengthUnit::Millimetres => "mm",
            LengthUnit::Centimetres => "cm",
            LengthUnit::Metres => "m",
        }
    }
}

impl std::fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Convert a value between linear units.
///
/// Non-finite input (NaN or infinity) yields `0.0` rather than an error:
/// this sits at the caller-sanitization edge, upstream of the solvers'
/// own validation.
pub fn convert(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }

    let value_mm = value * from.factor_mm();
    trim_precision(value_mm / to.factor_mm())
}

/// Round to 8 significant digits when the decimal form carries more than 5
/// fractional digits; otherwise return the value unchanged.
fn trim_precision(value: f64) -> f64 {
    let text = value.to_string();
    match text.split_once('.') {
        Some((_, frac)) if frac.len() > 5 => format!("{value:.7e}").parse().unwrap_or(value),
        _ => value,
    }
}
