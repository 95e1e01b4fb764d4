//! # Unit Catalog
//!
//! Named brick and block presets with their coordinating face dimensions,
//! plus the `Custom` sentinel that unlocks free-form entry. Catalog values
//! are read-only reference data; the standard mortar joint constant seeds
//! initial front-end state and is not a core invariant.

use serde::{Deserialize, Serialize};

use crate::connection::Axis;

/// Standard mortar joint thickness in millimetres, used as the initial
/// value in front-ends.
pub const STANDARD_MORTAR_JOINT_MM: f64 = 10.0;

/// Named brick/block preset.
///
/// Each preset carries its face length and height in millimetres. `Custom`
/// has no dimensions of its own; callers supply their own sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum UnitKind {
    /// Standard Brick (UK), 215 x 65 mm
    #[default]
    StandardBrickUk,
    /// Modular Brick (US), 194 x 57 mm
    ModularBrickUs,
    /// Queen Brick (US), 200 x 70 mm
    QueenBrickUs,
    /// King Brick (US), 244 x 70 mm
    KingBrickUs,
    /// Standard Block (UK), 440 x 215 mm
    StandardBlockUk,
    /// Standard Block (US), 397 x 194 mm
    StandardBlockUs,
    /// Custom dimensions - caller supplies sizes
    Custom,
}

impl UnitKind {
    /// All presets for UI selection, `Custom` last
    pub const ALL: [UnitKind; 7] = [
        UnitKind::StandardBrickUk,
        UnitKind::ModularBrickUs,
        UnitKind::QueenBrickUs,
        UnitKind::KingBrickUs,
        UnitKind::StandardBlockUk,
        UnitKind::StandardBlockUs,
        UnitKind::Custom,
    ];

    /// Face dimensions (length_mm, height_mm) for a preset.
    ///
    /// `Custom` returns zeros; the caller must provide actual sizes.
    pub fn dimensions_mm(&self) -> (f64, f64) {
        match self {
            UnitKind::StandardBrickUk => (215.0, 65.0),
            UnitKind::ModularBrickUs => (194.0, 57.0),
            UnitKind::QueenBrickUs => (200.0, 70.0),
            UnitKind::KingBrickUs => (244.0, 70.0),
            UnitKind::StandardBlockUk => (440.0, 215.0),
            UnitKind::StandardBlockUs => (397.0, 194.0),
            UnitKind::Custom => (0.0, 0.0),
        }
    }

    /// Face length in millimetres
    pub fn length_mm(&self) -> f64 {
        self.dimensions_mm().0
    }

    /// Face height in millimetres
    pub fn height_mm(&self) -> f64 {
        self.dimensions_mm().1
    }

    /// The face size measured along an axis
    pub fn size_for(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Length => self.length_mm(),
            Axis::Height => self.height_mm(),
        }
    }

    /// Get display name (e.g., "Standard Brick (UK)")
    pub fn display_name(&self) -> &'static str {
        match self {
            UnitKind::StandardBrickUk => "Standard Brick (UK)",
            UnitKind::ModularBrickUs => "Modular Brick (US)",
            UnitKind::QueenBrickUs => "Queen Brick (US)",
            UnitKind::KingBrickUs => "King Brick (US)",
            UnitKind::StandardBlockUk => "Standard Block (UK)",
            UnitKind::StandardBlockUs => "Standard Block (US)",
            UnitKind::Custom => "Custom Dimensions",
        }
    }

    /// Check if this is the custom sentinel
    pub fn is_custom(&self) -> bool {
        matches!(self, UnitKind::Custom)
    }

    /// Try to match face dimensions back to a preset
    pub fn from_dimensions(length_mm: f64, height_mm: f64) -> Self {
        for kind in Self::ALL.iter() {
            if kind.is_custom() {
                continue;
            }
            let (l, h) = kind.dimensions_mm();
            if (l - length_mm).abs() < 0.01 && (h - height_mm).abs() < 0.01 {
                return *kind;
            }
        }
        UnitKind::Custom
    }
}

impl std::fmt::Display for UnitKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_dimensions() {
        assert_eq!(UnitKind::StandardBrickUk.dimensions_mm(), (215.0, 65.0));
        assert_eq!(UnitKind::StandardBlockUk.dimensions_mm(), (440.0, 215.0));
        assert_eq!(UnitKind::ModularBrickUs.length_mm(), 194.0);
        assert_eq!(UnitKind::KingBrickUs.height_mm(), 70.0);
    }

    #[test]
    fn test_size_for_axis() {
        assert_eq!(UnitKind::StandardBrickUk.size_for(Axis::Length), 215.0);
        assert_eq!(UnitKind::StandardBrickUk.size_for(Axis::Height), 65.0);
    }

    #[test]
    fn test_from_dimensions() {
        assert_eq!(UnitKind::from_dimensions(215.0, 65.0), UnitKind::StandardBrickUk);
        assert_eq!(UnitKind::from_dimensions(397.0, 194.0), UnitKind::StandardBlockUs);
        assert_eq!(UnitKind::from_dimensions(210.0, 65.0), UnitKind::Custom);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(UnitKind::StandardBrickUk.display_name(), "Standard Brick (UK)");
        assert_eq!(UnitKind::Custom.to_string(), "Custom Dimensions");
        assert!(UnitKind::Custom.is_custom());
        assert!(!UnitKind::QueenBrickUs.is_custom());
    }

    #[test]
    fn test_serialization() {
        let kind = UnitKind::StandardBlockUs;
        let json = serde_json::to_string(&kind).unwrap();
        let parsed: UnitKind = serde_json::from_str(&json).unwrap();
        assert_eq!(kind, parsed);
    }
}
