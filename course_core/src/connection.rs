//! # Axes and Connection Rules
//!
//! A layout runs along one of two axes: horizontal length (units may be
//! halved) or vertical height (whole courses only). Each axis has its own
//! closed set of connection rules describing how the boundary courses are
//! treated, and the [`Connection`] type joins rule to axis so a height rule
//! can never be paired with a length calculation.
//!
//! ## Work size vs coordinating size
//!
//! Most rules measure the work size: N units separated by N−1 joints. The
//! opening rules measure the coordinating size: a joint around every unit
//! (N units + N joints), as used for window and door openings.
//!
//! ## Example
//!
//! ```rust
//! use course_core::connection::{Axis, Connection, LengthConnection};
//!
//! let conn = Connection::Length(LengthConnection::OpeningSize);
//! assert_eq!(conn.axis(), Axis::Length);
//! assert!(conn.is_coordinating());
//! assert!(!conn.forces_half_unit());
//! ```

use serde::{Deserialize, Serialize};

/// Calculation axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Axis {
    /// Horizontal: wall length, units may end in a half
    #[default]
    Length,
    /// Vertical: wall height, whole courses only
    Height,
}

impl Axis {
    /// Both axes for UI selection
    pub const ALL: [Axis; 2] = [Axis::Length, Axis::Height];

    /// Get the display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Axis::Length => "Length",
            Axis::Height => "Height",
        }
    }

    /// Term used for the measured dimension on this axis
    pub fn dimension_term(&self) -> &'static str {
        match self {
            Axis::Length => "Dimension",
            Axis::Height => "Height",
        }
    }

    /// Term used for the counted pieces on this axis
    pub fn unit_term(&self) -> &'static str {
        match self {
            Axis::Length => "Units",
            Axis::Height => "Courses",
        }
    }

    /// Whether counts on this axis may end in a half unit
    pub fn allows_half_units(&self) -> bool {
        matches!(self, Axis::Length)
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Connection rules available on the length axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LengthConnection {
    /// Wall between two faces: work size, joints on neither end
    #[default]
    BetweenFaces,
    /// Standalone wall measured overall: same joint count as BetweenFaces
    Overall,
    /// Window/door opening: coordinating size, a joint around every unit
    OpeningSize,
    /// Bond starts with a half unit on the left
    HalfUnitLeft,
    /// Bond ends with a half unit on the right
    HalfUnitRight,
}

impl LengthConnection {
    /// All length rules for UI selection
    pub const ALL: [LengthConnection; 5] = [
        LengthConnection::BetweenFaces,
        LengthConnection::Overall,
        LengthConnection::OpeningSize,
        LengthConnection::HalfUnitLeft,
        LengthConnection::HalfUnitRight,
    ];
}

/// Connection rules available on the height axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum HeightConnection {
    /// Complete wall, measured to the top of the final course (no joint on top)
    #[default]
    Overall,
    /// Opening measured to the underside of the lintel (joint on top included)
    Opening,
}

impl HeightConnection {
    /// All height rules for UI selection
    pub const ALL: [HeightConnection; 2] = [HeightConnection::Overall, HeightConnection::Opening];
}

/// A connection rule bound to its axis.
///
/// Serializes with an explicit axis tag:
///
/// ```json
/// { "axis": "Length", "rule": "BetweenFaces" }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "axis", content = "rule")]
pub enum Connection {
    Length(LengthConnection),
    Height(HeightConnection),
}

impl Connection {
    /// The axis this rule belongs to
    pub fn axis(&self) -> Axis {
        match self {
            Connection::Length(_) => Axis::Length,
            Connection::Height(_) => Axis::Height,
        }
    }

    /// Whether this rule measures the coordinating size (a joint around
    /// every unit) rather than the work size (one joint fewer than units).
    pub fn is_coordinating(&self) -> bool {
        matches!(
            self,
            Connection::Length(LengthConnection::OpeningSize)
                | Connection::Height(HeightConnection::Opening)
        )
    }

    /// Whether this rule forces the count to end in a half unit
    pub fn forces_half_unit(&self) -> bool {
        matches!(
            self,
            Connection::Length(LengthConnection::HalfUnitLeft)
                | Connection::Length(LengthConnection::HalfUnitRight)
        )
    }

    /// Short masonry code (CO- / CO / CO+ on the length axis)
    pub fn code(&self) -> &'static str {
        match self {
            Connection::Length(LengthConnection::BetweenFaces) => "CO-",
            Connection::Length(LengthConnection::Overall) => "CO",
            Connection::Length(LengthConnection::OpeningSize) => "CO+",
            Connection::Length(LengthConnection::HalfUnitLeft) => "Half Unit Left",
            Connection::Length(LengthConnection::HalfUnitRight) => "Half Unit Right",
            Connection::Height(HeightConnection::Overall) => "Overall",
            Connection::Height(HeightConnection::Opening) => "Opening",
        }
    }

    /// Longer description suitable for tooltips or help text
    pub fn description(&self) -> &'static str {
        match self {
            Connection::Length(LengthConnection::BetweenFaces) => {
                "Between faces: wall built between two existing points"
            }
            Connection::Length(LengthConnection::Overall) => {
                "Overall length: standalone wall measured end to end"
            }
            Connection::Length(LengthConnection::OpeningSize) => {
                "Opening size: window or door opening, joint on both sides"
            }
            Connection::Length(LengthConnection::HalfUnitLeft) => {
                "Forces the course to start with a half unit"
            }
            Connection::Length(LengthConnection::HalfUnitRight) => {
                "Forces the course to end with a half unit"
            }
            Connection::Height(HeightConnection::Overall) => {
                "Complete wall, measured to the top of the final course"
            }
            Connection::Height(HeightConnection::Opening) => {
                "Opening measured to the underside of the lintel, joint on top included"
            }
        }
    }

    /// The default rule for an axis
    pub fn default_for(axis: Axis) -> Self {
        match axis {
            Axis::Length => Connection::Length(LengthConnection::default()),
            Axis::Height => Connection::Height(HeightConnection::default()),
        }
    }

    /// All rules for an axis, in UI order
    pub fn all_for(axis: Axis) -> Vec<Connection> {
        match axis {
            Axis::Length => LengthConnection::ALL.iter().copied().map(Connection::Length).collect(),
            Axis::Height => HeightConnection::ALL.iter().copied().map(Connection::Height).collect(),
        }
    }
}

impl std::fmt::Display for Connection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
