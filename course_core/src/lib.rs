//! # course_core - Masonry Course Layout Engine
//!
//! `course_core` is the computational heart of Coursework, converting between
//! wall dimensions and brick/block counts along two independent axes:
//! horizontal (length, half-units permitted) and vertical (height, whole
//! courses only).
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Parse, don't validate**: connection rules are closed enumerations
//!   keyed by axis, so invalid axis/rule pairings cannot be expressed
//!
//! ## Quick Start
//!
//! ```rust
//! use course_core::calculations::forward::{calculate, ForwardInput};
//! use course_core::calculations::UnitSpec;
//! use course_core::connection::{Connection, LengthConnection};
//! use course_core::units::LengthUnit;
//!
//! // How many standard UK bricks fit a 1000 mm wall between faces?
//! let input = ForwardInput {
//!     target_dimension: 1000.0,
//!     input_unit: LengthUnit::Millimetres,
//!     connection: Connection::Length(LengthConnection::BetweenFaces),
//!     spec: UnitSpec {
//!         unit_size_mm: 215.0,
//!         mortar_joint_mm: 10.0,
//!     },
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.units_required, 4.5);
//! assert_eq!(result.adjusted_dimension_mm, 1007.5);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Forward (dimension → units) and inverse (units →
//!   dimension) solvers
//! - [`connection`] - Axes and per-axis connection rules
//! - [`catalog`] - Named brick/block presets and the standard joint default
//! - [`units`] - Linear unit conversion (mm/cm/m)
//! - [`snapshot`] - Save/restore of the last-used parameter set
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod catalog;
pub mod connection;
pub mod errors;
pub mod snapshot;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::UnitSpec;
pub use connection::{Axis, Connection, HeightConnection, LengthConnection};
pub use errors::{CourseError, CourseResult};
pub use snapshot::{load_snapshot, save_snapshot, Parameters, Snapshot};
