//! # Snapshot Store
//!
//! Save/restore of the last-used parameter set. The snapshot is a flat
//! JSON record written with atomic semantics (write to .tmp, fsync, rename)
//! so an interrupted save never corrupts an existing file. The core holds
//! no persisted state of its own; front-ends decide when to save and load,
//! and surface any failure as a status message.
//!
//! ## Example
//!
//! ```rust,no_run
//! use course_core::snapshot::{load_snapshot, save_snapshot, Parameters, Snapshot};
//! use std::path::Path;
//!
//! let snapshot = Snapshot::new(Parameters::default());
//! save_snapshot(&snapshot, Path::new("coursework.json"))?;
//!
//! let restored = load_snapshot(Path::new("coursework.json"))?;
//! assert_eq!(restored.params.target_dimension, 1000.0);
//! # Ok::<(), course_core::errors::CourseError>(())
//! ```

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::calculations::UnitSpec;
use crate::catalog::{UnitKind, STANDARD_MORTAR_JOINT_MM};
use crate::connection::{Axis, Connection};
use crate::errors::{CourseError, CourseResult};
use crate::units::LengthUnit;

/// Current schema version for snapshot files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Which direction the front-end is calculating in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CalcMode {
    /// Target dimension → unit count
    #[default]
    FromDimension,
    /// Unit count → total dimension
    FromUnits,
}

impl CalcMode {
    /// Both modes for UI selection
    pub const ALL: [CalcMode; 2] = [CalcMode::FromDimension, CalcMode::FromUnits];
}

/// The full last-used input set, as one flat record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameters {
    /// Calculation axis
    pub axis: Axis,

    /// Calculation direction
    pub mode: CalcMode,

    /// Selected catalog preset (or Custom)
    pub unit_kind: UnitKind,

    /// Unit face length in millimetres
    pub unit_length_mm: f64,

    /// Unit face height in millimetres
    pub unit_height_mm: f64,

    /// Mortar joint thickness in millimetres
    pub mortar_joint_mm: f64,

    /// Connection rule (carries its own axis tag)
    pub connection: Connection,

    /// Target dimension for FromDimension mode, in `input_unit`
    pub target_dimension: f64,

    /// Unit the target dimension is expressed in
    pub input_unit: LengthUnit,

    /// Unit count for FromUnits mode
    pub unit_count: f64,

    /// Unit used when displaying dimension results
    pub output_unit: LengthUnit,
}

impl Parameters {
    /// The unit spec for the stored axis: face length for Length, face
    /// height for Height, each paired with the stored joint.
    pub fn unit_spec(&self) -> UnitSpec {
        let unit_size_mm = match self.axis {
            Axis::Length => self.unit_length_mm,
            Axis::Height => self.unit_height_mm,
        };
        UnitSpec::new(unit_size_mm, self.mortar_joint_mm)
    }
}

impl Default for Parameters {
    fn default() -> Self {
        let kind = UnitKind::default();
        Parameters {
            axis: Axis::Length,
            mode: CalcMode::FromDimension,
            unit_kind: kind,
            unit_length_mm: kind.length_mm(),
            unit_height_mm: kind.height_mm(),
            mortar_joint_mm: STANDARD_MORTAR_JOINT_MM,
            connection: Connection::default_for(Axis::Length),
            target_dimension: 1000.0,
            input_unit: LengthUnit::Millimetres,
            unit_count: 4.0,
            output_unit: LengthUnit::Millimetres,
        }
    }
}

/// Snapshot file metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// When the snapshot was saved
    pub saved: DateTime<Utc>,
}

/// A saved parameter set with its file metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// File metadata
    pub meta: SnapshotMetadata,

    /// The saved parameters
    pub params: Parameters,
}

impl Snapshot {
    /// Wrap a parameter set with current metadata.
    pub fn new(params: Parameters) -> Self {
        Snapshot {
            meta: SnapshotMetadata {
                version: SCHEMA_VERSION.to_string(),
                saved: Utc::now(),
            },
            params,
        }
    }
}

/// Save a snapshot with atomic write semantics.
///
/// Serialize to JSON, write to a `.tmp` sibling, fsync, then rename over
/// the target path. An interrupted save leaves any previous snapshot
/// intact.
pub fn save_snapshot(snapshot: &Snapshot, path: &Path) -> CourseResult<()> {
    let json =
        serde_json::to_string_pretty(snapshot).map_err(|e| CourseError::SerializationError {
            reason: e.to_string(),
        })?;

    let tmp_path = path.with_extension("json.tmp");

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        CourseError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        CourseError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        CourseError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CourseError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    Ok(())
}

/// Load a snapshot from a file.
///
/// # Returns
///
/// * `Ok(Snapshot)` - Successfully loaded
/// * `Err(CourseError::VersionMismatch)` - File schema is incompatible
/// * `Err(CourseError::SerializationError)` - Invalid JSON
/// * `Err(CourseError::FileError)` - I/O error
pub fn load_snapshot(path: &Path) -> CourseResult<Snapshot> {
    let mut file = File::open(path)
        .map_err(|e| CourseError::file_error("open", path.display().to_string(), e.to_string()))?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| CourseError::file_error("read", path.display().to_string(), e.to_string()))?;

    let snapshot: Snapshot =
        serde_json::from_str(&contents).map_err(|e| CourseError::SerializationError {
            reason: format!("Invalid JSON in {}: {}", path.display(), e),
        })?;

    validate_version(&snapshot.meta.version)?;

    Ok(snapshot)
}

/// Validate that a file version is compatible with the current schema.
fn validate_version(file_version: &str) -> CourseResult<()> {
    let file_parts: Vec<u32> = file_version
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();
    let current_parts: Vec<u32> = SCHEMA_VERSION
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();

    if file_parts.is_empty() || current_parts.is_empty() {
        return Err(CourseError::VersionMismatch {
            file_version: file_version.to_string(),
            expected_version: SCHEMA_VERSION.to_string(),
        });
    }

    // Major version must match
    if file_parts[0] != current_parts[0] {
        return Err(CourseError::VersionMismatch {
            file_version: file_version.to_string(),
            expected_version: SCHEMA_VERSION.to_string(),
        });
    }

    // For 0.x versions the minor must not be newer than we support
    if current_parts[0] == 0 && file_parts.len() > 1 && current_parts.len() > 1 {
        if file_parts[1] > current_parts[1] {
            return Err(CourseError::VersionMismatch {
                file_version: file_version.to_string(),
                expected_version: SCHEMA_VERSION.to_string(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::temp_dir;
    use std::path::PathBuf;

    fn temp_snapshot_path(name: &str) -> PathBuf {
        temp_dir().join(format!("coursework_test_{}.json", name))
    }

    #[test]
    fn test_default_parameters() {
        let params = Parameters::default();
        assert_eq!(params.axis, Axis::Length);
        assert_eq!(params.mode, CalcMode::FromDimension);
        assert_eq!(params.unit_kind, UnitKind::StandardBrickUk);
        assert_eq!(params.unit_length_mm, 215.0);
        assert_eq!(params.unit_height_mm, 65.0);
        assert_eq!(params.mortar_joint_mm, STANDARD_MORTAR_JOINT_MM);
        assert_eq!(params.target_dimension, 1000.0);
        assert_eq!(params.unit_count, 4.0);
    }

    #[test]
    fn test_unit_spec_follows_axis() {
        let mut params = Parameters::default();
        assert_eq!(params.unit_spec().unit_size_mm, 215.0);

        params.axis = Axis::Height;
        assert_eq!(params.unit_spec().unit_size_mm, 65.0);
        assert_eq!(params.unit_spec().mortar_joint_mm, 10.0);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_snapshot_path("roundtrip");

        let mut params = Parameters::default();
        params.target_dimension = 2400.0;
        params.input_unit = LengthUnit::Centimetres;
        let snapshot = Snapshot::new(params.clone());
        save_snapshot(&snapshot, &path).unwrap();

        let loaded = load_snapshot(&path).unwrap();
        assert_eq!(loaded.params, params);
        assert_eq!(loaded.meta.version, SCHEMA_VERSION);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_atomic_save_leaves_no_tmp_file() {
        let path = temp_snapshot_path("atomic");
        let tmp_path = path.with_extension("json.tmp");

        let snapshot = Snapshot::new(Parameters::default());
        save_snapshot(&snapshot, &path).unwrap();

        assert!(!tmp_path.exists());
        assert!(path.exists());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file_is_file_error() {
        let err = load_snapshot(Path::new("/nonexistent/coursework.json")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_version_validation() {
        assert!(validate_version(SCHEMA_VERSION).is_ok());
        assert!(validate_version("0.1.5").is_ok());

        assert!(validate_version("1.0.0").is_err());
        assert!(validate_version("0.2.0").is_err());
        assert!(validate_version("junk").is_err());
    }

    #[test]
    fn test_parameters_serialization() {
        let params = Parameters::default();
        let json = serde_json::to_string_pretty(&params).unwrap();
        assert!(json.contains("StandardBrickUk"));
        assert!(json.contains("FromDimension"));

        let roundtrip: Parameters = serde_json::from_str(&json).unwrap();
        assert_eq!(params, roundtrip);
    }
}
