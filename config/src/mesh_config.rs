//! Validated configuration snapshot consumed by the mesh model and the
//! serializer.

use crate::constants::{DEFAULT_CELL_COUNT, DEFAULT_SCALE, MIN_CELL_COUNT, VERTEX_MERGE_TOLERANCE};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What the serializer does with block faces that belong to no patch.
///
/// The meshing tool collects uncovered faces into its default patch, but some
/// workflows require every boundary face to be named explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnassignedFaces {
    /// Leave unassigned faces out of the boundary list.
    #[default]
    Omit,
    /// Fail serialization when a face has no patch (and no default patch is set).
    Reject,
}

/// Configuration shared by a mesh and its serializer.
///
/// # Examples
/// ```
/// use config::{MeshConfig, UnassignedFaces};
/// let cfg = MeshConfig::default().with_unassigned_faces(UnassignedFaces::Reject);
/// assert_eq!(cfg.unassigned_faces, UnassignedFaces::Reject);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeshConfig {
    /// Distance under which two points collapse into one vertex.
    pub tolerance: f64,
    /// Cell count for block axes with no explicit count or size.
    pub default_cell_count: usize,
    /// `convertToMeters` factor written to the dictionary.
    pub scale: f64,
    /// Policy for faces without a patch.
    pub unassigned_faces: UnassignedFaces,
}

impl MeshConfig {
    /// Builds a configuration enforcing strict validation of every value.
    ///
    /// # Examples
    /// ```
    /// use config::{MeshConfig, UnassignedFaces};
    /// let cfg = MeshConfig::new(1.0e-6, 4, 0.001, UnassignedFaces::Omit).expect("valid config");
    /// assert_eq!(cfg.default_cell_count, 4);
    /// assert!(MeshConfig::new(0.0, 4, 1.0, UnassignedFaces::Omit).is_err());
    /// ```
    pub fn new(
        tolerance: f64,
        default_cell_count: usize,
        scale: f64,
        unassigned_faces: UnassignedFaces,
    ) -> Result<Self, ConfigError> {
        if !(tolerance.is_finite() && tolerance > 0.0) {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        if default_cell_count < MIN_CELL_COUNT {
            return Err(ConfigError::InvalidCellCount(default_cell_count));
        }
        if !(scale.is_finite() && scale > 0.0) {
            return Err(ConfigError::InvalidScale(scale));
        }
        Ok(Self {
            tolerance,
            default_cell_count,
            scale,
            unassigned_faces,
        })
    }

    /// Returns a copy with a different vertex merge tolerance.
    pub fn with_tolerance(self, tolerance: f64) -> Result<Self, ConfigError> {
        Self::new(tolerance, self.default_cell_count, self.scale, self.unassigned_faces)
    }

    /// Returns a copy with a different default cell count.
    pub fn with_default_cell_count(self, count: usize) -> Result<Self, ConfigError> {
        Self::new(self.tolerance, count, self.scale, self.unassigned_faces)
    }

    /// Returns a copy with a different `convertToMeters` factor.
    pub fn with_scale(self, scale: f64) -> Result<Self, ConfigError> {
        Self::new(self.tolerance, self.default_cell_count, scale, self.unassigned_faces)
    }

    /// Returns a copy with a different unassigned-face policy.
    pub fn with_unassigned_faces(self, policy: UnassignedFaces) -> Self {
        Self {
            unassigned_faces: policy,
            ..self
        }
    }
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            tolerance: VERTEX_MERGE_TOLERANCE,
            default_cell_count: DEFAULT_CELL_COUNT,
            scale: DEFAULT_SCALE,
            unassigned_faces: UnassignedFaces::Omit,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    /// Raised when the merge tolerance is zero, negative or not finite.
    #[error("tolerance must be positive: {0}")]
    InvalidTolerance(f64),
    /// Raised when the default cell count is zero.
    #[error("default_cell_count must be >= 1: {0}")]
    InvalidCellCount(usize),
    /// Raised when the scale factor is zero, negative or not finite.
    #[error("scale must be positive: {0}")]
    InvalidScale(f64),
}
