//! # Grading
//!
//! Per-axis cell count and grading ratio resolution.
//!
//! Each axis is configured with an explicit count, a target cell size, or
//! nothing (the configured default count). The ratio is handed to blockMesh
//! untouched; no attempt is made to solve for a ratio from cell sizes.

use crate::error::{MeshError, MeshResult};
use config::constants::{MIN_CELL_COUNT, UNIFORM_GRADING};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Block axis, numbered the way blockMesh numbers them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X = 0,
    Y = 1,
    Z = 2,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Block-local vertex positions of the first block edge along this axis.
    pub fn local_edge(self) -> (usize, usize) {
        match self {
            Axis::X => (0, 1),
            Axis::Y => (0, 3),
            Axis::Z => (0, 4),
        }
    }
}

/// How the cell count of an axis is determined.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellMode {
    /// Use this many cells.
    Count(usize),
    /// Derive the count from the axis length and a target cell size.
    Size(f64),
    /// Use the mesh's default count.
    #[default]
    Default,
}

/// Cell configuration of one block axis.
///
/// # Example
///
/// ```rust
/// use blockmesh::block::AxisSpec;
///
/// let axis = AxisSpec::size(0.1).with_ratio(2.0);
/// let resolved = axis.resolve(1.0, 10);
/// assert_eq!(resolved.count, 10);
/// assert_eq!(resolved.ratio, 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AxisSpec {
    pub mode: CellMode,
    /// First-to-last cell size ratio; `None` means uniform.
    pub ratio: Option<f64>,
}

impl AxisSpec {
    /// Explicit cell count.
    pub fn count(count: usize) -> Self {
        Self {
            mode: CellMode::Count(count),
            ratio: None,
        }
    }

    /// Target cell size.
    pub fn size(size: f64) -> Self {
        Self {
            mode: CellMode::Size(size),
            ratio: None,
        }
    }

    /// Returns a copy with a grading ratio.
    pub fn with_ratio(self, ratio: f64) -> Self {
        Self {
            ratio: Some(ratio),
            ..self
        }
    }

    /// Checks the values can be resolved.
    pub fn validate(&self) -> MeshResult<()> {
        match self.mode {
            CellMode::Count(count) if count < MIN_CELL_COUNT => {
                return Err(MeshError::validation(format!(
                    "cell count must be at least {MIN_CELL_COUNT}, got {count}"
                )));
            }
            CellMode::Size(size) if !(size.is_finite() && size > 0.0) => {
                return Err(MeshError::validation(format!(
                    "cell size must be positive, got {size}"
                )));
            }
            _ => {}
        }
        if let Some(ratio) = self.ratio {
            if !(ratio.is_finite() && ratio > 0.0) {
                return Err(MeshError::validation(format!(
                    "grading ratio must be positive, got {ratio}"
                )));
            }
        }
        Ok(())
    }

    /// Resolves the cell count for an axis of the given length.
    pub fn resolve(&self, length: f64, default_count: usize) -> ResolvedAxis {
        let count = match self.mode {
            CellMode::Count(count) => count,
            CellMode::Size(size) => cells_for_size(length, size),
            CellMode::Default => default_count,
        };
        ResolvedAxis {
            count: count.max(MIN_CELL_COUNT),
            ratio: self.ratio.unwrap_or(UNIFORM_GRADING),
        }
    }
}

/// Number of cells of roughly `size` that fit in `length`, at least one.
///
/// # Example
///
/// ```rust
/// use blockmesh::block::grading::cells_for_size;
///
/// assert_eq!(cells_for_size(1.0, 0.1), 10);
/// assert_eq!(cells_for_size(1.0, 0.09), 11);
/// assert_eq!(cells_for_size(0.01, 1.0), 1);
/// ```
pub fn cells_for_size(length: f64, size: f64) -> usize {
    ((length / size).round() as usize).max(MIN_CELL_COUNT)
}

/// Final cell count and ratio of one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedAxis {
    pub count: usize,
    pub ratio: f64,
}

/// Resolved discretization of a whole block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grading {
    pub axes: [ResolvedAxis; 3],
}

impl Grading {
    /// Cell counts in axis order.
    pub fn counts(&self) -> [usize; 3] {
        self.axes.map(|axis| axis.count)
    }

    /// Grading ratios in axis order.
    pub fn ratios(&self) -> [f64; 3] {
        self.axes.map(|axis| axis.ratio)
    }
}

impl fmt::Display for Grading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [cx, cy, cz] = self.counts();
        let [rx, ry, rz] = self.ratios();
        write!(f, "({cx} {cy} {cz}) simpleGrading ({rx} {ry} {rz})")
    }
}
