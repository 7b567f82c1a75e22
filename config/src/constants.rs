//! # Configuration Constants
//!
//! Centralized constants for blockMeshDict generation. Geometric tolerances,
//! cell-count defaults and output formatting are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Discretization**: Default cell counts and grading
//! - **Output**: Number formatting and dictionary defaults

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Distance below which two points are considered the same vertex.
///
/// Points produced by rotations and translations rarely land on exactly the
/// same floating-point coordinates, so vertex deduplication compares with
/// this tolerance instead of exact equality.
///
/// # Example
///
/// ```rust
/// use config::constants::VERTEX_MERGE_TOLERANCE;
///
/// fn vertices_should_merge(v1: [f64; 3], v2: [f64; 3]) -> bool {
///     let dx = v1[0] - v2[0];
///     let dy = v1[1] - v2[1];
///     let dz = v1[2] - v2[2];
///     (dx * dx + dy * dy + dz * dz).sqrt() < VERTEX_MERGE_TOLERANCE
/// }
///
/// assert!(vertices_should_merge([1.0, 0.0, 0.0], [1.0 + 1e-9, 0.0, 0.0]));
/// ```
pub const VERTEX_MERGE_TOLERANCE: f64 = 1e-7;

/// Tolerance for geometric degeneracy checks.
///
/// Used to detect interior edge points that coincide with an endpoint and
/// arc points that are collinear with their endpoints.
pub const GEOMETRY_TOLERANCE: f64 = 1e-7;

// =============================================================================
// DISCRETIZATION CONSTANTS
// =============================================================================

/// Cell count used for a block axis that has neither an explicit count nor
/// a target cell size.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_CELL_COUNT;
///
/// let requested: Option<usize> = None;
/// assert_eq!(requested.unwrap_or(DEFAULT_CELL_COUNT), 10);
/// ```
pub const DEFAULT_CELL_COUNT: usize = 10;

/// Smallest cell count any block axis can resolve to.
pub const MIN_CELL_COUNT: usize = 1;

/// Grading ratio of a uniformly spaced axis.
pub const UNIFORM_GRADING: f64 = 1.0;

// =============================================================================
// OUTPUT CONSTANTS
// =============================================================================

/// Number of decimals written for every coordinate.
///
/// # Example
///
/// ```rust
/// use config::constants::COORDINATE_PRECISION;
///
/// let text = format!("{:.*}", COORDINATE_PRECISION, 2.0 / 3.0);
/// assert_eq!(text, "0.66666667");
/// ```
pub const COORDINATE_PRECISION: usize = 8;

/// Boundary type assigned to a patch whose type was never set.
pub const DEFAULT_PATCH_TYPE: &str = "patch";

/// Default `convertToMeters` factor.
pub const DEFAULT_SCALE: f64 = 1.0;

/// Indentation unit used inside dictionary sections.
pub const INDENT: &str = "    ";

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if a f64 value is approximately zero within GEOMETRY_TOLERANCE.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-9));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < GEOMETRY_TOLERANCE
}
