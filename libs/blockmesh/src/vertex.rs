//! # Vertices
//!
//! Numbered points and the registry that deduplicates them.

use crate::error::{MeshError, MeshResult};
use crate::serializer::format::vector;
use config::constants::VERTEX_MERGE_TOLERANCE;
use glam::DVec3;
use std::fmt;
use tracing::debug;

/// A point with the index it was given when first added to a mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// Position in the mesh numbering, contiguous from 0.
    pub index: usize,
    /// Coordinates as supplied by the caller.
    pub point: DVec3,
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} // {}", vector(self.point), self.index)
    }
}

/// Converts a coordinate slice into a point.
///
/// # Example
///
/// ```rust
/// use blockmesh::vertex::point_from_slice;
///
/// let p = point_from_slice(&[1.0, 2.0, 3.0]).unwrap();
/// assert_eq!(p.z, 3.0);
/// assert!(point_from_slice(&[1.0, 2.0]).is_err());
/// ```
pub fn point_from_slice(coords: &[f64]) -> MeshResult<DVec3> {
    match coords {
        [x, y, z] => checked_point(DVec3::new(*x, *y, *z)),
        _ => Err(MeshError::validation(format!(
            "a point needs exactly 3 coordinates, got {}",
            coords.len()
        ))),
    }
}

/// Rejects points with NaN or infinite components.
pub(crate) fn checked_point(point: DVec3) -> MeshResult<DVec3> {
    if point.is_finite() {
        Ok(point)
    } else {
        Err(MeshError::validation(format!(
            "point coordinates must be finite: {point:?}"
        )))
    }
}

/// Stores unique points and hands out stable indices.
///
/// # Example
///
/// ```rust
/// use blockmesh::vertex::VertexRegistry;
/// use glam::DVec3;
///
/// let mut registry = VertexRegistry::new();
/// let first = registry.add([DVec3::ZERO, DVec3::X]).unwrap();
/// let again = registry.add([DVec3::X]).unwrap();
/// assert_eq!(first[1].index, again[0].index);
/// assert_eq!(registry.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct VertexRegistry {
    vertices: Vec<Vertex>,
    tolerance: f64,
}

impl Default for VertexRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl VertexRegistry {
    /// Creates an empty registry using the default merge tolerance.
    pub fn new() -> Self {
        Self::with_tolerance(VERTEX_MERGE_TOLERANCE)
    }

    /// Creates an empty registry merging points closer than `tolerance`.
    pub fn with_tolerance(tolerance: f64) -> Self {
        Self {
            vertices: Vec::new(),
            tolerance,
        }
    }

    /// Adds points, reusing existing vertices for coincident ones.
    ///
    /// The returned vertices are in input order. Nothing is stored when any
    /// point is rejected.
    pub fn add(&mut self, points: impl IntoIterator<Item = DVec3>) -> MeshResult<Vec<Vertex>> {
        let points = points
            .into_iter()
            .map(checked_point)
            .collect::<MeshResult<Vec<_>>>()?;

        let mut added = Vec::with_capacity(points.len());
        for point in points {
            let vertex = match self.find(point) {
                Some(existing) => {
                    debug!(index = existing.index, "reusing vertex");
                    *existing
                }
                None => {
                    let vertex = Vertex {
                        index: self.vertices.len(),
                        point,
                    };
                    self.vertices.push(vertex);
                    vertex
                }
            };
            added.push(vertex);
        }
        Ok(added)
    }

    /// Returns the vertex lying within tolerance of `point`, if any.
    pub fn find(&self, point: DVec3) -> Option<&Vertex> {
        self.vertices
            .iter()
            .find(|v| v.point.distance(point) < self.tolerance)
    }

    /// Returns the vertex with the given index.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Vertex> {
        self.vertices.get(index)
    }

    /// Returns true if `index` was handed out by this registry.
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        index < self.vertices.len()
    }

    /// Returns the number of stored vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if no vertex has been added.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns all vertices ordered by index.
    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Returns the merge tolerance.
    #[inline]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_are_contiguous() {
        let mut registry = VertexRegistry::new();
        let a = registry.add([DVec3::ZERO, DVec3::X]).unwrap();
        let b = registry.add([DVec3::Y, DVec3::Z]).unwrap();

        let indices: Vec<usize> = a.iter().chain(&b).map(|v| v.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_duplicate_point_is_reused() {
        let mut registry = VertexRegistry::new();
        registry.add([DVec3::ZERO, DVec3::X]).unwrap();

        let again = registry.add([DVec3::new(1.0, 0.0, 0.0)]).unwrap();
        assert_eq!(again[0].index, 1);
        assert_eq!(registry.len(), 2);

        // idempotent on repeated calls
        let third = registry.add([DVec3::X]).unwrap();
        assert_eq!(third[0].index, 1);
    }

    #[test]
    fn test_duplicates_within_one_call() {
        let mut registry = VertexRegistry::new();
        let vertices = registry.add([DVec3::Z, DVec3::X, DVec3::Z]).unwrap();

        assert_eq!(vertices[0].index, 0);
        assert_eq!(vertices[1].index, 1);
        assert_eq!(vertices[2].index, 0);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_near_duplicate_within_tolerance() {
        let mut registry = VertexRegistry::new();
        registry.add([DVec3::new(0.5, 0.5, 0.0)]).unwrap();

        // rotation noise
        let noisy = DVec3::new(0.5 + 1e-12, 0.5 - 1e-12, 1e-14);
        let vertices = registry.add([noisy]).unwrap();
        assert_eq!(vertices[0].index, 0);
        assert_eq!(registry.len(), 1);

        let distinct = registry.add([DVec3::new(0.5, 0.5, 1e-3)]).unwrap();
        assert_eq!(distinct[0].index, 1);
    }

    #[test]
    fn test_non_finite_point_rejected_atomically() {
        let mut registry = VertexRegistry::new();
        let result = registry.add([DVec3::ZERO, DVec3::new(f64::NAN, 0.0, 0.0)]);

        assert!(matches!(result, Err(MeshError::Validation { .. })));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_point_from_slice_arity() {
        assert!(point_from_slice(&[0.0, 1.0, 2.0]).is_ok());
        assert!(matches!(
            point_from_slice(&[0.0, 1.0]),
            Err(MeshError::Validation { .. })
        ));
        assert!(point_from_slice(&[0.0, 1.0, 2.0, 3.0]).is_err());
        assert!(point_from_slice(&[0.0, f64::INFINITY, 2.0]).is_err());
    }

    #[test]
    fn test_vertex_display() {
        let vertex = Vertex {
            index: 2,
            point: DVec3::new(1.2, 2.05, 2.0 / 3.0),
        };
        assert_eq!(
            vertex.to_string(),
            "(1.20000000 2.05000000 0.66666667) // 2"
        );
    }
}
