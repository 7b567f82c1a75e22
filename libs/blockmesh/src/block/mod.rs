//! # Blocks
//!
//! Hexahedral blocks: eight vertex indices, per-axis cell configuration and
//! the patch each face belongs to.

pub mod face;
pub mod grading;

pub use face::Face;
pub use grading::{Axis, AxisSpec, CellMode, Grading, ResolvedAxis};

use crate::error::{MeshError, MeshResult};

/// A hexahedral block.
///
/// Blocks reference vertices by index and patches by name; both are owned
/// by the [`Mesh`](crate::Mesh).
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    vertices: [usize; 8],
    axes: [AxisSpec; 3],
    zone: Option<String>,
    patches: [Option<String>; 6],
}

impl Block {
    /// Creates a block from exactly eight vertex indices.
    ///
    /// Only arity, distinctness and the axis values are checked here; the
    /// mesh verifies the indices exist and the block is right-handed.
    pub fn new(vertices: &[usize], axes: [AxisSpec; 3]) -> MeshResult<Self> {
        let vertices: [usize; 8] = vertices.try_into().map_err(|_| {
            MeshError::validation(format!(
                "a block needs exactly 8 vertices, got {}",
                vertices.len()
            ))
        })?;

        for (i, v) in vertices.iter().enumerate() {
            if vertices[..i].contains(v) {
                return Err(MeshError::validation(format!(
                    "vertex {v} appears twice in block {vertices:?}"
                )));
            }
        }

        for axis in &axes {
            axis.validate()?;
        }

        Ok(Self {
            vertices,
            axes,
            zone: None,
            patches: Default::default(),
        })
    }

    /// Vertex indices in hex order.
    #[inline]
    pub fn vertices(&self) -> &[usize; 8] {
        &self.vertices
    }

    /// Cell configuration of one axis.
    #[inline]
    pub fn axis(&self, axis: Axis) -> &AxisSpec {
        &self.axes[axis.index()]
    }

    /// Mesh vertex indices of a face, in dictionary order.
    pub fn face_vertices(&self, face: Face) -> [usize; 4] {
        face.local_vertices().map(|local| self.vertices[local])
    }

    /// Mesh vertex indices of the first block edge along `axis`.
    pub fn axis_edge(&self, axis: Axis) -> (usize, usize) {
        let (a, b) = axis.local_edge();
        (self.vertices[a], self.vertices[b])
    }

    /// Name of the cell zone, if set.
    pub fn zone(&self) -> Option<&str> {
        self.zone.as_deref()
    }

    pub(crate) fn set_zone(&mut self, zone: String) {
        self.zone = Some(zone);
    }

    /// Patch a face is assigned to.
    pub fn patch(&self, face: Face) -> Option<&str> {
        self.patches[face.index()].as_deref()
    }

    pub(crate) fn assign_patch(&mut self, face: Face, patch: &str) {
        self.patches[face.index()] = Some(patch.to_string());
    }

    /// Faces that belong to no patch, in [`Face::ALL`] order.
    pub fn unassigned_faces(&self) -> impl Iterator<Item = Face> + '_ {
        Face::ALL
            .into_iter()
            .filter(|face| self.patches[face.index()].is_none())
    }
}

#[cfg(test)]
mod tests;
