//! # Mesh
//!
//! Owns the vertex registry, edges, blocks and patches, and checks every
//! reference between them as it is made.

use crate::block::{Axis, AxisSpec, Block, Face, Grading, ResolvedAxis};
use crate::edge::{edge_key, is_word, Curve, Edge};
use crate::error::{MeshError, MeshResult};
use crate::patch::{DefaultPatch, FaceRef, Patch};
use crate::serializer;
use crate::vertex::{point_from_slice, Vertex, VertexRegistry};
use config::constants::{DEFAULT_PATCH_TYPE, UNIFORM_GRADING};
use config::MeshConfig;
use glam::DVec3;
use std::collections::HashMap;
use tracing::debug;

/// A block mesh under construction.
///
/// Build it with `add_vertices`, `add_block`, `add_edge` and `set_patch`,
/// then call [`Mesh::render`].
///
/// # Example
///
/// ```rust
/// use blockmesh::{AxisSpec, Face, Mesh};
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// let v = mesh.add_vertices([
///     DVec3::new(0.0, 0.0, 0.0), DVec3::new(1.0, 0.0, 0.0),
///     DVec3::new(1.0, 1.0, 0.0), DVec3::new(0.0, 1.0, 0.0),
///     DVec3::new(0.0, 0.0, 1.0), DVec3::new(1.0, 0.0, 1.0),
///     DVec3::new(1.0, 1.0, 1.0), DVec3::new(0.0, 1.0, 1.0),
/// ]).unwrap();
/// let indices: Vec<usize> = v.iter().map(|v| v.index).collect();
/// let block = mesh.add_block(&indices, [AxisSpec::count(4); 3]).unwrap();
/// mesh.set_patch(block, &[Face::Top], "lid").unwrap();
///
/// let text = mesh.render().unwrap();
/// assert!(text.contains("hex (0 1 2 3 4 5 6 7) (4 4 4) simpleGrading (1 1 1)"));
/// ```
#[derive(Debug, Clone)]
pub struct Mesh {
    config: MeshConfig,
    vertices: VertexRegistry,
    edges: Vec<Edge>,
    edge_lookup: HashMap<(usize, usize), usize>,
    blocks: Vec<Block>,
    patches: Vec<Patch>,
    patch_lookup: HashMap<String, usize>,
    patch_types: HashMap<String, String>,
    default_patch: Option<DefaultPatch>,
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

impl Mesh {
    /// Creates an empty mesh with the default configuration.
    pub fn new() -> Self {
        Self::with_config(MeshConfig::default())
    }

    /// Creates an empty mesh with the given configuration.
    pub fn with_config(config: MeshConfig) -> Self {
        Self {
            config,
            vertices: VertexRegistry::with_tolerance(config.tolerance),
            edges: Vec::new(),
            edge_lookup: HashMap::new(),
            blocks: Vec::new(),
            patches: Vec::new(),
            patch_lookup: HashMap::new(),
            patch_types: HashMap::new(),
            default_patch: None,
        }
    }

    #[inline]
    pub fn config(&self) -> &MeshConfig {
        &self.config
    }

    /// Changes the `convertToMeters` factor applied to all coordinates.
    pub fn set_scale(&mut self, scale: f64) -> MeshResult<()> {
        self.config = self.config.with_scale(scale)?;
        Ok(())
    }

    // =========================================================================
    // VERTICES
    // =========================================================================

    /// Adds points and returns their vertices in input order.
    ///
    /// Points within the configured tolerance of an existing vertex reuse its
    /// index.
    pub fn add_vertices(
        &mut self,
        points: impl IntoIterator<Item = DVec3>,
    ) -> MeshResult<Vec<Vertex>> {
        let before = self.vertices.len();
        let added = self.vertices.add(points)?;
        debug!(
            requested = added.len(),
            created = self.vertices.len() - before,
            "added vertices"
        );
        Ok(added)
    }

    /// Adds points given as coordinate slices, checking each has 3 components.
    pub fn add_vertex_slices<S: AsRef<[f64]>>(&mut self, points: &[S]) -> MeshResult<Vec<Vertex>> {
        let points = points
            .iter()
            .map(|p| point_from_slice(p.as_ref()))
            .collect::<MeshResult<Vec<_>>>()?;
        self.add_vertices(points)
    }

    /// All vertices ordered by index.
    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        self.vertices.vertices()
    }

    #[inline]
    pub fn vertex(&self, index: usize) -> Option<&Vertex> {
        self.vertices.get(index)
    }

    // =========================================================================
    // EDGES
    // =========================================================================

    /// Adds an edge through `points`: none for a line, one for an arc, more
    /// for a spline.
    pub fn add_edge(&mut self, start: usize, end: usize, points: Vec<DVec3>) -> MeshResult<&Edge> {
        self.add_curved_edge(start, end, Curve::from_points(points))
    }

    /// Adds an edge with an explicit curve.
    ///
    /// Fails if either vertex is unknown or an edge between the pair exists,
    /// in either direction.
    pub fn add_curved_edge(&mut self, start: usize, end: usize, curve: Curve) -> MeshResult<&Edge> {
        let (a, b) = match (self.vertices.get(start), self.vertices.get(end)) {
            (Some(a), Some(b)) => (*a, *b),
            (None, _) => {
                let message = format!("vertex {start} does not exist");
                return Err(MeshError::invalid_edge(start, end, message));
            }
            (_, None) => {
                let message = format!("vertex {end} does not exist");
                return Err(MeshError::invalid_edge(start, end, message));
            }
        };

        let key = edge_key(start, end);
        if self.edge_lookup.contains_key(&key) {
            return Err(MeshError::DuplicateEdge { start, end });
        }

        let edge = Edge::new(&a, &b, curve)?;
        debug!(start, end, kind = %edge.kind(), "added edge");

        let index = self.edges.len();
        self.edges.push(edge);
        self.edge_lookup.insert(key, index);
        Ok(&self.edges[index])
    }

    /// Edges in insertion order.
    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Edge between two vertices, in either direction.
    pub fn edge_between(&self, a: usize, b: usize) -> Option<&Edge> {
        self.edge_lookup
            .get(&edge_key(a, b))
            .map(|&index| &self.edges[index])
    }

    // =========================================================================
    // BLOCKS
    // =========================================================================

    /// Adds a block over eight existing vertices and returns its index.
    ///
    /// Vertices are in hex order: bottom face 0-3, then top face 4-7 above
    /// them. The corner at vertex 0 must be right-handed.
    pub fn add_block(&mut self, vertices: &[usize], axes: [AxisSpec; 3]) -> MeshResult<usize> {
        let block = Block::new(vertices, axes)?;

        let mut points = [DVec3::ZERO; 8];
        for (point, &index) in points.iter_mut().zip(block.vertices()) {
            *point = self
                .vertices
                .get(index)
                .map(|v| v.point)
                .ok_or_else(|| {
                    MeshError::validation(format!("block vertex {index} does not exist"))
                })?;
        }

        let volume = (points[1] - points[0])
            .cross(points[3] - points[0])
            .dot(points[4] - points[0]);
        if volume <= 0.0 {
            return Err(MeshError::validation(format!(
                "block {:?} is inside-out or flat; vertices must be right-handed",
                block.vertices()
            )));
        }

        let index = self.blocks.len();
        debug!(block = index, vertices = ?block.vertices(), "added block");
        self.blocks.push(block);
        Ok(index)
    }

    /// Names the cell zone of a block.
    pub fn set_cell_zone(&mut self, block: usize, zone: &str) -> MeshResult<()> {
        if !is_word(zone) {
            return Err(MeshError::validation(format!("invalid cell zone name '{zone}'")));
        }
        self.block_mut(block)?.set_zone(zone.to_string());
        Ok(())
    }

    /// Blocks in insertion order.
    #[inline]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    #[inline]
    pub fn block(&self, index: usize) -> Option<&Block> {
        self.blocks.get(index)
    }

    fn block_mut(&mut self, index: usize) -> MeshResult<&mut Block> {
        self.blocks
            .get_mut(index)
            .ok_or_else(|| MeshError::validation(format!("block {index} does not exist")))
    }

    // =========================================================================
    // GRADING
    // =========================================================================

    /// Length of a block along an axis.
    ///
    /// Measured along the first block edge of that axis, following the curve
    /// when one is registered between its vertices.
    pub fn axis_length(&self, block: usize, axis: Axis) -> MeshResult<f64> {
        let block = self
            .blocks
            .get(block)
            .ok_or_else(|| MeshError::serialization(format!("block {block} does not exist")))?;
        let (a, b) = block.axis_edge(axis);

        match self.edge_between(a, b) {
            Some(edge) => {
                let start = self.point(edge.start())?;
                let end = self.point(edge.end())?;
                Ok(edge.length(start, end))
            }
            None => Ok(self.point(a)?.distance(self.point(b)?)),
        }
    }

    /// Resolves cell counts and grading ratios of a block.
    pub fn grading(&self, block: usize) -> MeshResult<Grading> {
        let target = self
            .blocks
            .get(block)
            .ok_or_else(|| MeshError::serialization(format!("block {block} does not exist")))?;

        let default_count = self.config.default_cell_count;
        let mut axes = [ResolvedAxis {
            count: default_count,
            ratio: UNIFORM_GRADING,
        }; 3];
        for axis in Axis::ALL {
            let length = self.axis_length(block, axis)?;
            axes[axis.index()] = target.axis(axis).resolve(length, default_count);
        }
        Ok(Grading { axes })
    }

    fn point(&self, index: usize) -> MeshResult<DVec3> {
        self.vertices
            .get(index)
            .map(|v| v.point)
            .ok_or_else(|| MeshError::serialization(format!("vertex {index} does not exist")))
    }

    // =========================================================================
    // PATCHES
    // =========================================================================

    /// Assigns faces of a block to a patch, creating the patch on first use.
    ///
    /// Re-assigning a face to the same patch is a no-op; assigning it to a
    /// different patch fails and leaves the mesh unchanged.
    pub fn set_patch(&mut self, block: usize, faces: &[Face], patch: &str) -> MeshResult<()> {
        if !is_word(patch) {
            return Err(MeshError::validation(format!("invalid patch name '{patch}'")));
        }
        if faces.is_empty() {
            return Err(MeshError::validation(format!("no faces given for patch '{patch}'")));
        }
        if self.default_patch.as_ref().is_some_and(|d| d.name == patch) {
            return Err(MeshError::validation(format!(
                "patch '{patch}' is already the default patch"
            )));
        }
        let target = self.block_mut(block)?;

        for &face in faces {
            if let Some(existing) = target.patch(face) {
                if existing != patch {
                    return Err(MeshError::PatchConflict {
                        block,
                        face,
                        existing: existing.to_string(),
                        requested: patch.to_string(),
                    });
                }
            }
        }
        for &face in faces {
            target.assign_patch(face, patch);
        }

        let index = match self.patch_lookup.get(patch) {
            Some(&index) => index,
            None => {
                self.patches.push(Patch::new(patch));
                self.patch_lookup.insert(patch.to_string(), self.patches.len() - 1);
                self.patches.len() - 1
            }
        };
        for &face in faces {
            self.patches[index].push(FaceRef { block, face });
        }

        debug!(block, patch, faces = faces.len(), "assigned faces");
        Ok(())
    }

    /// Same as [`Mesh::set_patch`] with faces given by name.
    pub fn set_patch_by_names(
        &mut self,
        block: usize,
        faces: &[&str],
        patch: &str,
    ) -> MeshResult<()> {
        let faces = faces
            .iter()
            .map(|name| name.parse::<Face>())
            .collect::<MeshResult<Vec<_>>>()?;
        self.set_patch(block, &faces, patch)
    }

    /// Sets the boundary type of a patch (`wall`, `empty`, `symmetryPlane`...).
    ///
    /// May be called before any face is assigned to the patch.
    pub fn set_patch_type(&mut self, patch: &str, kind: &str) -> MeshResult<()> {
        if !is_word(patch) || !is_word(kind) {
            return Err(MeshError::validation(format!(
                "invalid patch type '{kind}' for patch '{patch}'"
            )));
        }
        self.patch_types.insert(patch.to_string(), kind.to_string());
        Ok(())
    }

    /// Boundary type of a patch, `patch` unless set.
    pub fn patch_type(&self, patch: &str) -> &str {
        self.patch_types
            .get(patch)
            .map(String::as_str)
            .unwrap_or(DEFAULT_PATCH_TYPE)
    }

    /// Collects every unassigned face into a named default patch.
    ///
    /// The name must differ from every patch that has faces assigned.
    pub fn set_default_patch(&mut self, name: &str, kind: &str) -> MeshResult<()> {
        if !is_word(name) || !is_word(kind) {
            return Err(MeshError::validation(format!(
                "invalid default patch '{name}' of type '{kind}'"
            )));
        }
        if self.patch_lookup.contains_key(name) {
            return Err(MeshError::validation(format!(
                "default patch '{name}' clashes with an existing patch"
            )));
        }
        self.default_patch = Some(DefaultPatch {
            name: name.to_string(),
            kind: kind.to_string(),
        });
        Ok(())
    }

    #[inline]
    pub fn default_patch(&self) -> Option<&DefaultPatch> {
        self.default_patch.as_ref()
    }

    /// Patches in order of first assignment.
    #[inline]
    pub fn patches(&self) -> &[Patch] {
        &self.patches
    }

    // =========================================================================
    // OUTPUT
    // =========================================================================

    /// Renders the blockMeshDict text.
    pub fn render(&self) -> MeshResult<String> {
        serializer::render(self)
    }
}
