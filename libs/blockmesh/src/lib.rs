//! # blockMesh
//!
//! Turns parametric block topology into an OpenFOAM `blockMeshDict`.
//!
//! ## Architecture
//!
//! ```text
//! points → VertexRegistry (dedup, numbering)
//!        → Blocks + Edges + Patches (validated references)
//!        → grading resolution → serializer → text
//! ```
//!
//! The crate never runs the mesher; it produces the dictionary text and,
//! optionally, writes it to a path.
//!
//! ## Usage
//!
//! ```rust
//! use blockmesh::{AxisSpec, Face, Mesh};
//! use glam::DVec3;
//!
//! let mut mesh = Mesh::new();
//! let corners = [
//!     DVec3::new(0.0, 0.0, 0.0), DVec3::new(1.0, 0.0, 0.0),
//!     DVec3::new(1.0, 1.0, 0.0), DVec3::new(0.0, 1.0, 0.0),
//!     DVec3::new(0.0, 0.0, 1.0), DVec3::new(1.0, 0.0, 1.0),
//!     DVec3::new(1.0, 1.0, 1.0), DVec3::new(0.0, 1.0, 1.0),
//! ];
//! let v: Vec<usize> = mesh.add_vertices(corners)?.iter().map(|v| v.index).collect();
//! let block = mesh.add_block(&v, [AxisSpec::size(0.1); 3])?;
//! mesh.add_edge(v[4], v[5], vec![DVec3::new(0.5, -0.1, 1.0)])?;
//! mesh.set_patch(block, &[Face::Top, Face::Bottom], "walls")?;
//!
//! let dict = mesh.render()?;
//! assert!(dict.contains("(10 10 10) simpleGrading (1 1 1)"));
//! # Ok::<(), blockmesh::MeshError>(())
//! ```

pub mod block;
pub mod edge;
pub mod error;
pub mod mesh;
pub mod output;
pub mod patch;
pub mod serializer;
pub mod vertex;

pub use block::{Axis, AxisSpec, Block, CellMode, Face, Grading};
pub use config::{MeshConfig, UnassignedFaces};
pub use edge::{Curve, Edge, EdgeKind};
pub use error::{MeshError, MeshResult};
pub use mesh::Mesh;
pub use output::write_mesh;
pub use patch::{DefaultPatch, FaceRef, Patch};
pub use vertex::{Vertex, VertexRegistry};
