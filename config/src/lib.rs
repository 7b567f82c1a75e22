//! # Config Crate
//!
//! Centralized configuration for the blockMeshDict generator.
//! Tolerances, default cell counts and output formatting parameters are
//! defined once here so the mesh model and the serializer agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_CELL_COUNT, VERTEX_MERGE_TOLERANCE};
//! use config::MeshConfig;
//!
//! let cfg = MeshConfig::default();
//! assert_eq!(cfg.tolerance, VERTEX_MERGE_TOLERANCE);
//! assert_eq!(cfg.default_cell_count, DEFAULT_CELL_COUNT);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Validated**: `MeshConfig::new` rejects values the mesher cannot use
//! - **Deterministic**: Formatting precision is fixed so output is reproducible

pub mod constants;
pub mod mesh_config;

pub use mesh_config::{ConfigError, MeshConfig, UnassignedFaces};
