//! # Mesh Errors
//!
//! Error types for building and rendering a block mesh.
//!
//! ## Error Policy
//!
//! - Errors are raised at the call that introduced the problem
//! - Nothing is retried or silently dropped
//! - Messages name the offending vertex, edge, block or patch

use crate::block::Face;
use thiserror::Error;

/// Errors that can occur while building or rendering a mesh.
#[derive(Debug, Error)]
pub enum MeshError {
    /// Malformed input: bad point arity, wrong vertex count, unknown face name.
    #[error("Validation failed: {message}")]
    Validation { message: String },

    /// Edge whose endpoints or interior points are unusable.
    #[error("Invalid edge {start}-{end}: {message}")]
    InvalidEdge {
        start: usize,
        end: usize,
        message: String,
    },

    /// An edge between this vertex pair was already registered.
    #[error("Duplicate edge {start}-{end}: an edge between these vertices already exists")]
    DuplicateEdge { start: usize, end: usize },

    /// A block face was assigned to two different patches.
    #[error(
        "Patch conflict on block {block} face '{face}': already in '{existing}', cannot move to '{requested}'"
    )]
    PatchConflict {
        block: usize,
        face: Face,
        existing: String,
        requested: String,
    },

    /// Structural inconsistency found while rendering.
    #[error("Serialization failed: {message}")]
    Serialization { message: String },

    /// Invalid configuration value.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// The rendered dictionary could not be written.
    #[error("Failed to write dictionary: {0}")]
    Io(#[from] std::io::Error),
}

impl MeshError {
    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Creates an invalid edge error.
    pub fn invalid_edge(start: usize, end: usize, message: impl Into<String>) -> Self {
        Self::InvalidEdge {
            start,
            end,
            message: message.into(),
        }
    }

    /// Creates a serialization error.
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }
}

/// Result type alias for mesh operations.
pub type MeshResult<T> = Result<T, MeshError>;
