//! Hands rendered dictionaries to the filesystem.

use crate::error::MeshResult;
use crate::mesh::Mesh;
use std::fs;
use std::path::Path;
use tracing::info;

/// Renders `mesh` and writes it to `path`.
///
/// The file is only touched once rendering has succeeded, so an invalid mesh
/// never leaves a partial dictionary behind.
pub fn write_mesh(mesh: &Mesh, path: impl AsRef<Path>) -> MeshResult<()> {
    let text = mesh.render()?;
    let path = path.as_ref();
    fs::write(path, text)?;
    info!(path = %path.display(), "wrote blockMeshDict");
    Ok(())
}
