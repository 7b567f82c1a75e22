//! # Serializer
//!
//! Renders a [`Mesh`] as blockMeshDict text.
//!
//! ## Layout
//!
//! ```text
//! FoamFile header → convertToMeters → vertices → blocks → edges
//!     → boundary → defaultPatch (optional) → mergePatchPairs
//! ```
//!
//! Output is a pure function of the mesh: vertices by index, blocks and
//! edges by insertion, patches by first assignment. Every check runs before
//! any text is produced, so a failed render yields nothing.

pub mod format;

use crate::block::{Face, Grading};
use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;
use crate::patch::Patch;
use config::constants::INDENT;
use config::UnassignedFaces;
use format::index_list;
use tracing::info;

const HEADER: &str = "\
FoamFile
{
    version     2.0;
    format      ascii;
    class       dictionary;
    object      blockMeshDict;
}";

/// Renders the complete dictionary.
///
/// # Example
///
/// ```rust
/// use blockmesh::{serializer, Mesh};
///
/// let text = serializer::render(&Mesh::new()).unwrap();
/// assert!(text.contains("vertices\n(\n);"));
/// ```
pub fn render(mesh: &Mesh) -> MeshResult<String> {
    check_references(mesh)?;
    check_coverage(mesh)?;

    let gradings = (0..mesh.blocks().len())
        .map(|block| mesh.grading(block))
        .collect::<MeshResult<Vec<_>>>()?;

    let mut sections = vec![
        HEADER.to_string(),
        format!("convertToMeters {};", mesh.config().scale),
        print_vertices(mesh),
        print_blocks(mesh, &gradings),
        print_edges(mesh),
        print_boundary(mesh),
    ];
    if let Some(default) = mesh.default_patch() {
        sections.push(format!(
            "defaultPatch\n{{\n{INDENT}name {};\n{INDENT}type {};\n}}",
            default.name, default.kind
        ));
    }
    sections.push(list("mergePatchPairs", Vec::new()));

    info!(
        vertices = mesh.vertices().len(),
        blocks = mesh.blocks().len(),
        edges = mesh.edges().iter().filter(|e| e.is_explicit()).count(),
        patches = mesh.patches().len(),
        "rendered blockMeshDict"
    );

    let mut text = sections.join("\n\n");
    text.push('\n');
    Ok(text)
}

/// Every index the output mentions must resolve.
fn check_references(mesh: &Mesh) -> MeshResult<()> {
    let vertex_count = mesh.vertices().len();

    for (i, block) in mesh.blocks().iter().enumerate() {
        if let Some(v) = block.vertices().iter().find(|&&v| v >= vertex_count) {
            return Err(MeshError::serialization(format!(
                "block {i} references missing vertex {v}"
            )));
        }
    }
    for edge in mesh.edges() {
        if edge.start() >= vertex_count || edge.end() >= vertex_count {
            return Err(MeshError::serialization(format!(
                "edge {}-{} references a missing vertex",
                edge.start(),
                edge.end()
            )));
        }
    }
    for patch in mesh.patches() {
        for face in patch.faces() {
            let assigned = mesh.block(face.block).and_then(|b| b.patch(face.face));
            if assigned != Some(patch.name()) {
                return Err(MeshError::serialization(format!(
                    "patch '{}' lists block {} face '{}' which is not assigned to it",
                    patch.name(),
                    face.block,
                    face.face
                )));
            }
        }
    }
    Ok(())
}

/// Applies the unassigned-face policy.
fn check_coverage(mesh: &Mesh) -> MeshResult<()> {
    if mesh.config().unassigned_faces == UnassignedFaces::Omit || mesh.default_patch().is_some() {
        return Ok(());
    }
    for (i, block) in mesh.blocks().iter().enumerate() {
        let open: Vec<Face> = block.unassigned_faces().collect();
        if !open.is_empty() {
            let names: Vec<&str> = open.iter().map(|f| f.name()).collect();
            return Err(MeshError::serialization(format!(
                "block {i} has faces without a patch: {}",
                names.join(", ")
            )));
        }
    }
    Ok(())
}

/// Wraps lines in a `name ( ... );` list.
fn list(name: &str, lines: Vec<String>) -> String {
    let mut out = format!("{name}\n(\n");
    for line in lines {
        out.push_str(&line);
        out.push('\n');
    }
    out.push_str(");");
    out
}

fn print_vertices(mesh: &Mesh) -> String {
    list(
        "vertices",
        mesh.vertices().iter().map(|v| format!("{INDENT}{v}")).collect(),
    )
}

fn print_blocks(mesh: &Mesh, gradings: &[Grading]) -> String {
    let lines = mesh
        .blocks()
        .iter()
        .zip(gradings)
        .map(|(block, grading)| {
            let zone = block.zone().map(|z| format!(" {z}")).unwrap_or_default();
            format!("{INDENT}hex {}{zone} {grading}", index_list(block.vertices()))
        })
        .collect();
    list("blocks", lines)
}

fn print_edges(mesh: &Mesh) -> String {
    let lines = mesh
        .edges()
        .iter()
        .filter(|edge| edge.is_explicit())
        .map(|edge| format!("{INDENT}{edge}"))
        .collect();
    list("edges", lines)
}

fn print_boundary(mesh: &Mesh) -> String {
    let lines = mesh
        .patches()
        .iter()
        .map(|patch| print_patch(mesh, patch))
        .collect();
    list("boundary", lines)
}

fn print_patch(mesh: &Mesh, patch: &Patch) -> String {
    let pad = INDENT.repeat(3);
    let faces: Vec<String> = patch
        .faces()
        .iter()
        .filter_map(|f| mesh.block(f.block).map(|b| b.face_vertices(f.face)))
        .map(|quad| format!("{pad}{}", index_list(&quad)))
        .collect();

    format!(
        "{i}{name}\n{i}{{\n{i}{i}type {kind};\n{i}{i}faces\n{i}{i}(\n{faces}\n{i}{i});\n{i}}}",
        i = INDENT,
        name = patch.name(),
        kind = mesh.patch_type(patch.name()),
        faces = faces.join("\n"),
    )
}
