//! # Block Tests
//!
//! Face mapping, construction checks and grading resolution.

use super::*;
use crate::block::grading::cells_for_size;
use crate::error::MeshError;

const HEX: [usize; 8] = [10, 11, 12, 13, 14, 15, 16, 17];

fn uniform(count: usize) -> [AxisSpec; 3] {
    [AxisSpec::count(count); 3]
}

// =============================================================================
// CONSTRUCTION
// =============================================================================

#[test]
fn test_block_needs_eight_vertices() {
    let result = Block::new(&HEX[..7], uniform(2));
    assert!(matches!(result, Err(MeshError::Validation { .. })));

    let nine = [0, 1, 2, 3, 4, 5, 6, 7, 8];
    assert!(Block::new(&nine, uniform(2)).is_err());
}

#[test]
fn test_block_rejects_repeated_vertex() {
    let result = Block::new(&[0, 1, 2, 3, 4, 5, 6, 0], uniform(2));
    assert!(matches!(result, Err(MeshError::Validation { .. })));
}

#[test]
fn test_block_rejects_bad_axis_values() {
    let rest = AxisSpec::count(1);
    for bad in [
        AxisSpec::count(0),
        AxisSpec::size(-0.1),
        AxisSpec::count(1).with_ratio(0.0),
        AxisSpec::count(1).with_ratio(f64::NAN),
    ] {
        assert!(Block::new(&HEX, [bad, rest, rest]).is_err(), "{bad:?}");
    }
}

// =============================================================================
// FACES
// =============================================================================

#[test]
fn test_face_vertices() {
    let block = Block::new(&HEX, uniform(1)).unwrap();
    assert_eq!(block.face_vertices(Face::Bottom), [10, 11, 12, 13]);
    assert_eq!(block.face_vertices(Face::Top), [14, 15, 16, 17]);
    assert_eq!(block.face_vertices(Face::Left), [14, 10, 13, 17]);
    assert_eq!(block.face_vertices(Face::Right), [15, 11, 12, 16]);
    assert_eq!(block.face_vertices(Face::Front), [14, 15, 11, 10]);
    assert_eq!(block.face_vertices(Face::Back), [17, 16, 12, 13]);
}

#[test]
fn test_each_vertex_on_three_faces() {
    let mut seen = [0usize; 8];
    for face in Face::ALL {
        for local in face.local_vertices() {
            seen[local] += 1;
        }
    }
    assert_eq!(seen, [3; 8]);
}

#[test]
fn test_face_names_parse() {
    for face in Face::ALL {
        assert_eq!(face.name().parse::<Face>().unwrap(), face);
    }
    assert!(matches!("lft".parse::<Face>(), Err(MeshError::Validation { .. })));
    assert!("Left".parse::<Face>().is_err());
}

#[test]
fn test_face_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Face::Bottom).unwrap(), "\"bottom\"");
    let face: Face = serde_json::from_str("\"back\"").unwrap();
    assert_eq!(face, Face::Back);
}

#[test]
fn test_unassigned_faces() {
    let mut block = Block::new(&HEX, uniform(1)).unwrap();
    block.assign_patch(Face::Top, "walls");
    block.assign_patch(Face::Bottom, "walls");

    let open: Vec<Face> = block.unassigned_faces().collect();
    assert_eq!(open, vec![Face::Left, Face::Right, Face::Front, Face::Back]);
    assert_eq!(block.patch(Face::Top), Some("walls"));
    assert_eq!(block.patch(Face::Left), None);
}

// =============================================================================
// GRADING
// =============================================================================

#[test]
fn test_cells_for_size() {
    assert_eq!(cells_for_size(1.0, 0.1), 10);
    assert_eq!(cells_for_size(1.0, 0.09), 11);
    assert_eq!(cells_for_size(2.5, 1.0), 3);
    assert_eq!(cells_for_size(0.1, 1.0), 1);
}

#[test]
fn test_resolve_modes() {
    let explicit = AxisSpec::count(7).resolve(100.0, 10);
    assert_eq!(explicit.count, 7);
    assert_eq!(explicit.ratio, 1.0);

    let sized = AxisSpec::size(0.25).resolve(2.0, 10);
    assert_eq!(sized.count, 8);

    let fallback = AxisSpec::default().resolve(2.0, 4);
    assert_eq!(fallback.count, 4);
}

#[test]
fn test_ratio_passes_through() {
    let resolved = AxisSpec::size(0.1).with_ratio(0.2).resolve(1.0, 10);
    assert_eq!(resolved.count, 10);
    assert_eq!(resolved.ratio, 0.2);
}

#[test]
fn test_grading_display() {
    let grading = Grading {
        axes: [
            AxisSpec::count(2).resolve(1.0, 10),
            AxisSpec::count(3).with_ratio(0.5).resolve(1.0, 10),
            AxisSpec::count(4).with_ratio(4.0).resolve(1.0, 10),
        ],
    };
    assert_eq!(grading.to_string(), "(2 3 4) simpleGrading (1 0.5 4)");
}

#[test]
fn test_axis_edges() {
    let block = Block::new(&HEX, uniform(1)).unwrap();
    assert_eq!(block.axis_edge(Axis::X), (10, 11));
    assert_eq!(block.axis_edge(Axis::Y), (10, 13));
    assert_eq!(block.axis_edge(Axis::Z), (10, 14));
}
