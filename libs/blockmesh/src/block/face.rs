//! Logical faces of a hexahedral block.

use crate::error::MeshError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the six faces of a block.
///
/// Local vertex positions follow the blockMesh hex ordering: 0-3 is the
/// bottom face, 4-7 the top face, each wound the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Face {
    Left,
    Right,
    Front,
    Back,
    Top,
    Bottom,
}

impl Face {
    /// All faces, in declaration order.
    pub const ALL: [Face; 6] = [
        Face::Left,
        Face::Right,
        Face::Front,
        Face::Back,
        Face::Top,
        Face::Bottom,
    ];

    /// Position of this face in [`Face::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Lowercase name used by callers and in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Face::Left => "left",
            Face::Right => "right",
            Face::Front => "front",
            Face::Back => "back",
            Face::Top => "top",
            Face::Bottom => "bottom",
        }
    }

    /// Block-local vertex positions of this face.
    ///
    /// # Example
    ///
    /// ```rust
    /// use blockmesh::block::Face;
    ///
    /// assert_eq!(Face::Bottom.local_vertices(), [0, 1, 2, 3]);
    /// assert_eq!(Face::Top.local_vertices(), [4, 5, 6, 7]);
    /// ```
    pub fn local_vertices(self) -> [usize; 4] {
        match self {
            Face::Left => [4, 0, 3, 7],
            Face::Right => [5, 1, 2, 6],
            Face::Front => [4, 5, 1, 0],
            Face::Back => [7, 6, 2, 3],
            Face::Top => [4, 5, 6, 7],
            Face::Bottom => [0, 1, 2, 3],
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Face {
    type Err = MeshError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Face::ALL
            .into_iter()
            .find(|face| face.name() == s)
            .ok_or_else(|| {
                MeshError::validation(format!(
                    "unknown face '{s}', expected one of left, right, front, back, top, bottom"
                ))
            })
    }
}
