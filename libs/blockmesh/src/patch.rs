//! # Patches
//!
//! Named groups of block faces, built up as faces are assigned.

use crate::block::Face;

/// Reference to one face of one block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FaceRef {
    pub block: usize,
    pub face: Face,
}

/// A boundary patch: a name and its faces in assignment order.
#[derive(Debug, Clone, PartialEq)]
pub struct Patch {
    name: String,
    faces: Vec<FaceRef>,
}

impl Patch {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            faces: Vec::new(),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Faces in the order they were assigned.
    #[inline]
    pub fn faces(&self) -> &[FaceRef] {
        &self.faces
    }

    pub fn contains(&self, face: FaceRef) -> bool {
        self.faces.contains(&face)
    }

    /// Appends a face; a face already present is not added again.
    pub(crate) fn push(&mut self, face: FaceRef) {
        if !self.contains(face) {
            self.faces.push(face);
        }
    }
}

/// Patch that collects every face not assigned elsewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultPatch {
    pub name: String,
    pub kind: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_ignores_repeats() {
        let mut patch = Patch::new("walls");
        let top = FaceRef { block: 0, face: Face::Top };
        let bottom = FaceRef { block: 0, face: Face::Bottom };

        patch.push(top);
        patch.push(bottom);
        patch.push(top);

        assert_eq!(patch.faces(), &[top, bottom]);
        assert!(patch.contains(bottom));
        assert!(!patch.contains(FaceRef { block: 1, face: Face::Top }));
    }
}
