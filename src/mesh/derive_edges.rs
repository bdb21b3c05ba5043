use std::collections::BTreeSet;

use super::{Edge, Face};

/// Derives the unique undirected edges of a face list.
///
/// Every consecutive index pair of every face, including the closing pair
/// from the last corner back to the first, contributes one [`Edge`]. The
/// result is sorted by `(min, max)` so identical faces always give identical
/// output.
pub struct DeriveEdges<'a> {
    faces: &'a [Face],
}

impl<'a> DeriveEdges<'a> {
    /// Creates a new `DeriveEdges` operation.
    #[must_use]
    pub fn new(faces: &'a [Face]) -> Self {
        Self { faces }
    }

    /// Executes the operation, returning the deduplicated edges.
    #[must_use]
    pub fn execute(&self) -> Vec<Edge> {
        let mut edges = BTreeSet::new();
        for face in self.faces {
            for k in 0..face.len() {
                edges.insert(Edge::new(face[k], face[(k + 1) % face.len()]));
            }
        }
        edges.into_iter().collect()
    }
}
