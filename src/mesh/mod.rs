mod boundary_loop;
mod bridge_loops;
mod derive_edges;
mod grid_faces;
mod lens_mesh;
mod sink;

pub use boundary_loop::{BoundaryLoop, TraceBoundary};
pub use bridge_loops::BridgeLoops;
pub use derive_edges::DeriveEdges;
pub use grid_faces::GridFaces;
pub use lens_mesh::{Aabb, LensMesh};
pub use sink::MeshSink;

use crate::error::{OperationError, Result};

/// A quad face: four vertex indices. The winding order determines which side
/// the face normal points to (right-hand rule).
pub type Face = [u32; 4];

/// An undirected edge between two vertices, stored as `(min, max)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
    a: u32,
    b: u32,
}

impl Edge {
    /// Creates an edge; the endpoints are canonicalized so that
    /// `Edge::new(a, b) == Edge::new(b, a)`.
    #[must_use]
    pub fn new(a: u32, b: u32) -> Self {
        Self {
            a: a.min(b),
            b: a.max(b),
        }
    }

    /// Returns the endpoints as `(min, max)`.
    #[must_use]
    pub fn vertices(self) -> (u32, u32) {
        (self.a, self.b)
    }
}

/// Quad winding of a sampled surface grid.
///
/// On a grid where index `+1` steps along +y and `+span` steps along +x,
/// [`Winding::Forward`] faces have normals toward -z and
/// [`Winding::Reversed`] faces toward +z.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
    /// `(n, n + 1, n + span + 1, n + span)`.
    Forward,
    /// `(n + span, n + span + 1, n + 1, n)`.
    Reversed,
}

impl Winding {
    /// Builds the quad whose first corner in grid order is `n`.
    #[must_use]
    pub fn quad(self, n: u32, span: u32) -> Face {
        match self {
            Self::Forward => [n, n + 1, n + span + 1, n + span],
            Self::Reversed => [n + span, n + span + 1, n + 1, n],
        }
    }
}

/// One of the two capping surfaces of a lens.
///
/// The front surface lies at `z = 0` and faces -z; the back surface is offset
/// by the lens thickness and faces +z.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LensSurface {
    /// Surface 1, described by `radius1`.
    Front,
    /// Surface 2, described by `radius2`.
    Back,
}

impl LensSurface {
    /// Winding that makes this surface's faces point away from the lens body.
    #[must_use]
    pub fn winding(self) -> Winding {
        match self {
            Self::Front => Winding::Forward,
            Self::Back => Winding::Reversed,
        }
    }

    /// Offset of this surface along z for a lens of the given thickness.
    #[must_use]
    pub fn z_offset(self, thickness: f64) -> f64 {
        match self {
            Self::Front => 0.0,
            Self::Back => thickness,
        }
    }
}

/// Shading requested from the host for every face of the mesh.
///
/// Lenses are always smooth shaded; there is no per-mesh choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Shading {
    /// Interpolated vertex normals.
    #[default]
    Smooth,
}

/// Checks that the index range `[offset, offset + count)` fits in a `u32`
/// and returns its end.
fn index_end(offset: u32, count: u32) -> Result<u32> {
    offset.checked_add(count).ok_or_else(|| {
        OperationError::InvalidInput(format!(
            "index offset {offset} + {count} vertices overflows u32"
        ))
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_is_canonical() {
        assert_eq!(Edge::new(7, 3), Edge::new(3, 7));
        assert_eq!(Edge::new(7, 3).vertices(), (3, 7));
    }

    #[test]
    fn windings_are_reverses() {
        let mut forward = Winding::Forward.quad(4, 5);
        forward.reverse();
        assert_eq!(Winding::Reversed.quad(4, 5), forward);
    }

    #[test]
    fn default_shading_is_smooth() {
        assert_eq!(Shading::default(), Shading::Smooth);
    }

    #[test]
    fn surfaces_map_to_conventions() {
        assert_eq!(LensSurface::Front.winding(), Winding::Forward);
        assert_eq!(LensSurface::Back.winding(), Winding::Reversed);
        assert!(LensSurface::Front.z_offset(2.0).abs() < f64::EPSILON);
        assert!((LensSurface::Back.z_offset(2.0) - 2.0).abs() < f64::EPSILON);
    }
}
