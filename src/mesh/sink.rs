use crate::error::Result;
use crate::math::Point3;

use super::{Edge, Face, Shading};

/// A host that receives finished mesh buffers, e.g. a scene graph that
/// builds its own mesh object from them.
///
/// Buffers are handed over in the order most mesh-construction APIs expect:
/// vertices, edges, then faces. Indices in `edges` and `faces` refer to
/// positions in `vertices`.
pub trait MeshSink {
    /// Takes the mesh buffers and the shading to apply to every face.
    ///
    /// # Errors
    ///
    /// Returns an error if the host rejects the mesh.
    fn commit(
        &mut self,
        vertices: &[Point3],
        edges: &[Edge],
        faces: &[Face],
        shading: Shading,
    ) -> Result<()>;
}
