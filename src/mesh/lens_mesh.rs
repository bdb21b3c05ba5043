use crate::error::Result;
use crate::math::{Point3, Vector3};

use super::{Edge, Face, MeshSink, Shading};

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point3,
    /// Maximum corner of the bounding box.
    pub max: Point3,
}

/// The generated lens: shared vertex buffer plus quad faces and the edges
/// derived from them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LensMesh {
    /// Vertex positions. Front surface first, then back surface.
    pub vertices: Vec<Point3>,
    /// Quad faces: front surface, back surface, then the rim.
    pub faces: Vec<Face>,
    /// Unique undirected edges of `faces`, sorted.
    pub edges: Vec<Edge>,
    /// Shading applied to every face.
    pub shading: Shading,
}

impl LensMesh {
    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of faces.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Per-face smooth-shading flags, one per face.
    pub fn smooth_flags(&self) -> impl Iterator<Item = bool> + '_ {
        self.faces.iter().map(|_| match self.shading {
            Shading::Smooth => true,
        })
    }

    /// Computes the bounding box of all vertices, or `None` if the mesh is
    /// empty.
    #[must_use]
    pub fn bounding_box(&self) -> Option<Aabb> {
        let first = *self.vertices.first()?;
        let (min, max) = self
            .vertices
            .iter()
            .fold((first, first), |(min, max), p| (min.inf(p), max.sup(p)));
        Some(Aabb { min, max })
    }

    /// Centroid of a face's corners.
    #[must_use]
    pub fn face_centroid(&self, face: &Face) -> Point3 {
        let sum = face
            .iter()
            .fold(Vector3::zeros(), |acc, &i| acc + self.vertices[i as usize].coords);
        Point3::from(sum / 4.0)
    }

    /// Unnormalized face normal by Newell's method.
    ///
    /// Follows the right-hand rule over the face's winding, and stays well
    /// defined for slightly non-planar quads.
    #[must_use]
    pub fn face_normal(&self, face: &Face) -> Vector3 {
        let mut n = Vector3::zeros();
        for k in 0..face.len() {
            let a = self.vertices[face[k] as usize];
            let b = self.vertices[face[(k + 1) % face.len()] as usize];
            n.x += (a.y - b.y) * (a.z + b.z);
            n.y += (a.z - b.z) * (a.x + b.x);
            n.z += (a.x - b.x) * (a.y + b.y);
        }
        n
    }

    /// Hands the mesh buffers to a host.
    ///
    /// # Errors
    ///
    /// Returns whatever error the sink reports.
    pub fn commit_to<S: MeshSink + ?Sized>(&self, sink: &mut S) -> Result<()> {
        sink.commit(&self.vertices, &self.edges, &self.faces, self.shading)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{LensError, OperationError};
    use approx::assert_relative_eq;

    fn unit_square() -> LensMesh {
        LensMesh {
            vertices: vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(1.0, 1.0, 0.0),
                Point3::new(0.0, 1.0, 2.0),
            ],
            faces: vec![[0, 1, 2, 3]],
            edges: vec![
                Edge::new(0, 1),
                Edge::new(0, 3),
                Edge::new(1, 2),
                Edge::new(2, 3),
            ],
            shading: Shading::Smooth,
        }
    }

    #[derive(Default)]
    struct Recorder {
        vertices: usize,
        edges: usize,
        faces: usize,
        shading: Option<Shading>,
    }

    impl MeshSink for Recorder {
        fn commit(
            &mut self,
            vertices: &[Point3],
            edges: &[Edge],
            faces: &[Face],
            shading: Shading,
        ) -> Result<()> {
            self.vertices = vertices.len();
            self.edges = edges.len();
            self.faces = faces.len();
            self.shading = Some(shading);
            Ok(())
        }
    }

    struct Rejecting;

    impl MeshSink for Rejecting {
        fn commit(&mut self, _: &[Point3], _: &[Edge], _: &[Face], _: Shading) -> Result<()> {
            Err(OperationError::Failed("scene is read-only".into()).into())
        }
    }

    #[test]
    fn counts() {
        let mesh = unit_square();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.face_count(), 1);
        assert_eq!(mesh.edge_count(), 4);
    }

    #[test]
    fn bounding_box() {
        let aabb = unit_square().bounding_box().unwrap();
        assert_eq!(aabb.min, Point3::new(0.0, 0.0, 0.0));
        assert_eq!(aabb.max, Point3::new(1.0, 1.0, 2.0));
        assert!(LensMesh::default().bounding_box().is_none());
    }

    #[test]
    fn counter_clockwise_quad_faces_up() {
        let mesh = LensMesh {
            vertices: vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(1.0, 1.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
            ],
            faces: vec![[0, 1, 2, 3]],
            ..LensMesh::default()
        };
        let n = mesh.face_normal(&mesh.faces[0]);
        assert_relative_eq!(n, Vector3::new(0.0, 0.0, 2.0));
        assert_relative_eq!(
            mesh.face_centroid(&mesh.faces[0]),
            Point3::new(0.5, 0.5, 0.0)
        );
    }

    #[test]
    fn smooth_flags_cover_every_face() {
        let mesh = unit_square();
        assert_eq!(mesh.smooth_flags().collect::<Vec<_>>(), vec![true]);
    }

    #[test]
    fn commits_all_buffers() {
        let mut recorder = Recorder::default();
        unit_square().commit_to(&mut recorder).unwrap();
        assert_eq!(recorder.vertices, 4);
        assert_eq!(recorder.edges, 4);
        assert_eq!(recorder.faces, 1);
        assert_eq!(recorder.shading, Some(Shading::Smooth));
    }

    #[test]
    fn sink_errors_propagate() {
        let err = unit_square().commit_to(&mut Rejecting).unwrap_err();
        assert!(matches!(err, LensError::Operation(OperationError::Failed(_))));
    }
}
