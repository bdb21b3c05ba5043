use tracing::{debug, trace};

use crate::error::{GeometryError, OperationError, Result};
use crate::math::auto_semi_diameter;
use crate::mesh::{
    BridgeLoops, DeriveEdges, GridFaces, LensMesh, LensSurface, Shading, TraceBoundary,
};
use crate::tessellation::SampleSurface;

/// Input parameters of a lens.
///
/// A radius of `0` makes that surface flat. A `semi_diameter` of `0` asks
/// [`MakeLens`] to derive it from the radii and thickness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LensParameters {
    /// Curvature radius of the front surface.
    pub radius1: f64,
    /// Curvature radius of the back surface.
    pub radius2: f64,
    /// Half the lens aperture, `0` for automatic.
    pub semi_diameter: f64,
    /// Distance between the two surface vertices along z.
    pub thickness: f64,
    /// Grid segments per half-axis of each surface.
    pub segments: u32,
}

impl Default for LensParameters {
    fn default() -> Self {
        Self {
            radius1: 0.0,
            radius2: 0.0,
            semi_diameter: 1.0,
            thickness: 0.0,
            segments: 5,
        }
    }
}

impl LensParameters {
    /// Sets the front surface radius.
    #[must_use]
    pub fn with_radius1(mut self, radius1: f64) -> Self {
        self.radius1 = radius1;
        self
    }

    /// Sets the back surface radius.
    #[must_use]
    pub fn with_radius2(mut self, radius2: f64) -> Self {
        self.radius2 = radius2;
        self
    }

    /// Sets the semi-diameter (`0` for automatic).
    #[must_use]
    pub fn with_semi_diameter(mut self, semi_diameter: f64) -> Self {
        self.semi_diameter = semi_diameter;
        self
    }

    /// Sets the thickness.
    #[must_use]
    pub fn with_thickness(mut self, thickness: f64) -> Self {
        self.thickness = thickness;
        self
    }

    /// Sets the segment count.
    #[must_use]
    pub fn with_segments(mut self, segments: u32) -> Self {
        self.segments = segments;
        self
    }

    fn radius(&self, surface: LensSurface) -> f64 {
        match surface {
            LensSurface::Front => self.radius1,
            LensSurface::Back => self.radius2,
        }
    }
}

/// Creates a lens mesh: two sampled surfaces joined by a rim.
///
/// The front surface is sampled at `z = 0` and the back surface at
/// `z = thickness`. Both share one vertex buffer (back after front), their
/// grid faces are wound to face away from the lens body, and their boundary
/// loops are bridged into the rim. Every face is smooth shaded.
///
/// Zero thickness or equal radii are accepted and produce flat or
/// self-touching geometry.
pub struct MakeLens {
    params: LensParameters,
}

impl MakeLens {
    /// Creates a new `MakeLens` operation.
    #[must_use]
    pub fn new(params: LensParameters) -> Self {
        Self { params }
    }

    /// Resolves the semi-diameter that will be sampled: the explicit value,
    /// or one derived from the radii when it is `0`.
    ///
    /// The back radius is negated before derivation because the back surface
    /// faces the opposite way.
    ///
    /// # Errors
    ///
    /// Returns an error if derivation fails, or if both surfaces are flat so
    /// there is nothing to derive from.
    ///
    /// Curved surfaces that only touch (a plane tangent to a sphere, or two
    /// tangent spheres) derive `0` and yield a collapsed, degenerate lens.
    pub fn semi_diameter(&self) -> Result<f64> {
        let p = &self.params;
        if p.semi_diameter != 0.0 {
            return Ok(p.semi_diameter);
        }
        if p.radius1 == 0.0 && p.radius2 == 0.0 {
            return Err(OperationError::InvalidInput(
                "cannot derive a semi-diameter for two flat surfaces; set it explicitly".into(),
            )
            .into());
        }

        let derived = auto_semi_diameter(p.radius1, -p.radius2, p.thickness)?;
        debug!(
            radius1 = p.radius1,
            radius2 = p.radius2,
            thickness = p.thickness,
            semi_diameter = derived,
            "derived semi-diameter"
        );
        Ok(derived)
    }

    /// Executes the operation, returning the assembled mesh.
    ///
    /// # Errors
    ///
    /// Returns an error if a parameter is not finite, the semi-diameter is
    /// negative or cannot be derived, `segments` is zero, or the two surfaces
    /// together have more vertices than a `u32` index can address.
    pub fn execute(&self) -> Result<LensMesh> {
        self.validate()?;
        let p = &self.params;
        let semi_diameter = self.semi_diameter()?;

        let per_surface = SampleSurface::vertex_count(p.segments)
            .filter(|count| count.checked_mul(2).is_some())
            .ok_or_else(|| {
                OperationError::InvalidInput(format!(
                    "{} segments exceed the addressable vertex count",
                    p.segments
                ))
            })?;

        let mut mesh = LensMesh {
            shading: Shading::Smooth,
            ..LensMesh::default()
        };
        let mut loops = Vec::with_capacity(2);

        for (surface, offset) in [(LensSurface::Front, 0), (LensSurface::Back, per_surface)] {
            let vertices = SampleSurface::new(p.segments, semi_diameter, p.radius(surface))
                .with_z_offset(surface.z_offset(p.thickness))
                .execute()?;
            mesh.vertices.extend(vertices);

            let faces = GridFaces::new(p.segments)
                .with_offset(offset)
                .with_winding(surface.winding())
                .execute()?;
            mesh.faces.extend(faces);

            loops.push(TraceBoundary::new(p.segments).with_offset(offset).execute()?);
        }

        if let [front, back] = loops.as_slice() {
            mesh.faces.extend(BridgeLoops::new(front, back).execute()?);
        }
        mesh.edges = DeriveEdges::new(&mesh.faces).execute();

        trace!(
            vertices = mesh.vertex_count(),
            faces = mesh.face_count(),
            edges = mesh.edge_count(),
            "lens assembled"
        );
        Ok(mesh)
    }

    fn validate(&self) -> Result<()> {
        let p = &self.params;
        for (name, value) in [
            ("radius1", p.radius1),
            ("radius2", p.radius2),
            ("semi_diameter", p.semi_diameter),
            ("thickness", p.thickness),
        ] {
            if !value.is_finite() {
                return Err(
                    OperationError::InvalidInput(format!("{name} must be finite, got {value}"))
                        .into(),
                );
            }
        }
        if p.semi_diameter < 0.0 {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "semi_diameter",
                value: p.semi_diameter,
                min: 0.0,
                max: f64::INFINITY,
            }
            .into());
        }
        if p.segments == 0 {
            return Err(OperationError::InvalidInput("segments must be at least 1".into()).into());
        }
        Ok(())
    }
}
