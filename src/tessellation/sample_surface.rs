use tracing::debug;

use crate::error::{Result, TessellationError};
use crate::math::Point3;

/// Samples one lens surface (a spherical cap or a plane) on a square grid
/// warped onto a disc.
///
/// The grid has `2 * segments + 1` points per side. Grid coordinate
/// `(i, j)`, with `i, j` in `[-segments, segments]`, maps `i` to the x axis
/// and `j` to the y axis. Vertices are emitted row-major with `i` outer, so
/// the vertex at `(i, j)` has index `(i + segments) * span + (j + segments)`.
///
/// The lens sits on the x-y plane and surfaces open toward +z. A positive
/// radius bends the surface toward -z relative to its edge; zero radius is a
/// flat disc at `z_offset`.
pub struct SampleSurface {
    segments: u32,
    semi_diameter: f64,
    radius: f64,
    z_offset: f64,
}

impl SampleSurface {
    /// Creates a new `SampleSurface` operation with no z offset.
    #[must_use]
    pub fn new(segments: u32, semi_diameter: f64, radius: f64) -> Self {
        Self {
            segments,
            semi_diameter,
            radius,
            z_offset: 0.0,
        }
    }

    /// Shifts every sampled vertex along z.
    #[must_use]
    pub fn with_z_offset(mut self, z_offset: f64) -> Self {
        self.z_offset = z_offset;
        self
    }

    /// Number of vertices on one side of the grid: `2 * segments + 1`.
    ///
    /// Returns `None` if it does not fit in a `u32`.
    #[must_use]
    pub fn span(segments: u32) -> Option<u32> {
        segments.checked_mul(2)?.checked_add(1)
    }

    /// Total number of vertices produced for `segments`: `span²`.
    ///
    /// Returns `None` if it does not fit in a `u32`.
    #[must_use]
    pub fn vertex_count(segments: u32) -> Option<u32> {
        let span = Self::span(segments)?;
        span.checked_mul(span)
    }

    /// The semi-diameter actually sampled: a curved surface cannot be
    /// sampled wider than its own radius.
    #[must_use]
    pub fn effective_semi_diameter(&self) -> f64 {
        if self.radius != 0.0 && self.semi_diameter > self.radius.abs() {
            self.radius.abs()
        } else {
            self.semi_diameter
        }
    }

    /// Executes the sampling, returning `(2 * segments + 1)²` vertices.
    ///
    /// # Errors
    ///
    /// Returns an error if `segments` is zero, the grid is too large to index
    /// with `u32`, or any input is not finite or the semi-diameter is negative.
    pub fn execute(&self) -> Result<Vec<Point3>> {
        self.validate()?;

        let semi_diameter = self.effective_semi_diameter();
        if semi_diameter < self.semi_diameter {
            debug!(
                requested = self.semi_diameter,
                radius = self.radius,
                "semi-diameter clamped to surface radius"
            );
        }

        let seg = f64::from(self.segments);
        let n = 2 * self.segments;
        let mut vertices = Vec::with_capacity(
            Self::vertex_count(self.segments).map_or(0, |c| c as usize),
        );

        for row in 0..=n {
            let i = f64::from(row) - seg;
            for col in 0..=n {
                let j = f64::from(col) - seg;
                vertices.push(self.sample(i, j, seg, semi_diameter));
            }
        }

        Ok(vertices)
    }

    fn validate(&self) -> Result<()> {
        if self.segments == 0 {
            return Err(
                TessellationError::InvalidParameters("segments must be at least 1".into()).into(),
            );
        }
        if Self::vertex_count(self.segments).is_none() {
            return Err(TessellationError::InvalidParameters(format!(
                "{} segments exceed the addressable vertex count",
                self.segments
            ))
            .into());
        }
        if !(self.semi_diameter.is_finite() && self.radius.is_finite() && self.z_offset.is_finite())
        {
            return Err(TessellationError::InvalidParameters(
                "surface parameters must be finite".into(),
            )
            .into());
        }
        if self.semi_diameter < 0.0 {
            return Err(TessellationError::InvalidParameters(format!(
                "semi-diameter must be non-negative, got {}",
                self.semi_diameter
            ))
            .into());
        }
        Ok(())
    }

    /// Computes the vertex at grid coordinate `(i, j)`.
    fn sample(&self, i: f64, j: f64, seg: f64, semi_diameter: f64) -> Point3 {
        let (x, y) = warp_to_disc(i.abs() / seg, j.abs() / seg);
        let x = grid_sign(i) * x * semi_diameter;
        let y = grid_sign(j) * y * semi_diameter;

        let r = x.hypot(y);
        let mut z = if self.radius.abs() > r {
            (self.radius * self.radius - r * r).sqrt()
        } else {
            0.0
        };
        if self.radius > 0.0 {
            z = -z;
        }

        Point3::new(x, y, z + self.radius + self.z_offset)
    }
}

/// Maps a point of the unit square `[0, 1]²` onto the unit quarter-disc.
///
/// The square's outer edges (`u = 1` or `v = 1`) land exactly on the unit
/// circle, and `(0, 0)` stays at the origin. Compared with polar sampling the
/// cells keep a similar area and aspect ratio, and there is no pole.
fn warp_to_disc(u: f64, v: f64) -> (f64, f64) {
    // (1 - u)(1 - v) + 1, never below 1 on the unit square.
    let denom = u * v - u - v + 2.0;
    let x = u * ((v - u + 2.0) / denom).sqrt() * (2.0 - v) / 2.0;
    let y = v * ((u - v + 2.0) / denom).sqrt() * (2.0 - u) / 2.0;
    (x, y)
}

/// Sign of a grid coordinate: `-1`, `0` or `1`.
fn grid_sign(i: f64) -> f64 {
    if i < 0.0 {
        -1.0
    } else if i > 0.0 {
        1.0
    } else {
        0.0
    }
}
