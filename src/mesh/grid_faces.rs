use crate::error::{Result, TessellationError};
use crate::tessellation::SampleSurface;

use super::{index_end, Face, Winding};

/// Builds the quad faces of one sampled surface grid.
///
/// Produces `(2 * segments)²` quads over a `span x span` vertex grid laid
/// out as [`SampleSurface`] emits it.
pub struct GridFaces {
    segments: u32,
    offset: u32,
    winding: Winding,
}

impl GridFaces {
    /// Creates a new `GridFaces` operation with forward winding and no index
    /// offset.
    #[must_use]
    pub fn new(segments: u32) -> Self {
        Self {
            segments,
            offset: 0,
            winding: Winding::Forward,
        }
    }

    /// Adds `offset` to every vertex index, for a grid stored after other
    /// vertices in a shared buffer.
    #[must_use]
    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    /// Sets the quad winding.
    #[must_use]
    pub fn with_winding(mut self, winding: Winding) -> Self {
        self.winding = winding;
        self
    }

    /// Executes the operation, returning the faces cell by cell.
    ///
    /// # Errors
    ///
    /// Returns an error if the offset grid indices do not fit in a `u32`.
    pub fn execute(&self) -> Result<Vec<Face>> {
        let (Some(span), Some(count)) = (
            SampleSurface::span(self.segments),
            SampleSurface::vertex_count(self.segments),
        ) else {
            return Err(TessellationError::InvalidParameters(format!(
                "{} segments exceed the addressable vertex count",
                self.segments
            ))
            .into());
        };
        index_end(self.offset, count)?;

        let cells = 2 * self.segments;
        let mut faces = Vec::with_capacity((cells as usize).pow(2));
        for i in 0..cells {
            for j in 0..cells {
                let n = i + j * span + self.offset;
                faces.push(self.winding.quad(n, span));
            }
        }
        Ok(faces)
    }
}
