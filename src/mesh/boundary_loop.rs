use crate::error::{Result, TessellationError};
use crate::tessellation::SampleSurface;

use super::index_end;

/// The cyclic, ordered vertex indices around the perimeter of a surface grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundaryLoop {
    indices: Vec<u32>,
}

impl BoundaryLoop {
    /// The loop's vertex indices in traversal order.
    #[must_use]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Number of vertices in the loop.
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns `true` if the loop has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Traces the boundary loop of a `span x span` surface grid.
///
/// Traversal order, for a grid laid out as [`SampleSurface`] emits it:
/// the first row left to right, down the last column, the last row right to
/// left, then up the first column. For a 4x4 grid:
///
/// ```text
///  0  1  2  3
///  4  5  6  7      ->  [0, 1, 2, 3, 7, 11, 15, 14, 13, 12, 8, 4]
///  8  9 10 11
/// 12 13 14 15
/// ```
///
/// Every surface is traced in this same order, so two loops of equal
/// `segments` can be bridged index by index.
pub struct TraceBoundary {
    segments: u32,
    offset: u32,
}

impl TraceBoundary {
    /// Creates a new `TraceBoundary` operation with no index offset.
    #[must_use]
    pub fn new(segments: u32) -> Self {
        Self {
            segments,
            offset: 0,
        }
    }

    /// Adds `offset` to every traced index.
    #[must_use]
    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    /// Executes the trace, returning `4 * span - 4` indices.
    ///
    /// # Errors
    ///
    /// Returns an error if the offset grid indices do not fit in a `u32`.
    pub fn execute(&self) -> Result<BoundaryLoop> {
        let (Some(w), Some(count)) = (
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

        let last = w - 1;
        let top = 0..w;
        let right = (1..w).map(|row| row * w + last);
        let bottom = (0..last).rev().map(|col| last * w + col);
        let left = (1..last).rev().map(|row| row * w);

        let indices = top
            .chain(right)
            .chain(bottom)
            .chain(left)
            .map(|i| i + self.offset)
            .collect();
        Ok(BoundaryLoop { indices })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn traces_perimeter_in_order() {
        let boundary = TraceBoundary::new(1).execute().unwrap();
        assert_eq!(boundary.indices(), &[0, 1, 2, 5, 8, 7, 6, 3]);
    }

    #[test]
    fn applies_offset() {
        let boundary = TraceBoundary::new(1).with_offset(9).execute().unwrap();
        assert_eq!(boundary.indices(), &[9, 10, 11, 14, 17, 16, 15, 12]);
    }

    #[test]
    fn loop_length() {
        for segments in 1..=8 {
            let span = 2 * segments as usize + 1;
            let boundary = TraceBoundary::new(segments).execute().unwrap();
            assert_eq!(boundary.len(), 4 * span - 4);
        }
    }

    #[test]
    fn visits_each_perimeter_vertex_once() {
        let boundary = TraceBoundary::new(3).execute().unwrap();
        let mut sorted = boundary.indices().to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), boundary.len());

        let w = 7;
        for &i in boundary.indices() {
            let (row, col) = (i / w, i % w);
            assert!(row == 0 || col == 0 || row == w - 1 || col == w - 1);
        }
    }

    #[test]
    fn consecutive_entries_are_grid_neighbours() {
        let w = 5;
        let boundary = TraceBoundary::new(2).execute().unwrap();
        let idx = boundary.indices();
        for k in 0..idx.len() {
            let (a, b) = (idx[k], idx[(k + 1) % idx.len()]);
            let step = a.abs_diff(b);
            assert!(step == 1 || step == w, "{a} -> {b}");
        }
    }
}
