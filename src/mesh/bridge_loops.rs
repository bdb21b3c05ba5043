use crate::error::{OperationError, Result};

use super::{BoundaryLoop, Face};

/// Connects two boundary loops with a ring of quads.
///
/// For each position `i` of the loops the quad
/// `(first[i + 1], first[i], second[i], second[i + 1])` is emitted, indices
/// wrapping around. With `first` being the front surface and `second` the
/// back surface (both traced by [`super::TraceBoundary`]), the resulting rim
/// faces point radially outward.
pub struct BridgeLoops<'a> {
    first: &'a BoundaryLoop,
    second: &'a BoundaryLoop,
}

impl<'a> BridgeLoops<'a> {
    /// Creates a new `BridgeLoops` operation.
    #[must_use]
    pub fn new(first: &'a BoundaryLoop, second: &'a BoundaryLoop) -> Self {
        Self { first, second }
    }

    /// Executes the operation, returning one quad per loop vertex.
    ///
    /// # Errors
    ///
    /// Returns an error if the loops have different lengths.
    pub fn execute(&self) -> Result<Vec<Face>> {
        let a = self.first.indices();
        let b = self.second.indices();
        if a.len() != b.len() {
            return Err(OperationError::InvalidInput(format!(
                "cannot bridge loops of length {} and {}",
                a.len(),
                b.len()
            ))
            .into());
        }

        let n = a.len();
        Ok((0..n)
            .map(|i| {
                let next = (i + 1) % n;
                [a[next], a[i], b[i], b[next]]
            })
            .collect())
    }
}
