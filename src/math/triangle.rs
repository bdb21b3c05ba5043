use crate::error::{GeometryError, Result};

use super::TOLERANCE;

/// Area of a triangle given the lengths of its three sides (Heron's formula).
///
/// `s = (a + b + c) / 2`, `area = sqrt(s (s - a) (s - b) (s - c))`.
///
/// A radicand that is negative only by rounding (within [`TOLERANCE`]) is
/// treated as a flat triangle with zero area.
///
/// # Errors
///
/// Returns [`GeometryError::Degenerate`] if any side is not finite, or if the
/// side lengths cannot form a triangle.
pub fn triangle_area(a: f64, b: f64, c: f64) -> Result<f64> {
    if !(a.is_finite() && b.is_finite() && c.is_finite()) {
        return Err(GeometryError::Degenerate(format!(
            "triangle sides must be finite, got ({a}, {b}, {c})"
        ))
        .into());
    }

    let s = (a + b + c) / 2.0;
    let radicand = s * (s - a) * (s - b) * (s - c);
    if radicand < -TOLERANCE {
        return Err(GeometryError::Degenerate(format!(
            "sides ({a}, {b}, {c}) do not form a triangle"
        ))
        .into());
    }

    Ok(radicand.max(0.0).sqrt())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn right_triangle() {
        assert_relative_eq!(triangle_area(3.0, 4.0, 5.0).unwrap(), 6.0);
    }

    #[test]
    fn equilateral_triangle() {
        let expected = 3.0_f64.sqrt() / 4.0 * 4.0;
        assert_relative_eq!(triangle_area(2.0, 2.0, 2.0).unwrap(), expected, epsilon = 1e-12);
    }

    #[test]
    fn flat_triangle_has_zero_area() {
        assert_relative_eq!(triangle_area(1.0, 2.0, 3.0).unwrap(), 0.0);
    }

    #[test]
    fn impossible_sides_fail() {
        assert!(triangle_area(1.0, 1.0, 5.0).is_err());
    }

    #[test]
    fn nan_side_fails() {
        assert!(triangle_area(f64::NAN, 1.0, 1.0).is_err());
    }
}
