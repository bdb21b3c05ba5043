use crate::error::{GeometryError, Result};

use super::{triangle_area, TOLERANCE};

/// Derives a semi-diameter from the surface radii and lens thickness.
///
/// With `t = |r1 + r2 - thickness|` (the distance between the two sphere
/// centers), the result is the radius of the circle where the two surfaces
/// meet:
///
/// - both radii zero (two plano surfaces): `0`, there is nothing to derive
/// - one radius zero: `sqrt(r1² + r2² - t²)`
/// - otherwise: the height of the triangle with sides `|r1|`, `|r2|`, `t`,
///   i.e. `2 * area / t`
///
/// `r2` is expected in the same orientation as `r1`; a lens whose back
/// surface faces the opposite way passes `-radius2`.
///
/// # Errors
///
/// Returns [`GeometryError::Degenerate`] if the surfaces never meet (negative
/// radicand or impossible triangle), or if both surfaces are curved and their
/// centers coincide (`t` near zero).
pub fn auto_semi_diameter(r1: f64, r2: f64, thickness: f64) -> Result<f64> {
    let t = (r1 + r2 - thickness).abs();

    if r1 == 0.0 && r2 == 0.0 {
        return Ok(0.0);
    }

    if r1 == 0.0 || r2 == 0.0 {
        let radicand = r1 * r1 + r2 * r2 - t * t;
        if radicand < -TOLERANCE {
            return Err(GeometryError::Degenerate(format!(
                "plano surface does not intersect the curved surface (r1 = {r1}, r2 = {r2}, thickness = {thickness})"
            ))
            .into());
        }
        return Ok(radicand.max(0.0).sqrt());
    }

    if t < TOLERANCE {
        return Err(GeometryError::Degenerate(format!(
            "surface centers coincide (r1 = {r1}, r2 = {r2}, thickness = {thickness})"
        ))
        .into());
    }

    Ok(triangle_area(r1.abs(), r2.abs(), t)? / t * 2.0)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn plano_convex() {
        assert_relative_eq!(auto_semi_diameter(5.0, 0.0, 2.0).unwrap(), 4.0);
    }

    #[test]
    fn plano_on_first_surface() {
        assert_relative_eq!(auto_semi_diameter(0.0, 5.0, 2.0).unwrap(), 4.0);
    }

    #[test]
    fn two_planes_give_zero() {
        assert_relative_eq!(auto_semi_diameter(0.0, 0.0, 3.0).unwrap(), 0.0);
    }

    #[test]
    fn symmetric_biconvex() {
        // Sphere centers 9 apart, both radius 5: circle radius sqrt(25 - 4.5²).
        let sd = auto_semi_diameter(5.0, 5.0, 1.0).unwrap();
        assert_relative_eq!(sd, 4.75_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn coincident_centers_fail() {
        assert!(auto_semi_diameter(3.0, 2.0, 5.0).is_err());
    }

    #[test]
    fn disjoint_spheres_fail() {
        assert!(auto_semi_diameter(1.0, 1.0, -10.0).is_err());
    }

    #[test]
    fn plane_outside_sphere_fails() {
        assert!(auto_semi_diameter(2.0, 0.0, -5.0).is_err());
    }
}
