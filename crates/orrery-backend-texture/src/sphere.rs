//! Equirectangular sphere sampling.
//!
//! The texture is a longitude/latitude unwrap of the planet's surface: each
//! pixel's grid position maps to spherical angles and then to a point on
//! the unit sphere, where the noise field is sampled. Column `u` spans the
//! full longitude range and row `v` runs pole to pole, so the finished
//! buffer tiles horizontally and is consumed with wrap addressing.

use std::f64::consts::PI;

/// Grid fractions (u, v) in [0, 1) x [0, 1) for a linear pixel index.
///
/// Row-major: `u` advances along a row, `v` selects the row.
#[inline]
pub fn grid_uv(index: usize, dimension: u32) -> (f64, f64) {
    let dim = dimension as usize;
    let u = (index % dim) as f64 / dimension as f64;
    let v = (index / dim) as f64 / dimension as f64;
    (u, v)
}

/// Spherical angles for grid fractions: longitude `theta` in [0, 2pi) and
/// colatitude `phi` in [0, pi).
#[inline]
pub fn spherical_angles(u: f64, v: f64) -> (f64, f64) {
    (u * 2.0 * PI, v * PI)
}

/// Unit-sphere Cartesian point for grid fractions.
///
/// `y` is the rotation axis: `v = 0` is the north pole at (0, 1, 0),
/// `v = 0.5` the equator.
#[inline]
pub fn sphere_point(u: f64, v: f64) -> [f64; 3] {
    let (theta, phi) = spherical_angles(u, v);
    [
        theta.cos() * phi.sin(),
        phi.cos(),
        theta.sin() * phi.sin(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn grid_uv_row_major() {
        // dimension 4: index 0 -> (0, 0), index 3 -> (0.75, 0),
        // index 4 -> (0, 0.25), index 15 -> (0.75, 0.75)
        assert_eq!(grid_uv(0, 4), (0.0, 0.0));
        assert_eq!(grid_uv(3, 4), (0.75, 0.0));
        assert_eq!(grid_uv(4, 4), (0.0, 0.25));
        assert_eq!(grid_uv(15, 4), (0.75, 0.75));
    }

    #[test]
    fn grid_uv_stays_below_one() {
        let dim = 16u32;
        for i in 0..(dim * dim) as usize {
            let (u, v) = grid_uv(i, dim);
            assert!((0.0..1.0).contains(&u));
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn angles_cover_longitude_and_colatitude() {
        let (theta, phi) = spherical_angles(0.5, 0.5);
        assert!(approx_eq(theta, PI));
        assert!(approx_eq(phi, PI / 2.0));
    }

    #[test]
    fn north_pole_at_v_zero() {
        let [x, y, z] = sphere_point(0.0, 0.0);
        assert!(approx_eq(x, 0.0));
        assert!(approx_eq(y, 1.0));
        assert!(approx_eq(z, 0.0));
    }

    #[test]
    fn equator_at_theta_zero_faces_positive_x() {
        let [x, y, z] = sphere_point(0.0, 0.5);
        assert!(approx_eq(x, 1.0));
        assert!(approx_eq(y, 0.0));
        assert!(approx_eq(z, 0.0));
    }

    #[test]
    fn quarter_turn_faces_positive_z() {
        let [x, y, z] = sphere_point(0.25, 0.5);
        assert!(approx_eq(x, 0.0));
        assert!(approx_eq(y, 0.0));
        assert!(approx_eq(z, 1.0));
    }

    #[test]
    fn points_lie_on_the_unit_sphere() {
        for i in 0..32 {
            for j in 1..32 {
                let u = i as f64 / 32.0;
                let v = j as f64 / 32.0;
                let [x, y, z] = sphere_point(u, v);
                let r = (x * x + y * y + z * z).sqrt();
                assert!((r - 1.0).abs() < 1e-12);
            }
        }
    }
}
