//! Perlin noise implementation.
//!
//! Pure Rust implementation of 3D Perlin noise for deterministic output.

use super::{lerp, quintic, Noise3D};
use crate::rng::DeterministicRng;

/// 3D Perlin noise generator.
#[derive(Clone)]
pub struct Perlin3 {
    /// Permutation table (256 values, doubled for wrapping).
    perm: [u8; 512],
}

impl Perlin3 {
    /// Gradient vectors for 3D: the twelve cube edge midpoints.
    const GRAD3: [[f64; 3]; 12] = [
        [1.0, 1.0, 0.0],
        [-1.0, 1.0, 0.0],
        [1.0, -1.0, 0.0],
        [-1.0, -1.0, 0.0],
        [1.0, 0.0, 1.0],
        [-1.0, 0.0, 1.0],
        [1.0, 0.0, -1.0],
        [-1.0, 0.0, -1.0],
        [0.0, 1.0, 1.0],
        [0.0, -1.0, 1.0],
        [0.0, 1.0, -1.0],
        [0.0, -1.0, -1.0],
    ];

    /// Create a new Perlin noise generator with the given seed.
    pub fn new(seed: f64) -> Self {
        let mut rng = DeterministicRng::from_seed(seed);

        // Initialize permutation table
        let mut perm = [0u8; 512];
        let mut source: Vec<u8> = (0..=255).collect();

        // Fisher-Yates shuffle
        for i in (1..256).rev() {
            let j = rng.gen_range(0..=i);
            source.swap(i, j);
        }

        // Double the permutation table for overflow handling
        perm[..256].copy_from_slice(&source);
        perm[256..512].copy_from_slice(&source);

        Self { perm }
    }

    /// Hash function for grid coordinates.
    #[inline]
    fn hash(&self, x: i32, y: i32, z: i32) -> usize {
        let xi = (x & 255) as usize;
        let yi = (y & 255) as usize;
        let zi = (z & 255) as usize;
        self.perm[xi + self.perm[yi + self.perm[zi] as usize] as usize] as usize
    }

    /// Compute gradient dot product.
    #[inline]
    fn grad(&self, hash: usize, x: f64, y: f64, z: f64) -> f64 {
        let g = &Self::GRAD3[hash % 12];
        g[0] * x + g[1] * y + g[2] * z
    }

    /// Fast floor function.
    #[inline]
    fn fast_floor(x: f64) -> i32 {
        if x >= 0.0 {
            x as i32
        } else {
            x as i32 - 1
        }
    }
}

impl Noise3D for Perlin3 {
    fn sample(&self, x: f64, y: f64, z: f64) -> f64 {
        // Grid cell coordinates
        let x0 = Self::fast_floor(x);
        let y0 = Self::fast_floor(y);
        let z0 = Self::fast_floor(z);

        // Fractional parts
        let fx = x - x0 as f64;
        let fy = y - y0 as f64;
        let fz = z - z0 as f64;

        // Smoothed interpolation weights
        let u = quintic(fx);
        let v = quintic(fy);
        let w = quintic(fz);

        // Gradient dot products at the eight cell corners
        let n000 = self.grad(self.hash(x0, y0, z0), fx, fy, fz);
        let n100 = self.grad(self.hash(x0 + 1, y0, z0), fx - 1.0, fy, fz);
        let n010 = self.grad(self.hash(x0, y0 + 1, z0), fx, fy - 1.0, fz);
        let n110 = self.grad(self.hash(x0 + 1, y0 + 1, z0), fx - 1.0, fy - 1.0, fz);
        let n001 = self.grad(self.hash(x0, y0, z0 + 1), fx, fy, fz - 1.0);
        let n101 = self.grad(self.hash(x0 + 1, y0, z0 + 1), fx - 1.0, fy, fz - 1.0);
        let n011 = self.grad(self.hash(x0, y0 + 1, z0 + 1), fx, fy - 1.0, fz - 1.0);
        let n111 = self.grad(
            self.hash(x0 + 1, y0 + 1, z0 + 1),
            fx - 1.0,
            fy - 1.0,
            fz - 1.0,
        );

        // Trilinear interpolation
        let nx00 = lerp(n000, n100, u);
        let nx10 = lerp(n010, n110, u);
        let nx01 = lerp(n001, n101, u);
        let nx11 = lerp(n011, n111, u);

        let nxy0 = lerp(nx00, nx10, v);
        let nxy1 = lerp(nx01, nx11, v);

        lerp(nxy0, nxy1, w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perlin_deterministic() {
        let noise1 = Perlin3::new(0.42);
        let noise2 = Perlin3::new(0.42);

        for i in 0..100 {
            let x = i as f64 * 0.1;
            let y = i as f64 * 0.13;
            let z = i as f64 * 0.07;
            assert_eq!(noise1.sample(x, y, z), noise2.sample(x, y, z));
        }
    }

    #[test]
    fn test_perlin_seed_variation() {
        let noise1 = Perlin3::new(0.42);
        let noise2 = Perlin3::new(0.43);

        let mut any_different = false;
        for i in 0..100 {
            let x = i as f64 * 0.17;
            if noise1.sample(x, 0.5, 0.5) != noise2.sample(x, 0.5, 0.5) {
                any_different = true;
                break;
            }
        }
        assert!(any_different, "different seeds should change the field");
    }

    #[test]
    fn test_perlin_range() {
        let noise = Perlin3::new(0.42);
        let mut min = f64::MAX;
        let mut max = f64::MIN;

        for i in 0..50 {
            for j in 0..50 {
                for k in 0..50 {
                    let v = noise.sample(i as f64 * 0.13, j as f64 * 0.11, k as f64 * 0.17);
                    min = min.min(v);
                    max = max.max(v);
                }
            }
        }

        // Perlin noise values should be roughly in [-1, 1]
        assert!(min >= -1.5);
        assert!(max <= 1.5);
    }

    #[test]
    fn test_perlin_zero_at_lattice_points() {
        // Gradients dot a zero offset vector at integer coordinates.
        let noise = Perlin3::new(0.42);
        assert_eq!(noise.sample(0.0, 0.0, 0.0), 0.0);
        assert_eq!(noise.sample(3.0, -2.0, 7.0), 0.0);
    }

    #[test]
    fn test_sample_01_normalization() {
        let noise = Perlin3::new(0.42);
        for i in 0..200 {
            let t = i as f64 * 0.23;
            let v = noise.sample_01(t, t * 0.7, t * 1.3);
            assert!((0.0..=1.0).contains(&v), "sample_01 out of range: {}", v);
        }
    }
}
