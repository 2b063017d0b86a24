//! The planet texture synthesizer.
//!
//! One pass over the pixel grid: map each index onto the unit sphere,
//! sample seeded 3D Perlin noise at a mode-dependent anisotropic scale,
//! classify the normalized value into a palette band, and write the RGBA
//! bytes. The same request always produces the same buffer.

use orrery_spec::{validate_dimension, Surface, TextureRequest};
use thiserror::Error;

use crate::buffer::PixelBuffer;
use crate::noise::{Noise3D, Perlin3};
use crate::palette::classify;
use crate::sphere::{grid_uv, sphere_point};

/// Noise-space scale for terrain surfaces: uniform in all axes.
pub const TERRAIN_NOISE_SCALE: [f64; 3] = [2.0, 2.0, 2.0];

/// Noise-space scale for gaseous surfaces. The y axis (the rotation axis)
/// is stretched 5x relative to x/z, which compresses the sampled field into
/// latitudinal cloud bands. The factor 10 is inherited aesthetic tuning,
/// not a derived quantity.
pub const GASEOUS_NOISE_SCALE: [f64; 3] = [2.0, 10.0, 2.0];

/// Errors from texture generation.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("invalid texture dimension: {0}")]
    InvalidDimension(String),
}

/// The noise-space scale used for a surface mode.
pub fn noise_scale(surface: &Surface) -> [f64; 3] {
    match surface {
        Surface::Terrain { .. } => TERRAIN_NOISE_SCALE,
        Surface::Gaseous { .. } => GASEOUS_NOISE_SCALE,
    }
}

/// Generates the texture for a request.
///
/// Deterministic: identical requests produce byte-identical buffers. The
/// pixel loop is pure arithmetic; the only failure mode is a dimension
/// outside the supported range.
///
/// Not intended to run per frame. Callers regenerate only when the seed or
/// a classification parameter changes, and each call owns its own buffer;
/// there is no shared state between invocations.
pub fn generate_planet_texture(request: &TextureRequest) -> Result<PixelBuffer, GenerateError> {
    validate_dimension(request.dimension)
        .map_err(|e| GenerateError::InvalidDimension(e.message))?;

    let noise = Perlin3::new(request.seed);
    let scale = noise_scale(&request.surface);
    let pixel_count = request.pixel_count();
    let mut data = vec![0u8; 4 * pixel_count];

    for i in 0..pixel_count {
        let (u, v) = grid_uv(i, request.dimension);
        let [x, y, z] = sphere_point(u, v);
        let value = noise.sample_01(x * scale[0], y * scale[1], z * scale[2]);
        let rgba = classify(&request.surface, value).to_rgba8();
        data[4 * i..4 * i + 4].copy_from_slice(&rgba);
    }

    Ok(PixelBuffer::from_raw(request.dimension, data))
}
