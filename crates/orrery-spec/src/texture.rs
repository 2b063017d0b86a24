//! Texture request types.
//!
//! A [`TextureRequest`] is the complete input to the texture synthesizer:
//! the seed, the output dimension, and the surface classification. The
//! synthesizer itself lives in `orrery-backend-texture`.

use serde::{Deserialize, Serialize};

use crate::surface::Surface;

/// Default texture edge length in pixels.
pub const DEFAULT_DIMENSION: u32 = 256;

/// Reduced edge length for fast preview generation.
pub const PREVIEW_DIMENSION: u32 = 128;

/// Upper bound on the texture edge length. The synthesizer allocates a
/// `4 * dimension^2` byte buffer, so this caps a single request at 64 MiB.
pub const MAX_DIMENSION: u32 = 4096;

/// A complete texture generation request.
///
/// The same request always produces the same pixel buffer; the seed doubles
/// as the identity key under which a planet is saved and reloaded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextureRequest {
    /// Noise generator seed. Any finite value is usable; the UI draws seeds
    /// from [0, 1).
    pub seed: f64,
    /// Edge length of the square output buffer in pixels.
    pub dimension: u32,
    /// Surface classification and its mode parameter.
    #[serde(flatten)]
    pub surface: Surface,
}

impl TextureRequest {
    /// Creates a request at the default dimension.
    pub fn new(seed: f64, surface: Surface) -> Self {
        Self {
            seed,
            dimension: DEFAULT_DIMENSION,
            surface,
        }
    }

    /// Creates a request at the reduced preview dimension.
    pub fn preview(seed: f64, surface: Surface) -> Self {
        Self {
            seed,
            dimension: PREVIEW_DIMENSION,
            surface,
        }
    }

    /// Creates a request at an explicit dimension.
    pub fn with_dimension(seed: f64, surface: Surface, dimension: u32) -> Self {
        Self {
            seed,
            dimension,
            surface,
        }
    }

    /// Number of pixels in the output buffer.
    pub fn pixel_count(&self) -> usize {
        (self.dimension as usize) * (self.dimension as usize)
    }
}
