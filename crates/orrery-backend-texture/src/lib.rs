//! Orrery Texture Generation Backend
//!
//! Deterministic planet texture synthesis: a preset's seed and surface
//! classification map to an RGBA pixel buffer that is byte-identical across
//! runs, machines, and save/load round trips. The seed is the identity the
//! editor shows the user, so losing reproducibility here silently corrupts
//! every saved planet.
//!
//! # Example
//!
//! ```no_run
//! use orrery_backend_texture::generate_planet_texture;
//! use orrery_backend_texture::png::{write_rgba, PngConfig};
//! use orrery_spec::{GasType, Surface, TextureRequest};
//! use std::path::Path;
//!
//! let request = TextureRequest::new(
//!     0.42,
//!     Surface::Gaseous {
//!         gas_type: GasType::Ammonia,
//!     },
//! );
//!
//! let buffer = generate_planet_texture(&request).unwrap();
//! write_rgba(&buffer, Path::new("amber-giant.png"), &PngConfig::default()).unwrap();
//! ```
//!
//! # Pipeline
//!
//! - [`sphere`]: equirectangular grid onto the unit sphere
//! - [`noise`]: seeded 3D Perlin noise
//! - [`palette`]: banded color classification per surface mode
//! - [`generate`]: the synthesizer tying the stages together
//! - [`png`]: deterministic PNG encoding of the result

pub mod buffer;
pub mod color;
pub mod generate;
pub mod noise;
pub mod palette;
pub mod png;
pub mod rng;
pub mod sphere;

// Re-export main types for convenience
pub use buffer::PixelBuffer;
pub use color::Color;
pub use generate::{
    generate_planet_texture, noise_scale, GenerateError, GASEOUS_NOISE_SCALE, TERRAIN_NOISE_SCALE,
};
pub use noise::{Noise3D, Perlin3};
pub use png::{PngConfig, PngError};
pub use rng::DeterministicRng;
