//! Deterministic PNG writer.
//!
//! Uses fixed compression settings so the same pixel buffer always encodes
//! to byte-identical files, keeping the PNG hash usable as a regression
//! check alongside the raw buffer.

use std::io::Write;
use std::path::Path;

use png::{BitDepth, ColorType, Compression, Encoder, FilterType};
use thiserror::Error;

use crate::buffer::PixelBuffer;

/// Errors from PNG operations.
#[derive(Debug, Error)]
pub enum PngError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encoding error: {0}")]
    Encoding(#[from] png::EncodingError),
}

/// PNG export configuration for deterministic output.
#[derive(Debug, Clone)]
pub struct PngConfig {
    /// Compression level. Fixed for determinism.
    pub compression: Compression,
    /// Filter type. `NoFilter` keeps encoding bit-stable.
    pub filter: FilterType,
}

impl Default for PngConfig {
    fn default() -> Self {
        Self {
            compression: Compression::Default,
            filter: FilterType::NoFilter,
        }
    }
}

/// Write a pixel buffer to a PNG file.
pub fn write_rgba(buffer: &PixelBuffer, path: &Path, config: &PngConfig) -> Result<(), PngError> {
    let file = std::fs::File::create(path)?;
    let writer = std::io::BufWriter::new(file);
    write_rgba_to_writer(buffer, writer, config)
}

/// Write a pixel buffer to any writer.
pub fn write_rgba_to_writer<W: Write>(
    buffer: &PixelBuffer,
    writer: W,
    config: &PngConfig,
) -> Result<(), PngError> {
    let mut encoder = Encoder::new(writer, buffer.dimension(), buffer.dimension());
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_compression(config.compression);
    encoder.set_filter(config.filter);

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(buffer.as_bytes())?;

    Ok(())
}

/// Compute the BLAKE3 hash of encoded PNG data.
pub fn hash_png(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// Encode to a Vec<u8> and return the bytes with their hash.
pub fn write_rgba_to_vec_with_hash(
    buffer: &PixelBuffer,
    config: &PngConfig,
) -> Result<(Vec<u8>, String), PngError> {
    let mut data = Vec::new();
    write_rgba_to_writer(buffer, &mut data, config)?;
    let hash = hash_png(&data);
    Ok((data, hash))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::generate_planet_texture;
    use orrery_spec::{Surface, TextureRequest};

    fn small_buffer() -> PixelBuffer {
        let request = TextureRequest::with_dimension(
            0.42,
            Surface::Terrain {
                water_threshold: 0.5,
            },
            16,
        );
        generate_planet_texture(&request).unwrap()
    }

    #[test]
    fn test_rgba_deterministic() {
        let buffer = small_buffer();
        let config = PngConfig::default();

        let (data1, hash1) = write_rgba_to_vec_with_hash(&buffer, &config).unwrap();
        let (data2, hash2) = write_rgba_to_vec_with_hash(&buffer, &config).unwrap();

        assert_eq!(data1, data2, "PNG data should be identical");
        assert_eq!(hash1, hash2, "PNG hashes should be identical");
    }

    #[test]
    fn test_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("planet.png");
        let buffer = small_buffer();

        write_rgba(&buffer, &path, &PngConfig::default()).unwrap();

        let on_disk = std::fs::read(&path).unwrap();
        let (encoded, _) = write_rgba_to_vec_with_hash(&buffer, &PngConfig::default()).unwrap();
        assert_eq!(on_disk, encoded);
    }
}
