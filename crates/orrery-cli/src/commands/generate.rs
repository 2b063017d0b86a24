//! Generate command implementation
//!
//! Produces a planet texture PNG from a preset file or inline parameters.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;

use orrery_backend_texture::generate_planet_texture;
use orrery_backend_texture::png::{write_rgba_to_vec_with_hash, PngConfig};
use orrery_spec::{validate_dimension, validate_preset, PlanetPreset};

use super::{parse_surface, report_validation};

/// Run the generate command
///
/// # Arguments
/// * `preset_path` - Optional preset JSON file; inline flags are used otherwise
/// * `seed` - Optional seed override; drawn from entropy when absent
/// * `mode` - Classification mode ("terrain" or "gaseous")
/// * `gas_type` - Gas palette for gaseous mode ("ammonia" or "methane")
/// * `water_threshold` - Water/land split for terrain mode
/// * `dimension` - Texture edge length in pixels
/// * `output` - Output PNG path
/// * `show_hash` - Whether to print the BLAKE3 hash of the PNG bytes
///
/// # Returns
/// Exit code: 0 success, 1 invalid preset
#[allow(clippy::too_many_arguments)]
pub fn run(
    preset_path: Option<&str>,
    seed: Option<f64>,
    mode: &str,
    gas_type: &str,
    water_threshold: f64,
    dimension: u32,
    output: &str,
    show_hash: bool,
) -> Result<ExitCode> {
    let mut preset = match preset_path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read preset file: {}", path))?;
            PlanetPreset::from_json(&json)
                .with_context(|| format!("Failed to parse preset file: {}", path))?
        }
        None => {
            let surface = parse_surface(mode, gas_type, water_threshold)?;
            PlanetPreset::builder("untitled", 0.0).surface(surface).build()
        }
    };

    // Explicit seed wins; a fresh inline planet draws one from entropy the
    // same way the editor does on page load.
    match seed {
        Some(seed) => preset.seed = seed,
        None if preset_path.is_none() => preset.seed = rand::random::<f64>(),
        None => {}
    }

    println!("{} {}", "Planet:".cyan().bold(), preset.name);
    println!("{} {:.6}", "Seed:".cyan().bold(), preset.seed);
    println!("{} {}", "Mode:".cyan().bold(), preset.surface().color_mode());

    let result = validate_preset(&preset);
    if !report_validation(&result) {
        println!("{}", "Preset is invalid".red().bold());
        return Ok(ExitCode::from(1));
    }
    if let Err(error) = validate_dimension(dimension) {
        println!("  {} {}", "x".red(), error);
        return Ok(ExitCode::from(1));
    }

    let buffer = generate_planet_texture(&preset.texture_request(dimension))?;
    let (png_bytes, hash) = write_rgba_to_vec_with_hash(&buffer, &PngConfig::default())?;
    std::fs::write(Path::new(output), &png_bytes)
        .with_context(|| format!("Failed to write output file: {}", output))?;

    println!(
        "{} {} ({}x{}, {} bytes)",
        "Wrote:".green().bold(),
        output,
        dimension,
        dimension,
        png_bytes.len()
    );
    if show_hash {
        println!("{} {}", "BLAKE3:".dimmed(), hash);
    }

    Ok(ExitCode::SUCCESS)
}
