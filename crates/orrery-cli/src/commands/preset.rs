//! Preset store commands: save, load, list, delete.

use anyhow::{Context, Result};
use colored::Colorize;
use std::process::ExitCode;

use orrery_backend_texture::generate_planet_texture;
use orrery_backend_texture::png::{write_rgba, PngConfig};
use orrery_spec::{validate_dimension, validate_preset, PlanetPreset};

use super::{parse_surface, report_validation};
use crate::store::{PresetStore, StoreError};

/// Run the save command: build a preset from flags and store it.
///
/// # Returns
/// Exit code: 0 success, 1 invalid preset
#[allow(clippy::too_many_arguments)]
pub fn run_save(
    store_dir: &str,
    name: &str,
    seed: Option<f64>,
    mode: &str,
    gas_type: &str,
    water_threshold: f64,
    planet_size: f64,
    orbit_radius: f64,
    axial_tilt: f64,
    orbit_speed: f64,
    show_rings: bool,
) -> Result<ExitCode> {
    let surface = parse_surface(mode, gas_type, water_threshold)?;
    let seed = seed.unwrap_or_else(rand::random::<f64>);

    let preset = PlanetPreset::builder(name, seed)
        .surface(surface)
        .planet_size(planet_size)
        .orbit_radius(orbit_radius)
        .axial_tilt(axial_tilt)
        .orbit_speed(orbit_speed)
        .show_rings(show_rings)
        .build();

    let result = validate_preset(&preset);
    if !report_validation(&result) {
        println!("{}", "Preset is invalid, not saved".red().bold());
        return Ok(ExitCode::from(1));
    }

    let store = PresetStore::open(store_dir)
        .with_context(|| format!("Failed to open preset store: {}", store_dir))?;
    let path = store.save(&preset)?;

    println!(
        "{} {} (seed {:.6}) -> {}",
        "Saved:".green().bold(),
        preset.name,
        preset.seed,
        path.display()
    );

    Ok(ExitCode::SUCCESS)
}

/// Run the load command: fetch a stored preset and regenerate its texture.
///
/// # Returns
/// Exit code: 0 success, 1 not found or invalid
pub fn run_load(
    store_dir: &str,
    name: &str,
    dimension: u32,
    output: &str,
) -> Result<ExitCode> {
    let store = PresetStore::open(store_dir)
        .with_context(|| format!("Failed to open preset store: {}", store_dir))?;

    let preset = match store.load(name) {
        Ok(preset) => preset,
        Err(StoreError::NotFound(name)) => {
            println!("{} no preset named '{}'", "x".red(), name);
            return Ok(ExitCode::from(1));
        }
        Err(e) => return Err(e.into()),
    };

    println!("{} {}", "Loaded:".cyan().bold(), preset.name);
    println!("{} {:.6}", "Seed:".cyan().bold(), preset.seed);
    println!("{} {}", "Mode:".cyan().bold(), preset.surface().color_mode());

    let result = validate_preset(&preset);
    if !report_validation(&result) {
        println!("{}", "Stored preset is invalid".red().bold());
        return Ok(ExitCode::from(1));
    }
    if let Err(error) = validate_dimension(dimension) {
        println!("  {} {}", "x".red(), error);
        return Ok(ExitCode::from(1));
    }

    let buffer = generate_planet_texture(&preset.texture_request(dimension))?;
    write_rgba(&buffer, std::path::Path::new(output), &PngConfig::default())
        .with_context(|| format!("Failed to write output file: {}", output))?;

    println!(
        "{} {} ({}x{})",
        "Wrote:".green().bold(),
        output,
        dimension,
        dimension
    );

    Ok(ExitCode::SUCCESS)
}

/// Run the list command: print every stored preset with its key fields.
pub fn run_list(store_dir: &str) -> Result<ExitCode> {
    let store = PresetStore::open(store_dir)
        .with_context(|| format!("Failed to open preset store: {}", store_dir))?;

    let names = store.list()?;
    if names.is_empty() {
        println!("No presets in {}", store.root().display());
        return Ok(ExitCode::SUCCESS);
    }

    println!(
        "{:<24} {:<10} {:>10} {:>7}",
        "Name".bold(),
        "Mode".bold(),
        "Seed".bold(),
        "Rings".bold()
    );
    for name in names {
        match store.load(&name) {
            Ok(preset) => {
                println!(
                    "{:<24} {:<10} {:>10.6} {:>7}",
                    preset.name,
                    preset.surface().color_mode().to_string(),
                    preset.seed,
                    if preset.show_rings { "yes" } else { "no" }
                );
            }
            Err(e) => {
                println!("{:<24} {}", name, format!("unreadable: {}", e).red());
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Run the delete command.
///
/// # Returns
/// Exit code: 0 success, 1 not found
pub fn run_delete(store_dir: &str, name: &str) -> Result<ExitCode> {
    let store = PresetStore::open(store_dir)
        .with_context(|| format!("Failed to open preset store: {}", store_dir))?;

    match store.delete(name) {
        Ok(()) => {
            println!("{} {}", "Deleted:".green().bold(), name);
            Ok(ExitCode::SUCCESS)
        }
        Err(StoreError::NotFound(name)) => {
            println!("{} no preset named '{}'", "x".red(), name);
            Ok(ExitCode::from(1))
        }
        Err(e) => Err(e.into()),
    }
}
