//! Orrery CLI - planet texture generation and preset management
//!
//! This binary provides commands for generating deterministic planet
//! textures, managing saved planet presets, and comparing catalogued
//! solar-system bodies.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use orrery_cli::commands;

/// Default preset store directory.
const DEFAULT_STORE: &str = "planets";

/// Orrery - Procedural Planet Toolkit
#[derive(Parser)]
#[command(name = "orrery")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a planet texture PNG
    Generate {
        /// Path to a preset JSON file (inline flags are used otherwise)
        #[arg(short, long)]
        preset: Option<String>,

        /// Noise seed; drawn from entropy when omitted
        #[arg(short, long)]
        seed: Option<f64>,

        /// Classification mode
        #[arg(long, default_value = "terrain", value_parser = ["terrain", "gaseous"])]
        mode: String,

        /// Gas palette for gaseous mode
        #[arg(long, default_value = "methane", value_parser = ["ammonia", "methane"])]
        gas_type: String,

        /// Water/land split for terrain mode
        #[arg(long, default_value_t = 0.5)]
        water_threshold: f64,

        /// Texture edge length in pixels
        #[arg(short, long, default_value_t = orrery_spec::DEFAULT_DIMENSION)]
        dimension: u32,

        /// Output PNG path
        #[arg(short, long, default_value = "planet.png")]
        output: String,

        /// Print the BLAKE3 hash of the encoded PNG
        #[arg(long)]
        hash: bool,
    },

    /// Save a planet preset into the store
    Save {
        /// Preset name (also the store key)
        #[arg(short, long)]
        name: String,

        /// Noise seed; drawn from entropy when omitted
        #[arg(short, long)]
        seed: Option<f64>,

        /// Classification mode
        #[arg(long, default_value = "terrain", value_parser = ["terrain", "gaseous"])]
        mode: String,

        /// Gas palette for gaseous mode
        #[arg(long, default_value = "methane", value_parser = ["ammonia", "methane"])]
        gas_type: String,

        /// Water/land split for terrain mode
        #[arg(long, default_value_t = 0.5)]
        water_threshold: f64,

        /// Visual radius multiplier
        #[arg(long, default_value_t = 1.0)]
        planet_size: f64,

        /// Orbit radius in AU
        #[arg(long, default_value_t = 0.01)]
        orbit_radius: f64,

        /// Axial tilt in degrees
        #[arg(long, default_value_t = 23.0)]
        axial_tilt: f64,

        /// Orbit speed in AU per day
        #[arg(long, default_value_t = 0.5)]
        orbit_speed: f64,

        /// Render the planet with rings
        #[arg(long)]
        rings: bool,

        /// Preset store directory
        #[arg(long, default_value = DEFAULT_STORE)]
        store: String,
    },

    /// Load a stored preset and regenerate its texture
    Load {
        /// Preset name
        #[arg(short, long)]
        name: String,

        /// Texture edge length in pixels
        #[arg(short, long, default_value_t = orrery_spec::DEFAULT_DIMENSION)]
        dimension: u32,

        /// Output PNG path
        #[arg(short, long, default_value = "planet.png")]
        output: String,

        /// Preset store directory
        #[arg(long, default_value = DEFAULT_STORE)]
        store: String,
    },

    /// List stored presets
    List {
        /// Preset store directory
        #[arg(long, default_value = DEFAULT_STORE)]
        store: String,
    },

    /// Delete a stored preset
    Delete {
        /// Preset name
        #[arg(short, long)]
        name: String,

        /// Preset store directory
        #[arg(long, default_value = DEFAULT_STORE)]
        store: String,
    },

    /// Compare two catalogued solar-system bodies
    Compare {
        /// First body name
        first: String,

        /// Second body name
        second: String,

        /// Output machine-readable JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            preset,
            seed,
            mode,
            gas_type,
            water_threshold,
            dimension,
            output,
            hash,
        } => commands::generate::run(
            preset.as_deref(),
            seed,
            &mode,
            &gas_type,
            water_threshold,
            dimension,
            &output,
            hash,
        ),
        Commands::Save {
            name,
            seed,
            mode,
            gas_type,
            water_threshold,
            planet_size,
            orbit_radius,
            axial_tilt,
            orbit_speed,
            rings,
            store,
        } => commands::preset::run_save(
            &store,
            &name,
            seed,
            &mode,
            &gas_type,
            water_threshold,
            planet_size,
            orbit_radius,
            axial_tilt,
            orbit_speed,
            rings,
        ),
        Commands::Load {
            name,
            dimension,
            output,
            store,
        } => commands::preset::run_load(&store, &name, dimension, &output),
        Commands::List { store } => commands::preset::run_list(&store),
        Commands::Delete { name, store } => commands::preset::run_delete(&store, &name),
        Commands::Compare {
            first,
            second,
            json,
        } => commands::compare::run(&first, &second, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}
