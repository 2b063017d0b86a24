//! CLI command implementations

pub mod compare;
pub mod generate;
pub mod preset;

use anyhow::Result;
use colored::Colorize;

use orrery_spec::{Surface, ValidationResult};

/// Builds a surface from the mode flags.
pub(crate) fn parse_surface(mode: &str, gas_type: &str, water_threshold: f64) -> Result<Surface> {
    let mode = mode
        .parse::<orrery_spec::ColorMode>()
        .map_err(|e| anyhow::anyhow!(e))?;
    Ok(match mode {
        orrery_spec::ColorMode::Terrain => Surface::Terrain { water_threshold },
        orrery_spec::ColorMode::Gaseous => Surface::Gaseous {
            gas_type: gas_type
                .parse::<orrery_spec::GasType>()
                .map_err(|e| anyhow::anyhow!(e))?,
        },
    })
}

/// Prints validation output; returns false if there were errors.
pub(crate) fn report_validation(result: &ValidationResult) -> bool {
    for warning in &result.warnings {
        println!("  {} {}", "!".yellow(), warning);
    }
    for error in &result.errors {
        println!("  {} {}", "x".red(), error);
    }
    result.is_ok()
}
