//! Compare command implementation
//!
//! Prints two catalogued solar-system bodies side by side.

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;

use orrery_spec::catalog::{self, CatalogBody};

/// Run the compare command
///
/// # Arguments
/// * `first` - First body name
/// * `second` - Second body name
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 success, 1 unknown body name
pub fn run(first: &str, second: &str, json_output: bool) -> Result<ExitCode> {
    let (a, b) = match (catalog::find(first), catalog::find(second)) {
        (Some(a), Some(b)) => (a, b),
        _ => {
            let unknown = if catalog::find(first).is_none() {
                first
            } else {
                second
            };
            if json_output {
                println!(
                    "{}",
                    serde_json::json!({ "error": format!("unknown body '{}'", unknown) })
                );
            } else {
                println!("{} unknown body '{}'", "x".red(), unknown);
                println!(
                    "Catalogued bodies: {}",
                    catalog::names().collect::<Vec<_>>().join(", ")
                );
            }
            return Ok(ExitCode::from(1));
        }
    };

    if json_output {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({ "first": a, "second": b }))?
        );
        return Ok(ExitCode::SUCCESS);
    }

    println!(
        "{:<26} {:>14} {:>14}",
        "Property".bold(),
        a.name.bold(),
        b.name.bold()
    );
    for (label, value_of) in rows() {
        println!("{:<26} {:>14} {:>14}", label, value_of(a), value_of(b));
    }

    Ok(ExitCode::SUCCESS)
}

type RowFn = fn(&CatalogBody) -> String;

fn rows() -> [(&'static str, RowFn); 7] {
    [
        ("Diameter (km)", |b| format!("{}", b.diameter_km)),
        ("Mass (10^24 kg)", |b| format!("{}", b.mass_10e24_kg)),
        ("Gravity (m/s^2)", |b| format!("{}", b.gravity_ms2)),
        ("Orbital period (days)", |b| {
            format!("{}", b.orbital_period_days)
        }),
        ("Mean temperature (C)", |b| {
            format!("{}", b.average_temperature_c)
        }),
        ("Distance (10^6 km)", |b| format!("{}", b.distance_10e6_km)),
        ("Rings", |b| {
            if b.has_rings { "yes" } else { "no" }.to_string()
        }),
    ]
}
