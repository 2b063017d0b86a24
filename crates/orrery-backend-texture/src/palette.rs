//! Banded color classification.
//!
//! A normalized noise value in [0, 1] maps to exactly one color. Bands are
//! evaluated in ascending order with a strict `<` upper bound; the final
//! entry of each palette is a catch-all, so classification is total over
//! the input range (and over any out-of-range input, which lands in the
//! outermost band).

use orrery_spec::{GasType, Surface};

use crate::color::Color;

/// Terrain water color.
pub const WATER: Color = Color::rgb(0.0, 0.0, 1.0);

/// Terrain land color.
pub const LAND: Color = Color::rgb(0.13, 0.55, 0.13);

/// Ammonia atmosphere bands: orange-brown, darkest at low noise.
const AMMONIA_BANDS: [(f64, Color); 4] = [
    (0.15, Color::rgb(0.6, 0.4, 0.2)),
    (0.30, Color::rgb(0.8, 0.6, 0.3)),
    (0.60, Color::rgb(0.5, 0.3, 0.1)),
    (0.85, Color::rgb(0.9, 0.7, 0.4)),
];

/// Ammonia catch-all above the last band.
const AMMONIA_TOP: Color = Color::rgb(1.0, 0.9, 0.6);

/// Methane atmosphere bands: deep blue through white.
const METHANE_BANDS: [(f64, Color); 4] = [
    (0.20, Color::rgb(0.1, 0.2, 0.4)),
    (0.40, Color::rgb(0.3, 0.4, 0.8)),
    (0.60, Color::rgb(0.6, 0.8, 1.0)),
    (0.80, Color::rgb(0.85, 0.9, 1.0)),
];

/// Methane catch-all above the last band.
const METHANE_TOP: Color = Color::rgb(1.0, 1.0, 1.0);

/// Classifies a normalized noise value under the given surface mode.
pub fn classify(surface: &Surface, value: f64) -> Color {
    match surface {
        Surface::Terrain { water_threshold } => {
            if value < *water_threshold {
                WATER
            } else {
                LAND
            }
        }
        Surface::Gaseous { gas_type } => match gas_type {
            GasType::Ammonia => classify_bands(&AMMONIA_BANDS, AMMONIA_TOP, value),
            GasType::Methane => classify_bands(&METHANE_BANDS, METHANE_TOP, value),
        },
    }
}

fn classify_bands(bands: &[(f64, Color)], top: Color, value: f64) -> Color {
    for &(upper, color) in bands {
        if value < upper {
            return color;
        }
    }
    top
}
