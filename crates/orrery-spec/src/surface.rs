//! Surface classification types.
//!
//! A planet's texture is colored by classifying a noise field into bands.
//! Terrain planets split the field at a water threshold; gaseous planets
//! map it onto one of two fixed atmosphere palettes.

use serde::{Deserialize, Serialize};

/// Atmosphere composition for gaseous planets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GasType {
    /// Orange-brown cloud bands.
    Ammonia,
    /// Blue-white cloud bands.
    Methane,
}

impl GasType {
    /// Returns the gas type as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            GasType::Ammonia => "ammonia",
            GasType::Methane => "methane",
        }
    }
}

impl std::fmt::Display for GasType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for GasType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ammonia" => Ok(GasType::Ammonia),
            "methane" => Ok(GasType::Methane),
            _ => Err(format!("unknown gas type: {}", s)),
        }
    }
}

/// Coloring mode discriminant, as stored in the flat preset record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorMode {
    /// Water/land split controlled by a threshold.
    Terrain,
    /// Banded atmosphere palette selected by gas type.
    Gaseous,
}

impl ColorMode {
    /// Returns the color mode as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorMode::Terrain => "terrain",
            ColorMode::Gaseous => "gaseous",
        }
    }
}

impl std::fmt::Display for ColorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "terrain" => Ok(ColorMode::Terrain),
            "gaseous" => Ok(ColorMode::Gaseous),
            _ => Err(format!("unknown color mode: {}", s)),
        }
    }
}

/// Surface classification with its mode-specific parameter.
///
/// This is the shape the texture synthesizer consumes. Modeling the mode and
/// its parameter as one sum type makes mixed states (a terrain planet with a
/// gas type) unrepresentable; the flat [`PlanetPreset`](crate::PlanetPreset)
/// record projects onto this via [`PlanetPreset::surface`](crate::PlanetPreset::surface).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "color_mode", rename_all = "snake_case")]
pub enum Surface {
    /// Earth-like planet: noise below `water_threshold` renders as water,
    /// the rest as land.
    Terrain {
        /// Water/land split point, meaningful in [0, 1]. Out-of-range values
        /// bias the split toward all-land or all-water but are not an error.
        water_threshold: f64,
    },
    /// Gas giant: the noise field is stretched along the rotation axis and
    /// mapped onto the palette for `gas_type`.
    Gaseous {
        /// Atmosphere palette to use.
        gas_type: GasType,
    },
}

impl Surface {
    /// The mode discriminant for this surface.
    pub fn color_mode(&self) -> ColorMode {
        match self {
            Surface::Terrain { .. } => ColorMode::Terrain,
            Surface::Gaseous { .. } => ColorMode::Gaseous,
        }
    }

    /// Returns true for terrain surfaces.
    pub fn is_terrain(&self) -> bool {
        matches!(self, Surface::Terrain { .. })
    }

    /// Returns true for gaseous surfaces.
    pub fn is_gaseous(&self) -> bool {
        matches!(self, Surface::Gaseous { .. })
    }
}
