//! The flat planet preset record.
//!
//! This is the persistence shape: one named record per saved planet, with
//! every field present regardless of mode. Four of its fields determine the
//! regenerated texture exactly — `seed`, `color_mode`, `water_threshold`,
//! and `gas_type` — so the record must round-trip them without loss. The
//! rest (size, orbit, tilt, rings) only position and dress the mesh.

use serde::{Deserialize, Serialize};

use crate::surface::{ColorMode, GasType, Surface};
use crate::texture::TextureRequest;

/// A saved custom planet.
///
/// Field names match the stored JSON document one-to-one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlanetPreset {
    /// Display name; also the key under which the preset is stored.
    pub name: String,
    /// Noise seed. Doubles as the stable identity of the planet's look.
    pub seed: f64,
    /// Visual radius multiplier.
    pub planet_size: f64,
    /// Orbit radius in AU.
    pub orbit_radius: f64,
    /// Axial tilt in degrees.
    pub axial_tilt: f64,
    /// Orbit speed in AU per day.
    pub orbit_speed: f64,
    /// Water/land split for terrain mode. Stored even in gaseous mode so the
    /// record shape is stable.
    pub water_threshold: f64,
    /// Whether the planet renders with rings.
    pub show_rings: bool,
    /// Which classification mode is active.
    pub color_mode: ColorMode,
    /// Atmosphere palette for gaseous mode. Stored even in terrain mode.
    pub gas_type: GasType,
}

impl PlanetPreset {
    /// Creates a builder with the default parameters.
    pub fn builder(name: impl Into<String>, seed: f64) -> PresetBuilder {
        PresetBuilder::new(name, seed)
    }

    /// Parses a preset from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serializes the preset to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the preset to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Serializes the preset to a JSON value.
    pub fn to_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    /// Projects the flat record onto the surface sum type.
    ///
    /// Only the fields belonging to the active `color_mode` are read; the
    /// inactive ones are carried in the record but ignored here.
    pub fn surface(&self) -> Surface {
        match self.color_mode {
            ColorMode::Terrain => Surface::Terrain {
                water_threshold: self.water_threshold,
            },
            ColorMode::Gaseous => Surface::Gaseous {
                gas_type: self.gas_type,
            },
        }
    }

    /// Builds the synthesizer input for this preset at the given dimension.
    pub fn texture_request(&self, dimension: u32) -> TextureRequest {
        TextureRequest::with_dimension(self.seed, self.surface(), dimension)
    }
}

/// Builder for [`PlanetPreset`].
///
/// Defaults match the editor's initial state: a ringless earth-type planet
/// at size 1.0, orbit radius 0.01 AU, 23 degree tilt, 0.5 AU/day, and a
/// 0.5 water threshold.
#[derive(Debug, Clone)]
pub struct PresetBuilder {
    preset: PlanetPreset,
}

impl PresetBuilder {
    /// Creates a new builder.
    pub fn new(name: impl Into<String>, seed: f64) -> Self {
        Self {
            preset: PlanetPreset {
                name: name.into(),
                seed,
                planet_size: 1.0,
                orbit_radius: 0.01,
                axial_tilt: 23.0,
                orbit_speed: 0.5,
                water_threshold: 0.5,
                show_rings: false,
                color_mode: ColorMode::Terrain,
                gas_type: GasType::Methane,
            },
        }
    }

    /// Sets the classification mode from a surface value, filling the
    /// active mode field and leaving the inactive one at its default.
    pub fn surface(mut self, surface: Surface) -> Self {
        self.preset.color_mode = surface.color_mode();
        match surface {
            Surface::Terrain { water_threshold } => {
                self.preset.water_threshold = water_threshold;
            }
            Surface::Gaseous { gas_type } => {
                self.preset.gas_type = gas_type;
            }
        }
        self
    }

    /// Sets the visual radius multiplier.
    pub fn planet_size(mut self, size: f64) -> Self {
        self.preset.planet_size = size;
        self
    }

    /// Sets the orbit radius in AU.
    pub fn orbit_radius(mut self, radius: f64) -> Self {
        self.preset.orbit_radius = radius;
        self
    }

    /// Sets the axial tilt in degrees.
    pub fn axial_tilt(mut self, tilt: f64) -> Self {
        self.preset.axial_tilt = tilt;
        self
    }

    /// Sets the orbit speed in AU per day.
    pub fn orbit_speed(mut self, speed: f64) -> Self {
        self.preset.orbit_speed = speed;
        self
    }

    /// Enables or disables rings.
    pub fn show_rings(mut self, rings: bool) -> Self {
        self.preset.show_rings = rings;
        self
    }

    /// Finishes the build.
    pub fn build(self) -> PlanetPreset {
        self.preset
    }
}
