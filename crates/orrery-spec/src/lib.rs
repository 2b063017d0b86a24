//! Orrery Planet Preset Library
//!
//! This crate provides the types, validation, and hashing for orrery planet
//! presets. A preset is a flat JSON record describing a custom planet: its
//! seed, surface classification, and display parameters. The record's seed
//! and classification fields are the identity of the planet's procedurally
//! generated texture, so they must survive a save/load round trip exactly.
//!
//! # Example
//!
//! ```
//! use orrery_spec::{GasType, PlanetPreset, Surface};
//! use orrery_spec::validation::validate_preset;
//! use orrery_spec::hash::canonical_preset_hash;
//!
//! // Build a preset
//! let preset = PlanetPreset::builder("amber-giant", 0.42)
//!     .surface(Surface::Gaseous {
//!         gas_type: GasType::Ammonia,
//!     })
//!     .planet_size(2.4)
//!     .show_rings(true)
//!     .build();
//!
//! // Validate it
//! let result = validate_preset(&preset);
//! assert!(result.is_ok());
//!
//! // Compute its canonical content hash
//! let hash = canonical_preset_hash(&preset).unwrap();
//! println!("preset hash: {}", hash);
//! ```
//!
//! # Modules
//!
//! - [`catalog`]: built-in solar-system reference data
//! - [`error`]: error and warning types for validation
//! - [`hash`]: canonical hashing of preset records
//! - [`preset`]: the flat preset record and its builder
//! - [`surface`]: surface classification sum type
//! - [`texture`]: texture request types and dimension constants
//! - [`validation`]: preset validation functions

pub mod catalog;
pub mod error;
pub mod hash;
pub mod preset;
pub mod surface;
pub mod texture;
pub mod validation;

// Re-export commonly used types at the crate root
pub use catalog::{CatalogBody, SOLAR_SYSTEM};
pub use error::{
    ErrorCode, PresetError, ValidationError, ValidationResult, ValidationWarning, WarningCode,
};
pub use hash::{blake3_hash, canonical_preset_hash};
pub use preset::{PlanetPreset, PresetBuilder};
pub use surface::{ColorMode, GasType, Surface};
pub use texture::{TextureRequest, DEFAULT_DIMENSION, MAX_DIMENSION, PREVIEW_DIMENSION};
pub use validation::{is_valid_preset_name, validate_dimension, validate_preset};
