//! Preset validation logic.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{
    ErrorCode, ValidationError, ValidationResult, ValidationWarning, WarningCode,
};
use crate::preset::PlanetPreset;
use crate::texture::MAX_DIMENSION;

/// Regex pattern for valid preset names.
///
/// Names key files in the preset store, so they start with an alphanumeric
/// character and stay to a filesystem-safe subset. Length 1-100 matches the
/// backend's column width.
const PRESET_NAME_PATTERN: &str = r"^[A-Za-z0-9][A-Za-z0-9 _.-]{0,99}$";

static PRESET_NAME_REGEX: OnceLock<Regex> = OnceLock::new();

fn preset_name_regex() -> &'static Regex {
    PRESET_NAME_REGEX.get_or_init(|| Regex::new(PRESET_NAME_PATTERN).expect("invalid regex pattern"))
}

/// Returns true if `name` is a valid preset name.
pub fn is_valid_preset_name(name: &str) -> bool {
    preset_name_regex().is_match(name)
}

/// Validates a texture dimension.
///
/// # Example
/// ```
/// use orrery_spec::validation::validate_dimension;
///
/// assert!(validate_dimension(256).is_ok());
/// assert!(validate_dimension(0).is_err());
/// assert!(validate_dimension(8192).is_err());
/// ```
pub fn validate_dimension(dimension: u32) -> Result<(), ValidationError> {
    if dimension == 0 {
        return Err(ValidationError::with_field(
            ErrorCode::InvalidDimension,
            "dimension must be at least 1",
            "dimension",
        ));
    }
    if dimension > MAX_DIMENSION {
        return Err(ValidationError::with_field(
            ErrorCode::InvalidDimension,
            format!(
                "dimension is too large: max is {}, got {}",
                MAX_DIMENSION, dimension
            ),
            "dimension",
        ));
    }
    Ok(())
}

/// Validates a preset and returns a validation result.
///
/// Errors are conditions that make the record unusable (a malformed name,
/// non-finite numbers). Out-of-range but finite values that only bias the
/// rendered result, like a water threshold above 1, come back as warnings.
///
/// # Example
/// ```
/// use orrery_spec::{PlanetPreset, validation::validate_preset};
///
/// let preset = PlanetPreset::builder("new-world", 0.25).build();
/// let result = validate_preset(&preset);
/// assert!(result.is_ok());
/// ```
pub fn validate_preset(preset: &PlanetPreset) -> ValidationResult {
    let mut result = ValidationResult::new();

    if !is_valid_preset_name(&preset.name) {
        result.add_error(ValidationError::with_field(
            ErrorCode::InvalidPresetName,
            format!(
                "name must match pattern '{}', got '{}'",
                PRESET_NAME_PATTERN, preset.name
            ),
            "name",
        ));
    }

    if !preset.seed.is_finite() {
        result.add_error(ValidationError::with_field(
            ErrorCode::NonFiniteSeed,
            format!("seed must be a finite number, got {}", preset.seed),
            "seed",
        ));
    }

    for (field, value) in [
        ("planet_size", preset.planet_size),
        ("orbit_radius", preset.orbit_radius),
        ("axial_tilt", preset.axial_tilt),
        ("orbit_speed", preset.orbit_speed),
        ("water_threshold", preset.water_threshold),
    ] {
        if !value.is_finite() {
            result.add_error(ValidationError::with_field(
                ErrorCode::NonFiniteParameter,
                format!("{} must be a finite number, got {}", field, value),
                field,
            ));
        }
    }

    check_warnings(preset, &mut result);

    result
}

fn check_warnings(preset: &PlanetPreset, result: &mut ValidationResult) {
    if preset.water_threshold.is_finite()
        && !(0.0..=1.0).contains(&preset.water_threshold)
    {
        result.add_warning(ValidationWarning::with_field(
            WarningCode::WaterThresholdOutOfRange,
            format!(
                "water_threshold {} is outside [0, 1]; the water/land split will saturate",
                preset.water_threshold
            ),
            "water_threshold",
        ));
    }

    if preset.planet_size.is_finite() && preset.planet_size <= 0.0 {
        result.add_warning(ValidationWarning::with_field(
            WarningCode::NonPositivePlanetSize,
            format!("planet_size {} will not be visible", preset.planet_size),
            "planet_size",
        ));
    }

    if preset.axial_tilt.is_finite() && !(0.0..=90.0).contains(&preset.axial_tilt) {
        result.add_warning(ValidationWarning::with_field(
            WarningCode::AxialTiltOutOfRange,
            format!("axial_tilt {} is outside [0, 90] degrees", preset.axial_tilt),
            "axial_tilt",
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Surface;

    fn valid_preset() -> PlanetPreset {
        PlanetPreset::builder("Test Planet 1", 0.42).build()
    }

    #[test]
    fn valid_preset_passes() {
        let result = validate_preset(&valid_preset());
        assert!(result.is_ok(), "errors: {:?}", result.errors);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn preset_name_rules() {
        assert!(is_valid_preset_name("Kepler-442b"));
        assert!(is_valid_preset_name("my planet 2"));
        assert!(!is_valid_preset_name(""));
        assert!(!is_valid_preset_name(" leading-space"));
        assert!(!is_valid_preset_name("slash/name"));
        assert!(!is_valid_preset_name("dots..are fine but not this\u{7}"));
        assert!(!is_valid_preset_name(&"x".repeat(101)));
    }

    #[test]
    fn non_finite_seed_is_an_error() {
        let mut preset = valid_preset();
        preset.seed = f64::NAN;
        let result = validate_preset(&preset);
        assert!(!result.is_ok());
        assert_eq!(result.errors[0].code, ErrorCode::NonFiniteSeed);
    }

    #[test]
    fn non_finite_parameter_is_an_error() {
        let mut preset = valid_preset();
        preset.orbit_speed = f64::INFINITY;
        let result = validate_preset(&preset);
        assert!(!result.is_ok());
        assert_eq!(result.errors[0].code, ErrorCode::NonFiniteParameter);
        assert_eq!(result.errors[0].field.as_deref(), Some("orbit_speed"));
    }

    #[test]
    fn out_of_range_threshold_is_a_warning_not_an_error() {
        let mut preset = valid_preset();
        preset.water_threshold = 1.5;
        let result = validate_preset(&preset);
        assert!(result.is_ok());
        assert_eq!(
            result.warnings[0].code,
            WarningCode::WaterThresholdOutOfRange
        );
    }

    #[test]
    fn threshold_warning_applies_to_gaseous_records_too() {
        // The flat record carries the field in both modes; a stale value is
        // still worth flagging before it is saved.
        let mut preset = PlanetPreset::builder("gasball", 0.9)
            .surface(Surface::Gaseous {
                gas_type: crate::surface::GasType::Ammonia,
            })
            .build();
        preset.water_threshold = -0.2;
        let result = validate_preset(&preset);
        assert!(result.is_ok());
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn dimension_bounds() {
        assert!(validate_dimension(1).is_ok());
        assert!(validate_dimension(256).is_ok());
        assert!(validate_dimension(MAX_DIMENSION).is_ok());
        assert!(validate_dimension(0).is_err());
        assert!(validate_dimension(MAX_DIMENSION + 1).is_err());
    }
}
