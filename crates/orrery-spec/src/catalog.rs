//! Built-in solar-system catalog.
//!
//! Static reference data for the eight planets, used by the side-by-side
//! compare view. Figures follow the NASA planetary fact sheet; temperatures
//! are mean surface (or 1-bar level) values in Celsius.

use serde::Serialize;

/// A catalogued solar-system body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CatalogBody {
    /// Body name.
    pub name: &'static str,
    /// Equatorial diameter in kilometers.
    pub diameter_km: f64,
    /// Mass in 10^24 kg.
    pub mass_10e24_kg: f64,
    /// Surface gravity in m/s^2.
    pub gravity_ms2: f64,
    /// Orbital period in Earth days.
    pub orbital_period_days: f64,
    /// Mean temperature in Celsius.
    pub average_temperature_c: f64,
    /// Mean distance from the sun in 10^6 km.
    pub distance_10e6_km: f64,
    /// Whether the body has a prominent ring system.
    pub has_rings: bool,
}

/// The eight planets, ordered by distance from the sun.
pub const SOLAR_SYSTEM: [CatalogBody; 8] = [
    CatalogBody {
        name: "Mercury",
        diameter_km: 4879.0,
        mass_10e24_kg: 0.330,
        gravity_ms2: 3.7,
        orbital_period_days: 88.0,
        average_temperature_c: 167.0,
        distance_10e6_km: 57.9,
        has_rings: false,
    },
    CatalogBody {
        name: "Venus",
        diameter_km: 12104.0,
        mass_10e24_kg: 4.87,
        gravity_ms2: 8.9,
        orbital_period_days: 224.7,
        average_temperature_c: 464.0,
        distance_10e6_km: 108.2,
        has_rings: false,
    },
    CatalogBody {
        name: "Earth",
        diameter_km: 12756.0,
        mass_10e24_kg: 5.97,
        gravity_ms2: 9.8,
        orbital_period_days: 365.2,
        average_temperature_c: 15.0,
        distance_10e6_km: 149.6,
        has_rings: false,
    },
    CatalogBody {
        name: "Mars",
        diameter_km: 6792.0,
        mass_10e24_kg: 0.642,
        gravity_ms2: 3.7,
        orbital_period_days: 687.0,
        average_temperature_c: -65.0,
        distance_10e6_km: 227.9,
        has_rings: false,
    },
    CatalogBody {
        name: "Jupiter",
        diameter_km: 142984.0,
        mass_10e24_kg: 1898.0,
        gravity_ms2: 23.1,
        orbital_period_days: 4331.0,
        average_temperature_c: -110.0,
        distance_10e6_km: 778.6,
        has_rings: false,
    },
    CatalogBody {
        name: "Saturn",
        diameter_km: 120536.0,
        mass_10e24_kg: 568.0,
        gravity_ms2: 9.0,
        orbital_period_days: 10747.0,
        average_temperature_c: -140.0,
        distance_10e6_km: 1433.5,
        has_rings: true,
    },
    CatalogBody {
        name: "Uranus",
        diameter_km: 51118.0,
        mass_10e24_kg: 86.8,
        gravity_ms2: 8.7,
        orbital_period_days: 30589.0,
        average_temperature_c: -195.0,
        distance_10e6_km: 2872.5,
        has_rings: true,
    },
    CatalogBody {
        name: "Neptune",
        diameter_km: 49528.0,
        mass_10e24_kg: 102.0,
        gravity_ms2: 11.0,
        orbital_period_days: 59800.0,
        average_temperature_c: -200.0,
        distance_10e6_km: 4495.1,
        has_rings: false,
    },
];

/// Looks up a body by name, case-insensitively.
pub fn find(name: &str) -> Option<&'static CatalogBody> {
    SOLAR_SYSTEM
        .iter()
        .find(|body| body.name.eq_ignore_ascii_case(name))
}

/// Iterates over the catalogued body names in orbital order.
pub fn names() -> impl Iterator<Item = &'static str> {
    SOLAR_SYSTEM.iter().map(|body| body.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_is_case_insensitive() {
        assert_eq!(find("earth").unwrap().name, "Earth");
        assert_eq!(find("SATURN").unwrap().name, "Saturn");
        assert!(find("Pluto").is_none());
    }

    #[test]
    fn catalog_is_ordered_by_distance() {
        for pair in SOLAR_SYSTEM.windows(2) {
            assert!(pair[0].distance_10e6_km < pair[1].distance_10e6_km);
        }
    }

    #[test]
    fn names_lists_all_eight() {
        let names: Vec<_> = names().collect();
        assert_eq!(names.len(), 8);
        assert_eq!(names[0], "Mercury");
        assert_eq!(names[7], "Neptune");
    }
}
