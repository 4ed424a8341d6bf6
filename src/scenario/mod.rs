//! Catalog resolution: configuration records into runtime engine types.

use thiserror::Error;

use impact_config::{AsteroidConfig, BodyConfig, CompositionConfig, ElementsConfig};
use impact_orbits::OrbitalElements;
use impact_physics::{
    Composition, DEFAULT_ANGLE_DEG, DEFAULT_DENSITY_KG_M3, Impactor, PhysicalBody, mass_kg,
};

pub use impact_config::{ConfigError, load_asteroids, load_bodies};

/// Errors surfaced while resolving catalog entries.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("body '{0}' not found in catalog")]
    BodyNotFound(String),
    #[error("asteroid '{0}' not found in catalog")]
    AsteroidNotFound(String),
}

/// Convert catalog elements into the propagator's representation.
pub fn orbital_elements(config: &ElementsConfig) -> OrbitalElements {
    OrbitalElements {
        semi_major_axis_au: config.semi_major_axis_au,
        eccentricity: config.eccentricity,
        inclination_deg: config.inclination_deg,
        ascending_node_deg: config.ascending_node_deg,
        arg_perihelion_deg: config.arg_perihelion_deg,
        mean_anomaly_deg: config.mean_anomaly_deg,
        period_years: config.period_years,
        speed_km_s: None,
    }
}

/// Convert a catalog composition into the physics representation.
pub fn composition(config: CompositionConfig) -> Composition {
    match config {
        CompositionConfig::Rocky => Composition::Rocky,
        CompositionConfig::Icy => Composition::Icy,
        CompositionConfig::Metallic => Composition::Metallic,
        CompositionConfig::Carbonaceous => Composition::Carbonaceous,
    }
}

/// Physical properties of a catalog body. Bodies without a stated
/// composition are treated as rocky.
pub fn physical_body(config: &BodyConfig) -> PhysicalBody {
    PhysicalBody {
        radius_km: config.radius_km,
        mass_kg: config.mass_kg,
        composition: config
            .composition
            .map(composition)
            .unwrap_or(Composition::Rocky),
    }
}

/// Resolve an asteroid scenario's bulk density: explicit value first, then
/// the composition table, then the rocky default.
pub fn asteroid_density_kg_m3(config: &AsteroidConfig) -> f64 {
    config
        .density_kg_m3
        .or_else(|| {
            config
                .composition
                .map(|c| composition(c).bulk_density_kg_m3())
        })
        .unwrap_or(DEFAULT_DENSITY_KG_M3)
}

/// Impactor bulk properties for the physics calculator.
///
/// A scenario without an explicit velocity falls back to the orbit's
/// mean-distance vis-viva speed.
pub fn impactor(config: &AsteroidConfig) -> Impactor {
    let density_kg_m3 = asteroid_density_kg_m3(config);
    let velocity_km_s = config.velocity_km_s.unwrap_or_else(|| {
        impact_orbits::vis_viva_speed_km_s(
            config.elements.semi_major_axis_au,
            config.elements.semi_major_axis_au,
        )
    });

    Impactor {
        diameter_km: config.diameter_km,
        velocity_km_s,
        density_kg_m3,
        angle_deg: config.angle_deg.unwrap_or(DEFAULT_ANGLE_DEG),
    }
}

/// Physical-body view of an asteroid scenario, with the mass derived from
/// its diameter and resolved density.
pub fn asteroid_body(config: &AsteroidConfig) -> PhysicalBody {
    let density_kg_m3 = asteroid_density_kg_m3(config);

    PhysicalBody {
        radius_km: config.diameter_km / 2.0,
        mass_kg: mass_kg(config.diameter_km, density_kg_m3),
        composition: config
            .composition
            .map(composition)
            .unwrap_or(Composition::Rocky),
    }
}

/// Case-insensitive catalog lookup.
pub fn find_body<'a>(bodies: &'a [BodyConfig], name: &str) -> Result<&'a BodyConfig, ScenarioError> {
    bodies
        .iter()
        .find(|body| body.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| ScenarioError::BodyNotFound(name.to_string()))
}

/// Case-insensitive asteroid lookup.
pub fn find_asteroid<'a>(
    asteroids: &'a [AsteroidConfig],
    name: &str,
) -> Result<&'a AsteroidConfig, ScenarioError> {
    asteroids
        .iter()
        .find(|asteroid| asteroid.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| ScenarioError::AsteroidNotFound(name.to_string()))
}

/// Convert catalog secular rates into the adjuster's representation.
pub fn secular_rates(config: &impact_config::SecularRatesConfig) -> impact_ephemeris::SecularRates {
    impact_ephemeris::SecularRates {
        semi_major_axis_au_per_cy: config.semi_major_axis_au_per_cy,
        eccentricity_per_cy: config.eccentricity_per_cy,
        inclination_deg_per_cy: config.inclination_deg_per_cy,
        lon_perihelion_deg_per_cy: config.lon_perihelion_deg_per_cy,
        ascending_node_deg_per_cy: config.ascending_node_deg_per_cy,
    }
}

/// Catalog elements with any published secular rates applied for
/// `centuries` Julian centuries past J2000.0.
///
/// The mean anomaly is left at its epoch value; advancing it in time is the
/// propagator's job.
pub fn orbital_elements_at(
    body: &BodyConfig,
    centuries: f64,
) -> (OrbitalElements, Vec<impact_ephemeris::ExtrapolationWarning>) {
    use impact_core::time::normalize_degrees;

    let elements = &body.elements;
    let base = impact_ephemeris::MeanElements {
        semi_major_axis_au: elements.semi_major_axis_au,
        eccentricity: elements.eccentricity,
        inclination_deg: elements.inclination_deg,
        lon_perihelion_deg: normalize_degrees(
            elements.ascending_node_deg + elements.arg_perihelion_deg,
        ),
        ascending_node_deg: elements.ascending_node_deg,
    };
    let rates = body
        .secular_rates
        .as_ref()
        .map(secular_rates)
        .unwrap_or_default();

    let (adjusted, warnings) = impact_ephemeris::adjust(&base, &rates, centuries);

    let adjusted_elements = OrbitalElements {
        semi_major_axis_au: adjusted.semi_major_axis_au,
        eccentricity: adjusted.eccentricity,
        inclination_deg: adjusted.inclination_deg,
        ascending_node_deg: adjusted.ascending_node_deg,
        arg_perihelion_deg: normalize_degrees(
            adjusted.lon_perihelion_deg - adjusted.ascending_node_deg,
        ),
        mean_anomaly_deg: elements.mean_anomaly_deg,
        period_years: elements.period_years,
        speed_km_s: None,
    };

    (adjusted_elements, warnings)
}
