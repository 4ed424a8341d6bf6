//! Empirical asteroid-impact physics.
//!
//! Kinetic energy from first principles; crater and damage figures from
//! simplified scaling laws. Zero diameter or velocity are valid degenerate
//! inputs and produce zero-valued results throughout — never errors.

use std::f64::consts::PI;
use std::fmt;

use serde::{Deserialize, Serialize};

use impact_core::units::kms_to_ms;

/// Joules per megaton of TNT.
pub const J_PER_MEGATON_TNT: f64 = 4.184e15;

/// Default bulk density for an uncharacterized impactor (rocky), kg/m³.
pub const DEFAULT_DENSITY_KG_M3: f64 = 2_600.0;

/// Default impact angle from horizontal, degrees.
pub const DEFAULT_ANGLE_DEG: f64 = 45.0;

/// Ejecta blanket extends this many crater diameters from the rim.
const EJECTA_RADIUS_FACTOR: f64 = 2.0;

/// Bulk composition classes with their reference densities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Composition {
    Rocky,
    Icy,
    Metallic,
    Carbonaceous,
}

impl Composition {
    /// Reference bulk density, kg/m³.
    pub fn bulk_density_kg_m3(self) -> f64 {
        match self {
            Composition::Rocky => 2_600.0,
            Composition::Icy => 1_000.0,
            Composition::Metallic => 7_800.0,
            Composition::Carbonaceous => 1_500.0,
        }
    }
}

/// Physical properties of a catalog body, used by the analysis path only
/// (the propagator never reads them).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicalBody {
    pub radius_km: f64,
    pub mass_kg: f64,
    pub composition: Composition,
}

/// An impactor described by its bulk properties.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Impactor {
    pub diameter_km: f64,
    pub velocity_km_s: f64,
    pub density_kg_m3: f64,
    /// Impact angle from horizontal, degrees.
    pub angle_deg: f64,
}

/// Spherical-impactor mass, kg.
pub fn mass_kg(diameter_km: f64, density_kg_m3: f64) -> f64 {
    let radius_m = diameter_km * 1_000.0 / 2.0;
    let volume_m3 = (4.0 / 3.0) * PI * radius_m.powi(3);
    volume_m3 * density_kg_m3
}

/// Kinetic energy E = ½·m·v², joules.
pub fn kinetic_energy_j(mass_kg: f64, velocity_km_s: f64) -> f64 {
    let velocity_ms = kms_to_ms(velocity_km_s);
    0.5 * mass_kg * velocity_ms * velocity_ms
}

/// Convert joules to megatons of TNT.
pub fn megatons_tnt(joules: f64) -> f64 {
    joules / J_PER_MEGATON_TNT
}

/// Crater dimensions from the empirical scaling law.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CraterDimensions {
    pub diameter_km: f64,
    pub depth_km: f64,
    pub ejecta_radius_km: f64,
}

/// Crater scaling: diameter 0.07·E^0.33·sin(angle) km, depth diameter/7,
/// ejecta radius two crater diameters.
pub fn crater(energy_mt: f64, angle_deg: f64) -> CraterDimensions {
    let angle_factor = angle_deg.to_radians().sin();
    let diameter_km = 0.07 * energy_mt.powf(0.33) * angle_factor;

    CraterDimensions {
        diameter_km,
        depth_km: diameter_km / 7.0,
        ejecta_radius_km: diameter_km * EJECTA_RADIUS_FACTOR,
    }
}

/// Damage footprint from the empirical radii laws.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DamageRadii {
    /// Overpressure damage radius, km.
    pub airblast_km: f64,
    /// Thermal radiation radius, km.
    pub thermal_km: f64,
    /// Richter-like magnitude; `None` for zero-energy impacts, where the
    /// logarithmic law is undefined.
    pub seismic_magnitude: Option<f64>,
}

/// Airblast 2.2·E^0.33 km, thermal 3.5·E^0.41 km, seismic
/// 0.67·log10(E) + 3.87.
pub fn damage(energy_mt: f64) -> DamageRadii {
    let seismic_magnitude = if energy_mt > 0.0 {
        Some(0.67 * energy_mt.log10() + 3.87)
    } else {
        None
    };

    DamageRadii {
        airblast_km: 2.2 * energy_mt.powf(0.33),
        thermal_km: 3.5 * energy_mt.powf(0.41),
        seismic_magnitude,
    }
}

/// Event classification by TNT yield. Thresholds preserved verbatim.
pub fn classification(energy_mt: f64) -> &'static str {
    if energy_mt < 0.015 {
        "Meteorite (harmless)"
    } else if energy_mt < 0.5 {
        "Hiroshima-class"
    } else if energy_mt < 10.0 {
        "Tunguska-class"
    } else if energy_mt < 1_000_000.0 {
        "Regional devastation"
    } else {
        "Chicxulub-class (extinction)"
    }
}

/// Severity grade of an impact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Minor,
    Moderate,
    Severe,
    Catastrophic,
    Extinction,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Minor => "minor",
            Severity::Moderate => "moderate",
            Severity::Severe => "severe",
            Severity::Catastrophic => "catastrophic",
            Severity::Extinction => "extinction",
        };
        f.write_str(label)
    }
}

/// Severity thresholds by TNT yield.
pub fn severity(energy_mt: f64) -> Severity {
    if energy_mt < 0.1 {
        Severity::Minor
    } else if energy_mt < 10.0 {
        Severity::Moderate
    } else if energy_mt < 1_000.0 {
        Severity::Severe
    } else if energy_mt < 1_000_000.0 {
        Severity::Catastrophic
    } else {
        Severity::Extinction
    }
}

/// Comparison to a known event at the same energy scale.
pub fn comparison(energy_mt: f64) -> &'static str {
    if energy_mt < 0.001 {
        "Comparable to a small bomb"
    } else if energy_mt < 0.015 {
        "Similar to Hiroshima atomic bomb (15 kilotons)"
    } else if energy_mt < 0.5 {
        "Similar to Chelyabinsk meteor (2013)"
    } else if energy_mt < 10.0 {
        "Similar to Tunguska event (1908)"
    } else if energy_mt < 1_000.0 {
        "Similar to largest nuclear weapons tested"
    } else if energy_mt < 100_000.0 {
        "Regional devastation event"
    } else if energy_mt < 10_000_000.0 {
        "Similar to Chicxulub impact (dinosaur extinction)"
    } else {
        "Global extinction level event"
    }
}

/// Ocean-impact tsunami height 0.1·E^0.5·√(depth/4000), metres.
pub fn tsunami_height_m(energy_mt: f64, water_depth_m: f64) -> f64 {
    0.1 * energy_mt.powf(0.5) * (water_depth_m / 4_000.0).sqrt()
}

/// Energy in both unit systems.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ImpactEnergy {
    pub joules: f64,
    pub megatons_tnt: f64,
}

/// Full impact bundle for one impactor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ImpactResults {
    pub energy: ImpactEnergy,
    pub crater: CraterDimensions,
    pub damage: DamageRadii,
    pub classification: &'static str,
    pub comparison: &'static str,
    pub severity: Severity,
}

/// Chain mass → energy → crater → damage → grading for one impactor.
pub fn compute_impact(impactor: &Impactor) -> ImpactResults {
    let mass = mass_kg(impactor.diameter_km, impactor.density_kg_m3);
    let joules = kinetic_energy_j(mass, impactor.velocity_km_s);
    let energy_mt = megatons_tnt(joules);

    ImpactResults {
        energy: ImpactEnergy {
            joules,
            megatons_tnt: energy_mt,
        },
        crater: crater(energy_mt, impactor.angle_deg),
        damage: damage(energy_mt),
        classification: classification(energy_mt),
        comparison: comparison(energy_mt),
        severity: severity(energy_mt),
    }
}
