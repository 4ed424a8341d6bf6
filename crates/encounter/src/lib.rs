//! Close-approach geometry and the distance-based risk model.
//!
//! The separation sweep samples both orbits at the same mean-anomaly index,
//! so it detects coplanar/synchronized crossings rather than the true
//! minimum over independently phased orbits. The probability figure is a
//! deterministic heuristic scaled from that distance — a didactic model,
//! not a collision-probability computation (no uncertainty ellipsoid, no
//! Monte Carlo). Do not repurpose it for real risk assessment.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use impact_core::constants::EARTH_RADIUS_KM;
use impact_core::units::{au_to_km, km_to_au};
use impact_core::vector::distance;
use impact_orbits::{ElementsError, OrbitalElements, position_at};

/// Mean-anomaly samples per orbit in the separation sweep.
pub const DEFAULT_SAMPLES: usize = 360;

/// Distances at or beyond 10 Earth radii carry zero probability.
const PROBABILITY_CUTOFF_EARTH_RADII: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum EncounterError {
    #[error(transparent)]
    Elements(#[from] ElementsError),
}

/// Minimum separation between two orbits over a synchronized mean-anomaly
/// sweep, in kilometres.
pub fn minimum_distance_km(
    orbit_a: &OrbitalElements,
    orbit_b: &OrbitalElements,
    samples: usize,
) -> Result<f64, EncounterError> {
    let samples = samples.max(1);
    let mut min_au = f64::INFINITY;

    for i in 0..samples {
        let angle = i as f64 * 360.0 / samples as f64;
        let pos_a = position_at(&orbit_a.with_mean_anomaly(angle), 0.0)?;
        let pos_b = position_at(&orbit_b.with_mean_anomaly(angle), 0.0)?;
        min_au = min_au.min(distance(&pos_a, &pos_b));
    }

    Ok(au_to_km(min_au))
}

/// Impact probability (0-100) scaled linearly from the closest approach:
/// zero at or beyond 10 Earth radii, 100 at contact.
pub fn impact_probability_percent(distance_km: f64) -> f64 {
    let cutoff = EARTH_RADIUS_KM * PROBABILITY_CUTOFF_EARTH_RADII;
    if distance_km >= cutoff {
        0.0
    } else {
        (100.0 * (1.0 - distance_km / cutoff)).max(0.0)
    }
}

/// Ordered risk grade derived from the impact probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    None,
    Low,
    Moderate,
    High,
    Extreme,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RiskLevel::None => "None",
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
            RiskLevel::Extreme => "Extreme",
        };
        f.write_str(label)
    }
}

/// Risk thresholds on the probability percentage. Kept exactly at
/// >50 / >25 / >10 / >1 for behavioral compatibility with the established
/// model.
pub fn risk_level(probability_percent: f64) -> RiskLevel {
    if probability_percent > 50.0 {
        RiskLevel::Extreme
    } else if probability_percent > 25.0 {
        RiskLevel::High
    } else if probability_percent > 10.0 {
        RiskLevel::Moderate
    } else if probability_percent > 1.0 {
        RiskLevel::Low
    } else {
        RiskLevel::None
    }
}

/// Closest-approach summary between an orbit and a reference orbit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CloseApproach {
    pub distance_km: f64,
    pub distance_au: f64,
    pub distance_earth_radii: f64,
    pub probability_percent: f64,
    pub risk: RiskLevel,
}

/// Sweep the two orbits and derive distance, probability, and risk.
pub fn assess(
    orbit: &OrbitalElements,
    reference: &OrbitalElements,
    samples: usize,
) -> Result<CloseApproach, EncounterError> {
    let distance_km = minimum_distance_km(orbit, reference, samples)?;
    let probability_percent = impact_probability_percent(distance_km);

    Ok(CloseApproach {
        distance_km,
        distance_au: km_to_au(distance_km),
        distance_earth_radii: distance_km / EARTH_RADIUS_KM,
        probability_percent,
        risk: risk_level(probability_percent),
    })
}
