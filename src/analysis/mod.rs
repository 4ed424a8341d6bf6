//! End-to-end impact assessment: encounter geometry chained into impact
//! physics, the way a front-end consumes the engine.

use serde::Serialize;
use thiserror::Error;

use impact_encounter::{self as encounter, CloseApproach, EncounterError, RiskLevel};
use impact_orbits::{ElementsError, OrbitalElements, vis_viva_speed_km_s};
use impact_physics::{
    self as physics, CraterDimensions, DamageRadii, ImpactEnergy, PhysicalBody, Severity,
};

/// Inputs that shape one assessment run.
#[derive(Debug, Clone)]
pub struct AssessmentConfig {
    /// Mean-anomaly samples for the separation sweep.
    pub samples: usize,
    /// Impact velocity override, km/s. Derived from vis-viva at the mean
    /// distance when absent.
    pub velocity_km_s: Option<f64>,
    /// Impact angle from horizontal, degrees.
    pub angle_deg: f64,
}

impl Default for AssessmentConfig {
    fn default() -> Self {
        Self {
            samples: encounter::DEFAULT_SAMPLES,
            velocity_km_s: None,
            angle_deg: physics::DEFAULT_ANGLE_DEG,
        }
    }
}

/// Top-level assessment error.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("invalid orbital elements: {0}")]
    Elements(#[from] ElementsError),
    #[error("close-approach assessment failed: {0}")]
    Encounter(#[from] EncounterError),
}

/// Complete assessment of one body against a reference orbit.
#[derive(Debug, Clone, Serialize)]
pub struct ImpactAnalysis {
    pub body: String,
    pub close_approach: CloseApproach,
    pub impact_velocity_km_s: f64,
    pub energy: ImpactEnergy,
    pub crater: CraterDimensions,
    pub damage: DamageRadii,
    pub classification: &'static str,
    pub comparison: &'static str,
    pub severity: Severity,
    pub estimated_damage: &'static str,
}

/// Run the assessment pipeline: separation sweep, then energy, crater, and
/// damage figures from the body's catalog mass.
pub fn assess_impact(
    name: &str,
    body: &PhysicalBody,
    elements: &OrbitalElements,
    reference: &OrbitalElements,
    config: &AssessmentConfig,
) -> Result<ImpactAnalysis, AnalysisError> {
    elements.validate()?;

    let close_approach = encounter::assess(elements, reference, config.samples)?;

    // Mean-distance orbital speed stands in for the encounter velocity
    // unless the scenario pins one.
    let impact_velocity_km_s = config.velocity_km_s.unwrap_or_else(|| {
        vis_viva_speed_km_s(elements.semi_major_axis_au, elements.semi_major_axis_au)
    });

    let joules = physics::kinetic_energy_j(body.mass_kg, impact_velocity_km_s);
    let energy_mt = physics::megatons_tnt(joules);

    Ok(ImpactAnalysis {
        body: name.to_string(),
        close_approach,
        impact_velocity_km_s,
        energy: ImpactEnergy {
            joules,
            megatons_tnt: energy_mt,
        },
        crater: physics::crater(energy_mt, config.angle_deg),
        damage: physics::damage(energy_mt),
        classification: physics::classification(energy_mt),
        comparison: physics::comparison(energy_mt),
        severity: physics::severity(energy_mt),
        estimated_damage: estimated_damage(close_approach.risk),
    })
}

/// Headline damage estimate for a risk grade.
pub fn estimated_damage(risk: RiskLevel) -> &'static str {
    match risk {
        RiskLevel::None => "No significant threat",
        RiskLevel::Low => "Local damage possible",
        RiskLevel::Moderate => "Regional devastation likely",
        RiskLevel::High => "Continental-scale catastrophe",
        RiskLevel::Extreme => "Global extinction event",
    }
}
