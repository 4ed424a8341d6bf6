//! Linear secular adjustment of J2000.0 mean elements.

use chrono::{DateTime, Utc};
use thiserror::Error;

use impact_core::constants::DAYS_PER_YEAR;
use impact_core::time::normalize_degrees;
use impact_orbits::{ElementsError, OrbitalElements};

use crate::epoch::{centuries_since_j2000, days_since_j2000};
use crate::table::{PlanetRecord, SecularRates};

/// Ephemeris-level failures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EphemerisError {
    #[error(transparent)]
    Elements(#[from] ElementsError),
}

/// Warning-level conditions from long-range extrapolation.
///
/// Linear rates are only valid near the epoch; over many centuries they can
/// push elements outside their physical domains. That is reported, never
/// silently corrected, and never fatal.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ExtrapolationWarning {
    #[error("extrapolated eccentricity {0} is outside [0, 1)")]
    EccentricityOutOfRange(f64),
    #[error("extrapolated inclination {0}° is outside [-180°, 180°]")]
    InclinationOutOfRange(f64),
}

/// The element subset the secular rates act on. Orientation angles use the
/// longitude-of-perihelion convention (ϖ = Ω + ω) of the source tables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanElements {
    pub semi_major_axis_au: f64,
    pub eccentricity: f64,
    pub inclination_deg: f64,
    pub lon_perihelion_deg: f64,
    pub ascending_node_deg: f64,
}

/// Apply the linear secular rates: `value += rate · T`, with T in Julian
/// centuries past J2000.0. Elements without a published rate are held
/// constant.
///
/// No bounds clamping is performed; out-of-domain results are returned
/// as-is together with the matching warnings.
pub fn adjust(
    base: &MeanElements,
    rates: &SecularRates,
    centuries: f64,
) -> (MeanElements, Vec<ExtrapolationWarning>) {
    let drift = |rate: Option<f64>| rate.unwrap_or(0.0) * centuries;

    let adjusted = MeanElements {
        semi_major_axis_au: base.semi_major_axis_au + drift(rates.semi_major_axis_au_per_cy),
        eccentricity: base.eccentricity + drift(rates.eccentricity_per_cy),
        inclination_deg: base.inclination_deg + drift(rates.inclination_deg_per_cy),
        lon_perihelion_deg: base.lon_perihelion_deg + drift(rates.lon_perihelion_deg_per_cy),
        ascending_node_deg: base.ascending_node_deg + drift(rates.ascending_node_deg_per_cy),
    };

    let mut warnings = Vec::new();
    if !(0.0..1.0).contains(&adjusted.eccentricity) {
        warnings.push(ExtrapolationWarning::EccentricityOutOfRange(
            adjusted.eccentricity,
        ));
    }
    if adjusted.inclination_deg.abs() > 180.0 {
        warnings.push(ExtrapolationWarning::InclinationOutOfRange(
            adjusted.inclination_deg,
        ));
    }

    (adjusted, warnings)
}

/// Secular-adjusted mean elements of a built-in planet.
pub fn adjusted_elements(
    record: &PlanetRecord,
    centuries: f64,
) -> (MeanElements, Vec<ExtrapolationWarning>) {
    adjust(&record.mean_elements(), &record.rates, centuries)
}

impl PlanetRecord {
    /// The J2000.0 element subset the adjuster acts on.
    pub fn mean_elements(&self) -> MeanElements {
        MeanElements {
            semi_major_axis_au: self.semi_major_axis_au,
            eccentricity: self.eccentricity,
            inclination_deg: self.inclination_deg,
            lon_perihelion_deg: self.lon_perihelion_deg,
            ascending_node_deg: self.ascending_node_deg,
        }
    }
}

/// Mean anomaly at `days_since_epoch` days past J2000.0, degrees in [0, 360).
///
/// M = L - ϖ, with the mean longitude advanced at n = 360/period and the
/// longitude of perihelion taken at its secular-adjusted value.
pub fn mean_anomaly_deg(record: &PlanetRecord, days_since_epoch: f64) -> f64 {
    let centuries = days_since_epoch / impact_core::constants::DAYS_PER_CENTURY;
    let (adjusted, _) = adjusted_elements(record, centuries);

    let mean_motion_deg_day = 360.0 / record.period_days;
    let mean_longitude = record.mean_longitude_deg + mean_motion_deg_day * days_since_epoch;

    normalize_degrees(mean_longitude - adjusted.lon_perihelion_deg)
}

/// Full propagator-ready elements for a planet at a calendar instant.
///
/// ω is recovered from ϖ - Ω; the sidereal period is cached on the result
/// so the propagator does not re-derive it from Kepler III.
pub fn orbital_elements_at(
    record: &PlanetRecord,
    moment: DateTime<Utc>,
) -> (OrbitalElements, Vec<ExtrapolationWarning>) {
    let days = days_since_j2000(moment);
    let centuries = centuries_since_j2000(moment);
    let (adjusted, warnings) = adjusted_elements(record, centuries);

    let elements = OrbitalElements {
        semi_major_axis_au: adjusted.semi_major_axis_au,
        eccentricity: adjusted.eccentricity,
        inclination_deg: adjusted.inclination_deg,
        ascending_node_deg: adjusted.ascending_node_deg,
        arg_perihelion_deg: normalize_degrees(
            adjusted.lon_perihelion_deg - adjusted.ascending_node_deg,
        ),
        mean_anomaly_deg: mean_anomaly_deg(record, days),
        period_years: Some(record.period_days / DAYS_PER_YEAR),
        speed_km_s: None,
    };

    (elements, warnings)
}
