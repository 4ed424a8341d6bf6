//! Keplerian orbital elements and element-to-Cartesian propagation.
//!
//! Output frame: heliocentric ecliptic J2000, right-handed, +X toward the
//! vernal equinox, +Z toward ecliptic north. Positions are in AU and
//! velocities in AU/day. Any axis remapping needed for a particular display
//! convention is the consumer's responsibility.

use impact_core::constants::{GM_SUN_AU3_DAY2, SECONDS_PER_YEAR};
use impact_core::units::{au_day_to_km_s, deg_to_rad};
use impact_core::vector::Vector3;
use impact_kepler::{KeplerSolution, DEFAULT_TOLERANCE_RAD};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Keplerian elements of a heliocentric orbit.
///
/// Distances in AU, angles in degrees (the catalog convention). The cached
/// `period_years` and `speed_km_s` are optional: the period falls back to
/// Kepler's Third Law and the speed to vis-viva when absent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitalElements {
    pub semi_major_axis_au: f64,
    pub eccentricity: f64,
    pub inclination_deg: f64,
    /// Longitude of the ascending node Ω.
    pub ascending_node_deg: f64,
    /// Argument of perihelion ω.
    pub arg_perihelion_deg: f64,
    /// Mean anomaly M at epoch.
    pub mean_anomaly_deg: f64,
    #[serde(default)]
    pub period_years: Option<f64>,
    #[serde(default)]
    pub speed_km_s: Option<f64>,
}

/// Element values that cannot describe a bound orbit.
///
/// Surfaced to the caller instead of silently clamped: clamping would
/// change the physical meaning of the input.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ElementsError {
    #[error("semi-major axis must be positive for a bound orbit, got {0} AU")]
    NonPositiveSemiMajorAxis(f64),
    #[error("eccentricity must be non-negative, got {0}")]
    NegativeEccentricity(f64),
    #[error("eccentricity must be below 1 for a bound orbit, got {0}")]
    UnboundEccentricity(f64),
}

impl OrbitalElements {
    /// Check the bound-orbit invariant `a > 0 ∧ 0 ≤ e < 1`.
    pub fn validate(&self) -> Result<(), ElementsError> {
        if self.semi_major_axis_au <= 0.0 {
            return Err(ElementsError::NonPositiveSemiMajorAxis(
                self.semi_major_axis_au,
            ));
        }
        if self.eccentricity < 0.0 {
            return Err(ElementsError::NegativeEccentricity(self.eccentricity));
        }
        if self.eccentricity >= 1.0 {
            return Err(ElementsError::UnboundEccentricity(self.eccentricity));
        }
        Ok(())
    }

    /// Orbital period in years: the cached value, or `a^1.5` (Kepler III,
    /// heliocentric AU/year convention).
    pub fn period_years(&self) -> f64 {
        self.period_years
            .unwrap_or_else(|| self.semi_major_axis_au.powf(1.5))
    }

    /// Orbital period in seconds.
    pub fn period_seconds(&self) -> f64 {
        self.period_years() * SECONDS_PER_YEAR
    }

    /// Mean motion in degrees per second.
    pub fn mean_motion_deg_s(&self) -> f64 {
        360.0 / self.period_seconds()
    }

    /// Mean anomaly advanced to `sim_time_s` seconds past epoch, degrees.
    pub fn mean_anomaly_at(&self, sim_time_s: f64) -> f64 {
        self.mean_anomaly_deg + self.mean_motion_deg_s() * sim_time_s
    }

    /// Copy of these elements with the mean anomaly replaced.
    pub fn with_mean_anomaly(&self, mean_anomaly_deg: f64) -> Self {
        Self {
            mean_anomaly_deg,
            ..*self
        }
    }
}

/// Propagated Cartesian state plus the solver diagnostics that produced it.
///
/// A non-converged solve still yields the best-estimate position; the
/// embedded [`KeplerSolution`] lets the caller decide whether the degraded
/// accuracy is acceptable.
#[derive(Debug, Clone, Copy)]
pub struct PropagatedState {
    /// Heliocentric ecliptic position (AU).
    pub position_au: Vector3,
    /// Heliocentric ecliptic velocity (AU/day).
    pub velocity_au_day: Vector3,
    /// True anomaly ν (radians).
    pub true_anomaly_rad: f64,
    /// Distance from the Sun (AU).
    pub radius_au: f64,
    /// Kepler solver outcome for this state.
    pub solver: KeplerSolution,
}

/// Propagate orbital elements to a heliocentric Cartesian state.
///
/// `sim_time_s` is seconds past the element epoch. The elements are
/// validated first; unbound or degenerate inputs surface as
/// [`ElementsError`] rather than garbage positions.
pub fn propagate(
    elements: &OrbitalElements,
    sim_time_s: f64,
) -> Result<PropagatedState, ElementsError> {
    elements.validate()?;

    let e = elements.eccentricity;
    let mean_anomaly_deg = elements.mean_anomaly_at(sim_time_s);
    let solver = impact_kepler::solve(mean_anomaly_deg, e, DEFAULT_TOLERANCE_RAD);
    let e_anom = solver.eccentric_anomaly_rad;

    let true_anomaly = impact_kepler::true_anomaly_rad(e_anom, e);
    let radius = impact_kepler::radius_au(elements.semi_major_axis_au, e, e_anom);

    // Perifocal position.
    let cos_nu = true_anomaly.cos();
    let sin_nu = true_anomaly.sin();
    let x_orb = radius * cos_nu;
    let y_orb = radius * sin_nu;

    // Perifocal velocity from the angular-momentum form, AU/day.
    let p = elements.semi_major_axis_au * (1.0 - e * e);
    let sqrt_mu_p = (GM_SUN_AU3_DAY2 / p).sqrt();
    let vx_orb = -sqrt_mu_p * sin_nu;
    let vy_orb = sqrt_mu_p * (e + cos_nu);

    let rot = RotationMatrix::from_angles(
        elements.arg_perihelion_deg,
        elements.inclination_deg,
        elements.ascending_node_deg,
    );

    Ok(PropagatedState {
        position_au: rot.apply(x_orb, y_orb),
        velocity_au_day: rot.apply(vx_orb, vy_orb),
        true_anomaly_rad: true_anomaly,
        radius_au: radius,
        solver,
    })
}

/// Propagated position only; convenience wrapper over [`propagate`].
pub fn position_at(elements: &OrbitalElements, sim_time_s: f64) -> Result<Vector3, ElementsError> {
    propagate(elements, sim_time_s).map(|state| state.position_au)
}

/// Orbital speed at distance `radius_au` from the Sun via vis-viva, km/s.
pub fn vis_viva_speed_km_s(semi_major_axis_au: f64, radius_au: f64) -> f64 {
    let v_au_day =
        (GM_SUN_AU3_DAY2 * (2.0 / radius_au - 1.0 / semi_major_axis_au)).sqrt();
    au_day_to_km_s(v_au_day)
}

/// Perifocal-to-ecliptic rotation: the 3-1-3 composition by argument of
/// perihelion ω, inclination i, and ascending node Ω, precomputed as the
/// six matrix entries that act on in-plane vectors.
struct RotationMatrix {
    r11: f64,
    r12: f64,
    r21: f64,
    r22: f64,
    r31: f64,
    r32: f64,
}

impl RotationMatrix {
    fn from_angles(arg_perihelion_deg: f64, inclination_deg: f64, ascending_node_deg: f64) -> Self {
        let omega = deg_to_rad(arg_perihelion_deg);
        let node = deg_to_rad(ascending_node_deg);
        let incl = deg_to_rad(inclination_deg);

        let (sin_w, cos_w) = omega.sin_cos();
        let (sin_node, cos_node) = node.sin_cos();
        let (sin_i, cos_i) = incl.sin_cos();

        Self {
            r11: cos_node * cos_w - sin_node * sin_w * cos_i,
            r12: -cos_node * sin_w - sin_node * cos_w * cos_i,
            r21: sin_node * cos_w + cos_node * sin_w * cos_i,
            r22: -sin_node * sin_w + cos_node * cos_w * cos_i,
            r31: sin_w * sin_i,
            r32: cos_w * sin_i,
        }
    }

    fn apply(&self, x_orb: f64, y_orb: f64) -> Vector3 {
        [
            self.r11 * x_orb + self.r12 * y_orb,
            self.r21 * x_orb + self.r22 * y_orb,
            self.r31 * x_orb + self.r32 * y_orb,
        ]
    }
}

/// Cartesian heliocentric state: position in AU, velocity in AU/day, in the
/// same ecliptic frame the propagator emits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StateVector {
    pub position_au: Vector3,
    pub velocity_au_day: Vector3,
}

impl From<PropagatedState> for StateVector {
    fn from(state: PropagatedState) -> Self {
        Self {
            position_au: state.position_au,
            velocity_au_day: state.velocity_au_day,
        }
    }
}
