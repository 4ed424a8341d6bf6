//! Ingestion of externally supplied Cartesian state vectors.
//!
//! Ephemeris services hand over position/velocity pairs (AU, AU/day); this
//! crate recovers the full six Keplerian elements from them. The engine
//! never fetches or parses ephemeris text itself — that is the supplying
//! collaborator's job.

use impact_core::constants::GM_SUN_AU3_DAY2;
use impact_core::units::{au_day_to_km_s, rad_to_deg};
use impact_core::vector::{cross, dot, norm, scale, sub};
use impact_orbits::{OrbitalElements, StateVector};
use thiserror::Error;

/// Below this magnitude a vector is treated as zero.
const EPS: f64 = 1e-12;

/// Eccentricity below which the orbit is treated as circular and the
/// argument of perihelion pinned to zero.
const CIRCULAR_EPS: f64 = 1e-10;

/// Inclination (radians) below which the orbit is treated as equatorial
/// and the ascending node pinned to zero.
const EQUATORIAL_EPS: f64 = 1e-10;

/// Failures while recovering elements from a state vector.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ImportError {
    /// Zero position, zero velocity, or a rectilinear trajectory with no
    /// angular momentum — no orbital plane can be recovered.
    #[error("degenerate state vector: {0}")]
    DegenerateState(&'static str),
    /// The vector describes an escape trajectory. The computed values are
    /// carried so the caller can inspect them; they are never clamped into
    /// the bound-orbit domain.
    #[error("state vector describes an unbound orbit (a = {semi_major_axis_au} AU, e = {eccentricity})")]
    UnboundOrbit {
        semi_major_axis_au: f64,
        eccentricity: f64,
    },
}

/// Recover Keplerian elements from a heliocentric state vector.
///
/// Performs the standard six-element inversion: specific angular momentum,
/// node vector, eccentricity vector, then the quadrant-corrected angle
/// chain down to the mean anomaly. Near-circular orbits pin ω = 0 and
/// measure the anomaly from the node; near-equatorial orbits pin Ω = 0 and
/// measure angles from +X.
pub fn to_orbital_elements(state: &StateVector) -> Result<OrbitalElements, ImportError> {
    let r = state.position_au;
    let v = state.velocity_au_day;
    let mu = GM_SUN_AU3_DAY2;

    let r_mag = norm(&r);
    let v_mag = norm(&v);
    if r_mag < EPS {
        return Err(ImportError::DegenerateState("zero position"));
    }
    if v_mag < EPS {
        return Err(ImportError::DegenerateState("zero velocity"));
    }

    // Specific angular momentum and the ascending-node direction ẑ × h.
    let h = cross(&r, &v);
    let h_mag = norm(&h);
    if h_mag < EPS {
        return Err(ImportError::DegenerateState(
            "rectilinear trajectory has no orbital plane",
        ));
    }
    let node = [-h[1], h[0], 0.0];
    let node_mag = norm(&node);

    // Eccentricity vector e = ((v² − μ/r)·r − (r·v)·v) / μ.
    let r_dot_v = dot(&r, &v);
    let e_vec = scale(
        &sub(
            &scale(&r, v_mag * v_mag - mu / r_mag),
            &scale(&v, r_dot_v),
        ),
        1.0 / mu,
    );
    let ecc = norm(&e_vec);

    // Semi-major axis from the specific orbital energy.
    let semi_major_axis_au = 1.0 / (2.0 / r_mag - v_mag * v_mag / mu);
    if ecc >= 1.0 || semi_major_axis_au <= 0.0 {
        return Err(ImportError::UnboundOrbit {
            semi_major_axis_au,
            eccentricity: ecc,
        });
    }

    let inclination_rad = (h[2] / h_mag).clamp(-1.0, 1.0).acos();
    let equatorial = inclination_rad < EQUATORIAL_EPS || node_mag < EPS;
    let circular = ecc < CIRCULAR_EPS;

    let ascending_node_rad = if equatorial {
        0.0
    } else {
        let mut node_angle = (node[0] / node_mag).clamp(-1.0, 1.0).acos();
        if node[1] < 0.0 {
            node_angle = std::f64::consts::TAU - node_angle;
        }
        node_angle
    };

    let arg_perihelion_rad = if circular {
        0.0
    } else if equatorial {
        // Longitude of perihelion measured from +X in the orbital plane.
        let mut angle = e_vec[1].atan2(e_vec[0]);
        if angle < 0.0 {
            angle += std::f64::consts::TAU;
        }
        angle
    } else {
        let mut angle = (dot(&node, &e_vec) / (node_mag * ecc))
            .clamp(-1.0, 1.0)
            .acos();
        if e_vec[2] < 0.0 {
            angle = std::f64::consts::TAU - angle;
        }
        angle
    };

    // True anomaly, measured from perihelion (or from the reference
    // direction when the orbit is circular and perihelion is undefined).
    let true_anomaly_rad = if circular {
        if equatorial {
            let mut angle = r[1].atan2(r[0]);
            if angle < 0.0 {
                angle += std::f64::consts::TAU;
            }
            angle
        } else {
            let mut angle = (dot(&node, &r) / (node_mag * r_mag))
                .clamp(-1.0, 1.0)
                .acos();
            if r[2] < 0.0 {
                angle = std::f64::consts::TAU - angle;
            }
            angle
        }
    } else {
        let mut angle = (dot(&e_vec, &r) / (ecc * r_mag)).clamp(-1.0, 1.0).acos();
        if r_dot_v < 0.0 {
            angle = std::f64::consts::TAU - angle;
        }
        angle
    };

    // ν → E → M through the eccentric-anomaly half-angle identity.
    let ecc_anomaly_rad = 2.0
        * (((1.0 - ecc) / (1.0 + ecc)).sqrt() * (true_anomaly_rad / 2.0).tan()).atan();
    let mean_anomaly_rad = ecc_anomaly_rad - ecc * ecc_anomaly_rad.sin();
    let mean_anomaly_deg = rad_to_deg(mean_anomaly_rad).rem_euclid(360.0);

    Ok(OrbitalElements {
        semi_major_axis_au,
        eccentricity: ecc,
        inclination_deg: rad_to_deg(inclination_rad),
        ascending_node_deg: rad_to_deg(ascending_node_rad),
        arg_perihelion_deg: rad_to_deg(arg_perihelion_rad),
        mean_anomaly_deg,
        period_years: Some(semi_major_axis_au.powf(1.5)),
        speed_km_s: Some(au_day_to_km_s(v_mag)),
    })
}
