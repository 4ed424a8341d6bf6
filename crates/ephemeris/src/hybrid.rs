//! Hybrid position resolution: cached ephemeris states first, Kepler
//! elements as the fallback.
//!
//! A fresh cached vector is used directly; within a day of its fetch
//! instant it is advanced linearly along its velocity for sub-day
//! precision. Otherwise the secular-adjusted mean elements are propagated.

use chrono::{DateTime, Utc};

use impact_core::vector::{Vector3, add, scale};
use impact_orbits::propagate;

use crate::cache::EphemerisCache;
use crate::epoch::days_between;
use crate::secular::{EphemerisError, ExtrapolationWarning, orbital_elements_at};
use crate::table::PlanetRecord;

/// Where a resolved state came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// A fresh externally supplied state, used as-is.
    Cached,
    /// A cached state advanced linearly along its velocity.
    Interpolated,
    /// Propagated from the built-in mean elements.
    Kepler,
}

/// Coarse accuracy grade of a resolved state.
///
/// The mean-element fallback is good to ~1% for most planets; Mercury's
/// high eccentricity and perturbations degrade it to a few percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accuracy {
    High,
    Medium,
}

/// A resolved heliocentric state with its provenance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HybridState {
    pub position_au: Vector3,
    pub velocity_au_day: Vector3,
    pub source: Source,
    pub accuracy: Accuracy,
}

/// Resolution result plus any extrapolation warnings from the fallback path.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub state: HybridState,
    pub warnings: Vec<ExtrapolationWarning>,
}

/// Resolve a planet's state at `moment`, preferring cached ephemeris data.
pub fn resolve(
    cache: &EphemerisCache,
    record: &PlanetRecord,
    moment: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Result<Resolution, EphemerisError> {
    if let Some(cached) = cache.get(record.name, moment, now) {
        let elapsed_days = days_between(cached.fetched_at, moment);
        if elapsed_days.abs() < 1.0 && elapsed_days != 0.0 {
            let position =
                add(&cached.state.position_au, &scale(&cached.state.velocity_au_day, elapsed_days));
            return Ok(Resolution {
                state: HybridState {
                    position_au: position,
                    velocity_au_day: cached.state.velocity_au_day,
                    source: Source::Interpolated,
                    accuracy: Accuracy::High,
                },
                warnings: Vec::new(),
            });
        }
        return Ok(Resolution {
            state: HybridState {
                position_au: cached.state.position_au,
                velocity_au_day: cached.state.velocity_au_day,
                source: Source::Cached,
                accuracy: Accuracy::High,
            },
            warnings: Vec::new(),
        });
    }

    let (elements, warnings) = orbital_elements_at(record, moment);
    let state = propagate(&elements, 0.0)?;

    let accuracy = if record.name.eq_ignore_ascii_case("Mercury") {
        Accuracy::Medium
    } else {
        Accuracy::High
    };

    Ok(Resolution {
        state: HybridState {
            position_au: state.position_au,
            velocity_au_day: state.velocity_au_day,
            source: Source::Kepler,
            accuracy,
        },
        warnings,
    })
}
