//! Sampled orbit tracks for export and plotting.

use impact_core::vector::Vector3;
use impact_orbits::{ElementsError, OrbitalElements, propagate};

/// One sampled point along an orbit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackPoint {
    pub sample: usize,
    pub t_seconds: f64,
    pub position_au: Vector3,
}

/// Sample one full orbital period at equal time steps.
pub fn sample_period(
    elements: &OrbitalElements,
    samples: usize,
) -> Result<Vec<TrackPoint>, ElementsError> {
    let samples = samples.max(1);
    let period_seconds = elements.period_seconds();
    let step = period_seconds / samples as f64;

    let mut points = Vec::with_capacity(samples);
    for sample in 0..samples {
        let t_seconds = sample as f64 * step;
        let state = propagate(elements, t_seconds)?;
        points.push(TrackPoint {
            sample,
            t_seconds,
            position_au: state.position_au,
        });
    }

    Ok(points)
}
