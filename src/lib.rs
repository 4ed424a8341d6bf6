//! Orbital-mechanics and impact-analysis logic lives here.
//!
//! The workspace crates hold the individual engines (Kepler solving,
//! propagation, ingestion, encounter geometry, impact physics, planetary
//! ephemerides); this library ties them into end-to-end assessments and
//! re-exports them under short names. Keeping the logic in a library crate
//! lets multiple front-ends (CLI, plotting, export) share it.

pub mod analysis;
pub mod scenario;
pub mod track;

pub use impact_config as config;
pub use impact_encounter as encounter;
pub use impact_ephemeris as ephemeris;
pub use impact_export as export;
pub use impact_importer as importer;
pub use impact_kepler as kepler;
pub use impact_orbits as orbits;
pub use impact_physics as physics;

pub use impact_core::{constants, time, units, vector};

/// Returns the version of the library for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
