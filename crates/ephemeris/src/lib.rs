//! Planetary ephemerides without an ephemeris service.
//!
//! Positions come from J2000.0 mean elements plus linear secular rates
//! (good to ~1-3% for the inner planets, better further out). When a
//! collaborator supplies real ephemeris state vectors, the caller-owned
//! [`cache::EphemerisCache`] and the [`hybrid`] resolution path blend them
//! with the Kepler fallback.

pub mod cache;
pub mod epoch;
pub mod hybrid;
mod secular;
mod table;

pub use secular::{
    EphemerisError, ExtrapolationWarning, MeanElements, adjust, adjusted_elements,
    mean_anomaly_deg, orbital_elements_at,
};
pub use table::{PLANETS, PlanetRecord, SecularRates, planet};
