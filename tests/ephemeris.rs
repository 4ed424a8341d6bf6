use approx::assert_relative_eq;
use chrono::{DateTime, Duration, Utc};
use impact_calculator::ephemeris::epoch::{
    self, J2000_UNIX_SECONDS, centuries_since_j2000, days_since_j2000, julian_day, parse_date,
};
use impact_calculator::ephemeris::{
    ExtrapolationWarning, PLANETS, adjusted_elements, mean_anomaly_deg, orbital_elements_at, planet,
};
use impact_calculator::orbits::propagate;
use impact_calculator::vector::norm;

fn j2000() -> DateTime<Utc> {
    DateTime::from_timestamp(J2000_UNIX_SECONDS, 0).expect("valid timestamp")
}

#[test]
fn epoch_arithmetic_is_anchored_at_j2000() {
    let moment = j2000();
    assert_eq!(days_since_j2000(moment), 0.0);
    assert_eq!(julian_day(moment), 2_451_545.0);
    assert_eq!(centuries_since_j2000(moment), 0.0);

    let later = moment + Duration::days(36_525);
    assert_relative_eq!(centuries_since_j2000(later), 1.0, max_relative = 1e-12);
}

#[test]
fn parse_date_accepts_calendar_dates_only() {
    let parsed = parse_date("2024-06-15").expect("valid date");
    assert_eq!(parsed.format("%Y-%m-%d %H:%M").to_string(), "2024-06-15 00:00");
    assert!(parse_date("June 15th").is_err());
    assert!(parse_date("2024-13-40").is_err());
}

#[test]
fn catalog_contains_all_eight_planets() {
    assert_eq!(PLANETS.len(), 8);
    assert!(planet("mercury").is_some());
    assert!(planet("NEPTUNE").is_some());
    assert!(planet("Pluto").is_none());

    let earth = planet("Earth").expect("Earth record");
    assert_relative_eq!(earth.semi_major_axis_au, 1.0, max_relative = 1e-4);
    assert!(earth.rates.eccentricity_per_cy.is_none());
}

#[test]
fn earth_mean_anomaly_at_epoch_matches_the_published_longitudes() {
    let earth = planet("Earth").expect("Earth record");
    // M = L - ϖ = 100.46457166 - 102.93768193 (mod 360).
    let expected = (100.464_571_66_f64 - 102.937_681_93).rem_euclid(360.0);
    assert_relative_eq!(mean_anomaly_deg(earth, 0.0), expected, max_relative = 1e-12);
}

#[test]
fn mercury_secular_rates_apply_linearly_over_one_century() {
    let mercury = planet("Mercury").expect("Mercury record");
    let (adjusted, warnings) = adjusted_elements(mercury, 1.0);

    assert!(warnings.is_empty());
    assert_relative_eq!(adjusted.eccentricity, 0.205_655_0, max_relative = 1e-5);
    assert_relative_eq!(adjusted.inclination_deg, 6.999_031_53, max_relative = 1e-9);
    assert_relative_eq!(adjusted.lon_perihelion_deg, 77.618_273_17, max_relative = 1e-9);
    assert_relative_eq!(adjusted.ascending_node_deg, 48.205_425_12, max_relative = 1e-9);
}

#[test]
fn bodies_without_rates_are_held_constant() {
    let venus = planet("Venus").expect("Venus record");
    let (adjusted, warnings) = adjusted_elements(venus, 250.0);

    assert!(warnings.is_empty());
    assert_eq!(adjusted.eccentricity, venus.eccentricity);
    assert_eq!(adjusted.inclination_deg, venus.inclination_deg);
    assert_eq!(adjusted.ascending_node_deg, venus.ascending_node_deg);
}

#[test]
fn absurd_extrapolation_warns_instead_of_clamping() {
    let mercury = planet("Mercury").expect("Mercury record");
    let (adjusted, warnings) = adjusted_elements(mercury, 50_000.0);

    // e drifts past 1; the value is reported as-is.
    assert!(adjusted.eccentricity > 1.0);
    assert!(
        warnings
            .iter()
            .any(|w| matches!(w, ExtrapolationWarning::EccentricityOutOfRange(_))),
        "warnings: {warnings:?}"
    );
}

#[test]
fn earth_sits_near_one_au_at_the_epoch() {
    let earth = planet("Earth").expect("Earth record");
    let (elements, warnings) = orbital_elements_at(earth, j2000());

    assert!(warnings.is_empty());
    let state = propagate(&elements, 0.0).expect("propagate");
    let radius = norm(&state.position_au);
    assert!(
        (0.96..=1.04).contains(&radius),
        "Earth radius vector = {radius} AU"
    );
}

#[test]
fn planet_positions_are_deterministic() {
    let mars = planet("Mars").expect("Mars record");
    let moment = epoch::parse_date("2026-08-06").expect("date");

    let (first, _) = orbital_elements_at(mars, moment);
    let (second, _) = orbital_elements_at(mars, moment);
    assert_eq!(first, second);

    let a = propagate(&first, 0.0).expect("propagate").position_au;
    let b = propagate(&second, 0.0).expect("propagate").position_au;
    assert_eq!(a, b);
}
