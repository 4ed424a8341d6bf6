use approx::assert_relative_eq;
use impact_calculator::constants::SECONDS_PER_YEAR;
use impact_calculator::orbits::{
    ElementsError, OrbitalElements, position_at, propagate, vis_viva_speed_km_s,
};
use impact_calculator::vector::norm;

fn earth_like() -> OrbitalElements {
    OrbitalElements {
        semi_major_axis_au: 1.0,
        eccentricity: 0.017,
        inclination_deg: 0.0,
        ascending_node_deg: 0.0,
        arg_perihelion_deg: 102.9,
        mean_anomaly_deg: 100.5,
        period_years: None,
        speed_km_s: None,
    }
}

#[test]
fn period_defaults_to_keplers_third_law() {
    let mut elements = earth_like();
    elements.semi_major_axis_au = 4.0;
    assert_relative_eq!(elements.period_years(), 8.0, max_relative = 1e-12);

    elements.period_years = Some(11.86);
    assert_relative_eq!(elements.period_years(), 11.86, max_relative = 1e-12);
}

#[test]
fn propagation_is_periodic() {
    let elements = earth_like();
    let period_s = elements.period_seconds();

    let first = position_at(&elements, 1.0e6).expect("propagate");
    let second = position_at(&elements, 1.0e6 + period_s).expect("propagate");

    for axis in 0..3 {
        assert!(
            (first[axis] - second[axis]).abs() < 1e-6,
            "axis {axis}: {} vs {}",
            first[axis],
            second[axis]
        );
    }
}

#[test]
fn zero_eccentricity_orbit_stays_on_a_circle() {
    let elements = OrbitalElements {
        eccentricity: 0.0,
        semi_major_axis_au: 2.5,
        ..earth_like()
    };

    for step in 0..12 {
        let t = step as f64 * SECONDS_PER_YEAR / 3.0;
        let position = position_at(&elements, t).expect("propagate");
        assert!(
            (norm(&position) - 2.5).abs() < 1e-9,
            "t = {t}: r = {}",
            norm(&position)
        );
    }
}

#[test]
fn inclination_tilts_the_orbit_out_of_plane() {
    let flat = earth_like();
    let tilted = OrbitalElements {
        inclination_deg: 30.0,
        ..flat
    };

    let mut max_z_flat = 0.0_f64;
    let mut max_z_tilted = 0.0_f64;
    for step in 0..36 {
        let t = step as f64 * SECONDS_PER_YEAR / 36.0;
        max_z_flat = max_z_flat.max(position_at(&flat, t).expect("propagate")[2].abs());
        max_z_tilted = max_z_tilted.max(position_at(&tilted, t).expect("propagate")[2].abs());
    }

    assert!(max_z_flat < 1e-12);
    assert!(max_z_tilted > 0.4, "max |z| = {max_z_tilted}");
}

#[test]
fn earth_velocity_is_about_thirty_km_s() {
    let elements = earth_like();
    let state = propagate(&elements, 0.0).expect("propagate");
    let speed_km_s =
        impact_calculator::units::au_day_to_km_s(norm(&state.velocity_au_day));
    assert!(
        (speed_km_s - 29.78).abs() < 1.0,
        "speed = {speed_km_s} km/s"
    );
}

#[test]
fn invalid_elements_are_rejected_not_clamped() {
    let negative_axis = OrbitalElements {
        semi_major_axis_au: -1.0,
        ..earth_like()
    };
    assert_eq!(
        negative_axis.validate(),
        Err(ElementsError::NonPositiveSemiMajorAxis(-1.0))
    );
    assert!(propagate(&negative_axis, 0.0).is_err());

    let negative_e = OrbitalElements {
        eccentricity: -0.1,
        ..earth_like()
    };
    assert_eq!(
        negative_e.validate(),
        Err(ElementsError::NegativeEccentricity(-0.1))
    );

    let unbound = OrbitalElements {
        eccentricity: 1.0,
        ..earth_like()
    };
    assert_eq!(
        unbound.validate(),
        Err(ElementsError::UnboundEccentricity(1.0))
    );
}

#[test]
fn propagation_is_bit_identical_across_calls() {
    let elements = earth_like();
    let first = propagate(&elements, 12_345_678.9).expect("propagate");
    let second = propagate(&elements, 12_345_678.9).expect("propagate");

    assert_eq!(first.position_au, second.position_au);
    assert_eq!(first.velocity_au_day, second.velocity_au_day);
    assert_eq!(first.true_anomaly_rad, second.true_anomaly_rad);
}

#[test]
fn vis_viva_matches_circular_orbit_speed() {
    // Circular orbit at 1 AU: v = sqrt(mu/r) ≈ 29.8 km/s.
    let speed = vis_viva_speed_km_s(1.0, 1.0);
    assert!((speed - 29.78).abs() < 0.1, "speed = {speed}");
    // Perihelion is faster than aphelion.
    assert!(vis_viva_speed_km_s(1.0, 0.9) > vis_viva_speed_km_s(1.0, 1.1));
}

#[test]
fn propagated_state_reports_solver_convergence() {
    let state = propagate(&earth_like(), 0.0).expect("propagate");
    assert!(state.solver.converged);
    assert!(state.radius_au > 0.9 && state.radius_au < 1.1);
}
