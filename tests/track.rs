use impact_calculator::orbits::OrbitalElements;
use impact_calculator::track::sample_period;
use impact_calculator::vector::norm;

fn neo() -> OrbitalElements {
    OrbitalElements {
        semi_major_axis_au: 1.72,
        eccentricity: 0.571,
        inclination_deg: 4.98,
        ascending_node_deg: 326.41,
        arg_perihelion_deg: 108.3,
        mean_anomaly_deg: 21.9,
        period_years: None,
        speed_km_s: None,
    }
}

#[test]
fn samples_cover_one_period_at_equal_steps() {
    let elements = neo();
    let points = sample_period(&elements, 48).expect("track");
    assert_eq!(points.len(), 48);

    let step = elements.period_seconds() / 48.0;
    for (index, point) in points.iter().enumerate() {
        assert_eq!(point.sample, index);
        assert!((point.t_seconds - index as f64 * step).abs() < 1e-6);
    }
}

#[test]
fn sampled_radii_stay_between_perihelion_and_aphelion() {
    let elements = neo();
    let perihelion = 1.72 * (1.0 - 0.571);
    let aphelion = 1.72 * (1.0 + 0.571);

    for point in sample_period(&elements, 90).expect("track") {
        let radius = norm(&point.position_au);
        assert!(
            (perihelion - 1e-9..=aphelion + 1e-9).contains(&radius),
            "sample {}: r = {radius}",
            point.sample
        );
    }
}

#[test]
fn invalid_elements_fail_before_sampling() {
    let mut elements = neo();
    elements.eccentricity = 1.3;
    assert!(sample_period(&elements, 10).is_err());
}
