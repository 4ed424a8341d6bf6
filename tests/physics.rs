use approx::assert_relative_eq;
use impact_calculator::physics::{
    Composition, Impactor, Severity, classification, compute_impact, crater, damage,
    kinetic_energy_j, mass_kg, megatons_tnt, severity, tsunami_height_m,
};

fn impactor(diameter_km: f64, velocity_km_s: f64) -> Impactor {
    Impactor {
        diameter_km,
        velocity_km_s,
        density_kg_m3: 2_600.0,
        angle_deg: 90.0,
    }
}

#[test]
fn composition_densities_match_the_reference_table() {
    assert_eq!(Composition::Rocky.bulk_density_kg_m3(), 2_600.0);
    assert_eq!(Composition::Icy.bulk_density_kg_m3(), 1_000.0);
    assert_eq!(Composition::Metallic.bulk_density_kg_m3(), 7_800.0);
    assert_eq!(Composition::Carbonaceous.bulk_density_kg_m3(), 1_500.0);
}

#[test]
fn spherical_mass_scales_with_the_cube_of_diameter() {
    let small = mass_kg(1.0, 2_600.0);
    let large = mass_kg(2.0, 2_600.0);
    assert_relative_eq!(large / small, 8.0, max_relative = 1e-12);

    // 1 km rocky sphere: (4/3)·π·500³ m³ · 2600 kg/m³ ≈ 1.36e12 kg.
    assert_relative_eq!(small, 1.361_356_8e12, max_relative = 1e-3);
}

#[test]
fn energy_is_strictly_monotonic_in_diameter_and_velocity() {
    let mut previous = 0.0;
    for diameter in [0.01, 0.1, 1.0, 5.0, 10.0] {
        let result = compute_impact(&impactor(diameter, 20.0));
        assert!(result.energy.joules > previous, "diameter {diameter}");
        previous = result.energy.joules;
    }

    let mut previous = 0.0;
    for velocity in [1.0, 5.0, 11.0, 30.0, 72.0] {
        let result = compute_impact(&impactor(1.0, velocity));
        assert!(result.energy.joules > previous, "velocity {velocity}");
        previous = result.energy.joules;
    }
}

#[test]
fn chicxulub_scale_input_is_extinction_class() {
    let result = compute_impact(&impactor(10.0, 20.0));

    assert!(
        result.energy.megatons_tnt >= 1.0e6,
        "energy = {} MT",
        result.energy.megatons_tnt
    );
    assert_eq!(result.classification, "Chicxulub-class (extinction)");
    assert_eq!(result.severity, Severity::Extinction);
    // The 0.07-coefficient scaling law puts the transient crater at ~26 km
    // for this input.
    assert!(
        result.crater.diameter_km > 20.0,
        "crater = {} km",
        result.crater.diameter_km
    );
    assert_relative_eq!(
        result.crater.depth_km,
        result.crater.diameter_km / 7.0,
        max_relative = 1e-12
    );
    assert_relative_eq!(
        result.crater.ejecta_radius_km,
        result.crater.diameter_km * 2.0,
        max_relative = 1e-12
    );
}

#[test]
fn chelyabinsk_scale_input_stays_below_tunguska_class() {
    let result = compute_impact(&impactor(0.02, 19.0));

    assert!(
        result.energy.megatons_tnt < 10.0,
        "energy = {} MT",
        result.energy.megatons_tnt
    );
    assert_ne!(result.classification, "Tunguska-class");
    assert_ne!(result.classification, "Regional devastation");
    assert_ne!(result.classification, "Chicxulub-class (extinction)");
}

#[test]
fn classification_thresholds_are_verbatim() {
    assert_eq!(classification(0.014), "Meteorite (harmless)");
    assert_eq!(classification(0.015), "Hiroshima-class");
    assert_eq!(classification(0.49), "Hiroshima-class");
    assert_eq!(classification(0.5), "Tunguska-class");
    assert_eq!(classification(9.99), "Tunguska-class");
    assert_eq!(classification(10.0), "Regional devastation");
    assert_eq!(classification(999_999.0), "Regional devastation");
    assert_eq!(classification(1_000_000.0), "Chicxulub-class (extinction)");
}

#[test]
fn severity_grades_follow_their_thresholds() {
    assert_eq!(severity(0.05), Severity::Minor);
    assert_eq!(severity(5.0), Severity::Moderate);
    assert_eq!(severity(500.0), Severity::Severe);
    assert_eq!(severity(500_000.0), Severity::Catastrophic);
    assert_eq!(severity(2_000_000.0), Severity::Extinction);
    assert!(Severity::Minor < Severity::Extinction);
}

#[test]
fn zero_sized_or_stationary_impactors_produce_zero_results() {
    for degenerate in [impactor(0.0, 20.0), impactor(1.0, 0.0)] {
        let result = compute_impact(&degenerate);
        assert_eq!(result.energy.joules, 0.0);
        assert_eq!(result.energy.megatons_tnt, 0.0);
        assert_eq!(result.crater.diameter_km, 0.0);
        assert_eq!(result.crater.depth_km, 0.0);
        assert_eq!(result.damage.airblast_km, 0.0);
        assert_eq!(result.damage.seismic_magnitude, None);
        assert_eq!(result.classification, "Meteorite (harmless)");
        assert_eq!(result.severity, Severity::Minor);
    }
}

#[test]
fn grazing_impacts_shrink_the_crater() {
    let energy_mt = 100.0;
    let steep = crater(energy_mt, 90.0);
    let shallow = crater(energy_mt, 30.0);
    assert!(shallow.diameter_km < steep.diameter_km);
    assert_relative_eq!(
        shallow.diameter_km,
        steep.diameter_km * 0.5,
        max_relative = 1e-9
    );
}

#[test]
fn damage_radii_follow_the_scaling_laws() {
    let radii = damage(1.0);
    assert_relative_eq!(radii.airblast_km, 2.2, max_relative = 1e-12);
    assert_relative_eq!(radii.thermal_km, 3.5, max_relative = 1e-12);
    let magnitude = radii.seismic_magnitude.expect("non-zero energy");
    assert_relative_eq!(magnitude, 3.87, max_relative = 1e-12);

    let larger = damage(1_000.0);
    let magnitude = larger.seismic_magnitude.expect("non-zero energy");
    assert_relative_eq!(magnitude, 0.67 * 3.0 + 3.87, max_relative = 1e-9);
}

#[test]
fn tsunami_height_scales_with_energy_and_depth() {
    assert_relative_eq!(tsunami_height_m(100.0, 4_000.0), 1.0, max_relative = 1e-12);
    assert!(tsunami_height_m(100.0, 8_000.0) > tsunami_height_m(100.0, 2_000.0));
    assert_eq!(tsunami_height_m(0.0, 4_000.0), 0.0);
}

#[test]
fn energy_conversion_uses_the_tnt_constant() {
    let joules = kinetic_energy_j(1.0e12, 20.0);
    assert_relative_eq!(joules, 0.5 * 1.0e12 * 2.0e4 * 2.0e4, max_relative = 1e-12);
    assert_relative_eq!(megatons_tnt(4.184e15), 1.0, max_relative = 1e-12);
}

#[test]
fn results_are_bit_identical_across_calls() {
    let a = compute_impact(&impactor(3.3, 17.2));
    let b = compute_impact(&impactor(3.3, 17.2));
    assert_eq!(a, b);
}
