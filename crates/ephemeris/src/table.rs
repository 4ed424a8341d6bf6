//! J2000.0 mean orbital elements for the major planets.
//!
//! Values are the JPL Keplerian elements at epoch J2000.0. Mercury also
//! carries the published secular rates (per Julian century); bodies without
//! a published rate are held constant by the adjuster.

/// Linear element drift per Julian century from J2000.0.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SecularRates {
    pub semi_major_axis_au_per_cy: Option<f64>,
    pub eccentricity_per_cy: Option<f64>,
    pub inclination_deg_per_cy: Option<f64>,
    pub lon_perihelion_deg_per_cy: Option<f64>,
    pub ascending_node_deg_per_cy: Option<f64>,
}

impl SecularRates {
    const NONE: Self = Self {
        semi_major_axis_au_per_cy: None,
        eccentricity_per_cy: None,
        inclination_deg_per_cy: None,
        lon_perihelion_deg_per_cy: None,
        ascending_node_deg_per_cy: None,
    };
}

/// Mean elements of one planet at the J2000.0 epoch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetRecord {
    pub name: &'static str,
    pub semi_major_axis_au: f64,
    pub eccentricity: f64,
    pub inclination_deg: f64,
    /// Sidereal period in days.
    pub period_days: f64,
    /// Longitude of perihelion ϖ = Ω + ω.
    pub lon_perihelion_deg: f64,
    pub ascending_node_deg: f64,
    /// Mean longitude L at epoch.
    pub mean_longitude_deg: f64,
    pub rates: SecularRates,
}

/// The eight major planets, Mercury through Neptune.
pub const PLANETS: [PlanetRecord; 8] = [
    PlanetRecord {
        name: "Mercury",
        semi_major_axis_au: 0.387_099_27,
        eccentricity: 0.205_635_93,
        inclination_deg: 7.004_979_02,
        period_days: 87.9691,
        lon_perihelion_deg: 77.457_796_28,
        ascending_node_deg: 48.330_765_93,
        mean_longitude_deg: 252.250_323_50,
        rates: SecularRates {
            semi_major_axis_au_per_cy: Some(0.000_000_37),
            eccentricity_per_cy: Some(0.000_019_06),
            inclination_deg_per_cy: Some(-0.005_947_49),
            lon_perihelion_deg_per_cy: Some(0.160_476_89),
            ascending_node_deg_per_cy: Some(-0.125_340_81),
        },
    },
    PlanetRecord {
        name: "Venus",
        semi_major_axis_au: 0.723_335_66,
        eccentricity: 0.006_776_72,
        inclination_deg: 3.394_676_05,
        period_days: 224.701,
        lon_perihelion_deg: 131.602_467_18,
        ascending_node_deg: 76.679_842_55,
        mean_longitude_deg: 181.979_099_50,
        rates: SecularRates::NONE,
    },
    PlanetRecord {
        name: "Earth",
        semi_major_axis_au: 1.000_002_61,
        eccentricity: 0.016_711_23,
        inclination_deg: -0.000_015_31,
        period_days: 365.256,
        lon_perihelion_deg: 102.937_681_93,
        ascending_node_deg: 0.0,
        mean_longitude_deg: 100.464_571_66,
        rates: SecularRates::NONE,
    },
    PlanetRecord {
        name: "Mars",
        semi_major_axis_au: 1.523_710_34,
        eccentricity: 0.093_394_10,
        inclination_deg: 1.849_691_42,
        period_days: 686.980,
        lon_perihelion_deg: -23.943_629_59,
        ascending_node_deg: 49.559_538_91,
        mean_longitude_deg: -4.553_432_05,
        rates: SecularRates::NONE,
    },
    PlanetRecord {
        name: "Jupiter",
        semi_major_axis_au: 5.202_887_00,
        eccentricity: 0.048_386_24,
        inclination_deg: 1.304_396_95,
        period_days: 4_332.589,
        lon_perihelion_deg: 14.728_479_83,
        ascending_node_deg: 100.473_909_09,
        mean_longitude_deg: 34.396_440_51,
        rates: SecularRates::NONE,
    },
    PlanetRecord {
        name: "Saturn",
        semi_major_axis_au: 9.536_675_94,
        eccentricity: 0.053_861_79,
        inclination_deg: 2.485_991_87,
        period_days: 10_759.22,
        lon_perihelion_deg: 92.598_878_31,
        ascending_node_deg: 113.662_424_48,
        mean_longitude_deg: 49.954_244_23,
        rates: SecularRates::NONE,
    },
    PlanetRecord {
        name: "Uranus",
        semi_major_axis_au: 19.189_164_64,
        eccentricity: 0.047_257_44,
        inclination_deg: 0.772_637_83,
        period_days: 30_688.5,
        lon_perihelion_deg: 170.954_276_30,
        ascending_node_deg: 74.016_925_03,
        mean_longitude_deg: 313.238_104_51,
        rates: SecularRates::NONE,
    },
    PlanetRecord {
        name: "Neptune",
        semi_major_axis_au: 30.069_922_76,
        eccentricity: 0.008_590_48,
        inclination_deg: 1.770_043_47,
        period_days: 60_182.0,
        lon_perihelion_deg: 44.964_762_27,
        ascending_node_deg: 131.784_225_74,
        mean_longitude_deg: -55.120_029_69,
        rates: SecularRates::NONE,
    },
];

/// Look up a planet record by name, case-insensitively.
pub fn planet(name: &str) -> Option<&'static PlanetRecord> {
    PLANETS
        .iter()
        .find(|record| record.name.eq_ignore_ascii_case(name))
}
