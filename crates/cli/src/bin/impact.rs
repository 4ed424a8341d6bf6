use std::path::PathBuf;

use clap::Parser;

use impact_calculator::analysis::{AssessmentConfig, assess_impact};
use impact_calculator::encounter::DEFAULT_SAMPLES;
use impact_calculator::export::{report, track::writer_for_path};
use impact_calculator::scenario::{self, load_asteroids, load_bodies};

#[derive(Parser)]
#[command(author, version, about = "Assess an asteroid scenario against a reference orbit")]
struct Cli {
    /// Body catalog (YAML file or directory of TOML files)
    #[arg(long, default_value = "data/bodies/planets.yaml")]
    bodies: String,

    /// Asteroid scenario catalog
    #[arg(long, default_value = "data/bodies/asteroids.yaml")]
    asteroids: String,

    /// Asteroid scenario name (case-insensitive)
    #[arg(long)]
    asteroid: String,

    /// Reference body for the close-approach sweep
    #[arg(long, default_value = "Earth")]
    reference: String,

    /// Mean-anomaly samples for the separation sweep
    #[arg(long, default_value_t = DEFAULT_SAMPLES)]
    samples: usize,

    /// Write the full analysis as JSON to this path (`-` for stdout)
    #[arg(long)]
    json: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let bodies = load_bodies(&cli.bodies)?;
    let asteroids = load_asteroids(&cli.asteroids)?;

    let reference = scenario::find_body(&bodies, &cli.reference)?;
    let asteroid = scenario::find_asteroid(&asteroids, &cli.asteroid)?;

    let elements = scenario::orbital_elements(&asteroid.elements);
    let reference_elements = scenario::orbital_elements(&reference.elements);
    let body = scenario::asteroid_body(asteroid);
    let impactor = scenario::impactor(asteroid);

    let config = AssessmentConfig {
        samples: cli.samples,
        velocity_km_s: Some(impactor.velocity_km_s),
        angle_deg: impactor.angle_deg,
    };

    let analysis = assess_impact(&asteroid.name, &body, &elements, &reference_elements, &config)?;

    println!("=== Impact Assessment: {} ===", analysis.body);
    println!(
        "Closest approach : {:.0} km ({:.6} AU, {:.2} Earth radii)",
        analysis.close_approach.distance_km,
        analysis.close_approach.distance_au,
        analysis.close_approach.distance_earth_radii
    );
    println!(
        "Impact risk      : {} ({:.1}% probability)",
        analysis.close_approach.risk, analysis.close_approach.probability_percent
    );
    println!(
        "Impact velocity  : {:.2} km/s (mass {:.3e} kg)",
        analysis.impact_velocity_km_s, body.mass_kg
    );
    println!(
        "Kinetic energy   : {:.3e} J ({:.3} MT TNT)",
        analysis.energy.joules, analysis.energy.megatons_tnt
    );
    println!(
        "Crater           : {:.2} km wide, {:.2} km deep, ejecta to {:.2} km",
        analysis.crater.diameter_km, analysis.crater.depth_km, analysis.crater.ejecta_radius_km
    );
    match analysis.damage.seismic_magnitude {
        Some(magnitude) => println!(
            "Damage           : airblast {:.1} km, thermal {:.1} km, seismic M{:.1}",
            analysis.damage.airblast_km, analysis.damage.thermal_km, magnitude
        ),
        None => println!(
            "Damage           : airblast {:.1} km, thermal {:.1} km",
            analysis.damage.airblast_km, analysis.damage.thermal_km
        ),
    }
    println!("Classification   : {}", analysis.classification);
    println!("Comparison       : {}", analysis.comparison);
    println!("Severity         : {}", analysis.severity);
    println!("Estimate         : {}", analysis.estimated_damage);

    if let Some(path) = &cli.json {
        let mut writer = writer_for_path(path)?;
        report::write_json(&mut writer, &analysis)?;
    }

    Ok(())
}
