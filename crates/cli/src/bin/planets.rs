use clap::Parser;

use impact_calculator::ephemeris::epoch;
use impact_calculator::ephemeris::{PLANETS, orbital_elements_at};
use impact_calculator::orbits::propagate;

#[derive(Parser)]
#[command(author, version, about = "Heliocentric planet positions from mean elements")]
struct Cli {
    /// Calendar date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    date: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let moment = match &cli.date {
        Some(text) => epoch::parse_date(text)?,
        None => epoch::now(),
    };

    println!("=== Planet Positions ===");
    println!("Epoch          : JD {:.5}", epoch::julian_day(moment));
    println!(
        "{:<10} {:>12} {:>12} {:>12} {:>10}",
        "Body", "x (AU)", "y (AU)", "z (AU)", "r (AU)"
    );

    for record in &PLANETS {
        let (elements, warnings) = orbital_elements_at(record, moment);
        for warning in &warnings {
            eprintln!("[warn] {}: {warning}", record.name);
        }

        let state = propagate(&elements, 0.0)?;
        if !state.solver.converged {
            eprintln!(
                "[warn] {}: Kepler solver did not converge (residual {:.3e} rad)",
                record.name, state.solver.residual_rad
            );
        }

        println!(
            "{:<10} {:>12.6} {:>12.6} {:>12.6} {:>10.4}",
            record.name,
            state.position_au[0],
            state.position_au[1],
            state.position_au[2],
            state.radius_au
        );
    }

    Ok(())
}
