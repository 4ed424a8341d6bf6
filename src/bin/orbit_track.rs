use std::io::Write;
use std::path::PathBuf;

use clap::Parser;

use impact_calculator::export::track::{Record, write_header, writer_for_path};
use impact_calculator::scenario::{self, load_bodies};
use impact_calculator::track::sample_period;

#[derive(Parser, Debug)]
#[command(author, version, about = "Export sampled heliocentric orbit tracks as CSV")]
struct Cli {
    /// Body catalog (YAML file or directory of TOML files)
    #[arg(long, default_value = "data/bodies/planets.yaml")]
    bodies: String,

    /// Bodies to sample (repeatable); defaults to the whole catalog
    #[arg(long)]
    body: Vec<String>,

    /// Samples per orbital period
    #[arg(long, default_value_t = 360)]
    samples: usize,

    /// Output path (`-` for stdout)
    #[arg(long, default_value = "-")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let catalog = load_bodies(&cli.bodies)?;

    let selected: Vec<_> = if cli.body.is_empty() {
        catalog.iter().collect()
    } else {
        cli.body
            .iter()
            .map(|name| scenario::find_body(&catalog, name))
            .collect::<Result<_, _>>()?
    };

    let mut writer = writer_for_path(&cli.output)?;
    write_header(writer.as_mut())?;

    for body in selected {
        let elements = scenario::orbital_elements(&body.elements);
        for point in sample_period(&elements, cli.samples)? {
            Record {
                body: &body.name,
                sample: point.sample,
                t_seconds: point.t_seconds,
                x_au: point.position_au[0],
                y_au: point.position_au[1],
                z_au: point.position_au[2],
            }
            .write_to(writer.as_mut())?;
        }
    }

    writer.flush()?;
    Ok(())
}
