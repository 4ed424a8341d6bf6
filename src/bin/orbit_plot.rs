use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use clap::Parser;
use csv::ReaderBuilder;
use plotters::prelude::*;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Render an ecliptic-plane orbit plot from an orbit_track CSV"
)]
struct Cli {
    /// Input CSV produced by the orbit_track exporter
    #[arg(long)]
    input: String,

    #[arg(long, default_value = "artifacts/orbits.png")]
    output: PathBuf,

    #[arg(long, default_value_t = 1000)]
    width: u32,

    #[arg(long, default_value_t = 1000)]
    height: u32,
}

const SERIES_COLORS: [RGBColor; 8] = [
    RGBColor(140, 120, 83),
    RGBColor(255, 198, 73),
    RGBColor(74, 144, 226),
    RGBColor(226, 123, 88),
    RGBColor(200, 139, 58),
    RGBColor(250, 213, 165),
    RGBColor(79, 208, 231),
    RGBColor(65, 102, 245),
];

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let tracks = read_tracks(&cli.input)?;
    if tracks.is_empty() {
        return Err(anyhow::anyhow!("No track points in the provided CSV"));
    }

    if let Some(parent) = cli.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let output_str = cli
        .output
        .to_str()
        .ok_or_else(|| anyhow::anyhow!("Output path contains invalid UTF-8"))?;

    let extent = tracks
        .values()
        .flatten()
        .map(|&(x, y)| x.abs().max(y.abs()))
        .fold(0.0_f64, f64::max)
        .max(0.1)
        * 1.1;

    let root = BitMapBackend::new(output_str, (cli.width, cli.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Heliocentric orbit tracks (ecliptic plane)", ("sans-serif", 24))
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(-extent..extent, -extent..extent)?;

    chart
        .configure_mesh()
        .x_desc("x (AU)")
        .y_desc("y (AU)")
        .x_labels(8)
        .y_labels(8)
        .draw()?;

    for (idx, (body, points)) in tracks.iter().enumerate() {
        let color = SERIES_COLORS[idx % SERIES_COLORS.len()];
        chart
            .draw_series(LineSeries::new(points.iter().copied(), color.stroke_width(2)))?
            .label(body.clone())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 18, y)], color.stroke_width(2))
            });
    }

    // Sun at the origin.
    chart.draw_series(std::iter::once(Circle::new(
        (0.0, 0.0),
        6,
        RGBColor(255, 200, 0).filled(),
    )))?;

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()?;

    root.present()?;
    println!("[saved] {}", cli.output.display());
    Ok(())
}

fn read_tracks(path: &str) -> anyhow::Result<BTreeMap<String, Vec<(f64, f64)>>> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let headers = reader.headers()?.clone();
    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| anyhow::anyhow!("CSV is missing the '{name}' column"))
    };
    let body_idx = column("body")?;
    let x_idx = column("x_au")?;
    let y_idx = column("y_au")?;

    let mut tracks: BTreeMap<String, Vec<(f64, f64)>> = BTreeMap::new();
    for record in reader.records() {
        let record = record?;
        let body = record
            .get(body_idx)
            .ok_or_else(|| anyhow::anyhow!("short CSV record"))?;
        let x: f64 = record
            .get(x_idx)
            .ok_or_else(|| anyhow::anyhow!("short CSV record"))?
            .parse()?;
        let y: f64 = record
            .get(y_idx)
            .ok_or_else(|| anyhow::anyhow!("short CSV record"))?
            .parse()?;
        tracks.entry(body.to_string()).or_default().push((x, y));
    }

    Ok(tracks)
}
