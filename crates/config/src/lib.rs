//! Configuration models and loaders for the Impact Calculator.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Keplerian elements as they appear in catalog files. Angles in degrees,
/// distances in AU.
#[derive(Debug, Deserialize, Clone)]
pub struct ElementsConfig {
    pub semi_major_axis_au: f64,
    pub eccentricity: f64,
    pub inclination_deg: f64,
    pub ascending_node_deg: f64,
    pub arg_perihelion_deg: f64,
    pub mean_anomaly_deg: f64,
    #[serde(default)]
    pub period_years: Option<f64>,
}

/// Optional secular drift rates, per Julian century from J2000.0.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct SecularRatesConfig {
    #[serde(default)]
    pub semi_major_axis_au_per_cy: Option<f64>,
    #[serde(default)]
    pub eccentricity_per_cy: Option<f64>,
    #[serde(default)]
    pub inclination_deg_per_cy: Option<f64>,
    #[serde(default)]
    pub lon_perihelion_deg_per_cy: Option<f64>,
    #[serde(default)]
    pub ascending_node_deg_per_cy: Option<f64>,
}

/// Body categories recognized in catalogs.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum BodyClassConfig {
    Planet,
    Asteroid,
    Comet,
    DwarfPlanet,
    TransNeptunian,
    #[serde(other)]
    Unsupported,
}

/// Bulk composition as written in catalogs.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CompositionConfig {
    Rocky,
    Icy,
    Metallic,
    Carbonaceous,
}

/// A catalog body: a planet or other major object with known elements and
/// physical properties.
#[derive(Debug, Deserialize, Clone)]
pub struct BodyConfig {
    pub name: String,
    pub class: BodyClassConfig,
    pub radius_km: f64,
    pub mass_kg: f64,
    #[serde(default)]
    pub composition: Option<CompositionConfig>,
    pub elements: ElementsConfig,
    #[serde(default)]
    pub secular_rates: Option<SecularRatesConfig>,
}

/// An impactor scenario: physical bulk properties plus the orbit it rides.
#[derive(Debug, Deserialize, Clone)]
pub struct AsteroidConfig {
    pub name: String,
    pub diameter_km: f64,
    /// Impact velocity override, km/s. Derived from vis-viva when absent.
    #[serde(default)]
    pub velocity_km_s: Option<f64>,
    /// Bulk density override, kg/m³. Falls back to the composition table.
    #[serde(default)]
    pub density_kg_m3: Option<f64>,
    /// Impact angle from horizontal, degrees. Defaults to 45.
    #[serde(default)]
    pub angle_deg: Option<f64>,
    #[serde(default)]
    pub composition: Option<CompositionConfig>,
    pub elements: ElementsConfig,
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Load body configurations from a YAML file, TOML file, or directory of
/// TOML files.
pub fn load_bodies<P: AsRef<Path>>(path: P) -> Result<Vec<BodyConfig>, ConfigError> {
    load_records(path)
}

/// Load asteroid scenario configurations.
pub fn load_asteroids<P: AsRef<Path>>(path: P) -> Result<Vec<AsteroidConfig>, ConfigError> {
    load_records(path)
}

fn load_records<T, P>(path: P) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_records(path)
    } else if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().map(|ext| ext == "toml").unwrap_or(false))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}
