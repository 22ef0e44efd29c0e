//! Rocket manifests and form-input parsing for the ONI Rocket Calculator.

use std::collections::BTreeMap;
use std::fs::File;
use std::path::{Path, PathBuf};

use oni_core::{ComponentKind, FuelType, OxidizerType};
use oni_propulsion::{CalcError, RocketConfiguration};
use serde::Deserialize;
use thiserror::Error;

/// Rocket definition as written in YAML or TOML manifests.
///
/// Keys stay as strings here so that a typo surfaces as a typed
/// [`CalcError`] rather than a generic parse failure.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RocketManifest {
    #[serde(default)]
    pub name: Option<String>,
    pub fuel: String,
    pub oxidizer: String,
    pub fuel_mass_kg: f64,
    #[serde(default)]
    pub components: BTreeMap<String, i64>,
}

impl RocketManifest {
    /// Resolve keys and quantities into a calculator input.
    pub fn to_configuration(&self) -> Result<RocketConfiguration, CalcError> {
        let fuel_type: FuelType = self.fuel.parse()?;
        let oxidizer_type: OxidizerType = self.oxidizer.parse()?;
        if !self.fuel_mass_kg.is_finite() || self.fuel_mass_kg < 0.0 {
            return Err(CalcError::InvalidQuantity {
                field: "fuel mass".to_string(),
                value: self.fuel_mass_kg,
            });
        }

        // aliases such as `cargo_bay` and `cargo-bay` add up
        let mut configuration = RocketConfiguration::new(fuel_type, oxidizer_type, self.fuel_mass_kg);
        for (key, quantity) in &self.components {
            let kind: ComponentKind = key.parse()?;
            let quantity = u32::try_from(*quantity).map_err(|_| CalcError::InvalidQuantity {
                field: format!("{key} quantity"),
                value: *quantity as f64,
            })?;
            configuration.add_component(kind, quantity)?;
        }
        Ok(configuration)
    }
}

/// Errors that can occur while loading manifests or parsing input.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read manifest: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse {}: {source}", .path.display())]
    Manifest {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error(transparent)]
    Calc(#[from] CalcError),
    #[error("expected KEY=COUNT, got '{0}'")]
    InvalidAssignment(String),
    #[error("rocket '{0}' not found in manifest")]
    NotFound(String),
    #[error("manifest contains no rockets")]
    EmptyManifest,
}

/// Load rocket manifests from a YAML list, a single TOML file, or a directory of TOML files.
pub fn load_rockets<P: AsRef<Path>>(path: P) -> Result<Vec<RocketManifest>, ConfigError> {
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_manifests(path)
    } else if is_toml(path) {
        Ok(vec![read_toml_manifest(path)?])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn is_toml(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "toml")
}

fn read_toml_manifest(path: &Path) -> Result<RocketManifest, ConfigError> {
    let contents = std::fs::read_to_string(path)?;
    toml::from_str(&contents).map_err(|source| ConfigError::Manifest {
        path: path.to_path_buf(),
        source,
    })
}

/// One rocket per `.toml` file, in file-name order.
fn read_dir_manifests(dir: &Path) -> Result<Vec<RocketManifest>, ConfigError> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| is_toml(path))
        .collect();
    files.sort();
    files.iter().map(|path| read_toml_manifest(path)).collect()
}

/// Pick a rocket by name (case-insensitive), defaulting to the first entry.
pub fn select_rocket<'a>(
    manifests: &'a [RocketManifest],
    requested: Option<&str>,
) -> Result<&'a RocketManifest, ConfigError> {
    let first = manifests.first().ok_or(ConfigError::EmptyManifest)?;
    let Some(name) = requested else {
        return Ok(first);
    };
    let upper = name.to_uppercase();
    manifests
        .iter()
        .find(|m| m.name.as_deref().map(str::to_uppercase).as_deref() == Some(upper.as_str()))
        .ok_or_else(|| ConfigError::NotFound(name.to_string()))
}

/// Fuel mass typed into a form field. Blank or unreadable input counts as 0 kg.
pub fn parse_fuel_mass(input: &str) -> Result<f64, CalcError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    let Ok(value) = trimmed.parse::<f64>() else {
        return Ok(0.0);
    };
    if !value.is_finite() || value < 0.0 {
        return Err(CalcError::InvalidQuantity {
            field: "fuel mass".to_string(),
            value,
        });
    }
    Ok(value)
}

/// Module count typed into a form field. Blank or unreadable input counts as 0.
pub fn parse_component_count(input: &str) -> Result<u32, CalcError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    let Ok(value) = trimmed.parse::<i64>() else {
        return Ok(0);
    };
    u32::try_from(value).map_err(|_| CalcError::InvalidQuantity {
        field: "component quantity".to_string(),
        value: value as f64,
    })
}

/// Parse a `cargo_bay=2` style assignment.
pub fn parse_component_assignment(input: &str) -> Result<(ComponentKind, u32), ConfigError> {
    let (key, count) = input
        .split_once('=')
        .ok_or_else(|| ConfigError::InvalidAssignment(input.to_string()))?;
    let kind: ComponentKind = key.parse().map_err(CalcError::from)?;
    let quantity = parse_component_count(count)?;
    Ok((kind, quantity))
}
