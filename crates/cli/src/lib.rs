//! Argument handling and text output shared by the `rocket` and `sweep` binaries.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Args;
use oni_rocket_calculator::config::{
    ConfigError, load_rockets, parse_component_assignment, parse_fuel_mass, select_rocket,
};
use oni_rocket_calculator::format::{kg, km};
use oni_rocket_calculator::{
    CalcError, ComponentKind, FuelType, OxidizerType, RocketConfiguration, RocketMetrics,
};

/// Rocket definition taken either from a manifest or from individual flags.
#[derive(Args, Debug, Clone)]
pub struct RocketArgs {
    /// Rocket manifest (YAML list, TOML file, or directory of TOML files); overrides the flags below
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Rocket name within the manifest (case-insensitive, defaults to the first entry)
    #[arg(long, requires = "config")]
    pub name: Option<String>,

    /// Fuel type (steam, petroleum, liquid_hydrogen)
    #[arg(long, default_value = "petroleum")]
    pub fuel: String,

    /// Oxidizer type (oxylite, liquid_oxygen)
    #[arg(long, default_value = "oxylite")]
    pub oxidizer: String,

    /// Fuel mass in kg; blank or unreadable input counts as 0
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub fuel_mass: String,

    /// Module count as KEY=COUNT, repeatable (e.g. cargo_bay=2)
    #[arg(long = "component", value_name = "KEY=COUNT")]
    pub components: Vec<String>,
}

/// A configuration ready for the calculator, with its manifest name if any.
#[derive(Debug, Clone)]
pub struct ResolvedRocket {
    pub name: Option<String>,
    pub configuration: RocketConfiguration,
}

impl RocketArgs {
    pub fn resolve(&self) -> Result<ResolvedRocket, ConfigError> {
        if let Some(path) = &self.config {
            let manifests = load_rockets(path)?;
            let manifest = select_rocket(&manifests, self.name.as_deref())?;
            return Ok(ResolvedRocket {
                name: manifest.name.clone(),
                configuration: manifest.to_configuration()?,
            });
        }

        let fuel: FuelType = self.fuel.parse().map_err(CalcError::from)?;
        let oxidizer: OxidizerType = self.oxidizer.parse().map_err(CalcError::from)?;
        let mut configuration =
            RocketConfiguration::new(fuel, oxidizer, parse_fuel_mass(&self.fuel_mass)?);
        for assignment in &self.components {
            let (kind, quantity) = parse_component_assignment(assignment)?;
            configuration.add_component(kind, quantity)?;
        }
        Ok(ResolvedRocket {
            name: None,
            configuration,
        })
    }
}

/// Human-readable summary with the weight breakdown and verdict.
pub fn write_summary(
    out: &mut dyn Write,
    name: Option<&str>,
    config: &RocketConfiguration,
    metrics: &RocketMetrics,
) -> io::Result<()> {
    let b = &metrics.breakdown;
    writeln!(out, "=== Rocket Summary ===")?;
    if let Some(name) = name {
        writeln!(out, "{:<22}: {}", "Rocket", name)?;
    }
    writeln!(out, "{:<22}: {}", "Engine / fuel", config.fuel_type.label())?;
    writeln!(out, "{:<22}: {}", "Oxidizer", config.oxidizer_type.label())?;
    writeln!(out, "{:<22}: {}", "Fuel mass", kg(config.fuel_mass_kg))?;
    writeln!(out, "--- Weight breakdown ---")?;
    writeln!(out, "{:<22}: {}", "Fuel + Oxidizer", kg(b.fuel_and_oxidizer_kg))?;
    writeln!(
        out,
        "{:<22}: {}",
        format!("Fuel Tanks ({})", b.fuel_tanks),
        kg(b.fuel_tank_weight_kg)
    )?;
    writeln!(
        out,
        "{:<22}: {}",
        format!("Oxidizer Tanks ({})", b.oxidizer_tanks),
        kg(b.oxidizer_tank_weight_kg)
    )?;
    writeln!(out, "{:<22}: {}", "Engine", kg(b.engine_kg))?;
    writeln!(out, "{:<22}: {}", "Command Capsule", kg(b.command_capsule_kg))?;
    writeln!(out, "{:<22}: {}", "Components", kg(b.components_kg))?;
    for kind in ComponentKind::ALL {
        let quantity = config.quantity(kind);
        if quantity > 0 {
            writeln!(
                out,
                "{:<22}: {}",
                format!("  {} x{}", kind.label(), quantity),
                kg(kind.weight_kg() * f64::from(quantity))
            )?;
        }
    }
    writeln!(out, "{:<22}: {}", "Total", kg(metrics.total_weight_kg))?;
    writeln!(out, "--- Performance ---")?;
    writeln!(out, "{:<22}: {}", "Weight penalty", km(metrics.weight_penalty))?;
    if metrics.is_viable() {
        writeln!(out, "{:<22}: {}", "Viable distance", km(metrics.viable_distance_km))?;
    } else {
        writeln!(
            out,
            "{:<22}: too heavy to fly ({})",
            "Viable distance",
            km(metrics.viable_distance_km)
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use oni_rocket_calculator::compute_metrics;

    fn args(fuel_mass: &str, components: &[&str]) -> RocketArgs {
        RocketArgs {
            config: None,
            name: None,
            fuel: "petroleum".to_string(),
            oxidizer: "oxylite".to_string(),
            fuel_mass: fuel_mass.to_string(),
            components: components.iter().map(|c| c.to_string()).collect(),
        }
    }

    fn summary(name: Option<&str>, config: &RocketConfiguration, metrics: &RocketMetrics) -> String {
        let mut buf = Vec::new();
        write_summary(&mut buf, name, config, metrics).expect("write summary");
        String::from_utf8(buf).expect("utf8")
    }

    #[test]
    fn flags_resolve_and_accumulate_components() {
        let resolved = args("450", &["cargo_bay=1", "cargo-bay=2", "sightseeing=1"])
            .resolve()
            .expect("resolve");
        let config = resolved.configuration;
        assert_eq!(config.fuel_mass_kg, 450.0);
        assert_eq!(config.quantity(ComponentKind::CargoBay), 3);
        assert_eq!(config.quantity(ComponentKind::Sightseeing), 1);
        assert_eq!(config.quantity(ComponentKind::ResearchStation), 0);
    }

    #[test]
    fn repeated_component_flags_reject_overflowing_counts() {
        let result = args("100", &["cargo_bay=4000000000", "cargo-bay=4000000000"]).resolve();
        assert!(matches!(
            result,
            Err(ConfigError::Calc(CalcError::InvalidQuantity { .. }))
        ));
    }

    #[test]
    fn blank_fuel_mass_is_zero() {
        let resolved = args("  ", &[]).resolve().expect("resolve");
        assert_eq!(resolved.configuration.fuel_mass_kg, 0.0);
    }

    #[test]
    fn summary_reports_viable_distance_with_separators() {
        let config = args("100", &[]).resolve().unwrap().configuration;
        let metrics = compute_metrics(&config).unwrap();
        let text = summary(Some("Scout"), &config, &metrics);
        assert!(text.contains("Scout"));
        assert!(text.contains("Total                 : 800 kg"), "{text}");
        assert!(text.contains("Viable distance       : 3,200 km"), "{text}");
    }

    #[test]
    fn summary_flags_grounded_rockets() {
        let config = args("0", &["cargo_bay=1"]).resolve().unwrap().configuration;
        let metrics = compute_metrics(&config).unwrap();
        let text = summary(None, &config, &metrics);
        assert!(text.contains("too heavy to fly"), "{text}");
        assert!(text.contains("Cargo Bay x1"), "{text}");
    }
}
