use std::path::PathBuf;

use clap::Parser;
use oni_cli::RocketArgs;
use oni_rocket_calculator::export::{sweep as export_sweep, writer_for_path};
use oni_rocket_calculator::format::{kg, km};
use oni_rocket_calculator::propulsion::max_distance;
use oni_rocket_calculator::{FuelRange, sweep_distance};

/// Sample viable distance across a range of fuel loads and write it as CSV.
#[derive(Parser, Debug)]
#[command(author, version, about = "Fuel vs. viable distance sweep (CSV)")]
struct Cli {
    #[command(flatten)]
    rocket: RocketArgs,

    /// First fuel mass in kg
    #[arg(long, default_value_t = 100.0)]
    start: f64,

    /// Last fuel mass in kg (inclusive)
    #[arg(long, default_value_t = 5_000.0)]
    end: f64,

    /// Fuel mass step in kg
    #[arg(long, default_value_t = 100.0)]
    step: f64,

    /// Output CSV file (use '-' for stdout)
    #[arg(long, default_value = "artifacts/sweep.csv")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let resolved = cli.rocket.resolve()?;
    let config = &resolved.configuration;
    let range = FuelRange::new(cli.start, cli.end, cli.step)?;

    let points = sweep_distance(
        config.fuel_type,
        config.oxidizer_type,
        &config.components,
        range,
    )?;

    let mut writer = writer_for_path(&cli.output)?;
    export_sweep::write_all(&mut *writer, &points)?;

    match max_distance(&points) {
        Some(best) if best.distance_km > 0.0 => eprintln!(
            "{} samples; best distance {} at {} of fuel",
            points.len(),
            km(best.distance_km),
            kg(best.fuel_mass_kg)
        ),
        _ => eprintln!(
            "warning: rocket cannot fly anywhere in {}..={} kg",
            range.start(),
            range.end()
        ),
    }

    Ok(())
}
