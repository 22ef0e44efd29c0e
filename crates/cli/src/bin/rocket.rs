use std::io;
use std::path::{Path, PathBuf};

use clap::Parser;
use oni_cli::{RocketArgs, write_summary};
use oni_rocket_calculator::export::metrics::MetricsReport;
use oni_rocket_calculator::export::writer_for_path;
use oni_rocket_calculator::{FuelRange, compute_metrics, sweep_distance};

/// Compute mass, storage tanks, and viable distance for one rocket.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "ONI base-game rocket calculator (mass, tanks, viable distance)"
)]
struct Cli {
    #[command(flatten)]
    rocket: RocketArgs,

    /// Write a JSON report to this path (use '-' for stdout)
    #[arg(long)]
    json: Option<PathBuf>,

    /// Include the default 100-5,000 kg distance sweep in the JSON report
    #[arg(long, default_value_t = false)]
    with_sweep: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let resolved = cli.rocket.resolve()?;
    let config = &resolved.configuration;
    let metrics = compute_metrics(config)?;

    let stdout = io::stdout();
    write_summary(&mut stdout.lock(), resolved.name.as_deref(), config, &metrics)?;

    if let Some(path) = &cli.json {
        let sweep = if cli.with_sweep {
            sweep_distance(
                config.fuel_type,
                config.oxidizer_type,
                &config.components,
                FuelRange::default(),
            )?
        } else {
            Vec::new()
        };
        let report = MetricsReport::new(config, &metrics)
            .with_name(resolved.name.as_deref())
            .with_sweep(&sweep);
        let mut writer = writer_for_path(path)?;
        report.write_to(&mut *writer)?;
        if path != Path::new("-") {
            eprintln!("Wrote report to {}", path.display());
        }
    }

    Ok(())
}
