use std::path::PathBuf;

use clap::Parser;
use oni_rocket_calculator::chart::{ChartOptions, read_sweep_csv, render_distance_chart};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Render a fuel vs. viable distance line chart from a sweep CSV"
)]
struct Cli {
    #[arg(long)]
    input: PathBuf,
    #[arg(long, default_value = "artifacts/distance.png")]
    output: PathBuf,
    /// Fuel mass (kg) to mark with a dashed "Current Fuel" line
    #[arg(long)]
    current_fuel: Option<f64>,
    #[arg(long, default_value_t = 800)]
    width: u32,
    #[arg(long, default_value_t = 400)]
    height: u32,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let points = read_sweep_csv(&cli.input)?;
    if points.is_empty() {
        return Err(anyhow::anyhow!(
            "No usable rows in {}",
            cli.input.display()
        ));
    }

    let options = ChartOptions {
        width: cli.width,
        height: cli.height,
        current_fuel_kg: cli.current_fuel,
    };
    render_distance_chart(&points, &cli.output, &options)?;
    eprintln!("Wrote chart to {}", cli.output.display());
    Ok(())
}
