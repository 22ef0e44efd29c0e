//! Export helpers for CSV and JSON artifacts.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Create a writer for the target path, handling stdout (`-`) by convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

pub mod sweep {
    use std::io::{self, Write};

    use oni_propulsion::SweepPoint;

    pub const HEADER: &str = "fuel_mass_kg,distance_km";

    /// Write the standard sweep CSV header.
    pub fn write_header(writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{}", HEADER)
    }

    /// CSV row emitted by the sweep exporter.
    #[derive(Debug, Clone, Copy)]
    pub struct Record {
        pub fuel_mass_kg: f64,
        pub distance_km: f64,
    }

    impl From<&SweepPoint> for Record {
        fn from(point: &SweepPoint) -> Self {
            Self {
                fuel_mass_kg: point.fuel_mass_kg,
                distance_km: point.distance_km,
            }
        }
    }

    impl Record {
        /// Serialize the record to CSV, matching the header ordering.
        pub fn write_to(&self, writer: &mut dyn Write) -> io::Result<()> {
            writeln!(writer, "{:.3},{:.3}", self.fuel_mass_kg, self.distance_km)
        }
    }

    /// Header plus one row per point.
    pub fn write_all(writer: &mut dyn Write, points: &[SweepPoint]) -> io::Result<()> {
        write_header(writer)?;
        for point in points {
            Record::from(point).write_to(writer)?;
        }
        writer.flush()
    }
}

pub mod metrics {
    use std::io::{self, Write};

    use oni_propulsion::{RocketConfiguration, RocketMetrics, SweepPoint};
    use serde::Serialize;
    use serde_json::to_writer_pretty;

    /// JSON document describing one calculation.
    #[derive(Debug, Serialize)]
    pub struct MetricsReport<'a> {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub name: Option<&'a str>,
        pub configuration: &'a RocketConfiguration,
        pub metrics: &'a RocketMetrics,
        pub viable: bool,
        #[serde(skip_serializing_if = "no_points")]
        pub sweep: &'a [SweepPoint],
    }

    fn no_points(points: &&[SweepPoint]) -> bool {
        points.is_empty()
    }

    impl<'a> MetricsReport<'a> {
        pub fn new(configuration: &'a RocketConfiguration, metrics: &'a RocketMetrics) -> Self {
            Self {
                name: None,
                configuration,
                metrics,
                viable: metrics.is_viable(),
                sweep: &[],
            }
        }

        pub fn with_name(mut self, name: Option<&'a str>) -> Self {
            self.name = name;
            self
        }

        pub fn with_sweep(mut self, sweep: &'a [SweepPoint]) -> Self {
            self.sweep = sweep;
            self
        }

        /// Pretty-printed JSON followed by a trailing newline.
        pub fn write_to(&self, writer: &mut dyn Write) -> io::Result<()> {
            to_writer_pretty(&mut *writer, self)?;
            writeln!(writer)?;
            writer.flush()
        }
    }
}
