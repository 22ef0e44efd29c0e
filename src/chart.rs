//! Fuel vs. distance line chart rendered to a bitmap.

use std::fmt::Display;
use std::fs;
use std::path::Path;

use csv::ReaderBuilder;
use oni_core::format::thousands;
use oni_propulsion::{SweepPoint, max_distance};
use plotters::prelude::*;
use thiserror::Error;

const LINE_COLOR: RGBColor = RGBColor(37, 99, 235);
const MARKER_COLOR: RGBColor = RGBColor(34, 197, 94);

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("failed to prepare output: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to read sweep CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("sweep CSV missing '{0}' column")]
    MissingColumn(&'static str),
    #[error("no sweep points to plot")]
    Empty,
    #[error("drawing failed: {0}")]
    Drawing(String),
    #[error("failed to write chart image: {0}")]
    Write(String),
}

fn drawing<E: Display>(err: E) -> ChartError {
    ChartError::Drawing(err.to_string())
}

/// Image size and the optional "Current Fuel" marker.
#[derive(Debug, Clone, Copy)]
pub struct ChartOptions {
    pub width: u32,
    pub height: u32,
    pub current_fuel_kg: Option<f64>,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            width: 800,
            height: 400,
            current_fuel_kg: None,
        }
    }
}

/// Read `fuel_mass_kg,distance_km` rows, skipping rows that do not parse.
pub fn read_sweep_csv(path: &Path) -> Result<Vec<SweepPoint>, ChartError> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let headers = rdr.headers()?.clone();
    let column = |name: &'static str| {
        headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(name))
            .ok_or(ChartError::MissingColumn(name))
    };
    let fuel_idx = column("fuel_mass_kg")?;
    let distance_idx = column("distance_km")?;

    let mut points = Vec::new();
    for rec in rdr.records() {
        let r = rec?;
        let fuel_mass_kg: f64 = r.get(fuel_idx).unwrap_or("").trim().parse().unwrap_or(f64::NAN);
        let distance_km: f64 = r
            .get(distance_idx)
            .unwrap_or("")
            .trim()
            .parse()
            .unwrap_or(f64::NAN);
        if fuel_mass_kg.is_finite() && distance_km.is_finite() {
            points.push(SweepPoint {
                fuel_mass_kg,
                distance_km: distance_km.max(0.0),
            });
        }
    }
    points.sort_by(|a, b| a.fuel_mass_kg.total_cmp(&b.fuel_mass_kg));
    Ok(points)
}

/// Render the sweep as a PNG line plot.
///
/// A drawing failure (typically a missing label font) is retried once without
/// caption, tick labels, and legend. Failures writing the image are returned
/// as they are.
pub fn render_distance_chart(
    points: &[SweepPoint],
    output: &Path,
    options: &ChartOptions,
) -> Result<(), ChartError> {
    if points.is_empty() {
        return Err(ChartError::Empty);
    }
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    match draw(points, output, options, true) {
        Err(ChartError::Drawing(reason)) => {
            eprintln!("warning: drawing failed ({reason}); retrying without text");
            draw(points, output, options, false)
        }
        result => result,
    }
}

fn draw(
    points: &[SweepPoint],
    output: &Path,
    options: &ChartOptions,
    with_text: bool,
) -> Result<(), ChartError> {
    let root = BitMapBackend::new(output, (options.width, options.height)).into_drawing_area();
    root.fill(&WHITE).map_err(drawing)?;

    let (x_min, x_max) = x_bounds(points, options.current_fuel_kg);
    let peak = max_distance(points).map(|p| p.distance_km).unwrap_or(0.0);
    let y_max = peak.max(1.0) * 1.05;

    let font_family = select_font_family();
    let caption_font = FontDesc::new(font_family, 22.0, FontStyle::Bold);
    let label_font = FontDesc::new(font_family, 14.0, FontStyle::Normal);
    let tick_label = |v: &f64| thousands(*v);

    let mut builder = ChartBuilder::on(&root);
    builder.margin(20);
    if with_text {
        builder
            .caption("Fuel Amount vs Viable Distance", caption_font)
            .x_label_area_size(50)
            .y_label_area_size(80);
    }
    let mut chart = builder
        .build_cartesian_2d(x_min..x_max, 0.0..y_max)
        .map_err(drawing)?;

    {
        let mut mesh = chart.configure_mesh();
        if with_text {
            mesh.x_desc("Fuel Amount (kg)")
                .y_desc("Distance (km)")
                .label_style(label_font.clone())
                .x_labels(8)
                .y_labels(6)
                .x_label_formatter(&tick_label)
                .y_label_formatter(&tick_label);
        } else {
            mesh.x_labels(0).y_labels(0);
        }
        mesh.draw().map_err(drawing)?;
    }

    let line = chart
        .draw_series(LineSeries::new(
            points.iter().map(|p| (p.fuel_mass_kg, p.distance_km)),
            LINE_COLOR.stroke_width(3),
        ))
        .map_err(drawing)?;
    if with_text {
        line.label("Viable Distance").legend(|(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], LINE_COLOR.stroke_width(3))
        });
    }

    chart
        .draw_series(
            points
                .iter()
                .map(|p| Circle::new((p.fuel_mass_kg, p.distance_km), 4, LINE_COLOR.filled())),
        )
        .map_err(drawing)?;

    if let Some(fuel) = options.current_fuel_kg {
        let marker = chart
            .draw_series(dashes(0.0, peak, y_max / 40.0).into_iter().map(|(y0, y1)| {
                PathElement::new(vec![(fuel, y0), (fuel, y1)], MARKER_COLOR.stroke_width(2))
            }))
            .map_err(drawing)?;
        if with_text {
            marker.label("Current Fuel").legend(|(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], MARKER_COLOR.stroke_width(2))
            });
        }
    }

    if with_text {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .label_font(label_font.clone())
            .draw()
            .map_err(drawing)?;
    }

    root.present().map_err(|err| ChartError::Write(err.to_string()))?;
    Ok(())
}

fn select_font_family() -> FontFamily<'static> {
    if cfg!(target_os = "macos") {
        FontFamily::Name("Helvetica")
    } else if cfg!(target_os = "windows") {
        FontFamily::Name("Arial")
    } else {
        FontFamily::Name("DejaVu Sans")
    }
}

/// Horizontal extent covering every sample and the current-fuel marker.
fn x_bounds(points: &[SweepPoint], current_fuel_kg: Option<f64>) -> (f64, f64) {
    let masses = points
        .iter()
        .map(|p| p.fuel_mass_kg)
        .chain(current_fuel_kg.filter(|f| f.is_finite()));
    let (mut lo, mut hi) = masses.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), m| {
        (lo.min(m), hi.max(m))
    });
    if hi - lo < 1.0 {
        lo = (lo - 50.0).max(0.0);
        hi = lo + 100.0;
    }
    (lo, hi)
}

/// Alternating on/off spans of length `dash` covering `from..to`.
fn dashes(from: f64, to: f64, dash: f64) -> Vec<(f64, f64)> {
    let mut spans = Vec::new();
    if dash <= 0.0 {
        return spans;
    }
    let mut y = from;
    while y < to {
        spans.push((y, (y + dash).min(to)));
        y += dash * 2.0;
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashes_cover_range_with_gaps() {
        let spans = dashes(0.0, 10.0, 2.0);
        assert_eq!(spans, vec![(0.0, 2.0), (4.0, 6.0), (8.0, 10.0)]);
        assert!(dashes(0.0, 0.0, 1.0).is_empty());
    }

    #[test]
    fn unwritable_output_is_a_write_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let points = [SweepPoint {
            fuel_mass_kg: 100.0,
            distance_km: 3_200.0,
        }];
        let options = ChartOptions {
            width: 200,
            height: 150,
            current_fuel_kg: None,
        };
        // the output path is an existing directory
        let result = render_distance_chart(&points, dir.path(), &options);
        assert!(matches!(result, Err(ChartError::Write(_))), "{result:?}");
    }

    #[test]
    fn x_bounds_include_marker_and_pad_single_point() {
        let points = [SweepPoint {
            fuel_mass_kg: 500.0,
            distance_km: 10.0,
        }];
        assert_eq!(x_bounds(&points, None), (450.0, 550.0));
        assert_eq!(x_bounds(&points, Some(900.0)), (500.0, 900.0));
    }
}
