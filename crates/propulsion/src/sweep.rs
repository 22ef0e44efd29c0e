//! Distance sampled across a range of fuel loads, for charting.

use oni_core::{ComponentQuantities, FuelType, OxidizerType};
use serde::Serialize;

use crate::distance::compute_viable_distance;
use crate::weight::compute_total_weight;
use crate::CalcError;

/// Upper bound on samples in one [`FuelRange`].
pub const MAX_SAMPLES: usize = 100_000;

/// Inclusive, evenly spaced range of fuel masses (kg).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuelRange {
    start: f64,
    end: f64,
    step: f64,
    len: usize,
}

impl Default for FuelRange {
    /// 100 kg to 5,000 kg in 100 kg steps.
    fn default() -> Self {
        Self {
            start: 100.0,
            end: 5_000.0,
            step: 100.0,
            len: 50,
        }
    }
}

impl FuelRange {
    /// Fails on a non-positive step, `start > end`, or more than
    /// [`MAX_SAMPLES`] samples.
    pub fn new(start: f64, end: f64, step: f64) -> Result<Self, CalcError> {
        let invalid = CalcError::InvalidRange { start, end, step };
        let valid = start.is_finite()
            && end.is_finite()
            && step.is_finite()
            && start >= 0.0
            && step > 0.0
            && start <= end;
        if !valid {
            return Err(invalid);
        }
        // tolerate ranges like 0.1..=0.3 step 0.1 that miss the end by rounding
        let intervals = ((end - start) / step + 1e-9).floor();
        if !intervals.is_finite() || intervals >= MAX_SAMPLES as f64 {
            return Err(invalid);
        }
        Ok(Self {
            start,
            end,
            step,
            len: intervals as usize + 1,
        })
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Number of samples, counting both ends when `end` lies on the grid.
    pub fn len(&self) -> usize {
        self.len
    }

    /// A valid range always holds at least `start`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterate the masses. Each call starts from the beginning.
    pub fn masses(&self) -> FuelMasses {
        FuelMasses {
            range: *self,
            index: 0,
        }
    }
}

impl IntoIterator for FuelRange {
    type Item = f64;
    type IntoIter = FuelMasses;

    fn into_iter(self) -> Self::IntoIter {
        self.masses()
    }
}

/// Iterator over the masses of a [`FuelRange`].
#[derive(Debug, Clone)]
pub struct FuelMasses {
    range: FuelRange,
    index: usize,
}

impl Iterator for FuelMasses {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.index >= self.range.len {
            return None;
        }
        // multiply rather than accumulate so values stay exact on the grid
        let mass = (self.range.start + self.range.step * self.index as f64).min(self.range.end);
        self.index += 1;
        Some(mass)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.range.len - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for FuelMasses {}

/// One chart sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SweepPoint {
    pub fuel_mass_kg: f64,
    /// Clamped at zero.
    pub distance_km: f64,
}

/// Viable distance at each fuel mass in `range`, negative distances clamped to zero.
pub fn sweep_distance(
    fuel_type: FuelType,
    oxidizer_type: OxidizerType,
    components: &ComponentQuantities,
    range: FuelRange,
) -> Result<Vec<SweepPoint>, CalcError> {
    range
        .masses()
        .map(|fuel_mass_kg| {
            let weight = compute_total_weight(fuel_type, fuel_mass_kg, components)?;
            let distance = compute_viable_distance(fuel_type, oxidizer_type, weight, fuel_mass_kg)?;
            Ok(SweepPoint {
                fuel_mass_kg,
                distance_km: distance.max(0.0),
            })
        })
        .collect()
}

/// Sample with the greatest distance; the earliest one wins ties.
pub fn max_distance(points: &[SweepPoint]) -> Option<SweepPoint> {
    let mut best: Option<SweepPoint> = None;
    for point in points {
        match best {
            Some(current) if point.distance_km <= current.distance_km => {}
            _ => best = Some(*point),
        }
    }
    best
}
