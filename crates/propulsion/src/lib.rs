//! Rocket performance calculator.
//!
//! Maps a [`RocketConfiguration`] to its total mass, the number of fuel and
//! oxidizer tanks it needs, and the distance it can travel. Every function here
//! is pure: no I/O, no shared state, safe to call from any thread.

pub mod distance;
pub mod sweep;
pub mod weight;

use oni_core::{ComponentKind, ComponentQuantities, FuelType, KeyKind, OxidizerType, ParseKeyError};
use serde::Serialize;
use thiserror::Error;

pub use distance::{compute_viable_distance, compute_weight_penalty};
pub use sweep::{FuelRange, MAX_SAMPLES, SweepPoint, max_distance, sweep_distance};
pub use weight::{WeightBreakdown, compute_total_weight, tanks_needed, weight_breakdown};

/// Errors raised while validating a calculation's inputs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("unknown fuel type '{0}'")]
    UnknownFuelType(String),
    #[error("unknown oxidizer type '{0}'")]
    UnknownOxidizerType(String),
    #[error("unknown component '{0}'")]
    UnknownComponent(String),
    #[error("invalid {field}: {value} (must be a finite, non-negative number)")]
    InvalidQuantity { field: String, value: f64 },
    #[error("invalid fuel range {start}..={end} step {step}")]
    InvalidRange { start: f64, end: f64, step: f64 },
}

impl From<ParseKeyError> for CalcError {
    fn from(err: ParseKeyError) -> Self {
        match err.kind {
            KeyKind::Fuel => CalcError::UnknownFuelType(err.key),
            KeyKind::Oxidizer => CalcError::UnknownOxidizerType(err.key),
            KeyKind::Component => CalcError::UnknownComponent(err.key),
        }
    }
}

/// Reject negative, NaN, and infinite masses.
pub(crate) fn ensure_mass(field: &str, value: f64) -> Result<f64, CalcError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(CalcError::InvalidQuantity {
            field: field.to_string(),
            value,
        })
    }
}

/// Everything needed to evaluate one rocket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RocketConfiguration {
    pub fuel_type: FuelType,
    pub oxidizer_type: OxidizerType,
    pub fuel_mass_kg: f64,
    pub components: ComponentQuantities,
}

impl RocketConfiguration {
    pub fn new(fuel_type: FuelType, oxidizer_type: OxidizerType, fuel_mass_kg: f64) -> Self {
        Self {
            fuel_type,
            oxidizer_type,
            fuel_mass_kg,
            components: ComponentQuantities::new(),
        }
    }

    /// Set the count for one module kind, replacing any previous count.
    pub fn with_component(mut self, kind: ComponentKind, quantity: u32) -> Self {
        self.components.insert(kind, quantity);
        self
    }

    /// Add `quantity` modules of `kind` to any already listed.
    pub fn add_component(&mut self, kind: ComponentKind, quantity: u32) -> Result<(), CalcError> {
        let current = self.quantity(kind);
        let total = current
            .checked_add(quantity)
            .ok_or_else(|| CalcError::InvalidQuantity {
                field: format!("{} quantity", kind.key()),
                value: f64::from(current) + f64::from(quantity),
            })?;
        self.components.insert(kind, total);
        Ok(())
    }

    /// Module count for `kind`, zero when unspecified.
    pub fn quantity(&self, kind: ComponentKind) -> u32 {
        self.components.get(&kind).copied().unwrap_or(0)
    }
}

/// Derived performance figures for one configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RocketMetrics {
    pub total_weight_kg: f64,
    pub fuel_tanks_needed: u32,
    pub oxidizer_tanks_needed: u32,
    pub weight_penalty: f64,
    /// Zero or negative means the rocket cannot fly.
    pub viable_distance_km: f64,
    pub breakdown: WeightBreakdown,
}

impl RocketMetrics {
    pub fn is_viable(&self) -> bool {
        self.viable_distance_km > 0.0
    }
}

/// Evaluate a configuration end to end.
pub fn compute_metrics(config: &RocketConfiguration) -> Result<RocketMetrics, CalcError> {
    let breakdown = weight_breakdown(config.fuel_type, config.fuel_mass_kg, &config.components)?;
    let total_weight_kg = breakdown.total_kg();
    let weight_penalty = compute_weight_penalty(total_weight_kg);
    let viable_distance_km = compute_viable_distance(
        config.fuel_type,
        config.oxidizer_type,
        total_weight_kg,
        config.fuel_mass_kg,
    )?;

    Ok(RocketMetrics {
        total_weight_kg,
        fuel_tanks_needed: breakdown.fuel_tanks,
        oxidizer_tanks_needed: breakdown.oxidizer_tanks,
        weight_penalty,
        viable_distance_km,
        breakdown,
    })
}
