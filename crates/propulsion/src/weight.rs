//! Rocket mass and storage sizing.

use oni_core::constants::{
    COMMAND_CAPSULE_WEIGHT, FUEL_STORAGE_CAPACITY, FUEL_STORAGE_WEIGHT, OXIDIZER_STORAGE_CAPACITY,
    OXIDIZER_STORAGE_WEIGHT,
};
use oni_core::{ComponentQuantities, FuelType};
use serde::Serialize;

use crate::{CalcError, ensure_mass};

/// Mass contributions that add up to the rocket's total weight (kg).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeightBreakdown {
    /// Fuel plus an equal mass of oxidizer.
    pub fuel_and_oxidizer_kg: f64,
    pub fuel_tanks: u32,
    pub fuel_tank_weight_kg: f64,
    pub oxidizer_tanks: u32,
    pub oxidizer_tank_weight_kg: f64,
    pub engine_kg: f64,
    pub command_capsule_kg: f64,
    pub components_kg: f64,
}

impl WeightBreakdown {
    pub fn storage_kg(&self) -> f64 {
        self.fuel_tank_weight_kg + self.oxidizer_tank_weight_kg
    }

    pub fn total_kg(&self) -> f64 {
        self.fuel_and_oxidizer_kg
            + self.storage_kg()
            + self.engine_kg
            + self.command_capsule_kg
            + self.components_kg
    }
}

/// Smallest number of tanks of `capacity_kg` that hold `mass_kg`.
///
/// Fails when the count does not fit in a `u32`.
pub fn tanks_needed(mass_kg: f64, capacity_kg: f64) -> Result<u32, CalcError> {
    if mass_kg <= 0.0 || capacity_kg <= 0.0 {
        return Ok(0);
    }
    let tanks = (mass_kg / capacity_kg).ceil();
    if !tanks.is_finite() || tanks > f64::from(u32::MAX) {
        return Err(CalcError::InvalidQuantity {
            field: "fuel mass".to_string(),
            value: mass_kg,
        });
    }
    Ok(tanks as u32)
}

/// Itemized rocket mass for the given fuel load and modules.
pub fn weight_breakdown(
    fuel_type: FuelType,
    fuel_mass_kg: f64,
    components: &ComponentQuantities,
) -> Result<WeightBreakdown, CalcError> {
    let fuel_mass_kg = ensure_mass("fuel mass", fuel_mass_kg)?;

    // oxidizer is loaded 1:1 with fuel
    let fuel_tanks = tanks_needed(fuel_mass_kg, FUEL_STORAGE_CAPACITY)?;
    let oxidizer_tanks = tanks_needed(fuel_mass_kg, OXIDIZER_STORAGE_CAPACITY)?;

    let components_kg: f64 = components
        .iter()
        .map(|(kind, quantity)| kind.weight_kg() * f64::from(*quantity))
        .sum();

    Ok(WeightBreakdown {
        fuel_and_oxidizer_kg: fuel_mass_kg * 2.0,
        fuel_tanks,
        fuel_tank_weight_kg: f64::from(fuel_tanks) * FUEL_STORAGE_WEIGHT,
        oxidizer_tanks,
        oxidizer_tank_weight_kg: f64::from(oxidizer_tanks) * OXIDIZER_STORAGE_WEIGHT,
        engine_kg: fuel_type.engine_weight_kg(),
        command_capsule_kg: COMMAND_CAPSULE_WEIGHT,
        components_kg,
    })
}

/// Total rocket mass in kg.
pub fn compute_total_weight(
    fuel_type: FuelType,
    fuel_mass_kg: f64,
    components: &ComponentQuantities,
) -> Result<f64, CalcError> {
    weight_breakdown(fuel_type, fuel_mass_kg, components).map(|b| b.total_kg())
}
