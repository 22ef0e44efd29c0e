//! Weight penalty and viable travel distance.

use oni_core::constants::{PENALTY_BASELINE_KG, PENALTY_EXPONENT};
use oni_core::{FuelType, OxidizerType};

use crate::{CalcError, ensure_mass};

/// Range lost to the rocket's own mass.
///
/// Linear in mass for light rockets, then `(mass / 300)^3.2` once that grows
/// faster. The base is clamped at zero so a negative mass never reaches `powf`.
pub fn compute_weight_penalty(total_weight_kg: f64) -> f64 {
    let base = (total_weight_kg / PENALTY_BASELINE_KG).max(0.0);
    total_weight_kg.max(base.powf(PENALTY_EXPONENT))
}

/// Distance in km the rocket can travel. Zero or negative means it cannot fly.
pub fn compute_viable_distance(
    fuel_type: FuelType,
    oxidizer_type: OxidizerType,
    total_weight_kg: f64,
    fuel_mass_kg: f64,
) -> Result<f64, CalcError> {
    let fuel_mass_kg = ensure_mass("fuel mass", fuel_mass_kg)?;
    let total_weight_kg = ensure_mass("total weight", total_weight_kg)?;

    let raw_distance = fuel_mass_kg * fuel_type.efficiency() * oxidizer_type.efficiency();
    Ok(raw_distance - compute_weight_penalty(total_weight_kg))
}
