//! Core catalog, constants, and shared primitives for the ONI Rocket Calculator workspace.

pub mod catalog;

pub use catalog::{ComponentKind, ComponentQuantities, FuelType, KeyKind, OxidizerType, ParseKeyError};

/// Game constants for base-game rocket parts. Masses in kilograms.
pub mod constants {
    /// Empty mass of one fuel tank.
    pub const FUEL_STORAGE_WEIGHT: f64 = 100.0;
    /// Fuel held by one fuel tank.
    pub const FUEL_STORAGE_CAPACITY: f64 = 900.0;
    /// Empty mass of one oxidizer tank.
    pub const OXIDIZER_STORAGE_WEIGHT: f64 = 100.0;
    /// Oxidizer held by one oxidizer tank.
    pub const OXIDIZER_STORAGE_CAPACITY: f64 = 2_700.0;
    /// Mass of the command capsule every rocket carries.
    pub const COMMAND_CAPSULE_WEIGHT: f64 = 200.0;
    /// Rocket mass below which the penalty stays linear.
    pub const PENALTY_BASELINE_KG: f64 = 300.0;
    /// Exponent applied to `mass / PENALTY_BASELINE_KG` for heavy rockets.
    pub const PENALTY_EXPONENT: f64 = 3.2;
}

/// Number formatting for human-facing output.
pub mod format {
    /// Round to the nearest integer and group digits with commas, e.g. `1,234,567`.
    pub fn thousands(value: f64) -> String {
        let rounded = value.round() as i64;
        let digits = rounded.unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
        if rounded < 0 {
            grouped.push('-');
        }
        for (idx, ch) in digits.chars().enumerate() {
            if idx > 0 && (digits.len() - idx) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        grouped
    }

    /// Format a mass for display, e.g. `2,400 kg`.
    pub fn kg(value: f64) -> String {
        format!("{} kg", thousands(value))
    }

    /// Format a distance for display, e.g. `3,200 km`.
    pub fn km(value: f64) -> String {
        format!("{} km", thousands(value))
    }
}
