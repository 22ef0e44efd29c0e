//! ONI rocket performance calculator.
//!
//! The calculation itself lives in `oni_propulsion`; this crate gathers the
//! workspace behind one façade so that front-ends (CLI, chart renderer, or a
//! future GUI) share the same entry points.

pub mod chart;

pub use oni_config as config;
pub use oni_core::{catalog, constants, format};
pub use oni_core::{ComponentKind, ComponentQuantities, FuelType, OxidizerType};
pub use oni_export as export;
pub use oni_propulsion as propulsion;
pub use oni_propulsion::{
    CalcError, FuelRange, RocketConfiguration, RocketMetrics, SweepPoint, compute_metrics,
    sweep_distance,
};

/// Returns the version of the library for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
