//! Closed catalog of rocket parts with their constant tables.
//!
//! Every lookup is an exhaustive `match`, so an unknown part can only appear
//! while parsing free-form keys (see [`ParseKeyError`]).

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// Per-kind module counts. Kinds missing from the map count as zero.
pub type ComponentQuantities = BTreeMap<ComponentKind, u32>;

/// Which table a key failed to resolve against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    Fuel,
    Oxidizer,
    Component,
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            KeyKind::Fuel => "fuel type",
            KeyKind::Oxidizer => "oxidizer type",
            KeyKind::Component => "component",
        })
    }
}

/// A key that does not name any catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{key}'")]
pub struct ParseKeyError {
    pub kind: KeyKind,
    pub key: String,
}

/// Accept `Liquid-Hydrogen`, `liquid hydrogen` and `liquid_hydrogen` alike.
fn normalize_key(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|c| match c {
            '-' | ' ' => '_',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}

/// Engine fuel. Each fuel implies its own engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FuelType {
    Steam,
    Petroleum,
    LiquidHydrogen,
}

impl FuelType {
    pub const ALL: [FuelType; 3] = [
        FuelType::Steam,
        FuelType::Petroleum,
        FuelType::LiquidHydrogen,
    ];

    pub fn key(self) -> &'static str {
        match self {
            FuelType::Steam => "steam",
            FuelType::Petroleum => "petroleum",
            FuelType::LiquidHydrogen => "liquid_hydrogen",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FuelType::Steam => "Steam",
            FuelType::Petroleum => "Petroleum",
            FuelType::LiquidHydrogen => "Liquid Hydrogen",
        }
    }

    /// Range in km per kg of fuel before the oxidizer factor and mass penalty.
    pub fn efficiency(self) -> f64 {
        match self {
            FuelType::Steam => 20.0,
            FuelType::Petroleum => 40.0,
            FuelType::LiquidHydrogen => 60.0,
        }
    }

    /// Mass of the engine that burns this fuel (kg).
    pub fn engine_weight_kg(self) -> f64 {
        match self {
            FuelType::Steam | FuelType::Petroleum => 200.0,
            FuelType::LiquidHydrogen => 500.0,
        }
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FuelType {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize_key(s);
        FuelType::ALL
            .into_iter()
            .find(|fuel| fuel.key() == key)
            .ok_or_else(|| ParseKeyError {
                kind: KeyKind::Fuel,
                key: s.to_string(),
            })
    }
}

/// Oxidizer loaded alongside the fuel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OxidizerType {
    Oxylite,
    LiquidOxygen,
}

impl OxidizerType {
    pub const ALL: [OxidizerType; 2] = [OxidizerType::Oxylite, OxidizerType::LiquidOxygen];

    pub fn key(self) -> &'static str {
        match self {
            OxidizerType::Oxylite => "oxylite",
            OxidizerType::LiquidOxygen => "liquid_oxygen",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OxidizerType::Oxylite => "Oxylite",
            OxidizerType::LiquidOxygen => "Liquid Oxygen",
        }
    }

    /// Multiplier applied to the fuel's raw range.
    pub fn efficiency(self) -> f64 {
        match self {
            OxidizerType::Oxylite => 1.0,
            OxidizerType::LiquidOxygen => 1.33,
        }
    }
}

impl fmt::Display for OxidizerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for OxidizerType {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize_key(s);
        OxidizerType::ALL
            .into_iter()
            .find(|oxidizer| oxidizer.key() == key)
            .ok_or_else(|| ParseKeyError {
                kind: KeyKind::Oxidizer,
                key: s.to_string(),
            })
    }
}

/// Optional modules stacked on the rocket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    CargoBay,
    LiquidCargoBay,
    GasCargoBay,
    Sightseeing,
    ResearchStation,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 5] = [
        ComponentKind::CargoBay,
        ComponentKind::LiquidCargoBay,
        ComponentKind::GasCargoBay,
        ComponentKind::Sightseeing,
        ComponentKind::ResearchStation,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ComponentKind::CargoBay => "cargo_bay",
            ComponentKind::LiquidCargoBay => "liquid_cargo_bay",
            ComponentKind::GasCargoBay => "gas_cargo_bay",
            ComponentKind::Sightseeing => "sightseeing",
            ComponentKind::ResearchStation => "research_station",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ComponentKind::CargoBay => "Cargo Bay",
            ComponentKind::LiquidCargoBay => "Liquid Cargo Bay",
            ComponentKind::GasCargoBay => "Gas Cargo Bay",
            ComponentKind::Sightseeing => "Sightseeing Module",
            ComponentKind::ResearchStation => "Research Station",
        }
    }

    /// Mass of a single module (kg).
    pub fn weight_kg(self) -> f64 {
        match self {
            ComponentKind::CargoBay | ComponentKind::LiquidCargoBay | ComponentKind::GasCargoBay => {
                2_000.0
            }
            ComponentKind::Sightseeing | ComponentKind::ResearchStation => 200.0,
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ComponentKind {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize_key(s);
        ComponentKind::ALL
            .into_iter()
            .find(|kind| kind.key() == key)
            .ok_or_else(|| ParseKeyError {
                kind: KeyKind::Component,
                key: s.to_string(),
            })
    }
}
