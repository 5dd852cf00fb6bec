//! Loads, ACI 318-19 strength combinations and beam demand
//!
//! - [`LoadType`] - ACI 318 load categories (D, L, Lr, S, R, W, E)
//! - [`LoadCase`] - unfactored load effects keyed by type
//! - [`LoadCombination`] - factors for one strength combination
//! - [`CombinationSet`] - which family of combinations a project uses
//! - [`SimplySupportedBeam`] - factored M and V for a single span
//!
//! # Example
//!
//! ```
//! use sfrc_core::loads::{aci318_19_combinations, max_factored, LoadCase, LoadType};
//!
//! let beam_loads = LoadCase::new("B-1")
//!     .with_load(LoadType::Dead, 1.5)   // N/mm self-weight
//!     .with_load(LoadType::Live, 4.0);  // N/mm occupancy
//!
//! let w = max_factored(&beam_loads, &aci318_19_combinations());
//! assert!((w - 8.2).abs() < 1e-12);
//! ```

pub mod beam_demand;
pub mod combinations;
pub mod load_types;

pub use beam_demand::{self_weight, BeamDemand, SimplySupportedBeam};
pub use combinations::{
    aci318_19_combinations, combination_by_name, envelope_max, envelope_min,
    find_governing_combination, find_minimum_combination, max_factored, min_factored,
    LoadCombination,
};
pub use load_types::LoadType;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Family of strength combinations used by a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CombinationSet {
    /// ACI 318-19 Table 5.3.1
    #[default]
    Aci318_19,
}

impl CombinationSet {
    pub fn display_name(&self) -> &'static str {
        match self {
            CombinationSet::Aci318_19 => "ACI 318-19 strength combinations",
        }
    }

    /// The combinations of this set
    pub fn combinations(&self) -> Vec<LoadCombination> {
        match self {
            CombinationSet::Aci318_19 => aci318_19_combinations(),
        }
    }
}

impl std::fmt::Display for CombinationSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A collection of unfactored load effects by type
///
/// # JSON Format
/// ```json
/// {
///   "label": "B-1",
///   "loads": { "Dead": 1.5, "Live": 4.0 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadCase {
    pub label: String,

    /// Load values keyed by type (units are the caller's: N/mm, kN, kN·m, ...)
    pub loads: BTreeMap<LoadType, f64>,
}

impl LoadCase {
    pub fn new(label: impl Into<String>) -> Self {
        LoadCase {
            label: label.into(),
            loads: BTreeMap::new(),
        }
    }

    /// Add or update a load value (builder pattern)
    pub fn with_load(mut self, load_type: LoadType, value: f64) -> Self {
        self.loads.insert(load_type, value);
        self
    }

    pub fn set_load(&mut self, load_type: LoadType, value: f64) {
        self.loads.insert(load_type, value);
    }

    /// Load value for a type, 0.0 if not set
    pub fn get(&self, load_type: LoadType) -> f64 {
        self.loads.get(&load_type).copied().unwrap_or(0.0)
    }

    /// Gravity loads must be non-negative; everything must be finite.
    pub fn validate(&self) -> CalcResult<()> {
        for (load_type, value) in &self.loads {
            if !value.is_finite() || (load_type.is_gravity() && *value < 0.0) {
                return Err(CalcError::invalid_input(
                    format!("load_{}", load_type.code()),
                    value.to_string(),
                    format!("{} must be finite and not negative", load_type.description()),
                ));
            }
        }
        Ok(())
    }

    /// Factored value under every combination of a set
    pub fn all_combination_results(&self, set: CombinationSet) -> Vec<(String, f64)> {
        set.combinations()
            .iter()
            .map(|combo| (combo.name.clone(), combo.apply(self)))
            .collect()
    }
}
