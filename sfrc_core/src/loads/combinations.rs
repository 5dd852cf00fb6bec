//! ACI 318-19 Strength Load Combinations
//!
//! The thirteen strength combinations of ACI 318-19 Table 5.3.1, expanded so
//! that each alternate variable load (Lr / S / R) gets its own entry:
//!
//! | Name | Equation                     |
//! |------|------------------------------|
//! | LC1  | 1.4D                         |
//! | LC2a | 1.2D + 1.6L + 0.5Lr          |
//! | LC2b | 1.2D + 1.6L + 0.5S           |
//! | LC2c | 1.2D + 1.6L + 0.5R           |
//! | LC3a | 1.2D + 1.6Lr + 1.0L          |
//! | LC3b | 1.2D + 1.6S + 1.0L           |
//! | LC3c | 1.2D + 1.6R + 1.0L           |
//! | LC3d | 1.2D + 1.6Lr + 1.0W          |
//! | LC3e | 1.2D + 1.6S + 1.0W           |
//! | LC3f | 1.2D + 1.6R + 1.0W           |
//! | LC4  | 1.2D + 1.0E + 1.0L + 0.2S    |
//! | LC5  | 0.9D + 1.0W                  |
//! | LC6  | 0.9D + 1.0E                  |
//!
//! Envelopes across combinations are taken point by point with
//! [`envelope_max`] / [`envelope_min`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::load_types::LoadType;
use super::LoadCase;
use crate::errors::{CalcError, CalcResult};

/// A load combination with factors for each load type
///
/// # Example
/// ```
/// use sfrc_core::loads::{LoadCase, LoadCombination, LoadType};
///
/// let combo = LoadCombination::new("LC2a", "1.2D + 1.6L + 0.5Lr")
///     .with_factor(LoadType::Dead, 1.2)
///     .with_factor(LoadType::Live, 1.6)
///     .with_factor(LoadType::LiveRoof, 0.5);
///
/// let case = LoadCase::new("Beam")
///     .with_load(LoadType::Dead, 10.0)
///     .with_load(LoadType::Live, 5.0);
///
/// assert!((combo.apply(&case) - 20.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadCombination {
    /// Combination identifier (e.g., "LC2a")
    pub name: String,

    /// Human-readable equation for display (e.g., "1.2D + 1.6L + 0.5Lr")
    pub equation: String,

    /// Load factors keyed by load type
    pub factors: BTreeMap<LoadType, f64>,
}

impl LoadCombination {
    pub fn new(name: impl Into<String>, equation: impl Into<String>) -> Self {
        LoadCombination {
            name: name.into(),
            equation: equation.into(),
            factors: BTreeMap::new(),
        }
    }

    /// Add a load factor (builder pattern)
    pub fn with_factor(mut self, load_type: LoadType, factor: f64) -> Self {
        self.factors.insert(load_type, factor);
        self
    }

    /// Total factored load effect for a load case.
    ///
    /// Load types missing from either side count as zero. Terms are summed in
    /// `LoadType` order.
    pub fn apply(&self, case: &LoadCase) -> f64 {
        self.factors
            .iter()
            .map(|(load_type, factor)| factor * case.get(*load_type))
            .sum()
    }

    /// Factor for a load type (0.0 if not in combination)
    pub fn get_factor(&self, load_type: LoadType) -> f64 {
        self.factors.get(&load_type).copied().unwrap_or(0.0)
    }
}

/// ACI 318-19 strength combinations (Table 5.3.1)
///
/// # Example
/// ```
/// use sfrc_core::loads::{aci318_19_combinations, LoadType};
///
/// let combos = aci318_19_combinations();
/// assert_eq!(combos.len(), 13);
/// assert_eq!(combos[0].get_factor(LoadType::Dead), 1.4);
/// ```
pub fn aci318_19_combinations() -> Vec<LoadCombination> {
    use LoadType::*;

    vec![
        LoadCombination::new("LC1", "1.4D").with_factor(Dead, 1.4),
        // 2. variable floor load governs
        LoadCombination::new("LC2a", "1.2D + 1.6L + 0.5Lr")
            .with_factor(Dead, 1.2)
            .with_factor(Live, 1.6)
            .with_factor(LiveRoof, 0.5),
        LoadCombination::new("LC2b", "1.2D + 1.6L + 0.5S")
            .with_factor(Dead, 1.2)
            .with_factor(Live, 1.6)
            .with_factor(Snow, 0.5),
        LoadCombination::new("LC2c", "1.2D + 1.6L + 0.5R")
            .with_factor(Dead, 1.2)
            .with_factor(Live, 1.6)
            .with_factor(Rain, 0.5),
        // 3. roof load governs, companion floor live or wind
        LoadCombination::new("LC3a", "1.2D + 1.6Lr + 1.0L")
            .with_factor(Dead, 1.2)
            .with_factor(LiveRoof, 1.6)
            .with_factor(Live, 1.0),
        LoadCombination::new("LC3b", "1.2D + 1.6S + 1.0L")
            .with_factor(Dead, 1.2)
            .with_factor(Snow, 1.6)
            .with_factor(Live, 1.0),
        LoadCombination::new("LC3c", "1.2D + 1.6R + 1.0L")
            .with_factor(Dead, 1.2)
            .with_factor(Rain, 1.6)
            .with_factor(Live, 1.0),
        LoadCombination::new("LC3d", "1.2D + 1.6Lr + 1.0W")
            .with_factor(Dead, 1.2)
            .with_factor(LiveRoof, 1.6)
            .with_factor(Wind, 1.0),
        LoadCombination::new("LC3e", "1.2D + 1.6S + 1.0W")
            .with_factor(Dead, 1.2)
            .with_factor(Snow, 1.6)
            .with_factor(Wind, 1.0),
        LoadCombination::new("LC3f", "1.2D + 1.6R + 1.0W")
            .with_factor(Dead, 1.2)
            .with_factor(Rain, 1.6)
            .with_factor(Wind, 1.0),
        // 4. seismic
        LoadCombination::new("LC4", "1.2D + 1.0E + 1.0L + 0.2S")
            .with_factor(Dead, 1.2)
            .with_factor(Seismic, 1.0)
            .with_factor(Live, 1.0)
            .with_factor(Snow, 0.2),
        // 5-6. reduced dead load against uplift / overturning
        LoadCombination::new("LC5", "0.9D + 1.0W")
            .with_factor(Dead, 0.9)
            .with_factor(Wind, 1.0),
        LoadCombination::new("LC6", "0.9D + 1.0E")
            .with_factor(Dead, 0.9)
            .with_factor(Seismic, 1.0),
    ]
}

/// Look up a combination by name.
pub fn combination_by_name<'a>(
    combinations: &'a [LoadCombination],
    name: &str,
) -> CalcResult<&'a LoadCombination> {
    combinations.iter().find(|c| c.name == name).ok_or_else(|| {
        CalcError::invalid_input("combination", name, "No load combination with this name")
    })
}

/// Maximum factored load over all combinations (0.0 for an empty set)
pub fn max_factored(case: &LoadCase, combinations: &[LoadCombination]) -> f64 {
    find_governing_combination(case, combinations).0
}

/// Minimum factored load over all combinations (0.0 for an empty set)
pub fn min_factored(case: &LoadCase, combinations: &[LoadCombination]) -> f64 {
    find_minimum_combination(case, combinations).0
}

/// Find the governing (maximum) load combination
///
/// Ties keep the earliest combination in the list.
///
/// # Example
/// ```
/// use sfrc_core::loads::{aci318_19_combinations, find_governing_combination, LoadCase, LoadType};
///
/// let case = LoadCase::new("Floor")
///     .with_load(LoadType::Dead, 10.0)
///     .with_load(LoadType::Live, 10.0);
///
/// let (max_load, name) = find_governing_combination(&case, &aci318_19_combinations());
/// assert!((max_load - 28.0).abs() < 1e-12);
/// assert_eq!(name, "LC2a");
/// ```
pub fn find_governing_combination(
    case: &LoadCase,
    combinations: &[LoadCombination],
) -> (f64, String) {
    combinations
        .iter()
        .map(|combo| (combo.apply(case), combo.name.clone()))
        .reduce(|best, next| if next.0 > best.0 { next } else { best })
        .unwrap_or((0.0, String::new()))
}

/// Find the minimum load combination result (critical for uplift)
///
/// Ties keep the earliest combination in the list.
pub fn find_minimum_combination(
    case: &LoadCase,
    combinations: &[LoadCombination],
) -> (f64, String) {
    combinations
        .iter()
        .map(|combo| (combo.apply(case), combo.name.clone()))
        .reduce(|best, next| if next.0 < best.0 { next } else { best })
        .unwrap_or((0.0, String::new()))
}

fn envelope_by(diagrams: &[Vec<f64>], pick: fn(f64, f64) -> f64) -> CalcResult<Vec<f64>> {
    let Some(first) = diagrams.first() else {
        return Ok(Vec::new());
    };
    if let Some(bad) = diagrams.iter().find(|d| d.len() != first.len()) {
        return Err(CalcError::invalid_input(
            "diagrams",
            bad.len().to_string(),
            format!("All diagrams must have {} stations", first.len()),
        ));
    }
    Ok((0..first.len())
        .map(|i| diagrams.iter().map(|d| d[i]).fold(first[i], pick))
        .collect())
}

/// Point-by-point maximum of diagrams sampled at the same stations.
///
/// ```
/// use sfrc_core::loads::envelope_max;
///
/// let env = envelope_max(&[vec![1.0, 5.0, 2.0], vec![3.0, 4.0, 2.5]]).unwrap();
/// assert_eq!(env, vec![3.0, 5.0, 2.5]);
/// ```
pub fn envelope_max(diagrams: &[Vec<f64>]) -> CalcResult<Vec<f64>> {
    envelope_by(diagrams, f64::max)
}

/// Point-by-point minimum of diagrams sampled at the same stations.
pub fn envelope_min(diagrams: &[Vec<f64>]) -> CalcResult<Vec<f64>> {
    envelope_by(diagrams, f64::min)
}
