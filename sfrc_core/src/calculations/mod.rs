//! # SFRC Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` / contributions - Calculation results (JSON-serializable)
//! - `calculate(input) -> CalcResult<...>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`moment_curvature`] - cracking, yielding and ultimate limit states
//! - [`shear`] - four-mechanism shear capacity at a moment/shear demand
//! - [`design_check`] - demand vs. capacity for a simply-supported beam

pub mod design_check;
pub mod moment_curvature;
pub mod shear;

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::project::GlobalSettings;

pub use design_check::{DesignCheckInput, DesignCheckResult};
pub use moment_curvature::{
    compute_moment_curvature, LimitState, LimitStateCandidate, LimitStatePoint,
    MomentCurvatureInput, MomentCurvatureResult,
};
pub use shear::{compute_shear_capacity, Reinforcement, ShearContributions, ShearDemand, ShearInput};

/// Enum wrapper for all calculation types.
///
/// Lets a project store heterogeneous calculations in one map while keeping
/// a clean tagged JSON form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    MomentCurvature(MomentCurvatureInput),
    Shear(ShearInput),
    DesignCheck(DesignCheckInput),
}

/// Output of [`CalculationItem::evaluate`], one variant per calculation type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationOutput {
    MomentCurvature(MomentCurvatureResult),
    Shear(ShearContributions),
    DesignCheck(DesignCheckResult),
}

impl CalculationItem {
    /// Get the user-provided label for this calculation
    pub fn label(&self) -> &str {
        match self {
            CalculationItem::MomentCurvature(m) => &m.label,
            CalculationItem::Shear(s) => &s.label,
            CalculationItem::DesignCheck(d) => &d.label,
        }
    }

    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::MomentCurvature(_) => "MomentCurvature",
            CalculationItem::Shear(_) => "Shear",
            CalculationItem::DesignCheck(_) => "DesignCheck",
        }
    }

    /// Run the matching calculation
    pub fn evaluate(&self, settings: &GlobalSettings) -> CalcResult<CalculationOutput> {
        Ok(match self {
            CalculationItem::MomentCurvature(input) => {
                CalculationOutput::MomentCurvature(moment_curvature::calculate(input)?)
            }
            CalculationItem::Shear(input) => CalculationOutput::Shear(shear::calculate(input)?),
            CalculationItem::DesignCheck(input) => {
                CalculationOutput::DesignCheck(design_check::calculate(input, settings)?)
            }
        })
    }
}
