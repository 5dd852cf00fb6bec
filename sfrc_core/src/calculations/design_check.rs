//! # Beam Design Check
//!
//! Ties the pieces together for one simply-supported SFRC beam: factored
//! demand from the span and load combinations, flexural capacity from the
//! moment-curvature response, shear capacity at the design demand, and the
//! two unity checks
//!
//! - flexure: `Md / Mult`
//! - shear: `Vd / VCSDT`
//!
//! A beam passes when both ratios are at most 1.0.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::calculations::moment_curvature::{compute_moment_curvature, MomentCurvatureResult};
use crate::calculations::shear::{shear_with_moment_curvature, Reinforcement, ShearContributions};
use crate::equations::checked_div;
use crate::errors::CalcResult;
use crate::loads::{combination_by_name, BeamDemand, SimplySupportedBeam};
use crate::project::GlobalSettings;
use crate::section::SectionInputs;

/// Input parameters for a beam design check.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "B-1",
///   "section": { "fc_mpa": 28.0, "...": "..." },
///   "reinforcement": { "phibar_mm": 12.0, "ns": 2 },
///   "beam": { "span_mm": 4000.0, "point_load_kn": 30.0, "load_position_mm": 2000.0 },
///   "combination": "LC2a"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignCheckInput {
    pub label: String,
    pub section: SectionInputs,
    pub reinforcement: Reinforcement,
    pub beam: SimplySupportedBeam,
    /// Combination name; `None` takes the combination with the largest
    /// moment from the project's combination set
    #[serde(default)]
    pub combination: Option<String>,
}

impl DesignCheckInput {
    pub fn validate(&self) -> CalcResult<()> {
        self.section.validate()?;
        self.reinforcement.validate()?;
        self.beam.validate()
    }
}

/// Results of a beam design check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignCheckResult {
    pub demand: BeamDemand,
    pub moment_curvature: MomentCurvatureResult,
    pub shear: ShearContributions,
    /// Md / Mult
    pub flexure_unity: f64,
    /// Vd / VCSDT
    pub shear_unity: f64,
}

impl DesignCheckResult {
    /// True when both unity ratios are at most 1.0
    pub fn passes(&self) -> bool {
        self.flexure_unity <= 1.0 && self.shear_unity <= 1.0
    }

    pub fn governing_unity(&self) -> f64 {
        self.flexure_unity.max(self.shear_unity)
    }

    /// "Flexure" or "Shear"
    pub fn governing_condition(&self) -> &'static str {
        if self.flexure_unity >= self.shear_unity {
            "Flexure"
        } else {
            "Shear"
        }
    }
}

/// Run the design check.
///
/// # Example
///
/// ```rust
/// use sfrc_core::calculations::design_check::{calculate, DesignCheckInput};
/// use sfrc_core::calculations::shear::Reinforcement;
/// use sfrc_core::loads::SimplySupportedBeam;
/// use sfrc_core::project::GlobalSettings;
/// use sfrc_core::section::SectionInputs;
///
/// let input = DesignCheckInput {
///     label: "B-1".to_string(),
///     section: SectionInputs {
///         fc_mpa: 28.0, daggmax_mm: 16.0, fy_mpa: 400.0, as_mm2: 226.0,
///         rhof: 1.0, vf: 0.005, df_mm: 0.55, lf_mm: 35.0,
///         b_mm: 120.0, d_mm: 435.0, h_mm: 500.0,
///     },
///     reinforcement: Reinforcement { phibar_mm: 12.0, ns: 2 },
///     beam: SimplySupportedBeam {
///         span_mm: 4000.0,
///         point_load_kn: 10.0,
///         load_position_mm: 2000.0,
///     },
///     combination: Some("LC2a".to_string()),
/// };
///
/// let result = calculate(&input, &GlobalSettings::default()).unwrap();
/// assert!(result.passes());
/// ```
pub fn calculate(
    input: &DesignCheckInput,
    settings: &GlobalSettings,
) -> CalcResult<DesignCheckResult> {
    input.validate()?;

    let unit_weight = settings.concrete_unit_weight_kn_m3;
    let combos = settings.combination_set.combinations();
    let demand = match &input.combination {
        Some(name) => input
            .beam
            .demand(&input.section, unit_weight, combination_by_name(&combos, name)?)?,
        None => input.beam.governing_demand(&input.section, unit_weight, &combos)?,
    };

    let moment_curvature = compute_moment_curvature(&input.section)?;
    let shear = shear_with_moment_curvature(
        &input.section,
        &input.reinforcement,
        &demand.shear_demand(),
        &moment_curvature,
    )?;

    let flexure_unity = checked_div(
        "flexure_unity",
        demand.moment_knm,
        moment_curvature.moment_capacity_knm(),
    )?;
    let shear_unity = checked_div("shear_unity", demand.shear_kn, shear.capacity_kn())?;

    debug!(
        "{}: {} Md={:.3} kNm Vd={:.3} kN, unity flexure={:.3} shear={:.3}",
        input.label,
        demand.combination,
        demand.moment_knm,
        demand.shear_kn,
        flexure_unity,
        shear_unity
    );

    Ok(DesignCheckResult {
        demand,
        moment_curvature,
        shear,
        flexure_unity,
        shear_unity,
    })
}
