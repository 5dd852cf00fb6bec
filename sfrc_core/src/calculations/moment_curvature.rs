//! # Moment-Curvature Calculation
//!
//! Closed-form moment and curvature of a hybrid SFRC-RC section at three
//! limit states: first cracking, yielding of the reinforcement, and the
//! ultimate state (concrete crushing strain εcu reached).
//!
//! The stress blocks follow Mobasher, Yao & Soranakom (2015), "Analytical
//! solutions for flexural design of hybrid steel fiber reinforced concrete
//! beams", with the SFRC tensile parameters of RILEM TC 162-TDF (2003).
//!
//! ## Two candidate solutions
//!
//! Yielding and ultimate each have two closed forms for the neutral-axis
//! ratio `k`:
//!
//! - [`LimitStateCandidate::Equilibrium`] - root of the quadratic force
//!   equilibrium (`k21y`, `k31`), reinforcement still elastic
//! - [`LimitStateCandidate::Yielded`] - direct ratio (`k22y`, `k32`),
//!   reinforcement yielded
//!
//! Both are evaluated; [`select_candidate`] then keeps the yielded form only
//! if the steel strain it implies actually exceeds the yield strain. The two
//! are never blended.
//!
//! ## Example
//!
//! ```rust
//! use sfrc_core::calculations::moment_curvature::{compute_moment_curvature, LimitStateCandidate};
//! use sfrc_core::section::SectionInputs;
//!
//! let section = SectionInputs {
//!     fc_mpa: 28.0, daggmax_mm: 16.0, fy_mpa: 400.0, as_mm2: 226.0,
//!     rhof: 1.0, vf: 0.005, df_mm: 0.55, lf_mm: 35.0,
//!     b_mm: 120.0, d_mm: 435.0, h_mm: 500.0,
//! };
//!
//! let result = compute_moment_curvature(&section).unwrap();
//! assert!((result.yielding.moment_knm - 45.867).abs() < 1e-3);
//! assert_eq!(result.yielding_candidates.governing, LimitStateCandidate::Yielded);
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::equations::{checked_div, checked_sqrt};
use crate::errors::CalcResult;
use crate::section::{DerivedProperties, SectionInputs};
use crate::units::{KilonewtonMeters, NewtonMillimeters};

/// Input parameters for a moment-curvature calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MomentCurvatureInput {
    /// User label (e.g., "B-1 midspan")
    pub label: String,

    /// Section geometry and materials
    pub section: SectionInputs,
}

/// The three limit states of the moment-curvature response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LimitState {
    /// First tensile cracking
    Cracking,
    /// Onset of reinforcement yielding
    Yielding,
    /// Concrete reaches the ultimate compressive strain
    Ultimate,
}

impl LimitState {
    /// All limit states in loading order
    pub const ALL: [LimitState; 3] =
        [LimitState::Cracking, LimitState::Yielding, LimitState::Ultimate];

    /// Display name
    pub fn display_name(&self) -> &'static str {
        match self {
            LimitState::Cracking => "Cracking",
            LimitState::Yielding => "Yielding",
            LimitState::Ultimate => "Ultimate",
        }
    }

    fn candidate_names(&self) -> (&'static str, &'static str) {
        match self {
            LimitState::Yielding => ("k21y", "k22y"),
            _ => ("k31", "k32"),
        }
    }
}

/// Moment, curvature and neutral-axis ratio at one limit state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LimitStatePoint {
    /// Bending moment M (kN·m)
    pub moment_knm: f64,
    /// Curvature φ (1/mm)
    pub curvature_per_mm: f64,
    /// Neutral-axis depth ratio k (-)
    pub k: f64,
}

/// Which of the two closed-form solutions governs a limit state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LimitStateCandidate {
    /// Quadratic equilibrium root (candidate 1)
    Equilibrium,
    /// Direct ratio with yielded reinforcement (candidate 2)
    Yielded,
}

/// Choose the governing candidate from the reinforcement strain implied by
/// the yielded candidate.
///
/// ```rust
/// use sfrc_core::calculations::moment_curvature::{select_candidate, LimitStateCandidate};
///
/// assert_eq!(select_candidate(0.0045, 0.002), LimitStateCandidate::Yielded);
/// assert_eq!(select_candidate(0.002, 0.002), LimitStateCandidate::Equilibrium);
/// ```
pub fn select_candidate(steel_strain: f64, yield_strain: f64) -> LimitStateCandidate {
    if steel_strain > yield_strain {
        LimitStateCandidate::Yielded
    } else {
        LimitStateCandidate::Equilibrium
    }
}

/// One candidate solution of a limit state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandidateSolution {
    /// Neutral-axis depth ratio k
    pub k: f64,
    /// Moment (kN·m)
    pub moment_knm: f64,
    /// Curvature normalized by the cracking curvature φ/φcr
    pub normalized_curvature: f64,
}

/// Both candidates of a limit state plus the selection outcome.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandidatePair {
    pub equilibrium: CandidateSolution,
    pub yielded: CandidateSolution,
    /// Tensile steel strain implied by the yielded candidate (εs2 or εs3)
    pub steel_strain: f64,
    /// Selected candidate
    pub governing: LimitStateCandidate,
}

impl CandidatePair {
    /// The selected candidate
    pub fn governing_solution(&self) -> &CandidateSolution {
        match self.governing {
            LimitStateCandidate::Equilibrium => &self.equilibrium,
            LimitStateCandidate::Yielded => &self.yielded,
        }
    }
}

/// Results of the moment-curvature calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "cracking": { "moment_knm": 14.81, "curvature_per_mm": 5.43e-7, "k": 0.512 },
///   "yielding": { "moment_knm": 45.87, "curvature_per_mm": 1.28e-5, "k": 0.173 },
///   "ultimate": { "moment_knm": 47.28, "curvature_per_mm": 7.75e-5, "k": 0.090 },
///   "k1": 0.512,
///   "lambdar1": 1.0497,
///   "om": 8.2097
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MomentCurvatureResult {
    pub cracking: LimitStatePoint,
    pub yielding: LimitStatePoint,
    pub ultimate: LimitStatePoint,

    /// Both yielding solutions (k21y/M21 and k22y/M22)
    pub yielding_candidates: CandidatePair,
    /// Both ultimate solutions (k31/M31 and k32/M32)
    pub ultimate_candidates: CandidatePair,

    /// Neutral-axis ratio at cracking k1
    pub k1: f64,
    /// Normalized bottom-fiber strain at cracking λr1 = k1/(1-k1)
    pub lambdar1: f64,
    /// Normalized compressive strain ω
    pub om: f64,

    /// Derived properties the results were computed from
    pub properties: DerivedProperties,
}

impl MomentCurvatureResult {
    /// Point for one limit state
    pub fn limit_state(&self, state: LimitState) -> &LimitStatePoint {
        match state {
            LimitState::Cracking => &self.cracking,
            LimitState::Yielding => &self.yielding,
            LimitState::Ultimate => &self.ultimate,
        }
    }

    /// Trilinear M-φ diagram: origin, cracking, yielding, ultimate as
    /// (curvature 1/mm, moment kN·m)
    pub fn diagram_points(&self) -> [(f64, f64); 4] {
        [
            (0.0, 0.0),
            (self.cracking.curvature_per_mm, self.cracking.moment_knm),
            (self.yielding.curvature_per_mm, self.yielding.moment_knm),
            (self.ultimate.curvature_per_mm, self.ultimate.moment_knm),
        ]
    }

    /// True when moments and curvatures do not decrease from cracking to
    /// ultimate
    pub fn is_monotonic(&self) -> bool {
        self.cracking.moment_knm <= self.yielding.moment_knm
            && self.yielding.moment_knm <= self.ultimate.moment_knm
            && self.cracking.curvature_per_mm <= self.yielding.curvature_per_mm
            && self.yielding.curvature_per_mm <= self.ultimate.curvature_per_mm
    }

    /// Flexural capacity (ultimate moment, kN·m)
    pub fn moment_capacity_knm(&self) -> f64 {
        self.ultimate.moment_knm
    }
}

/// Polynomial coefficients of a cracked limit state.
///
/// For yielding `strain_ratio` is ω and `lead` is B1y with cubic term C5y;
/// for the ultimate state they are λcu, B5u and C11u.
struct StageCoefficients {
    strain_ratio: f64,
    lead: f64,
    b2: f64,
    b3: f64,
    b4: f64,
    c_top: f64,
    c6: f64,
    c7: f64,
    c8: f64,
    c9: f64,
    c10: f64,
}

impl StageCoefficients {
    fn yielding(p: &DerivedProperties) -> Self {
        let (om, mu, rhog, alpha, kappa) = (p.om, p.mu, p.rhog, p.alpha, p.kappa);
        StageCoefficients {
            strain_ratio: om,
            lead: om.powi(2) + 2.0 * mu * (om + 1.0) - 1.0,
            b2: mu - 9.0 * rhog * om,
            b3: 9.0 * rhog * (rhog * 9.0 * om.powi(2) - 2.0 * mu * om) + mu.powi(2),
            b4: 2.0 * om * (9.0 * rhog * kappa + mu),
            c_top: 2.0 * om.powi(3) + 3.0 * mu * (om.powi(2) - 1.0) + 2.0,
            c6: 6.0 * om.powi(2) * (9.0 * om * rhog - mu),
            c7: 3.0 * om.powi(2) * (mu - 36.0 * rhog * alpha * om),
            c8: 54.0 * rhog * alpha.powi(2) * om.powi(3),
            c9: -6.0 * om.powi(2) * (9.0 * rhog * kappa + mu),
            c10: 3.0 * om.powi(2) * (18.0 * rhog * alpha * kappa + mu),
        }
    }

    fn ultimate(p: &DerivedProperties) -> Self {
        let (lcu, mu, rhog, alpha, kappa) = (p.lambdacu, p.mu, p.rhog, p.alpha, p.kappa);
        StageCoefficients {
            strain_ratio: lcu,
            lead: 20.0 * lcu - 101.0 + 2.0 * mu * (lcu + 1.0),
            b2: mu - 9.0 * rhog * lcu,
            b3: 9.0 * rhog * (rhog * 9.0 * lcu.powi(2) - 2.0 * mu * lcu),
            b4: 2.0 * lcu * (9.0 * rhog * kappa + mu),
            c_top: 30.0 * lcu.powi(2) + 3.0 * mu * (lcu.powi(2) - 1.0) - 998.0,
            c6: 6.0 * lcu.powi(2) * (9.0 * lcu * rhog - mu),
            c7: 3.0 * lcu.powi(2) * (mu - 36.0 * rhog * alpha * lcu),
            c8: 54.0 * rhog * alpha.powi(2) * lcu.powi(3),
            c9: -6.0 * lcu.powi(2) * (9.0 * rhog * kappa + mu),
            c10: 3.0 * lcu.powi(2) * (18.0 * rhog * alpha * kappa + mu),
        }
    }

    /// Evaluate both candidates and select the governing one.
    fn solve(
        &self,
        state: LimitState,
        p: &DerivedProperties,
        mcr_knm: f64,
    ) -> CalcResult<CandidatePair> {
        let (root_name, ratio_name) = state.candidate_names();
        let r = self.strain_ratio;
        let r2 = r.powi(2);

        // Candidate 1: equilibrium root
        let radicand = self.b3 + 2.0 * p.alpha * p.rhog * p.n * self.lead;
        let k_root =
            checked_div(root_name, r, self.lead)? * (self.b2 + checked_sqrt(root_name, radicand)?);
        let cubic =
            self.c_top * k_root.powi(3) + self.c6 * k_root.powi(2) + self.c7 * k_root + self.c8;
        let equilibrium = CandidateSolution {
            k: k_root,
            moment_knm: checked_div(root_name, 1.0, r2 * k_root)? * cubic * mcr_knm,
            normalized_curvature: checked_div(root_name, r, 2.0 * k_root)?,
        };

        // Candidate 2: yielded reinforcement
        let k_ratio = checked_div(ratio_name, self.b4, self.lead)?;
        let quadratic = self.c_top * k_ratio.powi(2) + self.c9 * k_ratio + self.c10;
        let yielded = CandidateSolution {
            k: k_ratio,
            moment_knm: 1.0 / r2 * quadratic * mcr_knm,
            normalized_curvature: checked_div(ratio_name, r, 2.0 * k_ratio)?,
        };

        let steel_strain = checked_div(ratio_name, p.alpha - k_ratio, k_ratio)? * r * p.ecr;
        let governing = select_candidate(steel_strain, p.esy);

        debug!(
            "{}: es={:.6e} esy={:.6e} -> {:?} ({}={:.5}, {}={:.5})",
            state.display_name(),
            steel_strain,
            p.esy,
            governing,
            root_name,
            k_root,
            ratio_name,
            k_ratio
        );

        Ok(CandidatePair {
            equilibrium,
            yielded,
            steel_strain,
            governing,
        })
    }
}

fn governing_point(pair: &CandidatePair, phicr: f64) -> LimitStatePoint {
    let solution = pair.governing_solution();
    LimitStatePoint {
        moment_knm: solution.moment_knm,
        curvature_per_mm: solution.normalized_curvature * phicr,
        k: solution.k,
    }
}

/// Compute the moment-curvature response from already resolved properties.
pub fn compute_with_properties(
    section: &SectionInputs,
    props: &DerivedProperties,
) -> CalcResult<MomentCurvatureResult> {
    let (b, d, h) = (section.b_mm, section.d_mm, section.h_mm);

    // Cracking
    let mcr: KilonewtonMeters =
        NewtonMillimeters(1.0 / 6.0 * b * d.powi(2) * props.eten_mpa * props.ecr).into();
    let k1 = (18.0 * props.rhog * props.alpha + 1.0) / (18.0 * props.rhog + 2.0);
    let lambdar1 = checked_div("lambdar1", k1 * h, h - k1 * h)?;
    let phicr = 2.0 * props.ecr / h;
    let cracking = LimitStatePoint {
        moment_knm: mcr.0,
        curvature_per_mm: phicr,
        k: k1,
    };

    let yielding_candidates =
        StageCoefficients::yielding(props).solve(LimitState::Yielding, props, mcr.0)?;
    let ultimate_candidates =
        StageCoefficients::ultimate(props).solve(LimitState::Ultimate, props, mcr.0)?;

    Ok(MomentCurvatureResult {
        cracking,
        yielding: governing_point(&yielding_candidates, phicr),
        ultimate: governing_point(&ultimate_candidates, phicr),
        yielding_candidates,
        ultimate_candidates,
        k1,
        lambdar1,
        om: props.om,
        properties: *props,
    })
}

/// Compute cracking, yielding and ultimate moment/curvature of a section.
///
/// # Returns
///
/// * `Ok(MomentCurvatureResult)` - the three limit states plus `k1`, `λr1`, `ω`
/// * `Err(CalcError::InvalidInput)` - inputs out of range
/// * `Err(CalcError::Domain)` - no real closed-form solution (negative
///   radicand, vanishing coefficient)
pub fn compute_moment_curvature(section: &SectionInputs) -> CalcResult<MomentCurvatureResult> {
    let props = DerivedProperties::resolve(section)?;
    compute_with_properties(section, &props)
}

/// Calculate a labelled moment-curvature item.
pub fn calculate(input: &MomentCurvatureInput) -> CalcResult<MomentCurvatureResult> {
    compute_moment_curvature(&input.section)
}
