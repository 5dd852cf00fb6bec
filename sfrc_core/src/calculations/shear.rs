//! # Shear Capacity (Critical Shear Displacement Theory)
//!
//! Shear capacity of an SFRC-RC section without stirrups, split into the four
//! mechanisms of the Critical Shear Displacement Theory as extended to steel
//! fibers by Lantsoght (2023), "Theoretical model of shear capacity of steel
//! fiber reinforced concrete beams", Engineering Structures 280: 115722.
//!
//! | Mechanism              | Symbol |
//! |------------------------|--------|
//! | Dowel action           | Vd     |
//! | Uncracked compression  | Vc     |
//! | Aggregate interlock    | Vai    |
//! | Fiber bridging         | VF     |
//!
//! `VCSDT = Vd + Vc + Vai + VF`, with no clamping of the sum.
//!
//! The compression-zone depth and the average crack strain both depend on
//! where the demand moment sits on the moment-curvature response, so the
//! moment-curvature engine always runs first.

use std::f64::consts::PI;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::calculations::moment_curvature::{compute_moment_curvature, MomentCurvatureResult};
use crate::equations::{checked_div, PiecewiseLinear, Segment};
use crate::errors::{CalcError, CalcResult};
use crate::materials::FiberProperties;
use crate::section::SectionInputs;
use crate::units::{Kilonewtons, Newtons};

/// Longitudinal tension bars.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reinforcement {
    /// Bar diameter φ (mm)
    pub phibar_mm: f64,
    /// Number of bars in the tension layer
    pub ns: u32,
}

impl Reinforcement {
    pub fn validate(&self) -> CalcResult<()> {
        if !self.phibar_mm.is_finite() || self.phibar_mm <= 0.0 {
            return Err(CalcError::invalid_input(
                "phibar_mm",
                self.phibar_mm.to_string(),
                "Bar diameter must be positive",
            ));
        }
        if self.ns == 0 {
            return Err(CalcError::invalid_input(
                "ns",
                "0",
                "At least one bar is required",
            ));
        }
        Ok(())
    }
}

/// Factored moment and shear acting at the section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShearDemand {
    /// Moment M (kN·m)
    pub m_knm: f64,
    /// Shear V (kN)
    pub v_kn: f64,
}

impl ShearDemand {
    pub fn validate(&self) -> CalcResult<()> {
        if !self.m_knm.is_finite() {
            return Err(CalcError::invalid_input(
                "m_knm",
                self.m_knm.to_string(),
                "Demand moment must be finite",
            ));
        }
        if !self.v_kn.is_finite() {
            return Err(CalcError::invalid_input(
                "v_kn",
                self.v_kn.to_string(),
                "Demand shear must be finite",
            ));
        }
        Ok(())
    }
}

/// Input parameters for a shear capacity calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "B-1 support",
///   "section": { "fc_mpa": 28.0, "daggmax_mm": 16.0, "...": "..." },
///   "reinforcement": { "phibar_mm": 12.0, "ns": 2 },
///   "demand": { "m_knm": 48.16, "v_kn": 81.08 }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShearInput {
    pub label: String,
    pub section: SectionInputs,
    pub reinforcement: Reinforcement,
    pub demand: ShearDemand,
}

impl ShearInput {
    pub fn validate(&self) -> CalcResult<()> {
        self.section.validate()?;
        self.reinforcement.validate()?;
        self.demand.validate()
    }
}

/// Intermediate quantities of the shear model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShearDetails {
    /// Net width for dowel action (mm)
    pub bn_mm: f64,
    /// True when `b - ns·φ` was not positive and `b - ns/2·φ` was used
    pub bn_fallback: bool,
    /// Interpolation segment of the demand moment (1 = up to cracking,
    /// 2 = cracking to yielding, 3 = beyond yielding)
    pub segment: Segment,
    /// Smeared neutral-axis depth ratio at M
    pub kcsm: f64,
    /// Normalized curvature at M
    pub lambda_m: f64,
    /// Compression-zone depth zc = kcsm·h (mm)
    pub zc_mm: f64,
    /// Lever arm z = d - zc/3 (mm)
    pub z_mm: f64,
    /// Roughness parameter D (mm)
    pub roughness_mm: f64,
    /// Bar spacing term sb (mm)
    pub sb_mm: f64,
    /// Fiber slenderness factor kf = max(lf/(50·df), 1)
    pub kf: f64,
    /// Inverse spacing term smi
    pub smi: f64,
    /// Fiber crack-spacing reduction kc3
    pub kc3: f64,
    /// Mean crack spacing sm (mm)
    pub sm_mm: f64,
    /// Average crack strain εtavg
    pub etavg: f64,
    /// Crack width at the bar wb (mm)
    pub wb_mm: f64,
    /// Fiber bond strength τ (MPa)
    pub tau_mpa: f64,
    /// Single-fiber pull-out force (N)
    pub pullout_force_n: f64,
    /// Fibers crossing a unit area (1/mm²)
    pub fibers_per_mm2: f64,
    /// Ultimate bridging stress σfu (MPa)
    pub sigma_fu_mpa: f64,
}

/// Each mechanism's share of the total, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MechanismShares {
    pub dowel_pct: f64,
    pub compression_pct: f64,
    pub interlock_pct: f64,
    pub fiber_pct: f64,
}

/// The four shear mechanisms and their total (kN).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShearContributions {
    /// Dowel action Vd
    pub vd_kn: f64,
    /// Uncracked compression zone Vc
    pub vc_kn: f64,
    /// Aggregate interlock Vai
    pub vai_kn: f64,
    /// Fiber bridging VF
    pub vf_kn: f64,
    /// Total VCSDT
    pub vcsdt_kn: f64,
    pub details: ShearDetails,
}

impl ShearContributions {
    /// Shear capacity (kN)
    pub fn capacity_kn(&self) -> f64 {
        self.vcsdt_kn
    }

    /// Percentage split of the total, or `None` when the total is zero.
    pub fn shares(&self) -> Option<MechanismShares> {
        let pct = |v: f64| checked_div("VCSDT", v * 100.0, self.vcsdt_kn).ok();
        Some(MechanismShares {
            dowel_pct: pct(self.vd_kn)?,
            compression_pct: pct(self.vc_kn)?,
            interlock_pct: pct(self.vai_kn)?,
            fiber_pct: pct(self.vf_kn)?,
        })
    }
}

/// Net width available for dowel action.
///
/// Returns the width and whether the half-bar fallback was taken.
pub fn dowel_net_width(b_mm: f64, reinforcement: &Reinforcement) -> (f64, bool) {
    let ns = f64::from(reinforcement.ns);
    let bn = b_mm - ns * reinforcement.phibar_mm;
    if bn <= 0.0 {
        (b_mm - ns / 2.0 * reinforcement.phibar_mm, true)
    } else {
        (bn, false)
    }
}

/// Neutral-axis ratio against moment: (0,k1), (Mcr,k1), (My,k2y), (Mult,k3u)
pub fn neutral_axis_curve(mc: &MomentCurvatureResult) -> CalcResult<PiecewiseLinear> {
    PiecewiseLinear::new(vec![
        (0.0, mc.k1),
        (mc.cracking.moment_knm, mc.k1),
        (mc.yielding.moment_knm, mc.yielding.k),
        (mc.ultimate.moment_knm, mc.ultimate.k),
    ])
}

/// Normalized curvature against moment: (0,0), (Mcr,λr1), (My,ω), (Mult,2ω-λr1)
pub fn curvature_ratio_curve(mc: &MomentCurvatureResult) -> CalcResult<PiecewiseLinear> {
    PiecewiseLinear::new(vec![
        (0.0, 0.0),
        (mc.cracking.moment_knm, mc.lambdar1),
        (mc.yielding.moment_knm, mc.om),
        (mc.ultimate.moment_knm, 2.0 * mc.om - mc.lambdar1),
    ])
}

/// Shear capacity using an already computed moment-curvature response of the
/// same section.
pub fn shear_with_moment_curvature(
    section: &SectionInputs,
    reinforcement: &Reinforcement,
    demand: &ShearDemand,
    mc: &MomentCurvatureResult,
) -> CalcResult<ShearContributions> {
    reinforcement.validate()?;
    demand.validate()?;

    let SectionInputs {
        fc_mpa: fc,
        daggmax_mm: daggmax,
        b_mm: b,
        d_mm: d,
        h_mm: h,
        ..
    } = *section;
    let phibar = reinforcement.phibar_mm;
    let props = &mc.properties;
    let fibers: FiberProperties = section.fibers();
    let (vf_frac, lf, df) = (fibers.vf, fibers.lf_mm, fibers.df_mm);

    // Dowel action
    let (bn, bn_fallback) = dowel_net_width(b, reinforcement);
    if bn_fallback {
        warn!(
            "net width b - ns*phibar is not positive for b={} mm, ns={}, phibar={} mm; \
             using b - ns/2*phibar = {} mm",
            b, reinforcement.ns, phibar, bn
        );
    }
    let vd: Kilonewtons = Newtons(1.64 * bn * phibar * fc.powf(1.0 / 3.0)).into();

    // Neutral axis at the demand moment
    let m = demand.m_knm;
    let kcsm_curve = neutral_axis_curve(mc)?;
    let segment = kcsm_curve.segment_for(m);
    let kcsm = kcsm_curve.evaluate(m)?;
    let lambda_m = curvature_ratio_curve(mc)?.evaluate(m)?;
    debug!(
        "shear: M={} kNm in segment {} -> kcsm={:.6} lambdaM={:.6}",
        m, segment.0, kcsm, lambda_m
    );

    let zc = kcsm * h;
    let z = d - 1.0 / 3.0 * zc;

    // Compression zone
    let vc = 2.0 / 3.0 * checked_div("Vc", zc, z)? * demand.v_kn;

    // Aggregate interlock
    let rho = props.rho;
    let roughness = (25.0 * d / (30610.0 * phibar) + 0.0022).min(0.025);
    let sb = (15.0 * phibar).min(0.5 * (PI * phibar).sqrt().powi(2) / rho);
    let kf = (lf / (50.0 * df)).max(1.0);
    let smi = rho / phibar + kf * 0.5 * vf_frac / df;
    let kc3 = 1.0 - vf_frac.min(0.015) / 0.015 * (1.0 - 1.0 / kf);
    let sm = 2.0 * (1.5 * daggmax + sb / 10.0) * kc3 + 0.4 * 0.125 / smi;
    let etavg = checked_div("etavg", h - zc, 2.0 * zc)? * lambda_m * props.ecr;
    let wb = sm * etavg * (1.7 + 3.4 * vf_frac * lf / df);
    let roughness_term = -978.0 * roughness.powi(2) + 85.0 * roughness - 0.27;
    let vai: Kilonewtons = Newtons(
        fc.max(60.0).powf(0.56) * sm * b * checked_div("Vai", 0.03, wb - 0.01)? * roughness_term,
    )
    .into();

    // Fiber bridging
    let vf: Kilonewtons =
        Newtons(0.41 * 0.68 * fc.sqrt() * fibers.capped_fiber_factor() * b * (d - zc)).into();

    let vcsdt = vd.0 + vc + vai.0 + vf.0;

    Ok(ShearContributions {
        vd_kn: vd.0,
        vc_kn: vc,
        vai_kn: vai.0,
        vf_kn: vf.0,
        vcsdt_kn: vcsdt,
        details: ShearDetails {
            bn_mm: bn,
            bn_fallback,
            segment,
            kcsm,
            lambda_m,
            zc_mm: zc,
            z_mm: z,
            roughness_mm: roughness,
            sb_mm: sb,
            kf,
            smi,
            kc3,
            sm_mm: sm,
            etavg,
            wb_mm: wb,
            tau_mpa: FiberProperties::bond_strength(fc),
            pullout_force_n: fibers.pullout_force(fc),
            fibers_per_mm2: fibers.fibers_per_area(),
            sigma_fu_mpa: fibers.bridging_stress(fc),
        },
    })
}

/// Compute the shear capacity of a section under a moment/shear demand.
///
/// Runs the moment-curvature engine first.
///
/// # Returns
///
/// * `Ok(ShearContributions)` - the four mechanisms and their total
/// * `Err(CalcError::InvalidInput)` - section, bars or demand out of range
/// * `Err(CalcError::Domain)` - no admissible closed-form state, or a crack
///   width that makes the interlock denominator `wb - 0.01` vanish
///
/// # Example
///
/// ```rust
/// use sfrc_core::calculations::shear::{compute_shear_capacity, Reinforcement, ShearDemand};
/// use sfrc_core::section::SectionInputs;
///
/// let section = SectionInputs {
///     fc_mpa: 28.0, daggmax_mm: 16.0, fy_mpa: 400.0, as_mm2: 226.0,
///     rhof: 1.0, vf: 0.005, df_mm: 0.55, lf_mm: 35.0,
///     b_mm: 120.0, d_mm: 435.0, h_mm: 500.0,
/// };
/// let bars = Reinforcement { phibar_mm: 12.0, ns: 2 };
/// let demand = ShearDemand { m_knm: 48.16, v_kn: 81.08 };
///
/// let shear = compute_shear_capacity(&section, &bars, &demand).unwrap();
/// assert!((shear.vcsdt_kn - 32.085).abs() < 1e-3);
/// ```
pub fn compute_shear_capacity(
    section: &SectionInputs,
    reinforcement: &Reinforcement,
    demand: &ShearDemand,
) -> CalcResult<ShearContributions> {
    let mc = compute_moment_curvature(section)?;
    shear_with_moment_curvature(section, reinforcement, demand, &mc)
}

/// Calculate a labelled shear item.
pub fn calculate(input: &ShearInput) -> CalcResult<ShearContributions> {
    input.validate()?;
    compute_shear_capacity(&input.section, &input.reinforcement, &input.demand)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_section() -> SectionInputs {
        SectionInputs {
            fc_mpa: 28.0,
            daggmax_mm: 16.0,
            fy_mpa: 400.0,
            as_mm2: 226.0,
            rhof: 1.0,
            vf: 0.005,
            df_mm: 0.55,
            lf_mm: 35.0,
            b_mm: 120.0,
            d_mm: 435.0,
            h_mm: 500.0,
        }
    }

    fn bars() -> Reinforcement {
        Reinforcement { phibar_mm: 12.0, ns: 2 }
    }

    fn demand() -> ShearDemand {
        ShearDemand { m_knm: 48.16, v_kn: 81.08 }
    }

    fn rel_close(actual: f64, expected: f64) -> bool {
        ((actual - expected) / expected).abs() < 1e-6
    }

    #[test]
    fn test_reference_mechanisms() {
        let shear = compute_shear_capacity(&test_section(), &bars(), &demand()).unwrap();
        assert!(rel_close(shear.vd_kn, 5.736_966_812_785_251));
        assert!(rel_close(shear.vc_kn, 2.462_157_078_908_472_6));
        assert!(rel_close(shear.vai_kn, 0.482_800_620_301_351_24));
        assert!(rel_close(shear.vf_kn, 23.403_482_080_275_513));
        assert!(rel_close(shear.vcsdt_kn, 32.085_406_592_270_59));
    }

    #[test]
    fn test_reference_details() {
        let shear = compute_shear_capacity(&test_section(), &bars(), &demand()).unwrap();
        let details = shear.details;
        // 48.16 kNm lies beyond the yield moment
        assert_eq!(details.segment, Segment(3));
        assert!(!details.bn_fallback);
        assert_eq!(details.bn_mm, 96.0);
        assert!(rel_close(details.kcsm, 0.039_036_239_653_152_06));
        assert!(rel_close(details.lambda_m, 19.791_912_317_678_225));
        assert!(rel_close(details.zc_mm, 19.518_119_826_576_03));
        assert!(rel_close(details.z_mm, 428.493_960_057_808));
        assert!(rel_close(details.sm_mm, 86.135_484_064_865_42));
        assert!(rel_close(details.etavg, 0.033_056_158_635_149_53));
        assert!(rel_close(details.wb_mm, 7.920_693_790_556_885));
    }

    #[test]
    fn test_total_is_exact_sum() {
        let shear = compute_shear_capacity(&test_section(), &bars(), &demand()).unwrap();
        assert_eq!(shear.vcsdt_kn, shear.vd_kn + shear.vc_kn + shear.vai_kn + shear.vf_kn);
    }

    #[test]
    fn test_shares_sum_to_hundred() {
        let shear = compute_shear_capacity(&test_section(), &bars(), &demand()).unwrap();
        let s = shear.shares().unwrap();
        let total = s.dowel_pct + s.compression_pct + s.interlock_pct + s.fiber_pct;
        assert!((total - 100.0).abs() < 1e-9);
        assert!(s.fiber_pct > s.dowel_pct);
    }

    #[test]
    fn test_dowel_width_fallback() {
        let (bn, fallback) = dowel_net_width(120.0, &Reinforcement { phibar_mm: 25.0, ns: 5 });
        assert!(fallback);
        assert_eq!(bn, 120.0 - 2.5 * 25.0);

        let (bn, fallback) = dowel_net_width(120.0, &bars());
        assert!(!fallback);
        assert_eq!(bn, 96.0);
    }

    #[test]
    fn test_demand_below_cracking_uses_k1() {
        let mc = compute_moment_curvature(&test_section()).unwrap();
        let low = ShearDemand { m_knm: 5.0, v_kn: 20.0 };
        let shear = shear_with_moment_curvature(&test_section(), &bars(), &low, &mc).unwrap();
        assert_eq!(shear.details.segment, Segment(1));
        assert_eq!(shear.details.kcsm, mc.k1);
        let expected = 5.0 / mc.cracking.moment_knm * mc.lambdar1;
        assert!((shear.details.lambda_m - expected).abs() < 1e-12);
    }

    #[test]
    fn test_demand_between_cracking_and_yielding() {
        let mc = compute_moment_curvature(&test_section()).unwrap();
        let mid = ShearDemand { m_knm: 30.0, v_kn: 50.0 };
        let shear = shear_with_moment_curvature(&test_section(), &bars(), &mid, &mc).unwrap();
        assert_eq!(shear.details.segment, Segment(2));
        assert!(shear.details.kcsm < mc.k1);
        assert!(shear.details.kcsm > mc.yielding.k);
    }

    #[test]
    fn test_bar_spacing_term_for_dense_reinforcement() {
        let mut mc = compute_moment_curvature(&test_section()).unwrap();
        let reference =
            shear_with_moment_curvature(&test_section(), &bars(), &demand(), &mc).unwrap();
        assert_eq!(reference.details.sb_mm, 180.0);

        mc.properties.rho = 0.2;
        let dense = shear_with_moment_curvature(&test_section(), &bars(), &demand(), &mc).unwrap();
        let expected = 0.5 * (PI * 12.0).sqrt().powi(2) / 0.2;
        assert_eq!(dense.details.sb_mm.to_bits(), expected.to_bits());
        assert!(dense.details.sb_mm < 180.0);
    }

    #[test]
    fn test_collapsed_cracking_segment_is_domain_error() {
        let mut mc = compute_moment_curvature(&test_section()).unwrap();
        mc.cracking.moment_knm = 0.0;
        let zero = ShearDemand { m_knm: 0.0, v_kn: 10.0 };
        let err = shear_with_moment_curvature(&test_section(), &bars(), &zero, &mc).unwrap_err();
        assert_eq!(err.error_code(), "DOMAIN_ERROR");
    }

    #[test]
    fn test_zero_bars_rejected() {
        let input = ShearInput {
            label: "bad".to_string(),
            section: test_section(),
            reinforcement: Reinforcement { phibar_mm: 12.0, ns: 0 },
            demand: demand(),
        };
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_non_finite_demand_rejected() {
        let bad = ShearDemand { m_knm: f64::INFINITY, v_kn: 10.0 };
        assert!(compute_shear_capacity(&test_section(), &bars(), &bad).is_err());
    }

    #[test]
    fn test_calculate_matches_direct_call() {
        let input = ShearInput {
            label: "B-1".to_string(),
            section: test_section(),
            reinforcement: bars(),
            demand: demand(),
        };
        let a = calculate(&input).unwrap();
        let b =
            compute_shear_capacity(&input.section, &input.reinforcement, &input.demand).unwrap();
        assert_eq!(a, b);
    }
}
