//! # Section Inputs and Derived Properties
//!
//! [`SectionInputs`] holds the raw geometry and material description of a
//! rectangular SFRC-RC beam section with tensile reinforcement only.
//! [`DerivedProperties::resolve`] turns it into every scalar the
//! moment-curvature and shear models consume. Both are immutable value
//! records created once per evaluation.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "fc_mpa": 28.0,
//!   "daggmax_mm": 16.0,
//!   "fy_mpa": 400.0,
//!   "as_mm2": 226.0,
//!   "rhof": 1.0,
//!   "vf": 0.005,
//!   "df_mm": 0.55,
//!   "lf_mm": 35.0,
//!   "b_mm": 120.0,
//!   "d_mm": 435.0,
//!   "h_mm": 500.0
//! }
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::equations::checked_div;
use crate::errors::{CalcError, CalcResult};
use crate::materials::{
    size_effect_factor, yield_strain, ConcreteProperties, FiberProperties, ECU, ES_MPA,
};

/// Geometry and materials of a rectangular SFRC-RC section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionInputs {
    /// Concrete cylinder compressive strength fc (MPa)
    pub fc_mpa: f64,
    /// Maximum aggregate size (mm)
    pub daggmax_mm: f64,
    /// Yield strength of the reinforcing steel fy (MPa)
    pub fy_mpa: f64,
    /// Area of tensile reinforcement As (mm²)
    pub as_mm2: f64,
    /// Fiber bond factor ρf (-)
    pub rhof: f64,
    /// Fiber volume fraction Vf (-)
    pub vf: f64,
    /// Fiber diameter df (mm)
    pub df_mm: f64,
    /// Fiber length lf (mm)
    pub lf_mm: f64,
    /// Section width b (mm)
    pub b_mm: f64,
    /// Effective depth d (mm)
    pub d_mm: f64,
    /// Overall height h (mm)
    pub h_mm: f64,
}

fn require_finite(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            "Value must be a finite number",
        ));
    }
    Ok(())
}

fn require_positive(field: &str, value: f64, reason: &str) -> CalcResult<()> {
    require_finite(field, value)?;
    if value <= 0.0 {
        return Err(CalcError::invalid_input(field, value.to_string(), reason));
    }
    Ok(())
}

fn require_non_negative(field: &str, value: f64, reason: &str) -> CalcResult<()> {
    require_finite(field, value)?;
    if value < 0.0 {
        return Err(CalcError::invalid_input(field, value.to_string(), reason));
    }
    Ok(())
}

impl SectionInputs {
    /// Validate input ranges.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("fc_mpa", self.fc_mpa, "Concrete strength must be positive")?;
        require_positive("daggmax_mm", self.daggmax_mm, "Aggregate size must be positive")?;
        require_positive("fy_mpa", self.fy_mpa, "Steel yield strength must be positive")?;
        require_positive("as_mm2", self.as_mm2, "Reinforcement area must be positive")?;
        require_non_negative("rhof", self.rhof, "Fiber bond factor cannot be negative")?;
        require_non_negative("vf", self.vf, "Fiber volume fraction cannot be negative")?;
        require_positive("df_mm", self.df_mm, "Fiber diameter must be positive")?;
        require_positive("lf_mm", self.lf_mm, "Fiber length must be positive")?;
        require_positive("b_mm", self.b_mm, "Width must be positive")?;
        require_positive("d_mm", self.d_mm, "Effective depth must be positive")?;
        require_positive("h_mm", self.h_mm, "Height must be positive")?;
        if self.d_mm >= self.h_mm {
            return Err(CalcError::invalid_input(
                "d_mm",
                self.d_mm.to_string(),
                format!("Effective depth must be less than height ({} mm)", self.h_mm),
            ));
        }
        Ok(())
    }

    /// Reinforcement ratio on the effective depth ρ = As/(b·d)
    pub fn reinforcement_ratio(&self) -> f64 {
        self.as_mm2 / (self.b_mm * self.d_mm)
    }

    /// Reinforcement ratio on the gross height ρg = As/(b·h)
    pub fn gross_reinforcement_ratio(&self) -> f64 {
        self.as_mm2 / (self.b_mm * self.h_mm)
    }

    /// Fiber description of this section
    pub fn fibers(&self) -> FiberProperties {
        FiberProperties::new(self.rhof, self.vf, self.df_mm, self.lf_mm)
    }
}

/// Material and cross-section scalars resolved from [`SectionInputs`].
///
/// Strains are dimensionless; stresses and moduli are in MPa.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedProperties {
    /// Concrete modulus Ec
    pub ec_mpa: f64,
    /// Tensile modulus Eten
    pub eten_mpa: f64,
    /// Compressive strain at peak stress εcy = fc/Ec
    pub ecy: f64,
    /// Ultimate compressive strain εcu
    pub ecu: f64,
    /// Steel modulus Es
    pub es_mpa: f64,
    /// Steel yield strain εsy = fy/Es
    pub esy: f64,
    /// Modular ratio n = Es/Eten
    pub n: f64,
    /// Reinforcement ratio ρ = As/(b·d)
    pub rho: f64,
    /// Gross reinforcement ratio ρg = As/(b·h)
    pub rhog: f64,
    /// Fiber factor F
    pub fiber_factor: f64,
    /// Equivalent fiber tensile strength σt
    pub sigma_t_mpa: f64,
    /// Mean flexural tensile strength ffctm,fl
    pub ffctmfl_mpa: f64,
    /// Cube strength fcu,f
    pub fcuf_mpa: f64,
    /// Residual flexural strength fR4
    pub fr4_mpa: f64,
    /// Tensile strength σ1 = 0.7·ffctm,fl·(1.6 - d/1000)
    pub sigma1_mpa: f64,
    /// Size-effect factor κh
    pub kh: f64,
    /// Post-crack stress σ2 = 0.45·κh·ffctm,fl
    pub sigma2_mpa: f64,
    /// Post-crack stress σ3 = 0.37·fR4·κh
    pub sigma3_mpa: f64,
    /// Mean post-crack stress σp = (σ2 + σ3)/2
    pub sigmap_mpa: f64,
    /// Cracking strain εcr = σ1/Eten
    pub ecr: f64,
    /// Normalized ultimate strain λcu = εcu/εcr
    pub lambdacu: f64,
    /// Post-crack stress ratio μ = σp/σ1
    pub mu: f64,
    /// Normalized compressive strain ω = εcy/εcr
    pub om: f64,
    /// Depth ratio α = d/h
    pub alpha: f64,
    /// Normalized yield strain κ = εsy/εcr
    pub kappa: f64,
}

impl DerivedProperties {
    /// Resolve all derived scalars for a section.
    ///
    /// Validates the inputs first. Fails with a domain error when the
    /// tensile strength σ1 is not positive (effective depth of 1600 mm or
    /// more), since every normalized strain divides by it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sfrc_core::section::{DerivedProperties, SectionInputs};
    ///
    /// let section = SectionInputs {
    ///     fc_mpa: 28.0, daggmax_mm: 16.0, fy_mpa: 400.0, as_mm2: 226.0,
    ///     rhof: 1.0, vf: 0.005, df_mm: 0.55, lf_mm: 35.0,
    ///     b_mm: 120.0, d_mm: 435.0, h_mm: 500.0,
    /// };
    /// let props = DerivedProperties::resolve(&section).unwrap();
    /// assert_eq!(props.ecu, 0.0035);
    /// assert_eq!(props.ffctmfl_mpa, 4.8);
    /// ```
    pub fn resolve(section: &SectionInputs) -> CalcResult<Self> {
        section.validate()?;

        let concrete = ConcreteProperties::from_strength(section.fc_mpa);
        let fibers = section.fibers();

        let esy = yield_strain(section.fy_mpa);
        let fr4_mpa = fibers.residual_flexural_strength(concrete.fcuf_mpa);
        let kh = size_effect_factor(section.h_mm);

        let sigma1_mpa = 0.7 * concrete.ffctmfl_mpa * (1.6 - section.d_mm / 1000.0);
        if sigma1_mpa <= 0.0 {
            return Err(CalcError::domain(
                "sigma1",
                format!(
                    "tensile strength {sigma1_mpa} MPa is not positive for d = {} mm",
                    section.d_mm
                ),
            ));
        }
        let sigma2_mpa = 0.45 * kh * concrete.ffctmfl_mpa;
        let sigma3_mpa = 0.37 * fr4_mpa * kh;
        let sigmap_mpa = 1.0 / 2.0 * (sigma2_mpa + sigma3_mpa);

        let ecr = checked_div("ecr", sigma1_mpa, concrete.eten_mpa)?;

        let props = DerivedProperties {
            ec_mpa: concrete.ec_mpa,
            eten_mpa: concrete.eten_mpa,
            ecy: concrete.ecy,
            ecu: ECU,
            es_mpa: ES_MPA,
            esy,
            n: ES_MPA / concrete.eten_mpa,
            rho: section.reinforcement_ratio(),
            rhog: section.gross_reinforcement_ratio(),
            fiber_factor: fibers.fiber_factor,
            sigma_t_mpa: fibers.sigma_t_mpa,
            ffctmfl_mpa: concrete.ffctmfl_mpa,
            fcuf_mpa: concrete.fcuf_mpa,
            fr4_mpa,
            sigma1_mpa,
            kh,
            sigma2_mpa,
            sigma3_mpa,
            sigmap_mpa,
            ecr,
            lambdacu: checked_div("lambdacu", ECU, ecr)?,
            mu: sigmap_mpa / sigma1_mpa,
            om: checked_div("om", concrete.ecy, ecr)?,
            alpha: section.d_mm / section.h_mm,
            kappa: checked_div("kappa", esy, ecr)?,
        };

        debug!(
            "resolved section: ecr={:.6e} lambdacu={:.4} mu={:.4} om={:.4} kappa={:.4} kh={:.4}",
            props.ecr, props.lambdacu, props.mu, props.om, props.kappa, props.kh
        );

        Ok(props)
    }
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

    #[test]
    fn test_reinforcement_ratios() {
        let s = test_section();
        assert!((s.reinforcement_ratio() - 226.0 / (120.0 * 435.0)).abs() < 1e-15);
        assert!((s.gross_reinforcement_ratio() - 226.0 / (120.0 * 500.0)).abs() < 1e-15);
    }

    #[test]
    fn test_fixed_constants() {
        let props = DerivedProperties::resolve(&test_section()).unwrap();
        assert_eq!(props.ecu, 0.0035);
        assert_eq!(props.es_mpa, 200_000.0);
        assert_eq!(props.esy, 0.002);
        assert_eq!(props.alpha, 0.87);
    }

    #[test]
    fn test_cracking_strain() {
        let props = DerivedProperties::resolve(&test_section()).unwrap();
        // σ1 = 0.7 * 4.8 * (1.6 - 0.435)
        assert!((props.sigma1_mpa - 3.9144).abs() < 1e-12);
        assert!((props.ecr - 1.356_924_197e-4).abs() < 1e-12);
    }

    #[test]
    fn test_normalized_ratios() {
        let props = DerivedProperties::resolve(&test_section()).unwrap();
        assert!((props.om - props.ecy / props.ecr).abs() < 1e-12);
        assert!((props.om - 8.209_747_857_658_195).abs() < 1e-9);
        assert!((props.lambdacu - 0.0035 / props.ecr).abs() < 1e-9);
        assert!((props.kappa - 0.002 / props.ecr).abs() < 1e-9);
        assert!((props.mu - props.sigmap_mpa / props.sigma1_mpa).abs() < 1e-15);
    }

    #[test]
    fn test_size_effect_at_60_cm() {
        let mut s = test_section();
        s.h_mm = 600.0;
        s.d_mm = 540.0;
        let props = DerivedProperties::resolve(&s).unwrap();
        assert_eq!(props.kh, 0.4);
    }

    #[test]
    fn test_band_boundary() {
        let mut s = test_section();
        s.fc_mpa = 20.5;
        let props = DerivedProperties::resolve(&s).unwrap();
        assert_eq!(props.ffctmfl_mpa, 4.3);
    }

    #[test]
    fn test_depth_must_be_below_height() {
        let mut s = test_section();
        s.d_mm = 500.0;
        let err = DerivedProperties::resolve(&s).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_non_positive_strength_rejected() {
        let mut s = test_section();
        s.fc_mpa = 0.0;
        assert!(s.validate().is_err());
        s.fc_mpa = f64::NAN;
        assert!(s.validate().is_err());
    }

    #[test]
    fn test_negative_fiber_volume_rejected() {
        let mut s = test_section();
        s.vf = -0.001;
        assert!(s.validate().is_err());
        s.vf = 0.0;
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_very_deep_section_is_domain_error() {
        let mut s = test_section();
        s.d_mm = 1650.0;
        s.h_mm = 1700.0;
        let err = DerivedProperties::resolve(&s).unwrap_err();
        assert_eq!(err.error_code(), "DOMAIN_ERROR");
    }

    #[test]
    fn test_json_roundtrip() {
        let s = test_section();
        let json = serde_json::to_string(&s).unwrap();
        assert!(json.contains("\"as_mm2\":226.0"));
        let back: SectionInputs = serde_json::from_str(&json).unwrap();
        assert_eq!(s, back);
    }
}
