//! Steel fiber properties.
//!
//! The fiber factor `F = Vf · (lf/df) · ρf` drives both the post-cracking
//! tensile response in flexure and the fiber-bridging shear term.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

/// Fiber dosage and geometry with the derived strength measures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FiberProperties {
    /// Fiber bond factor ρf (-)
    pub rhof: f64,
    /// Fiber volume fraction Vf (-)
    pub vf: f64,
    /// Fiber diameter df (mm)
    pub df_mm: f64,
    /// Fiber length lf (mm)
    pub lf_mm: f64,
    /// Fiber factor F = Vf·lf/df·ρf (-)
    pub fiber_factor: f64,
    /// Equivalent tensile strength σt = 0.772·(lf/df)·Vf·ρf (MPa)
    pub sigma_t_mpa: f64,
}

impl FiberProperties {
    pub fn new(rhof: f64, vf: f64, df_mm: f64, lf_mm: f64) -> Self {
        FiberProperties {
            rhof,
            vf,
            df_mm,
            lf_mm,
            fiber_factor: vf * lf_mm / df_mm * rhof,
            sigma_t_mpa: 0.772 * (lf_mm / df_mm) * vf * rhof,
        }
    }

    /// Aspect ratio lf/df
    pub fn aspect_ratio(&self) -> f64 {
        self.lf_mm / self.df_mm
    }

    /// Residual flexural strength fR4 (MPa) for cube strength `fcuf`
    ///
    /// fR4 = 0.63·√fcuf + 0.288·F·√fcuf + 0.052·F
    pub fn residual_flexural_strength(&self, fcuf_mpa: f64) -> f64 {
        let f = self.fiber_factor;
        0.63 * fcuf_mpa.sqrt() + 0.288 * f * fcuf_mpa.sqrt() + 0.052 * f
    }

    /// Fiber factor capped at 1, as used by the fiber-bridging shear term
    pub fn capped_fiber_factor(&self) -> f64 {
        1.0_f64.min(self.fiber_factor)
    }

    /// Fiber-matrix bond strength τ = 0.85·√fc (MPa)
    pub fn bond_strength(fc_mpa: f64) -> f64 {
        0.85 * fc_mpa.sqrt()
    }

    /// Pull-out force of a single fiber f = τ·π·ρf·df·lf/4 (N)
    pub fn pullout_force(&self, fc_mpa: f64) -> f64 {
        Self::bond_strength(fc_mpa) * PI * self.rhof * self.df_mm * self.lf_mm / 4.0
    }

    /// Number of fibers crossing a unit area N = 0.5·Vf/(π·rf²) (1/mm²)
    pub fn fibers_per_area(&self) -> f64 {
        let rf = self.df_mm / 2.0;
        0.5 * self.vf / (PI * rf.powi(2))
    }

    /// Ultimate bridging stress σfu = N·f (MPa)
    pub fn bridging_stress(&self, fc_mpa: f64) -> f64 {
        self.fibers_per_area() * self.pullout_force(fc_mpa)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hooked() -> FiberProperties {
        FiberProperties::new(1.0, 0.005, 0.55, 35.0)
    }

    #[test]
    fn test_fiber_factor() {
        let fibers = hooked();
        // 0.005 * 35 / 0.55 = 0.31818
        assert!((fibers.fiber_factor - 0.318_181_818).abs() < 1e-8);
        assert!((fibers.aspect_ratio() - 63.636_363_6).abs() < 1e-6);
    }

    #[test]
    fn test_capped_fiber_factor() {
        assert_eq!(hooked().capped_fiber_factor(), hooked().fiber_factor);
        let dense = FiberProperties::new(1.0, 0.02, 0.55, 60.0);
        assert!(dense.fiber_factor > 1.0);
        assert_eq!(dense.capped_fiber_factor(), 1.0);
    }

    #[test]
    fn test_no_fibers() {
        let plain = FiberProperties::new(1.0, 0.0, 0.55, 35.0);
        assert_eq!(plain.fiber_factor, 0.0);
        assert_eq!(plain.sigma_t_mpa, 0.0);
        assert_eq!(plain.fibers_per_area(), 0.0);
        let fr4 = plain.residual_flexural_strength(36.0);
        assert!((fr4 - 0.63 * 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_bridging_stress_positive() {
        let fibers = hooked();
        assert!((FiberProperties::bond_strength(25.0) - 4.25).abs() < 1e-12);
        assert!(fibers.pullout_force(28.0) > 0.0);
        assert!(fibers.bridging_stress(28.0) > 0.0);
    }
}
