//! Plain-concrete properties for the SFRC section model.
//!
//! Moduli follow the expressions used by Mobasher et al. (2015); the
//! flexural tensile strength bands and the size-effect factor follow
//! RILEM TC 162-TDF (2003).

use serde::{Deserialize, Serialize};

/// One band of the flexural tensile strength table.
///
/// A band applies when `fc < upper_fc_mpa` (exclusive upper bound) and no
/// earlier band applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TensileBand {
    /// Exclusive upper bound on cylinder strength (MPa)
    pub upper_fc_mpa: f64,
    /// Mean flexural tensile strength for the band (MPa)
    pub ffctmfl_mpa: f64,
}

/// Flexural tensile strength bands, checked in order
pub static FLEXURAL_TENSILE_BANDS: [TensileBand; 6] = [
    TensileBand { upper_fc_mpa: 20.5, ffctmfl_mpa: 3.7 },
    TensileBand { upper_fc_mpa: 25.5, ffctmfl_mpa: 4.3 },
    TensileBand { upper_fc_mpa: 30.5, ffctmfl_mpa: 4.8 },
    TensileBand { upper_fc_mpa: 35.5, ffctmfl_mpa: 5.3 },
    TensileBand { upper_fc_mpa: 40.5, ffctmfl_mpa: 5.8 },
    TensileBand { upper_fc_mpa: 45.5, ffctmfl_mpa: 6.3 },
];

/// Flexural tensile strength for `fc` at or above the last band bound
pub const FLEXURAL_TENSILE_CAP_MPA: f64 = 6.8;

/// Ratio between cylinder and cube strength
pub const CYLINDER_TO_CUBE: f64 = 0.82;

/// Mean flexural tensile strength `ffctmfl` (MPa) for a cylinder strength.
///
/// ```rust
/// use sfrc_core::materials::concrete::flexural_tensile_strength;
///
/// assert_eq!(flexural_tensile_strength(20.4), 3.7);
/// assert_eq!(flexural_tensile_strength(20.5), 4.3);
/// assert_eq!(flexural_tensile_strength(80.0), 6.8);
/// ```
pub fn flexural_tensile_strength(fc_mpa: f64) -> f64 {
    FLEXURAL_TENSILE_BANDS
        .iter()
        .find(|band| fc_mpa < band.upper_fc_mpa)
        .map_or(FLEXURAL_TENSILE_CAP_MPA, |band| band.ffctmfl_mpa)
}

/// Size-effect factor `kh` for section height `h` (mm).
///
/// Works on the height in cm: 1.0 up to 12.5 cm, linear down to 0.4 below
/// 60 cm, 0.4 from 60 cm on.
pub fn size_effect_factor(h_mm: f64) -> f64 {
    let h_cm = h_mm / 10.0;
    if h_cm > 12.5 {
        if h_cm < 60.0 {
            1.0 - 0.6 * (h_cm - 12.5) / 47.5
        } else {
            0.4
        }
    } else {
        1.0
    }
}

/// Young's modulus of concrete `Ec = 57000/12 · √fc` (MPa)
pub fn concrete_modulus(fc_mpa: f64) -> f64 {
    57000.0 / 12.0 * fc_mpa.sqrt()
}

/// Tensile modulus of SFRC `Eten = 9500 · fc^(1/3)` (MPa)
pub fn tensile_modulus(fc_mpa: f64) -> f64 {
    9500.0 * fc_mpa.powf(1.0 / 3.0)
}

/// Cube strength from cylinder strength (MPa)
pub fn cube_strength(fc_mpa: f64) -> f64 {
    fc_mpa / CYLINDER_TO_CUBE
}

/// Concrete properties derived from the cylinder strength alone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConcreteProperties {
    /// Cylinder compressive strength fc (MPa)
    pub fc_mpa: f64,
    /// Young's modulus Ec (MPa)
    pub ec_mpa: f64,
    /// Tensile modulus Eten (MPa)
    pub eten_mpa: f64,
    /// Compressive strain at fc, ecy = fc/Ec
    pub ecy: f64,
    /// Mean flexural tensile strength ffctmfl (MPa)
    pub ffctmfl_mpa: f64,
    /// Cube strength fcuf (MPa)
    pub fcuf_mpa: f64,
}

impl ConcreteProperties {
    /// Derive all concrete properties from `fc`
    pub fn from_strength(fc_mpa: f64) -> Self {
        let ec_mpa = concrete_modulus(fc_mpa);
        ConcreteProperties {
            fc_mpa,
            ec_mpa,
            eten_mpa: tensile_modulus(fc_mpa),
            ecy: fc_mpa / ec_mpa,
            ffctmfl_mpa: flexural_tensile_strength(fc_mpa),
            fcuf_mpa: cube_strength(fc_mpa),
        }
    }
}
