//! # Unit Types
//!
//! Type-safe wrappers for the force and moment units the engine converts
//! between. The closed-form section model works in N and N·mm internally
//! (stresses in MPa = N/mm², lengths in mm); every reported capacity is in
//! kN or kN·m.
//!
//! ## Example
//!
//! ```rust
//! use sfrc_core::units::{KilonewtonMeters, Kilonewtons, NewtonMillimeters, Newtons};
//!
//! let moment: KilonewtonMeters = NewtonMillimeters(14_814_046.8).into();
//! assert!((moment.0 - 14.8140468).abs() < 1e-9);
//!
//! let force: Kilonewtons = Newtons(5736.97).into();
//! assert!((force.0 - 5.73697).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Force Units
// ============================================================================

/// Force in newtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Newtons(pub f64);

/// Force in kilonewtons (1 kN = 1000 N)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilonewtons(pub f64);

impl From<Newtons> for Kilonewtons {
    fn from(n: Newtons) -> Self {
        Kilonewtons(n.0 / 1000.0)
    }
}

impl From<Kilonewtons> for Newtons {
    fn from(kn: Kilonewtons) -> Self {
        Newtons(kn.0 * 1000.0)
    }
}

// ============================================================================
// Moment Units
// ============================================================================

/// Moment in newton-millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NewtonMillimeters(pub f64);

/// Moment in kilonewton-meters (1 kN·m = 1e6 N·mm)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KilonewtonMeters(pub f64);

impl From<NewtonMillimeters> for KilonewtonMeters {
    fn from(nmm: NewtonMillimeters) -> Self {
        KilonewtonMeters(nmm.0 / 1_000_000.0)
    }
}

impl From<KilonewtonMeters> for NewtonMillimeters {
    fn from(knm: KilonewtonMeters) -> Self {
        NewtonMillimeters(knm.0 * 1_000_000.0)
    }
}
