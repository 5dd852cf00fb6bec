//! # Materials
//!
//! Material models for steel-fiber-reinforced concrete sections:
//!
//! - [`concrete`] - moduli, flexural tensile strength bands, size effect
//! - [`fibers`] - fiber factor and fiber strength measures
//!
//! Reinforcing steel is described by its yield strength alone; the modulus
//! and the concrete crushing strain are fixed constants of the model.
//!
//! ## Example
//!
//! ```rust
//! use sfrc_core::materials::{yield_strain, ConcreteProperties, FiberProperties};
//!
//! let concrete = ConcreteProperties::from_strength(28.0);
//! let fibers = FiberProperties::new(1.0, 0.005, 0.55, 35.0);
//! assert_eq!(concrete.ffctmfl_mpa, 4.8);
//! assert!(fibers.fiber_factor < 1.0);
//! assert_eq!(yield_strain(400.0), 0.002);
//! ```

pub mod concrete;
pub mod fibers;

pub use concrete::{
    flexural_tensile_strength, size_effect_factor, ConcreteProperties, TensileBand,
    FLEXURAL_TENSILE_BANDS,
};
pub use fibers::FiberProperties;

/// Ultimate compressive strain of concrete
pub const ECU: f64 = 0.0035;

/// Young's modulus of reinforcing steel (MPa)
pub const ES_MPA: f64 = 200_000.0;

/// Yield strain of reinforcing steel εsy = fy/Es
pub fn yield_strain(fy_mpa: f64) -> f64 {
    fy_mpa / ES_MPA
}
