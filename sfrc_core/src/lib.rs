//! # sfrc_core - SFRC Section Calculation Engine
//!
//! `sfrc_core` computes the flexural and shear behavior of rectangular
//! steel-fiber-reinforced concrete (SFRC) beam sections with tension
//! reinforcement. All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//!
//! Evaluation runs leaf-first with no feedback:
//!
//! ```text
//! SectionInputs ─► DerivedProperties ─► moment-curvature ─► shear capacity
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use sfrc_core::{compute_moment_curvature, compute_shear_capacity};
//! use sfrc_core::calculations::{Reinforcement, ShearDemand};
//! use sfrc_core::section::SectionInputs;
//!
//! let section = SectionInputs {
//!     fc_mpa: 28.0, daggmax_mm: 16.0, fy_mpa: 400.0, as_mm2: 226.0,
//!     rhof: 1.0, vf: 0.005, df_mm: 0.55, lf_mm: 35.0,
//!     b_mm: 120.0, d_mm: 435.0, h_mm: 500.0,
//! };
//!
//! let mc = compute_moment_curvature(&section).unwrap();
//! println!("My = {:.2} kNm, Mult = {:.2} kNm", mc.yielding.moment_knm, mc.ultimate.moment_knm);
//!
//! let bars = Reinforcement { phibar_mm: 12.0, ns: 2 };
//! let demand = ShearDemand { m_knm: 48.16, v_kn: 81.08 };
//! let shear = compute_shear_capacity(&section, &bars, &demand).unwrap();
//! println!("VCSDT = {:.2} kN", shear.vcsdt_kn);
//! ```
//!
//! ## Modules
//!
//! - [`section`] - Section inputs and derived material/section scalars
//! - [`calculations`] - Moment-curvature, shear capacity, beam design check
//! - [`materials`] - Concrete and fiber material models
//! - [`equations`] - Beam statics, guarded arithmetic, interpolation
//! - [`loads`] - ACI 318-19 combinations and simply-supported beam demand
//! - [`project`] - Project container, metadata, and settings
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod loads;
pub mod materials;
pub mod project;
pub mod section;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{
    compute_moment_curvature, compute_shear_capacity, CalculationItem, CalculationOutput,
};
pub use errors::{CalcError, CalcResult};
pub use project::{GlobalSettings, Project, ProjectMetadata};
pub use section::{DerivedProperties, SectionInputs};
