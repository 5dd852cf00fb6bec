//! # Equations
//!
//! Shared numerical building blocks for the section engine. Keeping them in
//! one place gives every closed-form evaluation the same failure semantics
//! and makes the formulas easy to check against their references.
//!
//! ## Modules
//!
//! - [`checked`] - square roots and divisions that fail with a domain error
//!   instead of producing NaN or infinity
//! - [`interpolation`] - piecewise-linear interpolation by breakpoints
//! - [`beam`] - simply-supported beam statics (point load, uniform load)
//!
//! ## References
//!
//! - Mobasher, Yao & Soranakom (2015), Engineering Structures 100: 164-177
//! - RILEM TC 162-TDF (2003), σ-ε design method, Materials and Structures 36
//! - Lantsoght (2023), Engineering Structures 280: 115722
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table 8.1

pub mod beam;
pub mod checked;
pub mod interpolation;

pub use beam::{
    point_load_moment,
    point_load_reactions,
    point_load_shear,
    uniform_load_moment,
    uniform_load_reactions,
    uniform_load_shear,
};
pub use checked::{checked_div, checked_sqrt, DENOMINATOR_EPSILON};
pub use interpolation::{PiecewiseLinear, Segment};
