//! # Simply-Supported Beam Formulas
//!
//! Statics for a simply-supported span with pin at `x = 0` and roller at
//! `x = L`. Used to turn a single-span loading into the moment/shear demand
//! the shear model consumes. Units are whatever the caller passes in
//! (the demand module uses N and mm).
//!
//! ## Notation
//!
//! - `L` = Span length
//! - `x` = Position along beam from left support
//! - `a` = Load position from left support
//! - `P` = Point load magnitude
//! - `w` = Uniform load intensity (force per unit length)
//!
//! ## Sign Conventions
//!
//! - Loads: Positive downward
//! - Moment: Positive causes tension on bottom (sagging)
//! - Shear: Positive when left side up relative to right
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table 8.1

// =============================================================================
// POINT LOAD FORMULAS
// =============================================================================

/// Reactions for point load P at position a on span L
///
/// ```text
///        P
///        ↓
///    ────┬────────────
///    △   a            △
///   R1  ←───────L────→ R2
/// ```
///
/// - R1 = P(L-a)/L
/// - R2 = Pa/L
#[inline]
pub fn point_load_reactions(p: f64, a: f64, l: f64) -> (f64, f64) {
    let r1 = p * (l - a) / l;
    let r2 = p * a / l;
    (r1, r2)
}

/// Shear at x for point load P at a
///
/// - V(x) = R1       for x < a
/// - V(x) = R1 - P   for x ≥ a
#[inline]
pub fn point_load_shear(p: f64, a: f64, l: f64, x: f64) -> f64 {
    let (r1, _) = point_load_reactions(p, a, l);
    if x < a {
        r1
    } else {
        r1 - p
    }
}

/// Moment at x for point load P at a
///
/// - M(x) = R1·x           for x ≤ a
/// - M(x) = R1·x - P(x-a)  for x > a
#[inline]
pub fn point_load_moment(p: f64, a: f64, l: f64, x: f64) -> f64 {
    let (r1, _) = point_load_reactions(p, a, l);
    if x <= a {
        r1 * x
    } else {
        r1 * x - p * (x - a)
    }
}

// =============================================================================
// UNIFORM LOAD FORMULAS
// =============================================================================

/// Reactions for uniform load w over the full span: R1 = R2 = wL/2
#[inline]
pub fn uniform_load_reactions(w: f64, l: f64) -> (f64, f64) {
    let r = w * l / 2.0;
    (r, r)
}

/// Shear at x for uniform load: V(x) = w(L/2 - x)
#[inline]
pub fn uniform_load_shear(w: f64, l: f64, x: f64) -> f64 {
    w * (l / 2.0 - x)
}

/// Moment at x for uniform load: M(x) = wx(L-x)/2
#[inline]
pub fn uniform_load_moment(w: f64, l: f64, x: f64) -> f64 {
    w * x * (l - x) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_point_load_reactions_sum_to_load() {
        let (r1, r2) = point_load_reactions(100.0, 300.0, 1200.0);
        assert!((r1 - 75.0).abs() < EPSILON);
        assert!((r2 - 25.0).abs() < EPSILON);
    }

    #[test]
    fn test_point_load_moment_peak_at_load() {
        // PL/4 at midspan
        let m = point_load_moment(100.0, 600.0, 1200.0, 600.0);
        assert!((m - 30_000.0).abs() < EPSILON);
        assert!(point_load_moment(100.0, 600.0, 1200.0, 1200.0).abs() < EPSILON);
    }

    #[test]
    fn test_point_load_shear_jump() {
        assert!((point_load_shear(100.0, 600.0, 1200.0, 599.0) - 50.0).abs() < EPSILON);
        assert!((point_load_shear(100.0, 600.0, 1200.0, 600.0) + 50.0).abs() < EPSILON);
    }

    #[test]
    fn test_uniform_load() {
        let (r1, r2) = uniform_load_reactions(2.0, 1000.0);
        assert_eq!(r1, 1000.0);
        assert_eq!(r2, 1000.0);
        assert_eq!(uniform_load_moment(2.0, 1000.0, 500.0), 250_000.0);
        assert_eq!(uniform_load_shear(2.0, 1000.0, 0.0), 1000.0);
        assert_eq!(uniform_load_shear(2.0, 1000.0, 500.0), 0.0);
    }
}
