//! Guarded arithmetic.
//!
//! The yielding and ultimate solvers take square roots of coefficient
//! combinations and divide by coefficients that can vanish for unusual
//! sections. IEEE arithmetic would silently yield NaN or infinity and the
//! bad value would surface three stages later as a meaningless capacity.
//! These helpers stop the evaluation at the first inadmissible operation and
//! name the quantity being computed.

use crate::errors::{CalcError, CalcResult};

/// Magnitude below which a denominator is treated as zero
pub const DENOMINATOR_EPSILON: f64 = 1e-12;

/// Square root that fails on a negative (or NaN) radicand.
///
/// # Example
/// ```rust
/// use sfrc_core::equations::checked_sqrt;
///
/// assert_eq!(checked_sqrt("x", 9.0).unwrap(), 3.0);
/// assert!(checked_sqrt("x", -1.0).is_err());
/// ```
pub fn checked_sqrt(quantity: &str, radicand: f64) -> CalcResult<f64> {
    if radicand.is_nan() || radicand < 0.0 {
        return Err(CalcError::domain(
            quantity,
            format!("square root of negative radicand ({radicand})"),
        ));
    }
    Ok(radicand.sqrt())
}

/// Division that fails when the denominator is zero, near zero, or NaN.
///
/// # Example
/// ```rust
/// use sfrc_core::equations::checked_div;
///
/// assert_eq!(checked_div("x", 1.0, 4.0).unwrap(), 0.25);
/// assert!(checked_div("x", 1.0, 0.0).is_err());
/// ```
pub fn checked_div(quantity: &str, numerator: f64, denominator: f64) -> CalcResult<f64> {
    if denominator.is_nan() || denominator.abs() < DENOMINATOR_EPSILON {
        return Err(CalcError::domain(
            quantity,
            format!("division by zero or near-zero denominator ({denominator})"),
        ));
    }
    Ok(numerator / denominator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqrt_of_zero_is_allowed() {
        assert_eq!(checked_sqrt("k", 0.0).unwrap(), 0.0);
    }

    #[test]
    fn test_sqrt_negative_names_quantity() {
        match checked_sqrt("k21y", -0.5) {
            Err(CalcError::Domain { quantity, reason }) => {
                assert_eq!(quantity, "k21y");
                assert!(reason.contains("-0.5"));
            }
            other => panic!("expected domain error, got {:?}", other),
        }
    }

    #[test]
    fn test_sqrt_nan_rejected() {
        assert!(checked_sqrt("k", f64::NAN).is_err());
    }

    #[test]
    fn test_div_near_zero_rejected() {
        assert!(checked_div("Vai", 1.0, 1e-14).is_err());
        assert!(checked_div("Vai", 1.0, -1e-14).is_err());
        assert!(checked_div("Vai", 1.0, 1e-6).is_ok());
    }

    #[test]
    fn test_div_negative_denominator() {
        assert_eq!(checked_div("x", 3.0, -2.0).unwrap(), -1.5);
    }
}
