//! Piecewise-linear interpolation by breakpoints.
//!
//! The shear model estimates the neutral-axis depth and the normalized
//! curvature at an arbitrary demand moment by interpolating between the
//! cracking, yielding and ultimate states. Both quantities share the same
//! shape, so one utility serves both.
//!
//! ## Segment selection
//!
//! For breakpoints `x0, x1, ..., xn` the segment used for `x` is the first
//! `i` with `x <= x_i` (`i >= 1`); when no breakpoint satisfies this the last
//! segment is used. Values left of `x0` and right of `xn` are extrapolated
//! from the first and last segment respectively. Breakpoints do not have to be
//! increasing, which matters when the ultimate moment of a section falls below
//! its yield moment.
//!
//! ```rust
//! use sfrc_core::equations::PiecewiseLinear;
//!
//! let curve = PiecewiseLinear::new(vec![(0.0, 0.0), (10.0, 1.0), (30.0, 2.0)]).unwrap();
//! assert_eq!(curve.evaluate(5.0).unwrap(), 0.5);
//! assert_eq!(curve.evaluate(20.0).unwrap(), 1.5);
//! assert_eq!(curve.evaluate(50.0).unwrap(), 3.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::checked::checked_div;
use crate::errors::{CalcError, CalcResult};

/// A piecewise-linear function defined by `(x, y)` breakpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PiecewiseLinear {
    points: Vec<(f64, f64)>,
}

/// The segment selected for a given abscissa (1-based, matching the
/// right-hand breakpoint index).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment(pub usize);

impl PiecewiseLinear {
    /// Build from at least two breakpoints.
    pub fn new(points: Vec<(f64, f64)>) -> CalcResult<Self> {
        if points.len() < 2 {
            return Err(CalcError::invalid_input(
                "breakpoints",
                points.len().to_string(),
                "At least two breakpoints are required",
            ));
        }
        if let Some((x, y)) = points.iter().find(|(x, y)| !x.is_finite() || !y.is_finite()) {
            return Err(CalcError::invalid_input(
                "breakpoints",
                format!("({x}, {y})"),
                "Breakpoints must be finite",
            ));
        }
        Ok(PiecewiseLinear { points })
    }

    /// Breakpoints in definition order
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Segment used to evaluate `x`
    pub fn segment_for(&self, x: f64) -> Segment {
        let last = self.points.len() - 1;
        let index = (1..last)
            .find(|&i| x <= self.points[i].0)
            .unwrap_or(last);
        Segment(index)
    }

    /// Evaluate the function at `x`.
    ///
    /// Fails with a domain error when the selected segment has zero width.
    pub fn evaluate(&self, x: f64) -> CalcResult<f64> {
        let Segment(i) = self.segment_for(x);
        let (x0, y0) = self.points[i - 1];
        let (x1, y1) = self.points[i];
        let slope = checked_div("interpolation slope", y1 - y0, x1 - x0)?;
        Ok(slope * (x - x0) + y0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_segment() -> PiecewiseLinear {
        PiecewiseLinear::new(vec![(0.0, 0.5), (10.0, 0.5), (40.0, 0.2), (50.0, 0.1)]).unwrap()
    }

    #[test]
    fn test_first_segment_includes_right_breakpoint() {
        let f = three_segment();
        assert_eq!(f.segment_for(10.0), Segment(1));
        assert_eq!(f.evaluate(10.0).unwrap(), 0.5);
        assert_eq!(f.evaluate(3.0).unwrap(), 0.5);
    }

    #[test]
    fn test_middle_segment() {
        let f = three_segment();
        assert_eq!(f.segment_for(25.0), Segment(2));
        assert!((f.evaluate(25.0).unwrap() - 0.35).abs() < 1e-12);
        assert_eq!(f.segment_for(40.0), Segment(2));
    }

    #[test]
    fn test_extrapolates_past_last_breakpoint() {
        let f = three_segment();
        assert_eq!(f.segment_for(60.0), Segment(3));
        assert!((f.evaluate(60.0).unwrap() - 0.0).abs() < 1e-12);
    }

    #[test]
    fn test_extrapolates_left_of_first_breakpoint() {
        let f = PiecewiseLinear::new(vec![(0.0, 0.0), (10.0, 2.0)]).unwrap();
        assert!((f.evaluate(-5.0).unwrap() + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_decreasing_last_segment() {
        // Ultimate below yield: last breakpoint left of the previous one
        let f =
            PiecewiseLinear::new(vec![(0.0, 0.0), (10.0, 1.0), (20.0, 2.0), (18.0, 3.0)]).unwrap();
        assert_eq!(f.segment_for(21.0), Segment(3));
        assert!((f.evaluate(21.0).unwrap() - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_zero_width_segment_is_domain_error() {
        let f = PiecewiseLinear::new(vec![(0.0, 0.0), (10.0, 1.0), (10.0, 2.0)]).unwrap();
        assert!(f.evaluate(5.0).is_ok());
        let err = f.evaluate(12.0).unwrap_err();
        assert_eq!(err.error_code(), "DOMAIN_ERROR");
    }

    #[test]
    fn test_requires_two_points() {
        assert!(PiecewiseLinear::new(vec![(0.0, 1.0)]).is_err());
        assert!(PiecewiseLinear::new(vec![(0.0, 1.0), (f64::NAN, 2.0)]).is_err());
    }
}
