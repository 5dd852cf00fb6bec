//! Factored demand on a simply-supported SFRC beam.
//!
//! A single live point load plus the concrete self-weight as a dead uniform
//! load. Each load combination contributes its dead and live factors; the
//! design moment is the largest factored moment along the span and the
//! design shear is the larger support reaction.

use serde::{Deserialize, Serialize};

use super::combinations::{envelope_max, LoadCombination};
use super::load_types::LoadType;
use crate::calculations::shear::ShearDemand;
use crate::equations::beam::{
    point_load_moment, point_load_reactions, point_load_shear, uniform_load_moment,
    uniform_load_reactions, uniform_load_shear,
};
use crate::errors::{CalcError, CalcResult};
use crate::section::SectionInputs;
use crate::units::{KilonewtonMeters, Kilonewtons, NewtonMillimeters, Newtons};

/// Simply-supported span with one point load.
///
/// ## JSON Example
///
/// ```json
/// { "span_mm": 4000.0, "point_load_kn": 50.0, "load_position_mm": 2000.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimplySupportedBeam {
    /// Span L (mm)
    pub span_mm: f64,
    /// Unfactored live point load P (kN)
    pub point_load_kn: f64,
    /// Distance of the point load from the left support a (mm)
    pub load_position_mm: f64,
}

/// Factored moment and shear demand of one combination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamDemand {
    /// Combination that produced this demand
    pub combination: String,
    /// Maximum factored moment (kN·m)
    pub moment_knm: f64,
    /// Position of the maximum moment (mm)
    pub moment_position_mm: f64,
    /// Maximum factored support shear (kN)
    pub shear_kn: f64,
    /// Unfactored self-weight (N/mm)
    pub self_weight_n_per_mm: f64,
}

impl BeamDemand {
    /// The demand as seen by the shear model
    pub fn shear_demand(&self) -> ShearDemand {
        ShearDemand {
            m_knm: self.moment_knm,
            v_kn: self.shear_kn,
        }
    }
}

/// Self-weight per unit length (N/mm) of a `b × h` section for a unit
/// weight in kN/m³
pub fn self_weight(section: &SectionInputs, unit_weight_kn_m3: f64) -> f64 {
    // kN/m³ = 1e-6 N/mm³
    unit_weight_kn_m3 * 1e-6 * section.b_mm * section.h_mm
}

impl SimplySupportedBeam {
    pub fn validate(&self) -> CalcResult<()> {
        if !self.span_mm.is_finite() || self.span_mm <= 0.0 {
            return Err(CalcError::invalid_input(
                "span_mm",
                self.span_mm.to_string(),
                "Span must be positive",
            ));
        }
        if !self.point_load_kn.is_finite() || self.point_load_kn < 0.0 {
            return Err(CalcError::invalid_input(
                "point_load_kn",
                self.point_load_kn.to_string(),
                "Point load cannot be negative",
            ));
        }
        if !(0.0..=self.span_mm).contains(&self.load_position_mm) {
            return Err(CalcError::invalid_input(
                "load_position_mm",
                self.load_position_mm.to_string(),
                format!("Load must lie on the span (0 to {} mm)", self.span_mm),
            ));
        }
        Ok(())
    }

    /// Factored (uniform N/mm, point N) loads for a combination
    fn factored_loads(&self, w_dead: f64, combo: &LoadCombination) -> (f64, f64) {
        let w = combo.get_factor(LoadType::Dead) * w_dead;
        let p: Newtons = Kilonewtons(self.point_load_kn).into();
        (w, combo.get_factor(LoadType::Live) * p.0)
    }

    /// Factored moment at `x` (N·mm)
    fn moment_at(&self, w: f64, p: f64, x: f64) -> f64 {
        let (l, a) = (self.span_mm, self.load_position_mm);
        uniform_load_moment(w, l, x) + point_load_moment(p, a, l, x)
    }

    /// Factored shear at `x` (N)
    fn shear_at(&self, w: f64, p: f64, x: f64) -> f64 {
        let (l, a) = (self.span_mm, self.load_position_mm);
        uniform_load_shear(w, l, x) + point_load_shear(p, a, l, x)
    }

    /// Moment diagram (kN·m) at `stations + 1` equally spaced points
    pub fn moment_diagram(
        &self,
        section: &SectionInputs,
        unit_weight_kn_m3: f64,
        combo: &LoadCombination,
        stations: usize,
    ) -> CalcResult<Vec<f64>> {
        self.validate()?;
        if stations == 0 {
            return Err(CalcError::invalid_input(
                "stations",
                "0",
                "At least one interval is required",
            ));
        }
        let (w, p) = self.factored_loads(self_weight(section, unit_weight_kn_m3), combo);
        let dx = self.span_mm / stations as f64;
        Ok((0..=stations)
            .map(|i| {
                let m: KilonewtonMeters =
                    NewtonMillimeters(self.moment_at(w, p, i as f64 * dx)).into();
                m.0
            })
            .collect())
    }

    /// Shear diagram (kN) at `stations + 1` equally spaced points
    pub fn shear_diagram(
        &self,
        section: &SectionInputs,
        unit_weight_kn_m3: f64,
        combo: &LoadCombination,
        stations: usize,
    ) -> CalcResult<Vec<f64>> {
        self.validate()?;
        if stations == 0 {
            return Err(CalcError::invalid_input(
                "stations",
                "0",
                "At least one interval is required",
            ));
        }
        let (w, p) = self.factored_loads(self_weight(section, unit_weight_kn_m3), combo);
        let dx = self.span_mm / stations as f64;
        Ok((0..=stations)
            .map(|i| {
                let v: Kilonewtons = Newtons(self.shear_at(w, p, i as f64 * dx)).into();
                v.0
            })
            .collect())
    }

    /// Maximum-moment envelope (kN·m) over a set of combinations
    pub fn moment_envelope(
        &self,
        section: &SectionInputs,
        unit_weight_kn_m3: f64,
        combos: &[LoadCombination],
        stations: usize,
    ) -> CalcResult<Vec<f64>> {
        let diagrams = combos
            .iter()
            .map(|c| self.moment_diagram(section, unit_weight_kn_m3, c, stations))
            .collect::<CalcResult<Vec<_>>>()?;
        envelope_max(&diagrams)
    }

    /// Design demand for one combination.
    ///
    /// The maximum moment is found in closed form: the moment is parabolic on
    /// each side of the point load, so the peak is either at the load or at
    /// the stationary point of one side.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sfrc_core::loads::{aci318_19_combinations, SimplySupportedBeam};
    /// use sfrc_core::section::SectionInputs;
    ///
    /// let section = SectionInputs {
    ///     fc_mpa: 28.0, daggmax_mm: 16.0, fy_mpa: 400.0, as_mm2: 226.0,
    ///     rhof: 1.0, vf: 0.005, df_mm: 0.55, lf_mm: 35.0,
    ///     b_mm: 120.0, d_mm: 435.0, h_mm: 500.0,
    /// };
    /// let beam = SimplySupportedBeam {
    ///     span_mm: 4000.0,
    ///     point_load_kn: 50.0,
    ///     load_position_mm: 2000.0,
    /// };
    /// let lc2a = &aci318_19_combinations()[1];
    ///
    /// let demand = beam.demand(&section, 25.0, lc2a).unwrap();
    /// assert!((demand.moment_knm - 83.6).abs() < 1e-9);
    /// assert!((demand.shear_kn - 43.6).abs() < 1e-9);
    /// ```
    pub fn demand(
        &self,
        section: &SectionInputs,
        unit_weight_kn_m3: f64,
        combo: &LoadCombination,
    ) -> CalcResult<BeamDemand> {
        self.validate()?;
        if !unit_weight_kn_m3.is_finite() || unit_weight_kn_m3 < 0.0 {
            return Err(CalcError::invalid_input(
                "concrete_unit_weight_kn_m3",
                unit_weight_kn_m3.to_string(),
                "Unit weight cannot be negative",
            ));
        }

        let (l, a) = (self.span_mm, self.load_position_mm);
        let w_dead = self_weight(section, unit_weight_kn_m3);
        let (w, p) = self.factored_loads(w_dead, combo);

        let mut candidates = vec![a];
        if w.abs() > 0.0 {
            let (r1_point, _) = point_load_reactions(p, a, l);
            candidates.push((l / 2.0 + r1_point / w).clamp(0.0, a));
            candidates.push((l / 2.0 + (r1_point - p) / w).clamp(a, l));
        }
        let (moment_position_mm, moment_nmm) = candidates
            .into_iter()
            .map(|x| (x, self.moment_at(w, p, x)))
            .fold((a, f64::NEG_INFINITY), |best, c| if c.1 > best.1 { c } else { best });

        let (r1_udl, r2_udl) = uniform_load_reactions(w, l);
        let (r1_point, r2_point) = point_load_reactions(p, a, l);
        let shear_n = (r1_udl + r1_point).abs().max((r2_udl + r2_point).abs());

        let moment: KilonewtonMeters = NewtonMillimeters(moment_nmm).into();
        let shear: Kilonewtons = Newtons(shear_n).into();

        Ok(BeamDemand {
            combination: combo.name.clone(),
            moment_knm: moment.0,
            moment_position_mm,
            shear_kn: shear.0,
            self_weight_n_per_mm: w_dead,
        })
    }

    /// Demand of the combination producing the largest moment.
    ///
    /// Ties keep the earliest combination in `combos`.
    pub fn governing_demand(
        &self,
        section: &SectionInputs,
        unit_weight_kn_m3: f64,
        combos: &[LoadCombination],
    ) -> CalcResult<BeamDemand> {
        let mut governing: Option<BeamDemand> = None;
        for combo in combos {
            let demand = self.demand(section, unit_weight_kn_m3, combo)?;
            if governing
                .as_ref()
                .map_or(true, |best| demand.moment_knm > best.moment_knm)
            {
                governing = Some(demand);
            }
        }
        governing.ok_or_else(|| {
            CalcError::invalid_input("combinations", "[]", "No load combinations given")
        })
    }
}
