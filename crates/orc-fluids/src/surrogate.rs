//! Constant-property surrogate fluid model.
//!
//! This module provides an analytic two-phase model that stands in for
//! CoolProp when a native property library is unavailable, when a quick
//! estimate is enough, or when a test needs fully deterministic lookups.
//!
//! The model is NOT a replacement for a real-fluid equation of state. Near
//! the critical point in particular the constant latent heat overstates the
//! vapor enthalpy.

use crate::error::{FluidError, FluidResult};
use crate::fluid::WorkingFluid;
use crate::model::{FluidModel, validation};
use crate::state::{StateInput, ThermoState};
use orc_core::units::{Pressure, Temperature, k, pa};

/// A constant-property two-phase surrogate for a single working fluid.
///
/// The model uses:
/// - **Saturation curve** `P_sat(T) = P_c · exp(b · (1 − T_c/T))`
/// - **Incompressible liquid** with constant `c_l` and specific volume `v_l`:
///   `h = c_l (T − T_ref) + v_l P`, `s = c_l ln(T/T_ref)`
/// - **Constant latent heat** `L` across the dome
/// - **Constant-cp vapor** above saturation:
///   `h = h_g(P) + c_v (T − T_sat)`, `s = s_g(P) + c_v ln(T/T_sat)`
///
/// Liquid compression at constant entropy is exactly `Δh = v_l ΔP`.
#[derive(Debug, Clone)]
pub struct ConstantPropertyModel {
    /// Fluid this parameter set represents
    pub fluid: WorkingFluid,
    /// Critical temperature [K]
    pub t_crit: f64,
    /// Critical pressure [Pa]
    pub p_crit: f64,
    /// Saturation-curve slope `b` (dimensionless)
    pub slope: f64,
    /// Liquid specific heat [J/(kg·K)]
    pub cp_liquid: f64,
    /// Liquid specific volume [m³/kg]
    pub v_liquid: f64,
    /// Latent heat of vaporization [J/kg]
    pub latent_heat: f64,
    /// Vapor specific heat [J/(kg·K)]
    pub cp_vapor: f64,
    /// Reference temperature for zero liquid entropy [K]
    pub t_ref: f64,
}

/// Which side of the dome a lookup landed on.
enum Region {
    Liquid,
    TwoPhase(f64),
    Vapor,
}

impl ConstantPropertyModel {
    /// Parameter set approximating carbon dioxide between 280 K and 305 K.
    pub fn carbon_dioxide() -> Self {
        Self {
            fluid: WorkingFluid::CO2,
            t_crit: 304.1282,
            p_crit: 7.3773e6,
            slope: 6.7,
            cp_liquid: 2_600.0,
            v_liquid: 1.16e-3,
            latent_heat: 150e3,
            cp_vapor: 2_000.0,
            t_ref: 273.15,
        }
    }

    /// Saturation pressure [Pa] at temperature `t_k`.
    fn p_sat(&self, t_k: f64) -> f64 {
        self.p_crit * (self.slope * (1.0 - self.t_crit / t_k)).exp()
    }

    /// Saturation temperature [K] at pressure `p_pa`.
    fn t_sat(&self, p_pa: f64) -> FluidResult<f64> {
        let denom = 1.0 - (p_pa / self.p_crit).ln() / self.slope;
        if !denom.is_finite() || denom <= 0.0 {
            return Err(FluidError::OutOfRange {
                what: "pressure beyond surrogate saturation curve",
            });
        }
        Ok(self.t_crit / denom)
    }

    fn h_liquid(&self, t_k: f64, p_pa: f64) -> f64 {
        self.cp_liquid * (t_k - self.t_ref) + self.v_liquid * p_pa
    }

    fn s_liquid(&self, t_k: f64) -> f64 {
        self.cp_liquid * (t_k / self.t_ref).ln()
    }

    fn check_fluid(&self, fluid: WorkingFluid) -> FluidResult<()> {
        if fluid != self.fluid {
            return Err(FluidError::NotSupported {
                what: "surrogate parameters describe a different fluid",
            });
        }
        Ok(())
    }

    fn build(
        &self,
        p_pa: f64,
        t_k: f64,
        h: f64,
        s: f64,
        region: Region,
    ) -> FluidResult<ThermoState> {
        let quality = match region {
            Region::TwoPhase(q) => Some(q),
            Region::Liquid | Region::Vapor => None,
        };
        ThermoState::new(self.fluid, pa(p_pa), k(t_k), h, s, quality)
    }

    fn from_pt(&self, p_pa: f64, t_k: f64) -> FluidResult<ThermoState> {
        let ts = self.t_sat(p_pa)?;
        if t_k <= ts {
            let h = self.h_liquid(t_k, p_pa);
            let s = self.s_liquid(t_k);
            self.build(p_pa, t_k, h, s, Region::Liquid)
        } else {
            let h_g = self.h_liquid(ts, p_pa) + self.latent_heat;
            let s_g = self.s_liquid(ts) + self.latent_heat / ts;
            let h = h_g + self.cp_vapor * (t_k - ts);
            let s = s_g + self.cp_vapor * (t_k / ts).ln();
            self.build(p_pa, t_k, h, s, Region::Vapor)
        }
    }

    fn from_ph(&self, p_pa: f64, h: f64) -> FluidResult<ThermoState> {
        let ts = self.t_sat(p_pa)?;
        let h_f = self.h_liquid(ts, p_pa);
        let h_g = h_f + self.latent_heat;

        if h <= h_f {
            let t_k = self.t_ref + (h - self.v_liquid * p_pa) / self.cp_liquid;
            if t_k <= 0.0 {
                return Err(FluidError::OutOfRange {
                    what: "enthalpy below surrogate liquid range",
                });
            }
            self.build(p_pa, t_k, h, self.s_liquid(t_k), Region::Liquid)
        } else if h >= h_g {
            let t_k = ts + (h - h_g) / self.cp_vapor;
            let s = self.s_liquid(ts) + self.latent_heat / ts + self.cp_vapor * (t_k / ts).ln();
            self.build(p_pa, t_k, h, s, Region::Vapor)
        } else {
            let q = (h - h_f) / self.latent_heat;
            let s = self.s_liquid(ts) + q * self.latent_heat / ts;
            self.build(p_pa, ts, h, s, Region::TwoPhase(q))
        }
    }

    fn from_ps(&self, p_pa: f64, s: f64) -> FluidResult<ThermoState> {
        let ts = self.t_sat(p_pa)?;
        let s_f = self.s_liquid(ts);
        let s_g = s_f + self.latent_heat / ts;

        if s <= s_f {
            let t_k = self.t_ref * (s / self.cp_liquid).exp();
            self.build(p_pa, t_k, self.h_liquid(t_k, p_pa), s, Region::Liquid)
        } else if s >= s_g {
            let t_k = ts * ((s - s_g) / self.cp_vapor).exp();
            let h = self.h_liquid(ts, p_pa) + self.latent_heat + self.cp_vapor * (t_k - ts);
            self.build(p_pa, t_k, h, s, Region::Vapor)
        } else {
            let q = (s - s_f) * ts / self.latent_heat;
            let h = self.h_liquid(ts, p_pa) + q * self.latent_heat;
            self.build(p_pa, ts, h, s, Region::TwoPhase(q))
        }
    }

    fn from_tq(&self, t_k: f64, q: f64) -> FluidResult<ThermoState> {
        if t_k >= self.t_crit {
            return Err(FluidError::OutOfRange {
                what: "saturation requested at or above critical temperature",
            });
        }
        let p_pa = self.p_sat(t_k);
        let h = self.h_liquid(t_k, p_pa) + q * self.latent_heat;
        let s = self.s_liquid(t_k) + q * self.latent_heat / t_k;
        self.build(p_pa, t_k, h, s, Region::TwoPhase(q))
    }
}

impl Default for ConstantPropertyModel {
    fn default() -> Self {
        Self::carbon_dioxide()
    }
}

impl FluidModel for ConstantPropertyModel {
    fn name(&self) -> &str {
        "ConstantPropertySurrogate"
    }

    fn supports_fluid(&self, fluid: WorkingFluid) -> bool {
        fluid == self.fluid
    }

    fn critical_temperature(&self, fluid: WorkingFluid) -> FluidResult<Temperature> {
        self.check_fluid(fluid)?;
        Ok(k(self.t_crit))
    }

    fn critical_pressure(&self, fluid: WorkingFluid) -> FluidResult<Pressure> {
        self.check_fluid(fluid)?;
        Ok(pa(self.p_crit))
    }

    fn state(&self, fluid: WorkingFluid, input: StateInput) -> FluidResult<ThermoState> {
        self.check_fluid(fluid)?;
        validation::validate_input(&input)?;

        match input {
            StateInput::PT { p, t } => self.from_pt(p.value, t.value),
            StateInput::PH { p, h } => self.from_ph(p.value, h),
            StateInput::PS { p, s } => self.from_ps(p.value, s),
            StateInput::TQ { t, q } => self.from_tq(t.value, q),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn co2() -> ConstantPropertyModel {
        ConstantPropertyModel::carbon_dioxide()
    }

    #[test]
    fn saturation_curve_passes_through_critical_point() {
        let model = co2();
        assert!((model.p_sat(model.t_crit) - model.p_crit).abs() < 1e-6);
        let ts = model.t_sat(model.p_crit).unwrap();
        assert!((ts - model.t_crit).abs() < 1e-9);
    }

    #[test]
    fn saturation_pressure_is_near_co2_data() {
        // CO2 saturates at about 5.09 MPa at 15 C
        let model = co2();
        let p = model
            .saturation_pressure(WorkingFluid::CO2, k(288.15), 0.0)
            .unwrap();
        assert!(p.value > 4.8e6 && p.value < 5.4e6);
    }

    #[test]
    fn rejects_other_fluids() {
        let model = co2();
        assert!(!model.supports_fluid(WorkingFluid::R245fa));
        let err = model.critical_temperature(WorkingFluid::R245fa).unwrap_err();
        assert!(matches!(err, FluidError::NotSupported { .. }));
    }

    #[test]
    fn saturation_above_critical_is_rejected() {
        let model = co2();
        let err = model
            .state(
                WorkingFluid::CO2,
                StateInput::TQ {
                    t: k(305.0),
                    q: 1.0,
                },
            )
            .unwrap_err();
        assert!(matches!(err, FluidError::OutOfRange { .. }));
    }

    #[test]
    fn isentropic_liquid_compression_adds_v_dp() {
        let model = co2();
        let p_low = 5.0e6;
        let p_high = 7.0e6;
        let inlet = model
            .state(
                WorkingFluid::CO2,
                StateInput::PT {
                    p: pa(p_low),
                    t: k(280.0),
                },
            )
            .unwrap();
        let outlet = model
            .state(
                WorkingFluid::CO2,
                StateInput::PS {
                    p: pa(p_high),
                    s: inlet.entropy(),
                },
            )
            .unwrap();
        let dh = outlet.enthalpy() - inlet.enthalpy();
        assert!((dh - model.v_liquid * (p_high - p_low)).abs() < 1e-6);
        assert!((outlet.temperature().value - 280.0).abs() < 1e-9);
    }

    #[test]
    fn two_phase_lookup_reports_quality() {
        let model = co2();
        let sat_liq = model
            .state(
                WorkingFluid::CO2,
                StateInput::TQ {
                    t: k(288.15),
                    q: 0.0,
                },
            )
            .unwrap();
        let mid = model
            .state(
                WorkingFluid::CO2,
                StateInput::PH {
                    p: sat_liq.pressure(),
                    h: sat_liq.enthalpy() + 0.5 * model.latent_heat,
                },
            )
            .unwrap();
        let q = mid.quality().expect("two-phase state has quality");
        assert!((q - 0.5).abs() < 1e-9);
        assert!((mid.temperature().value - 288.15).abs() < 1e-6);
    }

    proptest! {
        #[test]
        fn ph_lookup_inverts_pt(t in 260.0f64..340.0, p in 3.0e6f64..7.0e6) {
            let model = co2();
            let pt = model
                .state(WorkingFluid::CO2, StateInput::PT { p: pa(p), t: k(t) })
                .unwrap();
            let ph = model
                .state(WorkingFluid::CO2, StateInput::PH { p: pa(p), h: pt.enthalpy() })
                .unwrap();
            prop_assert!((ph.temperature().value - t).abs() < 1e-6);
            prop_assert!((ph.entropy() - pt.entropy()).abs() < 1e-6);
        }

        #[test]
        fn ps_lookup_inverts_pt(t in 260.0f64..340.0, p in 3.0e6f64..7.0e6) {
            let model = co2();
            let pt = model
                .state(WorkingFluid::CO2, StateInput::PT { p: pa(p), t: k(t) })
                .unwrap();
            let ps = model
                .state(WorkingFluid::CO2, StateInput::PS { p: pa(p), s: pt.entropy() })
                .unwrap();
            prop_assert!((ps.temperature().value - t).abs() < 1e-6);
            prop_assert!((ps.enthalpy() - pt.enthalpy()).abs() < 1e-4);
        }
    }
}
