//! Feed pump model.

use crate::error::{CycleError, CycleResult};
use orc_core::units::{Pressure, SpecEnthalpy};
use orc_fluids::{FluidModel, StateInput, ThermoState};

/// Liquid feed pump raising the working fluid to evaporator pressure.
///
/// ## Model
///
/// ```text
/// h_out,s = h(P_out, s_in)
/// w_s     = h_out,s - h_in
/// w       = w_s / eta
/// h_out   = h_in + w
/// ```
///
/// Works are specific [J/kg] and positive when the pump consumes work.
#[derive(Clone, Debug)]
pub struct Pump {
    /// Isentropic efficiency (0 < eta <= 1)
    pub eta: f64,
}

/// Result of a pump process.
#[derive(Clone, Debug, PartialEq)]
pub struct Compression {
    pub outlet: ThermoState,
    /// Ideal (constant-entropy) specific work
    pub isentropic_work: SpecEnthalpy,
    /// Actual specific work
    pub work: SpecEnthalpy,
}

impl Pump {
    /// Create a new pump.
    ///
    /// # Errors
    /// Returns error if efficiency is outside (0, 1].
    pub fn new(eta: f64) -> CycleResult<Self> {
        if !eta.is_finite() || eta <= 0.0 || eta > 1.0 {
            return Err(CycleError::InvalidArg {
                what: "pump efficiency must be in (0,1]",
            });
        }
        Ok(Self { eta })
    }

    /// Pump `inlet` up to `p_out`.
    pub fn compress(
        &self,
        model: &dyn FluidModel,
        inlet: &ThermoState,
        p_out: Pressure,
    ) -> CycleResult<Compression> {
        let fluid = inlet.fluid();
        let h_in = inlet.enthalpy();

        let ideal = model.state(
            fluid,
            StateInput::PS {
                p: p_out,
                s: inlet.entropy(),
            },
        )?;
        let isentropic_work = ideal.enthalpy() - h_in;
        let work = isentropic_work / self.eta;

        let outlet = model.state(
            fluid,
            StateInput::PH {
                p: p_out,
                h: h_in + work,
            },
        )?;

        Ok(Compression {
            outlet,
            isentropic_work,
            work,
        })
    }
}
