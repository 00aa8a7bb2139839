//! Expansion turbine model.

use crate::error::{CycleError, CycleResult};
use orc_core::units::{Pressure, SpecEnthalpy};
use orc_fluids::{FluidModel, StateInput, ThermoState};

/// Turbine expanding vapor from evaporator to condenser pressure.
///
/// ## Model
///
/// ```text
/// h_out,s = h(P_out, s_in)
/// h_out   = h_in - eta * (h_in - h_out,s)
/// w       = h_in - h_out
/// ```
///
/// Works are specific [J/kg] and positive when the turbine delivers work.
/// The outlet may land inside the saturation dome.
#[derive(Clone, Debug)]
pub struct Turbine {
    /// Isentropic efficiency (0 < eta <= 1)
    pub eta: f64,
}

/// Result of a turbine process.
#[derive(Clone, Debug, PartialEq)]
pub struct Expansion {
    pub outlet: ThermoState,
    /// Ideal (constant-entropy) specific work
    pub isentropic_work: SpecEnthalpy,
    /// Actual specific work
    pub work: SpecEnthalpy,
}

impl Turbine {
    /// Create a new turbine.
    ///
    /// # Errors
    /// Returns error if efficiency is outside (0, 1].
    pub fn new(eta: f64) -> CycleResult<Self> {
        if !eta.is_finite() || eta <= 0.0 || eta > 1.0 {
            return Err(CycleError::InvalidArg {
                what: "turbine efficiency must be in (0,1]",
            });
        }
        Ok(Self { eta })
    }

    /// Expand `inlet` down to `p_out`.
    pub fn expand(
        &self,
        model: &dyn FluidModel,
        inlet: &ThermoState,
        p_out: Pressure,
    ) -> CycleResult<Expansion> {
        let fluid = inlet.fluid();
        let h_in = inlet.enthalpy();

        let ideal = model.state(
            fluid,
            StateInput::PS {
                p: p_out,
                s: inlet.entropy(),
            },
        )?;
        let isentropic_work = h_in - ideal.enthalpy();
        let h_out = h_in - self.eta * isentropic_work;

        let outlet = model.state(fluid, StateInput::PH { p: p_out, h: h_out })?;

        Ok(Expansion {
            outlet,
            isentropic_work,
            work: h_in - h_out,
        })
    }
}
