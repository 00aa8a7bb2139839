//! CoolProp-based fluid property model.

use crate::error::{FluidError, FluidResult};
use crate::fluid::WorkingFluid;
use crate::model::{FluidModel, validation};
use crate::state::{StateInput, ThermoState};
use orc_core::units::{Pressure, Temperature, k, pa};
use rfluids::prelude::*;

/// CoolProp backend for fluid properties.
///
/// Every `StateInput` pair maps onto a native CoolProp input pair, so
/// two-phase P-h and P-s states resolve directly without a temperature
/// search.
///
/// Thread-safe: rfluids Fluid instances are created per call and never shared.
pub struct CoolPropModel {}

impl CoolPropModel {
    /// Create a new CoolProp model.
    pub fn new() -> Self {
        Self {}
    }

    /// Create a Fluid instance in the state described by `input`.
    fn fluid_in_state(&self, pure: Pure, input: &StateInput) -> FluidResult<Fluid> {
        let (first, second) = match *input {
            StateInput::PT { p, t } => (
                FluidInput::pressure(p.value),
                FluidInput::temperature(t.value),
            ),
            StateInput::PH { p, h } => (FluidInput::pressure(p.value), FluidInput::enthalpy(h)),
            StateInput::PS { p, s } => (FluidInput::pressure(p.value), FluidInput::entropy(s)),
            StateInput::TQ { t, q } => {
                (FluidInput::temperature(t.value), FluidInput::quality(q))
            }
        };

        Fluid::from(pure)
            .in_state(first, second)
            .map_err(|e| FluidError::Backend {
                message: format!("rfluids error for {} input {:?}: {}", input.label(), input, e),
            })
    }
}

impl Default for CoolPropModel {
    fn default() -> Self {
        Self::new()
    }
}

impl FluidModel for CoolPropModel {
    fn name(&self) -> &str {
        "CoolProp"
    }

    fn supports_fluid(&self, _fluid: WorkingFluid) -> bool {
        // Every WorkingFluid variant has an rfluids mapping
        true
    }

    fn critical_temperature(&self, fluid: WorkingFluid) -> FluidResult<Temperature> {
        let mut backend = Fluid::from(fluid.rfluids_pure());
        let t_crit = backend
            .critical_temperature()
            .map_err(|e| FluidError::Backend {
                message: format!("rfluids error getting critical temperature: {}", e),
            })?;

        let t_crit = k(t_crit);
        validation::validate_temperature(t_crit)?;
        Ok(t_crit)
    }

    fn critical_pressure(&self, fluid: WorkingFluid) -> FluidResult<Pressure> {
        let mut backend = Fluid::from(fluid.rfluids_pure());
        let p_crit = backend
            .critical_pressure()
            .map_err(|e| FluidError::Backend {
                message: format!("rfluids error getting critical pressure: {}", e),
            })?;

        let p_crit = pa(p_crit);
        validation::validate_pressure(p_crit)?;
        Ok(p_crit)
    }

    fn state(&self, fluid: WorkingFluid, input: StateInput) -> FluidResult<ThermoState> {
        validation::validate_input(&input)?;

        let mut backend = self.fluid_in_state(fluid.rfluids_pure(), &input)?;

        let p = backend.pressure().map_err(|e| FluidError::Backend {
            message: format!("rfluids error getting pressure: {}", e),
        })?;
        let t = backend.temperature().map_err(|e| FluidError::Backend {
            message: format!("rfluids error getting temperature: {}", e),
        })?;
        let h = backend.enthalpy().map_err(|e| FluidError::Backend {
            message: format!("rfluids error getting enthalpy: {}", e),
        })?;
        let s = backend.entropy().map_err(|e| FluidError::Backend {
            message: format!("rfluids error getting entropy: {}", e),
        })?;
        // CoolProp reports -1 outside the dome; ThermoState drops it
        let quality = backend.quality().ok();

        ThermoState::new(fluid, pa(p), k(t), h, s, quality)
    }
}
