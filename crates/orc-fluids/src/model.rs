//! Fluid property model trait and validation helpers.

use crate::error::{FluidError, FluidResult};
use crate::fluid::WorkingFluid;
use crate::state::{StateInput, ThermoState};
use orc_core::units::{Pressure, Temperature};

/// Trait for fluid property models.
///
/// Implementations must be thread-safe (Send + Sync). Lookups are stateless
/// and idempotent: the same request always yields the same state.
pub trait FluidModel: Send + Sync {
    /// Get the model name (for debugging/logging).
    fn name(&self) -> &str;

    /// Check if this model can evaluate the given fluid.
    fn supports_fluid(&self, fluid: WorkingFluid) -> bool;

    /// Critical temperature of the fluid.
    fn critical_temperature(&self, fluid: WorkingFluid) -> FluidResult<Temperature>;

    /// Critical pressure of the fluid.
    fn critical_pressure(&self, fluid: WorkingFluid) -> FluidResult<Pressure>;

    /// Resolve a full thermodynamic state from two independent properties.
    fn state(&self, fluid: WorkingFluid, input: StateInput) -> FluidResult<ThermoState>;

    /// Saturation pressure at temperature `t` on the boundary given by `quality`.
    ///
    /// For a pure fluid the pressure does not depend on quality; the quality
    /// selects which side of the dome the backend evaluates.
    fn saturation_pressure(
        &self,
        fluid: WorkingFluid,
        t: Temperature,
        quality: f64,
    ) -> FluidResult<Pressure> {
        let state = self.state(fluid, StateInput::TQ { t, q: quality })?;
        Ok(state.pressure())
    }
}

/// Validation helpers for fluid property inputs.
pub(crate) mod validation {
    use super::*;

    /// Ensure pressure is positive and finite.
    pub fn validate_pressure(p: Pressure) -> FluidResult<()> {
        if !p.value.is_finite() || p.value <= 0.0 {
            return Err(FluidError::NonPhysical {
                what: "pressure must be positive and finite",
            });
        }
        Ok(())
    }

    /// Ensure temperature is positive and finite.
    pub fn validate_temperature(t: Temperature) -> FluidResult<()> {
        if !t.value.is_finite() || t.value <= 0.0 {
            return Err(FluidError::NonPhysical {
                what: "temperature must be positive and finite",
            });
        }
        Ok(())
    }

    /// Ensure vapor quality lies in [0, 1].
    pub fn validate_quality(q: f64) -> FluidResult<()> {
        if !q.is_finite() || !(0.0..=1.0).contains(&q) {
            return Err(FluidError::InvalidArg {
                what: "quality must be within [0, 1]",
            });
        }
        Ok(())
    }

    /// Ensure a caloric property is finite (can be negative).
    pub fn validate_finite(v: f64, what: &'static str) -> FluidResult<()> {
        if !v.is_finite() {
            return Err(FluidError::NonPhysical { what });
        }
        Ok(())
    }

    /// Validate both halves of a state input.
    pub fn validate_input(input: &StateInput) -> FluidResult<()> {
        match *input {
            StateInput::PT { p, t } => {
                validate_pressure(p)?;
                validate_temperature(t)
            }
            StateInput::PH { p, h } => {
                validate_pressure(p)?;
                validate_finite(h, "enthalpy must be finite")
            }
            StateInput::PS { p, s } => {
                validate_pressure(p)?;
                validate_finite(s, "entropy must be finite")
            }
            StateInput::TQ { t, q } => {
                validate_temperature(t)?;
                validate_quality(q)
            }
        }
    }
}
