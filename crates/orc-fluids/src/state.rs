//! Thermodynamic state definitions.

use crate::error::{FluidError, FluidResult};
use crate::fluid::WorkingFluid;
use orc_core::units::{Pressure, SpecEnthalpy, SpecEntropy, Temperature};

/// Pair of independent properties used to fix a thermodynamic state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StateInput {
    /// Pressure and temperature (single-phase states).
    PT { p: Pressure, t: Temperature },
    /// Pressure and specific enthalpy.
    PH { p: Pressure, h: SpecEnthalpy },
    /// Pressure and specific entropy.
    PS { p: Pressure, s: SpecEntropy },
    /// Temperature and vapor quality (saturation boundary, 0 = liquid, 1 = vapor).
    TQ { t: Temperature, q: f64 },
}

impl StateInput {
    pub fn label(&self) -> &'static str {
        match self {
            Self::PT { .. } => "P-T",
            Self::PH { .. } => "P-h",
            Self::PS { .. } => "P-s",
            Self::TQ { .. } => "T-Q",
        }
    }
}

/// Fully resolved thermodynamic state of a pure working fluid.
///
/// Pressure and temperature alone do not fix a two-phase state, so the
/// backend reports enthalpy and entropy alongside them. Quality is `Some`
/// only inside the saturation dome.
#[derive(Debug, Clone, PartialEq)]
pub struct ThermoState {
    fluid: WorkingFluid,
    p: Pressure,
    t: Temperature,
    h: SpecEnthalpy,
    s: SpecEntropy,
    quality: Option<f64>,
}

impl ThermoState {
    /// Assemble a state from backend outputs.
    ///
    /// Validates that pressure and temperature are positive and finite and
    /// that enthalpy and entropy are finite.
    pub fn new(
        fluid: WorkingFluid,
        p: Pressure,
        t: Temperature,
        h: SpecEnthalpy,
        s: SpecEntropy,
        quality: Option<f64>,
    ) -> FluidResult<Self> {
        if !p.value.is_finite() || p.value <= 0.0 {
            return Err(FluidError::NonPhysical {
                what: "pressure must be positive and finite",
            });
        }
        if !t.value.is_finite() || t.value <= 0.0 {
            return Err(FluidError::NonPhysical {
                what: "temperature must be positive and finite",
            });
        }
        if !h.is_finite() {
            return Err(FluidError::NonPhysical {
                what: "enthalpy must be finite",
            });
        }
        if !s.is_finite() {
            return Err(FluidError::NonPhysical {
                what: "entropy must be finite",
            });
        }
        let quality = quality.filter(|q| (0.0..=1.0).contains(q));

        Ok(Self {
            fluid,
            p,
            t,
            h,
            s,
            quality,
        })
    }

    pub fn fluid(&self) -> WorkingFluid {
        self.fluid
    }

    pub fn pressure(&self) -> Pressure {
        self.p
    }

    pub fn temperature(&self) -> Temperature {
        self.t
    }

    /// Specific enthalpy [J/kg].
    pub fn enthalpy(&self) -> SpecEnthalpy {
        self.h
    }

    /// Specific entropy [J/(kg·K)].
    pub fn entropy(&self) -> SpecEntropy {
        self.s
    }

    /// Vapor quality, `None` outside the two-phase region.
    pub fn quality(&self) -> Option<f64> {
        self.quality
    }
}
