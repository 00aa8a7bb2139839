//! Design parameters for a cycle evaluation.

use crate::error::CycleResult;
use orc_core::numeric::{ensure_fraction, ensure_non_negative, ensure_positive};
use orc_core::units::{Power, TempInterval, Temperature, dk, k, w};
use orc_fluids::WorkingFluid;

/// Fixed scalar inputs of one cycle evaluation.
///
/// `Default` is the reference design point: a 100 kW CO₂ cycle between a
/// 34 °C heat source and a 10 °C heat sink.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignParameters {
    pub fluid: WorkingFluid,
    /// Heat source temperature
    pub source_temperature: Temperature,
    /// Heat sink temperature
    pub sink_temperature: Temperature,
    /// Superheat above the evaporating temperature at the evaporator exit
    pub superheat: TempInterval,
    /// Subcooling below the condensing temperature at the condenser exit
    pub subcool: TempInterval,
    /// Minimum approach between source and working fluid
    pub evaporator_pinch: TempInterval,
    /// Minimum approach between working fluid and sink
    pub condenser_pinch: TempInterval,
    /// Turbine isentropic efficiency (0, 1]
    pub turbine_efficiency: f64,
    /// Pump isentropic efficiency (0, 1]
    pub pump_efficiency: f64,
    /// Generator (shaft to electrical) efficiency (0, 1]
    pub generator_efficiency: f64,
    /// Required net electrical output
    pub target_power: Power,
}

impl Default for DesignParameters {
    fn default() -> Self {
        Self {
            fluid: WorkingFluid::CO2,
            source_temperature: k(307.15),
            sink_temperature: k(283.15),
            superheat: dk(1.5),
            subcool: dk(3.0),
            evaporator_pinch: dk(5.0),
            condenser_pinch: dk(5.0),
            turbine_efficiency: 0.80,
            pump_efficiency: 0.75,
            generator_efficiency: 0.96,
            target_power: w(100e3),
        }
    }
}

impl DesignParameters {
    /// Check every parameter for physical admissibility.
    ///
    /// A source at or below the sink is admissible; it simply produces a
    /// cycle with no useful heat input.
    pub fn validate(&self) -> CycleResult<()> {
        ensure_positive(
            self.source_temperature.value,
            "source temperature must be positive",
        )?;
        ensure_positive(
            self.sink_temperature.value,
            "sink temperature must be positive",
        )?;
        ensure_non_negative(self.superheat.value, "superheat must be non-negative")?;
        ensure_non_negative(self.subcool.value, "subcooling must be non-negative")?;
        ensure_non_negative(
            self.evaporator_pinch.value,
            "evaporator pinch must be non-negative",
        )?;
        ensure_non_negative(
            self.condenser_pinch.value,
            "condenser pinch must be non-negative",
        )?;
        ensure_fraction(
            self.turbine_efficiency,
            "turbine efficiency must be in (0,1]",
        )?;
        ensure_fraction(self.pump_efficiency, "pump efficiency must be in (0,1]")?;
        ensure_fraction(
            self.generator_efficiency,
            "generator efficiency must be in (0,1]",
        )?;
        ensure_positive(self.target_power.value, "target power must be positive")?;
        Ok(())
    }
}
