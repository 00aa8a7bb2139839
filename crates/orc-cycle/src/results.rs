//! Cycle evaluation results.

use crate::advisory::Advisory;
use orc_core::units::{MassRate, Power, Pressure, SpecEnthalpy, Temperature};
use orc_fluids::{ThermoState, WorkingFluid};

/// The four state points of the cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct CycleStates {
    /// State 1: subcooled liquid leaving the condenser
    pub condenser_outlet: ThermoState,
    /// State 2: compressed liquid leaving the pump
    pub pump_outlet: ThermoState,
    /// State 3: superheated vapor leaving the evaporator
    pub evaporator_outlet: ThermoState,
    /// State 4: expanded fluid leaving the turbine
    pub turbine_outlet: ThermoState,
}

impl CycleStates {
    /// States in cycle order as `(index, label, state)`.
    pub fn labelled(&self) -> [(u8, &'static str, &ThermoState); 4] {
        [
            (1, "condenser outlet", &self.condenser_outlet),
            (2, "pump outlet", &self.pump_outlet),
            (3, "evaporator outlet", &self.evaporator_outlet),
            (4, "turbine outlet", &self.turbine_outlet),
        ]
    }
}

/// Derived performance figures. Specific quantities are in J/kg.
#[derive(Debug, Clone, PartialEq)]
pub struct CycleMetrics {
    pub critical_temperature: Temperature,
    /// Evaporating temperature after any clamp
    pub evaporating_temperature: Temperature,
    pub condensing_temperature: Temperature,
    pub evaporating_pressure: Pressure,
    pub condensing_pressure: Pressure,

    pub turbine_work: SpecEnthalpy,
    pub turbine_isentropic_work: SpecEnthalpy,
    pub pump_work: SpecEnthalpy,
    pub pump_isentropic_work: SpecEnthalpy,
    pub net_work: SpecEnthalpy,
    pub heat_in: SpecEnthalpy,
    pub heat_out: SpecEnthalpy,

    pub mass_flow: MassRate,
    /// Net electrical output
    pub net_power: Power,
    pub heat_input_rate: Power,
    pub heat_rejection_rate: Power,
    pub turbine_power: Power,
    pub pump_power: Power,
    /// Net electrical output over heat input (fraction, not percent)
    pub thermal_efficiency: f64,
}

impl CycleMetrics {
    /// First-law residual `q_in - q_out - w_net` [J/kg]; zero for a closed cycle.
    pub fn energy_balance_residual(&self) -> f64 {
        self.heat_in - self.heat_out - self.net_work
    }
}

/// Complete outcome of one evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct CycleSolution {
    pub fluid: WorkingFluid,
    pub states: CycleStates,
    pub metrics: CycleMetrics,
    /// Advisories in the order they were raised
    pub advisories: Vec<Advisory>,
}

impl CycleSolution {
    pub fn clamp_advisories(&self) -> impl Iterator<Item = &Advisory> {
        self.advisories.iter().filter(|a| a.is_clamp())
    }

    pub fn post_run_advisories(&self) -> impl Iterator<Item = &Advisory> {
        self.advisories.iter().filter(|a| !a.is_clamp())
    }
}
