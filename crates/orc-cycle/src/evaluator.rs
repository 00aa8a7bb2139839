//! Four-state cycle evaluation.

use crate::advisory::Advisory;
use crate::error::{CycleError, CycleResult};
use crate::params::DesignParameters;
use crate::pump::Pump;
use crate::results::{CycleMetrics, CycleSolution, CycleStates};
use crate::temperatures::{
    condensing_temperature, evaporating_temperature, evaporator_exit_temperature,
};
use crate::turbine::Turbine;
use orc_core::units::{kgps, offset, w};
use orc_fluids::{FluidError, FluidModel, StateInput, ThermoState};
use tracing::{debug, info};

/// Evaluate the cycle described by `params` using `model` for properties.
///
/// Steps run in a fixed order: temperatures, saturation pressures, the four
/// state points, then specific and total quantities. Advisories are
/// collected in the order raised; any property failure aborts the run.
///
/// # Errors
/// - `InvalidArg` if a parameter is out of range
/// - `Fluid` if the backend cannot evaluate a state
/// - `NonPhysical` if the net specific work leaves no finite mass flow
pub fn evaluate(model: &dyn FluidModel, params: &DesignParameters) -> CycleResult<CycleSolution> {
    params.validate()?;

    let fluid = params.fluid;
    if !model.supports_fluid(fluid) {
        return Err(CycleError::Fluid(FluidError::NotSupported {
            what: "working fluid not available in the selected property model",
        }));
    }

    let mut advisories = Vec::new();

    // Heat-exchanger temperatures
    let t_crit = model.critical_temperature(fluid)?;
    let evap = evaporating_temperature(params.source_temperature, params.evaporator_pinch, t_crit);
    let t_evap = evap.value;
    if let Some(advisory) = evap.advisory {
        info!(%advisory, "evaporating temperature clamped");
        advisories.push(advisory);
    }
    let t_cond = condensing_temperature(params.sink_temperature, params.condenser_pinch);

    let p_evap = model.saturation_pressure(fluid, t_evap, 1.0)?;
    let p_cond = model.saturation_pressure(fluid, t_cond, 0.0)?;
    debug!(
        fluid = %fluid,
        t_crit_k = t_crit.value,
        t_evap_k = t_evap.value,
        t_cond_k = t_cond.value,
        p_evap_pa = p_evap.value,
        p_cond_pa = p_cond.value,
        "saturation conditions"
    );

    // State 1: subcooled liquid
    let t1 = offset(t_cond, -params.subcool.value);
    let state1 = model.state(fluid, StateInput::PT { p: p_cond, t: t1 })?;
    trace_state(1, &state1);

    // State 2: pump outlet
    let pump = Pump::new(params.pump_efficiency)?;
    let compression = pump.compress(model, &state1, p_evap)?;
    trace_state(2, &compression.outlet);

    // State 3: evaporator outlet
    let exit = evaporator_exit_temperature(t_evap, params.superheat, t_crit);
    if let Some(advisory) = exit.advisory {
        info!(%advisory, "evaporator exit temperature clamped");
        advisories.push(advisory);
    }
    let state3 = model.state(
        fluid,
        StateInput::PT {
            p: p_evap,
            t: exit.value,
        },
    )?;
    trace_state(3, &state3);

    // State 4: turbine outlet
    let turbine = Turbine::new(params.turbine_efficiency)?;
    let expansion = turbine.expand(model, &state3, p_cond)?;
    trace_state(4, &expansion.outlet);

    let h1 = state1.enthalpy();
    let h2 = compression.outlet.enthalpy();
    let h3 = state3.enthalpy();
    let h4 = expansion.outlet.enthalpy();

    let heat_in = h3 - h2;
    let heat_out = h4 - h1;
    let turbine_work = h3 - h4;
    let pump_work = h2 - h1;
    let net_work = turbine_work - pump_work;

    let electrical_work = net_work * params.generator_efficiency;
    let mass_flow = params.target_power.value / electrical_work;
    if electrical_work == 0.0 || !mass_flow.is_finite() {
        return Err(CycleError::NonPhysical {
            what: "net specific work leaves no finite mass flow",
        });
    }

    let net_power = mass_flow * electrical_work;
    let heat_input_rate = mass_flow * heat_in;
    let thermal_efficiency = net_power / heat_input_rate;

    if heat_input_rate <= 0.0 {
        let advisory = Advisory::NonPositiveHeatInput {
            heat_input: w(heat_input_rate),
        };
        info!(%advisory, heat_input_w = heat_input_rate, "heat input check failed");
        advisories.push(advisory);
    }

    let metrics = CycleMetrics {
        critical_temperature: t_crit,
        evaporating_temperature: t_evap,
        condensing_temperature: t_cond,
        evaporating_pressure: p_evap,
        condensing_pressure: p_cond,
        turbine_work,
        turbine_isentropic_work: expansion.isentropic_work,
        pump_work,
        pump_isentropic_work: compression.isentropic_work,
        net_work,
        heat_in,
        heat_out,
        mass_flow: kgps(mass_flow),
        net_power: w(net_power),
        heat_input_rate: w(heat_input_rate),
        heat_rejection_rate: w(mass_flow * heat_out),
        turbine_power: w(mass_flow * turbine_work),
        pump_power: w(mass_flow * pump_work),
        thermal_efficiency,
    };

    info!(
        model = model.name(),
        net_power_w = net_power,
        mass_flow_kgps = mass_flow,
        thermal_efficiency,
        advisories = advisories.len(),
        "cycle evaluated"
    );

    Ok(CycleSolution {
        fluid,
        states: CycleStates {
            condenser_outlet: state1,
            pump_outlet: compression.outlet,
            evaporator_outlet: state3,
            turbine_outlet: expansion.outlet,
        },
        metrics,
        advisories,
    })
}

fn trace_state(index: u8, state: &ThermoState) {
    debug!(
        state = index,
        t_k = state.temperature().value,
        p_pa = state.pressure().value,
        h_j_per_kg = state.enthalpy(),
        s_j_per_kg_k = state.entropy(),
        quality = ?state.quality(),
        "state point"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use orc_core::units::{Pressure, Temperature, dk, k, pa, w};
    use orc_fluids::{ConstantPropertyModel, FluidResult, WorkingFluid};

    fn surrogate() -> ConstantPropertyModel {
        ConstantPropertyModel::carbon_dioxide()
    }

    #[test]
    fn reference_point_with_surrogate() {
        let solution = evaluate(&surrogate(), &DesignParameters::default()).unwrap();
        let m = &solution.metrics;

        assert!(solution.advisories.is_empty());
        assert!((m.evaporating_temperature.value - 302.15).abs() < 1e-9);
        assert!((m.condensing_temperature.value - 288.15).abs() < 1e-9);
        assert!(m.net_work > 0.0);
        assert!(m.mass_flow.value > 0.0);
        assert!(m.thermal_efficiency > 0.0 && m.thermal_efficiency < 0.15);
        assert!((m.net_power.value - 100e3).abs() < 1e-6);
    }

    #[test]
    fn state_points_follow_the_cycle() {
        let solution = evaluate(&surrogate(), &DesignParameters::default()).unwrap();
        let s = &solution.states;

        assert!((s.condenser_outlet.temperature().value - 285.15).abs() < 1e-9);
        assert_eq!(s.pump_outlet.pressure(), s.evaporator_outlet.pressure());
        assert_eq!(s.turbine_outlet.pressure(), s.condenser_outlet.pressure());
        assert!((s.evaporator_outlet.temperature().value - 303.65).abs() < 1e-9);
        assert!(s.pump_outlet.enthalpy() > s.condenser_outlet.enthalpy());
        assert!(s.turbine_outlet.enthalpy() < s.evaporator_outlet.enthalpy());
    }

    #[test]
    fn energy_balance_closes() {
        let solution = evaluate(&surrogate(), &DesignParameters::default()).unwrap();
        assert!(solution.metrics.energy_balance_residual().abs() < 1e-6);
    }

    #[test]
    fn hot_source_clamps_evaporator() {
        let params = DesignParameters {
            source_temperature: k(320.0),
            ..Default::default()
        };
        let solution = evaluate(&surrogate(), &params).unwrap();
        let t_crit = surrogate().t_crit;

        assert!((solution.metrics.evaporating_temperature.value - (t_crit - 1.0)).abs() < 1e-9);
        assert!(matches!(
            solution.advisories.first(),
            Some(Advisory::EvaporatorClamped { .. })
        ));
        // Superheat of 1.5 K now crosses critical as well
        assert!(matches!(
            solution.advisories.get(1),
            Some(Advisory::SuperheatClamped { .. })
        ));
        assert!(
            (solution.states.evaporator_outlet.temperature().value - (t_crit - 0.1)).abs() < 1e-9
        );
    }

    #[test]
    fn large_superheat_is_clamped_alone() {
        let params = DesignParameters {
            superheat: dk(3.0),
            ..Default::default()
        };
        let solution = evaluate(&surrogate(), &params).unwrap();
        assert_eq!(solution.advisories.len(), 1);
        assert!(matches!(
            solution.advisories[0],
            Advisory::SuperheatClamped { .. }
        ));
    }

    #[test]
    fn unsupported_fluid_is_rejected() {
        let params = DesignParameters {
            fluid: WorkingFluid::R245fa,
            ..Default::default()
        };
        let err = evaluate(&surrogate(), &params).unwrap_err();
        assert!(matches!(err, CycleError::Fluid(FluidError::NotSupported { .. })));
    }

    #[test]
    fn invalid_parameters_are_rejected_before_lookups() {
        let params = DesignParameters {
            pump_efficiency: 0.0,
            ..Default::default()
        };
        let err = evaluate(&surrogate(), &params).unwrap_err();
        assert!(matches!(err, CycleError::InvalidArg { .. }));
    }

    #[test]
    fn power_target_scales_mass_flow() {
        let base = evaluate(&surrogate(), &DesignParameters::default()).unwrap();
        let doubled = evaluate(
            &surrogate(),
            &DesignParameters {
                target_power: w(200e3),
                ..Default::default()
            },
        )
        .unwrap();
        let ratio = doubled.metrics.mass_flow.value / base.metrics.mass_flow.value;
        assert!((ratio - 2.0).abs() < 1e-12);
        assert_eq!(base.metrics.thermal_efficiency, doubled.metrics.thermal_efficiency);
    }

    /// Returns the same enthalpy and entropy for every state, so no process
    /// exchanges any work.
    struct FlatEnthalpyModel;

    impl FluidModel for FlatEnthalpyModel {
        fn name(&self) -> &str {
            "FlatEnthalpy"
        }

        fn supports_fluid(&self, _fluid: WorkingFluid) -> bool {
            true
        }

        fn critical_temperature(&self, _fluid: WorkingFluid) -> FluidResult<Temperature> {
            Ok(k(400.0))
        }

        fn critical_pressure(&self, _fluid: WorkingFluid) -> FluidResult<Pressure> {
            Ok(pa(8.0e6))
        }

        fn state(&self, fluid: WorkingFluid, input: StateInput) -> FluidResult<ThermoState> {
            let (p, t) = match input {
                StateInput::PT { p, t } => (p, t),
                StateInput::PH { p, .. } | StateInput::PS { p, .. } => (p, k(300.0)),
                StateInput::TQ { t, .. } => (pa(5.0e6), t),
            };
            ThermoState::new(fluid, p, t, 250e3, 1.2e3, None)
        }
    }

    #[test]
    fn zero_net_work_is_non_physical() {
        let err = evaluate(&FlatEnthalpyModel, &DesignParameters::default()).unwrap_err();
        assert!(matches!(err, CycleError::NonPhysical { .. }));
    }

    #[test]
    fn candidate_at_critical_is_capped_and_completes() {
        let t_crit = surrogate().t_crit;
        let params = DesignParameters {
            source_temperature: k(t_crit + 5.0),
            ..Default::default()
        };
        let solution = evaluate(&surrogate(), &params).unwrap();
        let m = &solution.metrics;

        assert!((m.evaporating_temperature.value - (t_crit - 1.0)).abs() < 1e-9);
        assert!(
            !solution
                .advisories
                .iter()
                .any(|a| matches!(a, Advisory::EvaporatorClamped { .. }))
        );
        assert!(m.heat_input_rate.value > 0.0);
    }

    #[test]
    fn candidate_just_below_critical_keeps_superheated_exit() {
        let t_crit = surrogate().t_crit;
        let params = DesignParameters {
            source_temperature: k(t_crit - 0.05 + 5.0),
            ..Default::default()
        };
        let solution = evaluate(&surrogate(), &params).unwrap();
        let t_evap = solution.metrics.evaporating_temperature.value;
        let t3 = solution.states.evaporator_outlet.temperature().value;

        assert!((t_evap - (t_crit - 1.0)).abs() < 1e-9);
        assert!(t3 >= t_evap);
        assert!(solution.post_run_advisories().next().is_none());
        assert!(solution.metrics.heat_input_rate.value > 0.0);
    }

    #[test]
    fn evaluation_is_deterministic() {
        let a = evaluate(&surrogate(), &DesignParameters::default()).unwrap();
        let b = evaluate(&surrogate(), &DesignParameters::default()).unwrap();
        assert_eq!(a, b);
    }
}
