//! Console report for a finished run.

use crate::run_service::RunResponse;
use orc_core::units::constants::J_PER_KJ;

/// Render the console text for `response`.
///
/// Clamp warnings come first, then the results block, then the heat-input
/// warning if it was raised. `show_states` appends the state-point table
/// and the extended metrics.
pub fn render(response: &RunResponse, show_states: bool) -> String {
    let solution = &response.solution;
    let m = &solution.metrics;
    let mut lines = Vec::new();

    for advisory in solution.clamp_advisories() {
        lines.push(advisory.to_string());
    }

    lines.push(format!("--- {} Results ---", response.name));
    lines.push(format!("Working fluid: {}", solution.fluid));
    lines.push(format!(
        "Evap T [K]: {:.2}, Cond T [K]: {:.2}",
        m.evaporating_temperature.value, m.condensing_temperature.value
    ));
    lines.push(format!("P_net (electrical) [W]: {:.1}", m.net_power.value));
    lines.push(format!(
        "Thermal efficiency (ORC): {:.3} %",
        m.thermal_efficiency * 100.0
    ));
    lines.push(format!(
        "Turbine specific work [kJ/kg]: {:.3}",
        m.turbine_work / J_PER_KJ
    ));
    lines.push(format!(
        "Pump specific work [kJ/kg]: {:.3}",
        m.pump_work / J_PER_KJ
    ));
    lines.push(format!("Mass flow required [kg/s]: {:.3}", m.mass_flow.value));

    for advisory in solution.post_run_advisories() {
        lines.push(advisory.to_string());
    }

    if show_states {
        lines.push(String::new());
        lines.extend(state_table(response));
        lines.push(String::new());
        lines.extend(extended_metrics(response));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn state_table(response: &RunResponse) -> Vec<String> {
    let mut lines = vec![format!(
        "{:<5} {:<18} {:>9} {:>11} {:>11} {:>13} {:>7}",
        "State", "Label", "T [K]", "P [kPa]", "h [kJ/kg]", "s [kJ/(kg K)]", "x [-]"
    )];

    for (index, label, state) in response.solution.states.labelled() {
        let quality = state
            .quality()
            .map(|q| format!("{:.4}", q))
            .unwrap_or_else(|| "-".to_string());
        lines.push(format!(
            "{:<5} {:<18} {:>9.2} {:>11.1} {:>11.3} {:>13.5} {:>7}",
            index,
            label,
            state.temperature().value,
            state.pressure().value / 1e3,
            state.enthalpy() / J_PER_KJ,
            state.entropy() / J_PER_KJ,
            quality
        ));
    }

    lines
}

fn extended_metrics(response: &RunResponse) -> Vec<String> {
    let m = &response.solution.metrics;
    vec![
        format!("Property backend: {}", response.backend_name),
        format!("Critical temperature [K]: {:.2}", m.critical_temperature.value),
        format!(
            "Evap P [kPa]: {:.1}, Cond P [kPa]: {:.1}",
            m.evaporating_pressure.value / 1e3,
            m.condensing_pressure.value / 1e3
        ),
        format!(
            "Isentropic turbine work [kJ/kg]: {:.3}, Isentropic pump work [kJ/kg]: {:.3}",
            m.turbine_isentropic_work / J_PER_KJ,
            m.pump_isentropic_work / J_PER_KJ
        ),
        format!("Net specific work [kJ/kg]: {:.3}", m.net_work / J_PER_KJ),
        format!(
            "Heat input [kW]: {:.3}, Heat rejected [kW]: {:.3}",
            m.heat_input_rate.value / 1e3,
            m.heat_rejection_rate.value / 1e3
        ),
        format!(
            "Turbine shaft power [kW]: {:.3}, Pump power [kW]: {:.3}",
            m.turbine_power.value / 1e3,
            m.pump_power.value / 1e3
        ),
        format!(
            "First-law residual [J/kg]: {:.3e}",
            m.energy_balance_residual()
        ),
    ]
}
