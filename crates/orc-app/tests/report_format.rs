//! Console report checks with the surrogate backend.

use orc_app::report::render;
use orc_app::{Backend, CycleConfig, default_config, run};

fn surrogate(config: CycleConfig) -> CycleConfig {
    CycleConfig {
        backend: Backend::Surrogate,
        ..config
    }
}

#[test]
fn clamp_warnings_precede_results() {
    let config = surrogate(CycleConfig {
        source_temperature: "50 C".into(),
        ..default_config()
    });
    let response = run(&config).unwrap();
    let text = render(&response, false);
    let lines: Vec<&str> = text.lines().collect();

    assert!(lines[0].starts_with(
        "Warning: Evap temperature exceeds critical temperature. Clipped to "
    ));
    assert!(lines[1].starts_with("Warning: Superheated evaporator temp clipped to "));
    assert_eq!(lines[2], "--- ORC CO2 100 kW Results ---");
}

#[test]
fn clamp_warning_reports_clamped_value() {
    let config = surrogate(CycleConfig {
        source_temperature: 330.0_f64.into(),
        ..default_config()
    });
    let response = run(&config).unwrap();
    let text = render(&response, false);

    // Surrogate critical temperature is 304.1282 K
    assert!(text.contains("Clipped to 303.13 K"));
    assert!(text.contains("Superheated evaporator temp clipped to 304.03 K"));
    assert!(text.contains("Evap T [K]: 303.13, Cond T [K]: 288.15"));
}

#[test]
fn non_positive_heat_input_warning_comes_last() {
    // Source colder than sink: the cycle runs backwards
    let config = surrogate(CycleConfig {
        source_temperature: 280.0_f64.into(),
        sink_temperature: 290.0_f64.into(),
        ..default_config()
    });
    let response = run(&config).unwrap();
    let text = render(&response, false);
    let last = text.lines().last().unwrap();

    assert_eq!(
        last,
        "Warning: Computed heat input is non-positive; check temperatures and states."
    );
    assert!(text.starts_with("--- ORC CO2 100 kW Results ---"));
}

#[test]
fn custom_run_name_in_header() {
    let config = surrogate(CycleConfig {
        name: "Pilot plant".to_string(),
        ..default_config()
    });
    let response = run(&config).unwrap();
    assert!(render(&response, false).starts_with("--- Pilot plant Results ---\n"));
}
