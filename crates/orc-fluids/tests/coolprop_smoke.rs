//! CoolProp integration tests.
//!
//! Broad tolerances avoid backend version issues while still enforcing
//! physical plausibility.

use orc_core::units::{k, pa};
use orc_fluids::{CoolPropModel, FluidModel, StateInput, WorkingFluid};

#[test]
fn co2_critical_point() {
    let model = CoolPropModel::new();
    let t_crit = model.critical_temperature(WorkingFluid::CO2).unwrap();
    let p_crit = model.critical_pressure(WorkingFluid::CO2).unwrap();

    // 304.13 K, 7.377 MPa
    assert!((t_crit.value - 304.13).abs() < 0.1, "Tc = {} K", t_crit.value);
    assert!(
        (p_crit.value - 7.377e6).abs() < 2e4,
        "Pc = {} Pa",
        p_crit.value
    );
}

#[test]
fn co2_saturation_pressure_at_15c() {
    let model = CoolPropModel::new();
    let p_liq = model
        .saturation_pressure(WorkingFluid::CO2, k(288.15), 0.0)
        .unwrap();
    let p_vap = model
        .saturation_pressure(WorkingFluid::CO2, k(288.15), 1.0)
        .unwrap();

    // About 5.09 MPa
    assert!(p_liq.value > 4.9e6 && p_liq.value < 5.3e6, "Psat = {}", p_liq.value);
    assert!((p_liq.value - p_vap.value).abs() / p_liq.value < 1e-6);
}

#[test]
fn co2_subcooled_liquid_pumping_raises_enthalpy() {
    let model = CoolPropModel::new();
    let p_low = model
        .saturation_pressure(WorkingFluid::CO2, k(288.15), 0.0)
        .unwrap();
    let p_high = model
        .saturation_pressure(WorkingFluid::CO2, k(302.15), 1.0)
        .unwrap();

    let inlet = model
        .state(WorkingFluid::CO2, StateInput::PT { p: p_low, t: k(285.15) })
        .unwrap();
    assert!(inlet.quality().is_none());

    let outlet = model
        .state(
            WorkingFluid::CO2,
            StateInput::PS {
                p: p_high,
                s: inlet.entropy(),
            },
        )
        .unwrap();

    let dh = outlet.enthalpy() - inlet.enthalpy();
    // Roughly v·ΔP for a dense liquid: small and positive
    assert!(dh > 0.0 && dh < 5_000.0, "dh = {} J/kg", dh);
}

#[test]
fn co2_ph_lookup_resolves_two_phase() {
    let model = CoolPropModel::new();
    let liq = model
        .state(WorkingFluid::CO2, StateInput::TQ { t: k(288.15), q: 0.0 })
        .unwrap();
    let vap = model
        .state(WorkingFluid::CO2, StateInput::TQ { t: k(288.15), q: 1.0 })
        .unwrap();
    assert!(vap.enthalpy() > liq.enthalpy());

    let h_mid = 0.5 * (liq.enthalpy() + vap.enthalpy());
    let mid = model
        .state(
            WorkingFluid::CO2,
            StateInput::PH {
                p: liq.pressure(),
                h: h_mid,
            },
        )
        .unwrap();

    let q = mid.quality().expect("mixture should report quality");
    assert!((q - 0.5).abs() < 1e-3, "q = {}", q);
    assert!((mid.temperature().value - 288.15).abs() < 0.05);
}

#[test]
fn r245fa_superheated_vapor() {
    let model = CoolPropModel::new();
    let state = model
        .state(
            WorkingFluid::R245fa,
            StateInput::PT {
                p: pa(200_000.0),
                t: k(350.0),
            },
        )
        .unwrap();
    assert!(state.quality().is_none());
    assert!(state.enthalpy().is_finite());
    assert!(state.entropy() > 0.0);
}
