//! Heat-exchanger temperature rules.

use crate::advisory::Advisory;
use orc_core::units::{TempInterval, Temperature, offset};

/// Evaporating temperature is held this far below critical when clamped [K].
pub const EVAPORATING_CRITICAL_MARGIN_K: f64 = 1.0;

/// Evaporator exit temperature is held this far below critical when clamped [K].
pub const SUPERHEAT_CRITICAL_MARGIN_K: f64 = 0.1;

/// A temperature together with the advisory raised if it had to be clamped.
#[derive(Debug, Clone, PartialEq)]
pub struct Clamped {
    pub value: Temperature,
    pub advisory: Option<Advisory>,
}

/// Evaporating temperature: source minus pinch, capped at
/// `t_crit - EVAPORATING_CRITICAL_MARGIN_K`.
///
/// The cap always applies; the advisory is raised only when the candidate
/// is strictly above `t_crit`.
pub fn evaporating_temperature(
    source: Temperature,
    pinch: TempInterval,
    t_crit: Temperature,
) -> Clamped {
    let candidate = offset(source, -pinch.value);
    let ceiling = offset(t_crit, -EVAPORATING_CRITICAL_MARGIN_K);
    let value = if candidate.value > ceiling.value {
        ceiling
    } else {
        candidate
    };

    let advisory = (candidate.value > t_crit.value).then_some(Advisory::EvaporatorClamped {
        candidate,
        clamped: value,
        critical: t_crit,
    });

    Clamped { value, advisory }
}

/// Condensing temperature: sink plus pinch.
pub fn condensing_temperature(sink: Temperature, pinch: TempInterval) -> Temperature {
    offset(sink, pinch.value)
}

/// Evaporator exit temperature: evaporating temperature plus superheat.
///
/// Clamps when the nominal value reaches or exceeds `t_crit`.
pub fn evaporator_exit_temperature(
    t_evap: Temperature,
    superheat: TempInterval,
    t_crit: Temperature,
) -> Clamped {
    let nominal = offset(t_evap, superheat.value);
    if nominal.value >= t_crit.value {
        let clamped = offset(t_crit, -SUPERHEAT_CRITICAL_MARGIN_K);
        Clamped {
            value: clamped,
            advisory: Some(Advisory::SuperheatClamped {
                nominal,
                clamped,
                critical: t_crit,
            }),
        }
    } else {
        Clamped {
            value: nominal,
            advisory: None,
        }
    }
}
