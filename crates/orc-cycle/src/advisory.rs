//! Non-fatal conditions raised during a cycle evaluation.

use orc_core::units::{Power, Temperature};
use std::fmt;

/// A boundary condition the evaluator worked around or flagged.
///
/// The run still completes; the advisory records what was adjusted.
#[derive(Debug, Clone, PartialEq)]
pub enum Advisory {
    /// Source minus pinch exceeded the critical temperature.
    EvaporatorClamped {
        candidate: Temperature,
        clamped: Temperature,
        critical: Temperature,
    },
    /// Evaporating temperature plus superheat reached the critical temperature.
    SuperheatClamped {
        nominal: Temperature,
        clamped: Temperature,
        critical: Temperature,
    },
    /// Total heat input came out zero or negative.
    NonPositiveHeatInput { heat_input: Power },
}

impl Advisory {
    /// True for the temperature clamps, which are reported before the results.
    pub fn is_clamp(&self) -> bool {
        matches!(
            self,
            Advisory::EvaporatorClamped { .. } | Advisory::SuperheatClamped { .. }
        )
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::EvaporatorClamped { clamped, .. } => write!(
                f,
                "Warning: Evap temperature exceeds critical temperature. Clipped to {:.2} K",
                clamped.value
            ),
            Advisory::SuperheatClamped { clamped, .. } => write!(
                f,
                "Warning: Superheated evaporator temp clipped to {:.2} K",
                clamped.value
            ),
            Advisory::NonPositiveHeatInput { .. } => write!(
                f,
                "Warning: Computed heat input is non-positive; check temperatures and states."
            ),
        }
    }
}
