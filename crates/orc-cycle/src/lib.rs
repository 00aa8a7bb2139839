//! orc-cycle: steady-state evaluator for a simple four-state Rankine cycle.
//!
//! State points:
//! 1. condenser outlet (subcooled liquid)
//! 2. pump outlet
//! 3. evaporator outlet (superheated vapor)
//! 4. turbine outlet
//!
//! The evaluator turns [`DesignParameters`] into a [`CycleSolution`] holding
//! the four states, the derived metrics and any [`Advisory`] raised along the
//! way. Advisories never abort a run; property lookup failures do.

pub mod advisory;
pub mod error;
pub mod evaluator;
pub mod params;
pub mod pump;
pub mod results;
pub mod temperatures;
pub mod turbine;

pub use advisory::Advisory;
pub use error::{CycleError, CycleResult};
pub use evaluator::evaluate;
pub use params::DesignParameters;
pub use pump::{Compression, Pump};
pub use results::{CycleMetrics, CycleSolution, CycleStates};
pub use turbine::{Expansion, Turbine};
