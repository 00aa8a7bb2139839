//! orc-fluids: working-fluid property service for the ORC cycle evaluator.
//!
//! Provides:
//! - Working fluid definitions (CO2, refrigerants, hydrocarbons)
//! - Thermodynamic state representation
//! - `FluidModel` trait for property lookups
//! - CoolProp backend for real fluid properties
//! - Constant-property surrogate backend for quick estimates and tests
//! - Unit-aware parsing of user-entered values
//!
//! # Architecture
//!
//! The `FluidModel` trait isolates the cycle evaluator from backend
//! dependencies. CoolProp (via `rfluids`) is the primary backend; the
//! surrogate needs no native library and is fully deterministic.
//!
//! # Example
//!
//! ```no_run
//! use orc_fluids::{CoolPropModel, FluidModel, StateInput, WorkingFluid};
//! use orc_core::units::{k, pa};
//!
//! let model = CoolPropModel::new();
//! let t_crit = model.critical_temperature(WorkingFluid::CO2).unwrap();
//! let state = model
//!     .state(WorkingFluid::CO2, StateInput::PT { p: pa(5.0e6), t: k(285.15) })
//!     .unwrap();
//! println!("Tc = {} K, h = {} J/kg", t_crit.value, state.enthalpy());
//! ```

pub mod coolprop;
pub mod error;
pub mod fluid;
pub mod model;
pub mod state;
pub mod surrogate;
pub mod units;

// Re-exports for ergonomics
pub use coolprop::CoolPropModel;
pub use error::{FluidError, FluidResult};
pub use fluid::WorkingFluid;
pub use model::FluidModel;
pub use state::{StateInput, ThermoState};
pub use surrogate::ConstantPropertyModel;
pub use units::{Quantity, UnitError, parse_quantity};
