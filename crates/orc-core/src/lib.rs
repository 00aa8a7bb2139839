//! orc-core: stable foundation for the ORC cycle workspace.
//!
//! Contains:
//! - units (uom SI types + constructors)
//! - numeric (Real + range-checking helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CoreError, CoreResult};
pub use numeric::*;
pub use units::*;
