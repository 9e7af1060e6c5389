//! cc-core: shared foundation for the coil calculator.
//!
//! Contains:
//! - units (uom SI types, constructors, unit-qualified input parsing)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CcError, CcResult};
pub use numeric::*;
pub use units::{Quantity, UnitError, parse_quantity};
