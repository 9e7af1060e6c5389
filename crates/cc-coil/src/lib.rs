//! cc-coil: closed-form coil parameter calculator.
//!
//! Maps magnet-coil design parameters (field, pole gap, current, conductor
//! geometry) and an optional cooling sub-record to turns count, current
//! density, coolant flow and pressure drop.
//!
//! # Example
//!
//! ```
//! use cc_coil::{CalculatorInput, compute};
//!
//! let output = compute(&CalculatorInput::default());
//! assert!((output.ideal_turns - 540.0).abs() < 1e-6);
//! for entry in output.entries() {
//!     println!("{}: {:?}", entry.label, entry.value);
//! }
//! ```

pub mod calculator;
pub mod constants;
pub mod error;
pub mod input;
pub mod output;
pub mod validate;

// Re-exports for ergonomics
pub use calculator::{compute, compute_checked};
pub use error::{CoilError, CoilResult, DomainErrorKind};
pub use input::{CalculatorInput, CoolingInput};
pub use output::{CalculatorOutput, CoolingOutput, OutputEntry, OutputValue};
pub use validate::validate;
