//! Shared application service layer for the coil calculator.
//!
//! This crate provides a unified interface for both CLI and GUI frontends:
//! loading input documents, running a calculation request, and rendering
//! the resulting listing.

pub mod calc_service;
pub mod error;
pub mod input_service;
pub mod report;

// Re-export key types for convenience
pub use calc_service::{CalcRequest, CalcResponse, DomainPolicy, run};
pub use error::{AppError, AppResult};
pub use input_service::{
    InputFormat, default_input_yaml, load_input, parse_input_json, parse_input_yaml,
};
pub use report::{format_value, render_json, render_text};
