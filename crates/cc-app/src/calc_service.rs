//! The calculation request/response call used by both front ends.

use crate::error::AppResult;
use cc_coil::{CalculatorInput, CalculatorOutput, compute, compute_checked};

/// How inputs outside the valid domain are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DomainPolicy {
    /// Compute anyway; invalid domains show up as non-finite values.
    #[default]
    Permissive,
    /// Reject the input before computing.
    Strict,
}

#[derive(Debug, Clone)]
pub struct CalcRequest {
    pub input: CalculatorInput,
    pub policy: DomainPolicy,
}

impl CalcRequest {
    pub fn new(input: CalculatorInput) -> Self {
        Self {
            input,
            policy: DomainPolicy::default(),
        }
    }

    pub fn strict(mut self) -> Self {
        self.policy = DomainPolicy::Strict;
        self
    }
}

#[derive(Debug, Clone)]
pub struct CalcResponse {
    pub output: CalculatorOutput,
    /// Listing labels whose values are NaN or infinite
    pub non_finite: Vec<&'static str>,
}

/// Run one calculation.
pub fn run(request: &CalcRequest) -> AppResult<CalcResponse> {
    tracing::debug!(
        policy = ?request.policy,
        cooling = request.input.cooling.is_some(),
        "running coil calculation"
    );

    let output = match request.policy {
        DomainPolicy::Permissive => compute(&request.input),
        DomainPolicy::Strict => compute_checked(&request.input)?,
    };

    let non_finite = output.non_finite_labels();
    if !non_finite.is_empty() {
        tracing::warn!(labels = ?non_finite, "calculation produced non-finite values");
    }

    Ok(CalcResponse { output, non_finite })
}
