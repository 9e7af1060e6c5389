//! Calculator domain errors.

use cc_core::CcError;
use thiserror::Error;

/// Result type for checked calculations.
pub type CoilResult<T> = Result<T, CoilError>;

/// Why an input lies outside the calculator's valid domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainErrorKind {
    /// A divisor would be zero or negative (coil count, unit count, conductor area).
    ZeroOrNegativeDenominator,
    /// A physical input must be strictly positive (or non-negative) and finite.
    NonPositiveInput,
}

impl std::fmt::Display for DomainErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroOrNegativeDenominator => f.write_str("zero or negative denominator"),
            Self::NonPositiveInput => f.write_str("non-positive input"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoilError {
    #[error("Invalid domain ({kind}): {field}")]
    InvalidDomain {
        kind: DomainErrorKind,
        field: &'static str,
    },
}

impl CoilError {
    pub fn kind(&self) -> DomainErrorKind {
        match self {
            Self::InvalidDomain { kind, .. } => *kind,
        }
    }

    pub(crate) fn non_positive(field: &'static str) -> Self {
        Self::InvalidDomain {
            kind: DomainErrorKind::NonPositiveInput,
            field,
        }
    }

    pub(crate) fn zero_denominator(field: &'static str) -> Self {
        Self::InvalidDomain {
            kind: DomainErrorKind::ZeroOrNegativeDenominator,
            field,
        }
    }
}

impl From<CcError> for CoilError {
    fn from(err: CcError) -> Self {
        match err {
            CcError::NonFinite { what, .. } | CcError::InvalidArg { what } => {
                CoilError::non_positive(what)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = CoilError::zero_denominator("num_coils");
        let msg = err.to_string();
        assert!(msg.contains("num_coils"));
        assert!(msg.contains("zero or negative denominator"));
    }

    #[test]
    fn core_errors_map_to_non_positive_input() {
        let err: CoilError = CcError::NonFinite {
            what: "current_a",
            value: f64::NAN,
        }
        .into();
        assert_eq!(err.kind(), DomainErrorKind::NonPositiveInput);
        assert_eq!(err, CoilError::non_positive("current_a"));
    }
}
