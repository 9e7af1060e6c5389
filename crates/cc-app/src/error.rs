//! Error types for the cc-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates and
/// provides a unified error interface for both CLI and GUI.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to read input file: {path}")]
    InputFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Unsupported input format: {path} (expected .yaml, .yml or .json)")]
    UnsupportedFormat { path: PathBuf },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Calculation error: {0}")]
    Calculation(#[from] cc_coil::CoilError),
}

/// Result type for cc-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<cc_core::UnitError> for AppError {
    fn from(err: cc_core::UnitError) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cc_coil::{CalculatorInput, compute_checked};

    #[test]
    fn coil_errors_convert() {
        let input = CalculatorInput {
            num_coils: 0,
            ..CalculatorInput::default()
        };
        let err: AppError = compute_checked(&input).unwrap_err().into();
        assert!(matches!(err, AppError::Calculation(_)));
        assert!(err.to_string().contains("num_coils"));
    }

    #[test]
    fn unit_errors_become_invalid_input() {
        let unit_err =
            cc_core::parse_quantity("3 parsecs", cc_core::Quantity::Length).unwrap_err();
        let err: AppError = unit_err.into();
        assert!(matches!(err, AppError::InvalidInput(msg) if msg.contains("parsecs")));
    }
}
