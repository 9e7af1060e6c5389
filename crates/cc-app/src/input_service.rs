//! Calculator input document loading.

use crate::error::{AppError, AppResult};
use cc_coil::CalculatorInput;
use std::path::Path;

/// Supported input document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Yaml,
    Json,
}

impl InputFormat {
    /// Pick the format from the file extension.
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("yaml" | "yml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            _ => Err(AppError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// Load a calculator input document from disk.
pub fn load_input(path: &Path) -> AppResult<CalculatorInput> {
    let format = InputFormat::from_path(path)?;
    let content = std::fs::read_to_string(path).map_err(|source| AppError::InputFileRead {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), ?format, "loading calculator input");
    match format {
        InputFormat::Yaml => parse_input_yaml(&content),
        InputFormat::Json => parse_input_json(&content),
    }
}

pub fn parse_input_yaml(content: &str) -> AppResult<CalculatorInput> {
    Ok(serde_yaml::from_str(content)?)
}

pub fn parse_input_json(content: &str) -> AppResult<CalculatorInput> {
    Ok(serde_json::from_str(content)?)
}

/// The form presets as a YAML document, a starting point for input files.
pub fn default_input_yaml() -> AppResult<String> {
    Ok(serde_yaml::to_string(&CalculatorInput::default())?)
}
