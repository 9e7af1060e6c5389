//! Rendering of the calculation listing.

use crate::error::AppResult;
use cc_coil::{CalculatorOutput, OutputValue};

/// Floating values get 4 decimals, counts are printed as-is.
pub fn format_value(value: OutputValue) -> String {
    match value {
        OutputValue::Real(v) => format!("{:.4}", v),
        OutputValue::Count(n) => n.to_string(),
    }
}

/// `label: value` lines, one per listing entry.
pub fn render_text(output: &CalculatorOutput) -> String {
    let mut text = String::new();
    for entry in output.entries() {
        text.push_str(entry.label);
        text.push_str(": ");
        text.push_str(&format_value(entry.value));
        text.push('\n');
    }
    text
}

/// The listing as a JSON array of `{label, value}` objects.
///
/// Non-finite values serialize as `null`.
pub fn render_json(output: &CalculatorOutput) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(&output.entries())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cc_coil::{CalculatorInput, compute};

    #[test]
    fn real_values_use_four_decimals() {
        assert_eq!(format_value(OutputValue::Real(550.0)), "550.0000");
        assert_eq!(format_value(OutputValue::Real(1e-6)), "0.0000");
        assert_eq!(format_value(OutputValue::Real(1.80322)), "1.8032");
    }

    #[test]
    fn counts_are_raw() {
        assert_eq!(format_value(OutputValue::Count(14)), "14");
    }

    #[test]
    fn non_finite_values_still_render() {
        assert_eq!(format_value(OutputValue::Real(f64::INFINITY)), "inf");
        assert_eq!(format_value(OutputValue::Real(f64::NAN)), "NaN");
    }

    #[test]
    fn text_report_of_form_presets() {
        let text = render_text(&compute(&CalculatorInput::default()));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 14);
        assert_eq!(lines[0], "Vacuum Permeability (mu0) [H/m]: 0.0000");
        assert_eq!(lines[1], "Conductor Area [mm^2]: 44.3650");
        assert_eq!(lines[3], "Ideal Number of Turns: 540.0000");
        assert_eq!(lines[4], "Total Turns Used: 550.0000");
        assert_eq!(lines[6], "Horizontal Turns (selected): 14");
        assert_eq!(lines[7], "Vertical Turns (selected): 32");
        assert_eq!(lines[10], "Flow in Large Unit [L/min]: 0.0717");
        assert_eq!(lines[12], "Pressure Drop in Large Unit [bar]: 1.2000");
        assert_eq!(lines[13], "Pressure Drop in Small Unit [bar]: 0.8000");
    }

    #[test]
    fn json_report_keeps_order() {
        let json = render_json(&compute(&CalculatorInput::base())).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let entries = value.as_array().unwrap();
        assert_eq!(entries.len(), 8);
        assert_eq!(entries[2]["label"], "Current Density [A/mm^2]");
        assert_eq!(entries[7]["value"], 32);
    }
}
