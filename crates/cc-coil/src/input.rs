//! Calculator input records.
//!
//! Field values are in the calculator's display units (T, mm, A, W, °C,
//! bar). `Default` gives the presets of the input form.

use serde::{Deserialize, Serialize};

/// Coil design parameters, with an optional cooling sub-record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorInput {
    /// Required magnetic field [T]
    pub required_field_t: f64,
    /// Pole gap [mm]
    pub pole_gap_mm: f64,
    /// Operating current [A]
    pub current_a: f64,
    /// Side length of the square conductor [mm]
    pub conductor_side_mm: f64,
    /// Diameter of the cooling duct through the conductor [mm]
    pub cooling_duct_diameter_mm: f64,
    /// Correction factor from the excitation curve
    #[serde(default = "default_correction_factor")]
    pub correction_factor: f64,
    #[serde(default = "default_added_turns")]
    pub added_turns: u32,
    #[serde(default = "default_num_coils")]
    pub num_coils: u32,
    /// Manually selected turns, reported unchanged
    #[serde(default = "default_horizontal_turns")]
    pub horizontal_turns_selected: u32,
    #[serde(default = "default_vertical_turns")]
    pub vertical_turns_selected: u32,
    /// Cooling parameters; when absent no cooling quantities are computed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooling: Option<CoolingInput>,
}

/// Water cooling parameters for one coil.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoolingInput {
    /// Dissipated power per coil [W]
    pub power_per_coil_w: f64,
    pub num_large_units: u32,
    pub num_small_units: u32,
    /// Allowed coolant temperature rise [°C]
    pub allowed_delta_t_c: f64,
    /// Available water pressure [bar]
    pub available_pressure_bar: f64,
}

fn default_correction_factor() -> f64 {
    1.0
}

fn default_added_turns() -> u32 {
    10
}

fn default_num_coils() -> u32 {
    1
}

fn default_horizontal_turns() -> u32 {
    14
}

fn default_vertical_turns() -> u32 {
    32
}

impl Default for CalculatorInput {
    fn default() -> Self {
        Self {
            required_field_t: 0.27,
            pole_gap_mm: 160.0,
            current_a: 80.0,
            conductor_side_mm: 8.0,
            cooling_duct_diameter_mm: 5.0,
            correction_factor: default_correction_factor(),
            added_turns: default_added_turns(),
            num_coils: default_num_coils(),
            horizontal_turns_selected: default_horizontal_turns(),
            vertical_turns_selected: default_vertical_turns(),
            cooling: Some(CoolingInput::default()),
        }
    }
}

impl Default for CoolingInput {
    fn default() -> Self {
        Self {
            power_per_coil_w: 100.0,
            num_large_units: 1,
            num_small_units: 1,
            allowed_delta_t_c: 20.0,
            available_pressure_bar: 2.0,
        }
    }
}

impl CalculatorInput {
    /// Form presets without the cooling sub-record.
    pub fn base() -> Self {
        Self {
            cooling: None,
            ..Self::default()
        }
    }

    pub fn with_cooling(mut self, cooling: CoolingInput) -> Self {
        self.cooling = Some(cooling);
        self
    }
}
