//! Input form state and widgets.

use cc_app::{CalcRequest, DomainPolicy};
use cc_coil::{CalculatorInput, CoolingInput};
use egui::{DragValue, Ui};

/// Everything the input panel edits, kept across frames.
pub struct FormState {
    pub input: CalculatorInput,
    /// Cooling values stay editable while the cooling estimate is off
    pub cooling: CoolingInput,
    pub cooling_enabled: bool,
    pub strict: bool,
}

impl Default for FormState {
    fn default() -> Self {
        let preset = CalculatorInput::default();
        Self {
            cooling_enabled: preset.cooling.is_some(),
            cooling: preset.cooling.clone().unwrap_or_default(),
            input: CalculatorInput {
                cooling: None,
                ..preset
            },
            strict: false,
        }
    }
}

impl FormState {
    pub fn to_input(&self) -> CalculatorInput {
        CalculatorInput {
            cooling: self.cooling_enabled.then(|| self.cooling.clone()),
            ..self.input.clone()
        }
    }

    pub fn to_request(&self) -> CalcRequest {
        CalcRequest {
            input: self.to_input(),
            policy: if self.strict {
                DomainPolicy::Strict
            } else {
                DomainPolicy::Permissive
            },
        }
    }

    pub fn show(&mut self, ui: &mut Ui) {
        let input = &mut self.input;
        egui::Grid::new("coil_input_grid")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                real_row(ui, "Required Magnetic Field Breq (T)", &mut input.required_field_t, 0.01);
                real_row(ui, "Pole Gap (mm)", &mut input.pole_gap_mm, 1.0);
                real_row(ui, "Operating Current (A)", &mut input.current_a, 1.0);
                real_row(ui, "Conductor Side Length (mm)", &mut input.conductor_side_mm, 0.1);
                real_row(ui, "Cooling Duct Diameter (mm)", &mut input.cooling_duct_diameter_mm, 0.1);
                real_row(ui, "Correction Factor", &mut input.correction_factor, 0.01);
                count_row(ui, "Added Turns", &mut input.added_turns);
                count_row(ui, "Number of Coils", &mut input.num_coils);
                count_row(ui, "Horizontal Turns (selected)", &mut input.horizontal_turns_selected);
                count_row(ui, "Vertical Turns (selected)", &mut input.vertical_turns_selected);
            });

        ui.add_space(8.0);
        ui.checkbox(&mut self.cooling_enabled, "Include cooling estimate");

        let cooling = &mut self.cooling;
        ui.add_enabled_ui(self.cooling_enabled, |ui| {
            egui::Grid::new("coil_cooling_grid")
                .num_columns(2)
                .spacing([12.0, 6.0])
                .show(ui, |ui| {
                    real_row(ui, "Dissipated Power per Coil (W)", &mut cooling.power_per_coil_w, 1.0);
                    count_row(ui, "Number of Large Cooling Units", &mut cooling.num_large_units);
                    count_row(ui, "Number of Small Cooling Units", &mut cooling.num_small_units);
                    real_row(ui, "Allowed Temperature Rise ΔT (°C)", &mut cooling.allowed_delta_t_c, 0.5);
                    real_row(ui, "Available Water Pressure (bar)", &mut cooling.available_pressure_bar, 0.1);
                });
        });

        ui.add_space(8.0);
        ui.checkbox(&mut self.strict, "Reject invalid inputs")
            .on_hover_text("Report an error instead of showing inf/NaN results");
    }
}

fn real_row(ui: &mut Ui, label: &str, value: &mut f64, speed: f64) {
    ui.label(label);
    ui.add(DragValue::new(value).speed(speed).max_decimals(6));
    ui.end_row();
}

fn count_row(ui: &mut Ui, label: &str, value: &mut u32) {
    ui.label(label);
    ui.add(DragValue::new(value).speed(0.2));
    ui.end_row();
}
