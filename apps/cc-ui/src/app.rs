use crate::form::FormState;
use crate::results_view;
use cc_app::CalcResponse;

#[derive(Default)]
pub struct CoilCalculatorApp {
    form: FormState,
    last_response: Option<CalcResponse>,
    last_error: Option<String>,
}

impl CoilCalculatorApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// One button press: run the form's request and keep the outcome for display.
    fn calculate(&mut self) {
        match cc_app::run(&self.form.to_request()) {
            Ok(response) => {
                self.last_response = Some(response);
                self.last_error = None;
            }
            Err(err) => {
                self.last_response = None;
                self.last_error = Some(err.to_string());
            }
        }
    }
}

impl eframe::App for CoilCalculatorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("input_panel")
            .resizable(true)
            .default_width(420.0)
            .show(ctx, |ui| {
                ui.heading("Input Parameters");
                ui.separator();
                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.form.show(ui);
                    ui.add_space(12.0);
                    if ui.button("Calculate").clicked() {
                        self.calculate();
                    }
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("90° Double Focus Coil Calculator");
            ui.separator();

            if let Some(err) = &self.last_error {
                ui.colored_label(egui::Color32::RED, format!("✗ {}", err));
            } else if let Some(response) = &self.last_response {
                results_view::show(ui, response);
            } else {
                ui.label("Set the input parameters and press Calculate.");
            }
        });
    }
}
