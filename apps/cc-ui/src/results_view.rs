use cc_app::{CalcResponse, format_value};
use egui_extras::{Column, TableBuilder};

pub fn show(ui: &mut egui::Ui, response: &CalcResponse) {
    ui.heading("Calculation Results");
    ui.add_space(4.0);

    let entries = response.output.entries();

    TableBuilder::new(ui)
        .striped(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::initial(300.0).at_least(200.0)) // Label
        .column(Column::remainder().at_least(100.0)) // Value
        .header(22.0, |mut header| {
            header.col(|ui| {
                ui.strong("Quantity");
            });
            header.col(|ui| {
                ui.strong("Value");
            });
        })
        .body(|mut body| {
            for entry in &entries {
                body.row(20.0, |mut row| {
                    row.col(|ui| {
                        ui.strong(entry.label);
                    });
                    row.col(|ui| {
                        let text = egui::RichText::new(format_value(entry.value)).monospace();
                        if entry.value.is_finite() {
                            ui.label(text);
                        } else {
                            ui.label(text.color(egui::Color32::RED))
                                .on_hover_text("Input outside the valid domain");
                        }
                    });
                });
            }
        });

    if !response.non_finite.is_empty() {
        ui.add_space(6.0);
        ui.colored_label(
            egui::Color32::from_rgb(200, 120, 0),
            format!("⚠ {} value(s) are not finite", response.non_finite.len()),
        );
    }
}
