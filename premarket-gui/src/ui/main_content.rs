use crate::app::PremarketApp;
use crate::ui::table;
use premarket_core::{export, FilterOutcome};

pub fn render(ui: &mut egui::Ui, app: &mut PremarketApp) {
    if app.is_loading {
        ui.vertical_centered(|ui| {
            ui.add_space(50.0);
            ui.spinner();
            ui.label("Fetching pre-open data from NSE...");
        });
        return;
    }

    if let Some(error) = &app.load_error {
        ui.colored_label(egui::Color32::RED, error);
        ui.add_space(10.0);
        ui.label("Use Refresh to start a new session.");
        return;
    }

    let Some(snapshot) = &app.snapshot else {
        return;
    };

    if snapshot.records.is_empty() {
        warning(ui, "No data received from API.");
        return;
    }

    ui.label(format!(
        "{} records received, {} with complete price data",
        snapshot.records.len(),
        snapshot.eligible_count()
    ));
    ui.add_space(10.0);

    match &app.outcome {
        None => {
            ui.label("Set the filter conditions in the sidebar and press Apply Filter.");
        }
        Some(FilterOutcome::Rows(rows)) => {
            ui.horizontal(|ui| {
                ui.label(format!("{} matching rows", rows.len()));
                if ui.button("Copy CSV").clicked() {
                    match export::to_csv_string(rows) {
                        Ok(text) => {
                            ui.ctx().copy_text(text);
                            app.copy_status = "Copied to clipboard".to_string();
                        }
                        Err(e) => {
                            app.copy_status = format!("Error building CSV: {}", e);
                        }
                    }
                }
                if !app.copy_status.is_empty() {
                    ui.label(&app.copy_status);
                }
            });
            ui.add_space(10.0);
            table::render(ui, rows);
        }
        Some(outcome) => {
            if let Some(message) = outcome.message() {
                warning(ui, message);
            }
        }
    }
}

fn warning(ui: &mut egui::Ui, message: &str) {
    ui.colored_label(egui::Color32::YELLOW, format!("⚠ {}", message));
}
