use crate::app::PremarketApp;

pub fn render(ui: &mut egui::Ui, app: &mut PremarketApp) {
    ui.horizontal(|ui| {
        ui.set_height(60.0);

        ui.add_space(10.0);
        ui.heading("NSE Market Data Filter");

        ui.add_space(20.0);
        ui.label(
            egui::RichText::new(format!("Segment: {}", app.client.config().market_key))
                .color(egui::Color32::GRAY)
        );

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.add_space(10.0);

            let refresh = ui.add_enabled(!app.is_loading, egui::Button::new("Refresh"));
            if refresh.on_hover_text("Start a new session and fetch again").clicked() {
                app.start_load();
            }

            ui.add_space(10.0);

            if app.is_loading {
                ui.spinner();
            } else if let Some(snapshot) = &app.snapshot {
                ui.label(format!("Fetched at {}", snapshot.fetched_at.format("%H:%M:%S")));
            }
        });
    });

    ui.separator();
}
