// src/gui/components/status_bar.rs

use eframe::egui;

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        if app.loading() {
            ui.spinner();
            let (done, expected) = app.load.counts();
            if expected > 0 {
                ui.label(format!("Loading photos {}/{}", done, expected));
            }
        }

        ui.label(app.status.lock().unwrap().clone());

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if app.state.gui.selection.is_empty() {
                ui.label(format!("{} pieces", app.cards.len()));
            } else {
                ui.label(format!("{} / {} match", app.match_count, app.cards.len()));
            }
            if let Some(id) = app.focus.locked_id() {
                ui.label(format!("focused: {}", id));
            }
        });
    });
}
