// src/gui/components/share_bar.rs
//
// The serialized filter selection as a shareable/bookmarkable string,
// plus refresh and export controls. The text field mirrors the active
// selection until the user edits it; applying parses it back (with or
// without the `#!` marker) and re-runs the match pass.

use eframe::egui;

use crate::csv::Delim;
use crate::filter::FilterSelection;
use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("share").strong());

        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.share_text)
                .desired_width(260.0)
                .hint_text("category=skirt&size=m"),
        );
        if resp.changed() {
            app.share_dirty = true;
        }

        let apply = ui.button("Apply").clicked()
            || (resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)));
        if apply {
            app.state.gui.selection = FilterSelection::parse_fragment(&app.share_text);
            app.selection_changed();
        }

        if ui.button("Clear").clicked() {
            app.state.gui.selection = FilterSelection::default();
            app.selection_changed();
        }

        ui.separator();

        if ui.add_enabled(!app.running, egui::Button::new("Refresh feed")).clicked() {
            let ctx = ui.ctx().clone();
            actions::refresh::spawn(app, &ctx);
        }

        ui.separator();

        let fmt = &mut app.state.options.export.format;
        ui.selectable_value(fmt, Delim::Csv, "CSV");
        ui.selectable_value(fmt, Delim::Tsv, "TSV");
        ui.checkbox(&mut app.state.options.export.include_headers, "Headers");
        ui.add(egui::TextEdit::singleline(&mut app.out_path_text).desired_width(180.0));
        if ui.button("Export").clicked() {
            actions::export::export(app);
        }
    });
}
