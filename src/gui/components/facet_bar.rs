// src/gui/components/facet_bar.rs
//
// One chip row per facet dimension, built from the frozen vocabulary.
// Chips are single-slot per dimension: clicking a chip replaces the
// dimension's slug, clicking the active chip clears it.

use eframe::egui;

use crate::filter::Dimension;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    for dim in Dimension::ALL {
        // Owned slug list: size keeps its fixed domain order, the other
        // dimensions enumerate sorted.
        let slugs: Vec<String> = match dim {
            Dimension::Category => app.catalog.facets.category.iter().cloned().collect(),
            Dimension::Style => app.catalog.facets.style.iter().cloned().collect(),
            Dimension::Size => app
                .catalog
                .facets
                .sizes_ordered()
                .into_iter()
                .map(|s| s!(s))
                .collect(),
        };
        if slugs.is_empty() {
            continue;
        }

        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing.x = 6.0;
            ui.label(egui::RichText::new(dim.key()).strong());

            let mut changed = false;
            for slug in &slugs {
                let active = app.state.gui.selection.get(dim) == Some(slug.as_str());
                if ui.selectable_label(active, slug.as_str()).clicked() {
                    app.selection_mut().toggle(dim, slug);
                    changed = true;
                }
            }
            if changed {
                app.selection_changed();
            }
        });
    }
}
