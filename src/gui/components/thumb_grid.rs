// src/gui/components/thumb_grid.rs
//
// The visual view: responsive thumbnail columns over the ordered record
// sequence. Column count follows available width (bounded), and every
// pass redistributes the same card sequence into ceil(total/cols)
// buckets — a resize fully replaces the previous column structure.

use eframe::egui::{self, Align, Color32, CursorIcon, RichText, Sense, Stroke, Vec2};
use eframe::egui::load::SizedTexture;

use crate::config::consts::{MAX_COLS, MIN_COL_WIDTH, ZOOM_FACTOR};
use crate::filter::Visibility;
use crate::gui::app::{App, Card};
use crate::sync::{self, Instance, ViewKind};

const SOLD_RED: Color32 = Color32::from_rgb(0xDC, 0x61, 0x49);

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    // Owned copy for the UI boundary; App stays freely mutable below.
    let cards = app.cards.clone();
    if cards.is_empty() {
        ui.label("No pieces yet.");
        return;
    }

    let n = sync::column_count(ui.available_width(), MIN_COL_WIDTH, MAX_COLS);
    let buckets = sync::distribute(cards.len(), n);
    let scroll_target = app.scroll_grid_to.take();

    egui::ScrollArea::vertical()
        .id_salt("thumb_grid")
        .show(ui, |ui| {
            ui.columns(buckets.len(), |cols| {
                let mut start = 0;
                for (ci, &len) in buckets.iter().enumerate() {
                    for card in &cards[start..start + len] {
                        card_ui(&mut cols[ci], app, card, scroll_target.as_deref());
                    }
                    start += len;
                }
            });
        });
}

fn card_ui(ui: &mut egui::Ui, app: &mut App, card: &Card, scroll_target: Option<&str>) {
    let ghost = card.vis == Visibility::FilteredOut;
    let focused = app.focus.locked_id() == Some(card.id.as_str());

    let mut frame = egui::Frame::group(ui.style());
    if focused {
        frame = frame.stroke(Stroke::new(2.0, ui.visuals().selection.stroke.color));
    }

    let inner = frame.show(ui, |ui| {
        ui.set_width(ui.available_width());
        let w = ui.available_width();
        let thumb = Vec2::new(w, w);

        let image_rect = match app.textures.get(&card.id) {
            Some(tex) => {
                let tint = if ghost { Color32::from_white_alpha(40) } else { Color32::WHITE };
                let resp = ui.add(
                    egui::Image::new(SizedTexture::new(tex.id(), thumb)).tint(tint),
                );
                resp.rect
            }
            None => {
                // Photo missing or still loading: flat placeholder.
                let (rect, _) = ui.allocate_exact_size(thumb, Sense::hover());
                ui.painter().rect_filled(rect, 2.0, ui.visuals().faint_bg_color);
                rect
            }
        };

        ui.horizontal(|ui| {
            let mut title = RichText::new(join!(&*card.id, "."));
            if ghost { title = title.weak(); }
            ui.label(title);
            if card.sold {
                ui.label(RichText::new("SOLD").color(SOLD_RED).small());
            }
        });

        image_rect
    });

    let image_rect = inner.inner;
    let rect = inner.response.rect;

    let id = ui.id().with("piece").with(&card.id);
    let resp = ui.interact(rect, id, Sense::click());

    app.registry.register(&card.id, Instance {
        view: ViewKind::Grid,
        rect,
        image_rect: Some(image_rect),
    });

    if resp.hovered() {
        app.hovered_now = Some((ViewKind::Grid, card.id.clone()));
        ui.output_mut(|o| o.cursor_icon = CursorIcon::PointingHand);
    }
    if resp.clicked() {
        app.clicked_now = Some(card.id.clone());
    }
    if scroll_target == Some(card.id.as_str()) {
        resp.scroll_to_me(Some(Align::Center));
    }

    // Magnifier: locked on this piece + pointer inside its photo.
    let pointer = ui.ctx().pointer_hover_pos();
    if app.focus.magnifier_active(&card.id, Some(image_rect), pointer) {
        if let (Some(tex), Some(pos)) = (app.textures.get(&card.id), pointer) {
            let uv = sync::zoom_uv(pos, image_rect, ZOOM_FACTOR);
            ui.painter().image(tex.id(), image_rect, uv, Color32::WHITE);
        }
    }
}
