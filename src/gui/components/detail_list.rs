// src/gui/components/detail_list.rs
//
// The info view: one table row per record, same order as the grid.
// Rows register themselves as list instances so hover/focus in the grid
// can find and scroll their twin here, and vice versa.

use eframe::egui::{self, Align, Color32, RichText, Sense};
use egui_extras::{Column, TableBuilder};

use crate::filter::Visibility;
use crate::gui::app::App;
use crate::sync::{Instance, ViewKind};

const SOLD_RED: Color32 = Color32::from_rgb(0xDC, 0x61, 0x49);

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let cards = app.cards.clone();
    if cards.is_empty() {
        ui.label("Catalog is empty — refresh the feed.");
        return;
    }

    let scroll_row = app
        .scroll_list_to
        .take()
        .and_then(|id| cards.iter().position(|c| c.id == id));

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .sense(Sense::click())
        .column(Column::auto().at_least(140.0)) // id. name
        .column(Column::remainder().clip(true)) // tags
        .column(Column::auto().at_least(60.0))  // size
        .column(Column::auto().at_least(70.0))  // price
        .column(Column::auto().at_least(90.0)); // cart / sold

    if let Some(ix) = scroll_row {
        table = table.scroll_to_row(ix, Some(Align::Center));
    }

    table
        .header(24.0, |mut header| {
            for title in ["Piece", "Tags", "Size", "Price", ""] {
                header.col(|ui| {
                    ui.label(RichText::new(title).strong());
                });
            }
        })
        .body(|body| {
            body.rows(26.0, cards.len(), |mut row| {
                let card = &cards[row.index()];
                let ghost = card.vis == Visibility::FilteredOut;
                let focused = app.focus.locked_id() == Some(card.id.as_str());
                row.set_selected(focused);

                let text = |s: &str| {
                    let rt = RichText::new(s);
                    if ghost { rt.weak() } else { rt }
                };

                row.col(|ui| { ui.label(text(&card.title)); });
                row.col(|ui| { ui.label(text(&card.tags.join(" · "))); });
                row.col(|ui| { ui.label(text(&card.size)); });
                row.col(|ui| { ui.label(text(&card.price)); });
                row.col(|ui| {
                    match &card.cart {
                        Some(item) => {
                            // The actual cart widget is an external
                            // capability; absent one, adding is a no-op
                            // we only log.
                            let add = ui.small_button("Add to cart").on_hover_text(format!(
                                "{} — {}",
                                item.name, item.price
                            ));
                            if add.clicked() {
                                logf!("Cart: add id={} price={}", item.id, item.price);
                                app.status(format!("Added {} to cart", item.name));
                            }
                        }
                        None => {
                            ui.label(RichText::new("SOLD").color(SOLD_RED));
                        }
                    }
                });

                let resp = row.response();
                app.registry.register(&card.id, Instance {
                    view: ViewKind::List,
                    rect: resp.rect,
                    image_rect: None,
                });
                if resp.hovered() {
                    app.hovered_now = Some((ViewKind::List, card.id.clone()));
                }
                if resp.clicked() {
                    app.clicked_now = Some(card.id.clone());
                }
            });
        });
}
