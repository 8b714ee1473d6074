// src/gui/app.rs
use std::{
    collections::HashMap,
    error::Error,
    sync::{Arc, Mutex, mpsc},
};

use eframe::egui::{self, ColorImage, TextureHandle};

use crate::{
    cart::{self, CartItem},
    catalog::Catalog,
    config::{consts::PAGE_URL, state::AppState},
    feed,
    filter::{self, Visibility},
    progress::LoadTracker,
    store,
    sync::{Focus, InstanceRegistry},
};

pub fn run(mut options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    let state = AppState::default();
    options.viewport = options
        .viewport
        .with_inner_size([state.gui.window_w as f32, state.gui.window_h as f32]);
    eframe::run_native(
        "Lookbook",
        options,
        Box::new(move |cc| Ok(Box::new(App::new(state, &cc.egui_ctx)))),
    )?;
    Ok(())
}

/// Fully-derived presentation payload for one record, one per view
/// instance. Rebuilt by `rebuild_view` on every catalog or selection
/// change; the view components materialize owned copies per pass.
#[derive(Clone, Debug)]
pub struct Card {
    pub id: String,
    pub title: String,
    pub price: String,
    pub size: String,
    pub tags: Vec<String>,
    pub sold: bool,
    pub vis: Visibility,
    /// Cart attribute set; `None` for sold pieces (commerce-inert).
    pub cart: Option<CartItem>,
}

/// One finished photo load: decoded image, or `None` on failure.
/// Both count as progress for the loading indicator.
pub type PhotoResult = (String, Option<ColorImage>);

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // canonical catalog + derived view payloads
    pub catalog: Catalog,
    pub cards: Vec<Card>,
    pub match_count: usize,

    // dual-view sync (rebuilt each pass / per interaction)
    pub focus: Focus,
    pub registry: InstanceRegistry,
    pub hovered_now: Option<(crate::sync::ViewKind, String)>,
    pub clicked_now: Option<String>,
    pub scroll_grid_to: Option<String>,
    pub scroll_list_to: Option<String>,

    // share field UX (we map this <-> FilterSelection)
    pub share_text: String,
    pub share_dirty: bool,

    // status/progress (workers write here)
    pub status: Arc<Mutex<String>>,
    pub running: bool,
    pub feed_rx: Option<mpsc::Receiver<Result<String, String>>>,

    // photo pipeline
    pub photo_rx: Option<mpsc::Receiver<PhotoResult>>,
    pub textures: HashMap<String, TextureHandle>,
    pub load: LoadTracker,

    // export path text field
    pub out_path_text: String,
}

impl App {
    pub fn new(state: AppState, ctx: &egui::Context) -> Self {
        let out_path_text = state.options.export.out_path().to_string_lossy().into_owned();

        let mut app = Self {
            state,
            catalog: Catalog::default(),
            cards: Vec::new(),
            match_count: 0,
            focus: Focus::Unlocked,
            registry: InstanceRegistry::default(),
            hovered_now: None,
            clicked_now: None,
            scroll_grid_to: None,
            scroll_list_to: None,
            share_text: s!(),
            share_dirty: false,
            status: Arc::new(Mutex::new(s!("Idle"))),
            running: false,
            feed_rx: None,
            photo_rx: None,
            textures: HashMap::new(),
            load: LoadTracker::default(),
            out_path_text,
        };

        // Last snapshot first, so something renders while the fetch runs.
        match store::load_feed() {
            Ok(text) => {
                logf!("Cache: loaded feed snapshot ({} bytes)", text.len());
                app.ingest(&text, ctx);
                app.status("Loaded cached feed");
            }
            Err(e) => {
                logd!("Cache: no feed snapshot ({})", e);
            }
        }

        super::actions::refresh::spawn(&mut app, ctx);
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *self.status.lock().unwrap() = msg.into();
    }

    pub fn selection_mut(&mut self) -> &mut crate::filter::FilterSelection {
        &mut self.state.gui.selection
    }

    /// Whether the blocking loading indicator is up: the feed fetch is
    /// outstanding, or photos are still loading within the safety window.
    pub fn loading(&self) -> bool {
        (self.running && self.catalog.records.is_empty()) || self.load.loading()
    }

    /* ---------- ingestion ---------- */

    /// Full rebuild from feed text: catalog, facets, photos, view.
    /// No incremental path; prior derived state is discarded wholesale.
    pub fn ingest(&mut self, text: &str, ctx: &egui::Context) {
        self.catalog = feed::ingest(text);
        self.focus = Focus::Unlocked;
        self.registry.begin_pass();
        self.textures.clear();
        self.rebuild_view();
        super::actions::refresh::spawn_photos(self, ctx);
    }

    /// Re-run the match pass and re-derive every Card. Called on every
    /// selection change; catalog scale makes full recomputation cheap.
    pub fn rebuild_view(&mut self) {
        let sel = &self.state.gui.selection;

        self.cards = self
            .catalog
            .records
            .iter()
            .map(|r| {
                let mut tags: Vec<String> = Vec::new();
                tags.extend(r.color_tags.iter().cloned());
                tags.extend(r.category_tags.iter().cloned());
                tags.extend(r.style_tags.iter().cloned());

                Card {
                    id: r.id.clone(),
                    title: format!("{}. {}", r.id, r.name),
                    price: if r.price_text.is_empty() { r.price_display() } else { r.price_text.clone() },
                    size: r.size_text.clone(),
                    tags,
                    sold: r.sold,
                    vis: filter::visibility(r, sel),
                    cart: cart::cart_item(r, PAGE_URL),
                }
            })
            .collect();

        self.match_count = filter::match_ids(&self.catalog.records, sel).len();

        if !self.share_dirty {
            self.share_text = sel.serialize();
        }

        logd!(
            "View: {} cards, {} matching, selection=\"{}\"",
            self.cards.len(),
            self.match_count,
            sel.serialize()
        );
    }

    /// Selection changed through the UI: recompute and refresh the
    /// share field (a dirty share field is the one exception — the user
    /// owns it until applied).
    pub fn selection_changed(&mut self) {
        self.share_dirty = false;
        self.rebuild_view();
    }

    /* ---------- worker polling ---------- */

    fn poll_feed(&mut self, ctx: &egui::Context) {
        let Some(rx) = self.feed_rx.take() else { return };
        match rx.try_recv() {
            Ok(Ok(text)) => {
                self.running = false;
                self.ingest(&text, ctx);
                self.status(format!("Feed loaded ({} pieces)", self.catalog.records.len()));
            }
            Ok(Err(e)) => {
                // Terminal for this pass: no partial catalog, indicator off.
                self.running = false;
                self.load = LoadTracker::default();
                loge!("Feed: {}", e);
                self.status(format!("Feed error: {e}"));
            }
            Err(mpsc::TryRecvError::Empty) => {
                self.feed_rx = Some(rx); // still in flight
            }
            Err(mpsc::TryRecvError::Disconnected) => {
                self.running = false;
            }
        }
    }

    fn poll_photos(&mut self, ctx: &egui::Context) {
        let Some(rx) = self.photo_rx.take() else { return };
        loop {
            match rx.try_recv() {
                Ok((id, Some(img))) => {
                    let tex = ctx.load_texture(join!("photo-", &*id), img, Default::default());
                    self.textures.insert(id, tex);
                    self.load.item_done();
                }
                Ok((_, None)) => {
                    // Failure is still progress for the indicator.
                    self.load.item_done();
                }
                Err(mpsc::TryRecvError::Empty) => {
                    self.photo_rx = Some(rx); // keep polling next pass
                    break;
                }
                Err(mpsc::TryRecvError::Disconnected) => break,
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_feed(ctx);
        self.poll_photos(ctx);

        // Fresh registry every pass; views repopulate it below.
        self.registry.begin_pass();
        self.hovered_now = None;
        self.clicked_now = None;

        egui::TopBottomPanel::top("facets").show(ctx, |ui| {
            crate::gui::components::facet_bar::draw(ui, self);
            crate::gui::components::share_bar::draw(ui, self);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            crate::gui::components::status_bar::draw(ui, self);
        });

        egui::SidePanel::left("visual")
            .resizable(true)
            .default_width(520.0)
            .show(ctx, |ui| {
                crate::gui::components::thumb_grid::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::detail_list::draw(ui, self);
        });

        // Focus machine: one transition per physical click, after both
        // views have had the chance to claim the click.
        if ctx.input(|i| i.pointer.primary_clicked()) {
            let was_locked = self.focus.is_locked();
            self.focus.click(self.clicked_now.as_deref());
            if was_locked || self.focus.is_locked() {
                logd!("Focus: {:?}", self.focus);
            }
        }

        // Hover sync: advisory, unlocked only, never the hovered instance.
        // The registry holds this pass's instances; every twin outside the
        // hovered view gets centered on the next pass.
        if self.focus.hover_allowed() {
            if let Some((view, id)) = self.hovered_now.take() {
                for inst in self.registry.twins_outside(&id, view) {
                    match inst.view {
                        crate::sync::ViewKind::Grid => self.scroll_grid_to = Some(id.clone()),
                        crate::sync::ViewKind::List => self.scroll_list_to = Some(id.clone()),
                    }
                }
            }
        }

        if self.running || self.loading() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
