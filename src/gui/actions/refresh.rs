// src/gui/actions/refresh.rs
//
// Feed + photo workers. The feed fetch is the one suspension point the
// catalog depends on; photos trickle in afterwards and only gate the
// loading indicator, never the data.

use std::sync::mpsc;
use std::thread;

use eframe::egui;

use crate::{
    feed,
    gui::app::{App, PhotoResult},
    gui::progress::GuiProgress,
    net,
    progress::{LoadTracker, Progress},
};

/// Kick off the feed fetch on a worker thread. No-op while one is
/// already in flight.
pub fn spawn(app: &mut App, ctx: &egui::Context) {
    if app.running {
        return;
    }
    app.running = true;
    app.status("Fetching feed…");

    let opts = app.state.options.feed.clone();
    let status = app.status.clone();
    let repaint = ctx.clone();
    let (tx, rx) = mpsc::channel();
    app.feed_rx = Some(rx);

    thread::spawn(move || {
        let mut prog = GuiProgress::new(status);
        let res = feed::fetch(&opts, Some(&mut prog)).map_err(|e| e.to_string());
        prog.finish();
        let _ = tx.send(res);
        repaint.request_repaint();
    });
}

/// Fetch every record photo on one worker, reporting each completion
/// (success or failure, both are progress) back to the UI thread.
pub fn spawn_photos(app: &mut App, ctx: &egui::Context) {
    let jobs: Vec<(String, String)> = app
        .catalog
        .records
        .iter()
        .filter_map(|r| r.image_url.as_ref().map(|u| (r.id.clone(), u.clone())))
        .collect();

    if jobs.is_empty() {
        app.load = LoadTracker::default();
        app.photo_rx = None;
        return;
    }

    logf!("Photos: loading {} images", jobs.len());
    app.load = LoadTracker::start(jobs.len());

    let repaint = ctx.clone();
    let (tx, rx) = mpsc::channel::<PhotoResult>();
    app.photo_rx = Some(rx);

    thread::spawn(move || {
        for (id, url) in jobs {
            let img = fetch_photo(&url)
                .map_err(|e| loge!("Photos: {} failed: {}", id, e))
                .ok();
            if tx.send((id, img)).is_err() {
                return; // UI gone
            }
            repaint.request_repaint();
        }
    });
}

fn fetch_photo(url: &str) -> Result<egui::ColorImage, Box<dyn std::error::Error>> {
    let (host, path) = net::split_url(url)?;
    let bytes = net::http_get_bytes(&host, &path)?;
    let rgba = image::load_from_memory(&bytes)?.to_rgba8();
    let (w, h) = rgba.dimensions();
    Ok(egui::ColorImage::from_rgba_unmultiplied(
        [w as usize, h as usize],
        rgba.as_raw(),
    ))
}
