// src/feed.rs
//
// Fetch + parse of the catalog feed. One shot per ingestion pass: a
// failed fetch is terminal (no retry, no partial catalog) and the caller
// decides whether to fall back to the cached snapshot.

use std::error::Error;
use std::fs;

use crate::catalog::{self, Catalog};
use crate::config::options::{FeedOptions, FeedSource};
use crate::csv::{Delim, Table};
use crate::progress::Progress;
use crate::{net, store};

/// Fetch the raw feed text from the configured source. Remote fetches
/// are cached to the store on success.
pub fn fetch(opts: &FeedOptions, mut progress: Option<&mut dyn Progress>) -> Result<String, Box<dyn Error>> {
    match &opts.source {
        FeedSource::Remote { host, path } => {
            if let Some(p) = progress.as_deref_mut() {
                p.log(&format!("Fetching feed from {}", host));
            }
            let text = net::http_get(host, path)?;
            match store::save_feed(&text) {
                Ok(p) => logf!("Cache: Saved feed → {}", p.display()),
                Err(e) => loge!("Cache: Save failed: {}", e),
            }
            Ok(text)
        }
        FeedSource::File(path) => {
            if let Some(p) = progress.as_deref_mut() {
                p.log(&format!("Reading feed from {}", path.display()));
            }
            Ok(fs::read_to_string(path)?)
        }
    }
}

/// Parse feed text and build the catalog. Pure function of the text:
/// ingesting the same text twice yields identical records and facets.
pub fn ingest(text: &str) -> Catalog {
    let table = Table::from_text(text, Delim::Csv);
    let catalog = catalog::build(&table);
    logf!(
        "Ingest: rows={} records={} facets: category={} style={} size={}",
        table.row_count(),
        catalog.records.len(),
        catalog.facets.category.len(),
        catalog.facets.style.len(),
        catalog.facets.size.len(),
    );
    catalog
}

/// Fetch, falling back to the cached snapshot when the source fails.
/// Returns the text plus whether it came from cache.
pub fn fetch_or_cached(opts: &FeedOptions, progress: Option<&mut dyn Progress>) -> Result<(String, bool), Box<dyn Error>> {
    match fetch(opts, progress) {
        Ok(text) => Ok((text, false)),
        Err(e) => {
            loge!("Feed: fetch failed: {}", e);
            let cached = store::load_feed()
                .map_err(|_| format!("feed fetch failed ({e}) and no cached snapshot"))?;
            Ok((cached, true))
        }
    }
}
