// src/store.rs
//
// Local snapshot of the raw feed text. Lets the GUI come up with the
// last known catalog while the fetch is in flight (or offline).

use std::{fs, io, path::PathBuf};

use crate::config::consts::{FEED_CACHE_FILE, STORE_DIR};

fn feed_path() -> PathBuf {
    PathBuf::from(STORE_DIR).join(FEED_CACHE_FILE)
}

pub fn save_feed(text: &str) -> io::Result<PathBuf> {
    let p = feed_path();
    if let Some(parent) = p.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(&p, text)?;
    Ok(p)
}

pub fn load_feed() -> io::Result<String> {
    fs::read_to_string(feed_path())
}
