// src/config/options.rs
use std::path::{Path, PathBuf};

use crate::csv::Delim;
use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub feed: FeedOptions,
    pub export: ExportOptions,
}

/// Where the catalog feed comes from. Remote by default; a local file
/// overrides for offline work and tests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FeedSource {
    Remote { host: String, path: String },
    File(PathBuf),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedOptions {
    pub source: FeedSource,
}

impl Default for FeedOptions {
    fn default() -> Self {
        Self {
            source: FeedSource::Remote {
                host: s!(FEED_HOST),
                path: s!(FEED_PATH),
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: Delim,
    pub include_headers: bool,
    out_dir: PathBuf,
    file_stem: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: Delim::Csv,
            include_headers: true,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: s!(DEFAULT_EXPORT_STEM),
        }
    }
}

impl ExportOptions {
    pub fn out_path(&self) -> PathBuf {
        self.out_dir.join(join!(&*self.file_stem, ".", self.format.ext()))
    }

    /// Parse GUI text into dir + stem. Ignores pasted extension; format
    /// controls it.
    pub fn set_path(&mut self, text: &str) {
        let p = Path::new(text.trim());
        if let Some(parent) = p.parent() {
            if !parent.as_os_str().is_empty() {
                self.out_dir = parent.to_path_buf();
            }
        }
        if let Some(stem) = p.file_stem() {
            self.file_stem = stem.to_string_lossy().into_owned();
        }
    }
}
