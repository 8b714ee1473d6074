// src/config/consts.rs

// Feed source: published sheet, CSV output.
pub const FEED_HOST: &str = "docs.google.com";
pub const FEED_PATH: &str = "/spreadsheets/d/e/2PACX-1vRu2J4BrxvuOqtk0hs0H5RyLEy8xan-RW0ic_6lXQiWn-KZJDkEBAh-pO71AovTKPUPvieSch1-b7Ny/pub?output=csv";

// Canonical page URL handed to the cart widget.
pub const PAGE_URL: &str = "https://gnuhr.shop/pieces";

// Local cache
pub const STORE_DIR: &str = ".store";
pub const FEED_CACHE_FILE: &str = "feed.csv";

// Loading: photo loads count toward one expected total; past this
// deadline the loading indicator is dismissed regardless.
pub const LOAD_SAFETY_TIMEOUT_SECS: u64 = 5;

// Thumbnail grid layout
pub const MIN_COL_WIDTH: f32 = 160.0;
pub const MAX_COLS: usize = 5;

// Magnifier
pub const ZOOM_FACTOR: f32 = 2.5;

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_EXPORT_STEM: &str = "pieces";
