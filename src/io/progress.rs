//! Tile-count progress display
//!
//! A single bar sized to the expected tile count, advanced once per written
//! tile. Row-major tiling order keeps the displayed position meaningful
//! across runs.

use crate::io::configuration::{PROGRESS_CHARS, PROGRESS_TEMPLATE};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static TILE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(PROGRESS_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars(PROGRESS_CHARS)
});

/// Progress bar advanced once per written tile
pub struct TileProgress {
    bar: ProgressBar,
}

impl TileProgress {
    /// Create a bar sized to the expected tile count
    pub fn new(tile_count: u64) -> Self {
        let bar = ProgressBar::new(tile_count);
        bar.set_style(TILE_STYLE.clone());
        Self { bar }
    }

    /// Record one written tile
    pub fn tile_written(&self) {
        self.bar.inc(1);
    }

    /// Remove the bar once the run completes
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
