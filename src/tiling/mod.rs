//! Grid computation and tile extraction
//!
//! This module contains the tiling core:
//! - Grid derivation via floor division of image dimensions
//! - Row-major tile bounds iteration and deterministic file naming
//! - The crop-and-save loop producing one PNG per grid cell

/// Grid math: tile counts, pixel bounds, and tile file naming
pub mod grid;
/// Crop-and-save loop writing one PNG per grid cell
pub mod tiler;

pub use grid::TileGrid;
