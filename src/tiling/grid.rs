//! Tile grid computation over integer pixel dimensions
//!
//! The grid is derived, never stored: the number of whole squares fitting
//! horizontally and vertically is obtained by truncating integer division,
//! so remainder pixels on the right and bottom edges fall outside every
//! tile. Bounds are yielded in row-major order to keep file enumeration
//! and progress reporting deterministic.

use crate::io::configuration::{TILE_FILE_EXTENSION, TILE_FILE_PREFIX};
use crate::io::error::{Result, invalid_square_size};

/// Pixel bounds of a single grid cell
///
/// The covered region is `[left, left + size) x [top, top + size)` where
/// `size` is the grid's square size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileBounds {
    /// Zero-based row index within the grid
    pub row: u32,
    /// Zero-based column index within the grid
    pub col: u32,
    /// Leftmost pixel column, inclusive
    pub left: u32,
    /// Topmost pixel row, inclusive
    pub top: u32,
}

/// Row/column lattice of whole squares fitting inside an image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileGrid {
    square_size: u32,
    columns: u32,
    rows: u32,
}

impl TileGrid {
    /// Compute the grid for an image of the given pixel dimensions
    ///
    /// An image smaller than one square in either dimension yields an empty
    /// grid, which is a valid result rather than an error.
    ///
    /// # Errors
    ///
    /// Returns [`crate::TilerError::InvalidSquareSize`] if `square_size` is
    /// zero.
    pub fn compute(width: u32, height: u32, square_size: u32) -> Result<Self> {
        validate_square_size(square_size)?;

        Ok(Self {
            square_size,
            columns: width / square_size,
            rows: height / square_size,
        })
    }

    /// Edge length of each tile in pixels
    pub const fn square_size(&self) -> u32 {
        self.square_size
    }

    /// Number of whole squares fitting horizontally
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of whole squares fitting vertically
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Total number of tiles the grid produces
    pub const fn tile_count(&self) -> u64 {
        self.rows as u64 * self.columns as u64
    }

    /// Width of the region covered by tiles
    ///
    /// Invariant: never exceeds the image width the grid was computed from.
    pub const fn covered_width(&self) -> u32 {
        self.columns * self.square_size
    }

    /// Height of the region covered by tiles
    pub const fn covered_height(&self) -> u32 {
        self.rows * self.square_size
    }

    /// Whether the grid produces no tiles at all
    pub const fn is_empty(&self) -> bool {
        self.rows == 0 || self.columns == 0
    }

    /// Pixel bounds of the tile at `(row, col)`, if inside the grid
    pub const fn bounds(&self, row: u32, col: u32) -> Option<TileBounds> {
        if row >= self.rows || col >= self.columns {
            return None;
        }

        Some(TileBounds {
            row,
            col,
            left: col * self.square_size,
            top: row * self.square_size,
        })
    }

    /// Iterate all tile bounds in row-major order
    ///
    /// Rows are the outer loop, columns the inner, both ascending. No two
    /// yielded regions overlap and none reaches into a remainder strip.
    pub fn iter(&self) -> impl Iterator<Item = TileBounds> {
        let grid = *self;
        (0..grid.rows).flat_map(move |row| {
            (0..grid.columns).map(move |col| TileBounds {
                row,
                col,
                left: col * grid.square_size,
                top: row * grid.square_size,
            })
        })
    }
}

/// Reject a zero square size before any decode or filesystem work
///
/// The square size is unsigned at the type level, so any non-positive input
/// collapses to zero by the time it reaches the tiling core.
///
/// # Errors
///
/// Returns [`crate::TilerError::InvalidSquareSize`] if `square_size` is zero.
pub fn validate_square_size(square_size: u32) -> Result<()> {
    if square_size == 0 {
        return Err(invalid_square_size(&square_size));
    }
    Ok(())
}

/// Deterministic file name for the tile at `(row, col)`
///
/// Row first, then column, zero-based decimal with no padding. Distinct
/// coordinates always map to distinct names.
pub fn tile_file_name(row: u32, col: u32) -> String {
    format!("{TILE_FILE_PREFIX}_{row}_{col}.{TILE_FILE_EXTENSION}")
}
