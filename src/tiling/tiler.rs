//! Crop-and-save loop writing one PNG per grid cell
//!
//! The procedure is straight-line and synchronous: derive the grid, ensure
//! the destination directory exists, then crop and flush each tile before
//! the next begins. There is no rollback: a failure partway through leaves
//! already-written tiles on disk and surfaces the error to the caller.

use crate::io::error::{Result, TilerError};
use crate::io::progress::TileProgress;
use crate::tiling::grid::{TileGrid, tile_file_name, validate_square_size};
use image::{DynamicImage, GenericImageView};
use std::fs;
use std::path::Path;

/// Decode the image at `path` and split it into square tiles
///
/// Convenience wrapper around [`tile_image`] for callers starting from a
/// file path. Returns the number of tiles written.
///
/// # Errors
///
/// Returns [`TilerError::InvalidSquareSize`] before any I/O if `square_size`
/// is zero, [`TilerError::ImageLoad`] if the path is missing or not
/// decodable, and otherwise propagates the errors of [`tile_image`].
pub fn tile_image_file(
    path: &Path,
    square_size: u32,
    destination: &Path,
    progress: Option<&TileProgress>,
) -> Result<u64> {
    validate_square_size(square_size)?;

    let image = image::open(path).map_err(|source| TilerError::ImageLoad {
        path: path.to_path_buf(),
        source,
    })?;

    tile_image(&image, square_size, destination, progress)
}

/// Split a decoded image into `square_size`-edged tiles under `destination`
///
/// Tiles are produced in row-major order and named `square_{row}_{col}.png`.
/// Remainder pixels on the right and bottom edges are never covered by any
/// tile. An image smaller than one square yields zero tiles and succeeds.
/// Returns the number of tiles written.
///
/// # Errors
///
/// Returns [`TilerError::InvalidSquareSize`] if `square_size` is zero,
/// [`TilerError::DestinationUnavailable`] if the destination directory
/// cannot be created, and [`TilerError::WriteFailed`] if a tile cannot be
/// encoded or written.
pub fn tile_image(
    image: &DynamicImage,
    square_size: u32,
    destination: &Path,
    progress: Option<&TileProgress>,
) -> Result<u64> {
    let (width, height) = image.dimensions();
    let grid = TileGrid::compute(width, height, square_size)?;

    fs::create_dir_all(destination).map_err(|source| TilerError::DestinationUnavailable {
        path: destination.to_path_buf(),
        source,
    })?;

    for bounds in grid.iter() {
        let tile = image.crop_imm(bounds.left, bounds.top, square_size, square_size);
        let tile_path = destination.join(tile_file_name(bounds.row, bounds.col));

        tile.save(&tile_path)
            .map_err(|source| TilerError::WriteFailed {
                path: tile_path,
                source,
            })?;

        if let Some(progress) = progress {
            progress.tile_written();
        }
    }

    Ok(grid.tile_count())
}
