//! Splits a raster image into a row-major grid of fixed-size square tiles
//!
//! Each whole square that fits inside the source image is cropped out and
//! written to a destination folder as its own PNG file. Dimensions that are
//! not exact multiples of the square size leave an uncovered remainder strip
//! on the right and bottom edges.

#![forbid(unsafe_code)]

/// Input/output operations, CLI surface, and error handling
pub mod io;
/// Grid computation and the crop-and-save tile loop
pub mod tiling;

pub use io::error::{Result, TilerError};
