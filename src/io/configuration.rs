//! Naming and display constants

// Output naming: square_{row}_{col}.png, row first, no padding
/// Prefix of every tile file name
pub const TILE_FILE_PREFIX: &str = "square";
/// Extension (and implied codec) of every tile file
pub const TILE_FILE_EXTENSION: &str = "png";

// Progress bar display settings
/// Template for the tile progress bar
pub const PROGRESS_TEMPLATE: &str = "Tiles: [{bar:40.cyan/blue}] {pos}/{len}";
/// Fill characters used by the progress bar
pub const PROGRESS_CHARS: &str = "█▉▊▋▌▍▎▏ ";

/// Message printed after a successful run
pub const SUCCESS_MESSAGE: &str = "Images successfully applied to folder.";
