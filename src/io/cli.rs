//! Command-line interface for splitting images into square tiles
//!
//! Two input-acquisition front ends share one tiling core: positional
//! arguments, or an interactive prompt loop selected with `--interactive`.

use crate::io::configuration::SUCCESS_MESSAGE;
use crate::io::error::{Result, TilerError};
use crate::io::interactive::Prompter;
use crate::io::progress::TileProgress;
use crate::tiling::grid::{TileGrid, validate_square_size};
use crate::tiling::tiler::tile_image;
use clap::Parser;
use image::GenericImageView;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tilesplit")]
#[command(
    author,
    version,
    about = "Split an image into fixed-size square tiles"
)]
/// Command-line arguments for the tile splitter
pub struct Cli {
    /// Source image to split
    #[arg(value_name = "IMAGE", required_unless_present = "interactive")]
    pub image: Option<PathBuf>,

    /// Edge length of each square tile in pixels
    #[arg(value_name = "SIZE", required_unless_present = "interactive")]
    pub square_size: Option<u32>,

    /// Folder receiving the tiles, created if absent
    #[arg(value_name = "DEST", required_unless_present = "interactive")]
    pub destination: Option<PathBuf>,

    /// Prompt for inputs instead of reading command-line arguments
    #[arg(
        short,
        long,
        conflicts_with_all = ["image", "square_size", "destination"]
    )]
    pub interactive: bool,

    /// Suppress progress output and the completion message
    #[arg(short, long)]
    pub quiet: bool,
}

/// Resolved inputs for one tiling run
pub struct TileSpec {
    /// Path of the source image
    pub image: PathBuf,
    /// Edge length of each tile in pixels
    pub square_size: u32,
    /// Output directory for tile files
    pub destination: PathBuf,
}

impl Cli {
    /// Inputs supplied as command-line arguments, if all are present
    pub fn argument_spec(&self) -> Option<TileSpec> {
        Some(TileSpec {
            image: self.image.clone()?,
            square_size: self.square_size?,
            destination: self.destination.clone()?,
        })
    }
}

/// Orchestrates one tiling run from parsed arguments
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Resolve inputs, split the image, and report completion
    ///
    /// The square size is validated before the image is decoded, and the
    /// image is decoded before the destination directory is touched.
    ///
    /// # Errors
    ///
    /// Returns an error if input acquisition, image decoding, directory
    /// creation, or any tile write fails.
    // Completion message goes to stdout; progress renders on stderr
    #[allow(clippy::print_stdout)]
    pub fn run(&self) -> Result<()> {
        let spec = self.resolve_spec()?;
        validate_square_size(spec.square_size)?;

        let image = image::open(&spec.image).map_err(|source| TilerError::ImageLoad {
            path: spec.image.clone(),
            source,
        })?;

        let (width, height) = image.dimensions();
        let grid = TileGrid::compute(width, height, spec.square_size)?;
        let progress =
            (!self.cli.quiet && !grid.is_empty()).then(|| TileProgress::new(grid.tile_count()));

        let outcome = tile_image(&image, spec.square_size, &spec.destination, progress.as_ref());

        // Clear the bar on both paths so an error never prints beneath it
        if let Some(progress) = progress {
            progress.finish();
        }
        outcome?;

        if !self.cli.quiet {
            println!("{SUCCESS_MESSAGE}");
        }

        Ok(())
    }

    fn resolve_spec(&self) -> Result<TileSpec> {
        if let Some(spec) = self.cli.argument_spec() {
            return Ok(spec);
        }

        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        let mut prompter = Prompter::new(stdin.lock(), stdout.lock());
        let (image, square_size, destination) = prompter.read_spec()?;

        Ok(TileSpec {
            image,
            square_size,
            destination,
        })
    }
}
