//! Prompt-driven input acquisition
//!
//! Collects the image path, square size, and destination folder from an
//! arbitrary reader/writer pair, so the prompt loop is unit-testable without
//! touching stdin or process arguments. Only the image path is re-prompted
//! on invalid input; the square size and destination are read once.

use crate::io::error::{Result, invalid_square_size, stream_error};
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Prompt sequence collecting one tile specification
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Create a prompter over the given input and output streams
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Collect the image path, square size, and destination folder
    ///
    /// Loops until the image path names an existing file. The size and
    /// destination answers are accepted as given.
    ///
    /// # Errors
    ///
    /// Returns [`crate::TilerError::FileSystem`] if a stream read or write
    /// fails or the input ends early, and
    /// [`crate::TilerError::InvalidSquareSize`] if the size is not a
    /// positive integer.
    pub fn read_spec(&mut self) -> Result<(PathBuf, u32, PathBuf)> {
        let image = self.read_image_path()?;
        let square_size = self.read_square_size()?;
        let destination = PathBuf::from(self.read_line("Enter the destination folder name: ")?);

        Ok((image, square_size, destination))
    }

    fn read_image_path(&mut self) -> Result<PathBuf> {
        loop {
            let candidate = PathBuf::from(self.read_line("Enter the image path: ")?);
            if candidate.is_file() {
                return Ok(candidate);
            }
            self.write_line("Invalid image path. Try again.")?;
        }
    }

    fn read_square_size(&mut self) -> Result<u32> {
        let raw = self.read_line("Enter the size of the square: ")?;
        let trimmed = raw.trim();

        match trimmed.parse::<u32>() {
            Ok(value) if value > 0 => Ok(value),
            _ => Err(invalid_square_size(&trimmed)),
        }
    }

    fn read_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")
            .and_then(|()| self.output.flush())
            .map_err(|source| stream_error("prompt write", source))?;

        let mut line = String::new();
        let bytes_read = self
            .input
            .read_line(&mut line)
            .map_err(|source| stream_error("prompt read", source))?;

        if bytes_read == 0 {
            return Err(stream_error(
                "prompt read",
                std::io::Error::new(
                    std::io::ErrorKind::UnexpectedEof,
                    "input ended before a value was supplied",
                ),
            ));
        }

        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn write_line(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{message}").map_err(|source| stream_error("prompt write", source))
    }
}
