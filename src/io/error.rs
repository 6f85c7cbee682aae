//! Error types and helpers for tiling operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all tiling operations
#[derive(Debug)]
pub enum TilerError {
    /// Failed to load the source image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying decode error
        source: image::ImageError,
    },

    /// Square size is not a positive integer
    InvalidSquareSize {
        /// The rejected value as supplied
        value: String,
    },

    /// Output directory could not be created or accessed
    DestinationUnavailable {
        /// Path of the destination directory
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A tile could not be encoded or written to disk
    WriteFailed {
        /// Path of the tile that failed to write
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system or stream operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for TilerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::InvalidSquareSize { value } => {
                write!(
                    f,
                    "Invalid square size '{value}': must be a positive integer"
                )
            }
            Self::DestinationUnavailable { path, source } => {
                write!(
                    f,
                    "Cannot create destination folder '{}': {source}",
                    path.display()
                )
            }
            Self::WriteFailed { path, source } => {
                write!(f, "Failed to write tile '{}': {source}", path.display())
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for TilerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::WriteFailed { source, .. } => Some(source),
            Self::DestinationUnavailable { source, .. } | Self::FileSystem { source, .. } => {
                Some(source)
            }
            Self::InvalidSquareSize { .. } => None,
        }
    }
}

/// Convenience type alias for tiling results
pub type Result<T> = std::result::Result<T, TilerError>;

/// Create an invalid square size error from any displayable value
pub fn invalid_square_size(value: &impl ToString) -> TilerError {
    TilerError::InvalidSquareSize {
        value: value.to_string(),
    }
}

/// Create a stream error for prompt input/output failures
pub fn stream_error(operation: &'static str, source: std::io::Error) -> TilerError {
    TilerError::FileSystem {
        path: PathBuf::from("<stdio>"),
        operation,
        source,
    }
}
