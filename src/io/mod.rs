//! Input/output operations and user-facing surfaces
//!
//! This module contains everything outside the tiling core:
//! - Command-line argument parsing and run orchestration
//! - The interactive prompt loop
//! - Error types and progress display

/// Command-line interface and run orchestration
pub mod cli;
/// Naming and display constants
pub mod configuration;
/// Error types and helpers for tiling operations
pub mod error;
/// Prompt-driven input acquisition over generic streams
pub mod interactive;
/// Tile-count progress display
pub mod progress;
