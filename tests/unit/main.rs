//! Per-source-file unit tests mirroring the src tree

mod tiling;
