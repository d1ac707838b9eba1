//! tiled_map_tools - batch transforms for Tiled JSON map files
//!
//! This crate wraps the transforms from `tiled_map_core` in a small batch
//! driver:
//! - `rotate` - quarter-turn rotation of whole maps
//! - `variants` - spatially-hashed variants for the dominant floor tile
//!
//! Each file is processed independently (load, transform, save); a file
//! that fails structurally is reported and skipped, and the run exits
//! nonzero only after every file had its turn.

pub mod batch;
pub mod commands;
