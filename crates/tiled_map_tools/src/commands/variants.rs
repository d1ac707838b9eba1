//! Assign cosmetic variants to the dominant floor tile

use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};

use tiled_map_core::{assign_variants, is_floor_layer, MapDocument, DEFAULT_VARIANT_COUNT};

use crate::batch;

/// Replace the most frequent floor tile with position-hashed variants
#[derive(Parser, Debug)]
pub struct Variants {
    /// Number of variant tiles at the start of the tileset
    #[arg(long, default_value_t = DEFAULT_VARIANT_COUNT,
          value_parser = clap::value_parser!(u32).range(1..))]
    pub count: u32,

    /// Map files to update; scans the maps directory when empty
    pub paths: Vec<PathBuf>,
}

impl Variants {
    pub fn execute(self, maps_dir: &Path) -> Result<()> {
        let files = batch::collect_map_files(&self.paths, maps_dir)?;
        batch::run_batch(&files, |path| {
            let mut map = MapDocument::load(path)?;
            let changed = assign_variants(&mut map, is_floor_layer, self.count)?;
            map.save(path)?;
            Ok(format!("{changed} floor tiles updated"))
        })
    }
}
