//! Rotate maps a quarter turn

use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

use tiled_map_core::{rotate_map, Direction, MapDocument};

use crate::batch;

/// Rotation direction as spelled on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DirectionArg {
    /// Quarter turn clockwise
    Cw,
    /// Quarter turn counter-clockwise
    Ccw,
}

impl From<DirectionArg> for Direction {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Cw => Direction::Clockwise,
            DirectionArg::Ccw => Direction::CounterClockwise,
        }
    }
}

/// Rotate map files 90 degrees and write them back in place
#[derive(Parser, Debug)]
pub struct Rotate {
    /// Rotation direction
    #[arg(long, value_enum, default_value = "cw")]
    pub direction: DirectionArg,

    /// Map files to rotate; scans the maps directory when empty
    pub paths: Vec<PathBuf>,
}

impl Rotate {
    pub fn execute(self, maps_dir: &Path) -> Result<()> {
        let files = batch::collect_map_files(&self.paths, maps_dir)?;
        let direction = Direction::from(self.direction);
        batch::run_batch(&files, |path| {
            let map = MapDocument::load(path)?;
            let rotated = rotate_map(map, direction)?;
            rotated.save(path)?;
            Ok(format!("rotated (new {}x{})", rotated.width, rotated.height))
        })
    }
}
