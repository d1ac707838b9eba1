//! Batch transforms for the Tiled JSON maps the game client consumes
//!
//! Run with: `tiled-map-tools rotate --direction ccw maps/floor1.json`

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use tiled_map_tools::commands::{Rotate, Variants};

/// Batch transforms for Tiled JSON map files
#[derive(Parser)]
#[command(name = "tiled-map-tools")]
#[command(about = "Batch transforms for Tiled JSON maps", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory scanned for *.json maps when no paths are given
    #[arg(long, global = true, default_value = "maps")]
    maps_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Rotate maps a quarter turn
    Rotate(Rotate),

    /// Assign spatially-hashed variants to the dominant floor tile
    Variants(Variants),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Rotate(cmd) => cmd.execute(&cli.maps_dir),
        Command::Variants(cmd) => cmd.execute(&cli.maps_dir),
    }
}
