//! File collection and per-file batch execution

use anyhow::{bail, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};

use tiled_map_core::MapError;

/// Resolve the files a command operates on: explicit paths win, otherwise
/// the maps directory is scanned (non-recursively) for `*.json` files.
pub fn collect_map_files(paths: &[PathBuf], maps_dir: &Path) -> Result<Vec<PathBuf>> {
    if !paths.is_empty() {
        return Ok(paths.to_vec());
    }
    let mut files = Vec::new();
    if maps_dir.is_dir() {
        for entry in fs::read_dir(maps_dir)? {
            let path = entry?.path();
            let is_json = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
            if path.is_file() && is_json {
                files.push(path);
            }
        }
    }
    files.sort();
    Ok(files)
}

/// Run one transform per file.
///
/// A file that fails is logged and skipped so the rest of the batch still
/// runs; the returned error (and with it the nonzero exit status) only
/// reflects that at least one file failed.
pub fn run_batch<F>(files: &[PathBuf], mut process: F) -> Result<()>
where
    F: FnMut(&Path) -> Result<String, MapError>,
{
    if files.is_empty() {
        bail!("no map JSON files found");
    }
    let mut failures = 0usize;
    for file in files {
        match process(file) {
            Ok(summary) => info!("{}: {}", file.display(), summary),
            Err(err) => {
                error!("{}: {}", file.display(), err);
                failures += 1;
            }
        }
    }
    if failures > 0 {
        bail!("{failures} of {} map files failed", files.len());
    }
    Ok(())
}
