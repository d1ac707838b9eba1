//! Deterministic cosmetic variants for the dominant floor tile
//!
//! Finds the most frequent base tile id on each floor layer and replaces it
//! with a spatially-hashed variant of the tileset's first tiles. The hash is
//! seedless, so regenerating a map produces an identical file.

use std::cmp::Reverse;
use std::collections::HashMap;

use crate::error::MapError;
use crate::gid::{base_id, flip_bits};
use crate::layer::Layer;
use crate::map::MapDocument;

/// How many variant tiles the floor tileset reserves by default
pub const DEFAULT_VARIANT_COUNT: u32 = 8;

/// Default layer selector: floor layers are named like "Floor" or "Ground"
pub fn is_floor_layer(name: &str) -> bool {
    let name = name.to_ascii_lowercase();
    name.contains("floor") || name.contains("ground")
}

/// Seedless spatial hash over tile coordinates.
///
/// Multiplications wrap at 32 bits to match the int32 xor the map-authoring
/// pipeline has always used, keeping regenerated files diff-stable.
pub fn variant_hash(x: u32, y: u32) -> u32 {
    let hashed = (x.wrapping_mul(73_856_093) as i32) ^ (y.wrapping_mul(19_349_663) as i32);
    hashed.unsigned_abs()
}

/// Replace the modal base tile id on matching top-level tile layers with
/// position-hashed variants `firstgid..firstgid + variant_count`, keeping
/// each cell's flip bits. Returns the number of cells changed.
pub fn assign_variants<F>(
    map: &mut MapDocument,
    layer_pred: F,
    variant_count: u32,
) -> Result<usize, MapError>
where
    F: Fn(&str) -> bool,
{
    if map.infinite {
        return Err(MapError::UnsupportedMapKind(
            "infinite maps cannot be variant-assigned".to_string(),
        ));
    }
    let first_gid = map
        .tilesets
        .first()
        .and_then(|tileset| tileset.firstgid)
        .ok_or(MapError::MissingTileset)?;
    if variant_count == 0 {
        return Ok(0);
    }

    let mut changed = 0;
    for layer in &mut map.layers {
        let Layer::Tile(tile) = layer else { continue };
        if !layer_pred(&tile.name) {
            continue;
        }
        if let Some(data) = &mut tile.data {
            changed += assign_layer_variants(data, tile.width, first_gid, variant_count);
        }
    }
    Ok(changed)
}

fn assign_layer_variants(data: &mut [u32], width: u32, first_gid: u32, variant_count: u32) -> usize {
    if width == 0 {
        return 0;
    }

    // Count occurrences per base id; remember each id's first row-major
    // index so ties resolve to the first-encountered id.
    let mut counts: HashMap<u32, (usize, usize)> = HashMap::new();
    for (index, &gid) in data.iter().enumerate() {
        let id = base_id(gid);
        if id == 0 {
            continue;
        }
        counts.entry(id).or_insert((0, index)).0 += 1;
    }
    let Some(modal) = counts
        .iter()
        .max_by_key(|&(_, &(count, first_index))| (count, Reverse(first_index)))
        .map(|(&id, _)| id)
    else {
        return 0;
    };

    let mut changed = 0;
    for (index, gid) in data.iter_mut().enumerate() {
        if base_id(*gid) != modal {
            continue;
        }
        let x = index as u32 % width;
        let y = index as u32 / width;
        let variant = variant_hash(x, y) % variant_count;
        *gid = flip_bits(*gid) | (first_gid + variant);
        changed += 1;
    }
    changed
}
