//! Quarter-turn rotation of a whole map document
//!
//! Tile grids rotate by index remapping, object and image-layer geometry by
//! the matching pixel-space point rotation. All arithmetic is exact for the
//! values Tiled produces, so rotating clockwise and then counter-clockwise
//! (or four times in one direction) reproduces the original document.

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::MapError;
use crate::layer::Layer;
use crate::map::MapDocument;
use crate::object::{MapObject, ObjectShape, PolyPoint};

/// Which quarter turn to apply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    fn angle_delta(self) -> f64 {
        match self {
            Direction::Clockwise => 90.0,
            Direction::CounterClockwise => -90.0,
        }
    }
}

/// Pixel dimensions of the map before rotation; both point-rotation
/// formulas are expressed against these
#[derive(Debug, Clone, Copy)]
struct PixelSpace {
    width: f64,
    height: f64,
}

/// Rotate a pixel coordinate a quarter turn within the original map rectangle
fn rotate_point(x: f64, y: f64, dir: Direction, space: PixelSpace) -> (f64, f64) {
    match dir {
        Direction::Clockwise => (space.height - y, x),
        Direction::CounterClockwise => (y, space.width - x),
    }
}

/// Map degrees into `[0, 360)`
fn normalize_degrees(value: f64) -> f64 {
    let raw = value % 360.0;
    if raw < 0.0 {
        raw + 360.0
    } else {
        raw
    }
}

/// Malformed numeric geometry is coerced to zero, never surfaced as an error
fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Rotate one flat tile-data block a quarter turn.
///
/// Returns the rotated data with swapped dimensions (`new_width == height`,
/// `new_height == width`). Empty input yields an empty block.
pub fn rotate_grid(data: &[u32], width: u32, height: u32, dir: Direction) -> (Vec<u32>, u32, u32) {
    let new_width = height;
    let new_height = width;
    let mut rotated = vec![0u32; data.len()];

    for y in 0..height {
        for x in 0..width {
            let (new_x, new_y) = match dir {
                Direction::Clockwise => (height - 1 - y, x),
                Direction::CounterClockwise => (y, width - 1 - x),
            };
            let old_index = (y * width + x) as usize;
            let new_index = (new_y * new_width + new_x) as usize;
            rotated[new_index] = data[old_index];
        }
    }

    (rotated, new_width, new_height)
}

/// Rotate one object in place: geometry, rotation angle and the
/// `targetMap`/`targetFloor` alias reconciliation
fn rotate_object(obj: &mut MapObject, dir: Direction, space: PixelSpace) {
    obj.rotation = normalize_degrees(finite_or_zero(obj.rotation) + dir.angle_delta());

    match obj.shape() {
        ObjectShape::Point => {
            let (x, y) = rotate_point(finite_or_zero(obj.x), finite_or_zero(obj.y), dir, space);
            obj.x = x;
            obj.y = y;
        }
        ObjectShape::Polygon | ObjectShape::Polyline => rotate_poly(obj, dir, space),
        ObjectShape::Rectangle => rotate_box(obj, dir, space, false),
        ObjectShape::Tile => rotate_box(obj, dir, space, true),
    }

    obj.reconcile_target_aliases();
}

/// Rotate polygon/polyline points through world space and re-anchor the
/// object at the minimum corner of the rotated points
fn rotate_poly(obj: &mut MapObject, dir: Direction, space: PixelSpace) {
    let anchor_x = finite_or_zero(obj.x);
    let anchor_y = finite_or_zero(obj.y);
    let points = match (&mut obj.polygon, &mut obj.polyline) {
        (Some(points), _) | (None, Some(points)) => points,
        (None, None) => return,
    };

    let world: Vec<(f64, f64)> = points
        .iter()
        .map(|p| rotate_point(anchor_x + p.x, anchor_y + p.y, dir, space))
        .collect();

    let min_x = world.iter().map(|p| p.0).fold(f64::INFINITY, f64::min);
    let min_y = world.iter().map(|p| p.1).fold(f64::INFINITY, f64::min);
    if !min_x.is_finite() || !min_y.is_finite() {
        return;
    }

    *points = world
        .iter()
        .map(|&(x, y)| PolyPoint {
            x: x - min_x,
            y: y - min_y,
        })
        .collect();
    obj.x = min_x;
    obj.y = min_y;
}

/// Rotate a rectangle or tile object by rotating all four corners of its
/// box and taking the new axis-aligned bounds. Tile objects anchor at the
/// bottom-left corner, so their top-left is `(x, y - height)` going in and
/// the anchor is re-expressed as `(min_x, min_y + new_height)` coming out.
fn rotate_box(obj: &mut MapObject, dir: Direction, space: PixelSpace, bottom_left_anchor: bool) {
    let width = finite_or_zero(obj.width);
    let height = finite_or_zero(obj.height);
    let x = finite_or_zero(obj.x);
    let y = finite_or_zero(obj.y);

    let top_left_y = if bottom_left_anchor { y - height } else { y };
    let corners = [
        rotate_point(x, top_left_y, dir, space),
        rotate_point(x + width, top_left_y, dir, space),
        rotate_point(x, top_left_y + height, dir, space),
        rotate_point(x + width, top_left_y + height, dir, space),
    ];

    let min_x = corners.iter().map(|c| c.0).fold(f64::INFINITY, f64::min);
    let max_x = corners.iter().map(|c| c.0).fold(f64::NEG_INFINITY, f64::max);
    let min_y = corners.iter().map(|c| c.1).fold(f64::INFINITY, f64::min);
    let max_y = corners.iter().map(|c| c.1).fold(f64::NEG_INFINITY, f64::max);

    let new_height = max_y - min_y;
    obj.width = max_x - min_x;
    obj.height = new_height;
    obj.x = min_x;
    obj.y = if bottom_left_anchor {
        min_y + new_height
    } else {
        min_y
    };
}

/// Context threaded through the recursive layer walk
#[derive(Debug, Clone, Copy)]
struct RotationCtx {
    dir: Direction,
    space: PixelSpace,
    /// Pre-rotation document dimensions in tiles
    old_width: u32,
    old_height: u32,
    /// Post-rotation document dimensions in tiles
    new_width: u32,
    new_height: u32,
}

/// Non-tile layers reporting a map-relative size get it mirrored to the
/// document's new dimensions
fn mirror_layer_dims(extra: &mut Map<String, Value>, ctx: RotationCtx) {
    if extra.get("width").is_some_and(Value::is_number) {
        extra.insert("width".to_string(), Value::from(ctx.new_width));
    }
    if extra.get("height").is_some_and(Value::is_number) {
        extra.insert("height".to_string(), Value::from(ctx.new_height));
    }
}

/// Dispatch one layer node: grids to the grid rotator, objects to the
/// object transformer, groups recurse, image layers rotate their offset
fn rotate_layer(layer: &mut Layer, ctx: RotationCtx) -> Result<(), MapError> {
    match layer {
        Layer::Tile(tile) => {
            let Some(data) = &tile.data else {
                if tile.extra.contains_key("chunks") {
                    return Err(MapError::UnsupportedMapKind(format!(
                        "tile layer \"{}\" uses chunked data",
                        tile.name
                    )));
                }
                return Err(MapError::MissingLayerData(format!(
                    "tile layer \"{}\" has no data block",
                    tile.name
                )));
            };
            if data.len() != (ctx.old_width * ctx.old_height) as usize {
                return Err(MapError::MissingLayerData(format!(
                    "tile layer \"{}\" has {} cells, expected {}",
                    tile.name,
                    data.len(),
                    ctx.old_width * ctx.old_height
                )));
            }
            let (rotated, new_width, new_height) =
                rotate_grid(data, ctx.old_width, ctx.old_height, ctx.dir);
            tile.data = Some(rotated);
            tile.width = new_width;
            tile.height = new_height;
        }
        Layer::Object(group) => {
            for obj in &mut group.objects {
                rotate_object(obj, ctx.dir, ctx.space);
            }
            mirror_layer_dims(&mut group.extra, ctx);
        }
        Layer::Group(group) => {
            for child in &mut group.layers {
                rotate_layer(child, ctx)?;
            }
            mirror_layer_dims(&mut group.extra, ctx);
        }
        Layer::Image(image) => {
            if image.offsetx.is_some() || image.offsety.is_some() {
                let (x, y) = rotate_point(
                    image.offsetx.unwrap_or(0.0),
                    image.offsety.unwrap_or(0.0),
                    ctx.dir,
                    ctx.space,
                );
                image.offsetx = Some(x);
                image.offsety = Some(y);
            }
            mirror_layer_dims(&mut image.extra, ctx);
        }
    }
    Ok(())
}

/// Rotate an entire map document a quarter turn.
///
/// Consumes the document and returns the rotated one; on error nothing
/// usable escapes, so callers cannot accidentally persist a half-rotated
/// map.
pub fn rotate_map(mut map: MapDocument, dir: Direction) -> Result<MapDocument, MapError> {
    if map.infinite {
        return Err(MapError::UnsupportedMapKind(
            "infinite maps cannot be rotated".to_string(),
        ));
    }
    if map.layers.is_empty() {
        return Err(MapError::MissingLayerData("map has no layers".to_string()));
    }

    let ctx = RotationCtx {
        dir,
        space: PixelSpace {
            width: map.pixel_width() as f64,
            height: map.pixel_height() as f64,
        },
        old_width: map.width,
        old_height: map.height,
        new_width: map.height,
        new_height: map.width,
    };
    debug!(
        old_width = ctx.old_width,
        old_height = ctx.old_height,
        ?dir,
        "rotating map"
    );

    map.width = ctx.new_width;
    map.height = ctx.new_height;
    for layer in &mut map.layers {
        rotate_layer(layer, ctx)?;
    }
    Ok(map)
}
