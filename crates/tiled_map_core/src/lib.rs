//! Core data structures and transforms for Tiled JSON maps
//!
//! This crate provides the types and batch transforms the map tools operate on:
//! - `MapDocument` - A parsed Tiled JSON map (layers, tilesets, dimensions)
//! - `Layer` - One layer of the (possibly nested) layer tree
//! - `MapObject` - A placed object with shape-specific geometry
//! - `rotate_map` - Quarter-turn rotation of an entire document
//! - `assign_variants` - Spatially-hashed cosmetic variants for floor tiles
//!
//! Documents load from and save back to the Tiled JSON format; fields the
//! transforms do not touch round-trip unchanged so downstream consumers keep
//! seeing the layer names, tileset names and object properties they expect.

mod error;
mod gid;
mod layer;
mod map;
mod object;
mod rotate;
mod variant;

pub use error::MapError;
pub use gid::{base_id, flip_bits, BASE_ID_MASK, FLIP_D, FLIP_H, FLIP_MASK, FLIP_V};
pub use layer::{GroupLayer, ImageLayer, Layer, ObjectLayer, TileLayer};
pub use map::{MapDocument, Tileset};
pub use object::{MapObject, ObjectShape, PolyPoint, Property};
pub use rotate::{rotate_grid, rotate_map, Direction};
pub use variant::{assign_variants, is_floor_layer, variant_hash, DEFAULT_VARIANT_COUNT};
