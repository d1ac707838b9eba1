//! The layer tree: tile, object, group and image layers

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::object::MapObject;

/// One node of a map's layer tree.
///
/// Tiled tags each layer with a `type` string; modeling the four kinds as an
/// enum keeps the rotation dispatch exhaustive instead of comparing tags at
/// runtime. Fields the transforms do not touch (`id`, `opacity`, `visible`,
/// ...) are carried in each variant's flattened `extra` map so they survive
/// serialization byte-for-byte in meaning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Layer {
    #[serde(rename = "tilelayer")]
    Tile(TileLayer),
    #[serde(rename = "objectgroup")]
    Object(ObjectLayer),
    #[serde(rename = "group")]
    Group(GroupLayer),
    #[serde(rename = "imagelayer")]
    Image(ImageLayer),
}

impl Layer {
    pub fn name(&self) -> &str {
        match self {
            Layer::Tile(layer) => &layer.name,
            Layer::Object(layer) => &layer.name,
            Layer::Group(layer) => &layer.name,
            Layer::Image(layer) => &layer.name,
        }
    }
}

/// A rectangular grid of GIDs, one per cell, row-major
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileLayer {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    /// Flat tile data; `None` for chunked (infinite) layers, which the
    /// transforms reject
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<u32>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A layer holding freeform positioned objects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectLayer {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub objects: Vec<MapObject>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A layer whose content is a nested sequence of layers; each parent owns
/// its children outright
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupLayer {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub layers: Vec<Layer>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A layer positioning a single background image via a pixel offset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageLayer {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offsetx: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offsety: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
