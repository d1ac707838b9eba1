//! The map document: top-level Tiled JSON model with load/save

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

use crate::error::MapError;
use crate::layer::Layer;

/// A tileset descriptor as referenced by a map.
///
/// External tilesets only carry `firstgid` and a `source` path (kept in
/// `extra`), so both explicit fields are optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tileset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firstgid: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A parsed Tiled JSON map.
///
/// Only the fields the transforms read are modeled explicitly; everything
/// else (`version`, `orientation`, `renderorder`, `nextobjectid`, ...) is
/// captured in `extra` and written back untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapDocument {
    /// Map width in tiles
    pub width: u32,
    /// Map height in tiles
    pub height: u32,
    /// Tile width in pixels
    pub tilewidth: u32,
    /// Tile height in pixels
    pub tileheight: u32,
    #[serde(default)]
    pub infinite: bool,
    #[serde(default)]
    pub layers: Vec<Layer>,
    #[serde(default)]
    pub tilesets: Vec<Tileset>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MapDocument {
    /// Load a map from a Tiled JSON file
    pub fn load(path: &Path) -> Result<Self, MapError> {
        let content = std::fs::read_to_string(path)?;
        let map = serde_json::from_str(&content)?;
        Ok(map)
    }

    /// Save the map back to a Tiled JSON file (pretty-printed)
    pub fn save(&self, path: &Path) -> Result<(), MapError> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Map width in pixels
    pub fn pixel_width(&self) -> u32 {
        self.width * self.tilewidth
    }

    /// Map height in pixels
    pub fn pixel_height(&self) -> u32 {
        self.height * self.tileheight
    }
}
