//! Error types for map loading and transforms

use thiserror::Error;

/// Errors produced while loading, transforming or saving a map document.
///
/// Structural errors abort processing of a single file; a batch run reports
/// them per file and moves on to the next one.
#[derive(Debug, Error)]
pub enum MapError {
    /// Infinite map or chunked tile layer - the transforms only handle
    /// finite maps with flat tile data blocks.
    #[error("unsupported map kind: {0}")]
    UnsupportedMapKind(String),

    /// A map with no layers, or a tile layer without a flat data block.
    #[error("missing layer data: {0}")]
    MissingLayerData(String),

    /// The variant assigner needs at least one tileset with a firstgid.
    #[error("map has no tileset with a firstgid")]
    MissingTileset,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
