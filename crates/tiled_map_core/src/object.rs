//! Map objects (rectangles, points, tile stamps, polygons, polylines)

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A point of a polygon or polyline, relative to the owning object's anchor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolyPoint {
    pub x: f64,
    pub y: f64,
}

/// A named custom property on an object.
///
/// Tiled stores properties as an array, so insertion order survives a
/// round-trip; names are unique within one object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub value: Value,
}

/// One object placed on an object layer.
///
/// The shape is encoded the way Tiled encodes it: by which optional fields
/// are present (`gid`, `point`, `polygon`, `polyline`); plain rectangles
/// carry none of them. Use [`MapObject::shape`] for exhaustive dispatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapObject {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
    /// Rotation in degrees, kept normalized to `[0, 360)` by the transforms
    #[serde(default)]
    pub rotation: f64,
    /// Present on tile objects; anchors the object at its bottom-left corner
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gid: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub polygon: Option<Vec<PolyPoint>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub polyline: Option<Vec<PolyPoint>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<Property>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The closed set of object shapes the transforms distinguish
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectShape {
    Rectangle,
    Point,
    Tile,
    Polygon,
    Polyline,
}

impl MapObject {
    /// Classify this object's shape from the fields it carries
    pub fn shape(&self) -> ObjectShape {
        if self.gid.is_some() {
            ObjectShape::Tile
        } else if self.point == Some(true) {
            ObjectShape::Point
        } else if self.polygon.is_some() {
            ObjectShape::Polygon
        } else if self.polyline.is_some() {
            ObjectShape::Polyline
        } else {
            ObjectShape::Rectangle
        }
    }

    /// Get a property value by name
    pub fn property(&self, name: &str) -> Option<&Value> {
        self.properties
            .as_deref()?
            .iter()
            .find(|p| p.name == name)
            .map(|p| &p.value)
    }

    /// Set a string property, updating an existing entry or appending a new one
    pub fn set_string_property(&mut self, name: &str, value: String) {
        let props = self.properties.get_or_insert_with(Vec::new);
        if let Some(existing) = props.iter_mut().find(|p| p.name == name) {
            existing.value = Value::String(value);
        } else {
            props.push(Property {
                name: name.to_string(),
                kind: Some("string".to_string()),
                value: Value::String(value),
            });
        }
    }

    /// Keep the `targetMap`/`targetFloor` naming conventions in sync: if one
    /// is set and the other is missing (or empty), copy the value across.
    /// Objects without a property list are left alone.
    pub fn reconcile_target_aliases(&mut self) {
        if self.properties.is_none() {
            return;
        }
        let target_map = string_property(self.property("targetMap"));
        let target_floor = string_property(self.property("targetFloor"));
        match (target_map, target_floor) {
            (Some(value), None) => self.set_string_property("targetFloor", value),
            (None, Some(value)) => self.set_string_property("targetMap", value),
            _ => {}
        }
    }
}

/// A property value counts as set only when it is a non-empty string
fn string_property(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object_with_property(name: &str, value: &str) -> MapObject {
        let mut obj: MapObject = serde_json::from_value(json!({
            "id": 1, "x": 0.0, "y": 0.0
        }))
        .unwrap();
        obj.set_string_property(name, value.to_string());
        obj
    }

    #[test]
    fn test_shape_classification() {
        let rect: MapObject = serde_json::from_value(json!({"id": 1})).unwrap();
        assert_eq!(rect.shape(), ObjectShape::Rectangle);

        let point: MapObject = serde_json::from_value(json!({"id": 2, "point": true})).unwrap();
        assert_eq!(point.shape(), ObjectShape::Point);

        let tile: MapObject = serde_json::from_value(json!({"id": 3, "gid": 42})).unwrap();
        assert_eq!(tile.shape(), ObjectShape::Tile);

        let poly: MapObject = serde_json::from_value(json!({
            "id": 4, "polygon": [{"x": 0.0, "y": 0.0}, {"x": 8.0, "y": 4.0}]
        }))
        .unwrap();
        assert_eq!(poly.shape(), ObjectShape::Polygon);
    }

    #[test]
    fn test_alias_copies_target_map_to_floor() {
        let mut obj = object_with_property("targetMap", "basement");
        obj.reconcile_target_aliases();
        assert_eq!(obj.property("targetFloor"), Some(&json!("basement")));
        assert_eq!(obj.property("targetMap"), Some(&json!("basement")));
    }

    #[test]
    fn test_alias_copies_target_floor_to_map() {
        let mut obj = object_with_property("targetFloor", "attic");
        obj.reconcile_target_aliases();
        assert_eq!(obj.property("targetMap"), Some(&json!("attic")));
    }

    #[test]
    fn test_alias_does_not_overwrite_both_present() {
        let mut obj = object_with_property("targetMap", "a");
        obj.set_string_property("targetFloor", "b".to_string());
        obj.reconcile_target_aliases();
        assert_eq!(obj.property("targetMap"), Some(&json!("a")));
        assert_eq!(obj.property("targetFloor"), Some(&json!("b")));
    }

    #[test]
    fn test_alias_skips_objects_without_properties() {
        let mut obj: MapObject = serde_json::from_value(json!({"id": 1})).unwrap();
        obj.reconcile_target_aliases();
        assert!(obj.properties.is_none());
    }

    #[test]
    fn test_empty_string_counts_as_missing() {
        let mut obj = object_with_property("targetMap", "cellar");
        obj.set_string_property("targetFloor", String::new());
        obj.reconcile_target_aliases();
        assert_eq!(obj.property("targetFloor"), Some(&json!("cellar")));
    }

    #[test]
    fn test_property_order_preserved() {
        let mut obj = object_with_property("targetMap", "keep");
        obj.set_string_property("zeta", "z".to_string());
        obj.set_string_property("alpha", "a".to_string());
        let names: Vec<_> = obj
            .properties
            .as_ref()
            .unwrap()
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, ["targetMap", "zeta", "alpha"]);
    }
}
