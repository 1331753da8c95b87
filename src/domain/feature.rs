//! Imported base features

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::geometry::{Extent, Geometry};

/// Free-form feature attributes (GeoJSON `properties`)
pub type Attributes = Map<String, Value>;

/// Optional top-level feature identifier
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureId {
    Number(serde_json::Number),
    String(String),
}

/// A geometry+attributes record loaded from a file.
///
/// Base features are never mutated by the session; a new import replaces
/// them wholesale.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Feature {
    pub id: Option<FeatureId>,
    /// Geometry in working coordinates; `None` for features with null geometry
    pub geometry: Option<Geometry>,
    pub attributes: Attributes,
}

impl Feature {
    pub fn new(geometry: Geometry) -> Self {
        Self {
            id: None,
            geometry: Some(geometry),
            attributes: Attributes::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    pub fn extent(&self) -> Extent {
        self.geometry
            .as_ref()
            .map(Geometry::extent)
            .unwrap_or_else(Extent::empty)
    }
}

/// Union of the extents of all features
pub fn combined_extent<'a>(features: impl IntoIterator<Item = &'a Feature>) -> Extent {
    let mut extent = Extent::empty();
    for feature in features {
        extent.extend(&feature.extent());
    }
    extent
}
