//! User-created point markers ("icons") and their action menus
//!
//! Marker positions are stored in working (Web Mercator) coordinates.

use std::fmt;

use serde_json::Value;

use super::feature::Feature;
use super::geometry::{Coord, Geometry};

/// Unique marker identifier, derived from the creation time in milliseconds
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MarkerId(pub i64);

impl fmt::Display for MarkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hands out marker ids that are unique and strictly increasing even when
/// the clock does not advance between two creations.
#[derive(Clone, Debug, Default)]
pub struct MarkerIdAllocator {
    last: Option<i64>,
}

impl MarkerIdAllocator {
    /// Allocate an id from the current wall clock
    pub fn next(&mut self) -> MarkerId {
        self.next_at(chrono::Utc::now().timestamp_millis())
    }

    pub fn next_at(&mut self, now_millis: i64) -> MarkerId {
        let id = match self.last {
            Some(last) if now_millis <= last => last + 1,
            _ => now_millis,
        };
        self.last = Some(id);
        MarkerId(id)
    }
}

/// What a menu entry does when invoked
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuAction {
    NewFeature,
    Info,
    NewSettings,
    OpenLink(String),
}

/// A labeled entry of a marker's action menu
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuOption {
    pub label: String,
    pub action: MenuAction,
}

impl MenuOption {
    pub fn new(label: impl Into<String>, action: MenuAction) -> Self {
        Self {
            label: label.into(),
            action,
        }
    }
}

/// Point annotation placed by the user
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    pub id: MarkerId,
    pub position: Coord,
    /// Free text; empty when the prompt was cancelled
    pub info: String,
    /// Marker-specific menu entries, appended after the default ones
    pub menu_options: Vec<MenuOption>,
}

impl Marker {
    pub fn new(id: MarkerId, position: Coord, info: String) -> Self {
        Self {
            id,
            position,
            info,
            menu_options: Vec::new(),
        }
    }

    /// Text for the hover info display
    pub fn display_info(&self) -> &str {
        if self.info.is_empty() {
            "No info available"
        } else {
            &self.info
        }
    }
}

/// Point feature carrying `id` and `info` as attributes (export form)
impl From<&Marker> for Feature {
    fn from(marker: &Marker) -> Self {
        Feature::new(Geometry::point(marker.position))
            .with_attribute("id", Value::from(marker.id.0))
            .with_attribute("info", marker.info.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocator_uses_clock_when_it_advances() {
        let mut ids = MarkerIdAllocator::default();
        assert_eq!(ids.next_at(1000), MarkerId(1000));
        assert_eq!(ids.next_at(1500), MarkerId(1500));
    }

    #[test]
    fn test_allocator_bumps_on_stalled_clock() {
        let mut ids = MarkerIdAllocator::default();
        let a = ids.next_at(1000);
        let b = ids.next_at(1000);
        let c = ids.next_at(999);
        assert_eq!((a, b, c), (MarkerId(1000), MarkerId(1001), MarkerId(1002)));
    }

    #[test]
    fn test_display_info_placeholder() {
        let mut marker = Marker::new(MarkerId(1), Coord::default(), String::new());
        assert_eq!(marker.display_info(), "No info available");
        marker.info = "Bench".to_string();
        assert_eq!(marker.display_info(), "Bench");
    }

    #[test]
    fn test_marker_to_feature_attributes() {
        let marker = Marker::new(MarkerId(42), Coord::new(1.0, 2.0), "Bench".into());
        let feature = Feature::from(&marker);
        assert_eq!(feature.attribute("id"), Some(&Value::from(42)));
        assert_eq!(feature.attribute("info"), Some(&Value::from("Bench")));
        assert_eq!(feature.geometry, Some(Geometry::point(Coord::new(1.0, 2.0))));
        assert_eq!(feature.attributes.len(), 2);
    }
}
