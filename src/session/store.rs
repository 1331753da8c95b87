//! Base features and user markers held for the current session

use crate::domain::{Feature, Marker, MarkerId};

/// Imported features and user markers, kept as two disjoint sequences
#[derive(Clone, Debug, Default)]
pub struct FeatureStore {
    base: Vec<Feature>,
    markers: Vec<Marker>,
}

impl FeatureStore {
    pub fn base(&self) -> &[Feature] {
        &self.base
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Replace all base features with a freshly imported set
    pub fn replace_base(&mut self, features: Vec<Feature>) {
        self.base = features;
    }

    pub fn marker(&self, id: MarkerId) -> Option<&Marker> {
        self.markers.iter().find(|m| m.id == id)
    }

    pub fn marker_mut(&mut self, id: MarkerId) -> Option<&mut Marker> {
        self.markers.iter_mut().find(|m| m.id == id)
    }

    pub fn push_marker(&mut self, marker: Marker) {
        debug_assert!(self.marker(marker.id).is_none(), "duplicate marker id");
        self.markers.push(marker);
    }

    /// Remove a marker, returning it if it was present
    pub fn remove_marker(&mut self, id: MarkerId) -> Option<Marker> {
        let index = self.markers.iter().position(|m| m.id == id)?;
        Some(self.markers.remove(index))
    }
}
