//! GeoJSON import/export
//!
//! This module provides:
//! - Reprojection between the storage (EPSG:4326) and working (EPSG:3857) projections
//! - Parsing of uploaded documents into base features plus their combined extent
//! - Serialization of base features and markers into one merged document

pub mod geojson;
pub mod projection;

pub use geojson::{EXTENSION, Import, MIME_TYPE, ParseError, export_string, import_str};
