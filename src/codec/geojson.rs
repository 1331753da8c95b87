//! GeoJSON document reading and writing
//!
//! Documents are stored in EPSG:4326 unless a legacy `crs` member says
//! otherwise; features are held in memory in EPSG:3857.

use serde::Deserialize;
use serde_json::{Map, Value, json};
use thiserror::Error;

use super::projection::{self, Projection};
use crate::domain::{Attributes, Extent, Feature, FeatureId, Geometry, Marker, combined_extent};

/// Mime type offered with exported documents
pub const MIME_TYPE: &str = "application/geo+json";

/// File extension of the interchange format
pub const EXTENSION: &str = "geojson";

/// Why an uploaded document could not be read
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("document must be a JSON object")]
    NotAnObject,
    #[error("object has no \"type\" member")]
    MissingType,
    #[error("unsupported GeoJSON type \"{0}\"")]
    UnsupportedType(String),
    #[error("invalid feature: {0}")]
    InvalidFeature(String),
    #[error("invalid {kind} geometry: {reason}")]
    InvalidGeometry { kind: String, reason: String },
    #[error("unsupported coordinate reference system {0}")]
    UnsupportedCrs(String),
}

/// Result of a successful import
#[derive(Clone, Debug)]
pub struct Import {
    /// Features with geometry in working coordinates
    pub features: Vec<Feature>,
    /// Union of all feature extents; empty when nothing has geometry
    pub extent: Extent,
    /// Projection the document was stored in
    pub projection: Projection,
}

/// Parse a GeoJSON document (FeatureCollection, Feature or bare geometry)
pub fn import_str(raw: &str) -> Result<Import, ParseError> {
    let document: Value = serde_json::from_str(raw)?;
    let object = document.as_object().ok_or(ParseError::NotAnObject)?;
    let projection = data_projection(object)?;

    let mut features = match type_of(object)? {
        "FeatureCollection" => object
            .get("features")
            .and_then(Value::as_array)
            .ok_or_else(|| {
                ParseError::InvalidFeature("FeatureCollection without a \"features\" array".into())
            })?
            .iter()
            .map(read_feature)
            .collect::<Result<Vec<_>, _>>()?,
        "Feature" => vec![read_feature(&document)?],
        _ => vec![Feature {
            geometry: Some(read_geometry(&document)?),
            ..Default::default()
        }],
    };

    for geometry in features.iter_mut().filter_map(|f| f.geometry.as_mut()) {
        projection::transform(geometry, projection, Projection::WebMercator);
    }
    let extent = combined_extent(&features);

    Ok(Import {
        features,
        extent,
        projection,
    })
}

/// Serialize base features followed by markers as one FeatureCollection
///
/// Only `type`, `id`, `geometry` and `properties` are written: `bbox` and
/// foreign members of the imported features and geometries are not kept.
pub fn export_string(base: &[Feature], markers: &[Marker]) -> String {
    let features: Vec<Value> = base
        .iter()
        .cloned()
        .chain(markers.iter().map(Feature::from))
        .map(write_feature)
        .collect();

    json!({
        "type": "FeatureCollection",
        "features": features,
    })
    .to_string()
}

fn type_of(object: &Map<String, Value>) -> Result<&str, ParseError> {
    object
        .get("type")
        .and_then(Value::as_str)
        .ok_or(ParseError::MissingType)
}

fn data_projection(object: &Map<String, Value>) -> Result<Projection, ParseError> {
    let crs = match object.get("crs") {
        None | Some(Value::Null) => return Ok(Projection::Geographic),
        Some(crs) => crs,
    };
    let name = match crs.get("type").and_then(Value::as_str) {
        Some("name") => crs.pointer("/properties/name").and_then(Value::as_str),
        _ => None,
    }
    .ok_or_else(|| ParseError::UnsupportedCrs(crs.to_string()))?;

    Projection::from_crs_name(name).ok_or_else(|| ParseError::UnsupportedCrs(format!("\"{name}\"")))
}

fn read_feature(value: &Value) -> Result<Feature, ParseError> {
    let object = value
        .as_object()
        .ok_or_else(|| ParseError::InvalidFeature(format!("expected an object, found {value}")))?;
    match type_of(object)? {
        "Feature" => {}
        other => {
            return Err(ParseError::InvalidFeature(format!(
                "expected type \"Feature\", found \"{other}\""
            )));
        }
    }

    let geometry = match object.get("geometry") {
        None | Some(Value::Null) => None,
        Some(g) => Some(read_geometry(g)?),
    };

    let attributes = match object.get("properties") {
        None | Some(Value::Null) => Attributes::new(),
        Some(Value::Object(properties)) => properties.clone(),
        Some(other) => {
            return Err(ParseError::InvalidFeature(format!(
                "properties must be an object, found {other}"
            )));
        }
    };

    let id = match object.get("id") {
        None | Some(Value::Null) => None,
        Some(Value::Number(n)) => Some(FeatureId::Number(n.clone())),
        Some(Value::String(s)) => Some(FeatureId::String(s.clone())),
        Some(other) => {
            return Err(ParseError::InvalidFeature(format!(
                "id must be a string or number, found {other}"
            )));
        }
    };

    Ok(Feature {
        id,
        geometry,
        attributes,
    })
}

fn read_geometry(value: &Value) -> Result<Geometry, ParseError> {
    let kind = value
        .get("type")
        .and_then(Value::as_str)
        .ok_or(ParseError::MissingType)?;
    if !Geometry::TYPES.contains(&kind) {
        return Err(ParseError::UnsupportedType(kind.to_string()));
    }
    Geometry::deserialize(value).map_err(|e| ParseError::InvalidGeometry {
        kind: kind.to_string(),
        reason: e.to_string(),
    })
}

fn write_feature(feature: Feature) -> Value {
    let geometry = feature
        .geometry
        .map(|mut g| {
            projection::transform(&mut g, Projection::WebMercator, Projection::Geographic);
            json!(g)
        })
        .unwrap_or(Value::Null);

    let mut object = Map::new();
    object.insert("type".into(), "Feature".into());
    if let Some(id) = feature.id {
        object.insert("id".into(), json!(id));
    }
    object.insert("geometry".into(), geometry);
    object.insert("properties".into(), Value::Object(feature.attributes));
    Value::Object(object)
}
