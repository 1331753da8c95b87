//! Conversion between geographic lon/lat and spherical Web Mercator

use std::f64::consts::PI;

use crate::domain::{Geometry, Position};

/// Sphere radius used by EPSG:3857
pub const EARTH_RADIUS: f64 = 6_378_137.0;

/// Latitude at which Web Mercator becomes square
pub const MAX_LATITUDE: f64 = 85.051_128_779_806_6;

/// Coordinate reference systems understood by the codec
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Projection {
    /// EPSG:4326 / CRS84, degrees (GeoJSON storage projection)
    Geographic,
    /// EPSG:3857, metres (map working projection)
    WebMercator,
}

impl Projection {
    /// Resolve a legacy GeoJSON `crs` name
    pub fn from_crs_name(name: &str) -> Option<Self> {
        match name {
            "EPSG:4326"
            | "urn:ogc:def:crs:EPSG::4326"
            | "urn:ogc:def:crs:OGC:1.3:CRS84"
            | "CRS:84" => Some(Projection::Geographic),
            "EPSG:3857"
            | "EPSG:900913"
            | "EPSG:102100"
            | "urn:ogc:def:crs:EPSG::3857" => Some(Projection::WebMercator),
            _ => None,
        }
    }
}

/// Project lon/lat degrees to Web Mercator metres
pub fn to_mercator(lon: f64, lat: f64) -> (f64, f64) {
    let lat = lat.clamp(-MAX_LATITUDE, MAX_LATITUDE);
    let x = EARTH_RADIUS * lon.to_radians();
    let y = EARTH_RADIUS * (PI / 4.0 + lat.to_radians() / 2.0).tan().ln();
    (x, y)
}

/// Unproject Web Mercator metres to lon/lat degrees
pub fn to_geographic(x: f64, y: f64) -> (f64, f64) {
    let lon = (x / EARTH_RADIUS).to_degrees();
    let lat = (2.0 * (y / EARTH_RADIUS).exp().atan() - PI / 2.0).to_degrees();
    (lon, lat)
}

fn transform_position(position: &mut Position, from: Projection, to: Projection) {
    let (x, y) = match (from, to) {
        (Projection::Geographic, Projection::WebMercator) => {
            to_mercator(position.x(), position.y())
        }
        (Projection::WebMercator, Projection::Geographic) => {
            to_geographic(position.x(), position.y())
        }
        _ => return,
    };
    position.set_xy(x, y);
}

/// Reproject every position of `geometry` in place
pub fn transform(geometry: &mut Geometry, from: Projection, to: Projection) {
    if from == to {
        return;
    }
    geometry.for_each_position_mut(&mut |p| transform_position(p, from, to));
}
