//! Geometric types for map features, extents and screen positions

use serde::{Deserialize, Serialize};

/// A point in the map's working coordinate system (Web Mercator metres)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Coord {
    pub x: f64,
    pub y: f64,
}

impl Coord {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A point in screen pixels, as reported by the render surface
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
}

impl ScreenPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Translate the point by the given pixel delta
    pub fn offset(self, (dx, dy): (f32, f32)) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// A GeoJSON position: x, y and any extra ordinates (altitude etc.)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct Position(Vec<f64>);

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self(vec![x, y])
    }

    pub fn x(&self) -> f64 {
        self.0[0]
    }

    pub fn y(&self) -> f64 {
        self.0[1]
    }

    /// Replace x and y, keeping extra ordinates untouched
    pub fn set_xy(&mut self, x: f64, y: f64) {
        self.0[0] = x;
        self.0[1] = y;
    }

    pub fn ordinates(&self) -> &[f64] {
        &self.0
    }
}

impl TryFrom<Vec<f64>> for Position {
    type Error = String;

    fn try_from(ordinates: Vec<f64>) -> Result<Self, Self::Error> {
        if ordinates.len() < 2 {
            return Err(format!(
                "position needs at least 2 ordinates, got {}",
                ordinates.len()
            ));
        }
        Ok(Self(ordinates))
    }
}

impl From<Position> for Vec<f64> {
    fn from(position: Position) -> Self {
        position.0
    }
}

impl From<Coord> for Position {
    fn from(c: Coord) -> Self {
        Self::new(c.x, c.y)
    }
}

/// Feature geometry, tagged by its GeoJSON `type`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point { coordinates: Position },
    MultiPoint { coordinates: Vec<Position> },
    LineString { coordinates: Vec<Position> },
    MultiLineString { coordinates: Vec<Vec<Position>> },
    Polygon { coordinates: Vec<Vec<Position>> },
    MultiPolygon { coordinates: Vec<Vec<Vec<Position>>> },
    GeometryCollection { geometries: Vec<Geometry> },
}

impl Geometry {
    /// GeoJSON type names accepted as geometries
    pub const TYPES: [&'static str; 7] = [
        "Point",
        "MultiPoint",
        "LineString",
        "MultiLineString",
        "Polygon",
        "MultiPolygon",
        "GeometryCollection",
    ];

    pub fn point(c: Coord) -> Self {
        Geometry::Point {
            coordinates: c.into(),
        }
    }

    /// Visit every position of the geometry
    pub fn for_each_position(&self, f: &mut dyn FnMut(&Position)) {
        match self {
            Geometry::Point { coordinates } => f(coordinates),
            Geometry::MultiPoint { coordinates } | Geometry::LineString { coordinates } => {
                coordinates.iter().for_each(|p| f(p))
            }
            Geometry::MultiLineString { coordinates } | Geometry::Polygon { coordinates } => {
                coordinates.iter().flatten().for_each(|p| f(p))
            }
            Geometry::MultiPolygon { coordinates } => {
                coordinates.iter().flatten().flatten().for_each(|p| f(p))
            }
            Geometry::GeometryCollection { geometries } => {
                for g in geometries {
                    g.for_each_position(f);
                }
            }
        }
    }

    /// Mutably visit every position of the geometry
    pub fn for_each_position_mut(&mut self, f: &mut dyn FnMut(&mut Position)) {
        match self {
            Geometry::Point { coordinates } => f(coordinates),
            Geometry::MultiPoint { coordinates } | Geometry::LineString { coordinates } => {
                coordinates.iter_mut().for_each(|p| f(p))
            }
            Geometry::MultiLineString { coordinates } | Geometry::Polygon { coordinates } => {
                coordinates.iter_mut().flatten().for_each(|p| f(p))
            }
            Geometry::MultiPolygon { coordinates } => coordinates
                .iter_mut()
                .flatten()
                .flatten()
                .for_each(|p| f(p)),
            Geometry::GeometryCollection { geometries } => {
                for g in geometries {
                    g.for_each_position_mut(f);
                }
            }
        }
    }

    /// Bounding extent of all positions
    pub fn extent(&self) -> Extent {
        let mut extent = Extent::empty();
        self.for_each_position(&mut |p| extent.extend_xy(p.x(), p.y()));
        extent
    }
}

/// Axis-aligned bounding box in working coordinates.
///
/// The empty extent is inverted (min = +inf, max = -inf) so that extending
/// it with any point or extent yields that point or extent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Default for Extent {
    fn default() -> Self {
        Self::empty()
    }
}

impl Extent {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    pub fn empty() -> Self {
        Self::new(
            f64::INFINITY,
            f64::INFINITY,
            f64::NEG_INFINITY,
            f64::NEG_INFINITY,
        )
    }

    /// True when no point has been added (degenerate extent)
    pub fn is_empty(&self) -> bool {
        self.max_x < self.min_x || self.max_y < self.min_y
    }

    pub fn extend_xy(&mut self, x: f64, y: f64) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    /// Grow this extent to cover `other`
    pub fn extend(&mut self, other: &Extent) {
        if other.is_empty() {
            return;
        }
        self.extend_xy(other.min_x, other.min_y);
        self.extend_xy(other.max_x, other.max_y);
    }

    pub fn center(&self) -> Option<Coord> {
        if self.is_empty() {
            return None;
        }
        Some(Coord::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        ))
    }
}
