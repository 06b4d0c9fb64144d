//! Core data types for vectorkit

use serde::{Deserialize, Serialize};

/// Geometry type codes defined by the WKB encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GeometryType {
    /// Single coordinate pair
    Point,
    /// Ordered sequence of coordinate pairs
    LineString,
    /// Closed rings, first exterior, rest interior
    Polygon,
    /// Collection of points
    MultiPoint,
    /// Collection of line strings
    MultiLineString,
    /// Collection of polygons
    MultiPolygon,
    /// Heterogeneous collection of geometries
    GeometryCollection,
}

impl GeometryType {
    /// Maps a WKB type code to its geometry type
    ///
    /// Returns `None` for codes outside the enumerated table.
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(GeometryType::Point),
            2 => Some(GeometryType::LineString),
            3 => Some(GeometryType::Polygon),
            4 => Some(GeometryType::MultiPoint),
            5 => Some(GeometryType::MultiLineString),
            6 => Some(GeometryType::MultiPolygon),
            7 => Some(GeometryType::GeometryCollection),
            _ => None,
        }
    }

    /// Returns the WKB type code for this geometry type
    pub fn code(&self) -> u32 {
        match self {
            GeometryType::Point => 1,
            GeometryType::LineString => 2,
            GeometryType::Polygon => 3,
            GeometryType::MultiPoint => 4,
            GeometryType::MultiLineString => 5,
            GeometryType::MultiPolygon => 6,
            GeometryType::GeometryCollection => 7,
        }
    }

    /// Returns the name of this geometry type
    pub fn name(&self) -> &'static str {
        match self {
            GeometryType::Point => "Point",
            GeometryType::LineString => "LineString",
            GeometryType::Polygon => "Polygon",
            GeometryType::MultiPoint => "MultiPoint",
            GeometryType::MultiLineString => "MultiLineString",
            GeometryType::MultiPolygon => "MultiPolygon",
            GeometryType::GeometryCollection => "GeometryCollection",
        }
    }
}

/// Axis-aligned bounding box in layer coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Minimum x coordinate
    pub min_x: f64,
    /// Minimum y coordinate
    pub min_y: f64,
    /// Maximum x coordinate
    pub max_x: f64,
    /// Maximum y coordinate
    pub max_y: f64,
}

impl Bounds {
    /// Creates a new bounding box
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Returns the extent along the x axis
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Returns the extent along the y axis
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Returns whether this box and `other` overlap
    pub fn intersects(&self, other: &Bounds) -> bool {
        self.min_x <= other.max_x
            && other.min_x <= self.max_x
            && self.min_y <= other.max_y
            && other.min_y <= self.max_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_type_codes() {
        assert_eq!(GeometryType::from_code(1), Some(GeometryType::Point));
        assert_eq!(GeometryType::from_code(3), Some(GeometryType::Polygon));
        assert_eq!(
            GeometryType::from_code(7),
            Some(GeometryType::GeometryCollection)
        );
        assert_eq!(GeometryType::from_code(0), None);
        assert_eq!(GeometryType::from_code(99), None);
    }

    #[test]
    fn test_geometry_type_round_trip() {
        for code in 1..=7 {
            let geom_type = GeometryType::from_code(code).unwrap();
            assert_eq!(geom_type.code(), code);
        }
    }

    #[test]
    fn test_geometry_type_name() {
        assert_eq!(GeometryType::Polygon.name(), "Polygon");
        assert_eq!(GeometryType::MultiLineString.name(), "MultiLineString");
    }

    #[test]
    fn test_bounds_extent() {
        let bounds = Bounds::new(-10.0, -5.0, 10.0, 15.0);
        assert_eq!(bounds.width(), 20.0);
        assert_eq!(bounds.height(), 20.0);
    }

    #[test]
    fn test_bounds_intersects() {
        let a = Bounds::new(0.0, 0.0, 10.0, 10.0);
        let b = Bounds::new(5.0, 5.0, 15.0, 15.0);
        let c = Bounds::new(11.0, 11.0, 20.0, 20.0);

        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
    }
}
