//! WKB geometry structures and decoding
//!
//! Every geometry value is self-describing: a one-byte order flag, a
//! four-byte type code in that order, then a type-specific body. Because
//! bodies are variable-length, each decoder returns the number of bytes it
//! consumed; advancing by that count is the only way for a caller to locate
//! the end of a geometry.

use crate::error::{Error, Result};
use crate::io::ByteOrder;
use crate::types::GeometryType;

/// Byte length of one serialized coordinate pair
pub(crate) const POINT_LEN: usize = 16;

/// Byte length of the order-flag + type-code prefix
const TAG_LEN: usize = 5;

/// A decoded coordinate pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl Point {
    /// Creates a new point
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Decodes the fixed 16-byte point body
    pub(crate) fn decode_body(window: &[u8], order: ByteOrder) -> Result<Self> {
        if window.len() != POINT_LEN {
            return Err(Error::WindowLength {
                expected: POINT_LEN,
                actual: window.len(),
            });
        }
        let x = order.read_f64(&window[0..8])?;
        let y = order.read_f64(&window[8..16])?;
        Ok(Self { x, y })
    }
}

/// An ordered, length-prefixed sequence of points
///
/// Rings are child structures of polygons and never appear at the top
/// level of a geometry stream; they carry no order flag or type code of
/// their own.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LinearRing {
    points: Vec<Point>,
}

impl LinearRing {
    /// Creates a ring from its points
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Returns the points of this ring
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns the number of points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns whether the ring holds no points
    ///
    /// An empty ring is legal on the wire: a zero count with no
    /// coordinate data.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Decodes a ring, returning it with the bytes consumed
    pub(crate) fn decode(bytes: &[u8], order: ByteOrder) -> Result<(Self, usize)> {
        let count_window = bytes.get(0..4).ok_or(Error::Truncated {
            needed: 4,
            available: bytes.len(),
        })?;
        let count = order.read_u32(count_window)? as usize;

        // The count is untrusted; check it against the remaining window
        // before allocating anything.
        let needed = 4 + count * POINT_LEN;
        if bytes.len() < needed {
            return Err(Error::Truncated {
                needed,
                available: bytes.len(),
            });
        }

        let mut points = Vec::with_capacity(count);
        let mut cursor = 4;
        for _ in 0..count {
            points.push(Point::decode_body(&bytes[cursor..cursor + POINT_LEN], order)?);
            cursor += POINT_LEN;
        }

        Ok((Self { points }, cursor))
    }
}

/// A decoded polygon: one or more rings, first exterior, rest interior
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    rings: Vec<LinearRing>,
}

impl Polygon {
    /// Creates a polygon from its rings
    pub fn new(rings: Vec<LinearRing>) -> Self {
        Self { rings }
    }

    /// Returns the rings of this polygon
    pub fn rings(&self) -> &[LinearRing] {
        &self.rings
    }

    /// Decodes a complete polygon, returning it with the bytes consumed
    ///
    /// The polygon carries its own order flag and type code; a type code
    /// other than the polygon tag is fatal.
    pub(crate) fn decode(bytes: &[u8]) -> Result<(Self, usize)> {
        let (order, type_code, mut cursor) = read_tag(bytes)?;
        if type_code != GeometryType::Polygon.code() {
            return Err(Error::GeometryTypeMismatch {
                expected: GeometryType::Polygon.code(),
                found: type_code,
            });
        }

        let count_window = bytes.get(cursor..cursor + 4).ok_or(Error::Truncated {
            needed: cursor + 4,
            available: bytes.len(),
        })?;
        let ring_count = order.read_u32(count_window)? as usize;
        cursor += 4;

        // Every ring occupies at least its own four-byte count; reject
        // ring counts the remaining window cannot possibly hold before
        // allocating.
        let needed = cursor + ring_count * 4;
        if bytes.len() < needed {
            return Err(Error::Truncated {
                needed,
                available: bytes.len(),
            });
        }

        let mut rings = Vec::with_capacity(ring_count);
        for _ in 0..ring_count {
            let (ring, consumed) = LinearRing::decode(&bytes[cursor..], order)?;
            cursor += consumed;
            rings.push(ring);
        }

        Ok((Self { rings }, cursor))
    }
}

/// A decoded top-level geometry
///
/// The WKB type table enumerates seven geometry types; only the variants
/// below decode today. Dispatch on any other code fails explicitly with
/// the offending code rather than guessing at a body layout.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// A single coordinate pair
    Point(Point),
    /// A ring-structured area
    Polygon(Polygon),
}

impl Geometry {
    /// Returns the geometry type of this value
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Geometry::Point(_) => GeometryType::Point,
            Geometry::Polygon(_) => GeometryType::Polygon,
        }
    }

    /// Decodes one self-describing geometry from the front of `bytes`
    ///
    /// Returns the geometry together with the number of bytes consumed so
    /// the caller can advance its cursor past it. On error nothing is
    /// consumed.
    pub fn decode(bytes: &[u8]) -> Result<(Self, usize)> {
        let (order, type_code, cursor) = read_tag(bytes)?;

        match GeometryType::from_code(type_code) {
            Some(GeometryType::Point) => {
                let window = bytes.get(cursor..cursor + POINT_LEN).ok_or(Error::Truncated {
                    needed: cursor + POINT_LEN,
                    available: bytes.len(),
                })?;
                let point = Point::decode_body(window, order)?;
                Ok((Geometry::Point(point), cursor + POINT_LEN))
            }
            Some(GeometryType::Polygon) => {
                let (polygon, consumed) = Polygon::decode(bytes)?;
                Ok((Geometry::Polygon(polygon), consumed))
            }
            Some(_) | None => Err(Error::UnsupportedGeometryType(type_code)),
        }
    }
}

/// Reads the order-flag + type-code prefix every geometry starts with
fn read_tag(bytes: &[u8]) -> Result<(ByteOrder, u32, usize)> {
    if bytes.len() < TAG_LEN {
        return Err(Error::Truncated {
            needed: TAG_LEN,
            available: bytes.len(),
        });
    }
    let order = ByteOrder::from_wkb_flag(bytes[0])?;
    let type_code = order.read_u32(&bytes[1..5])?;
    Ok((order, type_code, TAG_LEN))
}
