//! Well-Known Binary geometry support

pub mod geometry;
pub mod stream;

pub use geometry::{Geometry, LinearRing, Point, Polygon};
pub use stream::decode_all;
