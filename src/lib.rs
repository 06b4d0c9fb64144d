//! vectorkit - A vector tile serving toolkit for Rust
//!
//! vectorkit decodes the geometry blobs geospatial storage backends hand
//! out — OGC GeoPackage binary headers wrapping Well-Known Binary (WKB)
//! geometries — into a typed in-memory geometry model, and carries the
//! surrounding serving vocabulary: provider and encoder boundaries and a
//! map/layer registry.
//!
//! Decoding is pure and synchronous: every call owns its input buffer and
//! produces independently owned output, so concurrent decodes need no
//! coordination.
//!
//! # Examples
//!
//! ## Decoding a single WKB geometry
//!
//! ```
//! use vectorkit::Geometry;
//!
//! // Little-endian point at (1.0, 2.0).
//! let mut bytes = vec![0x01];
//! bytes.extend_from_slice(&1u32.to_le_bytes());
//! bytes.extend_from_slice(&1.0f64.to_le_bytes());
//! bytes.extend_from_slice(&2.0f64.to_le_bytes());
//!
//! let (geometry, consumed) = Geometry::decode(&bytes)?;
//! assert_eq!(consumed, bytes.len());
//! # Ok::<(), vectorkit::Error>(())
//! ```
//!
//! ## Decoding a GeoPackage feature blob
//!
//! ```no_run
//! use vectorkit::{decode_blob, Geometry};
//!
//! # let blob: Vec<u8> = vec![];
//! let (header, geometry) = decode_blob(&blob)?;
//! println!("srs {}: {:?}", header.srs_id(), geometry.geometry_type());
//! # Ok::<(), vectorkit::Error>(())
//! ```

pub mod error;
pub mod formats;
pub mod io;
pub mod provider;
pub mod registry;
pub mod types;

pub use error::{Error, Result};
pub use formats::gpkg::{decode_blob, GpkgHeader, GPKG_MAGIC};
pub use formats::wkb::{decode_all, Geometry, LinearRing, Point, Polygon};
pub use io::ByteOrder;
pub use provider::{decode_features, Feature, FeatureProvider, RawFeature, TileEncoder};
pub use registry::{Layer, Map, Registry};
pub use types::{Bounds, GeometryType};
