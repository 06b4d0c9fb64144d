//! GeoPackage binary blob support

pub mod header;

pub use header::{GpkgHeader, GPKG_MAGIC};

use crate::error::Result;
use crate::formats::wkb::Geometry;

/// Decodes a complete GeoPackage feature blob
///
/// Parses the envelope header, then the WKB geometry the header size
/// locates immediately after it.
pub fn decode_blob(blob: &[u8]) -> Result<(GpkgHeader, Geometry)> {
    let header = GpkgHeader::decode(blob)?;
    let (geometry, _) = Geometry::decode(&blob[header.size()..])?;
    Ok((header, geometry))
}
