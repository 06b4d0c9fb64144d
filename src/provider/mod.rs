//! Storage provider and tile encoder boundaries
//!
//! The decode core sits between two collaborators: a storage backend that
//! supplies raw feature blobs for a bounding-box query, and a tile encoder
//! that consumes decoded geometries. Both are expressed here as traits;
//! implementations (databases, files, MVT encoders) live outside this
//! crate.

use std::collections::HashMap;

use serde_json::Value;

use crate::error::Result;
use crate::formats::gpkg;
use crate::formats::wkb::Geometry;
use crate::types::Bounds;

/// A raw feature row handed over by a storage provider
#[derive(Debug, Clone)]
pub struct RawFeature {
    /// Provider-assigned feature id
    pub id: u64,
    /// GeoPackage binary blob holding the feature geometry
    pub blob: Vec<u8>,
    /// Attribute columns keyed by name
    pub tags: HashMap<String, Value>,
}

/// A decoded feature ready for tile encoding
#[derive(Debug, Clone)]
pub struct Feature {
    /// Provider-assigned feature id
    pub id: u64,
    /// Decoded geometry
    pub geometry: Geometry,
    /// Attribute columns keyed by name
    pub tags: HashMap<String, Value>,
}

/// Boundary trait implemented by storage backends
///
/// Given a provider layer name and a bounding box, return the raw feature
/// rows intersecting it. The provider only hands bytes across the
/// boundary; all decoding happens on this side of it.
pub trait FeatureProvider {
    /// Queries one provider layer for the features intersecting `bounds`
    fn features(&self, layer: &str, bounds: &Bounds) -> Result<Vec<RawFeature>>;
}

/// Boundary trait implemented by the tile-encoding collaborator
pub trait TileEncoder {
    /// Builds encoded tile bytes from the decoded features of one layer
    fn encode(&self, layer: &str, features: &[Feature]) -> Result<Vec<u8>>;
}

/// Decodes the geometry blob of every raw feature row
///
/// A malformed blob aborts the batch with the decode error; the caller
/// decides whether to drop the tile or the layer.
pub fn decode_features(rows: Vec<RawFeature>) -> Result<Vec<Feature>> {
    rows.into_iter()
        .map(|row| {
            let (_, geometry) = gpkg::decode_blob(&row.blob)?;
            Ok(Feature {
                id: row.id,
                geometry,
                tags: row.tags,
            })
        })
        .collect()
}
