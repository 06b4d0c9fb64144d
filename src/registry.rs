//! Map and layer registry
//!
//! Serving configuration: named maps, each an ordered collection of layers
//! pointing at provider layers. The registry is a plain owned value with no
//! interior locking; callers wanting shared access wrap it themselves.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::types::GeometryType;

/// A named reference to one provider layer within a map
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layer {
    /// Name the layer is served under
    pub name: String,
    /// Layer name on the provider side
    pub provider_layer_name: String,
    /// Lowest zoom the layer appears at
    pub min_zoom: u8,
    /// Highest zoom the layer appears at
    pub max_zoom: u8,
    /// Geometry type the provider layer is expected to hold
    pub geometry_type: Option<GeometryType>,
    /// Tags applied to every feature unless the feature carries its own
    #[serde(default)]
    pub default_tags: HashMap<String, Value>,
}

impl Layer {
    /// Returns whether the layer is visible at the given zoom
    pub fn visible_at(&self, zoom: u8) -> bool {
        zoom >= self.min_zoom && zoom <= self.max_zoom
    }

    /// Merges the layer's default tags under `feature_tags`
    ///
    /// A tag set on the feature wins over a default with the same key.
    pub fn merge_tags(&self, feature_tags: &HashMap<String, Value>) -> HashMap<String, Value> {
        let mut merged = self.default_tags.clone();
        for (key, value) in feature_tags {
            merged.insert(key.clone(), value.clone());
        }
        merged
    }
}

/// A named, attributed, ordered collection of layers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Map {
    /// Name the map is served under
    pub name: String,
    /// Attribution string for rendered tiles
    #[serde(default)]
    pub attribution: String,
    /// Initial longitude, latitude, and zoom
    #[serde(default)]
    pub center: [f64; 3],
    /// Layers in render order
    pub layers: Vec<Layer>,
}

impl Map {
    /// Returns the layers visible at the given zoom, in render order
    pub fn layers_at(&self, zoom: u8) -> Vec<&Layer> {
        self.layers
            .iter()
            .filter(|layer| layer.visible_at(zoom))
            .collect()
    }
}

/// Registry of configured maps, resolved by name
#[derive(Debug, Default)]
pub struct Registry {
    maps: Vec<Map>,
    index: HashMap<String, usize>,
}

impl Registry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a map, replacing any earlier map of the same name
    pub fn add_map(&mut self, map: Map) {
        match self.index.get(&map.name) {
            Some(&position) => self.maps[position] = map,
            None => {
                self.index.insert(map.name.clone(), self.maps.len());
                self.maps.push(map);
            }
        }
    }

    /// Resolves a map by name
    pub fn map(&self, name: &str) -> Result<&Map> {
        self.index
            .get(name)
            .map(|&position| &self.maps[position])
            .ok_or_else(|| Error::MapNotFound(name.to_string()))
    }

    /// Returns every registered map in registration order
    pub fn all_maps(&self) -> &[Map] {
        &self.maps
    }

    /// Returns the number of registered maps
    pub fn len(&self) -> usize {
        self.maps.len()
    }

    /// Returns whether no maps are registered
    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }
}
