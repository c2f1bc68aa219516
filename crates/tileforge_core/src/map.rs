//! A complete editable map: layer stack plus owned tilesets

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{LayerStack, TileId, TileLayer, TileSet};

/// A map: the cell grid size shared by its layers, the z-ordered layer
/// stack and the tilesets those layers draw from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileMap {
    pub id: Uuid,
    pub name: String,
    /// Map size in cells
    pub width: u32,
    pub height: u32,
    /// Tile size in pixels
    pub tile_width: u32,
    pub tile_height: u32,
    #[serde(default)]
    pub layers: LayerStack,
    #[serde(default)]
    pub tilesets: Vec<TileSet>,
}

impl TileMap {
    /// Create a new empty map
    pub fn new(name: String, width: u32, height: u32, tile_width: u32, tile_height: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            width,
            height,
            tile_width,
            tile_height,
            layers: LayerStack::new(),
            tilesets: Vec::new(),
        }
    }

    /// Append a new empty layer sized to the map; returns its id
    pub fn add_layer(&mut self, name: impl Into<String>) -> Uuid {
        let layer = TileLayer::new(name, self.width, self.height);
        let id = layer.id;
        self.layers.push(layer);
        id
    }

    pub fn add_tileset(&mut self, tileset: TileSet) {
        self.tilesets.push(tileset);
    }

    /// Get tileset by id
    pub fn tileset(&self, id: Uuid) -> Option<&TileSet> {
        self.tilesets.iter().find(|t| t.id == id)
    }

    /// Tile at position for a specific layer
    pub fn tile_at(&self, layer_index: usize, x: i32, y: i32) -> Option<TileId> {
        self.layers
            .layer_at(layer_index)
            .and_then(|layer| layer.tile_at(x, y))
    }

    /// Set tile at position for a specific layer
    pub fn set_tile(&mut self, layer_index: usize, x: i32, y: i32, tile: Option<TileId>) {
        if let Some(layer) = self.layers.layer_at_mut(layer_index) {
            layer.set_tile(x, y, tile);
        }
    }
}
