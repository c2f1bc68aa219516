//! Tile identity, tile storage and tileset configuration

use image::RgbaImage;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::TileCutter;

/// Identifier of a tile within its owning [`TileSet`].
///
/// Grid cells store `Option<TileId>`; `None` is the empty cell. Ids are
/// assigned sequentially when tiles are added and are unique per tileset.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct TileId(pub u32);

/// A single tile owned by a [`TileSet`].
///
/// Layers reference tiles by id only. The image payload is never mutated
/// through the grid model and is not serialized; it is rebuilt by re-slicing
/// the tileset's source sheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tile {
    pub id: TileId,
    #[serde(skip)]
    pub image: Option<RgbaImage>,
}

/// Per-tile properties like collision and custom metadata
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TileProperties {
    /// Whether this tile has collision
    #[serde(default)]
    pub collision: bool,
    /// Custom user-defined properties
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub custom: HashMap<String, serde_json::Value>,
}

impl TileProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set collision for this tile
    pub fn with_collision(mut self, collision: bool) -> Self {
        self.collision = collision;
        self
    }

    /// Set a custom property
    pub fn with_custom(mut self, key: String, value: serde_json::Value) -> Self {
        self.custom.insert(key, value);
        self
    }

    /// Get a custom property
    pub fn get_custom(&self, key: &str) -> Option<&serde_json::Value> {
        self.custom.get(key)
    }

    /// Check if any properties are set (non-default)
    pub fn is_empty(&self) -> bool {
        !self.collision && self.custom.is_empty()
    }
}

/// A tileset: the owner of tiles referenced by layer cells.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileSet {
    pub id: Uuid,
    pub name: String,
    /// Tile size in pixels
    pub tile_width: u32,
    pub tile_height: u32,
    /// Pixels between tiles in the source sheet
    #[serde(default)]
    pub spacing: u32,
    /// Pixels from the sheet edge to the first tile
    #[serde(default)]
    pub margin: u32,
    /// Path to the source sheet image (relative to the assets directory)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default)]
    pub tiles: Vec<Tile>,
    /// Per-tile properties (collision, custom data)
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub tile_properties: HashMap<u32, TileProperties>,
}

impl TileSet {
    /// Create a new empty tileset
    pub fn new(name: String, tile_width: u32, tile_height: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            tile_width,
            tile_height,
            spacing: 0,
            margin: 0,
            source: None,
            tiles: Vec::new(),
            tile_properties: HashMap::new(),
        }
    }

    /// Build a tileset by slicing a sheet image row-major.
    pub fn from_sheet(
        name: String,
        sheet: RgbaImage,
        tile_width: u32,
        tile_height: u32,
        spacing: u32,
        margin: u32,
    ) -> Self {
        let mut tileset = Self::new(name, tile_width, tile_height);
        tileset.spacing = spacing;
        tileset.margin = margin;
        let mut cutter = TileCutter::new(sheet, tile_width, tile_height, spacing, margin);
        while let Some(image) = cutter.next_tile() {
            tileset.add_tile(Some(image));
        }
        tileset
    }

    /// Add a tile, assigning the next sequential id
    pub fn add_tile(&mut self, image: Option<RgbaImage>) -> TileId {
        let id = TileId(self.tiles.len() as u32);
        self.tiles.push(Tile { id, image });
        id
    }

    /// Get tile by id
    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        // Ids are dense when tiles come from a sheet; fall back to a scan
        // for sets built by hand.
        match self.tiles.get(id.0 as usize) {
            Some(tile) if tile.id == id => Some(tile),
            _ => self.tiles.iter().find(|t| t.id == id),
        }
    }

    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Get properties for a tile (returns None if not set)
    pub fn get_tile_properties(&self, id: TileId) -> Option<&TileProperties> {
        self.tile_properties.get(&id.0)
    }

    /// Set properties for a tile
    pub fn set_tile_properties(&mut self, id: TileId, properties: TileProperties) {
        if properties.is_empty() {
            self.tile_properties.remove(&id.0);
        } else {
            self.tile_properties.insert(id.0, properties);
        }
    }

    /// Check if a tile has collision
    pub fn tile_has_collision(&self, id: TileId) -> bool {
        self.tile_properties
            .get(&id.0)
            .map(|p| p.collision)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids() {
        let mut tileset = TileSet::new("Test".to_string(), 16, 16);
        assert_eq!(tileset.add_tile(None), TileId(0));
        assert_eq!(tileset.add_tile(None), TileId(1));
        assert_eq!(tileset.tile_count(), 2);
        assert_eq!(tileset.tile(TileId(1)).map(|t| t.id), Some(TileId(1)));
        assert!(tileset.tile(TileId(2)).is_none());
    }

    #[test]
    fn test_from_sheet() {
        let sheet = RgbaImage::new(64, 32);
        let tileset = TileSet::from_sheet("Sheet".to_string(), sheet, 16, 16, 0, 0);
        assert_eq!(tileset.tile_count(), 8);
        assert!(tileset.tile(TileId(7)).and_then(|t| t.image.as_ref()).is_some());
    }

    #[test]
    fn test_tile_properties_cleanup() {
        let mut tileset = TileSet::new("Test".to_string(), 16, 16);
        let id = tileset.add_tile(None);

        tileset.set_tile_properties(id, TileProperties::new().with_collision(true));
        assert!(tileset.tile_has_collision(id));

        // Resetting to defaults removes the entry entirely
        tileset.set_tile_properties(id, TileProperties::new());
        assert!(tileset.get_tile_properties(id).is_none());
    }
}
