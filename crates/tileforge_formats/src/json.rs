//! Built-in JSON map and tileset handler

use std::fs;
use std::path::Path;

use tileforge_core::{TileMap, TileSet};

use crate::{FormatError, MapFormat};

/// Maps as `.tfmap`, tilesets as `.tfts`, both pretty-printed JSON.
///
/// Tile images are not embedded; a tileset serializes its source path and
/// slicing parameters and is re-sliced on load by the asset layer.
pub struct JsonMapFormat;

impl MapFormat for JsonMapFormat {
    fn name(&self) -> &str {
        "tileforge JSON"
    }

    fn description(&self) -> &str {
        "tileforge native JSON map and tileset files"
    }

    fn extensions(&self) -> &[&str] {
        &["tfmap", "tfts"]
    }

    fn read_map(&self, path: &Path) -> Result<TileMap, FormatError> {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| FormatError::Parse(e.to_string()))
    }

    fn write_map(&self, map: &TileMap, path: &Path) -> Result<(), FormatError> {
        let content =
            serde_json::to_string_pretty(map).map_err(|e| FormatError::Parse(e.to_string()))?;
        fs::write(path, content)?;
        Ok(())
    }

    fn read_tileset(&self, path: &Path) -> Result<TileSet, FormatError> {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| FormatError::Parse(e.to_string()))
    }

    fn write_tileset(&self, tileset: &TileSet, path: &Path) -> Result<(), FormatError> {
        let content =
            serde_json::to_string_pretty(tileset).map_err(|e| FormatError::Parse(e.to_string()))?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tileforge_core::TileId;
    use uuid::Uuid;

    /// Unique temp path so concurrent test runs don't collide
    fn temp_path(extension: &str) -> PathBuf {
        std::env::temp_dir().join(format!("tileforge_{}.{extension}", Uuid::new_v4()))
    }

    fn sample_map() -> TileMap {
        let mut map = TileMap::new("Cavern".to_string(), 6, 4, 16, 16);
        map.add_layer("Ground");
        map.add_layer("Props");
        map.set_tile(0, 1, 1, Some(TileId(3)));
        map.set_tile(1, 5, 3, Some(TileId(0)));
        map
    }

    #[test]
    fn test_map_roundtrip() {
        let format = JsonMapFormat;
        let path = temp_path("tfmap");
        let map = sample_map();

        format.write_map(&map, &path).expect("map writes");
        let loaded = format.read_map(&path).expect("map reads back");
        fs::remove_file(&path).ok();

        assert_eq!(loaded.id, map.id);
        assert_eq!((loaded.width, loaded.height), (6, 4));
        assert_eq!(
            loaded.layers.iter().map(|l| l.id).collect::<Vec<_>>(),
            map.layers.iter().map(|l| l.id).collect::<Vec<_>>()
        );
        assert_eq!(loaded.tile_at(0, 1, 1), Some(TileId(3)));
        assert_eq!(loaded.tile_at(1, 5, 3), Some(TileId(0)));
        assert_eq!(loaded.tile_at(0, 0, 0), None);
    }

    #[test]
    fn test_tileset_roundtrip_keeps_slicing_parameters() {
        let format = JsonMapFormat;
        let path = temp_path("tfts");

        let mut tileset = TileSet::new("Dungeon".to_string(), 16, 16);
        tileset.spacing = 2;
        tileset.margin = 1;
        tileset.source = Some("tiles/dungeon.png".to_string());
        tileset.add_tile(None);
        tileset.add_tile(None);

        format.write_tileset(&tileset, &path).expect("tileset writes");
        let loaded = format.read_tileset(&path).expect("tileset reads back");
        fs::remove_file(&path).ok();

        assert_eq!(loaded.id, tileset.id);
        assert_eq!((loaded.spacing, loaded.margin), (2, 1));
        assert_eq!(loaded.source.as_deref(), Some("tiles/dungeon.png"));
        assert_eq!(loaded.tile_count(), 2);
    }

    #[test]
    fn test_read_missing_file_is_io_error() {
        let format = JsonMapFormat;
        let err = format
            .read_map(Path::new("/nonexistent/level.tfmap"))
            .expect_err("missing file");
        assert!(matches!(err, FormatError::Io(_)));
    }

    #[test]
    fn test_read_garbage_is_parse_error() {
        let format = JsonMapFormat;
        let path = temp_path("tfmap");
        fs::write(&path, "{ not json").expect("temp file writes");

        let err = format.read_map(&path).expect_err("garbage input");
        fs::remove_file(&path).ok();
        assert!(matches!(err, FormatError::Parse(_)));
    }
}
