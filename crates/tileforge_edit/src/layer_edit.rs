//! Single-layer snapshot edit

use tileforge_core::{TileLayer, TileMap};

use crate::{EditError, UndoableEdit};

/// Capture progress of a snapshot edit.
///
/// Snapshots must be taken in order: `start` before the mutation begins,
/// `end` after it finishes. Out-of-order calls are typed errors, never
/// silently accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaptureState {
    #[default]
    Empty,
    Started,
    Completed,
}

/// Before/after snapshot of a single layer's in-place edit.
///
/// `start` and `end` deep-clone the layer, so later mutation of the live
/// map never leaks into the captured state. Undo re-binds by the captured
/// layer id on the map as it is *now* and restores in place through
/// [`TileLayer::copy_content_from`]; if a structural edit removed that
/// layer in the meantime, the lookup fails fast and the map is left
/// untouched.
pub struct LayerEdit {
    description: String,
    state: CaptureState,
    before: Option<TileLayer>,
    after: Option<TileLayer>,
    undone: bool,
}

impl LayerEdit {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            state: CaptureState::Empty,
            before: None,
            after: None,
            undone: false,
        }
    }

    pub fn capture_state(&self) -> CaptureState {
        self.state
    }

    /// Capture the pre-edit layer state. Must run before mutation begins.
    pub fn start(&mut self, layer: &TileLayer) -> Result<(), EditError> {
        match self.state {
            CaptureState::Empty => {
                self.before = Some(layer.clone());
                self.state = CaptureState::Started;
                Ok(())
            }
            _ => Err(EditError::AlreadyCaptured),
        }
    }

    /// Capture the post-edit layer state.
    pub fn end(&mut self, layer: &TileLayer) -> Result<(), EditError> {
        match self.state {
            CaptureState::Started => {
                self.after = Some(layer.clone());
                self.state = CaptureState::Completed;
                Ok(())
            }
            CaptureState::Empty => {
                log::warn!(
                    "edit '{}' ended before it was started; nothing captured",
                    self.description
                );
                Err(EditError::NotCaptured)
            }
            CaptureState::Completed => Err(EditError::AlreadyCaptured),
        }
    }

    /// Restore `snapshot` onto the map layer that still carries its id.
    fn restore(map: &mut TileMap, snapshot: &TileLayer) -> Result<(), EditError> {
        let Some(live) = map.layers.layer_mut(snapshot.id) else {
            return Err(EditError::LayerNotFound(snapshot.id));
        };
        live.copy_content_from(snapshot);
        Ok(())
    }
}

impl UndoableEdit for LayerEdit {
    fn description(&self) -> &str {
        &self.description
    }

    fn can_undo(&self) -> bool {
        self.state == CaptureState::Completed && !self.undone
    }

    fn undo(&mut self, map: &mut TileMap) -> Result<(), EditError> {
        if self.state != CaptureState::Completed {
            return Err(EditError::NotCaptured);
        }
        if self.undone {
            return Err(EditError::NothingToUndo);
        }
        let Some(before) = self.before.as_ref() else {
            return Err(EditError::NotCaptured);
        };
        Self::restore(map, before)?;
        self.undone = true;
        Ok(())
    }

    fn can_redo(&self) -> bool {
        self.state == CaptureState::Completed && self.undone
    }

    fn redo(&mut self, map: &mut TileMap) -> Result<(), EditError> {
        if self.state != CaptureState::Completed {
            return Err(EditError::NotCaptured);
        }
        if !self.undone {
            return Err(EditError::NothingToRedo);
        }
        let Some(after) = self.after.as_ref() else {
            return Err(EditError::NotCaptured);
        };
        Self::restore(map, after)?;
        self.undone = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tileforge_core::TileId;

    fn map_with_layer() -> TileMap {
        let mut map = TileMap::new("Test".to_string(), 8, 8, 16, 16);
        map.add_layer("Ground");
        map
    }

    fn layer(map: &TileMap) -> &TileLayer {
        map.layers.layer_at(0).expect("map has one layer")
    }

    #[test]
    fn test_end_before_start_is_rejected() {
        let map = map_with_layer();
        let mut edit = LayerEdit::new("Paint");

        assert_eq!(edit.end(layer(&map)), Err(EditError::NotCaptured));
        assert_eq!(edit.capture_state(), CaptureState::Empty);
    }

    #[test]
    fn test_double_capture_is_rejected() {
        let map = map_with_layer();
        let mut edit = LayerEdit::new("Paint");

        edit.start(layer(&map)).expect("empty edit accepts start");
        assert_eq!(edit.start(layer(&map)), Err(EditError::AlreadyCaptured));

        edit.end(layer(&map)).expect("started edit accepts end");
        assert_eq!(edit.end(layer(&map)), Err(EditError::AlreadyCaptured));
    }

    #[test]
    fn test_undo_redo_roundtrip() {
        let mut map = map_with_layer();
        map.set_tile(0, 1, 1, Some(TileId(1)));

        let mut edit = LayerEdit::new("Paint");
        edit.start(layer(&map)).expect("empty edit accepts start");

        // The in-place edit under capture
        map.set_tile(0, 1, 1, Some(TileId(2)));
        map.set_tile(0, 3, 3, Some(TileId(5)));
        edit.end(layer(&map)).expect("started edit accepts end");

        assert!(edit.can_undo());
        edit.undo(&mut map).expect("completed edit undoes");
        assert_eq!(map.tile_at(0, 1, 1), Some(TileId(1)));
        assert_eq!(map.tile_at(0, 3, 3), None);

        assert!(edit.can_redo());
        edit.redo(&mut map).expect("undone edit redoes");
        assert_eq!(map.tile_at(0, 1, 1), Some(TileId(2)));
        assert_eq!(map.tile_at(0, 3, 3), Some(TileId(5)));
        assert!(edit.can_undo());
    }

    #[test]
    fn test_undo_without_capture_fails() {
        let mut map = map_with_layer();
        let mut edit = LayerEdit::new("Paint");

        assert!(!edit.can_undo());
        assert_eq!(edit.undo(&mut map), Err(EditError::NotCaptured));
    }

    #[test]
    fn test_undo_after_layer_removed_fails_cleanly() {
        let mut map = map_with_layer();
        let mut edit = LayerEdit::new("Paint");

        edit.start(layer(&map)).expect("empty edit accepts start");
        map.set_tile(0, 0, 0, Some(TileId(1)));
        edit.end(layer(&map)).expect("started edit accepts end");

        // Structural edit invalidates the captured id
        let removed = map.layers.remove_at(0).expect("layer exists");
        map.layers.push(TileLayer::new("Ground", 8, 8));

        let result = edit.undo(&mut map);
        assert_eq!(result, Err(EditError::LayerNotFound(removed.id)));
        // The replacement layer was not written to
        assert!(map.layers.layer_at(0).expect("replacement exists").is_empty());
    }
}
