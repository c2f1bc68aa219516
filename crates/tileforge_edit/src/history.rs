//! Reversible-edit contract and the undo/redo history container

use tileforge_core::TileMap;

use crate::EditError;

/// A reversible editing step over a [`TileMap`].
///
/// Callers check `can_undo`/`can_redo` before invoking; an application
/// failure (for example a stale layer id) must leave the map untouched.
pub trait UndoableEdit: Send + Sync {
    /// Human-readable label for an Edit menu
    fn description(&self) -> &str;

    fn can_undo(&self) -> bool;

    fn undo(&mut self, map: &mut TileMap) -> Result<(), EditError>;

    fn can_redo(&self) -> bool;

    fn redo(&mut self, map: &mut TileMap) -> Result<(), EditError>;
}

/// Stores applied edits for undo/redo
#[derive(Default)]
pub struct EditHistory {
    /// Stack of edits that have been applied
    undo_stack: Vec<Box<dyn UndoableEdit>>,
    /// Stack of edits that have been undone
    redo_stack: Vec<Box<dyn UndoableEdit>>,
}

impl EditHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an edit whose changes are already applied to the map.
    /// Recording clears the redo stack.
    pub fn push(&mut self, edit: Box<dyn UndoableEdit>) {
        self.undo_stack.push(edit);
        self.redo_stack.clear();
    }

    pub fn can_undo(&self) -> bool {
        self.undo_stack.last().map(|e| e.can_undo()).unwrap_or(false)
    }

    pub fn can_redo(&self) -> bool {
        self.redo_stack.last().map(|e| e.can_redo()).unwrap_or(false)
    }

    /// Undo the most recent edit.
    ///
    /// An edit that can no longer apply (stale layer id after a structural
    /// change) reports its error and is dropped from the history; the map
    /// is left as it was.
    pub fn undo(&mut self, map: &mut TileMap) -> Result<(), EditError> {
        let mut edit = self.undo_stack.pop().ok_or(EditError::NothingToUndo)?;
        match edit.undo(map) {
            Ok(()) => {
                self.redo_stack.push(edit);
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    /// Redo the most recently undone edit.
    pub fn redo(&mut self, map: &mut TileMap) -> Result<(), EditError> {
        let mut edit = self.redo_stack.pop().ok_or(EditError::NothingToRedo)?;
        match edit.redo(map) {
            Ok(()) => {
                self.undo_stack.push(edit);
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    /// Label of the edit `undo` would revert
    pub fn undo_description(&self) -> Option<&str> {
        self.undo_stack.last().map(|e| e.description())
    }

    /// Label of the edit `redo` would reapply
    pub fn redo_description(&self) -> Option<&str> {
        self.redo_stack.last().map(|e| e.description())
    }

    /// Clear all history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
