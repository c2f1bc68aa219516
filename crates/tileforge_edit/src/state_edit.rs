//! Whole-stack snapshot edit for structural layer changes

use tileforge_core::{TileLayer, TileMap};

use crate::{CaptureState, EditError, UndoableEdit};

/// Before/after snapshot of the entire layer stack.
///
/// Broader-grained than [`LayerEdit`](crate::LayerEdit): undo and redo
/// swap the whole ordered sequence back in through
/// [`LayerStack::set_layers`](tileforge_core::LayerStack::set_layers),
/// which is the right shape for structural operations (insert, delete,
/// reorder) where per-layer patching has no meaning.
pub struct LayerStateEdit {
    description: String,
    state: CaptureState,
    before: Vec<TileLayer>,
    after: Vec<TileLayer>,
    undone: bool,
}

impl LayerStateEdit {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            state: CaptureState::Empty,
            before: Vec::new(),
            after: Vec::new(),
            undone: false,
        }
    }

    pub fn capture_state(&self) -> CaptureState {
        self.state
    }

    /// Deep-clone every current layer as the pre-edit state.
    pub fn start(&mut self, map: &TileMap) -> Result<(), EditError> {
        match self.state {
            CaptureState::Empty => {
                self.before = map.layers.snapshot();
                self.state = CaptureState::Started;
                Ok(())
            }
            _ => Err(EditError::AlreadyCaptured),
        }
    }

    /// Deep-clone every current layer as the post-edit state.
    pub fn end(&mut self, map: &TileMap) -> Result<(), EditError> {
        match self.state {
            CaptureState::Started => {
                self.after = map.layers.snapshot();
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

    /// Coalesce with an `earlier` completed edit: this edit adopts the
    /// earlier pre-edit state, so a single undo step spans the whole
    /// sequence of structural changes.
    pub fn absorb(&mut self, earlier: LayerStateEdit) -> Result<(), EditError> {
        if self.state != CaptureState::Completed || earlier.state != CaptureState::Completed {
            return Err(EditError::NotCaptured);
        }
        self.before = earlier.before;
        Ok(())
    }
}

impl UndoableEdit for LayerStateEdit {
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
        map.layers.remove_all();
        map.layers.set_layers(self.before.clone());
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
        map.layers.remove_all();
        map.layers.set_layers(self.after.clone());
        self.undone = false;
        Ok(())
    }
}
