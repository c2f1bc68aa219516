//! Error taxonomy for the editing engine

use thiserror::Error;
use uuid::Uuid;

/// Errors surfaced by brushes and reversible edits.
///
/// Usage-sequence errors (calls out of protocol order) and lookup failures
/// (stale layer ids) are distinct variants so callers can tell a programming
/// error from an edit that can no longer apply.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditError {
    #[error("a paint stroke is already in progress")]
    PaintInProgress,
    #[error("no paint stroke in progress")]
    NotPainting,
    #[error("edit has not captured a complete before/after state")]
    NotCaptured,
    #[error("edit state was already captured")]
    AlreadyCaptured,
    #[error("layer {0} not found on the target map")]
    LayerNotFound(Uuid),
    #[error("no layer at index {0}")]
    LayerIndexOutOfRange(usize),
    #[error("nothing to undo")]
    NothingToUndo,
    #[error("nothing to redo")]
    NothingToRedo,
}
