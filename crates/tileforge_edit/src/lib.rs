//! Brush painting and undo/redo for tileforge maps
//!
//! This crate is the editing engine on top of `tileforge_core`:
//! - `Brush` - the start/do/end stroke protocol, with `StampBrush` and
//!   `ShapeBrush` as the concrete tools
//! - `LayerEdit` / `LayerStateEdit` - snapshot-based reversible edits at
//!   single-layer and whole-stack granularity
//! - `EditHistory` - the undo/redo stack container
//!
//! A typical stroke brackets its mutations with a [`LayerEdit`]:
//!
//! ```rust,ignore
//! let mut edit = LayerEdit::new("Paint");
//! edit.start(map.layers.layer_at(0).unwrap())?;
//! brush.start_paint(&map, x, y, 0)?;
//! brush.do_paint(&mut map, x, y)?;
//! brush.end_paint();
//! edit.end(map.layers.layer_at(0).unwrap())?;
//! history.push(Box::new(edit));
//! ```

mod brush;
mod error;
mod history;
mod layer_edit;
mod shape;
mod stamp;
mod state_edit;

pub use brush::{Brush, BrushState, PreviewCanvas};
pub use error::EditError;
pub use history::{EditHistory, UndoableEdit};
pub use layer_edit::{CaptureState, LayerEdit};
pub use shape::ShapeBrush;
pub use stamp::StampBrush;
pub use state_edit::LayerStateEdit;
