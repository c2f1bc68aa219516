//! The brush painting protocol

use tileforge_core::{GridRect, TileId, TileMap};

use crate::EditError;

/// Receiver for brush preview drawing.
///
/// Implemented by the view layer. Preview drawing goes through this trait
/// only, with no map in reach, so the preview path cannot mutate map state.
pub trait PreviewCanvas {
    /// Highlight `tile` at cell `(x, y)`.
    fn draw_tile(&mut self, x: i32, y: i32, tile: TileId);
}

/// Shared stroke state composed into every concrete brush.
///
/// Tracks the Idle -> Painting -> Idle stroke machine: the layer index the
/// stroke began on, the affected-layer window and the last cursor position.
#[derive(Debug, Clone)]
pub struct BrushState {
    affected_layers: usize,
    painting: bool,
    start_layer: usize,
    last_pos: Option<(i32, i32)>,
}

impl Default for BrushState {
    fn default() -> Self {
        Self {
            affected_layers: 1,
            painting: false,
            start_layer: 0,
            last_pos: None,
        }
    }
}

impl BrushState {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many stacked layers one paint step touches
    pub fn affected_layers(&self) -> usize {
        self.affected_layers
    }

    pub fn set_affected_layers(&mut self, n: usize) {
        self.affected_layers = n.max(1);
    }

    pub fn is_painting(&self) -> bool {
        self.painting
    }

    /// The layer index the current stroke began on
    pub fn start_layer(&self) -> usize {
        self.start_layer
    }

    pub fn last_position(&self) -> Option<(i32, i32)> {
        self.last_pos
    }

    /// Idle -> Painting. Errors if a stroke is already active.
    pub fn begin(&mut self, x: i32, y: i32, layer: usize) -> Result<(), EditError> {
        if self.painting {
            return Err(EditError::PaintInProgress);
        }
        self.painting = true;
        self.start_layer = layer;
        self.last_pos = Some((x, y));
        Ok(())
    }

    /// One stroke step: errors when idle, otherwise records the cursor and
    /// returns the previous position.
    pub fn advance(&mut self, x: i32, y: i32) -> Result<(i32, i32), EditError> {
        if !self.painting {
            return Err(EditError::NotPainting);
        }
        let prev = self.last_pos.replace((x, y)).unwrap_or((x, y));
        Ok(prev)
    }

    /// Painting -> Idle unconditionally. Safe to call when already idle.
    pub fn finish(&mut self) {
        self.painting = false;
        self.last_pos = None;
    }
}

/// A tool that stamps a tile pattern onto a target map across one
/// continuous stroke.
///
/// The protocol is `start_paint`, any number of `do_paint` steps, then
/// `end_paint`. The map is passed into each call; brushes keep only stroke
/// state between calls.
pub trait Brush {
    /// Begin a stroke at cell `(x, y)` on `layer`.
    ///
    /// Errors with [`EditError::PaintInProgress`] when a stroke is already
    /// active and [`EditError::LayerIndexOutOfRange`] when `layer` does not
    /// exist on the map.
    fn start_paint(&mut self, map: &TileMap, x: i32, y: i32, layer: usize) -> Result<(), EditError>;

    /// Apply one stroke step anchored at `(x, y)`.
    ///
    /// Returns the bounding rectangle of cells actually touched (empty when
    /// the whole step fell outside the map). Errors with
    /// [`EditError::NotPainting`] outside a stroke. Repainting a cell with
    /// the same tile is harmless, so overlapping steps within one stroke
    /// are safe.
    fn do_paint(&mut self, map: &mut TileMap, x: i32, y: i32) -> Result<GridRect, EditError>;

    /// Apply stroke steps along the line from the previous cursor position
    /// to `(x, y)`, keeping a dragged stroke gap-free.
    fn do_paint_to(&mut self, map: &mut TileMap, x: i32, y: i32) -> Result<GridRect, EditError> {
        self.do_paint(map, x, y)
    }

    /// End the stroke. Always safe; a no-op when no stroke is active.
    fn end_paint(&mut self);

    /// Stamp footprint relative to the anchor cell, for preview layout.
    fn footprint(&self) -> GridRect;

    fn affected_layers(&self) -> usize;

    fn set_affected_layers(&mut self, n: usize);

    /// Draw the stamp footprint onto `canvas`, anchored at `(x, y)`.
    /// Rendering only; never touches a map.
    fn draw_preview(&self, x: i32, y: i32, canvas: &mut dyn PreviewCanvas);
}

/// All cell coordinates along the line from `(x0, y0)` to `(x1, y1)`,
/// endpoints included.
pub(crate) fn bresenham_line(x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<(i32, i32)> {
    let mut points = Vec::new();

    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    let (mut x, mut y) = (x0, y0);
    loop {
        points.push((x, y));
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_twice_fails() {
        let mut state = BrushState::new();
        assert!(state.begin(0, 0, 0).is_ok());
        assert_eq!(state.begin(1, 1, 0), Err(EditError::PaintInProgress));
    }

    #[test]
    fn test_advance_requires_begin() {
        let mut state = BrushState::new();
        assert_eq!(state.advance(1, 1), Err(EditError::NotPainting));

        state.begin(0, 0, 2).expect("idle state accepts begin");
        assert_eq!(state.advance(3, 4), Ok((0, 0)));
        assert_eq!(state.advance(5, 5), Ok((3, 4)));
        assert_eq!(state.start_layer(), 2);
    }

    #[test]
    fn test_finish_is_always_safe() {
        let mut state = BrushState::new();
        state.finish();
        state.finish();
        assert!(!state.is_painting());

        state.begin(0, 0, 0).expect("idle state accepts begin");
        state.finish();
        assert!(!state.is_painting());
        assert_eq!(state.last_position(), None);
    }

    #[test]
    fn test_affected_layers_floor() {
        let mut state = BrushState::new();
        assert_eq!(state.affected_layers(), 1);
        state.set_affected_layers(0);
        assert_eq!(state.affected_layers(), 1);
        state.set_affected_layers(3);
        assert_eq!(state.affected_layers(), 3);
    }

    #[test]
    fn test_bresenham_endpoints_and_connectivity() {
        let points = bresenham_line(0, 0, 5, 3);
        assert_eq!(points.first(), Some(&(0, 0)));
        assert_eq!(points.last(), Some(&(5, 3)));
        for pair in points.windows(2) {
            let (dx, dy) = (pair[1].0 - pair[0].0, pair[1].1 - pair[0].1);
            assert!(dx.abs() <= 1 && dy.abs() <= 1);
        }

        assert_eq!(bresenham_line(2, 2, 2, 2), vec![(2, 2)]);
    }
}
