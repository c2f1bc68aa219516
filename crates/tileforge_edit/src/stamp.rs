//! Multi-layer stamp brush

use tileforge_core::{GridRect, LayerStack, TileLayer, TileMap};

use crate::brush::bresenham_line;
use crate::{Brush, BrushState, EditError, PreviewCanvas};

/// Stamps a multi-layer tile pattern onto the target map, anchored centered
/// on the cursor cell.
///
/// Empty pattern cells are transparent: they never clear target cells, so a
/// stamp can carry an irregular outline. One paint step writes the pattern
/// onto `affected_layers` consecutive target layers starting at the stroke's
/// start layer; window slot `i` uses pattern layer `min(i, depth - 1)`, so a
/// single-layer pattern replicates across the window while a deep stamp
/// pairs layers one to one.
pub struct StampBrush {
    state: BrushState,
    pattern: LayerStack,
}

impl StampBrush {
    /// Brush from an explicit pattern. The affected-layer window defaults to
    /// the pattern depth.
    pub fn new(pattern: LayerStack) -> Self {
        let mut state = BrushState::new();
        state.set_affected_layers(pattern.len().max(1));
        Self { state, pattern }
    }

    /// Cut a pattern from `rect` of the map, taking up to `depth` layers
    /// starting at `layer`. Cell coordinates become relative to the
    /// rectangle origin.
    pub fn from_map_region(
        map: &TileMap,
        layer: usize,
        depth: usize,
        rect: GridRect,
    ) -> Result<Self, EditError> {
        if map.layers.layer_at(layer).is_none() {
            return Err(EditError::LayerIndexOutOfRange(layer));
        }

        let mut pattern = LayerStack::new();
        for i in 0..depth.max(1) {
            let Some(source) = map.layers.layer_at(layer + i) else {
                break;
            };
            let mut cut = TileLayer::new(source.name.clone(), rect.width, rect.height);
            cut.tileset = source.tileset;
            for ((x, y), tile) in source.cells_in_region(rect) {
                cut.set_tile(x - rect.x, y - rect.y, tile);
            }
            pattern.push(cut);
        }
        Ok(Self::new(pattern))
    }

    pub fn pattern(&self) -> &LayerStack {
        &self.pattern
    }

    /// Pattern extent: the largest layer dimensions in the stack.
    fn pattern_size(&self) -> (u32, u32) {
        let mut size = (0, 0);
        for layer in self.pattern.iter() {
            size.0 = layer.width().max(size.0);
            size.1 = layer.height().max(size.1);
        }
        size
    }

    /// Top-left cell of the stamp when anchored centered on `(x, y)`.
    fn anchor(&self, x: i32, y: i32) -> (i32, i32) {
        let (w, h) = self.pattern_size();
        (x - w as i32 / 2, y - h as i32 / 2)
    }

    fn apply(&self, map: &mut TileMap, x: i32, y: i32) -> GridRect {
        let (ax, ay) = self.anchor(x, y);
        let depth = self.pattern.len();
        if depth == 0 {
            return GridRect::EMPTY;
        }

        let mut touched = GridRect::EMPTY;
        for i in 0..self.state.affected_layers() {
            let Some(source) = self.pattern.layer_at(i.min(depth - 1)) else {
                break;
            };
            let Some(target) = map.layers.layer_at_mut(self.state.start_layer() + i) else {
                // Window reaches past the top of the stack; lower layers
                // were still painted.
                break;
            };
            for cy in 0..source.height() as i32 {
                for cx in 0..source.width() as i32 {
                    let Some(tile) = source.tile_at(cx, cy) else {
                        continue;
                    };
                    let (tx, ty) = (ax + cx, ay + cy);
                    if target.in_bounds(tx, ty) {
                        target.set_tile(tx, ty, Some(tile));
                        touched = touched.union(&GridRect::cell(tx, ty));
                    }
                }
            }
        }
        touched
    }
}

impl Brush for StampBrush {
    fn start_paint(&mut self, map: &TileMap, x: i32, y: i32, layer: usize) -> Result<(), EditError> {
        if map.layers.layer_at(layer).is_none() {
            return Err(EditError::LayerIndexOutOfRange(layer));
        }
        self.state.begin(x, y, layer)
    }

    fn do_paint(&mut self, map: &mut TileMap, x: i32, y: i32) -> Result<GridRect, EditError> {
        self.state.advance(x, y)?;
        Ok(self.apply(map, x, y))
    }

    fn do_paint_to(&mut self, map: &mut TileMap, x: i32, y: i32) -> Result<GridRect, EditError> {
        let (px, py) = self.state.advance(x, y)?;
        let mut touched = GridRect::EMPTY;
        for (lx, ly) in bresenham_line(px, py, x, y) {
            touched = touched.union(&self.apply(map, lx, ly));
        }
        Ok(touched)
    }

    fn end_paint(&mut self) {
        self.state.finish();
    }

    fn footprint(&self) -> GridRect {
        let (w, h) = self.pattern_size();
        GridRect::new(-(w as i32) / 2, -(h as i32) / 2, w, h)
    }

    fn affected_layers(&self) -> usize {
        self.state.affected_layers()
    }

    fn set_affected_layers(&mut self, n: usize) {
        self.state.set_affected_layers(n);
    }

    fn draw_preview(&self, x: i32, y: i32, canvas: &mut dyn PreviewCanvas) {
        let (ax, ay) = self.anchor(x, y);
        for layer in self.pattern.iter() {
            for cy in 0..layer.height() as i32 {
                for cx in 0..layer.width() as i32 {
                    if let Some(tile) = layer.tile_at(cx, cy) {
                        canvas.draw_tile(ax + cx, ay + cy, tile);
                    }
                }
            }
        }
    }
}
