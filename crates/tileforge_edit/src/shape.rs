//! Single-tile shape brushes

use tileforge_core::{GridRect, TileId, TileMap};

use crate::brush::bresenham_line;
use crate::{Brush, BrushState, EditError, PreviewCanvas};

/// Paints one tile through a boolean footprint mask.
///
/// The same tile goes onto every layer in the affected-layer window.
/// Painting `None` clears cells instead, which makes the eraser a shape
/// brush with no tile.
pub struct ShapeBrush {
    state: BrushState,
    width: u32,
    height: u32,
    mask: Vec<bool>,
    tile: Option<TileId>,
}

impl ShapeBrush {
    /// Solid rectangular footprint
    pub fn rectangle(width: u32, height: u32, tile: Option<TileId>) -> Self {
        Self {
            state: BrushState::new(),
            width,
            height,
            mask: vec![true; (width * height) as usize],
            tile,
        }
    }

    /// Elliptical footprint inscribed in `width x height`
    pub fn ellipse(width: u32, height: u32, tile: Option<TileId>) -> Self {
        let mut mask = vec![false; (width * height) as usize];
        for y in 0..height {
            for x in 0..width {
                // Cell centers against the inscribed ellipse
                let dx = (x as f32 + 0.5) / width as f32 * 2.0 - 1.0;
                let dy = (y as f32 + 0.5) / height as f32 * 2.0 - 1.0;
                if dx * dx + dy * dy <= 1.0 {
                    mask[(y * width + x) as usize] = true;
                }
            }
        }
        Self {
            state: BrushState::new(),
            width,
            height,
            mask,
            tile,
        }
    }

    /// The tile this brush paints; `None` erases
    pub fn tile(&self) -> Option<TileId> {
        self.tile
    }

    pub fn set_tile(&mut self, tile: Option<TileId>) {
        self.tile = tile;
    }

    fn covers(&self, cx: i32, cy: i32) -> bool {
        if cx < 0 || cy < 0 || cx >= self.width as i32 || cy >= self.height as i32 {
            return false;
        }
        self.mask[(cy as u32 * self.width + cx as u32) as usize]
    }

    fn anchor(&self, x: i32, y: i32) -> (i32, i32) {
        (x - self.width as i32 / 2, y - self.height as i32 / 2)
    }

    fn apply(&self, map: &mut TileMap, x: i32, y: i32) -> GridRect {
        let (ax, ay) = self.anchor(x, y);
        let mut touched = GridRect::EMPTY;

        for i in 0..self.state.affected_layers() {
            let Some(target) = map.layers.layer_at_mut(self.state.start_layer() + i) else {
                break;
            };
            for cy in 0..self.height as i32 {
                for cx in 0..self.width as i32 {
                    if !self.covers(cx, cy) {
                        continue;
                    }
                    let (tx, ty) = (ax + cx, ay + cy);
                    if target.in_bounds(tx, ty) {
                        target.set_tile(tx, ty, self.tile);
                        touched = touched.union(&GridRect::cell(tx, ty));
                    }
                }
            }
        }
        touched
    }
}

impl Brush for ShapeBrush {
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
        GridRect::new(
            -(self.width as i32) / 2,
            -(self.height as i32) / 2,
            self.width,
            self.height,
        )
    }

    fn affected_layers(&self) -> usize {
        self.state.affected_layers()
    }

    fn set_affected_layers(&mut self, n: usize) {
        self.state.set_affected_layers(n);
    }

    fn draw_preview(&self, x: i32, y: i32, canvas: &mut dyn PreviewCanvas) {
        let Some(tile) = self.tile else {
            return;
        };
        let (ax, ay) = self.anchor(x, y);
        for cy in 0..self.height as i32 {
            for cx in 0..self.width as i32 {
                if self.covers(cx, cy) {
                    canvas.draw_tile(ax + cx, ay + cy, tile);
                }
            }
        }
    }
}
