//! Selected-cell marking on top of the layer grid

use serde::{Deserialize, Serialize};

use crate::{GridRect, TileId, TileLayer};

/// Sentinel id marking a selected cell. Reserved; never a tileset tile.
pub const SELECTION_TILE: TileId = TileId(u32::MAX);

/// A layer whose non-empty cells mean "selected".
///
/// Not semantically different from any other [`TileLayer`]; it only carries
/// an extra highlight color for the view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionLayer {
    pub layer: TileLayer,
    /// Highlight color in "#RRGGBB" form
    pub color: String,
}

impl SelectionLayer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            layer: TileLayer::new("selection", width, height),
            color: "#3C64C8".to_string(),
        }
    }

    pub fn select(&mut self, x: i32, y: i32) {
        self.layer.set_tile(x, y, Some(SELECTION_TILE));
    }

    pub fn deselect(&mut self, x: i32, y: i32) {
        self.layer.set_tile(x, y, None);
    }

    pub fn is_selected(&self, x: i32, y: i32) -> bool {
        self.layer.tile_at(x, y).is_some()
    }

    pub fn select_region(&mut self, rect: GridRect) {
        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                self.select(x, y);
            }
        }
    }

    pub fn deselect_region(&mut self, rect: GridRect) {
        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                self.deselect(x, y);
            }
        }
    }

    /// Flip the selected state of every cell
    pub fn invert(&mut self) {
        for y in 0..self.layer.height() as i32 {
            for x in 0..self.layer.width() as i32 {
                if self.is_selected(x, y) {
                    self.deselect(x, y);
                } else {
                    self.select(x, y);
                }
            }
        }
    }

    pub fn clear(&mut self) {
        self.layer.clear();
    }

    pub fn selected_count(&self) -> usize {
        let mut count = 0;
        for y in 0..self.layer.height() as i32 {
            for x in 0..self.layer.width() as i32 {
                if self.is_selected(x, y) {
                    count += 1;
                }
            }
        }
        count
    }

    /// Tight bounding rectangle of selected cells, or `None` when nothing is
    /// selected.
    pub fn selected_bounds(&self) -> Option<GridRect> {
        let mut min_x = i32::MAX;
        let mut min_y = i32::MAX;
        let mut max_x = i32::MIN;
        let mut max_y = i32::MIN;

        for y in 0..self.layer.height() as i32 {
            for x in 0..self.layer.width() as i32 {
                if self.is_selected(x, y) {
                    min_x = min_x.min(x);
                    min_y = min_y.min(y);
                    max_x = max_x.max(x);
                    max_y = max_y.max(y);
                }
            }
        }

        if min_x > max_x {
            None
        } else {
            Some(GridRect::from_bounds(min_x, min_y, max_x, max_y))
        }
    }
}
