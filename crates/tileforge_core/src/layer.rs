//! A single fixed-size grid of tile references

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{GridRect, TileId};

/// One layer of a map or brush pattern: a `width x height` grid of optional
/// tile references, positioned by a cell-space offset.
///
/// Dimensions are fixed at construction. The id is allocated once and
/// survives cloning, so undo snapshots re-bind to the live layer by id;
/// v4 ids are never reused, so a lookup against a deleted-and-recreated
/// layer fails instead of silently binding to an unrelated one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileLayer {
    pub id: Uuid,
    pub name: String,
    pub visible: bool,
    width: u32,
    height: u32,
    #[serde(default)]
    offset_x: i32,
    #[serde(default)]
    offset_y: i32,
    /// The tileset this layer draws from, if bound to one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tileset: Option<Uuid>,
    cells: Vec<Option<TileId>>,
}

impl TileLayer {
    /// Create a new empty layer
    pub fn new(name: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            visible: true,
            width,
            height,
            offset_x: 0,
            offset_y: 0,
            tileset: None,
            cells: vec![None; (width * height) as usize],
        }
    }

    /// Bind the layer to a tileset
    pub fn with_tileset(mut self, tileset: Uuid) -> Self {
        self.tileset = Some(tileset);
        self
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn offset(&self) -> (i32, i32) {
        (self.offset_x, self.offset_y)
    }

    /// Reposition the layer without touching its cells.
    pub fn set_offset(&mut self, x: i32, y: i32) {
        self.offset_x = x;
        self.offset_y = y;
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width as i32 && y < self.height as i32
    }

    /// Tile reference at `(x, y)`, or `None` when the cell is empty or out
    /// of bounds.
    pub fn tile_at(&self, x: i32, y: i32) -> Option<TileId> {
        if !self.in_bounds(x, y) {
            return None;
        }
        let index = (y as u32 * self.width + x as u32) as usize;
        self.cells.get(index).copied().flatten()
    }

    /// Place `tile` at `(x, y)`. Out-of-bounds writes are ignored.
    pub fn set_tile(&mut self, x: i32, y: i32, tile: Option<TileId>) {
        if !self.in_bounds(x, y) {
            return;
        }
        let index = (y as u32 * self.width + x as u32) as usize;
        if index < self.cells.len() {
            self.cells[index] = tile;
        }
    }

    /// Set every cell to `tile`
    pub fn fill(&mut self, tile: Option<TileId>) {
        self.cells.fill(tile);
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c.is_none())
    }

    /// The layer's covered cell rectangle, offset included.
    pub fn bounds(&self) -> GridRect {
        GridRect::new(self.offset_x, self.offset_y, self.width, self.height)
    }

    /// Overwrite this layer's cells and metadata from `other`, keeping
    /// `self.id`.
    ///
    /// This is the in-place restore primitive undo relies on: the live layer
    /// keeps its identity while its content, offset, name, visibility and
    /// tileset binding are rolled back wholesale.
    pub fn copy_content_from(&mut self, other: &TileLayer) {
        self.name = other.name.clone();
        self.visible = other.visible;
        self.width = other.width;
        self.height = other.height;
        self.offset_x = other.offset_x;
        self.offset_y = other.offset_y;
        self.tileset = other.tileset;
        self.cells = other.cells.clone();
    }

    /// Snapshot the cells of `rect` clipped to this layer, as
    /// `((x, y), tile)` pairs in row-major order.
    pub fn cells_in_region(&self, rect: GridRect) -> Vec<((i32, i32), Option<TileId>)> {
        let clipped = rect.intersect(&GridRect::new(0, 0, self.width, self.height));
        let mut cells = Vec::new();
        for y in clipped.y..clipped.bottom() {
            for x in clipped.x..clipped.right() {
                cells.push(((x, y), self.tile_at(x, y)));
            }
        }
        cells
    }
}
