//! Core data structures for tileforge
//!
//! This crate provides the fundamental types for representing layered
//! tile maps:
//! - `TileMap` - a complete map bundling a layer stack and its tilesets
//! - `TileLayer` - a single fixed-size grid of optional tile references
//! - `LayerStack` - the ordered z-stack of layers, shared by maps and brushes
//! - `SelectionLayer` - a layer marking selected cells
//! - `TileSet` / `Tile` - tile storage with per-tile properties
//! - `TileCutter` - slices a tile-sheet image into tile-sized sub-images

mod cutter;
mod layer;
mod map;
mod rect;
mod selection;
mod stack;
mod tile;

pub use cutter::TileCutter;
pub use layer::TileLayer;
pub use map::TileMap;
pub use rect::GridRect;
pub use selection::{SelectionLayer, SELECTION_TILE};
pub use stack::LayerStack;
pub use tile::{Tile, TileId, TileProperties, TileSet};
