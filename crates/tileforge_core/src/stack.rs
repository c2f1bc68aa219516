//! Ordered layer stack shared by maps and brush patterns

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::TileLayer;

/// An ordered stack of [`TileLayer`]s sharing one cell coordinate space.
///
/// Order is paint order: index 0 is the bottom layer. Layer ids are unique
/// within a stack at any instant; snapshots restored through
/// [`set_layers`](LayerStack::set_layers) carry their captured ids back in.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LayerStack {
    layers: Vec<TileLayer>,
}

impl LayerStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Append a layer on top of the stack
    pub fn push(&mut self, layer: TileLayer) {
        self.layers.push(layer);
    }

    /// Insert a layer at `index`, shifting higher layers up
    pub fn insert(&mut self, index: usize, layer: TileLayer) {
        let index = index.min(self.layers.len());
        self.layers.insert(index, layer);
    }

    pub fn layer_at(&self, index: usize) -> Option<&TileLayer> {
        self.layers.get(index)
    }

    pub fn layer_at_mut(&mut self, index: usize) -> Option<&mut TileLayer> {
        self.layers.get_mut(index)
    }

    /// Layer with the given stable id; O(n) scan.
    pub fn layer(&self, id: Uuid) -> Option<&TileLayer> {
        self.layers.iter().find(|l| l.id == id)
    }

    pub fn layer_mut(&mut self, id: Uuid) -> Option<&mut TileLayer> {
        self.layers.iter_mut().find(|l| l.id == id)
    }

    pub fn index_of(&self, id: Uuid) -> Option<usize> {
        self.layers.iter().position(|l| l.id == id)
    }

    /// Remove the layer at `index`
    pub fn remove_at(&mut self, index: usize) -> Option<TileLayer> {
        if index < self.layers.len() {
            Some(self.layers.remove(index))
        } else {
            None
        }
    }

    /// Empty the stack
    pub fn remove_all(&mut self) {
        self.layers.clear();
    }

    /// Atomic bulk replace: drop the current sequence and adopt `layers`
    /// wholesale. Together with [`remove_all`](LayerStack::remove_all) this
    /// is the restore primitive for whole-stack snapshots.
    pub fn set_layers(&mut self, layers: Vec<TileLayer>) {
        self.layers = layers;
    }

    /// Move a layer toward the bottom (index 0)
    pub fn move_down(&mut self, index: usize) -> bool {
        if index > 0 && index < self.layers.len() {
            self.layers.swap(index, index - 1);
            true
        } else {
            false
        }
    }

    /// Move a layer toward the top (higher index)
    pub fn move_up(&mut self, index: usize) -> bool {
        if index < self.layers.len().saturating_sub(1) {
            self.layers.swap(index, index + 1);
            true
        } else {
            false
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &TileLayer> {
        self.layers.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut TileLayer> {
        self.layers.iter_mut()
    }

    /// Deep snapshot of every layer in order.
    pub fn snapshot(&self) -> Vec<TileLayer> {
        self.layers.clone()
    }
}
