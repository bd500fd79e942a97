//! Clipboard data types for copy/paste operations.

use std::collections::BTreeMap;

use crate::map::{Layer, LayerMask};

/// Offset of a copied cell from the copy region's upper-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TileOffset {
    pub dx: u32,
    pub dy: u32,
}

impl TileOffset {
    pub const ZERO: TileOffset = TileOffset { dx: 0, dy: 0 };

    pub fn new(dx: u32, dy: u32) -> Self {
        Self { dx, dy }
    }
}

/// Copied values of one layer, keyed by offset. Values use the
/// [`Layer::read`] encoding (passability as 0/1).
pub type Selection = BTreeMap<TileOffset, u16>;

/// Copied tile, pass and object selections plus which of them paste uses
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Clipboard {
    pub tiles: Selection,
    pub passes: Selection,
    pub objects: Selection,
    /// Selections populated by the most recent copy
    pub active: LayerMask,
}

impl Clipboard {
    /// One-cell selection, as picked from a palette.
    pub fn single(layer: Layer, value: u16) -> Self {
        let mut clipboard = Clipboard::default();
        clipboard
            .selection_mut(layer)
            .insert(TileOffset::ZERO, value);
        clipboard.active = layer.mask();
        clipboard
    }

    pub fn is_empty(&self) -> bool {
        self.active
            .layers()
            .all(|layer| self.selection(layer).is_empty())
    }

    pub fn clear(&mut self) {
        self.tiles.clear();
        self.passes.clear();
        self.objects.clear();
        self.active = LayerMask::empty();
    }

    pub fn selection(&self, layer: Layer) -> &Selection {
        match layer {
            Layer::Tile => &self.tiles,
            Layer::Pass => &self.passes,
            Layer::Object => &self.objects,
        }
    }

    pub fn selection_mut(&mut self, layer: Layer) -> &mut Selection {
        match layer {
            Layer::Tile => &mut self.tiles,
            Layer::Pass => &mut self.passes,
            Layer::Object => &mut self.objects,
        }
    }

    /// Visual id when the active tile selection is exactly one cell.
    ///
    /// Flood fill only runs with a single copied tile.
    pub fn single_tile_value(&self) -> Option<u16> {
        if !self.active.contains(LayerMask::TILE) || self.tiles.len() != 1 {
            return None;
        }
        self.tiles.get(&TileOffset::ZERO).copied()
    }
}
