//! Reversible map edits recorded for undo/redo.

use crate::map::{Grid, Layer, Map, Tile, TilePos};

/// A reversible edit to a [`Map`].
///
/// Each variant stores the values on both sides of the edit, so applying or
/// reverting depends only on the map and the action itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MapAction {
    /// The grid changed size
    Resize {
        old_size: (u32, u32),
        new_size: (u32, u32),
        /// Grid as it was before the resize, so shrinking can be undone
        previous: Grid<Tile>,
    },
    /// A cell's visual id changed
    PasteTile { pos: TilePos, old: u16, new: u16 },
    /// A cell's passability changed
    PastePass { pos: TilePos, old: bool, new: bool },
    /// A cell's object id changed
    PasteObject { pos: TilePos, old: u16, new: u16 },
}

impl MapAction {
    /// Resize action for `map` going to `width` x `height`. Capture this
    /// before resizing the map.
    pub fn resize(map: &Map, width: u32, height: u32) -> Self {
        MapAction::Resize {
            old_size: map.size(),
            new_size: (width, height),
            previous: map.cells().clone(),
        }
    }

    /// Paste action for one layer, values in [`Layer::read`] encoding.
    pub fn paste(layer: Layer, pos: TilePos, old: u16, new: u16) -> Self {
        match layer {
            Layer::Tile => MapAction::PasteTile { pos, old, new },
            Layer::Pass => MapAction::PastePass {
                pos,
                old: old == 0,
                new: new == 0,
            },
            Layer::Object => MapAction::PasteObject { pos, old, new },
        }
    }

    /// Cell the action touches; `None` for whole-map actions.
    pub fn position(&self) -> Option<TilePos> {
        match self {
            MapAction::Resize { .. } => None,
            MapAction::PasteTile { pos, .. }
            | MapAction::PastePass { pos, .. }
            | MapAction::PasteObject { pos, .. } => Some(*pos),
        }
    }

    pub fn layer(&self) -> Option<Layer> {
        match self {
            MapAction::Resize { .. } => None,
            MapAction::PasteTile { .. } => Some(Layer::Tile),
            MapAction::PastePass { .. } => Some(Layer::Pass),
            MapAction::PasteObject { .. } => Some(Layer::Object),
        }
    }
}
