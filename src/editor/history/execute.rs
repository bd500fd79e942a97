//! Applying and reverting map actions.

use tracing::trace;

use crate::map::{Map, Tile, TilePos};

use super::commands::MapAction;

impl MapAction {
    /// Put the post-edit state back on the map (redo).
    pub fn apply(&self, map: &mut Map) -> bool {
        trace!(action = ?self.position(), "Applying map action");
        match self {
            MapAction::Resize {
                new_size: (width, height),
                ..
            } => map.resize(*width, *height),
            MapAction::PasteTile { pos, new, .. } => write_cell(map, *pos, |t| t.with_visual(*new)),
            MapAction::PastePass { pos, new, .. } => {
                write_cell(map, *pos, |t| t.with_passable(*new))
            }
            MapAction::PasteObject { pos, new, .. } => {
                write_cell(map, *pos, |t| t.with_object(*new))
            }
        }
    }

    /// Put the pre-edit state back on the map (undo).
    pub fn revert(&self, map: &mut Map) -> bool {
        trace!(action = ?self.position(), "Reverting map action");
        match self {
            MapAction::Resize { previous, .. } => map.restore_cells(previous.clone()),
            MapAction::PasteTile { pos, old, .. } => write_cell(map, *pos, |t| t.with_visual(*old)),
            MapAction::PastePass { pos, old, .. } => {
                write_cell(map, *pos, |t| t.with_passable(*old))
            }
            MapAction::PasteObject { pos, old, .. } => {
                write_cell(map, *pos, |t| t.with_object(*old))
            }
        }
    }
}

/// Rewrite one attribute of a cell, materializing unset cells as the default tile.
fn write_cell(map: &mut Map, pos: TilePos, edit: impl FnOnce(Tile) -> Tile) -> bool {
    let tile = map.tile_or_default(pos);
    map.set(pos, edit(tile))
}
