//! Copying a rectangle of the map into selections.

use tracing::debug;

use crate::map::{LayerMask, Map, TilePos};

use super::types::{Clipboard, TileOffset};

/// Copy the inclusive rectangle between corners `a` and `b` (any order)
/// into the selections named by `layers`.
///
/// The rectangle is clipped to the map; a region wholly outside it copies
/// nothing. Unset cells are read as the default tile. The returned
/// clipboard's active mask is `layers`.
pub fn copy_region(map: &Map, a: TilePos, b: TilePos, layers: LayerMask) -> Clipboard {
    let mut clipboard = Clipboard {
        active: layers,
        ..Default::default()
    };

    let (min_x, min_y) = (a.x.min(b.x), a.y.min(b.y));
    if min_x >= map.width() || min_y >= map.height() {
        debug!(x = min_x, y = min_y, "Copy region lies outside the map");
        return clipboard;
    }
    let max_x = a.x.max(b.x).min(map.width() - 1);
    let max_y = a.y.max(b.y).min(map.height() - 1);

    for x in min_x..=max_x {
        for y in min_y..=max_y {
            let tile = map.tile_or_default(TilePos::new(x, y));
            let offset = TileOffset::new(x - min_x, y - min_y);
            for layer in layers.layers() {
                clipboard
                    .selection_mut(layer)
                    .insert(offset, layer.read(tile));
            }
        }
    }

    debug!(
        width = max_x - min_x + 1,
        height = max_y - min_y + 1,
        ?layers,
        "Copied region"
    );
    clipboard
}
