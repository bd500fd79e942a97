//! Pasting clipboard selections onto the map.

use tracing::debug;

use crate::editor::history::CommandHistory;
use crate::editor::tools::paste_value;
use crate::map::{Map, TilePos};

use super::types::Clipboard;

/// Paste every active selection with its offsets relative to `origin`.
///
/// Layers go in paste order (tiles, passability, objects). Targets past the
/// map's right or bottom edge are skipped. Returns the number of cell edits
/// recorded.
pub fn paste_clipboard(
    map: &mut Map,
    history: &mut CommandHistory,
    clipboard: &Clipboard,
    origin: TilePos,
) -> usize {
    if !map.is_editable() || clipboard.is_empty() {
        return 0;
    }

    let mut changed = 0;
    for layer in clipboard.active.layers() {
        for (offset, value) in clipboard.selection(layer) {
            let Some(pos) = origin.offset(offset.dx, offset.dy) else {
                continue;
            };
            if !map.contains(pos) {
                continue;
            }
            if paste_value(map, history, layer, pos, *value) {
                changed += 1;
            }
        }
    }

    debug!(x = origin.x, y = origin.y, changed, "Pasted clipboard");
    changed
}
