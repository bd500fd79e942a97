//! Single-cell edit tools and the primitive every edit goes through.

use tracing::debug;

use crate::map::{Layer, Map, TilePos};

use super::history::{CommandHistory, MapAction};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorTool {
    /// Paste the active clipboard selections
    #[default]
    Paste,
    /// Flip passability of the clicked cell
    Pass,
    /// Flood fill around the clicked cell with the single copied tile
    Fill,
}

impl EditorTool {
    pub fn display_name(&self) -> &'static str {
        match self {
            EditorTool::Paste => "Paste (V)",
            EditorTool::Pass => "Passability (P)",
            EditorTool::Fill => "Fill (F)",
        }
    }

    pub fn all() -> &'static [EditorTool] {
        &[EditorTool::Paste, EditorTool::Pass, EditorTool::Fill]
    }
}

/// Write `value` into one layer of the cell at `pos` and record the edit.
///
/// Nothing is written or recorded when the map is locked, `pos` is outside
/// the map, or the cell already holds `value`. Returns whether the cell changed.
pub fn paste_value(
    map: &mut Map,
    history: &mut CommandHistory,
    layer: Layer,
    pos: TilePos,
    value: u16,
) -> bool {
    if !map.is_editable() || !map.contains(pos) {
        return false;
    }

    let tile = map.tile_or_default(pos);
    let updated = layer.write(tile, value);
    if updated == tile {
        return false;
    }
    if !map.set(pos, updated) {
        return false;
    }

    history.record(MapAction::paste(
        layer,
        pos,
        layer.read(tile),
        layer.read(updated),
    ));
    true
}

/// Flip passability at `pos`; an unset cell becomes an impassable default tile.
pub fn toggle_pass(map: &mut Map, history: &mut CommandHistory, pos: TilePos) -> bool {
    let passable = map.tile_or_default(pos).passable;
    paste_value(map, history, Layer::Pass, pos, u16::from(passable))
}

/// Replace every cell whose visual id is `find` with `replace`. Returns the
/// number of cells changed.
pub fn replace_visual(map: &mut Map, history: &mut CommandHistory, find: u16, replace: u16) -> usize {
    if find == replace {
        return 0;
    }
    let targets: Vec<TilePos> = map
        .tiles()
        .filter(|(_, tile)| tile.visual_id == find)
        .map(|(pos, _)| pos)
        .collect();

    let changed = targets
        .into_iter()
        .filter(|pos| paste_value(map, history, Layer::Tile, *pos, replace))
        .count();
    debug!(find, replace, changed, "Replaced visual id");
    changed
}

/// Resize the map and record the change. No-op on a locked map or when the
/// size does not change.
pub fn resize_map(map: &mut Map, history: &mut CommandHistory, width: u32, height: u32) -> bool {
    if !map.is_editable() || map.size() == (width, height) {
        return false;
    }
    let action = MapAction::resize(map, width, height);
    if !map.resize(width, height) {
        return false;
    }
    history.record(action);
    true
}
