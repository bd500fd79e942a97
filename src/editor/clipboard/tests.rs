//! Unit tests for clipboard operations.

use crate::editor::clipboard::{copy_region, paste_clipboard, Clipboard, TileOffset};
use crate::editor::history::{CommandHistory, MapAction};
use crate::map::{Layer, LayerMask, Map, Tile, TilePos};

fn source_map() -> Map {
    let mut map = Map::new(4, 4);
    map.set(TilePos::new(1, 1), Tile::new(10, true, 0));
    map.set(TilePos::new(2, 1), Tile::new(11, false, 5));
    map.set(TilePos::new(1, 2), Tile::new(12, true, 0));
    map
}

// Clipboard value tests
#[test]
fn test_clipboard_default_is_empty() {
    let clipboard = Clipboard::default();
    assert!(clipboard.is_empty());
    assert_eq!(clipboard.single_tile_value(), None);
}

#[test]
fn test_single_selection() {
    let clipboard = Clipboard::single(Layer::Object, 42);
    assert!(!clipboard.is_empty());
    assert_eq!(clipboard.active, LayerMask::OBJECT);
    assert_eq!(clipboard.objects.get(&TileOffset::ZERO), Some(&42));
    assert_eq!(clipboard.single_tile_value(), None);

    assert_eq!(Clipboard::single(Layer::Tile, 7).single_tile_value(), Some(7));
}

#[test]
fn test_clear_resets_mask() {
    let mut clipboard = Clipboard::single(Layer::Tile, 1);
    clipboard.clear();
    assert!(clipboard.is_empty());
    assert!(clipboard.active.is_empty());
}

// Copy tests
#[test]
fn test_copy_region_is_inclusive_and_order_free() {
    let map = source_map();
    let clipboard = copy_region(&map, TilePos::new(2, 2), TilePos::new(1, 1), LayerMask::all());

    assert_eq!(clipboard.active, LayerMask::all());
    assert_eq!(clipboard.tiles.len(), 4);
    assert_eq!(clipboard.tiles[&TileOffset::new(0, 0)], 10);
    assert_eq!(clipboard.tiles[&TileOffset::new(1, 0)], 11);
    assert_eq!(clipboard.tiles[&TileOffset::new(0, 1)], 12);
    assert_eq!(clipboard.tiles[&TileOffset::new(1, 1)], 0);
    assert_eq!(clipboard.passes[&TileOffset::new(1, 0)], 1);
    assert_eq!(clipboard.objects[&TileOffset::new(1, 0)], 5);
}

#[test]
fn test_copy_only_requested_layers() {
    let map = source_map();
    let clipboard = copy_region(&map, TilePos::new(1, 1), TilePos::new(2, 1), LayerMask::PASS);

    assert!(clipboard.tiles.is_empty());
    assert!(clipboard.objects.is_empty());
    assert_eq!(clipboard.passes.len(), 2);
    assert_eq!(clipboard.passes[&TileOffset::new(0, 0)], 0);
}

#[test]
fn test_copy_clips_far_corner_to_map() {
    let map = Map::new(2, 2);
    let clipboard = copy_region(
        &map,
        TilePos::new(0, 0),
        TilePos::new(100_000, 100_000),
        LayerMask::all(),
    );
    assert_eq!(clipboard.tiles.len(), 4);
    assert_eq!(clipboard.passes.len(), 4);
    assert_eq!(clipboard.objects.len(), 4);
    assert!(clipboard.tiles.keys().all(|offset| offset.dx < 2 && offset.dy < 2));
}

#[test]
fn test_copy_partly_outside_keeps_inside_cells() {
    let map = source_map();
    let clipboard = copy_region(&map, TilePos::new(3, 3), TilePos::new(4, 3), LayerMask::TILE);
    assert_eq!(clipboard.tiles.len(), 1);
    assert_eq!(clipboard.tiles[&TileOffset::ZERO], 0);
}

#[test]
fn test_copy_wholly_outside_is_empty() {
    let map = source_map();
    let clipboard = copy_region(&map, TilePos::new(4, 0), TilePos::new(9, 9), LayerMask::all());
    assert!(clipboard.is_empty());
    assert!(clipboard.tiles.is_empty());

    let empty = Map::new(0, 0);
    let clipboard = copy_region(&empty, TilePos::new(0, 0), TilePos::new(0, 0), LayerMask::TILE);
    assert!(clipboard.is_empty());
}

#[test]
fn test_pasting_clipped_copy_leaves_neighbors_alone() {
    let source = source_map();
    let clipboard = copy_region(&source, TilePos::new(2, 1), TilePos::new(50, 1), LayerMask::TILE);
    assert_eq!(clipboard.tiles.len(), 2);

    let mut target = Map::new(4, 1);
    target.set(TilePos::new(3, 0), Tile::new(99, true, 0));
    let mut history = CommandHistory::default();
    paste_clipboard(&mut target, &mut history, &clipboard, TilePos::new(0, 0));

    assert_eq!(target.get(TilePos::new(0, 0)).map(|t| t.visual_id), Some(11));
    assert_eq!(target.get(TilePos::new(3, 0)).map(|t| t.visual_id), Some(99));
}

// Paste tests
#[test]
fn test_paste_region_at_origin() {
    let source = source_map();
    let clipboard = copy_region(&source, TilePos::new(1, 1), TilePos::new(2, 2), LayerMask::all());

    let mut target = Map::new(4, 4);
    let mut history = CommandHistory::default();
    let changed = paste_clipboard(&mut target, &mut history, &clipboard, TilePos::new(2, 0));

    assert_eq!(target.get(TilePos::new(2, 0)), Some(Tile::new(10, true, 0)));
    assert_eq!(target.get(TilePos::new(3, 0)), Some(Tile::new(11, false, 5)));
    assert_eq!(target.get(TilePos::new(2, 1)), Some(Tile::new(12, true, 0)));
    // Three tile ids, one pass flag and one object differ from the defaults
    assert_eq!(changed, 5);
    assert_eq!(history.undo_count(), 5);
}

#[test]
fn test_paste_skips_targets_past_edge() {
    let clipboard = copy_region(&source_map(), TilePos::new(1, 1), TilePos::new(2, 2), LayerMask::TILE);
    let mut target = Map::new(4, 4);
    let mut history = CommandHistory::default();

    let changed = paste_clipboard(&mut target, &mut history, &clipboard, TilePos::new(3, 3));
    assert_eq!(changed, 1);
    assert_eq!(target.get(TilePos::new(3, 3)), Some(Tile::new(10, true, 0)));
}

#[test]
fn test_paste_order_tile_then_pass_then_object() {
    let mut clipboard = Clipboard::single(Layer::Tile, 3);
    clipboard.passes.insert(TileOffset::ZERO, 1);
    clipboard.objects.insert(TileOffset::ZERO, 8);
    clipboard.active = LayerMask::all();

    let mut map = Map::new(1, 1);
    let mut history = CommandHistory::default();
    paste_clipboard(&mut map, &mut history, &clipboard, TilePos::new(0, 0));

    let pos = TilePos::new(0, 0);
    assert_eq!(
        history.last(),
        Some(&MapAction::PasteObject { pos, old: 0, new: 8 })
    );
    history.undo(&mut map);
    assert_eq!(
        history.last(),
        Some(&MapAction::PastePass {
            pos,
            old: true,
            new: false
        })
    );
}

#[test]
fn test_inactive_selection_is_not_pasted() {
    let mut clipboard = Clipboard::single(Layer::Tile, 3);
    clipboard.objects.insert(TileOffset::ZERO, 8);

    let mut map = Map::new(1, 1);
    let mut history = CommandHistory::default();
    paste_clipboard(&mut map, &mut history, &clipboard, TilePos::new(0, 0));
    assert_eq!(map.get(TilePos::new(0, 0)), Some(Tile::new(3, true, 0)));
}

#[test]
fn test_paste_on_locked_map_does_nothing() {
    let clipboard = Clipboard::single(Layer::Tile, 3);
    let mut map = Map::new(2, 2);
    map.set_editable(false);
    let mut history = CommandHistory::default();

    assert_eq!(paste_clipboard(&mut map, &mut history, &clipboard, TilePos::new(0, 0)), 0);
    assert!(!history.can_undo());
}
