//! Bounded flood fill and whole-map fill.

use tracing::{debug, warn};

use crate::map::{Layer, Map, TilePos};

use super::history::CommandHistory;
use super::tools::paste_value;

/// Rectangle a fill may touch: `min` inclusive, `max` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillBounds {
    pub min_x: u32,
    pub min_y: u32,
    pub max_x: u32,
    pub max_y: u32,
}

impl FillBounds {
    pub fn new(min_x: u32, min_y: u32, max_x: u32, max_y: u32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Box of `radius` cells on each side of `center`, clipped to a
    /// `width` x `height` map.
    pub fn around(center: TilePos, radius: u32, width: u32, height: u32) -> Self {
        Self {
            min_x: center.x.saturating_sub(radius),
            min_y: center.y.saturating_sub(radius),
            max_x: center.x.saturating_add(radius).min(width),
            max_y: center.y.saturating_add(radius).min(height),
        }
    }

    pub fn whole(map: &Map) -> Self {
        Self::new(0, 0, map.width(), map.height())
    }

    pub fn contains(&self, pos: TilePos) -> bool {
        pos.x >= self.min_x && pos.x < self.max_x && pos.y >= self.min_y && pos.y < self.max_y
    }
}

/// Replace the 4-connected region of `find_id` cells reachable from `start`
/// with `replace_id`, staying inside `bounds`.
///
/// Every changed cell goes through [`paste_value`] and is recorded as its own
/// action. A cell leaves the region once its id changes, so no visited set is
/// kept. Returns the filled cells in fill order.
pub fn flood_fill(
    map: &mut Map,
    history: &mut CommandHistory,
    start: TilePos,
    find_id: u16,
    replace_id: u16,
    bounds: FillBounds,
) -> Vec<TilePos> {
    let mut filled = Vec::new();
    if find_id == replace_id || !map.is_editable() {
        return filled;
    }
    if !map.contains(start) || !bounds.contains(start) {
        warn!(x = start.x, y = start.y, ?bounds, "Fill start outside map or bounds");
        return filled;
    }

    let mut stack = vec![start];
    while let Some(pos) = stack.pop() {
        if !map.contains(pos) || map.tile_or_default(pos).visual_id != find_id {
            continue;
        }
        if !paste_value(map, history, Layer::Tile, pos, replace_id) {
            continue;
        }
        filled.push(pos);

        // Pushed in reverse so x+1, x-1, y+1, y-1 pop in that order
        let neighbors = [
            pos.y.checked_sub(1).map(|y| TilePos::new(pos.x, y)),
            pos.offset(0, 1),
            pos.x.checked_sub(1).map(|x| TilePos::new(x, pos.y)),
            pos.offset(1, 0),
        ];
        stack.extend(
            neighbors
                .into_iter()
                .flatten()
                .filter(|next| bounds.contains(*next)),
        );
    }

    debug!(
        x = start.x,
        y = start.y,
        find_id,
        replace_id,
        cells = filled.len(),
        "Flood fill complete"
    );
    filled
}

/// Paste `visual_id` into every cell of the map. Returns the number of cells
/// changed.
pub fn fill_all(map: &mut Map, history: &mut CommandHistory, visual_id: u16) -> usize {
    if !map.is_editable() {
        return 0;
    }
    let (width, height) = map.size();
    let mut changed = 0;
    for x in 0..width {
        for y in 0..height {
            if paste_value(map, history, Layer::Tile, TilePos::new(x, y), visual_id) {
                changed += 1;
            }
        }
    }
    debug!(visual_id, changed, "Filled entire map");
    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::Tile;

    fn filled_map(width: u32, height: u32, visual_id: u16) -> Map {
        let mut map = Map::new(width, height);
        for x in 0..width {
            for y in 0..height {
                map.set(TilePos::new(x, y), Tile::new(visual_id, true, 0));
            }
        }
        map
    }

    #[test]
    fn test_bounds_around_clips_to_map() {
        let bounds = FillBounds::around(TilePos::new(3, 40), 25, 30, 50);
        assert_eq!(bounds, FillBounds::new(0, 15, 28, 50));
        assert!(bounds.contains(TilePos::new(0, 15)));
        assert!(!bounds.contains(TilePos::new(28, 20)));
        assert!(!bounds.contains(TilePos::new(5, 14)));
    }

    #[test]
    fn test_fill_replaces_connected_region_only() {
        let mut map = filled_map(5, 1, 3);
        map.set(TilePos::new(2, 0), Tile::new(9, true, 0));
        let mut history = CommandHistory::default();

        let bounds = FillBounds::whole(&map);
        let cells = flood_fill(&mut map, &mut history, TilePos::new(0, 0), 3, 7, bounds);

        assert_eq!(cells, vec![TilePos::new(0, 0), TilePos::new(1, 0)]);
        assert_eq!(map.get(TilePos::new(3, 0)).map(|t| t.visual_id), Some(3));
        assert_eq!(history.undo_count(), 2);
    }

    #[test]
    fn test_fill_visits_x_plus_one_first() {
        let mut map = filled_map(3, 3, 1);
        let mut history = CommandHistory::default();
        let bounds = FillBounds::whole(&map);
        let cells = flood_fill(&mut map, &mut history, TilePos::new(1, 1), 1, 2, bounds);

        assert_eq!(cells.len(), 9);
        assert_eq!(cells[0], TilePos::new(1, 1));
        assert_eq!(cells[1], TilePos::new(2, 1));
    }

    #[test]
    fn test_fill_respects_bounds() {
        let mut map = filled_map(10, 10, 1);
        let mut history = CommandHistory::default();
        let bounds = FillBounds::around(TilePos::new(5, 5), 2, 10, 10);
        let cells = flood_fill(&mut map, &mut history, TilePos::new(5, 5), 1, 2, bounds);

        // min inclusive, max exclusive: x and y in 3..7
        assert_eq!(cells.len(), 16);
        assert_eq!(map.get(TilePos::new(2, 5)).map(|t| t.visual_id), Some(1));
        assert_eq!(map.get(TilePos::new(7, 5)).map(|t| t.visual_id), Some(1));
    }

    #[test]
    fn test_fill_unset_cells_with_find_zero() {
        let mut map = Map::new(3, 2);
        let mut history = CommandHistory::default();
        let bounds = FillBounds::whole(&map);
        let cells = flood_fill(&mut map, &mut history, TilePos::new(0, 0), 0, 4, bounds);
        assert_eq!(cells.len(), 6);
        assert!(map.tiles().all(|(_, tile)| tile.visual_id == 4));
    }

    #[test]
    fn test_fill_noop_cases() {
        let mut map = filled_map(3, 3, 1);
        let mut history = CommandHistory::default();
        let bounds = FillBounds::whole(&map);

        assert!(flood_fill(&mut map, &mut history, TilePos::new(0, 0), 1, 1, bounds).is_empty());
        assert!(flood_fill(&mut map, &mut history, TilePos::new(0, 0), 5, 2, bounds).is_empty());
        assert!(flood_fill(&mut map, &mut history, TilePos::new(9, 0), 1, 2, bounds).is_empty());
        let outside = FillBounds::new(1, 1, 3, 3);
        assert!(flood_fill(&mut map, &mut history, TilePos::new(0, 0), 1, 2, outside).is_empty());

        map.set_editable(false);
        assert!(flood_fill(&mut map, &mut history, TilePos::new(0, 0), 1, 2, bounds).is_empty());
        assert_eq!(history.undo_count(), 0);
    }

    #[test]
    fn test_large_fill_does_not_overflow() {
        let mut map = Map::new(300, 300);
        let mut history = CommandHistory::default();
        let bounds = FillBounds::whole(&map);
        let cells = flood_fill(&mut map, &mut history, TilePos::new(150, 150), 0, 1, bounds);
        assert_eq!(cells.len(), 90_000);
    }

    #[test]
    fn test_fill_all_counts_changes() {
        let mut map = Map::new(2, 2);
        map.set(TilePos::new(0, 0), Tile::new(6, false, 2));
        let mut history = CommandHistory::default();

        assert_eq!(fill_all(&mut map, &mut history, 6), 3);
        assert_eq!(map.get(TilePos::new(0, 0)), Some(Tile::new(6, false, 2)));
        assert_eq!(fill_all(&mut map, &mut history, 6), 0);
    }
}
