//! Editing session: the active map with its history and clipboard.

use std::path::Path;

use tracing::info;

use crate::config::AppConfigData;
use crate::constants::DEFAULT_FILL_RADIUS;
use crate::map::{load_map, save_map, FormatError, LayerMask, Map, TilePos};

use super::clipboard::{copy_region, paste_clipboard, Clipboard};
use super::fill::{fill_all, flood_fill, FillBounds};
use super::history::{CommandHistory, MapAction};
use super::tools::{self, EditorTool};

/// The single active map and the state the presentation layer edits it through.
#[derive(Debug)]
pub struct MapEditor {
    pub map: Map,
    pub history: CommandHistory,
    pub clipboard: Clipboard,
    pub tool: EditorTool,
    /// Cells on each side of the clicked cell a flood fill may reach
    pub fill_radius: u32,
}

impl MapEditor {
    pub fn new(map: Map) -> Self {
        Self {
            map,
            history: CommandHistory::default(),
            clipboard: Clipboard::default(),
            tool: EditorTool::default(),
            fill_radius: DEFAULT_FILL_RADIUS,
        }
    }

    /// Editor over `map` using the user's saved fill radius.
    pub fn with_settings(map: Map, settings: &AppConfigData) -> Self {
        Self {
            fill_radius: settings.fill_radius,
            ..Self::new(map)
        }
    }

    /// Replace the active map. History belongs to the old map and is dropped;
    /// the clipboard is kept so selections can move between maps.
    pub fn open(&mut self, map: Map) {
        info!(name = %map.name, width = map.width(), height = map.height(), "Opened map");
        self.map = map;
        self.history.clear();
    }

    pub fn open_file(&mut self, path: &Path) -> Result<(), FormatError> {
        let map = load_map(path)?;
        self.open(map);
        Ok(())
    }

    pub fn save_file(&mut self, path: &Path) -> Result<(), FormatError> {
        save_map(&mut self.map, path)
    }

    /// Apply the current tool at `pos`. Returns the number of cells changed.
    pub fn use_tool(&mut self, pos: TilePos) -> usize {
        match self.tool {
            EditorTool::Paste => self.paste_at(pos),
            EditorTool::Pass => usize::from(self.toggle_pass(pos)),
            EditorTool::Fill => self.flood_fill_at(pos).len(),
        }
    }

    pub fn paste_at(&mut self, pos: TilePos) -> usize {
        paste_clipboard(&mut self.map, &mut self.history, &self.clipboard, pos)
    }

    pub fn toggle_pass(&mut self, pos: TilePos) -> bool {
        tools::toggle_pass(&mut self.map, &mut self.history, pos)
    }

    /// Fill the region under `pos` with the single copied tile, within
    /// `fill_radius` of `pos`. Does nothing unless exactly one tile is copied.
    pub fn flood_fill_at(&mut self, pos: TilePos) -> Vec<TilePos> {
        let Some(replace_id) = self.clipboard.single_tile_value() else {
            return Vec::new();
        };
        if !self.map.contains(pos) {
            return Vec::new();
        }
        let find_id = self.map.tile_or_default(pos).visual_id;
        let bounds = FillBounds::around(pos, self.fill_radius, self.map.width(), self.map.height());
        flood_fill(&mut self.map, &mut self.history, pos, find_id, replace_id, bounds)
    }

    /// Fill every cell with the single copied tile.
    pub fn fill_all(&mut self) -> usize {
        match self.clipboard.single_tile_value() {
            Some(visual_id) => fill_all(&mut self.map, &mut self.history, visual_id),
            None => 0,
        }
    }

    pub fn replace_visual(&mut self, find: u16, replace: u16) -> usize {
        tools::replace_visual(&mut self.map, &mut self.history, find, replace)
    }

    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        tools::resize_map(&mut self.map, &mut self.history, width, height)
    }

    pub fn undo(&mut self) -> Option<&MapAction> {
        self.history.undo(&mut self.map)
    }

    pub fn redo(&mut self) -> Option<&MapAction> {
        self.history.redo(&mut self.map)
    }

    /// Copy the rectangle between `a` and `b` into the clipboard.
    pub fn copy(&mut self, a: TilePos, b: TilePos, layers: LayerMask) {
        self.clipboard = copy_region(&self.map, a, b, layers);
    }
}

impl Default for MapEditor {
    fn default() -> Self {
        Self::new(Map::new(0, 0))
    }
}
