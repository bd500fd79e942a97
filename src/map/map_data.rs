use image::{imageops, Rgba, RgbaImage};
use tracing::debug;

use crate::constants::{BACKGROUND_RGBA, MAX_RENDER_BYTES, UNTITLED_MAP_NAME};

use super::grid::Grid;
use super::render::{DisplayMode, RenderCache, TileArtProvider};
use super::{Tile, TilePos};

/// A rectangular tile map together with its render cache.
///
/// Writes go through [`Map::set`] and [`Map::resize`]; both are silently
/// ignored while the map is not editable. Undo bookkeeping lives in the
/// editor's command history, not here.
#[derive(Debug, Clone)]
pub struct Map {
    pub name: String,
    cells: Grid<Tile>,
    render_cache: RenderCache,
    is_modified: bool,
    is_editable: bool,
}

impl Map {
    /// Blank editable map.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            name: UNTITLED_MAP_NAME.to_string(),
            cells: Grid::new(width, height),
            render_cache: RenderCache::new(width, height),
            is_modified: false,
            is_editable: true,
        }
    }

    /// Map built from decoded cells: locked and unmodified.
    pub(crate) fn from_grid(name: impl Into<String>, cells: Grid<Tile>) -> Self {
        let render_cache = RenderCache::new(cells.width(), cells.height());
        Self {
            name: name.into(),
            cells,
            render_cache,
            is_modified: false,
            is_editable: false,
        }
    }

    pub fn width(&self) -> u32 {
        self.cells.width()
    }

    pub fn height(&self) -> u32 {
        self.cells.height()
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    pub fn contains(&self, pos: TilePos) -> bool {
        self.cells.contains(pos)
    }

    pub fn is_modified(&self) -> bool {
        self.is_modified
    }

    pub fn set_modified(&mut self, modified: bool) {
        self.is_modified = modified;
    }

    pub fn is_editable(&self) -> bool {
        self.is_editable
    }

    pub fn set_editable(&mut self, editable: bool) {
        self.is_editable = editable;
    }

    /// Stored tile, `None` for unset cells and out-of-range positions.
    pub fn get(&self, pos: TilePos) -> Option<Tile> {
        self.cells.get(pos).copied()
    }

    /// Stored tile or [`Tile::DEFAULT`]; never materializes the cell.
    pub fn tile_or_default(&self, pos: TilePos) -> Tile {
        self.get(pos).unwrap_or_default()
    }

    /// Store `tile` at `pos`. Returns false when the map is locked or `pos`
    /// lies outside the grid, leaving everything untouched.
    pub fn set(&mut self, pos: TilePos, tile: Tile) -> bool {
        if !self.is_editable {
            debug!(x = pos.x, y = pos.y, "Ignoring write to locked map");
            return false;
        }
        let old_object = self.get(pos).map_or(0, |t| t.object_id);
        if !self.cells.set(pos, Some(tile)) {
            return false;
        }

        self.is_modified = true;
        if old_object != tile.object_id {
            self.render_cache.invalidate_object_column(pos);
        } else {
            self.render_cache.invalidate(pos);
        }
        true
    }

    /// Change the grid size, keeping tiles at overlapping coordinates.
    /// Every cached image is discarded. Returns false on a locked map.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        if !self.is_editable {
            debug!(width, height, "Ignoring resize of locked map");
            return false;
        }
        let cells = std::mem::replace(&mut self.cells, Grid::new(0, 0));
        self.cells = cells.resized(width, height);
        self.render_cache.reset(width, height);
        self.is_modified = true;
        true
    }

    /// Replace the whole grid, e.g. when undoing a resize.
    pub(crate) fn restore_cells(&mut self, cells: Grid<Tile>) -> bool {
        if !self.is_editable {
            return false;
        }
        self.render_cache.reset(cells.width(), cells.height());
        self.cells = cells;
        self.is_modified = true;
        true
    }

    pub(crate) fn cells(&self) -> &Grid<Tile> {
        &self.cells
    }

    /// Every cell in row-major order, unset cells read as the default tile.
    pub fn tiles(&self) -> impl Iterator<Item = (TilePos, Tile)> + '_ {
        let width = self.width();
        (0..self.height()).flat_map(move |y| {
            (0..width).map(move |x| {
                let pos = TilePos::new(x, y);
                (pos, self.tile_or_default(pos))
            })
        })
    }

    pub fn render_cache(&self) -> &RenderCache {
        &self.render_cache
    }

    pub fn clear_render_cache(&mut self) {
        self.render_cache.clear();
    }

    /// Composite image of one cell through the render cache.
    pub fn render_tile(
        &mut self,
        pos: TilePos,
        pixel_size: u32,
        mode: DisplayMode,
        force_render_empty: bool,
        art: &dyn TileArtProvider,
    ) -> Option<RgbaImage> {
        self.render_cache
            .get_or_render(&self.cells, pos, pixel_size, mode, force_render_empty, art)
    }

    /// Pixel dimensions of [`Map::render_full`] at `pixel_size`, or `None`
    /// when the canvas would not fit in `MAX_RENDER_BYTES`.
    pub fn canvas_size(&self, pixel_size: u32) -> Option<(u32, u32)> {
        let width = self.width().checked_mul(pixel_size)?;
        let height = self.height().checked_mul(pixel_size)?;
        let bytes = u64::from(width) * u64::from(height) * 4;
        (bytes <= MAX_RENDER_BYTES).then_some((width, height))
    }

    /// Whole map as one image, `pixel_size` pixels per cell. Cells without a
    /// composite show the background colour.
    ///
    /// Panics if the canvas cannot be allocated; check [`Map::canvas_size`]
    /// first when the size comes from user input.
    pub fn render_full(
        &mut self,
        pixel_size: u32,
        mode: DisplayMode,
        art: &dyn TileArtProvider,
    ) -> RgbaImage {
        let image_width = self.width().saturating_mul(pixel_size);
        let image_height = self.height().saturating_mul(pixel_size);
        let mut canvas = RgbaImage::from_pixel(image_width, image_height, Rgba(BACKGROUND_RGBA));
        if mode.is_blank() {
            return canvas;
        }

        for y in 0..self.height() {
            for x in 0..self.width() {
                let pos = TilePos::new(x, y);
                if let Some(tile_image) = self.render_tile(pos, pixel_size, mode, false, art) {
                    imageops::replace(
                        &mut canvas,
                        &tile_image,
                        i64::from(x) * i64::from(pixel_size),
                        i64::from(y) * i64::from(pixel_size),
                    );
                }
            }
        }
        debug!(
            name = %self.name,
            cached = self.render_cache.cached_count(),
            "Rendered full map"
        );
        canvas
    }
}
