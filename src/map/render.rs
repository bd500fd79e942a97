//! Per-cell render cache and the art provider seam.
//!
//! Each cached entry carries the pixel size and display mode it was rendered
//! with; a request with a different size or mode recomputes that cell.
//! Object sprites can cover up to [`OBJECT_SPAN`] rows, so the composite of a
//! cell depends on the cell itself and the 11 cells below it.

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use tracing::trace;

use crate::constants::{BACKGROUND_RGBA, OBJECT_SPAN};

use super::grid::Grid;
use super::{Tile, TilePos};

/// Tiles from the requested cell downward; index 0 is the cell itself.
pub type ObjectContext = [Option<Tile>; OBJECT_SPAN];

/// Source of tile and object bitmaps.
///
/// Treated as a pure lookup: the same arguments must yield the same picture.
pub trait TileArtProvider {
    /// Bitmap for a non-zero visual id
    fn tile_bitmap(&self, visual_id: u16) -> RgbaImage;

    /// Object overlay for a cell, or `None` when nothing is drawn there
    fn object_bitmap(&self, object_id: u16, context: &ObjectContext) -> Option<RgbaImage>;
}

/// Which layers are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisplayMode {
    pub show_tiles: bool,
    pub show_objects: bool,
}

impl DisplayMode {
    pub const ALL: DisplayMode = DisplayMode {
        show_tiles: true,
        show_objects: true,
    };

    pub const fn new(show_tiles: bool, show_objects: bool) -> Self {
        Self {
            show_tiles,
            show_objects,
        }
    }

    pub fn is_blank(&self) -> bool {
        !self.show_tiles && !self.show_objects
    }
}

impl Default for DisplayMode {
    fn default() -> Self {
        Self::ALL
    }
}

/// Composited picture of one cell.
#[derive(Debug, Clone)]
pub struct CachedImage {
    pub image: RgbaImage,
    pub pixel_size: u32,
    pub mode: DisplayMode,
}

impl CachedImage {
    fn matches(&self, pixel_size: u32, mode: DisplayMode) -> bool {
        self.pixel_size == pixel_size && self.mode == mode
    }
}

/// Solid background square of the given size.
pub fn background_tile(pixel_size: u32) -> RgbaImage {
    RgbaImage::from_pixel(pixel_size, pixel_size, Rgba(BACKGROUND_RGBA))
}

/// Memoized cell composites, sized identically to the map grid.
#[derive(Debug, Clone)]
pub struct RenderCache {
    entries: Grid<CachedImage>,
    mode: DisplayMode,
}

impl RenderCache {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            entries: Grid::new(width, height),
            mode: DisplayMode::ALL,
        }
    }

    pub fn width(&self) -> u32 {
        self.entries.width()
    }

    pub fn height(&self) -> u32 {
        self.entries.height()
    }

    /// Display mode of the most recent request.
    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn cached_count(&self) -> usize {
        self.entries.occupied()
    }

    pub fn is_cached(&self, pos: TilePos) -> bool {
        self.entries.get(pos).is_some()
    }

    pub fn invalidate(&mut self, pos: TilePos) {
        self.entries.set(pos, None);
    }

    /// Drop the entry at `pos` and the entries of the cells above it whose
    /// composite can include an object standing on `pos`.
    pub fn invalidate_object_column(&mut self, pos: TilePos) {
        for i in 0..OBJECT_SPAN as u32 {
            let Some(y) = pos.y.checked_sub(i) else {
                break;
            };
            self.entries.set(TilePos::new(pos.x, y), None);
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Reallocate to new dimensions, discarding every entry.
    pub fn reset(&mut self, width: u32, height: u32) {
        self.entries = Grid::new(width, height);
    }

    /// Cached composite for `pos`, rendering it first when missing or stale.
    ///
    /// With `force_render_empty` the result is always a `pixel_size` square,
    /// even for blank cells.
    pub fn get_or_render(
        &mut self,
        cells: &Grid<Tile>,
        pos: TilePos,
        pixel_size: u32,
        mode: DisplayMode,
        force_render_empty: bool,
        art: &dyn TileArtProvider,
    ) -> Option<RgbaImage> {
        if !self.entries.contains(pos) {
            return None;
        }

        self.mode = mode;
        if mode.is_blank() {
            return force_render_empty.then(|| background_tile(pixel_size));
        }

        if let Some(entry) = self.entries.get(pos)
            && entry.matches(pixel_size, mode)
        {
            return Some(entry.image.clone());
        }

        trace!(x = pos.x, y = pos.y, pixel_size, "Rendering cell");
        let rendered = compose_cell(cells, pos, pixel_size, mode, force_render_empty, art);
        let entry = rendered.map(|image| CachedImage {
            image,
            pixel_size,
            mode,
        });
        let image = entry.as_ref().map(|e| e.image.clone());
        self.entries.set(pos, entry);
        image
    }
}

fn object_context(cells: &Grid<Tile>, pos: TilePos) -> ObjectContext {
    let mut context = [None; OBJECT_SPAN];
    for (i, slot) in context.iter_mut().enumerate() {
        let Some(below) = pos.offset(0, i as u32) else {
            break;
        };
        if !cells.contains(below) {
            break;
        }
        *slot = cells.get(below).copied();
    }
    context
}

fn fit_to_cell(image: RgbaImage, pixel_size: u32) -> RgbaImage {
    if image.width() == pixel_size && image.height() == pixel_size {
        image
    } else {
        imageops::resize(&image, pixel_size, pixel_size, FilterType::Nearest)
    }
}

fn compose_cell(
    cells: &Grid<Tile>,
    pos: TilePos,
    pixel_size: u32,
    mode: DisplayMode,
    force_render_empty: bool,
    art: &dyn TileArtProvider,
) -> Option<RgbaImage> {
    let tile = cells.get(pos).copied();

    let tile_image = if mode.show_tiles {
        tile.filter(|t| t.visual_id != 0)
            .map(|t| fit_to_cell(art.tile_bitmap(t.visual_id), pixel_size))
    } else {
        None
    };

    let object_image = if mode.show_objects {
        let object_id = tile.map_or(0, |t| t.object_id);
        art.object_bitmap(object_id, &object_context(cells, pos))
    } else {
        None
    };

    if tile_image.is_none() && object_image.is_none() && mode.show_tiles && mode.show_objects {
        return force_render_empty.then(|| background_tile(pixel_size));
    }

    let mut base = tile_image.unwrap_or_else(|| background_tile(pixel_size));
    if let Some(object) = object_image {
        imageops::overlay(&mut base, &object, 0, 0);
    }
    Some(base)
}

/// Flat-colour art: one colour per visual id, an inset square per object id.
///
/// Used by the headless renderer where no sprite sheets are available.
#[derive(Debug, Clone, Copy)]
pub struct SwatchArtProvider {
    pub pixel_size: u32,
}

impl SwatchArtProvider {
    pub fn new(pixel_size: u32) -> Self {
        Self { pixel_size }
    }

    fn swatch(id: u16, salt: u32) -> Rgba<u8> {
        let hash = (u32::from(id) ^ salt).wrapping_mul(2_654_435_761);
        let [r, g, b, _] = hash.to_le_bytes();
        Rgba([r, g, b, 255])
    }
}

impl TileArtProvider for SwatchArtProvider {
    fn tile_bitmap(&self, visual_id: u16) -> RgbaImage {
        RgbaImage::from_pixel(self.pixel_size, self.pixel_size, Self::swatch(visual_id, 0))
    }

    fn object_bitmap(&self, object_id: u16, _context: &ObjectContext) -> Option<RgbaImage> {
        if object_id == 0 {
            return None;
        }
        let mut image = RgbaImage::new(self.pixel_size, self.pixel_size);
        let inset = self.pixel_size / 4;
        let color = Self::swatch(object_id, 0x5bd1_e995);
        for y in inset..self.pixel_size - inset {
            for x in inset..self.pixel_size - inset {
                image.put_pixel(x, y, color);
            }
        }
        Some(image)
    }
}
