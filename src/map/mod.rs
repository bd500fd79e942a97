//! Tile map data model.
//!
//! ## Module Structure
//!
//! - [`tile`] - `Tile` cell value and `TilePos` coordinates
//! - [`grid`] - Row-major storage shared by cells and cache
//! - [`layer`] - Tile attributes (tile, pass, object) and layer masks
//! - [`map_data`] - `Map`: grid, flags, indexed read/write, full render
//! - [`render`] - Per-cell render cache and `TileArtProvider`
//! - [`persistence`] - `.map` / `.cmp` codec and file I/O

mod grid;
mod layer;
mod map_data;
pub mod persistence;
pub mod render;
mod tile;


pub use grid::Grid;
pub use layer::{Layer, LayerMask};
pub use map_data::Map;
pub use persistence::{load_map, save_map, FormatError, MapFormat};
pub use render::{
    background_tile, CachedImage, DisplayMode, ObjectContext, RenderCache, SwatchArtProvider,
    TileArtProvider,
};
pub use tile::{Tile, TilePos};
