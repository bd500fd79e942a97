//! Centralized constants used across the application.
//!
//! This module contains magic numbers and configuration values that are used
//! in multiple places or would benefit from being named constants.

/// Undo history is trimmed once it grows past this many actions
pub const MAX_HISTORY_SIZE: usize = 1000;

/// Number of oldest actions dropped each time the history is trimmed
pub const HISTORY_TRIM_COUNT: usize = 100;

/// Rows an object sprite may cover: the object's own cell plus the 11 above it.
pub const OBJECT_SPAN: usize = 12;

/// Default flood fill radius (cells in each direction from the clicked cell)
pub const DEFAULT_FILL_RADIUS: u32 = 25;

/// Default rendered size of one tile in pixels
pub const DEFAULT_TILE_PIXEL_SIZE: u32 = 36;

/// Dark green used for empty space so it stays distinct from transparency
pub const BACKGROUND_RGBA: [u8; 4] = [0, 100, 0, 255];

/// Largest full-map render accepted, in bytes of RGBA pixels (2 GiB)
pub const MAX_RENDER_BYTES: u64 = 1 << 31;

/// Maximum number of recent maps to remember in config
pub const MAX_RECENT_MAPS: usize = 5;

/// Name given to maps created from scratch
pub const UNTITLED_MAP_NAME: &str = "Untitled Map";
