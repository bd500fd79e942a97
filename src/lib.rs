//! Core of a 2D tile map editor.
//!
//! - [`map`] - Tile grid, render cache and `.map` / `.cmp` files
//! - [`editor`] - Undoable edits, clipboard, flood fill and the editing session
//! - [`config`] - Persisted user settings
//! - [`paths`] - Platform config and log locations

pub mod config;
pub mod constants;
pub mod editor;
pub mod map;
pub mod paths;
