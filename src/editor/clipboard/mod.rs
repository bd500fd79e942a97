//! Clipboard for copy/paste of tile, passability and object values.
//!
//! A copy reads a rectangle of the map into up to three independent
//! selections, each a map from offset (relative to the rectangle's upper-left
//! corner) to the copied value. The clipboard's active mask names the
//! selections that paste writes back. The clipboard is a plain value owned by
//! the caller, so pastes depend only on their arguments.
//!
//! ## Module Structure
//!
//! - [`types`] - `Clipboard`, `Selection` and `TileOffset`
//! - [`copy`] - Copying a map rectangle (`copy_region`)
//! - [`paste`] - Pasting active selections at an origin (`paste_clipboard`)

mod copy;
mod paste;
mod types;

#[cfg(test)]
mod tests;

// Re-exports
pub use copy::copy_region;
pub use paste::paste_clipboard;
pub use types::{Clipboard, Selection, TileOffset};
