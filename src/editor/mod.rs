//! Map editing operations.
//!
//! Every edit funnels through [`tools::paste_value`], which writes one layer
//! of one cell and records the change in a [`CommandHistory`]. Copy/paste,
//! flood fill and the whole-map operations are built from it, and
//! [`MapEditor`] bundles them around the active map.
//!
//! ## Module Structure
//!
//! - [`clipboard`] - Copied selections, `copy_region` and `paste_clipboard`
//! - [`fill`] - Bounded flood fill and fill-all
//! - [`history`] - Undo/redo of recorded map actions
//! - [`map_editor`] - `MapEditor` session facade
//! - [`tools`] - Editor tools, single-cell paste, pass toggle, replace, resize

pub mod clipboard;
pub mod fill;
pub mod history;
mod map_editor;
pub mod tools;

pub use clipboard::{copy_region, paste_clipboard, Clipboard, Selection, TileOffset};
pub use fill::{fill_all, flood_fill, FillBounds};
pub use history::{CommandHistory, MapAction};
pub use map_editor::MapEditor;
pub use tools::{paste_value, replace_visual, resize_map, toggle_pass, EditorTool};
