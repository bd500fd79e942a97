//! Undo/Redo for map edits.
//!
//! Every reversible edit (tile, passability and object pastes, resizes) is
//! recorded as a [`MapAction`] after it has been applied to the map. Undo
//! reverts the newest action and moves it to the redo stack; redo does the
//! reverse. Recording a new action discards anything waiting to be redone.
//!
//! ## Module Structure
//!
//! - [`commands`] - `MapAction` enum defining all reversible edits
//! - [`command_history`] - `CommandHistory` with bounded undo/redo stacks
//! - [`execute`] - Applying and reverting actions against a map

mod command_history;
mod commands;
mod execute;


// Re-exports
pub use command_history::CommandHistory;
pub use commands::MapAction;
