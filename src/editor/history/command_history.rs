//! Command history for tracking undo/redo state.

use tracing::debug;

use crate::constants::{HISTORY_TRIM_COUNT, MAX_HISTORY_SIZE};
use crate::map::Map;

use super::commands::MapAction;

/// Undo and redo stacks of map actions
#[derive(Debug, Default)]
pub struct CommandHistory {
    /// Stack of actions that can be undone (most recent last)
    undo_stack: Vec<MapAction>,
    /// Stack of actions that can be redone (most recent last)
    redo_stack: Vec<MapAction>,
}

impl CommandHistory {
    /// Record an action the caller has already applied to the map.
    pub fn record(&mut self, action: MapAction) {
        // Clear redo stack when a new action is performed
        self.redo_stack.clear();

        self.undo_stack.push(action);

        if self.undo_stack.len() > MAX_HISTORY_SIZE {
            self.undo_stack = self.undo_stack.split_off(HISTORY_TRIM_COUNT);
            debug!(
                remaining = self.undo_stack.len(),
                "Trimmed oldest {} actions from undo history", HISTORY_TRIM_COUNT
            );
        }
    }

    /// Revert the most recent action. Returns the action, now on the redo
    /// stack, so callers can refresh whatever it touched. Both stacks are
    /// left alone while the map is locked.
    pub fn undo(&mut self, map: &mut Map) -> Option<&MapAction> {
        if !map.is_editable() {
            return None;
        }
        let action = self.undo_stack.pop()?;
        action.revert(map);
        self.redo_stack.push(action);
        self.redo_stack.last()
    }

    /// Re-apply the most recently undone action.
    pub fn redo(&mut self, map: &mut Map) -> Option<&MapAction> {
        if !map.is_editable() {
            return None;
        }
        let action = self.redo_stack.pop()?;
        action.apply(map);
        self.undo_stack.push(action);
        self.undo_stack.last()
    }

    /// Check if there are actions to undo
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if there are actions to redo
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }

    /// Most recent undoable action
    pub fn last(&self) -> Option<&MapAction> {
        self.undo_stack.last()
    }

    /// Clear all history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
