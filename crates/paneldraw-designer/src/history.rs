//! Linear undo/redo over full canvas snapshots.
//!
//! Every state-mutating action records the pre-mutation [`CanvasConfig`]
//! exactly once; continuous gestures record at the gesture boundary, not
//! per frame. The stacks are unbounded so an N-step edit session always
//! unwinds back to its initial state.

use crate::canvas::CanvasConfig;

/// Snapshot-based undo/redo stacks.
#[derive(Debug, Clone, Default)]
pub struct HistoryStack {
    undo_stack: Vec<CanvasConfig>,
    redo_stack: Vec<CanvasConfig>,
}

impl HistoryStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the pre-mutation state. Any new action invalidates the
    /// redo stack.
    pub fn record(&mut self, snapshot: CanvasConfig) {
        self.undo_stack.push(snapshot);
        self.redo_stack.clear();
    }

    /// Pops the most recent snapshot, parking `current` on the redo
    /// stack. Returns the state to restore, or `None` when there is
    /// nothing to undo.
    pub fn undo(&mut self, current: CanvasConfig) -> Option<CanvasConfig> {
        let previous = self.undo_stack.pop()?;
        self.redo_stack.push(current);
        Some(previous)
    }

    /// Mirror of [`HistoryStack::undo`] using the redo stack.
    pub fn redo(&mut self, current: CanvasConfig) -> Option<CanvasConfig> {
        let next = self.redo_stack.pop()?;
        self.undo_stack.push(current);
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Drops both stacks. Used when a loaded document replaces the
    /// session wholesale.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
