//! Undo/redo wiring for the editor state.

use super::EditorState;

impl EditorState {
    /// Records the current document as the pre-mutation snapshot.
    /// Called exactly once per logical user action, before the
    /// mutation is applied. Continuous gestures call this at the
    /// gesture boundary, never per frame.
    pub fn save_state(&mut self) {
        self.history.record(self.config.clone());
    }

    /// Restores the previous snapshot. Selection and editing state
    /// always reset to empty afterwards.
    pub fn undo(&mut self) {
        if let Some(previous) = self.history.undo(self.config.clone()) {
            self.config = previous;
            self.reset_transient();
        }
    }

    /// Mirror of [`EditorState::undo`] over the redo stack.
    pub fn redo(&mut self) {
        if let Some(next) = self.history.redo(self.config.clone()) {
            self.config = next;
            self.reset_transient();
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn undo_depth(&self) -> usize {
        self.history.undo_depth()
    }

    pub fn redo_depth(&self) -> usize {
        self.history.redo_depth()
    }
}
