//! Z-order changes routed through the layering engine.

use uuid::Uuid;

use crate::layering::{self, LayerAction};

use super::EditorState;

impl EditorState {
    /// Applies a layer action to `id`. Boundary no-ops (already at the
    /// back/front) are rejected before snapshotting so the undo
    /// history never records a null mutation; locked panels reject
    /// layer changes outright.
    pub fn change_layer(&mut self, id: Uuid, action: LayerAction) {
        let Some(panel) = self.config.panel(id) else {
            return;
        };
        if panel.is_locked() {
            return;
        }
        if !layering::can_reorder(&self.config.panels, id, action) {
            return;
        }
        self.save_state();
        layering::reorder(&mut self.config.panels, id, action);
    }
}
