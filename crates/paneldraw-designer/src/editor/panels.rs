//! Panel lifecycle: creation, removal, clear, and the clipboard.

use uuid::Uuid;

use crate::model::{self, PanelKind};
use crate::render::SurfaceMeasure;

use super::EditorState;

impl EditorState {
    /// Adds a fresh panel of `kind`, placed against the measured mount
    /// surface. Matches the source behavior of snapshotting before the
    /// placement lookup, so the gesture accounting is identical even
    /// when the surface is missing and nothing is appended.
    pub fn add_panel(&mut self, kind: PanelKind, surface: &dyn SurfaceMeasure) {
        self.save_state();
        let panels = std::mem::take(&mut self.config.panels);
        self.config.panels = model::create_panel(panels, kind, surface.canvas_rect(), 1.0);
    }

    /// Removes the panel with id `id`, dropping any transient
    /// references to it.
    pub fn remove_panel(&mut self, id: Uuid) {
        if self.config.panel(id).is_none() {
            return;
        }
        self.save_state();
        self.config.panels.retain(|p| p.id != id);
        self.selected_panel = None;
        if self.interaction.editing_panel() == Some(id) {
            self.interaction.cancel_text_edit();
        }
        if self.hovered_panel == Some(id) {
            self.hovered_panel = None;
        }
        if self.sidebar_panel == Some(id) {
            self.close_sidebar();
        }
    }

    /// Removes the currently selected panel (Delete key).
    pub fn remove_selected(&mut self) {
        if let Some(id) = self.selected_panel {
            self.remove_panel(id);
        }
    }

    /// Removes every panel.
    pub fn clear_panels(&mut self) {
        self.save_state();
        self.config.panels.clear();
        self.reset_transient();
    }

    /// Stores a deep copy of the selected panel in the clipboard.
    pub fn copy_selected(&mut self) {
        if let Some(panel) = self.selected_panel.and_then(|id| self.config.panel(id)) {
            self.copied_panel = Some(panel.clone());
        }
    }

    /// Pastes the clipboard panel centered in the mount surface.
    /// Best-effort: without a clipboard panel nothing happens, and
    /// without a measurable surface the snapshot is still taken but
    /// nothing is appended (preserved source policy).
    pub fn paste(&mut self, surface: &dyn SurfaceMeasure) {
        if self.copied_panel.is_none() {
            return;
        }
        self.save_state();
        let panels = std::mem::take(&mut self.config.panels);
        self.config.panels = model::clone_panel(
            panels,
            self.copied_panel.as_ref(),
            surface.canvas_rect(),
            1.0,
        );
    }
}
