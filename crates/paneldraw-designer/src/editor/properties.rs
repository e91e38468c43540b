//! Style, title, and lock edits for one panel.

use tracing::debug;
use uuid::Uuid;

use crate::model::{PanelKind, PanelStylePatch, TitleStylePatch};

use super::EditorState;

impl EditorState {
    /// Applies a panel style patch. Locked panels reject everything
    /// except the lock toggle itself.
    pub fn set_panel_style(&mut self, id: Uuid, patch: PanelStylePatch) {
        let Some(panel) = self.config.panel(id) else {
            return;
        };
        if panel.is_locked() && !patch.is_lock_only() {
            debug!(%id, "ignoring style edit on locked panel");
            return;
        }
        self.save_state();
        if let Some(panel) = self.config.panel_mut(id) {
            panel.style.apply_patch(&patch);
        }
    }

    /// Applies a title style patch. Rejected while the panel is locked.
    pub fn set_title_style(&mut self, id: Uuid, patch: TitleStylePatch) {
        let Some(panel) = self.config.panel(id) else {
            return;
        };
        if panel.is_locked() {
            debug!(%id, "ignoring title style edit on locked panel");
            return;
        }
        self.save_state();
        if let Some(panel) = self.config.panel_mut(id) {
            panel.title_style.apply_patch(&patch);
        }
    }

    /// Toggles the lock flag. A mutation in its own right, allowed in
    /// both directions.
    pub fn toggle_lock(&mut self, id: Uuid) {
        if self.config.panel(id).is_none() {
            return;
        }
        self.save_state();
        if let Some(panel) = self.config.panel_mut(id) {
            let locked = panel.is_locked();
            panel.style.locked = Some(!locked);
        }
    }

    /// Sets the title. For text panels the body is the same logical
    /// content and stays in sync.
    pub fn set_title(&mut self, id: Uuid, title: &str) {
        if self.config.panel(id).is_none() {
            return;
        }
        self.save_state();
        if let Some(panel) = self.config.panel_mut(id) {
            panel.title = title.to_string();
            if panel.kind == PanelKind::Text {
                panel.text_content = Some(title.to_string());
            }
        }
    }

    /// Commits body text (text panels); title mirrors the content.
    pub fn set_text(&mut self, id: Uuid, text: &str) {
        if self.config.panel(id).is_none() {
            return;
        }
        self.save_state();
        if let Some(panel) = self.config.panel_mut(id) {
            panel.text_content = Some(text.to_string());
            panel.title = text.to_string();
        }
    }

    // --- in-place text editing ---

    /// Enters text-edit mode for `id` (double-click or activation
    /// while selected), seeding the draft with the current content.
    pub fn start_text_edit(&mut self, id: Uuid) {
        let Some(panel) = self.config.panel(id) else {
            return;
        };
        let current = if panel.kind == PanelKind::Text {
            panel.text_content.clone().unwrap_or_default()
        } else {
            panel.title.clone()
        };
        self.interaction.begin_text_edit(id, &current);
    }

    /// Commits the in-place draft (blur, or Enter without shift):
    /// snapshot-then-mutate, then edit mode ends.
    pub fn commit_text_edit(&mut self) {
        let Some((id, draft)) = self.interaction.commit_text() else {
            return;
        };
        let Some(kind) = self.config.panel(id).map(|p| p.kind) else {
            return;
        };
        if kind == PanelKind::Text {
            self.set_text(id, &draft);
        } else {
            self.set_title(id, &draft);
        }
    }

    /// Discards the in-place draft (Escape). No mutation.
    pub fn cancel_text_edit(&mut self) {
        self.interaction.cancel_text_edit();
    }
}
