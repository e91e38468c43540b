//! Geometry mutations: drag, resize, and sidebar dimension edits.

use uuid::Uuid;

use paneldraw_core::{Point, Size};

use crate::interaction::{DragOutcome, ResizeHandle};
use crate::property_editor::DimensionField;

use super::EditorState;

impl EditorState {
    // --- drag ---

    /// Starts dragging `id`. Locked panels do not move. Selects the
    /// panel and suspends viewport gestures for the duration.
    pub fn start_drag(&mut self, id: Uuid, pointer: Point) {
        let Some(panel) = self.config.panel(id) else {
            return;
        };
        if panel.is_locked() {
            return;
        }
        let origin = Point::new(panel.x, panel.y);
        self.interaction.begin_drag(id, pointer, origin);
        self.select_panel(id);
    }

    /// Ends the active drag. A release within the click threshold
    /// opens the sidebar instead of moving; otherwise one snapshot is
    /// committed and the final position written, snapped to the grid
    /// step when the grid is shown.
    pub fn finish_drag(&mut self, pointer: Point) {
        let snap = self.config.show_grid;
        let Some((id, outcome)) = self.interaction.end_drag(pointer, snap) else {
            return;
        };
        match outcome {
            DragOutcome::Click => self.open_sidebar(id),
            DragOutcome::Moved { x, y } => {
                self.save_state();
                if let Some(panel) = self.config.panel_mut(id) {
                    panel.x = x;
                    panel.y = y;
                }
            }
        }
    }

    // --- resize ---

    /// Starts resizing `id` from `handle`. Locked panels do not
    /// resize. The single snapshot for the whole gesture is taken
    /// here, not per frame.
    pub fn start_resize(&mut self, id: Uuid, handle: ResizeHandle) {
        let Some(panel) = self.config.panel(id) else {
            return;
        };
        if panel.is_locked() {
            return;
        }
        let current = Size::new(panel.width, panel.height);
        self.save_state();
        self.interaction.begin_resize(id, handle, current);
        self.select_panel(id);
    }

    /// Applies one live resize step toward `requested`. The aspect
    /// modifier re-derives the opposite dimension from the gesture's
    /// original ratio; both dimensions are clamped to the kind floors;
    /// top/left handles shift the origin so the opposite edge stays
    /// fixed.
    pub fn resize_to(&mut self, requested: Size, aspect_modifier: bool) {
        let Some((id, handle)) = self.interaction.active_resize() else {
            return;
        };
        let Some(kind) = self.config.panel(id).map(|p| p.kind) else {
            return;
        };
        let Some(size) = self.interaction.resize_request(requested, aspect_modifier, kind) else {
            return;
        };

        if let Some(panel) = self.config.panel_mut(id) {
            if handle.affects_left() {
                panel.x += panel.width - size.width;
            }
            if handle.affects_top() {
                panel.y += panel.height - size.height;
            }
            panel.width = size.width;
            panel.height = size.height;
        }
    }

    /// Ends the active resize gesture.
    pub fn finish_resize(&mut self) {
        self.interaction.end_resize();
    }

    // --- sidebar dimension edits ---

    /// Commits one sidebar dimension field edit: validated, clamped,
    /// optionally aspect-locked, and snapshotted as a discrete
    /// mutation. Invalid input and locked panels commit nothing.
    pub fn set_panel_dimension(&mut self, id: Uuid, field: DimensionField, value: f64) {
        let Some(panel) = self.config.panel(id) else {
            return;
        };
        let Some(patch) = self.property_editor.dimension_patch(panel, field, value) else {
            return;
        };
        self.save_state();
        if let Some(panel) = self.config.panel_mut(id) {
            patch.apply_to(panel);
        }
    }
}
