//! Panel gesture handling: drag, resize, and in-place text editing.
//!
//! The controller tracks at most one active gesture system-wide and
//! turns raw pointer positions into committed geometry. It owns no
//! canvas state; the editor applies the outcomes it produces.

use uuid::Uuid;

use paneldraw_core::constants::{DRAG_CLICK_THRESHOLD, GRID_STEP};
use paneldraw_core::{Point, Size};

use crate::model::PanelKind;

/// The eight resize grab handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeHandle {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl ResizeHandle {
    /// Handles on the left edge shift the panel origin so the right
    /// edge stays fixed.
    pub fn affects_left(&self) -> bool {
        matches!(
            self,
            ResizeHandle::West | ResizeHandle::NorthWest | ResizeHandle::SouthWest
        )
    }

    /// Handles on the top edge shift the panel origin so the bottom
    /// edge stays fixed.
    pub fn affects_top(&self) -> bool {
        matches!(
            self,
            ResizeHandle::North | ResizeHandle::NorthEast | ResizeHandle::NorthWest
        )
    }

    /// Aspect-locked resizes driven by this handle recompute height
    /// from width (corner and horizontal handles).
    pub fn derives_height_from_width(&self) -> bool {
        !matches!(self, ResizeHandle::North | ResizeHandle::South)
    }
}

/// How a completed drag gesture resolves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragOutcome {
    /// Pointer travel stayed at or below the click threshold: treat the
    /// gesture as a click (opens the property sidebar).
    Click,
    /// The panel moved; commit this position.
    Moved { x: f64, y: f64 },
}

#[derive(Debug, Clone, PartialEq)]
enum Gesture {
    Idle,
    Dragging {
        panel: Uuid,
        pointer_origin: Point,
        panel_origin: Point,
    },
    Resizing {
        panel: Uuid,
        handle: ResizeHandle,
        original: Size,
    },
    EditingText {
        panel: Uuid,
        draft: String,
    },
}

/// Gesture state machine for direct panel manipulation.
#[derive(Debug, Clone)]
pub struct InteractionController {
    gesture: Gesture,
}

impl InteractionController {
    pub fn new() -> Self {
        Self {
            gesture: Gesture::Idle,
        }
    }

    /// True while a drag or resize is active. The editor uses this to
    /// suspend viewport pan/zoom.
    pub fn is_interacting(&self) -> bool {
        matches!(
            self.gesture,
            Gesture::Dragging { .. } | Gesture::Resizing { .. }
        )
    }

    /// Panel currently in text-edit mode, if any.
    pub fn editing_panel(&self) -> Option<Uuid> {
        match &self.gesture {
            Gesture::EditingText { panel, .. } => Some(*panel),
            _ => None,
        }
    }

    // --- drag ---

    /// Starts dragging `panel`. Records the pointer press position for
    /// the click-vs-drag decision on release.
    pub fn begin_drag(&mut self, panel: Uuid, pointer: Point, panel_position: Point) {
        self.gesture = Gesture::Dragging {
            panel,
            pointer_origin: pointer,
            panel_origin: panel_position,
        };
    }

    /// Position of the dragged panel for the current pointer location.
    /// Movement is unconstrained while the drag is live.
    pub fn drag_position(&self, pointer: Point) -> Option<Point> {
        match &self.gesture {
            Gesture::Dragging {
                pointer_origin,
                panel_origin,
                ..
            } => Some(Point::new(
                panel_origin.x + (pointer.x - pointer_origin.x),
                panel_origin.y + (pointer.y - pointer_origin.y),
            )),
            _ => None,
        }
    }

    /// Ends the drag. Pointer travel at or below the click threshold
    /// resolves as a click; otherwise the final position is committed,
    /// snapped to the grid step when the grid is shown.
    pub fn end_drag(&mut self, pointer: Point, snap_to_grid: bool) -> Option<(Uuid, DragOutcome)> {
        let Gesture::Dragging {
            panel,
            pointer_origin,
            panel_origin,
        } = std::mem::replace(&mut self.gesture, Gesture::Idle)
        else {
            return None;
        };

        let dx = pointer.x - pointer_origin.x;
        let dy = pointer.y - pointer_origin.y;
        if dx.abs() <= DRAG_CLICK_THRESHOLD && dy.abs() <= DRAG_CLICK_THRESHOLD {
            return Some((panel, DragOutcome::Click));
        }

        let mut x = panel_origin.x + dx;
        let mut y = panel_origin.y + dy;
        if snap_to_grid {
            x = snap(x);
            y = snap(y);
        }
        Some((panel, DragOutcome::Moved { x, y }))
    }

    // --- resize ---

    /// Starts resizing `panel` from `handle`, capturing the current
    /// size for aspect-lock math.
    pub fn begin_resize(&mut self, panel: Uuid, handle: ResizeHandle, current: Size) {
        self.gesture = Gesture::Resizing {
            panel,
            handle,
            original: current,
        };
    }

    pub fn active_resize(&self) -> Option<(Uuid, ResizeHandle)> {
        match &self.gesture {
            Gesture::Resizing { panel, handle, .. } => Some((*panel, *handle)),
            _ => None,
        }
    }

    /// Resolves a requested size against the active resize gesture:
    /// applies the aspect lock when the modifier is held (except for
    /// line and text panels) and clamps to the kind floors.
    pub fn resize_request(
        &self,
        requested: Size,
        aspect_modifier: bool,
        kind: PanelKind,
    ) -> Option<Size> {
        let Gesture::Resizing {
            handle, original, ..
        } = &self.gesture
        else {
            return None;
        };

        let mut size = requested;
        if aspect_modifier && kind.aspect_lockable() {
            let ratio = original.aspect_ratio();
            if handle.derives_height_from_width() {
                size.height = size.width / ratio;
            } else {
                size.width = size.height * ratio;
            }
        }

        size.width = size.width.max(kind.min_width());
        size.height = size.height.max(kind.min_height());
        Some(size)
    }

    /// Ends the resize gesture, returning the affected panel.
    pub fn end_resize(&mut self) -> Option<Uuid> {
        match std::mem::replace(&mut self.gesture, Gesture::Idle) {
            Gesture::Resizing { panel, .. } => Some(panel),
            other => {
                self.gesture = other;
                None
            }
        }
    }

    // --- text editing ---

    /// Enters text-edit mode for `panel` with the current content as
    /// the draft.
    pub fn begin_text_edit(&mut self, panel: Uuid, current: &str) {
        self.gesture = Gesture::EditingText {
            panel,
            draft: current.to_string(),
        };
    }

    /// Replaces the in-progress draft.
    pub fn set_draft(&mut self, text: &str) {
        if let Gesture::EditingText { draft, .. } = &mut self.gesture {
            *draft = text.to_string();
        }
    }

    pub fn draft(&self) -> Option<&str> {
        match &self.gesture {
            Gesture::EditingText { draft, .. } => Some(draft),
            _ => None,
        }
    }

    /// Commits the draft (blur or Enter without shift) and leaves edit
    /// mode.
    pub fn commit_text(&mut self) -> Option<(Uuid, String)> {
        match std::mem::replace(&mut self.gesture, Gesture::Idle) {
            Gesture::EditingText { panel, draft } => Some((panel, draft)),
            other => {
                self.gesture = other;
                None
            }
        }
    }

    /// Discards the draft (Escape) and leaves edit mode.
    pub fn cancel_text_edit(&mut self) {
        if matches!(self.gesture, Gesture::EditingText { .. }) {
            self.gesture = Gesture::Idle;
        }
    }
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new()
    }
}

/// Snaps a coordinate to the nearest grid line.
pub fn snap(value: f64) -> f64 {
    (value / GRID_STEP).round() * GRID_STEP
}
