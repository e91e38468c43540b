//! Structured dimension editing for the property sidebar.
//!
//! Translates a single field edit into a validated geometry patch:
//! aspect-ratio lock (a transient toggle, never persisted with the
//! panel), kind-dependent size floors, and non-negative positions.
//! Locked panels reject every dimension edit.

use tracing::debug;

use crate::model::Panel;

/// Which geometry field a sidebar edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionField {
    Width,
    Height,
    X,
    Y,
}

/// A validated geometry edit produced from one field change.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DimensionPatch {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl DimensionPatch {
    /// Writes the set fields onto `panel`.
    pub fn apply_to(&self, panel: &mut Panel) {
        if let Some(w) = self.width {
            panel.width = w;
        }
        if let Some(h) = self.height {
            panel.height = h;
        }
        if let Some(x) = self.x {
            panel.x = x;
        }
        if let Some(y) = self.y {
            panel.y = y;
        }
    }
}

/// Sidebar editing session state.
#[derive(Debug, Clone, Default)]
pub struct PropertyEditor {
    aspect_ratio_locked: bool,
}

impl PropertyEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn aspect_ratio_locked(&self) -> bool {
        self.aspect_ratio_locked
    }

    pub fn toggle_aspect_ratio_lock(&mut self) {
        self.aspect_ratio_locked = !self.aspect_ratio_locked;
    }

    /// Builds the patch for editing `field` to `value` on `panel`.
    ///
    /// Returns `None` (no mutation) for locked panels and for
    /// non-finite input; the field simply does not commit.
    pub fn dimension_patch(
        &self,
        panel: &Panel,
        field: DimensionField,
        value: f64,
    ) -> Option<DimensionPatch> {
        if panel.is_locked() {
            return None;
        }
        if !value.is_finite() {
            debug!(kind = %panel.kind, ?field, "ignoring non-numeric dimension input");
            return None;
        }

        let min_width = panel.kind.min_width();
        let min_height = panel.kind.min_height();
        let mut patch = DimensionPatch::default();

        match field {
            DimensionField::Width => {
                patch.width = Some(value);
                if self.aspect_ratio_locked {
                    let ratio = paneldraw_core::Size::new(panel.width, panel.height).aspect_ratio();
                    patch.height = Some((value / ratio).max(min_height));
                }
            }
            DimensionField::Height => {
                patch.height = Some(value);
                if self.aspect_ratio_locked {
                    let ratio = paneldraw_core::Size::new(panel.width, panel.height).aspect_ratio();
                    patch.width = Some((value * ratio).max(min_width));
                }
            }
            DimensionField::X => patch.x = Some(value),
            DimensionField::Y => patch.y = Some(value),
        }

        if let Some(w) = patch.width {
            patch.width = Some(w.max(min_width));
        }
        if let Some(h) = patch.height {
            patch.height = Some(h.max(min_height));
        }
        if let Some(x) = patch.x {
            patch.x = Some(x.max(0.0));
        }
        if let Some(y) = patch.y {
            patch.y = Some(y.max(0.0));
        }

        Some(patch)
    }
}
