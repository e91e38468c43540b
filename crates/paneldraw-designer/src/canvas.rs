//! Canvas aggregate: the full document state that is snapshotted for
//! undo/redo and written out on export.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use paneldraw_core::constants::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH};

use crate::model::Panel;

fn default_canvas_width() -> f64 {
    DEFAULT_CANVAS_WIDTH
}

fn default_canvas_height() -> f64 {
    DEFAULT_CANVAS_HEIGHT
}

fn default_bg_color() -> String {
    "#ffffff".to_string()
}

fn default_fg_color() -> String {
    "#000000".to_string()
}

fn default_rounded() -> bool {
    true
}

/// The aggregate document: panels plus canvas-level settings.
///
/// Collection order carries no meaning; the z-index attribute decides
/// render order. This struct is the unit of undo/redo snapshotting and
/// the export/import document (field names are the wire format).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasConfig {
    #[serde(default)]
    pub panels: Vec<Panel>,
    #[serde(default = "default_canvas_width")]
    pub canvas_width: f64,
    #[serde(default = "default_canvas_height")]
    pub canvas_height: f64,
    #[serde(default = "default_bg_color")]
    pub canvas_bg_color: String,
    #[serde(default = "default_fg_color")]
    pub canvas_fg_color: String,
    #[serde(default = "default_rounded")]
    pub rounded_corners: bool,
    #[serde(default)]
    pub show_grid: bool,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            panels: Vec::new(),
            canvas_width: default_canvas_width(),
            canvas_height: default_canvas_height(),
            canvas_bg_color: default_bg_color(),
            canvas_fg_color: default_fg_color(),
            rounded_corners: default_rounded(),
            show_grid: false,
        }
    }
}

impl CanvasConfig {
    pub fn panel(&self, id: Uuid) -> Option<&Panel> {
        self.panels.iter().find(|p| p.id == id)
    }

    pub fn panel_mut(&mut self, id: Uuid) -> Option<&mut Panel> {
        self.panels.iter_mut().find(|p| p.id == id)
    }

    /// Panels in ascending z order (render order, back to front).
    pub fn panels_by_z(&self) -> Vec<&Panel> {
        let mut ordered: Vec<&Panel> = self.panels.iter().collect();
        ordered.sort_by_key(|p| p.z_index);
        ordered
    }
}
