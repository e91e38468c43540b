//! Editor state: owns the canvas aggregate and every transient concern
//! around it, and wires history, interaction, layering, and property
//! edits together.
//!
//! This module is split into submodules:
//! - `history`: snapshot save, undo/redo
//! - `panels`: panel creation, removal, clipboard
//! - `transforms`: drag, resize, dimension edits
//! - `properties`: style, title, and lock edits
//! - `layers`: z-order changes
//! - `canvas_settings`: canvas size, presets, colors, flags
//! - `file_io`: layout export/import, PNG export

mod canvas_settings;
mod file_io;
mod history;
mod layers;
mod panels;
mod properties;
mod transforms;

pub use canvas_settings::CanvasPreset;

use uuid::Uuid;

use paneldraw_core::Theme;

use crate::canvas::CanvasConfig;
use crate::history::HistoryStack;
use crate::interaction::InteractionController;
use crate::model::Panel;
use crate::property_editor::PropertyEditor;
use crate::viewport::Viewport;

/// The canvas orchestrator: aggregate state plus transient
/// selection/editing state. Transient fields are never snapshotted and
/// reset whenever a snapshot is restored.
#[derive(Debug, Clone)]
pub struct EditorState {
    /// The document. Unit of undo/redo and of export/import.
    pub config: CanvasConfig,
    /// Theme value threaded into rendering.
    pub theme: Theme,

    // Transient state.
    pub selected_panel: Option<Uuid>,
    pub hovered_panel: Option<Uuid>,
    pub copied_panel: Option<Panel>,
    pub sidebar_open: bool,
    pub sidebar_panel: Option<Uuid>,
    pub editing_canvas: bool,
    pub pending_canvas_width: String,
    pub pending_canvas_height: String,
    pub pointer_on_canvas: bool,

    pub viewport: Viewport,
    pub interaction: InteractionController,
    pub property_editor: PropertyEditor,
    pub(crate) history: HistoryStack,
}

impl EditorState {
    /// Creates a fresh editor session over an empty default canvas.
    pub fn new() -> Self {
        let config = CanvasConfig::default();
        Self {
            pending_canvas_width: format!("{}", config.canvas_width),
            pending_canvas_height: format!("{}", config.canvas_height),
            config,
            theme: Theme::default(),
            selected_panel: None,
            hovered_panel: None,
            copied_panel: None,
            sidebar_open: false,
            sidebar_panel: None,
            editing_canvas: false,
            pointer_on_canvas: false,
            viewport: Viewport::new(),
            interaction: InteractionController::new(),
            property_editor: PropertyEditor::new(),
            history: HistoryStack::new(),
        }
    }

    pub fn with_theme(theme: Theme) -> Self {
        Self {
            theme,
            ..Self::new()
        }
    }

    /// Panel shown in the property sidebar, if any.
    pub fn sidebar_panel_data(&self) -> Option<&Panel> {
        self.sidebar_panel.and_then(|id| self.config.panel(id))
    }

    /// Whether viewport pan/zoom gestures are accepted right now.
    /// Suspended while a panel is being dragged/resized, hovered, or
    /// text-edited, so canvas gestures cannot race a panel gesture.
    pub fn viewport_enabled(&self) -> bool {
        !self.interaction.is_interacting()
            && self.hovered_panel.is_none()
            && self.interaction.editing_panel().is_none()
    }

    // --- selection and hover ---

    pub fn select_panel(&mut self, id: Uuid) {
        self.selected_panel = Some(id);
    }

    pub fn hover_panel(&mut self, id: Uuid) {
        self.hovered_panel = Some(id);
    }

    pub fn unhover_panel(&mut self, id: Uuid) {
        if self.hovered_panel == Some(id) {
            self.hovered_panel = None;
        }
    }

    /// Toggles the property sidebar for `id`, selecting the panel.
    pub fn open_sidebar(&mut self, id: Uuid) {
        if self.sidebar_open && self.sidebar_panel == Some(id) {
            self.sidebar_open = false;
            self.sidebar_panel = None;
        } else {
            self.sidebar_panel = Some(id);
            self.sidebar_open = true;
        }
        self.selected_panel = Some(id);
    }

    pub fn close_sidebar(&mut self) {
        self.sidebar_open = false;
        self.sidebar_panel = None;
    }

    /// A click on empty canvas area: clears selection and closes any
    /// open editing surfaces.
    pub fn click_empty_canvas(&mut self) {
        self.selected_panel = None;
        self.close_sidebar();
        self.editing_canvas = false;
    }

    /// Escape: leaves canvas-settings editing and closes the sidebar.
    pub fn escape(&mut self) {
        if self.editing_canvas {
            self.editing_canvas = false;
        }
        self.sidebar_open = false;
    }

    pub fn set_pointer_on_canvas(&mut self, on_canvas: bool) {
        self.pointer_on_canvas = on_canvas;
    }

    /// Drops all per-panel transient references. Called after any
    /// snapshot restore or wholesale document replacement.
    pub(crate) fn reset_transient(&mut self) {
        self.selected_panel = None;
        self.hovered_panel = None;
        self.interaction = InteractionController::new();
        self.sidebar_open = false;
        self.sidebar_panel = None;
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}
