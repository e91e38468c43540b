//! Typed editor intents.
//!
//! Interactive surfaces emit [`EditorCommand`] values instead of
//! holding individual callbacks; a single reducer on the editor state
//! consumes them. Commands carry everything needed to apply the edit.

use uuid::Uuid;

use paneldraw_core::{Point, Size};

use crate::editor::{CanvasPreset, EditorState};
use crate::interaction::ResizeHandle;
use crate::layering::LayerAction;
use crate::model::{PanelKind, PanelStylePatch, TitleStylePatch};
use crate::property_editor::DimensionField;
use crate::render::SurfaceMeasure;

/// Every intent the editor reduces.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorCommand {
    // Panel lifecycle.
    AddPanel { kind: PanelKind },
    RemovePanel { id: Uuid },
    RemoveSelected,
    ClearPanels,
    CopySelected,
    Paste,

    // Direct manipulation.
    StartDrag { id: Uuid, pointer: Point },
    FinishDrag { pointer: Point },
    StartResize { id: Uuid, handle: ResizeHandle },
    ResizeTo { size: Size, aspect_modifier: bool },
    FinishResize,
    StartTextEdit { id: Uuid },
    CommitTextEdit,
    CancelTextEdit,

    // Selection and surfaces.
    SelectPanel { id: Uuid },
    HoverPanel { id: Uuid },
    UnhoverPanel { id: Uuid },
    OpenSidebar { id: Uuid },
    CloseSidebar,
    ClickEmptyCanvas,
    Escape,

    // Property edits.
    SetPanelDimension {
        id: Uuid,
        field: DimensionField,
        value: f64,
    },
    SetPanelStyle { id: Uuid, patch: PanelStylePatch },
    SetTitleStyle { id: Uuid, patch: TitleStylePatch },
    SetTitle { id: Uuid, title: String },
    SetText { id: Uuid, text: String },
    ToggleLock { id: Uuid },
    ToggleAspectRatioLock,
    ChangeLayer { id: Uuid, action: LayerAction },

    // History.
    Undo,
    Redo,

    // Viewport.
    ZoomIn,
    ZoomOut,
    ResetZoom,

    // Canvas settings.
    ToggleCanvasSettings,
    SetPendingCanvasWidth { input: String },
    SetPendingCanvasHeight { input: String },
    SubmitPendingCanvasSize,
    SubmitCanvasSize { width: f64, height: f64 },
    ApplyCanvasPreset { preset: CanvasPreset },
    SwapOrientation,
    SetCanvasBgColor { color: String },
    SetCanvasFgColor { color: String },
    ToggleRoundedCorners,
    ToggleGrid,
}

impl EditorState {
    /// The single reducer: applies one intent to the editor state.
    /// Placement-dependent commands consult the injected mount-surface
    /// measurement.
    pub fn apply(&mut self, command: EditorCommand, surface: &dyn SurfaceMeasure) {
        match command {
            EditorCommand::AddPanel { kind } => self.add_panel(kind, surface),
            EditorCommand::RemovePanel { id } => self.remove_panel(id),
            EditorCommand::RemoveSelected => self.remove_selected(),
            EditorCommand::ClearPanels => self.clear_panels(),
            EditorCommand::CopySelected => self.copy_selected(),
            EditorCommand::Paste => self.paste(surface),

            EditorCommand::StartDrag { id, pointer } => self.start_drag(id, pointer),
            EditorCommand::FinishDrag { pointer } => self.finish_drag(pointer),
            EditorCommand::StartResize { id, handle } => self.start_resize(id, handle),
            EditorCommand::ResizeTo {
                size,
                aspect_modifier,
            } => self.resize_to(size, aspect_modifier),
            EditorCommand::FinishResize => self.finish_resize(),
            EditorCommand::StartTextEdit { id } => self.start_text_edit(id),
            EditorCommand::CommitTextEdit => self.commit_text_edit(),
            EditorCommand::CancelTextEdit => self.cancel_text_edit(),

            EditorCommand::SelectPanel { id } => self.select_panel(id),
            EditorCommand::HoverPanel { id } => self.hover_panel(id),
            EditorCommand::UnhoverPanel { id } => self.unhover_panel(id),
            EditorCommand::OpenSidebar { id } => self.open_sidebar(id),
            EditorCommand::CloseSidebar => self.close_sidebar(),
            EditorCommand::ClickEmptyCanvas => self.click_empty_canvas(),
            EditorCommand::Escape => self.escape(),

            EditorCommand::SetPanelDimension { id, field, value } => {
                self.set_panel_dimension(id, field, value)
            }
            EditorCommand::SetPanelStyle { id, patch } => self.set_panel_style(id, patch),
            EditorCommand::SetTitleStyle { id, patch } => self.set_title_style(id, patch),
            EditorCommand::SetTitle { id, title } => self.set_title(id, &title),
            EditorCommand::SetText { id, text } => self.set_text(id, &text),
            EditorCommand::ToggleLock { id } => self.toggle_lock(id),
            EditorCommand::ToggleAspectRatioLock => {
                self.property_editor.toggle_aspect_ratio_lock()
            }
            EditorCommand::ChangeLayer { id, action } => self.change_layer(id, action),

            EditorCommand::Undo => self.undo(),
            EditorCommand::Redo => self.redo(),

            EditorCommand::ZoomIn => self.viewport.zoom_in(),
            EditorCommand::ZoomOut => self.viewport.zoom_out(),
            EditorCommand::ResetZoom => self.viewport.reset(),

            EditorCommand::ToggleCanvasSettings => self.toggle_canvas_settings(),
            EditorCommand::SetPendingCanvasWidth { input } => {
                self.set_pending_canvas_width(&input)
            }
            EditorCommand::SetPendingCanvasHeight { input } => {
                self.set_pending_canvas_height(&input)
            }
            EditorCommand::SubmitPendingCanvasSize => self.submit_pending_canvas_size(),
            EditorCommand::SubmitCanvasSize { width, height } => {
                self.submit_canvas_size(width, height)
            }
            EditorCommand::ApplyCanvasPreset { preset } => self.apply_canvas_preset(preset),
            EditorCommand::SwapOrientation => self.swap_orientation(),
            EditorCommand::SetCanvasBgColor { color } => self.set_canvas_bg_color(&color),
            EditorCommand::SetCanvasFgColor { color } => self.set_canvas_fg_color(&color),
            EditorCommand::ToggleRoundedCorners => self.toggle_rounded_corners(),
            EditorCommand::ToggleGrid => self.toggle_grid(),
        }
    }
}
