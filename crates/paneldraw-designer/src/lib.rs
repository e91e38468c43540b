//! # PanelDraw Designer
//!
//! The diagram-editor core: panels on a fixed-size canvas, edited by
//! direct manipulation and a structured property editor, with linear
//! undo/redo, z-order layering, and JSON/PNG export.
//!
//! ## Architecture
//!
//! The editor operates in layers:
//!
//! ```text
//! EditorState (orchestrator: document + transient state)
//!   ├── CanvasConfig (aggregate, snapshot and export unit)
//!   │     └── Panel (shape/text entity with styles)
//!   ├── HistoryStack (snapshot undo/redo)
//!   ├── InteractionController (drag/resize/text gestures)
//!   ├── PropertyEditor (validated dimension edits)
//!   └── Viewport (pan/zoom)
//!
//! Intents (EditorCommand, reduced by EditorState::apply)
//!   └── input (keyboard dispatch)
//!
//! Boundaries
//!   ├── serialization (layout JSON)
//!   ├── svg_renderer (canvas -> SVG)
//!   └── render (SurfaceMeasure / CanvasRasterizer collaborators)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use paneldraw_designer::{EditorCommand, EditorState};
//! use paneldraw_designer::model::PanelKind;
//!
//! let mut editor = EditorState::new();
//! editor.apply(EditorCommand::AddPanel { kind: PanelKind::Rectangle }, &surface);
//! editor.apply(EditorCommand::Undo, &surface);
//! ```

pub mod canvas;
pub mod commands;
pub mod editor;
pub mod history;
pub mod input;
pub mod interaction;
pub mod layering;
pub mod model;
pub mod property_editor;
pub mod render;
pub mod serialization;
pub mod svg_renderer;
pub mod viewport;

pub use canvas::CanvasConfig;
pub use commands::EditorCommand;
pub use editor::{CanvasPreset, EditorState};
pub use history::HistoryStack;
pub use input::{dispatch, Key, KeyEvent};
pub use interaction::{DragOutcome, InteractionController, ResizeHandle};
pub use layering::{can_reorder, reorder, LayerAction};
pub use model::{
    ColorField, Panel, PanelKind, PanelStyle, PanelStylePatch, TitleStyle, TitleStylePatch,
};
pub use property_editor::{DimensionField, DimensionPatch, PropertyEditor};
pub use render::{CanvasRasterizer, SurfaceMeasure, PNG_EXPORT_NAME};
pub use serialization::LAYOUT_EXPORT_NAME;
pub use svg_renderer::render_svg;
pub use viewport::Viewport;
