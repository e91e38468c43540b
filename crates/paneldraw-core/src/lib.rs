//! # PanelDraw Core
//!
//! Core types, constants, and errors for the PanelDraw editor.
//! Provides the fundamental abstractions shared by every layer:
//! geometry primitives, editor-wide limits, error types, and the
//! theme value threaded through rendering.

pub mod constants;
pub mod error;
pub mod geometry;
pub mod theme;

pub use error::{Error, LayoutError, Result};
pub use geometry::{Point, Rect, Size};
pub use theme::Theme;
