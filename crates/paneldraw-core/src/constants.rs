//! Editor-wide constants.
//!
//! Size floors, snapping, canvas limits, and viewport parameters used
//! across the designer crates. All lengths are in canvas units.

/// Minimum width of any panel, enforced on resize.
pub const MIN_PANEL_WIDTH: f64 = 100.0;

/// Minimum height of a shape panel, enforced on resize.
pub const MIN_SHAPE_HEIGHT: f64 = 100.0;

/// Minimum height of a text panel, enforced on resize.
pub const MIN_TEXT_HEIGHT: f64 = 50.0;

/// Grid step used for drag snapping while the grid is shown.
pub const GRID_STEP: f64 = 50.0;

/// Pointer travel at or below this distance is a click, not a drag.
pub const DRAG_CLICK_THRESHOLD: f64 = 1.0;

/// Smallest accepted canvas edge length.
pub const MIN_CANVAS_SIZE: f64 = 200.0;

/// Initial canvas width.
pub const DEFAULT_CANVAS_WIDTH: f64 = 1280.0;

/// Initial canvas height.
pub const DEFAULT_CANVAS_HEIGHT: f64 = 720.0;

/// Default title font size in canvas units.
pub const DEFAULT_TITLE_FONT_SIZE: f64 = 14.0;

/// Raster export scale factor.
pub const PNG_EXPORT_SCALE: f64 = 2.0;

/// Lowest viewport zoom.
pub const MIN_ZOOM: f64 = 0.4;

/// Highest viewport zoom.
pub const MAX_ZOOM: f64 = 4.0;

/// Zoom applied on a fresh viewport and on zoom reset.
pub const DEFAULT_ZOOM: f64 = 0.8;

/// Zoom change per zoom-in/zoom-out step.
pub const ZOOM_STEP: f64 = 0.2;
