//! Viewport pan/zoom state for canvas navigation.
//!
//! Screen coordinates have the origin at the top-left with +Y down,
//! the same orientation as canvas coordinates; the transform is a pan
//! offset plus a uniform zoom.

use paneldraw_core::constants::{DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM, ZOOM_STEP};
use paneldraw_core::Point;

/// The viewport transformation state (zoom and pan).
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    zoom: f64,
    pan_x: f64,
    pan_y: f64,
}

impl Viewport {
    pub fn new() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            pan_x: 0.0,
            pan_y: 0.0,
        }
    }

    /// Current zoom level (1.0 = 100%).
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Sets the zoom level, constrained to the supported range.
    pub fn set_zoom(&mut self, zoom: f64) {
        if (MIN_ZOOM..=MAX_ZOOM).contains(&zoom) {
            self.zoom = zoom;
        }
    }

    /// Zooms in by one step, saturating at the upper bound.
    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom + ZOOM_STEP).min(MAX_ZOOM);
    }

    /// Zooms out by one step, saturating at the lower bound.
    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom - ZOOM_STEP).max(MIN_ZOOM);
    }

    pub fn pan_x(&self) -> f64 {
        self.pan_x
    }

    pub fn pan_y(&self) -> f64 {
        self.pan_y
    }

    pub fn set_pan(&mut self, x: f64, y: f64) {
        self.pan_x = x;
        self.pan_y = y;
    }

    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Sets the full transform in one call.
    pub fn set_transform(&mut self, pan_x: f64, pan_y: f64, zoom: f64) {
        self.pan_x = pan_x;
        self.pan_y = pan_y;
        self.set_zoom(zoom);
    }

    /// Resets to the initial transform (origin pan, default zoom).
    pub fn reset(&mut self) {
        self.pan_x = 0.0;
        self.pan_y = 0.0;
        self.zoom = DEFAULT_ZOOM;
    }

    /// Converts screen coordinates to canvas coordinates.
    pub fn screen_to_canvas(&self, screen_x: f64, screen_y: f64) -> Point {
        Point::new(
            (screen_x - self.pan_x) / self.zoom,
            (screen_y - self.pan_y) / self.zoom,
        )
    }

    /// Converts canvas coordinates to screen coordinates.
    pub fn canvas_to_screen(&self, canvas_x: f64, canvas_y: f64) -> (f64, f64) {
        (
            canvas_x * self.zoom + self.pan_x,
            canvas_y * self.zoom + self.pan_y,
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Viewport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Zoom: {:.2}x | Pan: ({:.1}, {:.1})",
            self.zoom, self.pan_x, self.pan_y
        )
    }
}
