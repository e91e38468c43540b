//! Canvas-level settings: dimensions, presets, orientation, colors,
//! and display flags.

use tracing::debug;

use paneldraw_core::constants::MIN_CANVAS_SIZE;

use super::EditorState;

/// Predefined canvas sizes offered by the settings form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasPreset {
    A4,
    A3,
    TwoK,
    SixteenNine,
    Square,
    ThreeByFour,
}

impl CanvasPreset {
    /// Width/height of the preset in canvas units.
    pub fn dimensions(&self) -> (f64, f64) {
        match self {
            CanvasPreset::A4 => (595.0, 842.0),
            CanvasPreset::A3 => (842.0, 1191.0),
            CanvasPreset::TwoK => (2048.0, 1080.0),
            CanvasPreset::SixteenNine => (1920.0, 1080.0),
            CanvasPreset::Square => (1080.0, 1080.0),
            CanvasPreset::ThreeByFour => (810.0, 1080.0),
        }
    }
}

impl EditorState {
    /// Toggles the canvas-settings form.
    pub fn toggle_canvas_settings(&mut self) {
        self.editing_canvas = !self.editing_canvas;
    }

    /// Records the width input string without committing it.
    pub fn set_pending_canvas_width(&mut self, input: &str) {
        self.pending_canvas_width = input.to_string();
    }

    /// Records the height input string without committing it.
    pub fn set_pending_canvas_height(&mut self, input: &str) {
        self.pending_canvas_height = input.to_string();
    }

    /// Commits an explicit canvas size. Dimensions that are not
    /// positive numbers of at least the minimum edge are rejected
    /// silently; the form closes either way.
    pub fn submit_canvas_size(&mut self, width: f64, height: f64) {
        if width.is_finite()
            && height.is_finite()
            && width >= MIN_CANVAS_SIZE
            && height >= MIN_CANVAS_SIZE
        {
            self.save_state();
            self.config.canvas_width = width;
            self.config.canvas_height = height;
            self.pending_canvas_width = format!("{width}");
            self.pending_canvas_height = format!("{height}");
        } else {
            debug!(width, height, "rejecting canvas size below minimum");
        }
        self.editing_canvas = false;
    }

    /// Submits whatever is in the pending input fields (Enter in the
    /// form). Non-numeric input commits nothing.
    pub fn submit_pending_canvas_size(&mut self) {
        let (Ok(width), Ok(height)) = (
            self.pending_canvas_width.trim().parse::<f64>(),
            self.pending_canvas_height.trim().parse::<f64>(),
        ) else {
            debug!("ignoring non-numeric canvas size input");
            return;
        };
        self.submit_canvas_size(width, height);
    }

    /// Applies a preset canvas size.
    pub fn apply_canvas_preset(&mut self, preset: CanvasPreset) {
        let (width, height) = preset.dimensions();
        self.submit_canvas_size(width, height);
    }

    /// Swaps orientation by transposing width and height.
    pub fn swap_orientation(&mut self) {
        let width = self.config.canvas_width;
        let height = self.config.canvas_height;
        self.submit_canvas_size(height, width);
    }

    /// True when the canvas is taller than wide.
    pub fn is_portrait(&self) -> bool {
        self.config.canvas_height > self.config.canvas_width
    }

    // Canvas colors and display flags mutate without a snapshot; they
    // are still captured inside snapshots taken for other actions.

    pub fn set_canvas_bg_color(&mut self, color: &str) {
        self.config.canvas_bg_color = color.to_string();
    }

    pub fn set_canvas_fg_color(&mut self, color: &str) {
        self.config.canvas_fg_color = color.to_string();
    }

    pub fn toggle_rounded_corners(&mut self) {
        self.config.rounded_corners = !self.config.rounded_corners;
    }

    pub fn toggle_grid(&mut self) {
        self.config.show_grid = !self.config.show_grid;
    }
}
