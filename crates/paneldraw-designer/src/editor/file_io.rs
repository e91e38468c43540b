//! Layout export/import and raster export for the editor session.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};

use paneldraw_core::error::LayoutError;

use crate::canvas::CanvasConfig;
use crate::render::{self, CanvasRasterizer};

use super::EditorState;

impl EditorState {
    /// The exportable document: the full current canvas state.
    pub fn export_config(&self) -> CanvasConfig {
        self.config.clone()
    }

    /// Writes the current layout to `path` as JSON.
    pub fn save_layout(&self, path: impl AsRef<Path>) -> Result<()> {
        self.config.save_to_file(path)
    }

    /// Replaces the session wholesale with a parsed layout document.
    ///
    /// Atomic: the document is parsed first, and only a successful
    /// parse snapshots the outgoing state and applies the replacement.
    /// On error the session is untouched and the caller surfaces the
    /// failure to the user.
    pub fn import_layout(&mut self, json: &str) -> Result<(), LayoutError> {
        let config = CanvasConfig::from_json(json)?;
        self.save_state();
        self.config = config;
        self.pending_canvas_width = format!("{}", self.config.canvas_width);
        self.pending_canvas_height = format!("{}", self.config.canvas_height);
        self.reset_transient();
        info!(panels = self.config.panels.len(), "layout imported");
        Ok(())
    }

    /// Reads and imports a layout file.
    pub fn load_layout(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read layout file")?;
        self.import_layout(&content).inspect_err(|e| {
            warn!(path = %path.as_ref().display(), "layout import failed: {e}");
        })?;
        Ok(())
    }

    /// Exports the canvas as `panel-drawing.png` into `dir` through the
    /// injected rasterizer. One-shot, no cancellation path.
    pub fn export_png(
        &self,
        rasterizer: &dyn CanvasRasterizer,
        dir: impl AsRef<Path>,
    ) -> Result<PathBuf> {
        render::export_to_png(&self.config, self.theme, rasterizer, dir)
    }
}
