//! Serialization and deserialization for panel layout files.
//!
//! The layout document is the [`CanvasConfig`] aggregate itself,
//! written as pretty-printed JSON. Import tolerates any subset of
//! fields being absent (missing fields take the documented defaults)
//! and rejects malformed or structurally invalid content without
//! touching editor state.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use paneldraw_core::error::LayoutError;

use crate::canvas::CanvasConfig;

/// Default file name for an exported layout.
pub const LAYOUT_EXPORT_NAME: &str = "panel-layout.json";

impl CanvasConfig {
    /// Serializes the layout to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, LayoutError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses a layout document. Absent fields take their defaults;
    /// anything that is not a layout object is rejected.
    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        let config: CanvasConfig = serde_json::from_str(json).inspect_err(|e| {
            warn!("rejecting configuration import: {e}");
        })?;
        Ok(config)
    }

    /// Writes the layout to `path` as JSON.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = self
            .to_json()
            .context("Failed to serialize panel layout")?;
        std::fs::write(path.as_ref(), json).context("Failed to write layout file")?;
        debug!(path = %path.as_ref().display(), "layout exported");
        Ok(())
    }

    /// Reads a layout from `path`.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read layout file")?;
        let config = Self::from_json(&content).context("Failed to parse layout file")?;
        Ok(config)
    }
}
