//! Rendering collaborators and raster export.
//!
//! The editor core does not rasterize pixels or measure on-screen
//! elements itself; both capabilities are injected. PNG export renders
//! the canvas to SVG, hands it to the rasterizer at 2x scale, and
//! encodes the returned pixel buffer to `panel-drawing.png`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use image::RgbaImage;
use tracing::info;

use paneldraw_core::constants::PNG_EXPORT_SCALE;
use paneldraw_core::{Rect, Theme};

use crate::canvas::CanvasConfig;
use crate::svg_renderer::render_svg;

/// File name of an exported raster image.
pub const PNG_EXPORT_NAME: &str = "panel-drawing.png";

/// Measures the on-screen mount surface of the canvas. Placement math
/// for new and pasted panels depends on this rect; when it cannot be
/// measured those operations silently do nothing.
pub trait SurfaceMeasure {
    fn canvas_rect(&self) -> Option<Rect>;
}

/// Rasterizes an SVG element subtree into a pixel buffer.
pub trait CanvasRasterizer {
    fn rasterize(&self, svg: &str, width: u32, height: u32) -> Result<RgbaImage>;
}

/// Exports the canvas as a PNG into `dir`, returning the written path.
///
/// One-shot: there is no cancellation, and a failure leaves no partial
/// artifact behind beyond what the filesystem write got to.
pub fn export_to_png(
    config: &CanvasConfig,
    theme: Theme,
    rasterizer: &dyn CanvasRasterizer,
    dir: impl AsRef<Path>,
) -> Result<PathBuf> {
    let svg = render_svg(config, theme);
    let width = (config.canvas_width * PNG_EXPORT_SCALE).round() as u32;
    let height = (config.canvas_height * PNG_EXPORT_SCALE).round() as u32;

    let pixels = rasterizer
        .rasterize(&svg, width, height)
        .context("Failed to rasterize canvas")?;

    let path = dir.as_ref().join(PNG_EXPORT_NAME);
    pixels
        .save_with_format(&path, image::ImageFormat::Png)
        .context("Failed to write PNG export")?;

    info!(path = %path.display(), width, height, "canvas exported");
    Ok(path)
}
