//! SVG rendering of the canvas.
//!
//! Produces a complete SVG document for the current layout: background,
//! optional grid, and every panel in ascending z order. The document is
//! what the raster-export collaborator consumes, and doubles as a
//! vector export in its own right.

use std::fmt::Write as _;

use paneldraw_core::constants::GRID_STEP;
use paneldraw_core::Theme;

use crate::canvas::CanvasConfig;
use crate::model::{BorderStyle, FontStyle, Panel, PanelKind, TextAlign, TextTransform};

/// Inset between the panel box and the shape outline.
const SHAPE_PADDING: f64 = 5.0;

/// Corner radius of the canvas background when rounded corners are on.
const CANVAS_CORNER_RADIUS: f64 = 12.0;

/// Renders the full canvas to an SVG document string.
pub fn render_svg(config: &CanvasConfig, theme: Theme) -> String {
    let mut svg = String::new();
    let w = config.canvas_width;
    let h = config.canvas_height;

    let _ = write!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">"
    );

    let rx = if config.rounded_corners {
        CANVAS_CORNER_RADIUS
    } else {
        0.0
    };
    let _ = write!(
        svg,
        "<rect x=\"0\" y=\"0\" width=\"{w}\" height=\"{h}\" rx=\"{rx}\" fill=\"{}\"/>",
        escape_xml(&config.canvas_bg_color)
    );

    if config.show_grid {
        render_grid(&mut svg, w, h);
    }

    for panel in config.panels_by_z() {
        render_panel(&mut svg, panel, theme);
    }

    svg.push_str("</svg>");
    svg
}

fn render_grid(svg: &mut String, width: f64, height: f64) {
    let _ = write!(
        svg,
        "<defs><pattern id=\"grid\" width=\"{s}\" height=\"{s}\" patternUnits=\"userSpaceOnUse\">\
         <path d=\"M {s} 0 L 0 0 0 {s}\" fill=\"none\" stroke=\"#E5E7EB\" stroke-width=\"1\"/>\
         </pattern></defs>\
         <rect x=\"0\" y=\"0\" width=\"{width}\" height=\"{height}\" fill=\"url(#grid)\"/>",
        s = GRID_STEP
    );
}

fn render_panel(svg: &mut String, panel: &Panel, theme: Theme) {
    let style = &panel.style;
    let rotation = style.rotation();
    let cx = panel.width / 2.0;
    let cy = panel.height / 2.0;

    let _ = write!(
        svg,
        "<g transform=\"translate({} {}) rotate({rotation} {cx} {cy})\" opacity=\"{}\">",
        panel.x,
        panel.y,
        style.opacity()
    );

    if panel.kind == PanelKind::Text {
        render_text_body(svg, panel, theme);
    } else {
        let fill = style
            .background_color
            .resolve(theme.default_fill())
            .unwrap_or("none");
        let stroke = style
            .border_color
            .resolve(theme.default_border())
            .unwrap_or("none");

        let _ = write!(
            svg,
            "<path d=\"{}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\"",
            shape_path(panel.kind, panel.width, panel.height),
            escape_xml(fill),
            escape_xml(stroke),
            style.border_width()
        );
        if let Some(dashes) = dash_array(style.border_style(), style.border_width()) {
            let _ = write!(svg, " stroke-dasharray=\"{dashes}\"");
        }
        if style.border_style() == BorderStyle::Dotted {
            svg.push_str(" stroke-linecap=\"round\"");
        }
        svg.push_str("/>");

        render_title(svg, panel, theme);
    }

    svg.push_str("</g>");
}

fn render_title(svg: &mut String, panel: &Panel, theme: Theme) {
    if panel.title.is_empty() {
        return;
    }
    let title_style = &panel.title_style;
    let (x, anchor) = match title_style.text_align() {
        TextAlign::Left => (30.0, "start"),
        TextAlign::Center => (panel.width / 2.0, "middle"),
        TextAlign::Right => (panel.width - 30.0, "end"),
    };
    let text = apply_text_transform(&panel.title, title_style.text_transform);

    let _ = write!(
        svg,
        "<text x=\"{x}\" y=\"{}\" text-anchor=\"{anchor}\" dominant-baseline=\"middle\" \
         font-size=\"{}\" fill=\"{}\" opacity=\"{}\"{}>{}</text>",
        panel.height / 2.0,
        title_style.font_size(),
        escape_xml(title_style.text_color(theme)),
        title_style.opacity(),
        font_style_attrs(title_style.font_style),
        escape_xml(&text)
    );
}

fn render_text_body(svg: &mut String, panel: &Panel, theme: Theme) {
    let title_style = &panel.title_style;
    let content = panel.text_content.as_deref().unwrap_or(&panel.title);
    let text = apply_text_transform(content, title_style.text_transform);
    let font_size = title_style.font_size();
    let line_height = font_size * 1.2;

    let _ = write!(
        svg,
        "<text x=\"10\" y=\"10\" font-size=\"{font_size}\" fill=\"{}\" opacity=\"{}\"{}>",
        escape_xml(title_style.text_color(theme)),
        title_style.opacity(),
        font_style_attrs(title_style.font_style),
    );
    for (i, line) in text.lines().enumerate() {
        let _ = write!(
            svg,
            "<tspan x=\"10\" dy=\"{}\">{}</tspan>",
            if i == 0 { font_size } else { line_height },
            escape_xml(line)
        );
    }
    svg.push_str("</text>");
}

fn font_style_attrs(font_style: Option<FontStyle>) -> &'static str {
    match font_style {
        Some(FontStyle::Bold) => " font-weight=\"bold\"",
        Some(FontStyle::Italic) => " font-style=\"italic\"",
        _ => "",
    }
}

/// Path data for a shape kind within a `width` x `height` box.
pub fn shape_path(kind: PanelKind, width: f64, height: f64) -> String {
    let p = SHAPE_PADDING;
    let w = width;
    let h = height;
    let adj_w = w - p * 2.0;
    let adj_h = h - p * 2.0;
    match kind {
        PanelKind::Rectangle => format!("M{p},{p} h{adj_w} v{adj_h} h{} z", -adj_w),
        PanelKind::Circle => {
            let rx = adj_w / 2.0;
            let ry = adj_h / 2.0;
            format!(
                "M{},{p} a{rx},{ry} 0 1,0 0,{adj_h} a{rx},{ry} 0 1,0 0,{} z",
                w / 2.0,
                -adj_h
            )
        }
        PanelKind::Triangle => format!(
            "M{p},{} L{},{p} L{},{} z",
            h - p,
            w / 2.0,
            w - p,
            h - p
        ),
        PanelKind::Star => {
            let points = [
                (w / 2.0, p),
                (w * 0.6, h * 0.3),
                (w - p, h * 0.4),
                (w * 0.7, h * 0.6),
                (w * 0.8, h - p),
                (w / 2.0, h * 0.7),
                (w * 0.2, h - p),
                (w * 0.3, h * 0.6),
                (p, h * 0.4),
                (w * 0.4, h * 0.3),
            ];
            let mut d = format!("M{},{}", points[0].0, points[0].1);
            for (x, y) in &points[1..] {
                let _ = write!(d, " L{x},{y}");
            }
            d.push_str(" z");
            d
        }
        PanelKind::Diamond => format!(
            "M{},{p} L{},{} L{},{} L{p},{} z",
            w / 2.0,
            w - p,
            h / 2.0,
            w / 2.0,
            h - p,
            h / 2.0
        ),
        PanelKind::Line => format!("M{p},{} h{adj_w}", h / 2.0),
        PanelKind::Text => String::new(),
    }
}

/// Dash pattern for a border style, derived from the stroke width.
fn dash_array(style: BorderStyle, border_width: f64) -> Option<String> {
    match style {
        BorderStyle::Solid => None,
        BorderStyle::Dashed => Some(format!("{},{}", border_width * 2.0, border_width * 2.0)),
        BorderStyle::Dotted => Some(format!("{},{}", border_width / 5.0, border_width * 2.0)),
    }
}

/// Applies a title case transform.
pub fn apply_text_transform(text: &str, transform: Option<TextTransform>) -> String {
    match transform {
        None => text.to_string(),
        Some(TextTransform::Uppercase) => text.to_uppercase(),
        Some(TextTransform::Lowercase) => text.to_lowercase(),
        Some(TextTransform::Capitalize) => text
            .split_inclusive(char::is_whitespace)
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                    None => String::new(),
                }
            })
            .collect(),
    }
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
