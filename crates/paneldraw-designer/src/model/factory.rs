//! Panel construction: fresh panels and clipboard clones.

use uuid::Uuid;

use paneldraw_core::Rect;

use super::{
    max_z_index, BorderStyle, ColorField, FontStyle, Panel, PanelKind, PanelStyle, TextAlign,
    TitleStyle,
};

/// Default size of a freshly created panel, by kind.
fn default_size(kind: PanelKind, scale: f64) -> (f64, f64) {
    match kind {
        PanelKind::Line => (200.0 / scale, 20.0 / scale),
        PanelKind::Text => (200.0 / scale, 50.0 / scale),
        _ => (400.0 / scale, 400.0 / scale),
    }
}

fn default_style() -> PanelStyle {
    PanelStyle {
        background_color: ColorField::Value("#FFFFFF".to_string()),
        border_color: ColorField::Value("#D1D5DB".to_string()),
        border_width: Some(2.0),
        border_style: Some(BorderStyle::Solid),
        rotate: Some(0.0),
        opacity: Some(1.0),
        locked: Some(false),
    }
}

fn default_title_style() -> TitleStyle {
    TitleStyle {
        text_color: Some("#000000".to_string()),
        font_size: Some(14.0),
        font_style: Some(FontStyle::Normal),
        text_align: Some(TextAlign::Center),
        text_transform: None,
        opacity: Some(1.0),
    }
}

/// Appends a fresh panel of `kind` to `panels`.
///
/// Placement derives from the measured mount-surface rect; when the
/// surface cannot be measured the collection is returned unchanged
/// (best-effort, the caller does not treat this as a failure).
pub fn create_panel(
    mut panels: Vec<Panel>,
    kind: PanelKind,
    surface: Option<Rect>,
    scale: f64,
) -> Vec<Panel> {
    let Some(rect) = surface else {
        return panels;
    };

    let (width, height) = default_size(kind, scale);
    let title = if kind == PanelKind::Text {
        "Text".to_string()
    } else {
        String::new()
    };
    let text_content = (kind == PanelKind::Text).then(|| "Text".to_string());

    panels.push(Panel {
        id: Uuid::new_v4(),
        x: rect.x / 2.0 + 2.0,
        y: rect.y + 20.0,
        width,
        height,
        z_index: max_z_index(&panels) + 1,
        kind,
        title,
        text_content,
        style: default_style(),
        title_style: default_title_style(),
    });
    panels
}

/// Appends a clone of `source` to `panels`, centered in the mount
/// surface, with a fresh id and the next z-index. Silent no-op without
/// a source panel or a measurable surface.
pub fn clone_panel(
    mut panels: Vec<Panel>,
    source: Option<&Panel>,
    surface: Option<Rect>,
    scale: f64,
) -> Vec<Panel> {
    let (Some(source), Some(rect)) = (source, surface) else {
        return panels;
    };

    let mut copy = source.clone();
    copy.id = Uuid::new_v4();
    copy.x = (rect.width / 2.0 - source.width / 2.0) / scale;
    copy.y = (rect.height / 2.0 - source.height / 2.0) / scale;
    copy.z_index = max_z_index(&panels) + 1;
    panels.push(copy);
    panels
}
