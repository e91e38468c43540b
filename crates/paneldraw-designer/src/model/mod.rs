//! Panel model: the placeable entity and its style attributes.

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use paneldraw_core::constants::{MIN_PANEL_WIDTH, MIN_SHAPE_HEIGHT, MIN_TEXT_HEIGHT};
use paneldraw_core::Theme;

mod factory;

pub use factory::{clone_panel, create_panel};

/// The closed set of panel kinds. Not extensible at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelKind {
    Rectangle,
    Circle,
    Triangle,
    Star,
    Diamond,
    Line,
    Text,
}

impl PanelKind {
    /// Width floor enforced on resize.
    pub fn min_width(&self) -> f64 {
        MIN_PANEL_WIDTH
    }

    /// Height floor enforced on resize. Text panels allow a shorter box.
    pub fn min_height(&self) -> f64 {
        match self {
            PanelKind::Text => MIN_TEXT_HEIGHT,
            _ => MIN_SHAPE_HEIGHT,
        }
    }

    /// Whether shift-resize keeps the original aspect ratio for this kind.
    pub fn aspect_lockable(&self) -> bool {
        !matches!(self, PanelKind::Line | PanelKind::Text)
    }
}

impl std::fmt::Display for PanelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PanelKind::Rectangle => "rectangle",
            PanelKind::Circle => "circle",
            PanelKind::Triangle => "triangle",
            PanelKind::Star => "star",
            PanelKind::Diamond => "diamond",
            PanelKind::Line => "line",
            PanelKind::Text => "text",
        };
        write!(f, "{}", name)
    }
}

/// A color field with three states: unset (falls back to the theme
/// default at render time), explicitly cleared (`none` - no paint), or
/// a concrete value.
///
/// Serializes as an optional field: unset fields are skipped, cleared
/// fields are `null`, values are strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ColorField {
    #[default]
    Unset,
    None,
    Value(String),
}

impl ColorField {
    pub fn is_unset(&self) -> bool {
        matches!(self, ColorField::Unset)
    }

    /// Resolves to a paintable color, or `None` when paint is
    /// explicitly disabled.
    pub fn resolve<'a>(&'a self, default: &'a str) -> Option<&'a str> {
        match self {
            ColorField::Unset => Some(default),
            ColorField::None => None,
            ColorField::Value(c) => Some(c),
        }
    }
}

impl From<&str> for ColorField {
    fn from(value: &str) -> Self {
        ColorField::Value(value.to_string())
    }
}

impl Serialize for ColorField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            // Unset is normally skipped at the field level; emit null
            // if it reaches here anyway.
            ColorField::Unset | ColorField::None => serializer.serialize_none(),
            ColorField::Value(c) => serializer.serialize_str(c),
        }
    }
}

impl<'de> Deserialize<'de> for ColorField {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<String>::deserialize(deserializer)? {
            Some(c) => ColorField::Value(c),
            None => ColorField::None,
        })
    }
}

/// Border dash pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    Solid,
    Dashed,
    Dotted,
}

/// Title font style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    Normal,
    Bold,
    Italic,
}

/// Title horizontal alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Title case transform. An absent transform means "as typed".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextTransform {
    Uppercase,
    Lowercase,
    Capitalize,
}

/// Visual style of a panel body. Every field is optional; unset fields
/// resolve to render-time defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelStyle {
    #[serde(default, skip_serializing_if = "ColorField::is_unset")]
    pub background_color: ColorField,
    #[serde(default, skip_serializing_if = "ColorField::is_unset")]
    pub border_color: ColorField,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_style: Option<BorderStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
}

impl PanelStyle {
    pub fn is_locked(&self) -> bool {
        self.locked.unwrap_or(false)
    }

    pub fn rotation(&self) -> f64 {
        self.rotate.unwrap_or(0.0)
    }

    pub fn opacity(&self) -> f64 {
        self.opacity.unwrap_or(1.0)
    }

    pub fn border_width(&self) -> f64 {
        self.border_width.unwrap_or(0.0)
    }

    pub fn border_style(&self) -> BorderStyle {
        self.border_style.unwrap_or(BorderStyle::Solid)
    }

    /// Merges the set fields of `patch` into this style.
    pub fn apply_patch(&mut self, patch: &PanelStylePatch) {
        if let Some(c) = &patch.background_color {
            self.background_color = c.clone();
        }
        if let Some(c) = &patch.border_color {
            self.border_color = c.clone();
        }
        if let Some(w) = patch.border_width {
            self.border_width = Some(w);
        }
        if let Some(s) = patch.border_style {
            self.border_style = Some(s);
        }
        if let Some(r) = patch.rotate {
            self.rotate = Some(r);
        }
        if let Some(o) = patch.opacity {
            self.opacity = Some(o);
        }
        if let Some(l) = patch.locked {
            self.locked = Some(l);
        }
    }
}

/// A partial [`PanelStyle`] edit. Each set field overwrites the
/// corresponding style field; everything else is left alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PanelStylePatch {
    pub background_color: Option<ColorField>,
    pub border_color: Option<ColorField>,
    pub border_width: Option<f64>,
    pub border_style: Option<BorderStyle>,
    pub rotate: Option<f64>,
    pub opacity: Option<f64>,
    pub locked: Option<bool>,
}

impl PanelStylePatch {
    /// True when the patch touches nothing but the lock flag.
    pub fn is_lock_only(&self) -> bool {
        self.locked.is_some()
            && self.background_color.is_none()
            && self.border_color.is_none()
            && self.border_width.is_none()
            && self.border_style.is_none()
            && self.rotate.is_none()
            && self.opacity.is_none()
    }
}

/// Visual style of a panel title (and of a text panel's body).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_style: Option<FontStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_transform: Option<TextTransform>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

impl TitleStyle {
    pub fn font_size(&self) -> f64 {
        self.font_size
            .unwrap_or(paneldraw_core::constants::DEFAULT_TITLE_FONT_SIZE)
    }

    pub fn text_align(&self) -> TextAlign {
        self.text_align.unwrap_or(TextAlign::Center)
    }

    pub fn opacity(&self) -> f64 {
        self.opacity.unwrap_or(1.0)
    }

    pub fn text_color<'a>(&'a self, theme: Theme) -> &'a str {
        self.text_color.as_deref().unwrap_or(theme.default_text())
    }

    /// Merges the set fields of `patch` into this style.
    pub fn apply_patch(&mut self, patch: &TitleStylePatch) {
        if let Some(c) = &patch.text_color {
            self.text_color = Some(c.clone());
        }
        if let Some(s) = patch.font_size {
            self.font_size = Some(s);
        }
        if let Some(s) = patch.font_style {
            self.font_style = Some(s);
        }
        if let Some(a) = patch.text_align {
            self.text_align = Some(a);
        }
        if let Some(t) = patch.text_transform {
            self.text_transform = t;
        }
        if let Some(o) = patch.opacity {
            self.opacity = Some(o);
        }
    }
}

/// A partial [`TitleStyle`] edit.
///
/// `text_transform` carries a nested option so a patch can set the
/// transform back to "as typed".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TitleStylePatch {
    pub text_color: Option<String>,
    pub font_size: Option<f64>,
    pub font_style: Option<FontStyle>,
    pub text_align: Option<TextAlign>,
    pub text_transform: Option<Option<TextTransform>>,
    pub opacity: Option<f64>,
}

/// A single placeable shape or text box on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Panel {
    pub id: Uuid,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub z_index: i32,
    #[serde(rename = "shapeType")]
    pub kind: PanelKind,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_content: Option<String>,
    #[serde(rename = "panelStyles", default)]
    pub style: PanelStyle,
    #[serde(default)]
    pub title_style: TitleStyle,
}

impl Panel {
    pub fn is_locked(&self) -> bool {
        self.style.is_locked()
    }

    pub fn center(&self) -> paneldraw_core::Point {
        paneldraw_core::Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Largest z-index among `panels`, or 0 when empty.
pub fn max_z_index(panels: &[Panel]) -> i32 {
    panels.iter().map(|p| p.z_index).max().unwrap_or(0)
}
