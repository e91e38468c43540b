use paneldraw_core::{Rect, Theme};
use paneldraw_designer::model::{create_panel, ColorField, PanelKind};
use paneldraw_designer::{render_svg, CanvasConfig};

fn surface() -> Option<Rect> {
    Some(Rect::new(0.0, 0.0, 1280.0, 720.0))
}

#[test]
fn test_empty_canvas_renders_background() {
    let config = CanvasConfig {
        canvas_bg_color: "#123456".to_string(),
        ..CanvasConfig::default()
    };
    let svg = render_svg(&config, Theme::Light);

    assert!(svg.starts_with("<svg"));
    assert!(svg.ends_with("</svg>"));
    assert!(svg.contains("width=\"1280\" height=\"720\""));
    assert!(svg.contains("fill=\"#123456\""));
    // Rounded corners are on by default.
    assert!(svg.contains("rx=\"12\""));
}

#[test]
fn test_grid_pattern_only_when_shown() {
    let mut config = CanvasConfig::default();
    assert!(!render_svg(&config, Theme::Light).contains("url(#grid)"));

    config.show_grid = true;
    let svg = render_svg(&config, Theme::Light);
    assert!(svg.contains("pattern id=\"grid\" width=\"50\" height=\"50\""));
    assert!(svg.contains("url(#grid)"));
}

#[test]
fn test_shape_panel_renders_path_with_styles() {
    let mut config = CanvasConfig::default();
    config.panels = create_panel(Vec::new(), PanelKind::Rectangle, surface(), 1.0);
    let svg = render_svg(&config, Theme::Light);

    assert!(svg.contains("<path d=\"M5,5 h390 v390 h-390 z\""));
    assert!(svg.contains("fill=\"#FFFFFF\""));
    assert!(svg.contains("stroke=\"#D1D5DB\""));
    assert!(svg.contains("stroke-width=\"2\""));
}

#[test]
fn test_cleared_fill_renders_as_none() {
    let mut config = CanvasConfig::default();
    config.panels = create_panel(Vec::new(), PanelKind::Circle, surface(), 1.0);
    config.panels[0].style.background_color = ColorField::None;
    let svg = render_svg(&config, Theme::Light);

    assert!(svg.contains("fill=\"none\""));
}

#[test]
fn test_unset_colors_resolve_against_theme() {
    let mut config = CanvasConfig::default();
    config.panels = create_panel(Vec::new(), PanelKind::Diamond, surface(), 1.0);
    config.panels[0].style.background_color = ColorField::Unset;
    config.panels[0].style.border_color = ColorField::Unset;

    let light = render_svg(&config, Theme::Light);
    assert!(light.contains("fill=\"#FFFFFF\""));

    let dark = render_svg(&config, Theme::Dark);
    assert!(dark.contains("fill=\"#4B5563\""));
    assert!(dark.contains("stroke=\"#9CA3AF\""));
}

#[test]
fn test_panels_render_in_ascending_z_order() {
    let mut config = CanvasConfig::default();
    config.panels = create_panel(Vec::new(), PanelKind::Rectangle, surface(), 1.0);
    config.panels = create_panel(config.panels.clone(), PanelKind::Triangle, surface(), 1.0);
    config.panels[0].z_index = 10;
    config.panels[1].z_index = 3;
    config.panels[0].title = "front".to_string();
    config.panels[1].title = "behind".to_string();

    let svg = render_svg(&config, Theme::Light);
    let behind = svg.find("behind").unwrap();
    let front = svg.find("front").unwrap();
    assert!(behind < front);
}

#[test]
fn test_text_panel_renders_body_content() {
    let mut config = CanvasConfig::default();
    config.panels = create_panel(Vec::new(), PanelKind::Text, surface(), 1.0);
    config.panels[0].text_content = Some("line one\nline two".to_string());
    let svg = render_svg(&config, Theme::Light);

    assert!(svg.contains("line one"));
    assert!(svg.contains("line two"));
}

#[test]
fn test_title_is_escaped_and_transformed() {
    use paneldraw_designer::model::TextTransform;

    let mut config = CanvasConfig::default();
    config.panels = create_panel(Vec::new(), PanelKind::Rectangle, surface(), 1.0);
    config.panels[0].title = "a < b & c".to_string();
    config.panels[0].title_style.text_transform = Some(TextTransform::Uppercase);
    let svg = render_svg(&config, Theme::Light);

    assert!(svg.contains("A &lt; B &amp; C"));
}

#[test]
fn test_rotation_and_opacity_on_panel_group() {
    let mut config = CanvasConfig::default();
    config.panels = create_panel(Vec::new(), PanelKind::Star, surface(), 1.0);
    config.panels[0].style.rotate = Some(30.0);
    config.panels[0].style.opacity = Some(0.5);
    let svg = render_svg(&config, Theme::Light);

    assert!(svg.contains("rotate(30 200 200)"));
    assert!(svg.contains("opacity=\"0.5\""));
}
