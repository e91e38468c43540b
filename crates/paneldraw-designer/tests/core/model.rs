use paneldraw_core::Rect;
use paneldraw_designer::model::{
    create_panel, ColorField, Panel, PanelKind, PanelStylePatch, TitleStylePatch,
};

fn surface() -> Option<Rect> {
    Some(Rect::new(0.0, 0.0, 1280.0, 720.0))
}

#[test]
fn test_panel_wire_format_uses_camel_case_keys() {
    let panels = create_panel(Vec::new(), PanelKind::Rectangle, surface(), 1.0);
    let json = serde_json::to_value(&panels[0]).unwrap();

    assert!(json.get("zIndex").is_some());
    assert_eq!(json["shapeType"], "rectangle");
    assert_eq!(json["panelStyles"]["backgroundColor"], "#FFFFFF");
    assert_eq!(json["panelStyles"]["borderStyle"], "solid");
    assert_eq!(json["titleStyle"]["textAlign"], "center");
    // No transform set: the key must be absent, not null.
    assert!(json["titleStyle"].get("textTransform").is_none());
}

#[test]
fn test_panel_json_round_trip() {
    let mut panels = create_panel(Vec::new(), PanelKind::Text, surface(), 1.0);
    panels[0].style.background_color = ColorField::None;
    panels[0].style.rotate = Some(45.0);

    let json = serde_json::to_string(&panels[0]).unwrap();
    let parsed: Panel = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, panels[0]);
}

#[test]
fn test_minimal_panel_record_parses_with_defaults() {
    let json = r#"{
        "id": "4c6ac1f4-8bc8-47ec-b8c0-3f4f2a5a4a64",
        "x": 10, "y": 20, "width": 400, "height": 400,
        "zIndex": 1, "shapeType": "star", "title": ""
    }"#;
    let panel: Panel = serde_json::from_str(json).unwrap();

    assert_eq!(panel.kind, PanelKind::Star);
    assert_eq!(panel.style.background_color, ColorField::Unset);
    assert!(!panel.is_locked());
    assert_eq!(panel.style.opacity(), 1.0);
    assert_eq!(panel.title_style.font_size(), 14.0);
}

#[test]
fn test_unknown_shape_type_is_rejected() {
    let json = r#"{
        "id": "4c6ac1f4-8bc8-47ec-b8c0-3f4f2a5a4a64",
        "x": 0, "y": 0, "width": 400, "height": 400,
        "zIndex": 1, "shapeType": "hexagon", "title": ""
    }"#;
    assert!(serde_json::from_str::<Panel>(json).is_err());
}

#[test]
fn test_lock_only_patch_detection() {
    let lock = PanelStylePatch {
        locked: Some(true),
        ..Default::default()
    };
    assert!(lock.is_lock_only());

    let mixed = PanelStylePatch {
        locked: Some(true),
        border_width: Some(3.0),
        ..Default::default()
    };
    assert!(!mixed.is_lock_only());

    assert!(!PanelStylePatch::default().is_lock_only());
}

#[test]
fn test_title_style_patch_can_reset_transform() {
    let mut panels = create_panel(Vec::new(), PanelKind::Circle, surface(), 1.0);
    panels[0].title_style.text_transform =
        Some(paneldraw_designer::model::TextTransform::Uppercase);

    let patch = TitleStylePatch {
        text_transform: Some(None),
        ..Default::default()
    };
    panels[0].title_style.apply_patch(&patch);
    assert!(panels[0].title_style.text_transform.is_none());
}
