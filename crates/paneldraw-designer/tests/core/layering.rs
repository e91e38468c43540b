use uuid::Uuid;

use paneldraw_designer::model::{Panel, PanelKind, PanelStyle, TitleStyle};
use paneldraw_designer::{can_reorder, reorder, LayerAction};

fn panel(z: i32) -> Panel {
    Panel {
        id: Uuid::new_v4(),
        x: 0.0,
        y: 0.0,
        width: 400.0,
        height: 400.0,
        z_index: z,
        kind: PanelKind::Rectangle,
        title: String::new(),
        text_content: None,
        style: PanelStyle::default(),
        title_style: TitleStyle::default(),
    }
}

fn z_of(panels: &[Panel], id: Uuid) -> i32 {
    panels.iter().find(|p| p.id == id).unwrap().z_index
}

fn zs_sorted(panels: &[Panel]) -> Vec<i32> {
    let mut zs: Vec<i32> = panels.iter().map(|p| p.z_index).collect();
    zs.sort();
    zs
}

#[test]
fn test_to_front_moves_bottom_panel_on_top() {
    // A z=1, B z=2, C z=3; toFront on A => B=1, C=2, A=3.
    let mut panels = vec![panel(1), panel(2), panel(3)];
    let (a, b, c) = (panels[0].id, panels[1].id, panels[2].id);

    reorder(&mut panels, a, LayerAction::ToFront);

    assert_eq!(z_of(&panels, b), 1);
    assert_eq!(z_of(&panels, c), 2);
    assert_eq!(z_of(&panels, a), 3);
}

#[test]
fn test_to_back_moves_top_panel_behind() {
    let mut panels = vec![panel(1), panel(2), panel(3)];
    let (a, b, c) = (panels[0].id, panels[1].id, panels[2].id);

    reorder(&mut panels, c, LayerAction::ToBack);

    assert_eq!(z_of(&panels, c), 1);
    assert_eq!(z_of(&panels, a), 2);
    assert_eq!(z_of(&panels, b), 3);
}

#[test]
fn test_back_and_forward_swap_neighbors() {
    let mut panels = vec![panel(1), panel(2), panel(3)];
    let (a, b) = (panels[0].id, panels[1].id);

    reorder(&mut panels, b, LayerAction::Back);
    assert_eq!(z_of(&panels, b), 1);
    assert_eq!(z_of(&panels, a), 2);

    reorder(&mut panels, b, LayerAction::Forward);
    assert_eq!(z_of(&panels, a), 1);
    assert_eq!(z_of(&panels, b), 2);
}

#[test]
fn test_reorder_renormalizes_sparse_z_values() {
    let mut panels = vec![panel(7), panel(23), panel(5)];
    let top = panels[1].id;

    reorder(&mut panels, top, LayerAction::Forward);

    // Already frontmost: order is unchanged but values renormalize.
    assert_eq!(zs_sorted(&panels), vec![1, 2, 3]);
    assert_eq!(z_of(&panels, top), 3);
}

#[test]
fn test_boundary_actions_are_rejected_by_guard() {
    let panels = vec![panel(1), panel(2), panel(3)];
    let (a, c) = (panels[0].id, panels[2].id);

    assert!(!can_reorder(&panels, a, LayerAction::Back));
    assert!(!can_reorder(&panels, a, LayerAction::ToBack));
    assert!(!can_reorder(&panels, c, LayerAction::Forward));
    assert!(!can_reorder(&panels, c, LayerAction::ToFront));

    assert!(can_reorder(&panels, a, LayerAction::Forward));
    assert!(can_reorder(&panels, a, LayerAction::ToFront));
    assert!(can_reorder(&panels, c, LayerAction::Back));
}

#[test]
fn test_unknown_target_is_noop() {
    let mut panels = vec![panel(2), panel(9)];
    let before: Vec<i32> = panels.iter().map(|p| p.z_index).collect();

    assert!(!can_reorder(&panels, Uuid::new_v4(), LayerAction::ToFront));
    reorder(&mut panels, Uuid::new_v4(), LayerAction::ToFront);

    let after: Vec<i32> = panels.iter().map(|p| p.z_index).collect();
    assert_eq!(before, after);
}

#[test]
fn test_single_panel_has_no_moves() {
    let panels = vec![panel(1)];
    let id = panels[0].id;
    for action in [
        LayerAction::Back,
        LayerAction::Forward,
        LayerAction::ToBack,
        LayerAction::ToFront,
    ] {
        assert!(!can_reorder(&panels, id, action));
    }
}
