use uuid::Uuid;

use paneldraw_core::{Point, Size};
use paneldraw_designer::model::PanelKind;
use paneldraw_designer::{DragOutcome, InteractionController, ResizeHandle};

#[test]
fn test_release_within_threshold_is_a_click() {
    let mut controller = InteractionController::new();
    let id = Uuid::new_v4();
    controller.begin_drag(id, Point::new(100.0, 100.0), Point::new(10.0, 10.0));
    assert!(controller.is_interacting());

    let (panel, outcome) = controller
        .end_drag(Point::new(101.0, 100.5), false)
        .unwrap();
    assert_eq!(panel, id);
    assert_eq!(outcome, DragOutcome::Click);
    assert!(!controller.is_interacting());
}

#[test]
fn test_drag_commits_unsnapped_position_without_grid() {
    let mut controller = InteractionController::new();
    let id = Uuid::new_v4();
    controller.begin_drag(id, Point::new(100.0, 100.0), Point::new(10.0, 10.0));

    let (_, outcome) = controller.end_drag(Point::new(113.0, 92.0), false).unwrap();
    assert_eq!(outcome, DragOutcome::Moved { x: 23.0, y: 2.0 });
}

#[test]
fn test_drag_snaps_to_grid_when_shown() {
    let mut controller = InteractionController::new();
    let id = Uuid::new_v4();
    controller.begin_drag(id, Point::new(0.0, 0.0), Point::new(10.0, 10.0));

    let (_, outcome) = controller.end_drag(Point::new(60.0, 80.0), true).unwrap();
    // Raw release position (70, 90) snaps to the 50-unit grid.
    assert_eq!(outcome, DragOutcome::Moved { x: 50.0, y: 100.0 });
}

#[test]
fn test_drag_position_is_unconstrained_while_live() {
    let mut controller = InteractionController::new();
    controller.begin_drag(Uuid::new_v4(), Point::new(0.0, 0.0), Point::new(10.0, 10.0));

    let live = controller.drag_position(Point::new(-500.0, 13.0)).unwrap();
    assert_eq!(live, Point::new(-490.0, 23.0));
}

#[test]
fn test_resize_clamps_to_kind_floors() {
    let mut controller = InteractionController::new();
    controller.begin_resize(
        Uuid::new_v4(),
        ResizeHandle::SouthEast,
        Size::new(400.0, 400.0),
    );

    let size = controller
        .resize_request(Size::new(10.0, 10.0), false, PanelKind::Rectangle)
        .unwrap();
    assert_eq!(size, Size::new(100.0, 100.0));

    let size = controller
        .resize_request(Size::new(10.0, 10.0), false, PanelKind::Text)
        .unwrap();
    assert_eq!(size, Size::new(100.0, 50.0));
}

#[test]
fn test_corner_handle_aspect_lock_derives_height_from_width() {
    let mut controller = InteractionController::new();
    controller.begin_resize(
        Uuid::new_v4(),
        ResizeHandle::SouthEast,
        Size::new(400.0, 200.0),
    );

    let size = controller
        .resize_request(Size::new(600.0, 1000.0), true, PanelKind::Rectangle)
        .unwrap();
    assert_eq!(size, Size::new(600.0, 300.0));
}

#[test]
fn test_vertical_handle_aspect_lock_derives_width_from_height() {
    let mut controller = InteractionController::new();
    controller.begin_resize(
        Uuid::new_v4(),
        ResizeHandle::South,
        Size::new(400.0, 200.0),
    );

    let size = controller
        .resize_request(Size::new(1000.0, 300.0), true, PanelKind::Rectangle)
        .unwrap();
    assert_eq!(size, Size::new(600.0, 300.0));
}

#[test]
fn test_aspect_lock_is_skipped_for_line_and_text() {
    let mut controller = InteractionController::new();
    controller.begin_resize(
        Uuid::new_v4(),
        ResizeHandle::SouthEast,
        Size::new(200.0, 100.0),
    );

    let size = controller
        .resize_request(Size::new(500.0, 130.0), true, PanelKind::Line)
        .unwrap();
    assert_eq!(size, Size::new(500.0, 130.0));
}

#[test]
fn test_handle_edges() {
    assert!(ResizeHandle::NorthWest.affects_left());
    assert!(ResizeHandle::NorthWest.affects_top());
    assert!(ResizeHandle::West.affects_left());
    assert!(!ResizeHandle::East.affects_left());
    assert!(!ResizeHandle::South.affects_top());
    assert!(ResizeHandle::East.derives_height_from_width());
    assert!(!ResizeHandle::North.derives_height_from_width());
}

#[test]
fn test_text_edit_commit_and_cancel() {
    let mut controller = InteractionController::new();
    let id = Uuid::new_v4();

    controller.begin_text_edit(id, "Hello");
    assert_eq!(controller.editing_panel(), Some(id));
    // Text editing does not count as drag/resize interaction.
    assert!(!controller.is_interacting());

    controller.set_draft("Hello world");
    let (panel, text) = controller.commit_text().unwrap();
    assert_eq!(panel, id);
    assert_eq!(text, "Hello world");
    assert_eq!(controller.editing_panel(), None);

    controller.begin_text_edit(id, "Hello");
    controller.set_draft("discarded");
    controller.cancel_text_edit();
    assert_eq!(controller.editing_panel(), None);
    assert!(controller.commit_text().is_none());
}
