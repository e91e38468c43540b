use paneldraw_designer::{CanvasConfig, HistoryStack};

fn config_with_width(width: f64) -> CanvasConfig {
    CanvasConfig {
        canvas_width: width,
        ..CanvasConfig::default()
    }
}

#[test]
fn test_history_stack_creation() {
    let stack = HistoryStack::new();
    assert!(!stack.can_undo());
    assert!(!stack.can_redo());
    assert_eq!(stack.undo_depth(), 0);
    assert_eq!(stack.redo_depth(), 0);
}

#[test]
fn test_record_single_snapshot() {
    let mut stack = HistoryStack::new();
    stack.record(config_with_width(300.0));
    assert!(stack.can_undo());
    assert!(!stack.can_redo());
    assert_eq!(stack.undo_depth(), 1);
}

#[test]
fn test_undo_returns_recorded_state_and_parks_current() {
    let mut stack = HistoryStack::new();
    stack.record(config_with_width(300.0));

    let restored = stack.undo(config_with_width(400.0)).unwrap();
    assert_eq!(restored.canvas_width, 300.0);
    assert!(!stack.can_undo());
    assert!(stack.can_redo());
}

#[test]
fn test_redo_after_undo() {
    let mut stack = HistoryStack::new();
    stack.record(config_with_width(300.0));
    let restored = stack.undo(config_with_width(400.0)).unwrap();

    let redone = stack.redo(restored).unwrap();
    assert_eq!(redone.canvas_width, 400.0);
    assert!(stack.can_undo());
    assert!(!stack.can_redo());
}

#[test]
fn test_undo_on_empty_stack_is_none() {
    let mut stack = HistoryStack::new();
    assert!(stack.undo(CanvasConfig::default()).is_none());
    // The current state must not have been parked on the redo stack.
    assert!(!stack.can_redo());
}

#[test]
fn test_multiple_undo_redo() {
    let mut stack = HistoryStack::new();
    let mut current = config_with_width(200.0);

    for i in 1..=5 {
        stack.record(current.clone());
        current = config_with_width(200.0 + i as f64 * 100.0);
    }

    assert_eq!(stack.undo_depth(), 5);
    assert_eq!(stack.redo_depth(), 0);

    for _ in 0..5 {
        current = stack.undo(current).unwrap();
    }
    assert_eq!(current.canvas_width, 200.0);
    assert_eq!(stack.undo_depth(), 0);
    assert_eq!(stack.redo_depth(), 5);

    for _ in 0..5 {
        current = stack.redo(current).unwrap();
    }
    assert_eq!(current.canvas_width, 700.0);
    assert_eq!(stack.undo_depth(), 5);
    assert_eq!(stack.redo_depth(), 0);
}

#[test]
fn test_record_clears_redo_stack() {
    let mut stack = HistoryStack::new();
    stack.record(config_with_width(300.0));
    stack.record(config_with_width(400.0));
    let current = stack.undo(config_with_width(500.0)).unwrap();
    assert_eq!(stack.redo_depth(), 1);

    stack.record(current);
    assert_eq!(stack.redo_depth(), 0);
}

#[test]
fn test_clear_history() {
    let mut stack = HistoryStack::new();
    stack.record(config_with_width(300.0));
    stack.undo(config_with_width(400.0)).unwrap();
    stack.record(config_with_width(500.0));

    stack.clear();
    assert!(!stack.can_undo());
    assert!(!stack.can_redo());
}
