use paneldraw_core::Point;
use paneldraw_designer::Viewport;

#[test]
fn test_viewport_starts_at_default_zoom() {
    let viewport = Viewport::new();
    assert_eq!(viewport.zoom(), 0.8);
    assert_eq!((viewport.pan_x(), viewport.pan_y()), (0.0, 0.0));
}

#[test]
fn test_zoom_steps_saturate_at_bounds() {
    let mut viewport = Viewport::new();
    for _ in 0..50 {
        viewport.zoom_in();
    }
    assert_eq!(viewport.zoom(), 4.0);

    for _ in 0..50 {
        viewport.zoom_out();
    }
    assert_eq!(viewport.zoom(), 0.4);
}

#[test]
fn test_set_zoom_rejects_out_of_range() {
    let mut viewport = Viewport::new();
    viewport.set_zoom(2.0);
    assert_eq!(viewport.zoom(), 2.0);

    viewport.set_zoom(0.05);
    assert_eq!(viewport.zoom(), 2.0);

    viewport.set_zoom(10.0);
    assert_eq!(viewport.zoom(), 2.0);
}

#[test]
fn test_reset_restores_initial_transform() {
    let mut viewport = Viewport::new();
    viewport.set_transform(120.0, -40.0, 2.4);
    viewport.reset();
    assert_eq!(viewport.zoom(), 0.8);
    assert_eq!((viewport.pan_x(), viewport.pan_y()), (0.0, 0.0));
}

#[test]
fn test_screen_canvas_round_trip() {
    let mut viewport = Viewport::new();
    viewport.set_transform(100.0, 50.0, 2.0);

    let canvas = viewport.screen_to_canvas(300.0, 250.0);
    assert_eq!(canvas, Point::new(100.0, 100.0));

    let (sx, sy) = viewport.canvas_to_screen(canvas.x, canvas.y);
    assert_eq!((sx, sy), (300.0, 250.0));
}

#[test]
fn test_pan_by_accumulates() {
    let mut viewport = Viewport::new();
    viewport.pan_by(10.0, 5.0);
    viewport.pan_by(-4.0, 5.0);
    assert_eq!((viewport.pan_x(), viewport.pan_y()), (6.0, 10.0));
}
