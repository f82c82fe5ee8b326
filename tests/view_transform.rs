use egui::{pos2, vec2};
use pixelpen::{ViewTransform, WheelDirection};

#[test]
fn zoom_compounds_per_wheel_tick() {
    let mut view = ViewTransform::new();
    for _ in 0..10 {
        view.apply_zoom_delta(WheelDirection::Up);
    }
    // 1.1^10
    assert!((view.zoom() - 2.5937424).abs() < 1e-3);
}

#[test]
fn zoom_saturates_at_the_limits() {
    let mut view = ViewTransform::new();
    for _ in 0..60 {
        view.apply_zoom_delta(WheelDirection::Up);
    }
    assert_eq!(view.zoom(), 5.0);

    for _ in 0..200 {
        view.apply_zoom_delta(WheelDirection::Down);
    }
    assert_eq!(view.zoom(), 0.1);

    // One tick back in is still clamped arithmetic, not an error.
    view.apply_zoom_delta(WheelDirection::Up);
    assert!(view.zoom() > 0.1 && view.zoom() < 5.0);
}

#[test]
fn pan_accumulates_unclamped() {
    let mut view = ViewTransform::new();
    view.apply_pan_delta(vec2(10.0, -5.0));
    view.apply_pan_delta(vec2(3.0, 2.0));
    assert_eq!(view.pan(), vec2(13.0, -3.0));

    view.apply_pan_delta(vec2(-1e6, 1e6));
    assert_eq!(view.pan(), vec2(13.0 - 1e6, -3.0 + 1e6));
}

#[test]
fn device_to_surface_uses_floor_truncation() {
    let view = ViewTransform::new();
    let origin = pos2(10.0, 20.0);

    assert_eq!(view.to_surface_coords(pos2(10.0, 20.0), origin), (0, 0));
    assert_eq!(view.to_surface_coords(pos2(115.7, 62.3), origin), (105, 42));
    // Left of the origin floors toward negative, not toward zero.
    assert_eq!(view.to_surface_coords(pos2(9.5, 19.5), origin), (-1, -1));
}

#[test]
fn surface_mapping_respects_zoom_and_pan() {
    let mut view = ViewTransform::new();
    for _ in 0..2 {
        // no-op ticks cancel out: in then out
        view.apply_zoom_delta(WheelDirection::Up);
        view.apply_zoom_delta(WheelDirection::Down);
    }
    view.apply_pan_delta(vec2(40.0, -16.0));

    let origin = pos2(0.0, 0.0);
    // Aim for the middle of surface cell (80, 32) so float noise in the
    // zoom factor cannot tip the floor over a cell boundary.
    let zoom = view.zoom();
    let device = pos2(40.0 + 80.5 * zoom, -16.0 + 32.5 * zoom);
    assert_eq!(view.to_surface_coords(device, origin), (80, 32));
}

#[test]
fn round_trip_recovers_device_point_within_one_pixel() {
    let mut view = ViewTransform::new();
    for _ in 0..4 {
        view.apply_zoom_delta(WheelDirection::Up);
    }
    view.apply_pan_delta(vec2(31.0, -12.5));
    let origin = pos2(10.0, 20.0);

    for device in [
        pos2(123.4, 56.7),
        pos2(0.0, 0.0),
        pos2(-40.25, 310.9),
        pos2(799.9, 599.1),
    ] {
        let (sx, sy) = view.to_surface_coords(device, origin);
        let back = view.to_device_coords(pos2(sx as f32, sy as f32), origin);
        let zoom = view.zoom();
        assert!(
            (back.x - device.x).abs() <= zoom + 1e-3,
            "x drifted more than one surface pixel: {device:?} -> {back:?}"
        );
        assert!(
            (back.y - device.y).abs() <= zoom + 1e-3,
            "y drifted more than one surface pixel: {device:?} -> {back:?}"
        );
    }
}
