use super::*;

fn at(x: f64, y: f64) -> PointerPosition {
    PointerPosition { x, y, viewport_width: 1200.0, viewport_height: 800.0 }
}

#[test]
fn centered_pointer_is_flat() {
    assert_eq!(parallax_tilt(at(600.0, 400.0)), (0.0, 0.0));
}

#[test]
fn tilt_follows_pointer_offset() {
    let (rx, ry) = parallax_tilt(at(1100.0, 700.0));
    assert!((ry - 5.0).abs() < 1e-9);
    assert!((rx + 3.0).abs() < 1e-9);

    let (rx, ry) = parallax_tilt(at(100.0, 100.0));
    assert!((ry + 5.0).abs() < 1e-9);
    assert!((rx - 3.0).abs() < 1e-9);
}

#[test]
fn unknown_viewport_is_flat() {
    assert_eq!(parallax_tilt(PointerPosition::default()), (0.0, 0.0));
}
