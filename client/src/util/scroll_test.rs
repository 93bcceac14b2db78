use super::*;

#[test]
fn map_range_interpolates_and_clamps() {
    assert_eq!(map_range(150.0, (0.0, 300.0), (0.0, -50.0)), -25.0);
    assert_eq!(map_range(-10.0, (0.0, 300.0), (0.0, -50.0)), 0.0);
    assert_eq!(map_range(900.0, (0.0, 300.0), (0.0, -50.0)), -50.0);
}

#[test]
fn map_range_degenerate_input() {
    assert_eq!(map_range(5.0, (10.0, 10.0), (1.0, 2.0)), 1.0);
}

#[test]
fn navbar_scrolled_only_past_threshold() {
    assert!(!is_scrolled(0.0));
    assert!(!is_scrolled(20.0));
    assert!(is_scrolled(20.5));
}

#[test]
fn hero_drifts_and_fades_over_first_300px() {
    assert_eq!(hero_drift(0.0), (0.0, 1.0));
    let (y, opacity) = hero_drift(300.0);
    assert_eq!(y, -50.0);
    assert!((opacity - 0.8).abs() < 1e-9);
    assert_eq!(hero_drift(10_000.0).0, -50.0);
}

#[test]
fn in_view_respects_margin() {
    // 800px viewport, 100px margin: visible band is 100..700.
    assert!(is_in_view(650.0, 900.0, 800.0, 100.0));
    assert!(!is_in_view(720.0, 900.0, 800.0, 100.0));
    assert!(!is_in_view(-400.0, 80.0, 800.0, 100.0));
    assert!(is_in_view(-400.0, 120.0, 800.0, 100.0));
}
