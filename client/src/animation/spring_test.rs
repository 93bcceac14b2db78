use super::*;

#[test]
fn starts_at_rest_origin() {
    assert_eq!(Spring::default().position(0.0), 0.0);
    assert_eq!(Spring::new(300.0, 30.0).position(-5.0), 0.0);
}

#[test]
fn settles_at_one() {
    for spring in [Spring::new(100.0, 15.0), Spring::new(300.0, 10.0), Spring::new(100.0, 20.0), Spring::new(50.0, 40.0)] {
        let settle = spring.settle_ms();
        assert!(settle < MAX_SETTLE_MS, "{spring:?} never settled");
        assert!((spring.position(settle + 50.0) - 1.0).abs() < REST_TOLERANCE, "{spring:?}");
    }
}

#[test]
fn damping_ratio_classifies_regimes() {
    assert!(Spring::new(300.0, 10.0).damping_ratio() < 1.0);
    assert!((Spring::new(100.0, 20.0).damping_ratio() - 1.0).abs() < 1e-9);
    assert!(Spring::new(50.0, 40.0).damping_ratio() > 1.0);
}

#[test]
fn under_damped_spring_overshoots() {
    let spring = Spring::new(300.0, 10.0);
    let peak = (0..1000).map(|t| spring.position(f64::from(t))).fold(0.0, f64::max);
    assert!(peak > 1.0);
}

#[test]
fn critically_damped_spring_never_overshoots() {
    let spring = Spring::new(100.0, 20.0);
    for t in 0..3000 {
        assert!(spring.position(f64::from(t)) <= 1.0 + 1e-9);
    }
}

#[test]
fn stiffer_spring_settles_faster() {
    assert!(Spring::new(500.0, 30.0).settle_ms() < Spring::new(100.0, 15.0).settle_ms());
}

#[test]
fn css_easing_is_linear_function_from_zero_to_one() {
    let css = Spring::new(100.0, 15.0).css_easing(10);
    assert!(css.starts_with("linear(0.0000, "));
    assert!(css.ends_with(", 1.0000)"));
    assert_eq!(css.matches(", ").count(), 10);
}
