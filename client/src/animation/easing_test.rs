use super::*;

const CURVES: [Easing; 5] = [
    Easing::Linear,
    Easing::EaseIn,
    Easing::EaseOut,
    Easing::EaseInOut,
    Easing::CubicBezier(0.25, 0.1, 0.25, 1.0),
];

#[test]
fn endpoints_are_fixed() {
    for easing in CURVES {
        assert!(easing.apply(0.0).abs() < 1e-9, "{easing:?}");
        assert!((easing.apply(1.0) - 1.0).abs() < 1e-9, "{easing:?}");
    }
}

#[test]
fn input_is_clamped() {
    assert_eq!(Easing::EaseOut.apply(-2.0), 0.0);
    assert_eq!(Easing::EaseOut.apply(3.0), 1.0);
}

#[test]
fn standard_curves_are_monotone() {
    for easing in CURVES {
        let mut prev = 0.0;
        for step in 1..=100 {
            let value = easing.apply(f64::from(step) / 100.0);
            assert!(value + 1e-6 >= prev, "{easing:?} decreased at step {step}");
            prev = value;
        }
    }
}

#[test]
fn ease_out_leads_and_ease_in_lags_linear() {
    assert!(Easing::EaseOut.apply(0.3) > 0.3);
    assert!(Easing::EaseIn.apply(0.3) < 0.3);
}

#[test]
fn ease_in_out_is_symmetric() {
    let a = Easing::EaseInOut.apply(0.25);
    let b = Easing::EaseInOut.apply(0.75);
    assert!((a + b - 1.0).abs() < 1e-4);
    assert!((Easing::EaseInOut.apply(0.5) - 0.5).abs() < 1e-4);
}

#[test]
fn css_names() {
    assert_eq!(Easing::Linear.css(), "linear");
    assert_eq!(Easing::EaseOut.css(), "ease-out");
    assert_eq!(Easing::CubicBezier(0.1, 0.2, 0.3, 0.4).css(), "cubic-bezier(0.1, 0.2, 0.3, 0.4)");
}
