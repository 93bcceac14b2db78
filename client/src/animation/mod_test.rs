use super::*;

fn fade_in() -> Animation {
    Animation::tween(Trigger::Mount, Property::Opacity, 0.0, 1.0, 1000.0, Easing::Linear)
}

// =============================================================
// sample
// =============================================================

#[test]
fn sample_holds_from_during_delay() {
    let anim = fade_in().delayed(500.0);
    assert_eq!(anim.sample(0.0), 0.0);
    assert_eq!(anim.sample(500.0), 0.0);
    assert!((anim.sample(1000.0) - 0.5).abs() < 1e-9);
}

#[test]
fn sample_once_ends_at_to() {
    let anim = fade_in();
    assert!((anim.sample(250.0) - 0.25).abs() < 1e-9);
    assert_eq!(anim.sample(1000.0), 1.0);
    assert_eq!(anim.sample(60_000.0), 1.0);
}

#[test]
fn sample_loop_restarts_from_from() {
    let anim = fade_in().repeating(Repeat::Loop);
    assert!((anim.sample(1250.0) - 0.25).abs() < 1e-9);
    assert!((anim.sample(3750.0) - 0.75).abs() < 1e-9);
}

#[test]
fn sample_mirror_plays_back_and_forth() {
    let anim = Animation::tween(Trigger::Always, Property::TranslateX, 0.0, 50.0, 1000.0, Easing::Linear)
        .repeating(Repeat::Mirror);
    assert!((anim.sample(500.0) - 25.0).abs() < 1e-9);
    assert!((anim.sample(1000.0) - 50.0).abs() < 1e-9);
    assert!((anim.sample(1500.0) - 25.0).abs() < 1e-9);
    assert!(anim.sample(2000.0).abs() < 1e-9);
    assert!((anim.sample(2500.0) - 25.0).abs() < 1e-9);
    assert_eq!(anim.cycle_ms(), 2000.0);
}

#[test]
fn zero_duration_jumps_to_target() {
    let anim = Animation::tween(Trigger::Mount, Property::Scale, 0.8, 1.0, 0.0, Easing::EaseOut);
    assert_eq!(anim.sample(1.0), 1.0);
}

#[test]
fn spring_sample_overshoots_and_rests() {
    let anim = Animation::spring(Trigger::State, Property::TranslateX, 0.0, 24.0, Spring::new(300.0, 10.0));
    let peak = (0..1000).map(|t| anim.sample(f64::from(t))).fold(0.0, f64::max);
    assert!(peak > 24.0);
    assert_eq!(anim.sample(anim.duration_ms() + 1.0), 24.0);
}

// =============================================================
// descriptors
// =============================================================

#[test]
fn entry_triggers() {
    assert!(Trigger::Mount.is_entry());
    assert!(Trigger::InView.is_entry());
    assert!(Trigger::State.is_entry());
    assert!(!Trigger::Hover.is_entry());
    assert!(!Trigger::Always.is_entry());
}

#[test]
fn rest_values() {
    assert_eq!(Property::Opacity.rest_value(), 1.0);
    assert_eq!(Property::Scale.rest_value(), 1.0);
    assert_eq!(Property::TranslateY.rest_value(), 0.0);
    assert_eq!(Property::RotateX.css_property(), "transform");
}

#[test]
fn stagger_delays_children_in_order() {
    let stagger = Stagger::new(100.0, 200.0);
    assert_eq!(stagger.delay_for(0), 100.0);
    assert_eq!(stagger.delay_for(3), 700.0);
}

#[test]
fn animation_deserializes_with_defaults() {
    let json = r#"{
        "trigger": "inView",
        "property": "translateY",
        "from": 50.0,
        "to": 0.0,
        "transition": { "type": "tween", "durationMs": 800.0, "easing": "easeOut" }
    }"#;
    let anim: Animation = serde_json::from_str(json).unwrap();
    assert_eq!(anim.trigger, Trigger::InView);
    assert_eq!(anim.delay_ms, 0.0);
    assert_eq!(anim.repeat, Repeat::Once);
    assert_eq!(anim.transition, Transition::tween(800.0, Easing::EaseOut));
}
