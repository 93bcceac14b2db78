use super::*;
use crate::animation::{Easing, Spring, presets};

fn card() -> Vec<Animation> {
    vec![
        Animation::tween(Trigger::InView, Property::Opacity, 0.0, 1.0, 500.0, Easing::EaseOut),
        Animation::tween(Trigger::InView, Property::TranslateY, 50.0, 0.0, 500.0, Easing::EaseOut).delayed(100.0),
        Animation::tween(Trigger::Hover, Property::TranslateY, 0.0, -10.0, 200.0, Easing::EaseOut),
        Animation::tween(Trigger::Hover, Property::Scale, 1.0, 1.02, 200.0, Easing::EaseOut),
    ]
}

// =============================================================
// fmt_num
// =============================================================

#[test]
fn fmt_num_trims() {
    assert_eq!(fmt_num(1.0), "1");
    assert_eq!(fmt_num(0.25), "0.25");
    assert_eq!(fmt_num(-50.0), "-50");
    assert_eq!(fmt_num(-0.0001), "0");
    assert_eq!(fmt_num(1.23456), "1.235");
}

// =============================================================
// motion_style
// =============================================================

#[test]
fn before_entry_uses_from_values() {
    let style = motion_style(&card(), MotionPhase::default(), 0.0);
    assert!(style.contains("translateY(50px)"), "{style}");
    assert!(style.contains("opacity: 0;"), "{style}");
    assert!(style.contains("scale(1)"), "{style}");
}

#[test]
fn entered_uses_to_values_and_delays() {
    let phase = MotionPhase { entered: true, ..MotionPhase::default() };
    let style = motion_style(&card(), phase, 200.0);
    assert!(style.contains("opacity: 1;"), "{style}");
    assert!(style.contains("translateY(0px)"), "{style}");
    assert!(style.contains("opacity 500ms ease-out 200ms"), "{style}");
}

#[test]
fn hover_overrides_entry() {
    let phase = MotionPhase { entered: true, hovered: true, pressed: false, engaged: true };
    let style = motion_style(&card(), phase, 0.0);
    assert!(style.contains("translateY(-10px)"), "{style}");
    assert!(style.contains("scale(1.02)"), "{style}");
    assert!(style.contains("transform 200ms ease-out 0ms"), "{style}");
}

#[test]
fn idle_hover_keeps_entry_transition_on_shared_property() {
    let phase = MotionPhase { entered: true, ..MotionPhase::default() };
    let style = motion_style(&card(), phase, 200.0);
    assert!(style.contains("transform 500ms ease-out 300ms"), "{style}");
    assert!(!style.contains("transform 200ms"), "{style}");
}

#[test]
fn staggered_card_spring_keeps_delay_on_transform() {
    let anims = [presets::card_enter(0.8), vec![presets::hover_lift(-10.0)]].concat();
    let phase = MotionPhase { entered: true, ..MotionPhase::default() };
    let style = motion_style(&anims, phase, 500.0);

    let settle = fmt_num(presets::CARD_SPRING.settle_ms());
    let needle = format!("transform {settle}ms linear(");
    let start = style.find(&needle).unwrap_or_else(|| panic!("no entry transform timing: {style}"));
    let entry = &style[start..style.len() - 1];
    assert!(entry.ends_with(") 500ms"), "{style}");
}

#[test]
fn leaving_after_hover_uses_hover_timing() {
    let phase = MotionPhase { entered: true, engaged: true, ..MotionPhase::default() };
    let style = motion_style(&card(), phase, 200.0);
    assert!(style.contains("translateY(0px)"), "{style}");
    assert!(style.contains("transform 200ms ease-out 0ms"), "{style}");
    assert!(style.contains("opacity 500ms ease-out 200ms"), "{style}");
}

#[test]
fn hover_without_entry_uses_hover_timing() {
    let anims = [Animation::tween(Trigger::Hover, Property::Scale, 1.0, 1.1, 200.0, Easing::EaseOut)];
    let style = motion_style(&anims, MotionPhase::default(), 0.0);
    assert!(style.contains("transition: transform 200ms ease-out 0ms;"), "{style}");
}

#[test]
fn transform_functions_keep_fixed_order() {
    let anims = [
        Animation::tween(Trigger::Mount, Property::Scale, 0.8, 1.0, 100.0, Easing::Linear),
        Animation::tween(Trigger::Mount, Property::TranslateX, -20.0, 0.0, 100.0, Easing::Linear),
    ];
    let style = motion_style(&anims, MotionPhase::default(), 0.0);
    assert!(style.starts_with("transform: translateX(-20px) scale(0.8);"), "{style}");
}

#[test]
fn spring_transition_uses_linear_function() {
    let anims = [Animation::spring(Trigger::State, Property::TranslateX, 0.0, 24.0, Spring::new(500.0, 30.0))];
    let phase = MotionPhase { entered: true, ..MotionPhase::default() };
    let style = motion_style(&anims, phase, 0.0);
    assert!(style.contains("translateX(24px)"), "{style}");
    assert!(style.contains("transition: transform "), "{style}");
    assert!(style.contains("linear(0, ") || style.contains("linear(0.0000, "), "{style}");
}

#[test]
fn always_animations_are_not_inline() {
    let anims = [Animation::tween(Trigger::Always, Property::Opacity, 0.2, 0.8, 1000.0, Easing::Linear)];
    assert_eq!(motion_style(&anims, MotionPhase::default(), 0.0), "");
}

// =============================================================
// keyframes_css
// =============================================================

#[test]
fn keyframes_sample_mirrored_loop() {
    let anims = [Animation::tween(Trigger::Always, Property::TranslateX, 0.0, 50.0, 1000.0, Easing::Linear)
        .repeating(Repeat::Mirror)
        .delayed(500.0)];
    let css = keyframes_css("orb", &anims).unwrap();
    assert!(css.keyframes.starts_with("@keyframes orb {"));
    assert!(css.keyframes.contains(" 0% { transform: translateX(0px);"));
    assert!(css.keyframes.contains(" 50% { transform: translateX(50px);"));
    assert!(css.keyframes.contains(" 100% { transform: translateX(0px);"));
    assert_eq!(css.animation, "orb 2000ms linear 500ms infinite both");
}

#[test]
fn keyframes_need_a_continuous_animation() {
    assert!(keyframes_css("none", &card()).is_none());
}
