//! Render animation descriptors to inline CSS.
//!
//! State-driven animations (entry, hover, press) become target values plus a
//! `transition` list: the browser interpolates whenever the phase flips.
//! Continuous animations are baked into `@keyframes` by sampling them.

#[cfg(test)]
#[path = "css_test.rs"]
mod css_test;

use std::collections::BTreeMap;
use std::fmt::Write as _;

use super::{Animation, Property, Repeat, Transition, Trigger};

/// Segments used when sampling a loop into keyframes.
pub const KEYFRAME_SEGMENTS: usize = 20;
/// Stops used for a spring's `linear()` timing function.
const SPRING_SAMPLES: usize = 16;

/// Which state-driven animations are currently at their `to` value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MotionPhase {
    pub entered: bool,
    pub hovered: bool,
    pub pressed: bool,
    /// The pointer has entered the element at least once. From then on idle
    /// hover/press layers own their properties' transitions, so leaving is
    /// not held back by the entry delay.
    pub engaged: bool,
}

/// Target values and transitions for `animations` in `phase`.
///
/// Later layers win: entry, then hover, then press. A hover or press layer
/// only takes over a property's transition once it is active or the pointer
/// has engaged, so entry stagger survives on shared properties like
/// `transform`. `extra_delay_ms`
/// is added to entry delays (stagger from a parent group).
#[must_use]
pub fn motion_style(animations: &[Animation], phase: MotionPhase, extra_delay_ms: f64) -> String {
    let mut values = BTreeMap::<Property, f64>::new();
    let mut transitions = BTreeMap::<&'static str, String>::new();

    for anim in animations.iter().filter(|a| a.trigger.is_entry()) {
        let (value, delay) = if phase.entered { (anim.to, anim.delay_ms + extra_delay_ms) } else { (anim.from, 0.0) };
        values.insert(anim.property, value);
        transitions.insert(anim.property.css_property(), transition_entry(anim, delay));
    }

    for (trigger, active) in [(Trigger::Hover, phase.hovered), (Trigger::Press, phase.pressed)] {
        for anim in animations.iter().filter(|a| a.trigger == trigger) {
            let property = anim.property.css_property();
            if active {
                values.insert(anim.property, anim.to);
            } else {
                values.entry(anim.property).or_insert(anim.from);
            }
            if active || phase.engaged {
                transitions.insert(property, transition_entry(anim, 0.0));
            } else {
                // Idle before any pointer contact: keep the entry timing.
                transitions.entry(property).or_insert_with(|| transition_entry(anim, 0.0));
            }
        }
    }

    let mut style = declarations(&values);
    if !transitions.is_empty() {
        let list = transitions.into_values().collect::<Vec<_>>().join(", ");
        let _ = write!(style, "transition: {list};");
    }
    style
}

/// A sampled loop: the `@keyframes` rule and the `animation` shorthand that
/// plays it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoopCss {
    pub keyframes: String,
    pub animation: String,
}

/// Bake the `Always` animations of a group into one keyframes rule.
///
/// The group shares one period (the longest cycle) and the delay of its
/// first animation. Returns `None` when nothing in the group loops.
#[must_use]
pub fn keyframes_css(name: &str, animations: &[Animation]) -> Option<LoopCss> {
    let looping = animations.iter().filter(|a| a.trigger == Trigger::Always).collect::<Vec<_>>();
    let first = looping.first()?;
    let period = looping.iter().map(|a| a.cycle_ms()).fold(0.0, f64::max);
    if period <= 0.0 {
        return None;
    }

    let mut keyframes = format!("@keyframes {name} {{");
    for step in 0..=KEYFRAME_SEGMENTS {
        #[allow(clippy::cast_precision_loss)]
        let fraction = step as f64 / KEYFRAME_SEGMENTS as f64;
        let t = period * fraction;
        let values = looping
            .iter()
            .map(|a| (a.property, a.sample(a.delay_ms + t)))
            .collect::<BTreeMap<_, _>>();
        let _ = write!(keyframes, " {}% {{ {} }}", fmt_num(fraction * 100.0), declarations(&values).trim_end());
    }
    keyframes.push_str(" }");

    let iterations = if looping.iter().all(|a| a.repeat == Repeat::Once) { "1" } else { "infinite" };
    let animation = format!(
        "{name} {}ms linear {}ms {iterations} both",
        fmt_num(period),
        fmt_num(first.delay_ms)
    );
    Some(LoopCss { keyframes, animation })
}

/// `transform`, `opacity` and `background-position` declarations.
fn declarations(values: &BTreeMap<Property, f64>) -> String {
    let mut transform = Vec::new();
    let mut out = String::new();
    for (property, value) in values {
        let v = fmt_num(*value);
        match property {
            Property::TranslateX => transform.push(format!("translateX({v}px)")),
            Property::TranslateY => transform.push(format!("translateY({v}px)")),
            Property::Scale => transform.push(format!("scale({v})")),
            Property::Rotate => transform.push(format!("rotate({v}deg)")),
            Property::RotateX => transform.push(format!("rotateX({v}deg)")),
            Property::RotateY => transform.push(format!("rotateY({v}deg)")),
            Property::Opacity => {
                let _ = write!(out, "opacity: {v}; ");
            }
            Property::BackgroundPositionX => {
                let _ = write!(out, "background-position: {v}% 50%; ");
            }
        }
    }
    if transform.is_empty() {
        out
    } else {
        format!("transform: {}; {out}", transform.join(" "))
    }
}

fn transition_entry(anim: &Animation, delay_ms: f64) -> String {
    let (duration, timing) = match anim.transition {
        Transition::Tween { duration_ms, easing } => (duration_ms.max(0.0), easing.css()),
        Transition::Spring(spring) => (spring.settle_ms(), spring.css_easing(SPRING_SAMPLES)),
    };
    format!(
        "{} {}ms {timing} {}ms",
        anim.property.css_property(),
        fmt_num(duration),
        fmt_num(delay_ms)
    )
}

/// Shortest decimal form with at most three fractional digits.
#[must_use]
pub fn fmt_num(value: f64) -> String {
    let text = format!("{value:.3}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" { "0".to_owned() } else { text.to_owned() }
}
