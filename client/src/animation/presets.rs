//! Animation values used across the landing page.
//!
//! Tweens without an explicit curve use ease-out. Looping "there and back"
//! motions are mirrored tweens, so each run lasts half the visible period.

#[cfg(test)]
#[path = "presets_test.rs"]
mod presets_test;

use super::{Animation, Easing, Property, Repeat, Spring, Stagger, Trigger};
use crate::state::carousel::Step;

/// Entry spring for cards and footer columns.
pub const CARD_SPRING: Spring = Spring::new(100.0, 15.0);
/// Snappy spring for hover and press feedback.
pub const HOVER_SPRING: Spring = Spring::new(300.0, 10.0);
pub const KNOB_SPRING: Spring = Spring::new(500.0, 30.0);
pub const SLIDE_SPRING: Spring = Spring::new(300.0, 30.0);

pub const FEATURES_STAGGER: Stagger = Stagger::new(100.0, 200.0);
/// Testimonial grid and footer columns.
pub const GRID_STAGGER: Stagger = Stagger::new(200.0, 100.0);

const DEFAULT_TWEEN_MS: f64 = 300.0;
const SLIDE_DISTANCE_PX: f64 = 1000.0;

// =============================================================================
// ENTRY
// =============================================================================

/// Opacity 0 → 1 while sliding up from `dy` pixels below.
#[must_use]
pub fn fade_up(trigger: Trigger, dy: f64, duration_ms: f64, delay_ms: f64) -> Vec<Animation> {
    vec![
        Animation::tween(trigger, Property::Opacity, 0.0, 1.0, duration_ms, Easing::EaseOut).delayed(delay_ms),
        Animation::tween(trigger, Property::TranslateY, dy, 0.0, duration_ms, Easing::EaseOut).delayed(delay_ms),
    ]
}

/// Opacity 0 → 1 while sliding in horizontally from `dx`.
#[must_use]
pub fn fade_slide_x(trigger: Trigger, dx: f64, duration_ms: f64, delay_ms: f64) -> Vec<Animation> {
    vec![
        Animation::tween(trigger, Property::Opacity, 0.0, 1.0, duration_ms, Easing::EaseOut).delayed(delay_ms),
        Animation::tween(trigger, Property::TranslateX, dx, 0.0, duration_ms, Easing::EaseOut).delayed(delay_ms),
    ]
}

/// Opacity 0 → 1 while growing from `from_scale`.
#[must_use]
pub fn pop_in(trigger: Trigger, from_scale: f64, duration_ms: f64, delay_ms: f64) -> Vec<Animation> {
    vec![
        Animation::tween(trigger, Property::Opacity, 0.0, 1.0, duration_ms, Easing::EaseOut).delayed(delay_ms),
        Animation::tween(trigger, Property::Scale, from_scale, 1.0, duration_ms, Easing::EaseOut).delayed(delay_ms),
    ]
}

/// Navbar drops in from above.
#[must_use]
pub fn nav_slide_in() -> Vec<Animation> {
    vec![Animation::tween(Trigger::Mount, Property::TranslateY, -100.0, 0.0, 600.0, Easing::EaseOut)]
}

/// Desktop nav link `index`, staggered 100 ms apart.
#[must_use]
pub fn nav_link(index: usize) -> Vec<Animation> {
    #[allow(clippy::cast_precision_loss)]
    let delay = index as f64 * 100.0;
    let mut anims = fade_up(Trigger::Mount, -20.0, 500.0, delay);
    anims.push(hover_lift(-2.0));
    anims
}

/// Card entering on scroll: fade, rise 50 px and grow from `from_scale`.
#[must_use]
pub fn card_enter(from_scale: f64) -> Vec<Animation> {
    vec![
        Animation::spring(Trigger::InView, Property::Opacity, 0.0, 1.0, CARD_SPRING),
        Animation::spring(Trigger::InView, Property::TranslateY, 50.0, 0.0, CARD_SPRING),
        Animation::spring(Trigger::InView, Property::Scale, from_scale, 1.0, CARD_SPRING),
    ]
}

/// Footer column entering on scroll.
#[must_use]
pub fn footer_column() -> Vec<Animation> {
    vec![
        Animation::spring(Trigger::InView, Property::Opacity, 0.0, 1.0, CARD_SPRING),
        Animation::spring(Trigger::InView, Property::TranslateY, 20.0, 0.0, CARD_SPRING),
    ]
}

/// Hero stat number `index` popping in after the headline.
#[must_use]
pub fn stat_pop(index: usize) -> Vec<Animation> {
    #[allow(clippy::cast_precision_loss)]
    let delay = 1000.0 + index as f64 * 200.0;
    vec![Animation::tween(Trigger::Mount, Property::Scale, 0.0, 1.0, 500.0, Easing::EaseOut).delayed(delay)]
}

/// Testimonial slide entering from the side it is travelling from.
#[must_use]
pub fn slide_in(direction: Step) -> Vec<Animation> {
    let from = match direction {
        Step::Forward => SLIDE_DISTANCE_PX,
        Step::Backward => -SLIDE_DISTANCE_PX,
    };
    vec![
        Animation::spring(Trigger::Mount, Property::TranslateX, from, 0.0, SLIDE_SPRING),
        Animation::tween(Trigger::Mount, Property::Opacity, 0.0, 1.0, 200.0, Easing::EaseOut),
    ]
}

// =============================================================================
// POINTER
// =============================================================================

#[must_use]
pub fn hover_scale(to: f64) -> Animation {
    Animation::spring(Trigger::Hover, Property::Scale, 1.0, to, HOVER_SPRING)
}

/// Vertical hover offset; negative values lift the element.
#[must_use]
pub fn hover_lift(dy: f64) -> Animation {
    Animation::spring(Trigger::Hover, Property::TranslateY, 0.0, dy, HOVER_SPRING)
}

#[must_use]
pub fn hover_shift_x(dx: f64) -> Animation {
    Animation::spring(Trigger::Hover, Property::TranslateX, 0.0, dx, HOVER_SPRING)
}

#[must_use]
pub fn press_scale(to: f64) -> Animation {
    Animation::spring(Trigger::Press, Property::Scale, 1.0, to, HOVER_SPRING)
}

/// Grow on hover, shrink on press.
#[must_use]
pub fn button_feedback(hover: f64, press: f64) -> Vec<Animation> {
    vec![hover_scale(hover), press_scale(press)]
}

// =============================================================================
// STATE
// =============================================================================

/// Toggle knob sliding right when dark.
#[must_use]
pub fn theme_knob() -> Vec<Animation> {
    vec![
        Animation::spring(Trigger::State, Property::TranslateX, 0.0, 24.0, KNOB_SPRING),
        hover_scale(1.1),
    ]
}

/// Sun/moon icon turning over when dark.
#[must_use]
pub fn theme_icon() -> Vec<Animation> {
    vec![
        Animation::tween(Trigger::State, Property::Rotate, 0.0, 180.0, DEFAULT_TWEEN_MS, Easing::EaseOut),
        Animation::tween(Trigger::State, Property::Scale, 1.0, 0.8, DEFAULT_TWEEN_MS, Easing::EaseOut),
    ]
}

/// Layer that fades in when its state is on (toggle gradient, glow).
#[must_use]
pub fn state_fade(to: f64) -> Vec<Animation> {
    vec![Animation::tween(Trigger::State, Property::Opacity, 0.0, to, DEFAULT_TWEEN_MS, Easing::EaseOut)]
}

/// Mobile menu icon flipping when open.
#[must_use]
pub fn menu_icon() -> Vec<Animation> {
    vec![Animation::tween(Trigger::State, Property::Rotate, 0.0, 180.0, DEFAULT_TWEEN_MS, Easing::EaseOut)]
}

// =============================================================================
// AMBIENT LOOPS
// =============================================================================

/// Blurred background orb drifting out to `(x, y, scale)` and back.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orb {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub period_ms: f64,
}

pub const HERO_ORBS: [Orb; 2] = [
    Orb { x: 50.0, y: -30.0, scale: 1.1, period_ms: 8000.0 },
    Orb { x: -40.0, y: 20.0, scale: 0.9, period_ms: 10_000.0 },
];

pub const FEATURE_ORBS: [Orb; 2] = [
    Orb { x: 100.0, y: -50.0, scale: 1.2, period_ms: 8000.0 },
    Orb { x: -80.0, y: 60.0, scale: 0.8, period_ms: 10_000.0 },
];

impl Orb {
    #[must_use]
    pub fn animations(&self) -> Vec<Animation> {
        round_trip(
            &[
                (Property::TranslateX, 0.0, self.x),
                (Property::TranslateY, 0.0, self.y),
                (Property::Scale, 1.0, self.scale),
            ],
            self.period_ms,
            0.0,
            Easing::EaseInOut,
        )
    }
}

/// Small dot floating behind the hero copy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Floater {
    pub delay_ms: f64,
    pub period_ms: f64,
    pub x: f64,
    pub y: f64,
}

pub const HERO_FLOATERS: [Floater; 4] = [
    Floater { delay_ms: 0.0, period_ms: 3000.0, x: 20.0, y: 20.0 },
    Floater { delay_ms: 500.0, period_ms: 4000.0, x: -30.0, y: 40.0 },
    Floater { delay_ms: 1000.0, period_ms: 3500.0, x: 40.0, y: -20.0 },
    Floater { delay_ms: 1500.0, period_ms: 4500.0, x: -20.0, y: 30.0 },
];

impl Floater {
    #[must_use]
    pub fn animations(&self) -> Vec<Animation> {
        round_trip(
            &[
                (Property::TranslateX, 0.0, self.x),
                (Property::TranslateY, 0.0, self.y),
                (Property::Scale, 1.0, 1.2),
            ],
            self.period_ms,
            self.delay_ms,
            Easing::EaseInOut,
        )
    }
}

/// Number of twinkling particles in the footer background.
pub const FOOTER_PARTICLES: usize = 6;

/// Footer particle `index`: rises 20 px and brightens, each slower and later
/// than the last.
#[must_use]
pub fn footer_particle(index: usize) -> Vec<Animation> {
    #[allow(clippy::cast_precision_loss)]
    let i = index as f64;
    round_trip(
        &[(Property::TranslateY, 0.0, -20.0), (Property::Opacity, 0.2, 0.8)],
        3000.0 + i * 500.0,
        i * 500.0,
        Easing::EaseInOut,
    )
}

/// Bubble bobbing on a card corner by `dy`, growing to `scale`.
#[must_use]
pub fn card_bubble(dy: f64, scale: f64, period_ms: f64, delay_ms: f64) -> Vec<Animation> {
    round_trip(
        &[(Property::TranslateY, 0.0, dy), (Property::Scale, 1.0, scale)],
        period_ms,
        delay_ms,
        Easing::EaseInOut,
    )
}

/// Gradient text sweeping its background across and back.
#[must_use]
pub fn shimmer() -> Vec<Animation> {
    round_trip(&[(Property::BackgroundPositionX, 0.0, 100.0)], 3000.0, 0.0, Easing::Linear)
}

/// `(property, from, to)` moves that go out and back once per `period_ms`.
fn round_trip(moves: &[(Property, f64, f64)], period_ms: f64, delay_ms: f64, easing: Easing) -> Vec<Animation> {
    moves
        .iter()
        .map(|&(property, from, to)| {
            Animation::tween(Trigger::Always, property, from, to, period_ms / 2.0, easing)
                .delayed(delay_ms)
                .repeating(Repeat::Mirror)
        })
        .collect()
}
