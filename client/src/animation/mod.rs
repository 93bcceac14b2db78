//! Declarative animation descriptors and their executor.
//!
//! ARCHITECTURE
//! ============
//! Every animated element is described by plain data: which trigger starts
//! it, which property moves, the `from`/`to` values, and how it gets there
//! (tween or spring, delay, repeat). Nothing here touches the DOM.
//!
//! - `sample` is the executor: the value of one animation at any point in
//!   time, used for tests and for baking looping animations into keyframes.
//! - `css` renders descriptors to inline styles (`transition` for
//!   state-triggered motion, `@keyframes` for loops).
//! - `presets` holds the concrete values used by the landing page.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod css;
pub mod easing;
pub mod presets;
pub mod spring;

use serde::{Deserialize, Serialize};

pub use easing::Easing;
pub use spring::Spring;

/// What starts an animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Trigger {
    /// Plays once after the element is mounted.
    Mount,
    /// Plays once the element scrolls into view.
    InView,
    /// Follows an external boolean (e.g. the theme flag).
    State,
    /// Plays while the pointer is over the element.
    Hover,
    /// Plays while the element is pressed.
    Press,
    /// Runs continuously from mount.
    Always,
}

impl Trigger {
    /// Triggers driven by the element's `entered` phase.
    #[must_use]
    pub fn is_entry(self) -> bool {
        matches!(self, Self::Mount | Self::InView | Self::State)
    }
}

/// Animatable style property.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Property {
    Opacity,
    /// Pixels.
    TranslateX,
    /// Pixels.
    TranslateY,
    Scale,
    /// Degrees.
    Rotate,
    /// Degrees.
    RotateX,
    /// Degrees.
    RotateY,
    /// Percent of the horizontal background position.
    BackgroundPositionX,
}

impl Property {
    /// Value of the property when nothing animates it.
    #[must_use]
    pub fn rest_value(self) -> f64 {
        match self {
            Self::Opacity | Self::Scale => 1.0,
            _ => 0.0,
        }
    }

    /// CSS property the value is written to.
    #[must_use]
    pub fn css_property(self) -> &'static str {
        match self {
            Self::Opacity => "opacity",
            Self::BackgroundPositionX => "background-position",
            _ => "transform",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Repeat {
    #[default]
    Once,
    /// Restart from `from` after each run.
    Loop,
    /// Play forward then backward, forever.
    Mirror,
}

/// How the value travels from `from` to `to`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", rename_all_fields = "camelCase", tag = "type")]
pub enum Transition {
    Tween { duration_ms: f64, easing: Easing },
    Spring(Spring),
}

impl Transition {
    #[must_use]
    pub fn tween(duration_ms: f64, easing: Easing) -> Self {
        Self::Tween { duration_ms, easing }
    }

    /// Length of one run. Springs report their settle time.
    #[must_use]
    pub fn duration_ms(&self) -> f64 {
        match self {
            Self::Tween { duration_ms, .. } => duration_ms.max(0.0),
            Self::Spring(spring) => spring.settle_ms(),
        }
    }

    /// Progress `t_ms` into one run; 0 at the start, 1 at rest.
    #[must_use]
    pub fn progress(&self, t_ms: f64) -> f64 {
        match self {
            Self::Tween { duration_ms, easing } => {
                if *duration_ms <= 0.0 {
                    return 1.0;
                }
                easing.apply(t_ms / duration_ms)
            }
            Self::Spring(spring) => spring.position(t_ms),
        }
    }
}

/// One property moving between two values.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Animation {
    pub trigger: Trigger,
    pub property: Property,
    pub from: f64,
    pub to: f64,
    pub transition: Transition,
    #[serde(default)]
    pub delay_ms: f64,
    #[serde(default)]
    pub repeat: Repeat,
}

impl Animation {
    #[must_use]
    pub fn tween(trigger: Trigger, property: Property, from: f64, to: f64, duration_ms: f64, easing: Easing) -> Self {
        Self {
            trigger,
            property,
            from,
            to,
            transition: Transition::tween(duration_ms, easing),
            delay_ms: 0.0,
            repeat: Repeat::Once,
        }
    }

    #[must_use]
    pub fn spring(trigger: Trigger, property: Property, from: f64, to: f64, spring: Spring) -> Self {
        Self {
            trigger,
            property,
            from,
            to,
            transition: Transition::Spring(spring),
            delay_ms: 0.0,
            repeat: Repeat::Once,
        }
    }

    #[must_use]
    pub fn delayed(mut self, delay_ms: f64) -> Self {
        self.delay_ms = delay_ms.max(0.0);
        self
    }

    #[must_use]
    pub fn repeating(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    /// Length of one forward run, excluding delay.
    #[must_use]
    pub fn duration_ms(&self) -> f64 {
        self.transition.duration_ms()
    }

    /// Length of one repeat cycle: a mirrored animation needs two runs.
    #[must_use]
    pub fn cycle_ms(&self) -> f64 {
        match self.repeat {
            Repeat::Mirror => 2.0 * self.duration_ms(),
            Repeat::Once | Repeat::Loop => self.duration_ms(),
        }
    }

    /// Value at `elapsed_ms` since the trigger fired.
    #[must_use]
    pub fn sample(&self, elapsed_ms: f64) -> f64 {
        let t = elapsed_ms - self.delay_ms;
        if t <= 0.0 {
            return self.from;
        }
        let duration = self.duration_ms();
        if duration <= 0.0 {
            return self.to;
        }

        let progress = match self.repeat {
            Repeat::Once => {
                if t >= duration {
                    return self.to;
                }
                self.transition.progress(t)
            }
            Repeat::Loop => self.transition.progress(t % duration),
            Repeat::Mirror => {
                let cycle = t % (2.0 * duration);
                if cycle <= duration {
                    self.transition.progress(cycle)
                } else {
                    self.transition.progress(2.0 * duration - cycle)
                }
            }
        };
        self.interpolate(progress)
    }

    /// Value at a progress fraction; may leave `[from, to]` for springs.
    #[must_use]
    pub fn interpolate(&self, progress: f64) -> f64 {
        self.from + (self.to - self.from) * progress
    }
}

/// Delays applied to a group of children entering together.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stagger {
    pub delay_children_ms: f64,
    pub stagger_children_ms: f64,
}

impl Stagger {
    #[must_use]
    pub const fn new(delay_children_ms: f64, stagger_children_ms: f64) -> Self {
        Self { delay_children_ms, stagger_children_ms }
    }

    /// Extra delay for the child at `index`.
    #[must_use]
    pub fn delay_for(&self, index: usize) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let index = index as f64;
        self.delay_children_ms + self.stagger_children_ms * index
    }
}
