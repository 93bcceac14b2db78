//! Testimonial carousel index and auto-play state machine.
//!
//! DESIGN
//! ======
//! Two modes, `AutoPlaying` and `Paused`. The page starts auto-playing; any
//! manual navigation pauses it and nothing in the page resumes it. The timer
//! itself lives in the component (`util::ticker`) and only calls `tick`, so
//! this type stays synchronous and deterministic. `elapse` replays a span of
//! wall time as whole ticks for callers that drive their own clock.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

use crate::config::CAROUSEL_INTERVAL_MS;

/// Rejected carousel navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CarouselError {
    #[error("carousel index {index} out of range (len {len})")]
    OutOfRange { index: usize, len: usize },
}

/// One-slot move. Equivalent to a delta of `+1` / `-1`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Step {
    #[default]
    Forward,
    Backward,
}

impl Step {
    #[must_use]
    pub fn delta(self) -> isize {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayMode {
    AutoPlaying,
    Paused,
}

/// Observable carousel state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselState {
    pub current_index: usize,
    pub auto_playing: bool,
}

impl Default for CarouselState {
    fn default() -> Self {
        Self { current_index: 0, auto_playing: true }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CarouselController {
    len: usize,
    state: CarouselState,
    interval_ms: u32,
    since_tick_ms: u32,
    direction: Step,
}

impl CarouselController {
    /// Controller over `len` slides using the default auto-advance interval.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self::with_interval(len, CAROUSEL_INTERVAL_MS)
    }

    #[must_use]
    pub fn with_interval(len: usize, interval_ms: u32) -> Self {
        Self {
            len,
            state: CarouselState::default(),
            interval_ms: interval_ms.max(1),
            since_tick_ms: 0,
            direction: Step::Forward,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn state(&self) -> CarouselState {
        self.state
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    #[must_use]
    pub fn is_auto_playing(&self) -> bool {
        self.state.auto_playing
    }

    #[must_use]
    pub fn mode(&self) -> PlayMode {
        if self.state.auto_playing { PlayMode::AutoPlaying } else { PlayMode::Paused }
    }

    /// Direction of the most recent move, used for the slide-in side.
    #[must_use]
    pub fn direction(&self) -> Step {
        self.direction
    }

    #[must_use]
    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Move one slot, wrapping at both ends. Does not touch auto-play.
    pub fn advance(&mut self, step: Step) {
        if self.len == 0 {
            return;
        }
        let current = self.state.current_index;
        self.state.current_index = match step {
            Step::Forward => (current + 1) % self.len,
            Step::Backward => (current + self.len - 1) % self.len,
        };
        self.direction = step;
    }

    /// Show slide `index`. Does not touch auto-play.
    ///
    /// # Errors
    ///
    /// Returns [`CarouselError::OutOfRange`] when `index >= len`; the state
    /// is left unchanged.
    pub fn jump_to(&mut self, index: usize) -> Result<(), CarouselError> {
        if index >= self.len {
            return Err(CarouselError::OutOfRange { index, len: self.len });
        }
        if index != self.state.current_index {
            self.direction = if index < self.state.current_index { Step::Backward } else { Step::Forward };
        }
        self.state.current_index = index;
        Ok(())
    }

    /// Switch auto-play on or off. The component's ticker follows this flag.
    pub fn set_auto_play(&mut self, enabled: bool) {
        self.state.auto_playing = enabled;
        self.since_tick_ms = 0;
    }

    /// Timer callback. Advances one slot while auto-playing and reports
    /// whether it did.
    pub fn tick(&mut self) -> bool {
        if !self.state.auto_playing {
            return false;
        }
        self.advance(Step::Forward);
        true
    }

    /// Account for `ms` of elapsed time, firing one tick per full interval.
    /// Returns the number of ticks that advanced the carousel.
    ///
    /// Equivalent to calling [`tick`](Self::tick) once per interval, applied
    /// in one step.
    pub fn elapse(&mut self, ms: u32) -> u32 {
        if !self.state.auto_playing {
            return 0;
        }
        let total = self.since_tick_ms.saturating_add(ms);
        let ticks = total / self.interval_ms;
        self.since_tick_ms = total % self.interval_ms;
        if ticks > 0 && self.len > 0 {
            let steps = usize::try_from(ticks).map_or(0, |t| t % self.len);
            self.state.current_index = (self.state.current_index + steps) % self.len;
            self.direction = Step::Forward;
        }
        ticks
    }

    /// User pressed "next".
    pub fn next(&mut self) {
        self.advance(Step::Forward);
        self.set_auto_play(false);
    }

    /// User pressed "previous".
    pub fn prev(&mut self) {
        self.advance(Step::Backward);
        self.set_auto_play(false);
    }

    /// User picked a dot.
    ///
    /// # Errors
    ///
    /// Returns [`CarouselError::OutOfRange`] for an index past the end; the
    /// state, including auto-play, is left unchanged.
    pub fn select(&mut self, index: usize) -> Result<(), CarouselError> {
        self.jump_to(index)?;
        self.set_auto_play(false);
        Ok(())
    }
}
