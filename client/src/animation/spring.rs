//! Damped spring physics for spring-type transitions.
//!
//! Progress is the displacement of a unit spring released from 0 toward 1
//! with zero initial velocity. Under-damped springs overshoot past 1 before
//! settling.

#[cfg(test)]
#[path = "spring_test.rs"]
mod spring_test;

use serde::{Deserialize, Serialize};

/// Distance from rest below which a spring counts as settled.
pub const REST_TOLERANCE: f64 = 0.001;
/// Upper bound on computed settle time.
pub const MAX_SETTLE_MS: f64 = 10_000.0;
const SETTLE_SCAN_STEP_MS: f64 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Spring {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl Default for Spring {
    fn default() -> Self {
        Self { stiffness: 100.0, damping: 10.0, mass: 1.0 }
    }
}

impl Spring {
    #[must_use]
    pub const fn new(stiffness: f64, damping: f64) -> Self {
        Self { stiffness, damping, mass: 1.0 }
    }

    /// Damping ratio; `< 1` oscillates, `1` is critical, `> 1` creeps.
    #[must_use]
    pub fn damping_ratio(&self) -> f64 {
        let (k, m) = self.sanitized();
        self.damping.max(0.0) / (2.0 * (k * m).sqrt())
    }

    /// Displacement at `t_ms` after release.
    #[must_use]
    pub fn position(&self, t_ms: f64) -> f64 {
        if t_ms <= 0.0 {
            return 0.0;
        }
        let t = t_ms / 1000.0;
        let (k, m) = self.sanitized();
        let omega0 = (k / m).sqrt();
        let zeta = self.damping_ratio();

        if (zeta - 1.0).abs() < 1e-9 {
            1.0 - (-omega0 * t).exp() * (1.0 + omega0 * t)
        } else if zeta < 1.0 {
            let omega_d = omega0 * (1.0 - zeta * zeta).sqrt();
            let decay = (-zeta * omega0 * t).exp();
            1.0 - decay * ((omega_d * t).cos() + (zeta * omega0 / omega_d) * (omega_d * t).sin())
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -omega0 * (zeta - root);
            let r2 = -omega0 * (zeta + root);
            1.0 - (r2 * (r1 * t).exp() - r1 * (r2 * t).exp()) / (r2 - r1)
        }
    }

    /// Time after which the spring stays within [`REST_TOLERANCE`] of 1.
    #[must_use]
    pub fn settle_ms(&self) -> f64 {
        let mut last_outside = 0.0;
        let mut t = 0.0;
        while t <= MAX_SETTLE_MS {
            if (1.0 - self.position(t)).abs() >= REST_TOLERANCE {
                last_outside = t;
            }
            t += SETTLE_SCAN_STEP_MS;
        }
        (last_outside + SETTLE_SCAN_STEP_MS).min(MAX_SETTLE_MS)
    }

    /// CSS `linear()` timing function approximating the spring over
    /// [`Spring::settle_ms`] with `samples` segments.
    #[must_use]
    pub fn css_easing(&self, samples: usize) -> String {
        let samples = samples.max(2);
        let settle = self.settle_ms();
        let stops = (0..=samples)
            .map(|i| {
                #[allow(clippy::cast_precision_loss)]
                let t = settle * i as f64 / samples as f64;
                let value = if i == samples { 1.0 } else { self.position(t) };
                format!("{value:.4}")
            })
            .collect::<Vec<_>>();
        format!("linear({})", stops.join(", "))
    }

    fn sanitized(&self) -> (f64, f64) {
        (self.stiffness.max(1e-6), self.mass.max(1e-6))
    }
}
