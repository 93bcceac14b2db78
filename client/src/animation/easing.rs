//! Tween easing curves.
//!
//! Named curves use the CSS definitions so that sampled values and the
//! browser's own `transition-timing-function` agree.

#[cfg(test)]
#[path = "easing_test.rs"]
mod easing_test;

use serde::{Deserialize, Serialize};

const NEWTON_ITERATIONS: usize = 8;
const BISECTION_ITERATIONS: usize = 24;
const SOLVE_EPSILON: f64 = 1e-6;

/// Progress curve mapping linear time `[0, 1]` to eased progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// Control points `(x1, y1, x2, y2)` of a CSS cubic bezier.
    CubicBezier(f64, f64, f64, f64),
}

impl Easing {
    /// Eased progress for linear progress `t`, clamped to `[0, 1]`.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self.control_points() {
            None => t,
            Some((x1, y1, x2, y2)) => solve_bezier(t, x1, y1, x2, y2),
        }
    }

    /// CSS `transition-timing-function` value.
    #[must_use]
    pub fn css(self) -> String {
        match self {
            Self::Linear => "linear".to_owned(),
            Self::EaseIn => "ease-in".to_owned(),
            Self::EaseOut => "ease-out".to_owned(),
            Self::EaseInOut => "ease-in-out".to_owned(),
            Self::CubicBezier(x1, y1, x2, y2) => format!("cubic-bezier({x1}, {y1}, {x2}, {y2})"),
        }
    }

    fn control_points(self) -> Option<(f64, f64, f64, f64)> {
        match self {
            Self::Linear => None,
            Self::EaseIn => Some((0.42, 0.0, 1.0, 1.0)),
            Self::EaseOut => Some((0.0, 0.0, 0.58, 1.0)),
            Self::EaseInOut => Some((0.42, 0.0, 0.58, 1.0)),
            Self::CubicBezier(x1, y1, x2, y2) => Some((x1.clamp(0.0, 1.0), y1, x2.clamp(0.0, 1.0), y2)),
        }
    }
}

/// One coordinate of a cubic bezier anchored at 0 and 1.
fn bezier(s: f64, p1: f64, p2: f64) -> f64 {
    let u = 1.0 - s;
    3.0 * u * u * s * p1 + 3.0 * u * s * s * p2 + s * s * s
}

fn bezier_slope(s: f64, p1: f64, p2: f64) -> f64 {
    let u = 1.0 - s;
    3.0 * u * u * p1 + 6.0 * u * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

/// Find the curve parameter whose x equals `x`, then return its y.
fn solve_bezier(x: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    if x <= 0.0 || x >= 1.0 {
        return x;
    }

    let mut s = x;
    for _ in 0..NEWTON_ITERATIONS {
        let err = bezier(s, x1, x2) - x;
        if err.abs() < SOLVE_EPSILON {
            return bezier(s, y1, y2);
        }
        let slope = bezier_slope(s, x1, x2);
        if slope.abs() < SOLVE_EPSILON {
            break;
        }
        s -= err / slope;
    }

    // Newton stalls on flat segments; bisection always converges since x(s)
    // is monotone for x1, x2 in [0, 1].
    let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
    s = x;
    for _ in 0..BISECTION_ITERATIONS {
        let value = bezier(s, x1, x2);
        if (value - x).abs() < SOLVE_EPSILON {
            break;
        }
        if value < x {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) / 2.0;
    }
    bezier(s, y1, y2)
}
