//! Scroll-linked values and in-view detection.
//!
//! SYSTEM CONTEXT
//! ==============
//! The navbar style, the hero drift/fade, and every "animate when visible"
//! section read from here. The math is pure and tested natively; the hooks
//! register one window `scroll` listener each and remove it on cleanup.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use leptos::prelude::*;

use crate::config::{HERO_DRIFT_PX, HERO_FADE, HERO_SCROLL_RANGE_PX, NAV_SCROLLED_THRESHOLD_PX};

#[cfg(feature = "hydrate")]
use crate::config::IN_VIEW_MARGIN_PX;

/// Linear map of `value` from `input` to `output`, clamped to the output
/// range. A degenerate input range maps everything to `output.0`.
#[must_use]
pub fn map_range(value: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let span = input.1 - input.0;
    if span.abs() < f64::EPSILON {
        return output.0;
    }
    let t = ((value - input.0) / span).clamp(0.0, 1.0);
    output.0 + (output.1 - output.0) * t
}

/// Navbar switches to its solid style past the threshold.
#[must_use]
pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAV_SCROLLED_THRESHOLD_PX
}

/// Hero content `(translate_y_px, opacity)` for a scroll offset.
#[must_use]
pub fn hero_drift(scroll_y: f64) -> (f64, f64) {
    (
        map_range(scroll_y, HERO_SCROLL_RANGE_PX, HERO_DRIFT_PX),
        map_range(scroll_y, HERO_SCROLL_RANGE_PX, HERO_FADE),
    )
}

/// Whether a box spanning `top..bottom` (viewport coordinates) intersects the
/// viewport shrunk by `margin` on the top and bottom edges.
#[must_use]
pub fn is_in_view(top: f64, bottom: f64, viewport_height: f64, margin: f64) -> bool {
    top < viewport_height - margin && bottom > margin
}

/// Current `window.scrollY`, updated on every scroll event.
pub fn use_scroll_y() -> ReadSignal<f64> {
    let (scroll_y, set_scroll_y) = signal(0.0_f64);

    #[cfg(feature = "hydrate")]
    {
        let read = move || window().scroll_y().unwrap_or(0.0);
        set_scroll_y.set(read());
        let handle = window_event_listener(leptos::ev::scroll, move |_| set_scroll_y.set(read()));
        on_cleanup(move || handle.remove());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = set_scroll_y;
    }

    scroll_y
}

/// Latches to `true` the first time `node` scrolls into view and never
/// resets.
pub fn use_in_view(node: NodeRef<leptos::html::Div>) -> ReadSignal<bool> {
    let (in_view, set_in_view) = signal(false);

    #[cfg(feature = "hydrate")]
    {
        let check = move || {
            if in_view.get_untracked() {
                return;
            }
            let Some(el) = node.get_untracked() else {
                return;
            };
            let rect = el.get_bounding_client_rect();
            let viewport_height = window().inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            if is_in_view(rect.top(), rect.bottom(), viewport_height, IN_VIEW_MARGIN_PX) {
                set_in_view.set(true);
            }
        };

        // First check once the node is attached.
        Effect::new(move || {
            if node.get().is_some() {
                check();
            }
        });

        let handle = window_event_listener(leptos::ev::scroll, move |_| check());
        on_cleanup(move || handle.remove());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (node, set_in_view);
    }

    in_view
}
