//! Pointer tracking for the hero parallax tilt.

#[cfg(test)]
#[path = "pointer_test.rs"]
mod pointer_test;

use leptos::prelude::*;

use crate::config::PARALLAX_DEG_PER_PX;

/// Last pointer position together with the viewport size it was measured in.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
    pub viewport_width: f64,
    pub viewport_height: f64,
}

/// Tilt `(rotate_x_deg, rotate_y_deg)` for a pointer position. Zero at the
/// viewport center; the vertical axis is inverted so the surface leans
/// toward the pointer.
#[must_use]
pub fn parallax_tilt(pos: PointerPosition) -> (f64, f64) {
    if pos.viewport_width <= 0.0 || pos.viewport_height <= 0.0 {
        return (0.0, 0.0);
    }
    let rotate_y = (pos.x - pos.viewport_width / 2.0) * PARALLAX_DEG_PER_PX;
    let rotate_x = (pos.y - pos.viewport_height / 2.0) * -PARALLAX_DEG_PER_PX;
    (rotate_x, rotate_y)
}

/// Pointer position over the window, one `mousemove` listener per caller,
/// removed when the owning view is disposed.
pub fn use_pointer_position() -> ReadSignal<PointerPosition> {
    let (position, set_position) = signal(PointerPosition::default());

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::mousemove, move |ev| {
            let window = window();
            let size = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            set_position.set(PointerPosition {
                x: f64::from(ev.client_x()),
                y: f64::from(ev.client_y()),
                viewport_width: size(window.inner_width()),
                viewport_height: size(window.inner_height()),
            });
        });
        on_cleanup(move || handle.remove());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = set_position;
    }

    position
}
