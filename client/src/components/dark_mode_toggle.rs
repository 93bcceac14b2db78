//! Light/dark switch shown in the navbar.

#[cfg(test)]
#[path = "dark_mode_toggle_test.rs"]
mod dark_mode_toggle_test;

use leptos::prelude::*;

use crate::animation::presets;
use crate::components::motion::Motion;
use crate::util::dark_mode::use_theme;

/// Accessible label describing what a click will do.
pub fn toggle_label(is_dark: bool) -> &'static str {
    if is_dark { "Switch to light mode" } else { "Switch to dark mode" }
}

#[component]
pub fn DarkModeToggle() -> impl IntoView {
    let theme = use_theme();
    let is_dark = Signal::derive(move || theme.is_dark());

    view! {
        <Motion class="theme-toggle-wrap" animations=presets::button_feedback(1.05, 0.95)>
            <button
                type="button"
                class="theme-toggle"
                aria-label=move || toggle_label(is_dark.get())
                on:click=move |_| theme.toggle()
            >
                <Motion class="theme-toggle__backdrop" animations=presets::state_fade(1.0) active=is_dark/>
                <Motion class="theme-toggle__knob" animations=presets::theme_knob() active=is_dark>
                    <Motion class="theme-toggle__icon" animations=presets::theme_icon() active=is_dark>
                        {move || if is_dark.get() { moon_icon().into_any() } else { sun_icon().into_any() }}
                    </Motion>
                </Motion>
                <Motion class="theme-toggle__glow" animations=presets::state_fade(0.2) active=is_dark/>
            </button>
        </Motion>
    }
}

fn moon_icon() -> impl IntoView {
    view! {
        <svg width="14" height="14" viewBox="0 0 24 24" fill="currentColor" aria-hidden="true">
            <path d="M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z"/>
        </svg>
    }
}

fn sun_icon() -> impl IntoView {
    view! {
        <svg width="14" height="14" viewBox="0 0 24 24" fill="currentColor" stroke="currentColor" stroke-width="2" aria-hidden="true">
            <circle cx="12" cy="12" r="5"/>
            <line x1="12" y1="1" x2="12" y2="3"/>
            <line x1="12" y1="21" x2="12" y2="23"/>
            <line x1="4.22" y1="4.22" x2="5.64" y2="5.64"/>
            <line x1="18.36" y1="18.36" x2="19.78" y2="19.78"/>
            <line x1="1" y1="12" x2="3" y2="12"/>
            <line x1="21" y1="12" x2="23" y2="12"/>
            <line x1="4.22" y1="19.78" x2="5.64" y2="18.36"/>
            <line x1="18.36" y1="5.64" x2="19.78" y2="4.22"/>
        </svg>
    }
}
