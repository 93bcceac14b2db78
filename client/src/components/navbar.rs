//! Fixed top navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Slides in on mount, turns solid once the page scrolls, and collapses the
//! links into a toggled menu on small screens.

use leptos::prelude::*;

use crate::animation::{Trigger, presets};
use crate::components::dark_mode_toggle::DarkModeToggle;
use crate::components::motion::Motion;
use crate::content::{BRAND, NAV_LINKS, REGISTER_CTA};
use crate::util::scroll::{is_scrolled, use_scroll_y};

#[component]
pub fn Navbar() -> impl IntoView {
    let scroll_y = use_scroll_y();
    let menu_open = RwSignal::new(false);

    let nav_class = move || {
        if is_scrolled(scroll_y.get()) { "navbar navbar--scrolled" } else { "navbar" }
    };

    let register_anims =
        [presets::pop_in(Trigger::Mount, 0.8, 500.0, 400.0), presets::button_feedback(1.05, 0.95)].concat();

    view! {
        <Motion class="navbar-shell" animations=presets::nav_slide_in()>
            <nav class=nav_class>
                <div class="navbar__bar">
                    <Motion class="navbar__brand" animations=vec![presets::hover_scale(1.05)]>
                        <a href="#home" class="brand gradient-text">{BRAND}</a>
                    </Motion>

                    <div class="navbar__menu-toggle">
                        <Motion animations=vec![presets::press_scale(0.95)]>
                            <button
                                type="button"
                                class="navbar__menu-button"
                                aria-expanded=move || if menu_open.get() { "true" } else { "false" }
                                on:click=move |_| menu_open.update(|open| *open = !*open)
                            >
                                <span class="sr-only">"Open main menu"</span>
                                <Motion animations=presets::menu_icon() active=menu_open>
                                    {move || if menu_open.get() { close_icon().into_any() } else { menu_icon().into_any() }}
                                </Motion>
                            </button>
                        </Motion>
                    </div>

                    <div class="navbar__links">
                        {NAV_LINKS
                            .iter()
                            .enumerate()
                            .map(|(i, link)| {
                                view! {
                                    <Motion animations=presets::nav_link(i)>
                                        <a href=link.href class="navbar__link">
                                            {link.label}
                                            <span class="navbar__underline"></span>
                                        </a>
                                    </Motion>
                                }
                            })
                            .collect_view()}
                        <Motion animations=presets::pop_in(Trigger::Mount, 0.8, 500.0, 300.0)>
                            <DarkModeToggle/>
                        </Motion>
                        <Motion animations=register_anims>
                            <a href=REGISTER_CTA.href class="btn btn--primary btn--small">{REGISTER_CTA.label}</a>
                        </Motion>
                    </div>
                </div>

                <Show when=move || menu_open.get()>
                    <div class="navbar__mobile">
                        {NAV_LINKS
                            .iter()
                            .enumerate()
                            .map(|(i, link)| {
                                #[allow(clippy::cast_precision_loss)]
                                let delay = i as f64 * 100.0;
                                view! {
                                    <Motion animations=presets::fade_slide_x(Trigger::Mount, -20.0, 300.0, delay)>
                                        <a
                                            href=link.href
                                            class="navbar__mobile-link"
                                            on:click=move |_| menu_open.set(false)
                                        >
                                            {link.label}
                                        </a>
                                    </Motion>
                                }
                            })
                            .collect_view()}
                        <Motion
                            class="navbar__mobile-toggle"
                            animations=presets::pop_in(Trigger::Mount, 0.9, 300.0, 300.0)
                        >
                            <DarkModeToggle/>
                        </Motion>
                        <Motion animations=presets::pop_in(Trigger::Mount, 0.9, 300.0, 400.0)>
                            <a
                                href=REGISTER_CTA.href
                                class="btn btn--primary btn--block"
                                on:click=move |_| menu_open.set(false)
                            >
                                {REGISTER_CTA.label}
                            </a>
                        </Motion>
                    </div>
                </Show>
            </nav>
        </Motion>
    }
}

fn menu_icon() -> impl IntoView {
    view! {
        <svg class="icon" fill="none" viewBox="0 0 24 24" stroke="currentColor" aria-hidden="true">
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16"/>
        </svg>
    }
}

fn close_icon() -> impl IntoView {
    view! {
        <svg class="icon" fill="none" viewBox="0 0 24 24" stroke="currentColor" aria-hidden="true">
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"/>
        </svg>
    }
}
