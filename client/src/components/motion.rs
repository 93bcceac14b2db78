//! Animated wrappers driven by animation descriptors.
//!
//! ARCHITECTURE
//! ============
//! `Motion` renders the state-driven part of its animations as inline
//! `transform`/`opacity` targets plus a CSS `transition`; flipping a phase
//! (mounted, in view, hovered, pressed, external state) only changes the
//! targets and the browser interpolates. `Ambient` bakes continuous loops
//! into a scoped `@keyframes` rule.

use leptos::ev::{MouseEvent, PointerEvent};
use leptos::prelude::*;

use crate::animation::Animation;
use crate::animation::css::{MotionPhase, keyframes_css, motion_style};

/// `true` two animation frames after mount, so the first paint shows the
/// `from` values and the switch to `to` is animated.
pub fn use_mounted() -> ReadSignal<bool> {
    let (mounted, set_mounted) = signal(false);

    #[cfg(feature = "hydrate")]
    request_animation_frame(move || {
        request_animation_frame(move || {
            let _ = set_mounted.try_set(true);
        });
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = set_mounted;

    mounted
}

/// Wrapper element animating its children.
///
/// `active` drives entry-type animations (`Mount`, `InView`, `State`); it
/// defaults to "mounted". `delay_ms` is added to entry delays and carries a
/// parent group's stagger. `inline` renders a `span` for use inside text.
#[component]
pub fn Motion(
    animations: Vec<Animation>,
    #[prop(into, optional)] class: String,
    #[prop(into, optional)] style: String,
    #[prop(into, optional)] active: Option<Signal<bool>>,
    #[prop(optional)] delay_ms: f64,
    #[prop(optional)] inline: bool,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let mounted = use_mounted();
    let hovered = RwSignal::new(false);
    let pressed = RwSignal::new(false);
    let engaged = RwSignal::new(false);

    let inline_style = move || {
        let entered = active.map_or_else(|| mounted.get(), |a| a.get());
        let phase = MotionPhase { entered, hovered: hovered.get(), pressed: pressed.get(), engaged: engaged.get() };
        format!("{style}{}", motion_style(&animations, phase, delay_ms))
    };
    let enter = move |_: MouseEvent| {
        hovered.set(true);
        engaged.set(true);
    };
    let leave = move |_: MouseEvent| {
        hovered.set(false);
        pressed.set(false);
    };
    let press = move |_: PointerEvent| pressed.set(true);
    let release = move |_: PointerEvent| pressed.set(false);
    let children = children.map(|c| c());

    if inline {
        view! {
            <span
                class=class
                style=inline_style
                on:mouseenter=enter
                on:mouseleave=leave
                on:pointerdown=press
                on:pointerup=release
            >
                {children}
            </span>
        }
        .into_any()
    } else {
        view! {
            <div
                class=class
                style=inline_style
                on:mouseenter=enter
                on:mouseleave=leave
                on:pointerdown=press
                on:pointerup=release
            >
                {children}
            </div>
        }
        .into_any()
    }
}

/// Element running a looping animation from mount.
#[component]
pub fn Ambient(
    /// Keyframes name; unique per page.
    #[prop(into)]
    name: String,
    animations: Vec<Animation>,
    #[prop(into, optional)] class: String,
    #[prop(into, optional)] style: String,
    #[prop(optional)] inline: bool,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let (keyframes, animation) = match keyframes_css(&name, &animations) {
        Some(css) => (css.keyframes, format!("animation: {};", css.animation)),
        None => (String::new(), String::new()),
    };
    let style = format!("{style}{animation}");
    let children = children.map(|c| c());

    let element = if inline {
        view! { <span class=class style=style>{children}</span> }.into_any()
    } else {
        view! { <div class=class style=style>{children}</div> }.into_any()
    };

    view! {
        <style>{keyframes}</style>
        {element}
    }
}
