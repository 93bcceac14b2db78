//! Shared section header used by the features and testimonials sections.

use leptos::prelude::*;

use crate::animation::{Trigger, presets};
use crate::components::motion::{Ambient, Motion};

/// Eyebrow, two-tone headline with a shimmering highlight, and blurb; all
/// fade up when `active` turns on.
#[component]
pub fn SectionHeading(
    eyebrow: &'static str,
    lead: &'static str,
    highlight: &'static str,
    shimmer_name: &'static str,
    blurb: &'static str,
    #[prop(into)] active: Signal<bool>,
) -> impl IntoView {
    view! {
        <Motion class="section__heading" animations=presets::fade_up(Trigger::InView, 30.0, 600.0, 0.0) active=active>
            <Motion class="section__eyebrow" animations=vec![presets::hover_scale(1.05)]>
                <span class="gradient-text">{eyebrow}</span>
            </Motion>
            <Motion animations=presets::fade_up(Trigger::InView, 20.0, 600.0, 200.0) active=active>
                <h2 class="section__title">
                    {lead}
                    " "
                    <Ambient name=shimmer_name animations=presets::shimmer() class="gradient-text shimmer-text" inline=true>
                        {highlight}
                    </Ambient>
                </h2>
            </Motion>
            <Motion animations=presets::fade_up(Trigger::InView, 20.0, 600.0, 400.0) active=active>
                <p class="section__blurb">{blurb}</p>
            </Motion>
        </Motion>
    }
}
