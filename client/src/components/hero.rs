//! Landing banner: headline, calls to action, stats, and the tilted image.
//!
//! SYSTEM CONTEXT
//! ==============
//! The copy block drifts up and fades slightly as the page scrolls; the image
//! tilts toward the pointer. Both listeners are scoped to this view.

use leptos::prelude::*;

use crate::animation::css::fmt_num;
use crate::animation::{Trigger, presets};
use crate::components::motion::{Ambient, Motion};
use crate::content::{
    HERO_HEADLINE, HERO_IMAGE, HERO_PRIMARY_CTA, HERO_SECONDARY_CTA, HERO_STATS, HERO_SUBTITLE, anchors,
};
use crate::util::pointer::{parallax_tilt, use_pointer_position};
use crate::util::scroll::{hero_drift, use_scroll_y};

#[component]
pub fn Hero() -> impl IntoView {
    let scroll_y = use_scroll_y();
    let pointer = use_pointer_position();

    let copy_style = move || {
        let (y, opacity) = hero_drift(scroll_y.get());
        format!("transform: translateY({}px); opacity: {};", fmt_num(y), fmt_num(opacity))
    };
    let tilt_style = move || {
        let (rotate_x, rotate_y) = parallax_tilt(pointer.get());
        format!(
            "transform: perspective(1000px) rotateY({}deg) rotateX({}deg);",
            fmt_num(rotate_y),
            fmt_num(rotate_x)
        )
    };

    let goal_anims = [presets::pop_in(Trigger::Mount, 0.8, 600.0, 300.0), vec![presets::hover_scale(1.05)]].concat();
    let image_anims = [presets::pop_in(Trigger::Mount, 0.8, 800.0, 500.0), vec![presets::hover_scale(1.02)]].concat();
    let live_card_anims = [presets::fade_up(Trigger::Mount, 20.0, 600.0, 1200.0), vec![presets::hover_scale(1.05)]].concat();
    let score_card_anims =
        [presets::fade_up(Trigger::Mount, -20.0, 600.0, 1400.0), vec![presets::hover_scale(1.05)]].concat();

    view! {
        <section id=anchors::HOME class="hero">
            <div class="hero__backdrop">
                {presets::HERO_FLOATERS
                    .iter()
                    .enumerate()
                    .map(|(i, floater)| {
                        view! {
                            <Ambient
                                name=format!("hero-floater-{i}")
                                animations=floater.animations()
                                class="hero__floater"
                                style=format!("left: {}%; top: {}%;", 20 + i * 20, 30 + i * 15)
                            />
                        }
                    })
                    .collect_view()}
            </div>
            {presets::HERO_ORBS
                .iter()
                .enumerate()
                .map(|(i, orb)| {
                    view! {
                        <Ambient
                            name=format!("hero-orb-{i}")
                            animations=orb.animations()
                            class=format!("orb orb--hero-{i}")
                        />
                    }
                })
                .collect_view()}

            <div class="hero__body" style=copy_style>
                <div class="hero__copy">
                    <Motion animations=presets::fade_up(Trigger::Mount, 50.0, 800.0, 0.0)>
                        <h1 class="hero__title">
                            <Ambient
                                name="hero-shimmer"
                                animations=presets::shimmer()
                                class="hero__title-line shimmer-text"
                                inline=true
                            >
                                {HERO_HEADLINE.0}
                            </Ambient>
                            " "
                            <Motion class="hero__title-line gradient-text" animations=goal_anims inline=true>
                                {HERO_HEADLINE.1}
                            </Motion>
                        </h1>
                    </Motion>

                    <Motion animations=presets::fade_up(Trigger::Mount, 30.0, 600.0, 500.0)>
                        <p class="hero__subtitle">{HERO_SUBTITLE}</p>
                    </Motion>

                    <Motion class="hero__ctas" animations=presets::fade_up(Trigger::Mount, 30.0, 600.0, 700.0)>
                        <Motion animations=presets::button_feedback(1.05, 0.95)>
                            <a href=HERO_PRIMARY_CTA.href class="btn btn--primary btn--large">
                                <Motion class="btn__label" animations=vec![presets::hover_shift_x(5.0)]>
                                    {HERO_PRIMARY_CTA.label}
                                </Motion>
                                <span class="btn__sweep"></span>
                            </a>
                        </Motion>
                        <Motion animations=presets::button_feedback(1.05, 0.95)>
                            <a href=HERO_SECONDARY_CTA.href class="btn btn--ghost btn--large">
                                <Motion class="btn__label" animations=vec![presets::hover_shift_x(5.0)]>
                                    {HERO_SECONDARY_CTA.label}
                                </Motion>
                            </a>
                        </Motion>
                    </Motion>

                    <Motion class="hero__stats" animations=presets::fade_up(Trigger::Mount, 30.0, 600.0, 900.0)>
                        {HERO_STATS
                            .iter()
                            .enumerate()
                            .map(|(i, stat)| {
                                view! {
                                    <Motion class="hero__stat" animations=vec![presets::hover_scale(1.05)]>
                                        <Motion class="hero__stat-value gradient-text" animations=presets::stat_pop(i)>
                                            {stat.value}
                                        </Motion>
                                        <div class="hero__stat-label">{stat.label}</div>
                                    </Motion>
                                }
                            })
                            .collect_view()}
                    </Motion>
                </div>

                <div class="hero__visual">
                    <div class="hero__tilt" style=tilt_style>
                        <Motion class="hero__image-frame" animations=image_anims>
                            <img class="hero__image" src=HERO_IMAGE alt="Students studying"/>
                        </Motion>
                        <Motion class="hero__card hero__card--live" animations=live_card_anims>
                            <span class="pulse-dot"></span>
                            <span>"Live Session"</span>
                        </Motion>
                        <Motion class="hero__card hero__card--score" animations=score_card_anims>
                            <div class="hero__card-score">"8.5"</div>
                            <div class="hero__card-caption">"Band Score"</div>
                        </Motion>
                    </div>
                </div>
            </div>
        </section>
    }
}
