//! Feature grid ("courses" section).

use leptos::prelude::*;

use crate::animation::presets::{self, FEATURES_STAGGER};
use crate::animation::{Animation, Easing, Property, Trigger};
use crate::components::motion::{Ambient, Motion};
use crate::components::section_heading::SectionHeading;
use crate::content::{FEATURES, FEATURES_BLURB, FEATURES_CTA, FEATURES_HEADING, Feature, anchors};
use crate::util::scroll::use_in_view;

#[component]
pub fn Features() -> impl IntoView {
    let grid_ref = NodeRef::<leptos::html::Div>::new();
    let in_view = use_in_view(grid_ref);

    let cta_anims = presets::fade_up(Trigger::InView, 30.0, 600.0, 800.0);

    view! {
        <section id=anchors::COURSES class="features">
            {presets::FEATURE_ORBS
                .iter()
                .enumerate()
                .map(|(i, orb)| {
                    view! {
                        <Ambient
                            name=format!("features-orb-{i}")
                            animations=orb.animations()
                            class=format!("orb orb--features-{i}")
                        />
                    }
                })
                .collect_view()}

            <div class="section__inner">
                <SectionHeading
                    eyebrow="Features"
                    lead=FEATURES_HEADING.0
                    highlight=FEATURES_HEADING.1
                    shimmer_name="features-shimmer"
                    blurb=FEATURES_BLURB
                    active=in_view
                />

                <div node_ref=grid_ref class="features__grid">
                    {FEATURES
                        .iter()
                        .enumerate()
                        .map(|(i, feature)| {
                            view! {
                                <FeatureCard
                                    feature=*feature
                                    index=i
                                    active=in_view
                                />
                            }
                        })
                        .collect_view()}
                </div>

                <Motion class="section__cta" animations=cta_anims active=in_view>
                    <div id=anchors::LEARN_MORE>
                        <Motion animations=presets::button_feedback(1.05, 0.95)>
                            <button type="button" class="btn btn--primary btn--large">
                                <Motion class="btn__label" animations=vec![presets::hover_shift_x(5.0)]>
                                    {FEATURES_CTA}
                                </Motion>
                                <span class="btn__sweep"></span>
                            </button>
                        </Motion>
                    </div>
                </Motion>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(feature: Feature, index: usize, #[prop(into)] active: Signal<bool>) -> impl IntoView {
    #[allow(clippy::cast_precision_loss)]
    let i = index as f64;
    let card_anims = [presets::card_enter(0.8), vec![presets::hover_lift(-10.0)]].concat();
    let icon_anims = vec![
        presets::hover_scale(1.2),
        Animation::tween(Trigger::Hover, Property::Rotate, 0.0, -10.0, 600.0, Easing::EaseInOut),
    ];

    view! {
        <Motion
            class="feature-card"
            animations=card_anims
            active=active
            delay_ms=FEATURES_STAGGER.delay_for(index)
        >
            <div class="feature-card__surface">
                <div class="feature-card__wash" style=format!("background: {};", feature.bg_gradient.css())></div>
                <div class="feature-card__content">
                    <Motion class="feature-card__icon-wrap" animations=icon_anims>
                        <div class="feature-card__icon" style=format!("background: {};", feature.gradient.css())>
                            <span>{feature.icon}</span>
                        </div>
                    </Motion>
                    <Motion animations=vec![presets::hover_shift_x(5.0)]>
                        <h3 class="feature-card__title">{feature.title}</h3>
                    </Motion>
                    <Motion
                        animations=vec![Animation::tween(Trigger::Hover, Property::Opacity, 0.8, 1.0, 200.0, Easing::EaseOut)]
                    >
                        <p class="feature-card__description">{feature.description}</p>
                    </Motion>
                    <div class="feature-card__underline" style=format!("background: {};", feature.gradient.css())></div>
                </div>
                <Ambient
                    name=format!("feature-bubble-{index}-a")
                    animations=presets::card_bubble(-10.0, 1.2, 2000.0, i * 200.0)
                    class="bubble bubble--top"
                />
                <Ambient
                    name=format!("feature-bubble-{index}-b")
                    animations=presets::card_bubble(10.0, 1.1, 2500.0, i * 300.0)
                    class="bubble bubble--bottom"
                />
            </div>
        </Motion>
    }
}
