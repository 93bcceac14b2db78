//! Testimonials ("about" section): desktop carousel and mobile grid.
//!
//! SYSTEM CONTEXT
//! ==============
//! The carousel index lives in a `CarouselController` behind an `RwSignal`.
//! A `Ticker` runs only while the controller is auto-playing; the first
//! manual move pauses the controller, which drops the ticker for good.
//!
//! TRADE-OFFS
//! ==========
//! Each index change re-creates the slide so its entry animation replays.
//! The outgoing slide is removed immediately rather than animated out.

use leptos::prelude::*;

use crate::animation::presets::{self, GRID_STAGGER};
use crate::animation::{Animation, Easing, Property, Trigger};
use crate::components::motion::{Ambient, Motion};
use crate::components::section_heading::SectionHeading;
use crate::content::{
    TESTIMONIAL_GRID_LEN, TESTIMONIALS, TESTIMONIALS_BLURB, TESTIMONIALS_CTA, TESTIMONIALS_HEADING, Testimonial,
    anchors,
};
use crate::state::carousel::CarouselController;
use crate::util::scroll::use_in_view;
use crate::util::ticker::Ticker;

#[component]
pub fn Testimonials() -> impl IntoView {
    // The grid is hidden on wide screens, so visibility is measured on the
    // whole section body.
    let body_ref = NodeRef::<leptos::html::Div>::new();
    let in_view = use_in_view(body_ref);

    let cta_anims = presets::fade_up(Trigger::InView, 30.0, 600.0, 800.0);

    view! {
        <section id=anchors::ABOUT class="testimonials">
            {presets::HERO_ORBS
                .iter()
                .enumerate()
                .map(|(i, orb)| {
                    view! {
                        <Ambient
                            name=format!("testimonials-orb-{i}")
                            animations=orb.animations()
                            class=format!("orb orb--testimonials-{i}")
                        />
                    }
                })
                .collect_view()}

            <div node_ref=body_ref class="section__inner">
                <SectionHeading
                    eyebrow="Testimonials"
                    lead=TESTIMONIALS_HEADING.0
                    highlight=TESTIMONIALS_HEADING.1
                    shimmer_name="testimonials-shimmer"
                    blurb=TESTIMONIALS_BLURB
                    active=in_view
                />

                <Carousel/>

                <div class="testimonials__grid">
                    {TESTIMONIALS
                        .iter()
                        .take(TESTIMONIAL_GRID_LEN)
                        .enumerate()
                        .map(|(i, testimonial)| {
                            view! { <GridCard testimonial=*testimonial index=i active=in_view/> }
                        })
                        .collect_view()}
                </div>

                <Motion class="section__cta" animations=cta_anims active=in_view>
                    <div id=anchors::GET_STARTED>
                        <Motion animations=presets::button_feedback(1.05, 0.95)>
                            <button type="button" class="btn btn--primary btn--large">
                                <Motion class="btn__label" animations=vec![presets::hover_shift_x(5.0)]>
                                    {TESTIMONIALS_CTA}
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
fn Carousel() -> impl IntoView {
    let carousel = RwSignal::new(CarouselController::new(TESTIMONIALS.len()));
    let auto_playing = Memo::new(move |_| carousel.with(CarouselController::is_auto_playing));
    let slide = Memo::new(move |_| carousel.with(|c| (c.current_index(), c.direction())));
    let current = Memo::new(move |_| carousel.with(CarouselController::current_index));

    let ticker = StoredValue::new(None::<Ticker>);
    Effect::new(move || {
        let next = auto_playing.get().then(|| {
            let interval_ms = carousel.with_untracked(CarouselController::interval_ms);
            Ticker::start(interval_ms, move || {
                let _ = carousel.try_update(CarouselController::tick);
            })
        });
        ticker.set_value(next);
    });
    on_cleanup(move || {
        let _ = ticker.try_update_value(|t| *t = None);
    });

    view! {
        <div class="carousel">
            <div class="carousel__stage">
                <div class="carousel__viewport">
                    {move || {
                        let (index, direction) = slide.get();
                        let testimonial = TESTIMONIALS[index];
                        view! {
                            <Motion class="carousel__slide" animations=presets::slide_in(direction)>
                                <Motion class="carousel__card" animations=vec![presets::hover_scale(1.02)]>
                                    <SlideBody testimonial=testimonial/>
                                </Motion>
                            </Motion>
                        }
                    }}
                </div>

                <Motion class="carousel__nav carousel__nav--prev" animations=presets::button_feedback(1.1, 0.9)>
                    <button
                        type="button"
                        class="carousel__button"
                        aria-label="Previous testimonial"
                        on:click=move |_| carousel.update(CarouselController::prev)
                    >
                        <svg class="icon" fill="none" stroke="currentColor" viewBox="0 0 24 24" aria-hidden="true">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M15 19l-7-7 7-7"/>
                        </svg>
                    </button>
                </Motion>
                <Motion class="carousel__nav carousel__nav--next" animations=presets::button_feedback(1.1, 0.9)>
                    <button
                        type="button"
                        class="carousel__button"
                        aria-label="Next testimonial"
                        on:click=move |_| carousel.update(CarouselController::next)
                    >
                        <svg class="icon" fill="none" stroke="currentColor" viewBox="0 0 24 24" aria-hidden="true">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M9 5l7 7-7 7"/>
                        </svg>
                    </button>
                </Motion>
            </div>

            <div class="carousel__dots">
                {(0..TESTIMONIALS.len())
                    .map(|i| {
                        view! {
                            <Motion inline=true animations=presets::button_feedback(1.2, 0.8)>
                                <button
                                    type="button"
                                    class=move || {
                                        if current.get() == i { "carousel__dot carousel__dot--active" } else { "carousel__dot" }
                                    }
                                    aria-label=format!("Show testimonial {}", i + 1)
                                    on:click=move |_| {
                                        if let Some(Err(e)) = carousel.try_update(|c| c.select(i)) {
                                            leptos::logging::warn!("carousel select ignored: {e}");
                                        }
                                    }
                                ></button>
                            </Motion>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn SlideBody(testimonial: Testimonial) -> impl IntoView {
    view! {
        <div class="carousel__person">
            <Motion animations=vec![presets::hover_scale(1.1)]>
                <img class="carousel__avatar" src=testimonial.image alt=testimonial.name/>
            </Motion>
            <div class="carousel__who">
                <Motion animations=presets::fade_slide_x(Trigger::Mount, -20.0, 400.0, 200.0)>
                    <h3 class="carousel__name">{testimonial.name}</h3>
                </Motion>
                <Motion animations=presets::fade_slide_x(Trigger::Mount, -20.0, 400.0, 300.0)>
                    <p class="carousel__role">{format!("{} • {}", testimonial.role, testimonial.country)}</p>
                </Motion>
                <Motion class="badge" animations=presets::pop_in(Trigger::Mount, 0.0, 400.0, 400.0)>
                    {format!("Band Score: {}", testimonial.score)}
                </Motion>
            </div>
        </div>
        <Motion animations=presets::fade_up(Trigger::Mount, 20.0, 600.0, 500.0)>
            <blockquote class="carousel__quote">{format!("\"{}\"", testimonial.text)}</blockquote>
        </Motion>
    }
}

#[component]
fn GridCard(testimonial: Testimonial, index: usize, #[prop(into)] active: Signal<bool>) -> impl IntoView {
    #[allow(clippy::cast_precision_loss)]
    let i = index as f64;
    let card_anims = [presets::card_enter(0.9), vec![presets::hover_lift(-5.0)]].concat();
    let avatar_anims = vec![
        presets::hover_scale(1.1),
        Animation::tween(Trigger::Hover, Property::Rotate, 0.0, 5.0, 300.0, Easing::EaseOut),
    ];

    view! {
        <Motion
            class="testimonial-card"
            animations=card_anims
            active=active
            delay_ms=GRID_STAGGER.delay_for(index)
        >
            <div class="testimonial-card__person">
                <Motion animations=avatar_anims>
                    <img class="testimonial-card__avatar" src=testimonial.image alt=testimonial.name/>
                </Motion>
                <div>
                    <h4 class="testimonial-card__name">{testimonial.name}</h4>
                    <p class="testimonial-card__role">{testimonial.role}</p>
                    <span class="badge badge--small">{format!("Band {}", testimonial.score)}</span>
                </div>
            </div>
            <blockquote class="testimonial-card__quote">{format!("\"{}\"", testimonial.text)}</blockquote>
            <Ambient
                name=format!("testimonial-bubble-{index}")
                animations=presets::card_bubble(-5.0, 1.1, 2000.0, i * 200.0)
                class="bubble bubble--top"
            />
        </Motion>
    }
}
