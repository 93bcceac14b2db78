//! Page footer ("contact" section) with the newsletter block.

use leptos::prelude::*;

use crate::animation::presets::{self, FOOTER_PARTICLES, GRID_STAGGER};
use crate::animation::Trigger;
use crate::components::motion::{Ambient, Motion};
use crate::content::{
    BRAND, CONTACT, FOOTER_BLURB, LEGAL_LINKS, Link, QUICK_LINKS, SOCIAL_LINKS, SUPPORT_LINKS, anchors, copyright,
};
use crate::util::scroll::use_in_view;

#[component]
pub fn Footer() -> impl IntoView {
    let body_ref = NodeRef::<leptos::html::Div>::new();
    let in_view = use_in_view(body_ref);
    let year = time::OffsetDateTime::now_utc().year();

    view! {
        <footer id=anchors::CONTACT class="footer">
            <div class="footer__backdrop">
                {presets::HERO_ORBS
                    .iter()
                    .enumerate()
                    .map(|(i, orb)| {
                        view! {
                            <Ambient
                                name=format!("footer-orb-{i}")
                                animations=orb.animations()
                                class=format!("orb orb--footer-{i}")
                            />
                        }
                    })
                    .collect_view()}
                {(0..FOOTER_PARTICLES)
                    .map(|i| {
                        view! {
                            <Ambient
                                name=format!("footer-particle-{i}")
                                animations=presets::footer_particle(i)
                                class="footer__particle"
                                style=format!("left: {}%; top: {}%;", 10 + i * 15, 20 + i * 10)
                            />
                        }
                    })
                    .collect_view()}
            </div>

            <div node_ref=body_ref class="section__inner footer__inner">
                <div class="footer__grid">
                    <Motion
                        class="footer__brand"
                        animations=presets::footer_column()
                        active=in_view
                        delay_ms=GRID_STAGGER.delay_for(0)
                    >
                        <Motion animations=vec![presets::hover_scale(1.05)]>
                            <h3 class="brand gradient-text">{BRAND}</h3>
                        </Motion>
                        <p class="footer__blurb">{FOOTER_BLURB}</p>
                        <div class="footer__socials">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|social| {
                                    view! {
                                        <Motion inline=true animations=presets::button_feedback(1.2, 0.9)>
                                            <a href=social.href class="footer__social" aria-label=social.name>
                                                <span>{social.icon}</span>
                                            </a>
                                        </Motion>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Motion>

                    <LinkColumn title="Quick Links" links=&QUICK_LINKS index=1 base_delay_ms=600.0 active=in_view/>
                    <LinkColumn title="Support" links=&SUPPORT_LINKS index=2 base_delay_ms=700.0 active=in_view/>

                    <Motion
                        class="footer__column"
                        animations=presets::footer_column()
                        active=in_view
                        delay_ms=GRID_STAGGER.delay_for(3)
                    >
                        <h4 class="footer__heading">"Contact Info"</h4>
                        <div class="footer__contact">
                            <Motion class="footer__contact-row" animations=vec![presets::hover_shift_x(5.0)]>
                                <span class="footer__contact-icon">"📍"</span>
                                <span>{CONTACT.address[0]}<br/>{CONTACT.address[1]}</span>
                            </Motion>
                            <Motion class="footer__contact-row" animations=vec![presets::hover_shift_x(5.0)]>
                                <span class="footer__contact-icon">"📞"</span>
                                <span>{CONTACT.phone}</span>
                            </Motion>
                            <Motion class="footer__contact-row" animations=vec![presets::hover_shift_x(5.0)]>
                                <span class="footer__contact-icon">"✉️"</span>
                                <span>{CONTACT.email}</span>
                            </Motion>
                        </div>

                        // Presentational only; nothing is submitted.
                        <Motion
                            class="footer__newsletter"
                            animations=presets::fade_up(Trigger::InView, 20.0, 600.0, 1000.0)
                            active=in_view
                        >
                            <div id=anchors::REGISTER>
                                <h5 class="footer__newsletter-title">"Stay Updated"</h5>
                                <div class="footer__newsletter-row">
                                    <input type="email" class="footer__input" placeholder="Enter your email"/>
                                    <Motion inline=true animations=presets::button_feedback(1.05, 0.95)>
                                        <button type="button" class="footer__subscribe">"Subscribe"</button>
                                    </Motion>
                                </div>
                            </div>
                        </Motion>
                    </Motion>
                </div>

                <Motion
                    class="footer__bottom"
                    animations=presets::fade_up(Trigger::InView, 20.0, 600.0, 1200.0)
                    active=in_view
                >
                    <p class="footer__copyright">{copyright(year)}</p>
                    <div class="footer__legal">
                        {LEGAL_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <Motion inline=true animations=vec![presets::hover_lift(-2.0)]>
                                        <a href=link.href class="footer__legal-link">{link.label}</a>
                                    </Motion>
                                }
                            })
                            .collect_view()}
                    </div>
                </Motion>
            </div>
        </footer>
    }
}

/// Titled list of links; each link slides in after `base_delay_ms`.
#[component]
fn LinkColumn(
    title: &'static str,
    links: &'static [Link],
    index: usize,
    base_delay_ms: f64,
    #[prop(into)] active: Signal<bool>,
) -> impl IntoView {
    view! {
        <Motion
            class="footer__column"
            animations=presets::footer_column()
            active=active
            delay_ms=GRID_STAGGER.delay_for(index)
        >
            <h4 class="footer__heading">{title}</h4>
            <ul class="footer__links">
                {links
                    .iter()
                    .enumerate()
                    .map(|(i, link)| {
                        #[allow(clippy::cast_precision_loss)]
                        let delay = base_delay_ms + i as f64 * 100.0;
                        let anims = [
                            presets::fade_slide_x(Trigger::InView, -20.0, 400.0, delay),
                            vec![presets::hover_shift_x(5.0)],
                        ]
                            .concat();
                        view! {
                            <li>
                                <Motion animations=anims active=active>
                                    <a href=link.href class="footer__link">
                                        <span class="footer__link-bar"></span>
                                        {link.label}
                                    </a>
                                </Motion>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </Motion>
    }
}
