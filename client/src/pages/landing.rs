//! Single-page landing site: navbar, the three content sections, footer.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::{
    features::Features, footer::Footer, hero::Hero, navbar::Navbar, testimonials::Testimonials,
};
use crate::content::BRAND;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <Title text=BRAND/>
        <div class="landing-page">
            <Navbar/>
            <main>
                <Hero/>
                <Features/>
                <Testimonials/>
            </main>
            <Footer/>
        </div>
    }
}
