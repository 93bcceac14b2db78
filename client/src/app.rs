//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::landing::LandingPage;
use crate::util::dark_mode::{ThemeHandle, preload_script};

/// HTML shell rendered on the server for SSR + hydration.
///
/// The server always renders the light palette; the inline preload script
/// switches `data-theme` before first paint when a dark preference is stored.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" data-theme="light">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="description" content="Expert IELTS preparation courses, practice tests and feedback."/>
                <script inner_html=preload_script()></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the theme context and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme = ThemeHandle::provide();
    // Effects only run in the browser, after hydration.
    Effect::new(move || theme.sync_from_storage());

    view! {
        <Stylesheet id="leptos" href="/pkg/ielts-pro.css"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
            </Routes>
        </Router>
    }
}
