//! The single landing page.
//!
//! Composes the sections in reading order and runs the scroll-reveal pass:
//! once on mount and then on every window scroll.

use leptos::prelude::*;

use crate::components::{
    call_to_action::CallToAction, footer::Footer, hero::Hero, how_it_works::HowItWorks, mission::Mission,
    nav_bar::NavBar, problem::Problem, solution::Solution, waitlist::Waitlist,
};

#[component]
pub fn LandingPage() -> impl IntoView {
    #[cfg(feature = "csr")]
    {
        use crate::util::scroll::reveal_in_view;

        Effect::new(move || {
            reveal_in_view();
        });
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            reveal_in_view();
        });
        on_cleanup(move || handle.remove());
    }

    view! {
        <div class="landing grid-background">
            <NavBar/>
            <main>
                <Hero/>
                <Problem/>
                <Solution/>
                <HowItWorks/>
                <Waitlist/>
                <Mission/>
                <CallToAction/>
            </main>
            <Footer/>
        </div>
    }
}
