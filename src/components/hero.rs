//! Hero section: headline with the rotating words and primary actions.

use leptos::prelude::*;

use crate::components::animated_text_cycle::AnimatedTextCycle;
use crate::components::icon::{Icon, IconSvg};
use crate::config::SiteConfig;
use crate::content::Section;
use crate::util::scroll::scroll_to_section;

#[component]
pub fn Hero() -> impl IntoView {
    let hero = expect_context::<SiteConfig>().hero;

    view! {
        <section class="hero">
            <div class="hero__content reveal">
                <h1 class="hero__title">
                    <div class="hero__line">"Supercharge Your"</div>
                    <div class="hero__cycle">
                        <AnimatedTextCycle
                            words=hero.words
                            interval=hero.interval
                            class=hero.class_name
                        />
                    </div>
                    <div class="hero__line">"with AI for Africa"</div>
                </h1>
                <p class="hero__subtitle">
                    "Transform your call center operations with AI-powered voice agents that speak African languages and understand local contexts."
                </p>
                <div class="hero__actions">
                    <button
                        class="button button--primary pulse-glow"
                        type="button"
                        on:click=move |_| scroll_to_section(Section::Waitlist.id())
                    >
                        "Join Waitlist"
                        <IconSvg icon=Icon::ArrowRight class="button__icon"/>
                    </button>
                    <button
                        class="button button--outline"
                        type="button"
                        on:click=move |_| scroll_to_section(Section::Solution.id())
                    >
                        "See Demo"
                    </button>
                </div>
            </div>
        </section>
    }
}
