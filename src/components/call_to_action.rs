//! Closing call to action with trust indicators.

use leptos::prelude::*;

use crate::components::icon::{Icon, IconSvg};
use crate::content::{Section, TRUST_INDICATORS};
use crate::util::scroll::scroll_to_section;

#[component]
pub fn CallToAction() -> impl IntoView {
    view! {
        <section class="section cta">
            <div class="cta__wash"></div>
            <div class="section__inner section__inner--slim cta__inner reveal">
                <h2 class="section__title">"Ready to Transform Your Call Operations?"</h2>
                <p class="section__lead">
                    "Don't let language barriers and high costs hold your business back. Join hundreds of African businesses preparing to revolutionize their customer service with AI."
                </p>
                <div class="hero__actions">
                    <button
                        class="button button--primary button--round pulse-glow"
                        type="button"
                        on:click=move |_| scroll_to_section(Section::Waitlist.id())
                    >
                        <IconSvg icon=Icon::Sparkles class="button__icon button__icon--leading"/>
                        "Join Waitlist Now"
                    </button>
                    <button
                        class="button button--outline button--round"
                        type="button"
                        on:click=move |_| scroll_to_section(Section::Solution.id())
                    >
                        "Learn More"
                    </button>
                </div>
                <div class="badge-row">
                    {TRUST_INDICATORS
                        .into_iter()
                        .map(|badge| {
                            view! {
                                <div class="badge-row__item">
                                    <IconSvg icon=badge.icon class="badge-row__icon text-accent"/>
                                    <span>{badge.label}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
