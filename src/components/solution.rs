//! Solution section: three feature cards.

use leptos::prelude::*;

use crate::components::icon::IconSvg;
use crate::content::{FEATURES, Feature, Section};

#[component]
pub fn Solution() -> impl IntoView {
    view! {
        <section id=Section::Solution.id() class="section">
            <div class="section__inner">
                <div class="section__header reveal">
                    <h2 class="section__title">"Revolutionary Call AI Solution"</h2>
                    <p class="section__lead">
                        "Boboyii transforms your call operations with intelligent voice AI agents that handle customer calls in African languages, 24/7."
                    </p>
                </div>
                <div class="card-grid card-grid--three">
                    {FEATURES.into_iter().map(|feature| view! { <FeatureCard feature/> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(feature: Feature) -> impl IntoView {
    view! {
        <div class="card card--lift reveal">
            <div class="card__glow"></div>
            <div class="card__body">
                <div class="feature__icon">
                    <IconSvg icon=feature.icon class="feature__icon-svg"/>
                </div>
                <h3 class="feature__title">{feature.title}</h3>
                <div class="feature__rule"></div>
                <p class="feature__text">{feature.body}</p>
                <ul class="feature__bullets">
                    {feature
                        .bullets
                        .into_iter()
                        .map(|bullet| {
                            view! {
                                <li class="feature__bullet">
                                    <span class="feature__bullet-dot"></span>
                                    <span>{bullet}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </div>
    }
}
