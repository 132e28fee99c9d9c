//! Problem statement: challenges list and statistics card.

use leptos::prelude::*;

use crate::content::{CHALLENGES, HEADLINE_STAT, SUPPORTING_STATS, Section};

#[component]
pub fn Problem() -> impl IntoView {
    view! {
        <section id=Section::Problem.id() class="section">
            <div class="section__inner section__inner--narrow">
                <div class="section__header reveal">
                    <h2 class="section__title">"Call Center Challenges in Africa"</h2>
                    <p class="section__lead">
                        "African businesses struggle with expensive call operations, language barriers, and limited availability that hurt customer satisfaction and growth."
                    </p>
                </div>
                <div class="problem__grid">
                    <ul class="problem__list">
                        {CHALLENGES
                            .into_iter()
                            .map(|challenge| {
                                view! {
                                    <li class="problem__item">
                                        <span class="problem__dot"></span>
                                        <div>
                                            <h3 class="problem__item-title">{challenge.title}</h3>
                                            <p class="problem__item-body">{challenge.body}</p>
                                        </div>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                    <div class="stat-card reveal reveal--from-right">
                        <div class="stat-card__headline">{HEADLINE_STAT.value}</div>
                        <div class="stat-card__caption">{HEADLINE_STAT.label}</div>
                        <div class="stat-card__grid">
                            {SUPPORTING_STATS
                                .into_iter()
                                .map(|stat| {
                                    view! {
                                        <div class="stat-card__item">
                                            <div class="stat-card__value">{stat.value}</div>
                                            <div class="stat-card__label">{stat.label}</div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
