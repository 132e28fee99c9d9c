//! Four-step process cards with a staggered reveal.

#[cfg(test)]
#[path = "how_it_works_test.rs"]
mod how_it_works_test;

use leptos::prelude::*;

use crate::components::icon::IconSvg;
use crate::content::{STEP_STAGGER_S, STEPS, Section};

/// CSS transition delay for the step card at `index`.
#[must_use]
pub fn stagger_delay(index: usize) -> String {
    #[allow(clippy::cast_precision_loss)]
    let seconds = (index + 1) as f64 * STEP_STAGGER_S;
    format!("transition-delay: {seconds:.1}s;")
}

#[component]
pub fn HowItWorks() -> impl IntoView {
    view! {
        <section id=Section::HowItWorks.id() class="section">
            <div class="section__inner">
                <div class="section__header reveal">
                    <h2 class="section__title">"How It Works"</h2>
                    <p class="section__lead">
                        "Set up your AI call center in four simple steps and start handling calls immediately"
                    </p>
                </div>
                <div class="card-grid card-grid--four">
                    {STEPS
                        .into_iter()
                        .enumerate()
                        .map(|(index, step)| {
                            view! {
                                <div class="card card--lift reveal reveal--rise" style=stagger_delay(index)>
                                    <div class="card__glow"></div>
                                    <div class="card__body card__body--compact">
                                        <div class="step__heading">
                                            <span class="step__number">{step.number}</span>
                                            <h3 class="step__title">{step.title}</h3>
                                        </div>
                                        <div class="step__icon">
                                            <IconSvg icon=step.icon class="step__icon-svg"/>
                                        </div>
                                        <p class="step__text">{step.body}</p>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
