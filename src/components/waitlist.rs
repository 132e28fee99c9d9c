//! Waitlist signup with benefits and social proof.
//!
//! The form never leaves the page: a non-blank email flips the button to a
//! confirmation for the configured delay, then it resets.

use leptos::prelude::*;

use crate::components::icon::{Icon, IconSvg};
use crate::config::SiteConfig;
use crate::content::{SOCIAL_PROOF, Section, WAITLIST_BENEFITS};
use crate::state::ui::WaitlistState;

#[component]
pub fn Waitlist() -> impl IntoView {
    let reset_ms = expect_context::<SiteConfig>().waitlist_reset_ms;
    let waitlist = RwSignal::new(WaitlistState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let accepted = waitlist.try_update(WaitlistState::submit).unwrap_or(false);
        if !accepted {
            return;
        }
        log::info!("waitlist confirmation shown for {reset_ms} ms");

        #[cfg(feature = "csr")]
        gloo_timers::callback::Timeout::new(reset_ms, move || {
            let _ = waitlist.try_update(WaitlistState::reset);
        })
        .forget();
    };

    let submitted = move || waitlist.with(|w| w.submitted);

    view! {
        <section id=Section::Waitlist.id() class="waitlist">
            <div class="waitlist__orb waitlist__orb--top"></div>
            <div class="waitlist__orb waitlist__orb--bottom"></div>
            <div class="waitlist__inner reveal">
                <div class="badge badge--light">
                    <IconSvg icon=Icon::Bell class="badge__icon"/>
                    <span>"Launching Soon"</span>
                </div>
                <h2 class="waitlist__title">"Be Among the First"</h2>
                <p class="waitlist__lead">
                    "Join the exclusive waitlist and get early access to the future of African call center technology."
                </p>

                <form class="waitlist__form" on:submit=on_submit>
                    <input
                        class="waitlist__input"
                        type="email"
                        placeholder="Enter your business email"
                        required
                        prop:value=move || waitlist.with(|w| w.email.clone())
                        on:input=move |ev| waitlist.update(|w| w.set_email(event_target_value(&ev)))
                    />
                    <button class="button button--light waitlist__submit" type="submit" disabled=submitted>
                        <Show when=submitted>
                            <IconSvg icon=Icon::Check class="button__icon button__icon--leading"/>
                        </Show>
                        {move || waitlist.with(WaitlistState::button_label)}
                        <Show when=move || !submitted()>
                            <IconSvg icon=Icon::ArrowRight class="button__icon"/>
                        </Show>
                    </button>
                </form>

                <div class="card-grid card-grid--three waitlist__benefits">
                    {WAITLIST_BENEFITS
                        .into_iter()
                        .map(|benefit| {
                            view! {
                                <div class="benefit">
                                    <div class="benefit__icon">
                                        <IconSvg icon=benefit.icon class="benefit__icon-svg"/>
                                    </div>
                                    <h3 class="benefit__title">{benefit.title}</h3>
                                    <p class="benefit__text">{benefit.body}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="badge-row badge-row--light">
                    {SOCIAL_PROOF
                        .into_iter()
                        .map(|badge| {
                            view! {
                                <div class="badge-row__item">
                                    <IconSvg icon=badge.icon class="badge-row__icon"/>
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
