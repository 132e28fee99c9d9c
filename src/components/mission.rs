//! Mission statement beside a photo grid.

use leptos::prelude::*;

use crate::content::{MISSION_IMAGE_ALT, MISSION_IMAGES, mission_image_src};

#[component]
pub fn Mission() -> impl IntoView {
    view! {
        <section class="section mission">
            <div class="section__inner mission__grid">
                <div class="mission__text reveal">
                    <div class="badge badge--accent">
                        <span class="badge__pulse"></span>
                        <span>"Launching Soon"</span>
                    </div>
                    <h2 class="section__title section__title--left">
                        "Our " <span class="text-accent">"Mission"</span>
                    </h2>
                    <p class="mission__lead">
                        "To enable Voice AI to be easily integrated into businesses across Africa powering customer support, sales, onboarding, and operations with natural, local-sounding speech in African languages."
                    </p>
                    <p class="mission__body">
                        "Our technology captures the accents, tones, and rhythms of African languages to deliver delightful, human-like interactions that drive growth and loyalty."
                    </p>
                </div>
                <div class="mission__photos reveal reveal--from-right">
                    {MISSION_IMAGES
                        .into_iter()
                        .map(|file| {
                            view! {
                                <img
                                    class="mission__photo"
                                    src=mission_image_src(file)
                                    alt=MISSION_IMAGE_ALT
                                    width="300"
                                    height="200"
                                    loading="lazy"
                                />
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
