//! Fixed top navigation with section links.
//!
//! Slides out of view while the visitor scrolls down past the configured
//! threshold and returns on any upward scroll.

use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::content::{LOGO_SRC, Section};
use crate::state::ui::NavState;
use crate::util::scroll::scroll_to_section;

#[component]
pub fn NavBar() -> impl IntoView {
    let site = expect_context::<SiteConfig>();
    let nav = RwSignal::new(NavState::default());

    #[cfg(feature = "csr")]
    {
        let threshold = site.nav_hide_threshold;
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let Some(y) = web_sys::window().and_then(|w| w.scroll_y().ok()) else {
                return;
            };
            nav.update(|n| n.on_scroll(y, threshold));
        });
        on_cleanup(move || handle.remove());
    }
    #[cfg(not(feature = "csr"))]
    let _ = site;

    let nav_class = move || {
        if nav.with(|n| n.hidden) {
            "nav-bar nav-bar--hidden"
        } else {
            "nav-bar"
        }
    };

    view! {
        <nav class=nav_class>
            <div class="nav-bar__inner">
                <img class="nav-bar__logo" src=LOGO_SRC alt="Boboyii logo" width="560" height="140"/>
                <div class="nav-bar__links">
                    {Section::NAV
                        .into_iter()
                        .map(|section| {
                            view! {
                                <button
                                    class="nav-bar__link"
                                    type="button"
                                    on:click=move |_| scroll_to_section(section.id())
                                >
                                    {section.nav_label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </nav>
    }
}
