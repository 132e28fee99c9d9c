//! Page footer: copyright and social links.

use leptos::prelude::*;

use crate::components::icon::IconSvg;
use crate::content::{COPYRIGHT, SOCIAL_LINKS};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__inner">
                <div class="footer__copyright">{COPYRIGHT}</div>
                <div class="footer__social">
                    {SOCIAL_LINKS
                        .into_iter()
                        .map(|link| {
                            view! {
                                <a class="footer__social-link" href=link.href aria-label=link.label>
                                    <IconSvg icon=link.icon class="footer__social-icon"/>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </footer>
    }
}
