//! Root application component with metadata and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};

use crate::config::{self, SiteConfig};
use crate::pages::landing::LandingPage;

/// Root application component.
///
/// Loads the site configuration once and provides it to every section.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let site: SiteConfig = config::load();
    log::debug!(
        "site config: {} hero words every {} ms",
        site.hero.words.len(),
        site.hero.interval
    );
    provide_context(site);

    view! {
        <Title text="Boboyii | Voice AI for Africa"/>
        <Meta
            name="description"
            content="AI-powered voice agents that speak African languages and understand local contexts."
        />
        <LandingPage/>
    }
}
