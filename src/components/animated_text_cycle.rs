//! Rotating headline word with a width-stable container.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders two layers. A hidden measurement pass lays out every word with
//! the same classes as the visible one so their widths can be read. The
//! visible window shows exactly one word, positioned and faded by the
//! current engine [`Frame`], inside a container sized to the widest word.
//! `util::cycle_host` owns the timer and frame loop in the browser; native
//! builds render the first word at rest.

#[cfg(test)]
#[path = "animated_text_cycle_test.rs"]
mod animated_text_cycle_test;

use leptos::prelude::*;
use wordcycle::{CycleConfig, CycleError, DEFAULT_INTERVAL_MS, Frame};

const WORD_CLASS: &str = "word-cycle__word";

/// Build the engine options from component props.
pub fn build_config(words: Vec<String>, interval: Option<u32>, class: Option<String>) -> Result<CycleConfig, CycleError> {
    Ok(CycleConfig::new(words)?
        .with_interval(interval.unwrap_or(DEFAULT_INTERVAL_MS))?
        .with_class(class.unwrap_or_default()))
}

/// Classes applied to every rendered word, visible or measured.
#[must_use]
pub fn word_class(extra: &str) -> String {
    let extra = extra.trim();
    if extra.is_empty() {
        WORD_CLASS.to_owned()
    } else {
        format!("{WORD_CLASS} {extra}")
    }
}

/// Inline style for the visible word.
#[must_use]
pub fn word_style(frame: &Frame) -> String {
    format!(
        "transform: translateY({:.2}px); opacity: {:.3};",
        frame.offset_y, frame.opacity
    )
}

/// CSS width of the visible container. `auto` until measured.
#[must_use]
pub fn container_width(width: Option<f64>) -> String {
    match width {
        Some(px) => format!("{px:.1}px"),
        None => "auto".to_owned(),
    }
}

/// The frame shown before the engine publishes one.
#[must_use]
pub fn resting_frame(config: &CycleConfig) -> Frame {
    Frame {
        word: config.words().wrapped(0).to_owned(),
        offset_y: 0.0,
        opacity: 1.0,
        width: None,
    }
}

/// Cycles `words` every `interval` milliseconds (default 3000).
///
/// An empty word list or a zero interval is logged and renders nothing.
#[component]
pub fn AnimatedTextCycle(
    #[prop(into)] words: Signal<Vec<String>>,
    #[prop(into, optional)] interval: MaybeProp<u32>,
    #[prop(into, optional)] class: MaybeProp<String>,
) -> impl IntoView {
    let measure_ref = NodeRef::<leptos::html::Div>::new();
    let published = RwSignal::new(None::<Frame>);
    let config = Memo::new(move |_| build_config(words.get(), interval.get(), class.get()));

    #[cfg(feature = "csr")]
    crate::util::cycle_host::drive(config, measure_ref, published);

    let classes = move || word_class(&class.get().unwrap_or_default());
    let frame = Memo::new(move |_| {
        published
            .get()
            .or_else(|| config.with(|c| c.as_ref().ok().map(resting_frame)))
    });

    view! {
        <span class="word-cycle">
            <div node_ref=measure_ref class="word-cycle__measure" aria-hidden="true">
                {move || {
                    words
                        .get()
                        .into_iter()
                        .map(|word| view! { <span class=classes>{word}</span> })
                        .collect_view()
                }}
            </div>
            <Show when=move || frame.with(Option::is_some)>
                <span
                    class="word-cycle__window"
                    style:width=move || container_width(frame.with(|f| f.as_ref().and_then(|f| f.width)))
                >
                    <span
                        class=classes
                        style=move || frame.with(|f| f.as_ref().map(word_style).unwrap_or_default())
                    >
                        {move || frame.with(|f| f.as_ref().map(|f| f.word.clone()).unwrap_or_default())}
                    </span>
                </span>
            </Show>
        </span>
    }
}
