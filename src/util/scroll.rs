//! Smooth section scrolling and one-shot scroll reveal.
//!
//! Elements marked with [`REVEAL_CLASS`] gain [`VISIBLE_CLASS`] the first
//! time they enter the viewport; the stylesheet handles the fade. Nothing is
//! ever hidden again. Requires a browser environment; native builds no-op.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

pub const REVEAL_CLASS: &str = "reveal";
pub const VISIBLE_CLASS: &str = "is-visible";

/// Fraction of the viewport height an element must clear at the bottom
/// before it counts as in view.
pub const REVEAL_BOTTOM_MARGIN: f64 = 0.1;

/// Whether an element spanning `top..bottom` (viewport coordinates) is in
/// view for a viewport `viewport_height` tall.
#[must_use]
pub fn in_view(top: f64, bottom: f64, viewport_height: f64) -> bool {
    let reveal_line = viewport_height * (1.0 - REVEAL_BOTTOM_MARGIN);
    top < reveal_line && bottom > 0.0
}

/// Smooth-scroll the element with id `section_id` into view.
pub fn scroll_to_section(section_id: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(section_id))
        else {
            log::warn!("scroll target #{section_id} not found");
            return;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&options);
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = section_id;
    }
}

/// Mark every not-yet-revealed element that is now in view. Returns the
/// number of elements revealed by this pass.
pub fn reveal_in_view() -> usize {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let Some(window) = web_sys::window() else {
            return 0;
        };
        let Some(doc) = window.document() else {
            return 0;
        };
        let viewport_height = window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0);
        let selector = format!(".{REVEAL_CLASS}:not(.{VISIBLE_CLASS})");
        let Ok(pending) = doc.query_selector_all(&selector) else {
            return 0;
        };

        let mut revealed = 0;
        for i in 0..pending.length() {
            let Some(el) = pending.item(i).and_then(|node| node.dyn_into::<web_sys::Element>().ok()) else {
                continue;
            };
            let rect = el.get_bounding_client_rect();
            if in_view(rect.top(), rect.bottom(), viewport_height) {
                let _ = el.class_list().add_1(VISIBLE_CLASS);
                revealed += 1;
            }
        }
        revealed
    }
    #[cfg(not(feature = "csr"))]
    {
        0
    }
}
