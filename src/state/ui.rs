//! Local page UI state (navigation visibility, waitlist form).
//!
//! DESIGN
//! ======
//! Plain structs with the transition rules as methods. Components hold them
//! in `RwSignal`s and call the methods from event handlers, so the rules are
//! testable without a browser.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Navigation bar visibility, driven by window scroll position.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NavState {
    pub hidden: bool,
    pub last_scroll_y: f64,
}

impl NavState {
    /// Apply a new scroll position. The bar hides while scrolling down past
    /// `threshold` and reappears on any upward scroll or near the top.
    pub fn on_scroll(&mut self, scroll_y: f64, threshold: f64) {
        let scrolling_down = scroll_y > self.last_scroll_y;
        self.hidden = scrolling_down && scroll_y > threshold;
        self.last_scroll_y = scroll_y;
    }
}

/// Waitlist signup form. Submissions never leave the page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WaitlistState {
    pub email: String,
    pub submitted: bool,
}

impl WaitlistState {
    pub fn set_email(&mut self, email: String) {
        self.email = email;
    }

    /// Accept the current email if it is not blank. Returns `true` when the
    /// confirmation state was entered and a reset should be scheduled.
    pub fn submit(&mut self) -> bool {
        if self.submitted || self.email.trim().is_empty() {
            return false;
        }
        self.submitted = true;
        true
    }

    /// Leave the confirmation state. The typed email is kept.
    pub fn reset(&mut self) {
        self.submitted = false;
    }

    #[must_use]
    pub fn button_label(&self) -> &'static str {
        if self.submitted { "Joined!" } else { "Join Waitlist" }
    }
}
