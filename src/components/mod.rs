//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! One module per page section, plus the rotating-word widget and the icon
//! set they share. Sections read page settings from the `SiteConfig` context
//! and copy from `content`.

pub mod animated_text_cycle;
pub mod call_to_action;
pub mod footer;
pub mod hero;
pub mod how_it_works;
pub mod icon;
pub mod mission;
pub mod nav_bar;
pub mod problem;
pub mod solution;
pub mod waitlist;
