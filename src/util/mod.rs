//! Utility helpers shared across page modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (timers, animation frames,
//! scrolling, DOM measurement) from page and component logic. Each keeps its
//! pure decision logic ungated so it tests natively.

pub mod cycle_host;
pub mod scroll;
