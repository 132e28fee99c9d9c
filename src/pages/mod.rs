//! Page modules.
//!
//! ARCHITECTURE
//! ============
//! The site has one page. It owns page-scoped wiring (scroll reveal) and
//! delegates rendering to `components`.

pub mod landing;
