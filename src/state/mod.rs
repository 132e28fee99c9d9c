//! Page state modules.
//!
//! DESIGN
//! ======
//! State is plain data with transition methods; components own it through
//! `RwSignal`s. Nothing here touches the DOM.

pub mod ui;
