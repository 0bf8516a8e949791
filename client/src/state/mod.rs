//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The application dialog state is `leads::ApplicationDialog`, held in an
//! `RwSignal` by the landing page. Only presentation state that has no place
//! in the core crate lives here.

pub mod toasts;
