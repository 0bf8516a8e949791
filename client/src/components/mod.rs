//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the landing-page chrome and the application dialog,
//! reading the dialog signal and the toast queue from Leptos context.

pub mod application_modal;
pub mod feature_cards;
pub mod header;
pub mod partners_section;
pub mod toaster;
