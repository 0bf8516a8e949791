//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep browser/environment access (document lookups, meta
//! tags) out of page and component code.

pub mod config;
