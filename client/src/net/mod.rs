//! Networking for lead submission.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` provides the browser transport and wires it, together with the
//! toaster, into the `leads` submission workflow.

pub mod api;
