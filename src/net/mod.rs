//! Networking for JSON-over-HTTP endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps every backend call with the shared headers, credentials and
//! response-classification policy, including the session-expiry redirect.

pub mod api;
