//! Networking modules for the gateway and API boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the introspection/auxiliary calls and the login/logout
//! redirects; `types` defines the gateway's wire schema.

pub mod api;
pub mod types;
