//! # authpanel
//!
//! Leptos + WASM single-page client for a platform-managed authentication
//! gateway. The page resolves the current identity against the gateway's
//! introspection endpoint, offers provider login/logout redirects, and
//! shows the resolved claims plus one sample authenticated API payload.
//!
//! The gateway surface (`/.auth/*`) and the auxiliary API are external
//! collaborators owned by the hosting platform; this crate only issues two
//! GET calls and two navigation redirects against them.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
