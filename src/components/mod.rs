//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are direct projections of the session state read from the
//! Leptos context; none of them mutate it.

pub mod claims_card;
pub mod payload_view;
pub mod provider_buttons;
