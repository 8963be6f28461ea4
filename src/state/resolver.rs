//! Session resolution flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! `refresh` is the single entry point for every trigger: initial mount,
//! window focus, and cross-tab storage notifications all funnel here.
//!
//! Overlapping invocations are expected and never cancelled; each runs to
//! completion independently and the last one to *complete* overwrites the
//! snapshot, even if it was not the last one started. Under rapid trigger
//! bursts an older, slower response can therefore land after a newer one.

use leptos::prelude::*;

use super::session::SessionState;

/// Re-resolve the session and, when the result is authenticated, refetch
/// the sample API payload. Fire-and-forget; safe to call from any trigger
/// at any time, including while another refresh is still in flight.
pub fn refresh(session: RwSignal<SessionState>) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(refresh_task(session));
    #[cfg(not(feature = "csr"))]
    {
        let _ = session;
    }
}

#[cfg(feature = "csr")]
async fn refresh_task(session: RwSignal<SessionState>) {
    use super::session::SessionSnapshot;
    use crate::net::api::{self, IntrospectionOutcome};
    use crate::util::env;

    let outcome = api::fetch_introspection().await;
    if let IntrospectionOutcome::TransportFailure(reason) = &outcome {
        log::warn!("introspection failed: {reason}");
    }

    let snapshot = SessionSnapshot::resolve(outcome, env::is_local_development());
    log::debug!(
        "session resolved: {}",
        if snapshot.is_authenticated() { "authenticated" } else { "anonymous" }
    );
    let fetch_auxiliary = session
        .try_update(|state| state.apply_resolution(snapshot))
        .unwrap_or(false);

    if fetch_auxiliary {
        let payload = api::fetch_auxiliary().await;
        session.update(|state| state.apply_auxiliary(payload));
    }
}
