//! Session snapshot state machine.
//!
//! DESIGN
//! ======
//! The resolver owns one `SessionState` for the whole page: the current
//! snapshot plus the auxiliary payload that only exists alongside an
//! authenticated snapshot. Snapshots are replaced wholesale on each
//! resolution; nothing is patched in place.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::api::IntrospectionOutcome;
use crate::net::types::ClientPrincipal;

/// The client's current belief about the session.
///
/// Exactly one variant holds at any time. `Unresolved` exists only before
/// the first resolution completes and is never re-entered.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SessionSnapshot {
    /// Initial state; no resolution has completed yet.
    #[default]
    Unresolved,
    /// Resolved: the gateway reports no principal.
    Anonymous,
    /// Resolved: the gateway vouched for this identity.
    Authenticated(ClientPrincipal),
}

impl SessionSnapshot {
    /// Resolve one introspection outcome into the next snapshot.
    ///
    /// Transport failures resolve to `Anonymous` everywhere except a
    /// recognized local-development host, where a clearly labeled synthetic
    /// identity is substituted so the signed-in view can be exercised
    /// without a live gateway. Never yields `Unresolved`.
    pub fn resolve(outcome: IntrospectionOutcome, local_dev: bool) -> Self {
        match outcome {
            IntrospectionOutcome::Response(Some(principal)) => Self::Authenticated(principal),
            IntrospectionOutcome::Response(None) => Self::Anonymous,
            IntrospectionOutcome::TransportFailure(_) if local_dev => {
                Self::Authenticated(synthetic_local_identity())
            }
            IntrospectionOutcome::TransportFailure(_) => Self::Anonymous,
        }
    }

    /// Whether this snapshot carries an identity.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}

/// Placeholder principal substituted when the gateway is unreachable during
/// local development.
pub fn synthetic_local_identity() -> ClientPrincipal {
    ClientPrincipal {
        user_id: "local-dev-user".to_owned(),
        user_details: "Local Development User".to_owned(),
        identity_provider: "mock".to_owned(),
        user_roles: vec!["anonymous".to_owned(), "authenticated".to_owned()],
    }
}

/// Resolver-owned session state: the snapshot plus the sample API payload.
///
/// The view layer reads this through an immutable projection per render and
/// never writes back.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    /// Current session belief.
    pub snapshot: SessionSnapshot,
    /// Sample API payload; present only alongside an authenticated snapshot.
    pub auxiliary: Option<serde_json::Value>,
}

impl SessionState {
    /// Install a completed resolution.
    ///
    /// Any previous auxiliary payload is discarded; the caller should start
    /// a fresh auxiliary fetch exactly when this returns `true`.
    pub fn apply_resolution(&mut self, snapshot: SessionSnapshot) -> bool {
        let fetch_auxiliary = snapshot.is_authenticated();
        self.snapshot = snapshot;
        self.auxiliary = None;
        fetch_auxiliary
    }

    /// Store an auxiliary payload, unless the session has since left the
    /// authenticated state (late completions are dropped).
    pub fn apply_auxiliary(&mut self, payload: serde_json::Value) {
        if self.snapshot.is_authenticated() {
            self.auxiliary = Some(payload);
        }
    }
}
