//! Wire-format DTOs for the authentication gateway.
//!
//! DESIGN
//! ======
//! These types mirror the gateway's introspection payload exactly so serde
//! can lift responses without hand-written decoding. Absence of the
//! principal object is the gateway's way of saying "not authenticated".

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The authenticated principal as returned by the introspection endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientPrincipal {
    /// Opaque user identifier assigned by the identity provider.
    pub user_id: String,
    /// Human-readable display name (email or username).
    pub user_details: String,
    /// Provider that vouched for this identity (e.g. `"aad"`, `"github"`).
    pub identity_provider: String,
    /// Role names granted to this identity, in gateway order.
    pub user_roles: Vec<String>,
}

/// Envelope returned by the introspection endpoint.
///
/// The gateway sends `{"clientPrincipal": null}` (or omits the key
/// entirely) for anonymous callers; unknown sibling fields are ignored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionResponse {
    /// The principal, when the caller is authenticated.
    #[serde(default)]
    pub client_principal: Option<ClientPrincipal>,
}

/// Build the fallback payload shown when the auxiliary API is unreachable.
///
/// The shape is fixed so the payload view always has something renderable:
/// a message, the synthesis time in milliseconds since the Unix epoch, and
/// a `"mock_response"` status marker distinguishing it from real API data.
pub fn auxiliary_placeholder(timestamp_ms: u64) -> serde_json::Value {
    serde_json::json!({
        "message": "Auxiliary API unreachable; showing a generated response.",
        "timestamp": timestamp_ms,
        "status": "mock_response",
    })
}
