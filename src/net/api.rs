//! Gateway and API call helpers.
//!
//! Browser build (`csr`): real HTTP calls via `gloo-net` and navigation via
//! `window.location`. Native build: stubs, since every endpoint here only
//! exists in front of the hosting platform's gateway.
//!
//! ERROR HANDLING
//! ==============
//! Callers get outcome values instead of panics: introspection failures
//! surface as [`IntrospectionOutcome::TransportFailure`] and auxiliary
//! failures as a substituted placeholder payload, so the session view
//! degrades instead of crashing.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::ClientPrincipal;
#[cfg(feature = "csr")]
use super::types::IntrospectionResponse;

/// Platform-reserved "who am I" endpoint.
pub const INTROSPECTION_ENDPOINT: &str = "/.auth/me";

/// Application-relative endpoint for the sample authenticated call.
pub const AUXILIARY_ENDPOINT: &str = "/api/message";

/// Result of one introspection request.
#[derive(Clone, Debug, PartialEq)]
pub enum IntrospectionOutcome {
    /// Well-formed gateway response; `None` means anonymous.
    Response(Option<ClientPrincipal>),
    /// Network error, non-2xx status, or a body that was not gateway JSON.
    TransportFailure(String),
}

/// Login URL for a provider segment, e.g. `login_url("github")`.
///
/// The provider string is passed through unvalidated; rejecting unknown
/// providers is the gateway's job.
pub fn login_url(provider: &str) -> String {
    format!("/.auth/login/{provider}")
}

/// Platform-reserved logout URL.
pub fn logout_url() -> &'static str {
    "/.auth/logout"
}

#[cfg(any(test, feature = "csr"))]
fn introspection_failed_message(status: u16) -> String {
    format!("introspection request failed: {status}")
}

#[cfg(any(test, feature = "csr"))]
fn auxiliary_failed_message(status: u16) -> String {
    format!("auxiliary request failed: {status}")
}

/// Query the introspection endpoint for the current principal.
pub async fn fetch_introspection() -> IntrospectionOutcome {
    #[cfg(feature = "csr")]
    {
        let resp = match gloo_net::http::Request::get(INTROSPECTION_ENDPOINT).send().await {
            Ok(resp) => resp,
            Err(e) => return IntrospectionOutcome::TransportFailure(e.to_string()),
        };
        if !resp.ok() {
            return IntrospectionOutcome::TransportFailure(introspection_failed_message(
                resp.status(),
            ));
        }
        match resp.json::<IntrospectionResponse>().await {
            Ok(body) => IntrospectionOutcome::Response(body.client_principal),
            Err(e) => IntrospectionOutcome::TransportFailure(e.to_string()),
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        IntrospectionOutcome::TransportFailure("not available outside the browser".to_owned())
    }
}

/// Fetch the sample authenticated payload.
///
/// Always yields something renderable: on any failure the synthesized
/// placeholder from [`super::types::auxiliary_placeholder`] is substituted
/// and the failure is logged. The auxiliary call is best-effort; it never
/// feeds back into authentication state.
pub async fn fetch_auxiliary() -> serde_json::Value {
    #[cfg(feature = "csr")]
    {
        match try_fetch_auxiliary().await {
            Ok(payload) => payload,
            Err(e) => {
                log::warn!("auxiliary call failed, substituting placeholder: {e}");
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let now_ms = js_sys::Date::now() as u64;
                super::types::auxiliary_placeholder(now_ms)
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        super::types::auxiliary_placeholder(0)
    }
}

#[cfg(feature = "csr")]
async fn try_fetch_auxiliary() -> Result<serde_json::Value, String> {
    let resp = gloo_net::http::Request::get(AUXILIARY_ENDPOINT)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(auxiliary_failed_message(resp.status()));
    }
    resp.json::<serde_json::Value>().await.map_err(|e| e.to_string())
}

/// Navigate to the gateway login flow for `provider`.
///
/// Terminal navigation: the page unloads and control does not return.
pub fn request_login(provider: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(&login_url(provider));
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = provider;
    }
}

/// Navigate to the gateway logout flow. Same termination semantics as login.
pub fn request_logout() {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(logout_url());
        }
    }
}
