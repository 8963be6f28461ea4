use super::*;

// =============================================================
// Navigation targets
// =============================================================

#[test]
fn login_url_templates_provider_segment() {
    assert_eq!(login_url("google"), "/.auth/login/google");
}

#[test]
fn login_url_passes_unknown_providers_through() {
    // The gateway owns provider validation; the client does not filter.
    assert_eq!(login_url("not-a-provider"), "/.auth/login/not-a-provider");
}

#[test]
fn logout_url_is_fixed() {
    assert_eq!(logout_url(), "/.auth/logout");
}

// =============================================================
// Endpoints
// =============================================================

#[test]
fn introspection_endpoint_is_platform_reserved() {
    assert_eq!(INTROSPECTION_ENDPOINT, "/.auth/me");
}

#[test]
fn auxiliary_endpoint_is_application_relative() {
    assert_eq!(AUXILIARY_ENDPOINT, "/api/message");
}

// =============================================================
// Failure messages
// =============================================================

#[test]
fn introspection_failed_message_formats_status() {
    assert_eq!(introspection_failed_message(503), "introspection request failed: 503");
}

#[test]
fn auxiliary_failed_message_formats_status() {
    assert_eq!(auxiliary_failed_message(404), "auxiliary request failed: 404");
}
