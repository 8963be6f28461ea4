use super::*;

// =============================================================
// Helpers
// =============================================================

fn make_principal() -> ClientPrincipal {
    ClientPrincipal {
        user_id: "u1".to_owned(),
        user_details: "Alice".to_owned(),
        identity_provider: "github".to_owned(),
        user_roles: vec!["anonymous".to_owned(), "authenticated".to_owned()],
    }
}

// =============================================================
// Introspection payload parsing
// =============================================================

#[test]
fn parses_principal_from_gateway_payload() {
    let body = r#"{"clientPrincipal": {"userId":"u1","userDetails":"Alice","identityProvider":"github","userRoles":["anonymous","authenticated"]}}"#;
    let parsed: IntrospectionResponse = serde_json::from_str(body).unwrap();
    assert_eq!(parsed.client_principal, Some(make_principal()));
}

#[test]
fn empty_object_parses_as_anonymous() {
    let parsed: IntrospectionResponse = serde_json::from_str("{}").unwrap();
    assert!(parsed.client_principal.is_none());
}

#[test]
fn null_principal_parses_as_anonymous() {
    let parsed: IntrospectionResponse = serde_json::from_str(r#"{"clientPrincipal": null}"#).unwrap();
    assert!(parsed.client_principal.is_none());
}

#[test]
fn unknown_sibling_fields_are_ignored() {
    let body = r#"{"clientPrincipal": null, "identityProviderHints": ["aad"]}"#;
    let parsed: IntrospectionResponse = serde_json::from_str(body).unwrap();
    assert!(parsed.client_principal.is_none());
}

#[test]
fn role_order_is_preserved() {
    let body = r#"{"clientPrincipal": {"userId":"u1","userDetails":"Alice","identityProvider":"github","userRoles":["admin","authenticated","anonymous"]}}"#;
    let parsed: IntrospectionResponse = serde_json::from_str(body).unwrap();
    let principal = parsed.client_principal.unwrap();
    assert_eq!(principal.user_roles, ["admin", "authenticated", "anonymous"]);
}

#[test]
fn principal_serializes_with_camel_case_keys() {
    let value = serde_json::to_value(make_principal()).unwrap();
    assert!(value.get("userId").is_some());
    assert!(value.get("userDetails").is_some());
    assert!(value.get("identityProvider").is_some());
    assert!(value.get("userRoles").is_some());
}

// =============================================================
// Auxiliary placeholder
// =============================================================

#[test]
fn placeholder_carries_failure_marker_and_timestamp() {
    let payload = auxiliary_placeholder(1_700_000_000_000);
    assert_eq!(payload["status"], "mock_response");
    assert_eq!(payload["timestamp"], 1_700_000_000_000_u64);
    assert!(payload["message"].is_string());
}
