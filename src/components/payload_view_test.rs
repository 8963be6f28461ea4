use super::*;

// =============================================================
// Placeholder detection
// =============================================================

#[test]
fn placeholder_payload_is_detected() {
    let payload = crate::net::types::auxiliary_placeholder(123);
    assert!(is_placeholder(&payload));
}

#[test]
fn real_payload_is_not_placeholder() {
    let payload = serde_json::json!({"message": "hello from the API"});
    assert!(!is_placeholder(&payload));
}

#[test]
fn non_string_status_is_not_placeholder() {
    let payload = serde_json::json!({"status": 200});
    assert!(!is_placeholder(&payload));
}

// =============================================================
// Rendering
// =============================================================

#[test]
fn pretty_renders_indented_json() {
    let payload = serde_json::json!({"a": 1});
    assert_eq!(pretty(&payload), "{\n  \"a\": 1\n}");
}
