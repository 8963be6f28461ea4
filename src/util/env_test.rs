use super::*;

// =============================================================
// Local host recognition
// =============================================================

#[test]
fn localhost_is_local() {
    assert!(is_local_host("localhost"));
}

#[test]
fn loopback_ipv4_is_local() {
    assert!(is_local_host("127.0.0.1"));
}

#[test]
fn loopback_ipv6_is_local() {
    assert!(is_local_host("[::1]"));
}

#[test]
fn deployed_host_is_not_local() {
    assert!(!is_local_host("app.example.com"));
}

#[test]
fn localhost_subdomain_is_not_local() {
    // Exact membership only; no suffix matching.
    assert!(!is_local_host("evil-localhost"));
    assert!(!is_local_host("localhost.example.com"));
}
