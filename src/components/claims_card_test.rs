use super::*;

// =============================================================
// Role display
// =============================================================

#[test]
fn roles_line_joins_in_gateway_order() {
    let roles = vec![
        "anonymous".to_owned(),
        "authenticated".to_owned(),
        "admin".to_owned(),
    ];
    assert_eq!(roles_line(&roles), "anonymous, authenticated, admin");
}

#[test]
fn roles_line_single_role_has_no_separator() {
    assert_eq!(roles_line(&["authenticated".to_owned()]), "authenticated");
}
