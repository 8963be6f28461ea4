//! Identity claims display.

#[cfg(test)]
#[path = "claims_card_test.rs"]
mod claims_card_test;

use leptos::prelude::*;

use crate::net::types::ClientPrincipal;

/// Join role names for display, preserving gateway order.
fn roles_line(roles: &[String]) -> String {
    roles.join(", ")
}

/// Card listing the resolved identity's claims.
#[component]
pub fn ClaimsCard(principal: ClientPrincipal) -> impl IntoView {
    let ClientPrincipal {
        user_id,
        user_details,
        identity_provider,
        user_roles,
    } = principal;
    let roles = roles_line(&user_roles);

    view! {
        <div class="claims-card">
            <h3 class="claims-card__title">{format!("Welcome, {user_details}")}</h3>
            <dl class="claims-card__list">
                <dt>"User ID"</dt>
                <dd>{user_id}</dd>
                <dt>"Provider"</dt>
                <dd>{identity_provider}</dd>
                <dt>"Roles"</dt>
                <dd>{roles}</dd>
            </dl>
        </div>
    }
}
