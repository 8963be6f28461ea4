//! Login buttons for the supported identity providers.

use leptos::prelude::*;

/// Provider segments and button labels, in display order.
///
/// The set is open on the gateway side; these are the providers this page
/// offers out of the box.
pub const PROVIDERS: [(&str, &str); 3] = [
    ("aad", "Log in with Microsoft"),
    ("google", "Log in with Google"),
    ("github", "Log in with GitHub"),
];

/// One login button per supported provider; clicking hands the page over
/// to the gateway's login flow and does not return.
#[component]
pub fn ProviderButtons() -> impl IntoView {
    view! {
        <div class="auth-buttons">
            {PROVIDERS
                .into_iter()
                .map(|(provider, label)| {
                    view! {
                        <button
                            class=format!("auth-button auth-button--{provider}")
                            on:click=move |_| crate::net::api::request_login(provider)
                        >
                            {label}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
            <p class="auth-buttons__hint">
                "Pick a provider to test the gateway's login flow."
            </p>
        </div>
    }
}
