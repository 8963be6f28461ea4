//! Single page projecting the session snapshot.

use leptos::prelude::*;

use crate::components::claims_card::ClaimsCard;
use crate::components::payload_view::PayloadView;
use crate::components::provider_buttons::ProviderButtons;
use crate::state::session::{SessionSnapshot, SessionState};

/// The only page: a resolving notice, the login buttons, or the signed-in
/// view, depending on the current snapshot.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        <div class="auth-page">
            <header class="auth-page__header">
                <h1>"Authentication Gateway"</h1>
                <h2 class="auth-page__subtitle">"Custom Authentication Test"</h2>
            </header>
            <main class="auth-page__body">
                {move || match session.get().snapshot {
                    SessionSnapshot::Unresolved => {
                        view! { <p class="auth-page__notice">"Resolving session..."</p> }
                            .into_any()
                    }
                    SessionSnapshot::Anonymous => view! { <ProviderButtons/> }.into_any(),
                    SessionSnapshot::Authenticated(principal) => {
                        view! {
                            <div class="auth-page__signed-in">
                                <ClaimsCard principal=principal/>
                                {move || {
                                    session
                                        .get()
                                        .auxiliary
                                        .map(|payload| view! { <PayloadView payload=payload/> })
                                }}
                                <button
                                    class="auth-button auth-button--logout"
                                    on:click=move |_| crate::net::api::request_logout()
                                >
                                    "Log out"
                                </button>
                            </div>
                        }
                            .into_any()
                    }
                }}
            </main>
        </div>
    }
}
