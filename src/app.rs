//! Root application component.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::pages::home::HomePage;
use crate::state::session::SessionState;

/// Root component.
///
/// Owns the session context for the page lifetime, performs the initial
/// resolution, and re-resolves whenever the tab regains focus or another
/// tab signals a storage change. The listener subscriptions are owned by
/// the reactive owner, so they are dropped (and deregistered) with it.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    provide_context(session);

    crate::state::resolver::refresh(session);

    #[cfg(feature = "csr")]
    {
        use crate::util::listeners::WindowSubscription;

        let _subscriptions = StoredValue::new_local(["focus", "storage"].map(|event| {
            WindowSubscription::subscribe(event, move |_| {
                crate::state::resolver::refresh(session);
            })
        }));
    }

    view! {
        <Title text="Custom Authentication Test"/>
        <HomePage/>
    }
}
