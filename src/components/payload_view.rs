//! Pretty-printed display of the sample API payload.

#[cfg(test)]
#[path = "payload_view_test.rs"]
mod payload_view_test;

use leptos::prelude::*;

/// Whether `payload` is the synthesized fallback rather than real API data.
fn is_placeholder(payload: &serde_json::Value) -> bool {
    payload.get("status").and_then(serde_json::Value::as_str) == Some("mock_response")
}

/// Render `payload` as indented JSON.
fn pretty(payload: &serde_json::Value) -> String {
    serde_json::to_string_pretty(payload).unwrap_or_else(|_| payload.to_string())
}

/// Sample API payload block, flagged when the payload is the placeholder.
#[component]
pub fn PayloadView(payload: serde_json::Value) -> impl IntoView {
    let mock = is_placeholder(&payload);
    let rendered = pretty(&payload);

    view! {
        <div class="payload-view">
            <h3 class="payload-view__title">"API response"</h3>
            <Show when=move || mock>
                <p class="payload-view__notice">
                    "Generated locally; the API call did not succeed."
                </p>
            </Show>
            <pre class="payload-view__json">{rendered}</pre>
        </div>
    }
}
