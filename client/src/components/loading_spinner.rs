//! Spinner shown while a request is in flight.

use leptos::prelude::*;

#[component]
pub fn LoadingSpinner(#[prop(optional)] label: Option<&'static str>) -> impl IntoView {
    let label = label.unwrap_or("Wird geladen…");
    view! {
        <div class="loading-spinner" role="status" aria-live="polite">
            <span class="loading-spinner__ring" aria-hidden="true"></span>
            <span class="loading-spinner__label">{label}</span>
        </div>
    }
}
