//! Inline error and form status notices.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::state::form::{FormState, FormStatus};

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="error-message" role="alert">
            <span class="error-message__icon" aria-hidden="true">"!"</span>
            <p class="error-message__text">{message}</p>
        </div>
    }
}

/// Message recorded for one input, rendered under it.
#[component]
pub fn FieldHint(form: RwSignal<FormState>, field: &'static str) -> impl IntoView {
    move || form.with(|f| f.field_error(field)).map(|message| view! { <p class="form__field-error">{message}</p> })
}

/// Success or failure banner for a submitted form.
#[component]
pub fn FormNotice(form: RwSignal<FormState>) -> impl IntoView {
    move || match form.with(|f| f.status.clone()) {
        FormStatus::Succeeded(message) => Some(view! { <p class="form__notice form__notice--success" role="status">{message}</p> }.into_any()),
        FormStatus::Failed(message) => Some(view! { <ErrorMessage message=message/> }.into_any()),
        FormStatus::Idle | FormStatus::Submitting => None,
    }
}
