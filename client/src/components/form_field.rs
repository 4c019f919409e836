//! Labelled inputs shared by the contact, newsletter and application forms.

use leptos::prelude::*;

use crate::components::error_message::FieldHint;
use crate::state::form::FormState;

/// Single-line input bound to `value`, with the field's error underneath.
#[component]
pub fn TextField(
    label: &'static str,
    /// Payload field name, as used in validation errors.
    field: &'static str,
    value: RwSignal<String>,
    form: RwSignal<FormState>,
    #[prop(default = "text")] kind: &'static str,
    #[prop(optional)] autocomplete: Option<&'static str>,
    #[prop(optional)] placeholder: Option<&'static str>,
) -> impl IntoView {
    let invalid = move || form.with(|f| f.field_error(field).is_some());
    view! {
        <label class="form__field" class:form__field--invalid=invalid>
            <span class="form__label">{label}</span>
            <input
                type=kind
                name=field
                autocomplete=autocomplete
                placeholder=placeholder
                aria-invalid=move || invalid().to_string()
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <FieldHint form=form field=field/>
        </label>
    }
}

/// Multi-line variant of [`TextField`].
#[component]
pub fn TextAreaField(
    label: &'static str,
    field: &'static str,
    value: RwSignal<String>,
    form: RwSignal<FormState>,
    #[prop(default = 5)] rows: u32,
    #[prop(optional)] placeholder: Option<&'static str>,
) -> impl IntoView {
    let invalid = move || form.with(|f| f.field_error(field).is_some());
    view! {
        <label class="form__field" class:form__field--invalid=invalid>
            <span class="form__label">{label}</span>
            <textarea
                name=field
                rows=rows
                placeholder=placeholder
                aria-invalid=move || invalid().to_string()
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            ></textarea>
            <FieldHint form=form field=field/>
        </label>
    }
}

/// The mandatory privacy-policy checkbox.
#[component]
pub fn PrivacyCheckbox(checked: RwSignal<bool>, form: RwSignal<FormState>) -> impl IntoView {
    view! {
        <label class="form__checkbox">
            <input
                type="checkbox"
                name="privacy"
                prop:checked=move || checked.get()
                on:change=move |ev| checked.set(event_target_checked(&ev))
            />
            <span>
                "Ich habe die " <a href="/datenschutz">"Datenschutzerklärung"</a>
                " gelesen und stimme der Verarbeitung meiner Daten zu. *"
            </span>
        </label>
        <FieldHint form=form field="privacy"/>
    }
}

/// Submit button that locks while the request is in flight.
#[component]
pub fn SubmitButton(form: RwSignal<FormState>, label: &'static str) -> impl IntoView {
    let busy = move || form.with(FormState::is_submitting);
    view! {
        <button type="submit" class="button button--primary" disabled=busy>
            {move || if busy() { "Wird gesendet…" } else { label }}
        </button>
    }
}
