//! Contact form on `/kontakt` and the home page CTA.

use leptos::prelude::*;

use site::api::MSG_CONTACT_SENT;
use site::consent::AnalyticsEvent;
use site::validation::{ContactRequest, Validate};

use crate::components::error_message::FormNotice;
use crate::components::form_field::{PrivacyCheckbox, SubmitButton, TextAreaField, TextField};
use crate::state::consent::ConsentState;
use crate::state::form::{FormState, optional};

#[component]
pub fn ContactForm(
    /// Prefilled subject, e.g. from a service page link.
    #[prop(optional, into)]
    subject: Option<String>,
) -> impl IntoView {
    let consent = expect_context::<RwSignal<ConsentState>>();
    let form = RwSignal::new(FormState::default());

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let company = RwSignal::new(String::new());
    let subject = RwSignal::new(subject.unwrap_or_default());
    let message = RwSignal::new(String::new());
    let privacy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = ContactRequest {
            first_name: first_name.get_untracked().trim().to_owned(),
            last_name: last_name.get_untracked().trim().to_owned(),
            email: email.get_untracked().trim().to_owned(),
            phone: optional(&phone.get_untracked()),
            company: optional(&company.get_untracked()),
            subject: subject.get_untracked().trim().to_owned(),
            message: message.get_untracked().trim().to_owned(),
            privacy: privacy.get_untracked(),
        };
        let mut started = false;
        form.update(|f| started = f.begin_submit(request.validate()));
        if !started {
            return;
        }

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::submit_contact(request).await;
            let mut ok = false;
            form.update(|f| ok = f.finish(outcome, MSG_CONTACT_SENT));
            if ok {
                for field in [first_name, last_name, email, phone, company, subject, message] {
                    field.set(String::new());
                }
                privacy.set(false);
                let level = consent.get_untracked().level();
                crate::util::analytics::event(level, &AnalyticsEvent::contact_form_submission());
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (request, consent);
    };

    view! {
        <form class="contact-form" on:submit=on_submit novalidate>
            <div class="form__row">
                <TextField label="Vorname *" field="firstName" value=first_name form=form autocomplete="given-name"/>
                <TextField label="Nachname *" field="lastName" value=last_name form=form autocomplete="family-name"/>
            </div>
            <div class="form__row">
                <TextField label="E-Mail *" field="email" value=email form=form kind="email" autocomplete="email"/>
                <TextField label="Telefon" field="phone" value=phone form=form kind="tel" autocomplete="tel"/>
            </div>
            <TextField label="Unternehmen" field="company" value=company form=form autocomplete="organization"/>
            <TextField label="Betreff *" field="subject" value=subject form=form/>
            <TextAreaField
                label="Nachricht *"
                field="message"
                value=message
                form=form
                rows=6
                placeholder="Wie können wir Ihnen helfen?"
            />
            <PrivacyCheckbox checked=privacy form=form/>
            <SubmitButton form=form label="Nachricht senden"/>
            <FormNotice form=form/>
        </form>
    }
}
