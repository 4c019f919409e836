//! Job application form on `/karriere`.
//!
//! The CV is not uploaded; only its name, size and type travel with the
//! application so the recruiting inbox can ask for it by mail.

use leptos::prelude::*;

use site::api::MSG_APPLICATION_SENT;
use site::consent::AnalyticsEvent;
use site::validation::{JobApplication, ResumeInfo, Validate};

use crate::components::error_message::{FieldHint, FormNotice};
use crate::components::form_field::{PrivacyCheckbox, SubmitButton, TextAreaField, TextField};
use crate::state::consent::ConsentState;
use crate::state::form::{FormState, optional};

#[component]
pub fn ApplicationForm(
    /// Selected job title; follows the "Jetzt bewerben" buttons.
    position: RwSignal<String>,
) -> impl IntoView {
    let consent = expect_context::<RwSignal<ConsentState>>();
    let form = RwSignal::new(FormState::default());

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let resume = RwSignal::new(None::<ResumeInfo>);
    let privacy = RwSignal::new(false);

    let on_resume = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            let file = input.files().and_then(|files| files.get(0));
            resume.set(file.as_ref().map(resume_info));
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let application = JobApplication {
            first_name: first_name.get_untracked().trim().to_owned(),
            last_name: last_name.get_untracked().trim().to_owned(),
            email: email.get_untracked().trim().to_owned(),
            phone: optional(&phone.get_untracked()),
            position: position.get_untracked().trim().to_owned(),
            message: message.get_untracked().trim().to_owned(),
            resume: resume.get_untracked(),
            privacy: privacy.get_untracked(),
        };
        let mut started = false;
        form.update(|f| started = f.begin_submit(application.validate()));
        if !started {
            return;
        }

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let event = AnalyticsEvent::application_submission(&application.position);
            let outcome = crate::net::api::submit_application(application).await;
            let mut ok = false;
            form.update(|f| ok = f.finish(outcome, MSG_APPLICATION_SENT));
            if ok {
                for field in [first_name, last_name, email, phone, message] {
                    field.set(String::new());
                }
                resume.set(None);
                privacy.set(false);
                crate::util::analytics::event(consent.get_untracked().level(), &event);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (application, consent);
    };

    let resume_label = move || {
        resume.with(|r| r.as_ref().map_or_else(|| "Lebenslauf auswählen (PDF, DOC, DOCX)".to_owned(), |r| r.file_name.clone()))
    };

    view! {
        <form class="application-form" on:submit=on_submit novalidate>
            <h3 class="application-form__title">
                "Bewerbung für "
                {move || {
                    let p = position.get();
                    if p.trim().is_empty() { "eine Initiativbewerbung".to_owned() } else { p }
                }}
            </h3>
            <TextField label="Position *" field="position" value=position form=form/>
            <div class="form__row">
                <TextField label="Vorname *" field="firstName" value=first_name form=form autocomplete="given-name"/>
                <TextField label="Nachname *" field="lastName" value=last_name form=form autocomplete="family-name"/>
            </div>
            <div class="form__row">
                <TextField label="E-Mail *" field="email" value=email form=form kind="email" autocomplete="email"/>
                <TextField label="Telefon" field="phone" value=phone form=form kind="tel" autocomplete="tel"/>
            </div>
            <TextAreaField
                label="Anschreiben *"
                field="message"
                value=message
                form=form
                placeholder="Warum sind Sie an dieser Position interessiert?"
            />
            <label class="form__file">
                <span class="form__label">"Lebenslauf *"</span>
                <input
                    type="file"
                    name="resume"
                    accept=".pdf,.doc,.docx,application/pdf,application/msword,application/vnd.openxmlformats-officedocument.wordprocessingml.document"
                    on:change=on_resume
                />
                <span class="form__file-name">{resume_label}</span>
                <FieldHint form=form field="resume"/>
            </label>
            <PrivacyCheckbox checked=privacy form=form/>
            <SubmitButton form=form label="Bewerbung absenden"/>
            <FormNotice form=form/>
        </form>
    }
}

#[cfg(feature = "hydrate")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn resume_info(file: &web_sys::File) -> ResumeInfo {
    ResumeInfo { file_name: file.name(), size_bytes: file.size() as u64, content_type: file.type_() }
}
