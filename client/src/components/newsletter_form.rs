//! Newsletter sign-up form (footer and blog sidebar).

use leptos::prelude::*;

use site::api::MSG_NEWSLETTER_SUBSCRIBED;
use site::consent::AnalyticsEvent;
use site::validation::{NewsletterSignup, Validate};

use crate::components::error_message::FormNotice;
use crate::components::form_field::{PrivacyCheckbox, SubmitButton, TextField};
use crate::state::consent::ConsentState;
use crate::state::form::{FormState, optional};

#[component]
pub fn NewsletterForm(
    /// Email and consent only, for the footer.
    #[prop(optional)]
    compact: bool,
) -> impl IntoView {
    let consent = expect_context::<RwSignal<ConsentState>>();
    let form = RwSignal::new(FormState::default());
    let email = RwSignal::new(String::new());
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let privacy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let signup = NewsletterSignup {
            email: email.get_untracked().trim().to_owned(),
            first_name: optional(&first_name.get_untracked()),
            last_name: optional(&last_name.get_untracked()),
            privacy: privacy.get_untracked(),
        };
        let mut started = false;
        form.update(|f| started = f.begin_submit(signup.validate()));
        if !started {
            return;
        }

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::subscribe_newsletter(signup).await;
            let mut ok = false;
            form.update(|f| ok = f.finish(outcome, MSG_NEWSLETTER_SUBSCRIBED));
            if ok {
                email.set(String::new());
                first_name.set(String::new());
                last_name.set(String::new());
                privacy.set(false);
                let level = consent.get_untracked().level();
                crate::util::analytics::event(level, &AnalyticsEvent::newsletter_subscription());
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (signup, consent);
    };

    view! {
        <form class="newsletter-form" on:submit=on_submit novalidate>
            <Show when=move || !compact>
                <div class="form__row">
                    <TextField label="Vorname" field="firstName" value=first_name form=form autocomplete="given-name"/>
                    <TextField label="Nachname" field="lastName" value=last_name form=form autocomplete="family-name"/>
                </div>
            </Show>
            <TextField label="E-Mail-Adresse *" field="email" value=email form=form kind="email" autocomplete="email" placeholder="ihre@email.de"/>
            <PrivacyCheckbox checked=privacy form=form/>
            <SubmitButton form=form label="Abonnieren"/>
            <FormNotice form=form/>
        </form>
    }
}
