//! `/karriere`: benefits, open positions and the application form.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use site::catalog::BENEFITS;

use crate::components::application_form::ApplicationForm;
use crate::components::job_listings::JobListings;
use crate::components::section_title::SectionTitle;

#[component]
pub fn CareersPage() -> impl IntoView {
    let position = RwSignal::new(String::new());
    let form_ref = NodeRef::<leptos::html::Div>::new();

    let on_apply = Callback::new(move |title: String| {
        position.set(title);
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = form_ref.get_untracked() {
                el.scroll_into_view();
            }
        }
    });

    view! {
        <Title text="Karriere"/>
        <Meta name="description" content="Offene Stellen bei Ritter Digital. Werden Sie Teil unseres Teams."/>

        <section class="page-hero">
            <h1 class="page-hero__title">"Karriere bei Ritter Digital"</h1>
            <p class="page-hero__lead">"Gestalten Sie mit uns die digitale Zukunft unserer Kunden."</p>
        </section>

        <section class="section section--muted">
            <SectionTitle title="Was wir bieten"/>
            <div class="card-grid">
                {BENEFITS
                    .iter()
                    .map(|benefit| {
                        view! {
                            <div class="text-card">
                                <h3 class="text-card__title">{benefit.title}</h3>
                                <p>{benefit.description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>

        <section class="section">
            <SectionTitle title="Offene Stellen"/>
            <JobListings on_apply=on_apply/>
        </section>

        <section class="section section--muted">
            <div class="section__narrow" node_ref=form_ref id="bewerbung">
                <SectionTitle
                    title="Jetzt bewerben"
                    subtitle="Keine passende Stelle dabei? Wir freuen uns auch über Initiativbewerbungen."
                />
                <ApplicationForm position=position/>
            </div>
        </section>
    }
}
