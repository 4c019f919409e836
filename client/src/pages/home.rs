//! Landing page: hero, service overview, values and a contact CTA.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use site::catalog::{SERVICES, SITE_DESCRIPTION, VALUES};
use site::consent::AnalyticsEvent;

use crate::components::contact_form::ContactForm;
use crate::components::section_title::SectionTitle;
use crate::state::consent::ConsentState;

#[component]
pub fn HomePage() -> impl IntoView {
    let consent = expect_context::<RwSignal<ConsentState>>();
    let track_cta = move |label: &'static str| {
        move |_: leptos::ev::MouseEvent| crate::util::analytics::event(consent.get_untracked().level(), &AnalyticsEvent::cta_click(label))
    };

    view! {
        <Title text=""/>
        <Meta name="description" content=SITE_DESCRIPTION/>

        <section class="hero">
            <div class="hero__inner">
                <h1 class="hero__title">
                    "Digitale Prozesse, die "<span class="hero__accent">"wirken"</span>"."
                </h1>
                <p class="hero__lead">{SITE_DESCRIPTION}</p>
                <div class="hero__actions">
                    <a href="/kontakt" class="button button--primary" on:click=track_cta("hero_kontakt")>
                        "Beratung anfragen"
                    </a>
                    <a href="/leistungen" class="button button--ghost" on:click=track_cta("hero_leistungen")>
                        "Unsere Leistungen"
                    </a>
                </div>
            </div>
        </section>

        <section class="section">
            <SectionTitle title="Unsere Leistungen" subtitle="Von der Datenstrategie bis zur fertigen Software"/>
            <div class="card-grid">
                {SERVICES
                    .iter()
                    .map(|service| {
                        view! {
                            <a href=service.href() class="service-card">
                                <h3 class="service-card__title">{service.title}</h3>
                                <p class="service-card__text">{service.short_description}</p>
                                <span class="service-card__more">"Mehr erfahren →"</span>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </section>

        <section class="section section--muted">
            <SectionTitle title="Wofür wir stehen"/>
            <div class="card-grid">
                {VALUES
                    .iter()
                    .map(|value| {
                        view! {
                            <div class="text-card">
                                <h3 class="text-card__title">{value.title}</h3>
                                <p>{value.description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>

        <section class="section">
            <SectionTitle title="Sprechen Sie mit uns" subtitle="Wir melden uns innerhalb eines Werktages."/>
            <div class="section__narrow">
                <ContactForm/>
            </div>
        </section>
    }
}
