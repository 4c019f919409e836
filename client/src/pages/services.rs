//! `/leistungen` overview and the per-service detail pages.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_meta::{Meta, Title};
use leptos_router::hooks::use_params_map;

use site::catalog::{SERVICES, Service, service_by_slug};

use crate::components::contact_form::ContactForm;
use crate::components::section_title::SectionTitle;
use crate::pages::not_found::NotFoundPage;

#[component]
pub fn ServicesPage() -> impl IntoView {
    view! {
        <Title text="Leistungen"/>
        <Meta
            name="description"
            content="Business Intelligence, Data Warehouse, Softwareentwicklung und Künstliche Intelligenz von Ritter Digital."
        />
        <section class="page-hero">
            <h1 class="page-hero__title">"Unsere Leistungen"</h1>
            <p class="page-hero__lead">"Individuelle Lösungen für datengetriebene Unternehmen."</p>
        </section>
        <section class="section">
            <div class="service-list">
                {SERVICES.iter().map(|service| view! { <ServiceSummary service=*service/> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ServiceSummary(service: Service) -> impl IntoView {
    view! {
        <article class="service-summary">
            <h2 class="service-summary__title">{service.title}</h2>
            <p class="service-summary__subtitle">{service.subtitle}</p>
            <p>{service.short_description}</p>
            <ul class="checklist">
                {service.highlights.iter().map(|h| view! { <li>{*h}</li> }).collect_view()}
            </ul>
            <a href=service.href() class="button button--primary">"Details ansehen"</a>
        </article>
    }
}

/// `/leistungen/:service`; unknown slugs render the 404 page.
#[component]
pub fn ServiceDetailPage() -> impl IntoView {
    let params = use_params_map();
    let service = move || params.with(|p| p.get_str("service").and_then(service_by_slug));

    move || match service() {
        Some(service) => view! { <ServiceDetail service=*service/> }.into_any(),
        None => view! { <NotFoundPage/> }.into_any(),
    }
}

#[component]
fn ServiceDetail(service: Service) -> impl IntoView {
    view! {
        <Title text=service.title/>
        <Meta name="description" content=service.short_description/>

        <section class="page-hero">
            <p class="page-hero__eyebrow"><a href="/leistungen">"Leistungen"</a></p>
            <h1 class="page-hero__title">{service.title}</h1>
            <p class="page-hero__lead">{service.subtitle}</p>
        </section>

        <section class="section">
            <div class="section__narrow">
                <p class="lead">{service.description}</p>
                <ul class="checklist">
                    {service.highlights.iter().map(|h| view! { <li>{*h}</li> }).collect_view()}
                </ul>
            </div>
        </section>

        <section class="section section--muted">
            <SectionTitle title="Was wir für Sie tun"/>
            <div class="card-grid">
                {service
                    .features
                    .iter()
                    .map(|feature| {
                        view! {
                            <div class="text-card">
                                <h3 class="text-card__title">{feature.title}</h3>
                                <p>{feature.description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>

        <section class="section">
            <SectionTitle title=service.cta/>
            <div class="section__narrow">
                <ContactForm subject=format!("Anfrage: {}", service.title)/>
            </div>
        </section>
    }
}
