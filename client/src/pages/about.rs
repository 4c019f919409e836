//! `/ueber-uns`: mission, values, team and company history.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use site::catalog::{HISTORY, SHORT_NAME, TEAM, VALUES};

use crate::components::section_title::SectionTitle;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Title text="Über Uns"/>
        <Meta
            name="description"
            content="Lernen Sie Ritter Digital kennen: unser Team, unsere Werte und unsere Geschichte."
        />

        <section class="page-hero">
            <h1 class="page-hero__title">{format!("Über {SHORT_NAME}")}</h1>
            <p class="page-hero__lead">
                "Wir verbinden fundiertes Prozesswissen mit moderner Datentechnologie, damit Unternehmen schneller bessere Entscheidungen treffen."
            </p>
        </section>

        <section class="section">
            <SectionTitle title="Unsere Werte"/>
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

        <section class="section section--muted">
            <SectionTitle title="Unser Team" subtitle="Die Menschen hinter Ritter Digital"/>
            <div class="team-grid">
                {TEAM
                    .iter()
                    .map(|member| {
                        view! {
                            <article class="team-card">
                                <img src=member.image alt=member.name class="team-card__image" loading="lazy"/>
                                <h3 class="team-card__name">{member.name}</h3>
                                <p class="team-card__role">{member.role}</p>
                                <p class="team-card__bio">{member.bio}</p>
                                <div class="team-card__links">
                                    <a href=member.linkedin target="_blank" rel="noopener noreferrer">"LinkedIn"</a>
                                    <a href=format!("mailto:{}", member.email)>"E-Mail"</a>
                                </div>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>

        <section class="section">
            <SectionTitle title="Unsere Geschichte"/>
            <ol class="timeline">
                {HISTORY
                    .iter()
                    .map(|milestone| {
                        view! {
                            <li class="timeline__item">
                                <span class="timeline__year">{milestone.year}</span>
                                <h3 class="timeline__title">{milestone.title}</h3>
                                <p>{milestone.description}</p>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </section>
    }
}
