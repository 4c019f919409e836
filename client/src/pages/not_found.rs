//! 404 page.

use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Seite nicht gefunden"/>
        <section class="page-hero page-hero--center">
            <p class="page-hero__eyebrow">"404"</p>
            <h1 class="page-hero__title">"Seite nicht gefunden"</h1>
            <p class="page-hero__lead">"Die angeforderte Seite existiert nicht oder wurde verschoben."</p>
            <div class="hero__actions">
                <a href="/" class="button button--primary">"Zur Startseite"</a>
                <a href="/kontakt" class="button button--ghost">"Kontakt aufnehmen"</a>
            </div>
        </section>
    }
}
