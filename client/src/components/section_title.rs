//! Centered heading block used at the top of page sections.

use leptos::prelude::*;

#[component]
pub fn SectionTitle(
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
    #[prop(optional)] left: bool,
) -> impl IntoView {
    let class = if left { "section-title" } else { "section-title section-title--center" };
    view! {
        <div class=class>
            <h2 class="section-title__heading">{title}</h2>
            {subtitle.map(|s| view! { <p class="section-title__subtitle">{s}</p> })}
        </div>
    }
}
