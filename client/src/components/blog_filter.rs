//! Search box and category chips above the blog listing.
//!
//! SYSTEM CONTEXT
//! ==============
//! The filter never fetches anything itself. Every change navigates to a
//! new `/blog?...` URL; the blog page derives its query from the URL and
//! refetches. Changing a filter always returns to page 1.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use site::blog::Category;
use site::consent::AnalyticsEvent;
use site::query::BlogQuery;

use crate::net::url;
use crate::state::consent::ConsentState;

#[component]
pub fn BlogFilter(#[prop(into)] query: Signal<BlogQuery>, #[prop(into)] categories: Signal<Vec<Category>>) -> impl IntoView {
    let consent = expect_context::<RwSignal<ConsentState>>();
    let navigate = use_navigate();
    let search = RwSignal::new(query.get_untracked().search.unwrap_or_default());

    // Back/forward navigation changes the URL under us.
    Effect::new(move || {
        search.set(query.get().search.unwrap_or_default());
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let term = search.get_untracked().trim().to_owned();
        if !term.is_empty() {
            crate::util::analytics::event(consent.get_untracked().level(), &AnalyticsEvent::blog_search(&term));
        }
        let next = query.get_untracked().with_search((!term.is_empty()).then_some(term));
        navigate(&url::blog_page_path(&next), NavigateOptions::default());
    };

    let clear_href = move || url::blog_page_path(&query.get().with_search(None));

    let chip = move |label: String, slug: Option<String>| {
        let active = {
            let slug = slug.clone();
            move || query.with(|q| q.category == slug)
        };
        let href = move || url::blog_page_path(&query.get().with_category(slug.clone()));
        view! {
            <a href=href class="blog-filter__chip" class:blog-filter__chip--active=active>{label}</a>
        }
    };

    view! {
        <div class="blog-filter">
            <form class="blog-filter__search" role="search" on:submit=on_submit>
                <input
                    type="search"
                    placeholder="Artikel durchsuchen…"
                    aria-label="Artikel durchsuchen"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <button type="submit" class="button button--primary">"Suchen"</button>
                <Show when=move || query.with(|q| q.search.is_some())>
                    <a href=clear_href class="button button--ghost">"Zurücksetzen"</a>
                </Show>
            </form>
            <div class="blog-filter__chips">
                {chip("Alle".to_owned(), None)}
                {move || {
                    categories
                        .get()
                        .into_iter()
                        .map(|c| chip(c.name, Some(c.slug)))
                        .collect_view()
                }}
            </div>
        </div>
    }
}
