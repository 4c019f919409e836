//! Numbered pager for the blog listing.
//!
//! Pages are plain links to `/blog?...` so the listing stays crawlable and
//! the router handles the navigation.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use site::pagination::{DEFAULT_MAX_VISIBLE, EllipsisSide, PageItem, has_next, has_prev, visible_pages};
use site::query::BlogQuery;

use crate::net::url;

#[component]
pub fn Pager(query: BlogQuery, total_pages: u32) -> impl IntoView {
    let current = query.page;
    let items = visible_pages(current, total_pages, DEFAULT_MAX_VISIBLE);
    if items.is_empty() {
        return None;
    }
    let link = |page: u32| url::blog_page_path(&query.with_page(page));

    let prev = has_prev(current).then(|| view! { <a href=link(current - 1) class="pager__step" rel="prev">"← Zurück"</a> });
    let next = has_next(current, total_pages)
        .then(|| view! { <a href=link(current + 1) class="pager__step" rel="next">"Weiter →"</a> });

    let numbers = items
        .into_iter()
        .map(|item| match item {
            PageItem::Page(page) if page == current => {
                view! { <span class="pager__page pager__page--current" aria-current="page">{page}</span> }.into_any()
            }
            PageItem::Page(page) => view! { <a href=link(page) class="pager__page">{page}</a> }.into_any(),
            PageItem::Ellipsis(side) => {
                let key = match side {
                    EllipsisSide::Start => "pager__gap pager__gap--start",
                    EllipsisSide::End => "pager__gap pager__gap--end",
                };
                view! { <span class=key>"…"</span> }.into_any()
            }
        })
        .collect_view();

    Some(view! {
        <nav class="pager" aria-label="Seitennavigation">
            {prev}
            {numbers}
            {next}
        </nav>
    })
}
