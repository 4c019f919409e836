//! `/blog` listing.
//!
//! SYSTEM CONTEXT
//! ==============
//! The URL is the only source of truth for the filter: category, tag,
//! search and page are parsed from the query string into a `BlogQuery`,
//! and every change to it refetches the listing. Categories load once.
//! Both requests run in the browser only; SSR renders the spinner.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_meta::{Meta, Title};
use leptos_router::hooks::use_query_map;

use site::query::BlogQuery;

use crate::components::blog_filter::BlogFilter;
use crate::components::error_message::ErrorMessage;
use crate::components::loading_spinner::LoadingSpinner;
use crate::components::newsletter_form::NewsletterForm;
use crate::components::pager::Pager;
use crate::components::post_card::PostCard;
use crate::net::api;

const QUERY_KEYS: &[&str] = &["page", "limit", "category", "tag", "search", "author"];

#[component]
pub fn BlogPage() -> impl IntoView {
    let query_map = use_query_map();
    let query = Memo::new(move |_| {
        query_map.with(|map| BlogQuery::from_pairs(QUERY_KEYS.iter().filter_map(|&key| map.get_str(key).map(|v| (key, v)))))
    });

    let posts = LocalResource::new(move || api::fetch_posts(query.get()));
    let categories = LocalResource::new(api::fetch_categories);
    let category_list = Signal::derive(move || categories.get().unwrap_or_default());

    let heading = Memo::new(move |_| category_list.with(|cats| query.with(|q| q.heading(cats))));

    let listing = move || {
        posts.get().map(|result| match result {
            Err(message) => view! { <ErrorMessage message=message/> }.into_any(),
            Ok(page) if page.posts.is_empty() => {
                view! { <p class="blog__empty">{query.with(BlogQuery::empty_message)}</p> }.into_any()
            }
            Ok(page) => {
                let total_pages = page.pagination.total_pages;
                view! {
                    <div class="post-grid">
                        {page.posts.into_iter().map(|post| view! { <PostCard post=post/> }).collect_view()}
                    </div>
                    <Pager query=query.get() total_pages=total_pages/>
                }
                .into_any()
            }
        })
    };

    view! {
        <Title text=move || heading.with(|(title, _)| title.clone())/>
        <Meta name="description" content=move || heading.with(|(_, description)| description.clone())/>

        <section class="page-hero">
            <h1 class="page-hero__title">{move || heading.with(|(title, _)| title.clone())}</h1>
            <p class="page-hero__lead">{move || heading.with(|(_, description)| description.clone())}</p>
        </section>

        <section class="section blog">
            <BlogFilter query=query categories=category_list/>
            <div class="blog__layout">
                <div class="blog__list">
                    <Suspense fallback=|| view! { <LoadingSpinner/> }>{listing}</Suspense>
                </div>
                <aside class="blog__sidebar">
                    <h2 class="blog__sidebar-title">"Newsletter abonnieren"</h2>
                    <p>"Neue Beiträge direkt in Ihr Postfach."</p>
                    <NewsletterForm/>
                </aside>
            </div>
        </section>
    }
}
