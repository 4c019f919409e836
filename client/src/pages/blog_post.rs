//! `/blog/:slug` article page with related posts.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_meta::{Meta, Title};
use leptos_router::hooks::use_params_map;

use site::blog::PostDetail;

use crate::components::error_message::ErrorMessage;
use crate::components::loading_spinner::LoadingSpinner;
use crate::components::post_card::PostCard;
use crate::components::section_title::SectionTitle;
use crate::net::{api, url};
use crate::pages::not_found::NotFoundPage;
use crate::util::content::render_markdown;

#[component]
pub fn BlogPostPage() -> impl IntoView {
    let params = use_params_map();
    let slug = Memo::new(move |_| params.with(|p| p.get_str("slug").unwrap_or_default().to_owned()));

    let post = LocalResource::new(move || api::fetch_post(slug.get()));
    let related = LocalResource::new(move || api::fetch_related(slug.get()));

    let body = move || {
        post.get().map(|result| match result {
            Err(message) => view! {
                <section class="section"><ErrorMessage message=message/></section>
                <p class="section"><a href="/blog">"← Zurück zum Blog"</a></p>
            }
            .into_any(),
            Ok(None) => view! { <NotFoundPage/> }.into_any(),
            Ok(Some(detail)) => view! { <Article detail=detail/> }.into_any(),
        })
    };

    let related_posts = move || {
        related.get().filter(|posts| !posts.is_empty()).map(|posts| {
            view! {
                <section class="section section--muted">
                    <SectionTitle title="Das könnte Sie auch interessieren"/>
                    <div class="post-grid">
                        {posts.into_iter().map(|post| view! { <PostCard post=post/> }).collect_view()}
                    </div>
                </section>
            }
        })
    };

    view! {
        <Suspense fallback=|| view! { <LoadingSpinner/> }>
            {body}
            {related_posts}
        </Suspense>
    }
}

#[component]
fn Article(detail: PostDetail) -> impl IntoView {
    let card = detail.card;
    let html = render_markdown(&detail.content);
    let category = card.category_slug.clone().zip(card.category_name.clone());

    view! {
        <Title text=detail.meta_title/>
        <Meta name="description" content=detail.meta_description/>

        <article class="post">
            <header class="post__header">
                <p class="post__breadcrumbs">
                    <a href="/blog">"Blog"</a>
                    {category.map(|(slug, name)| {
                        view! {
                            " / "
                            <a href=url::blog_page_path(&site::query::BlogQuery::default().with_category(Some(slug)))>{name}</a>
                        }
                    })}
                </p>
                <h1 class="post__title">{card.title.clone()}</h1>
                <div class="post__meta">
                    {card.author_name.clone().map(|name| view! { <span class="post__author">{name}</span> })}
                    {card.published_label.clone().map(|date| view! { <time>{date}</time> })}
                    <span>{format!("{} Min. Lesezeit", card.reading_time)}</span>
                </div>
                {card.featured_image.clone().map(|src| {
                    view! { <img src=src alt=card.title.clone() class="post__image"/> }
                })}
            </header>

            <div class="post__content" inner_html=html></div>

            {(!detail.tags.is_empty()).then(|| {
                view! {
                    <ul class="post__tags">
                        {detail
                            .tags
                            .iter()
                            .map(|tag| {
                                let href = url::blog_page_path(&site::query::BlogQuery::default().with_tag(Some(tag.clone())));
                                view! { <li><a href=href class="post__tag">{format!("#{tag}")}</a></li> }
                            })
                            .collect_view()}
                    </ul>
                }
            })}

            {card.author_name.clone().map(|name| {
                view! {
                    <aside class="post__author-box">
                        {card.author_image.clone().map(|src| view! { <img src=src alt=name.clone() class="post__author-image"/> })}
                        <div>
                            <p class="post__author-name">{name.clone()}</p>
                            {detail.author_position.clone().map(|p| view! { <p class="post__author-position">{p}</p> })}
                            {detail.author_bio.clone().map(|b| view! { <p class="post__author-bio">{b}</p> })}
                        </div>
                    </aside>
                }
            })}
        </article>
    }
}
