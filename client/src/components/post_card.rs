//! Teaser card for one blog post.

use leptos::prelude::*;

use site::blog::PostCard as PostSummary;

use crate::net::url;

#[component]
pub fn PostCard(post: PostSummary) -> impl IntoView {
    let href = url::post_page_path(&post.slug);
    let category = post.category_slug.clone().zip(post.category_name.clone());
    let class = if post.is_featured { "post-card post-card--featured" } else { "post-card" };

    view! {
        <article class=class>
            {post.featured_image.clone().map(|src| {
                view! {
                    <a href=href.clone() class="post-card__image">
                        <img src=src alt=post.title.clone() loading="lazy"/>
                    </a>
                }
            })}
            <div class="post-card__body">
                {category.map(|(slug, name)| {
                    view! {
                        <a href=format!("/blog?category={}", url::encode_component(&slug)) class="post-card__category">
                            {name}
                        </a>
                    }
                })}
                <h3 class="post-card__title">
                    <a href=href.clone()>{post.title.clone()}</a>
                </h3>
                <p class="post-card__excerpt">{post.excerpt.clone()}</p>
                <div class="post-card__meta">
                    {post.author_name.clone().map(|name| view! { <span class="post-card__author">{name}</span> })}
                    {post.published_label.clone().map(|date| view! { <time class="post-card__date">{date}</time> })}
                    <span class="post-card__reading">{format!("{} Min. Lesezeit", post.reading_time)}</span>
                </div>
                <a href=href class="post-card__more">"Weiterlesen →"</a>
            </div>
        </article>
    }
}
