//! Blog records as stored in the content backend and their display shapes.
//!
//! DESIGN
//! ======
//! `PostRow` mirrors a `blog_posts` row with its embedded `author` and
//! `categories` relations exactly as PostgREST returns them. Pages never
//! render rows directly; they receive `PostCard` / `PostDetail` values
//! produced by the mapping helpers here, so the server and the client agree
//! on date labels, excerpts and reading times.

#[cfg(test)]
#[path = "blog_test.rs"]
mod blog_test;

use serde::{Deserialize, Serialize};

/// Words per minute used for the reading-time estimate.
pub const WORDS_PER_MINUTE: usize = 200;

/// Maximum excerpt length (characters) when a post has no explicit excerpt.
pub const EXCERPT_CHARS: usize = 160;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// A `blog_posts` row with embedded relations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PostRow {
    pub id: i64,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub featured_image: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub meta_title: Option<String>,
    #[serde(default)]
    pub meta_description: Option<String>,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub author: Option<Author>,
    #[serde(default)]
    pub categories: Option<Category>,
}

/// Display-ready list item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PostCard {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub featured_image: Option<String>,
    pub published_at: Option<String>,
    pub published_label: Option<String>,
    pub author_name: Option<String>,
    pub author_image: Option<String>,
    pub category_name: Option<String>,
    pub category_slug: Option<String>,
    pub reading_time: usize,
    pub is_featured: bool,
}

/// Full article view.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PostDetail {
    pub card: PostCard,
    pub content: String,
    pub tags: Vec<String>,
    pub category_id: Option<i64>,
    pub author_position: Option<String>,
    pub author_bio: Option<String>,
    pub meta_title: String,
    pub meta_description: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u32,
}

impl PageInfo {
    #[must_use]
    pub fn new(page: u32, limit: u32, total: u64) -> Self {
        Self { page, limit, total, total_pages: total_pages(total, limit) }
    }
}

/// One page of the blog listing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PostPage {
    pub posts: Vec<PostCard>,
    pub pagination: PageInfo,
}

impl PostRow {
    #[must_use]
    pub fn into_card(self) -> PostCard {
        self.card()
    }

    #[must_use]
    pub fn into_detail(self) -> PostDetail {
        let card = self.card();
        let meta_title = self
            .meta_title
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| self.title.clone());
        let meta_description = self
            .meta_description
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| card.excerpt.clone());
        let (author_position, author_bio) = self
            .author
            .map(|a| (a.position, a.bio))
            .unwrap_or_default();
        PostDetail {
            card,
            content: self.content,
            tags: self.tags.unwrap_or_default(),
            category_id: self.category_id,
            author_position,
            author_bio,
            meta_title,
            meta_description,
        }
    }

    fn card(&self) -> PostCard {
        let excerpt = match self.excerpt.as_deref().map(str::trim) {
            Some(text) if !text.is_empty() => text.to_owned(),
            _ => excerpt_from_content(&self.content, EXCERPT_CHARS),
        };
        PostCard {
            id: self.id,
            title: self.title.clone(),
            slug: self.slug.clone(),
            excerpt,
            featured_image: self.featured_image.clone(),
            published_at: self.published_at.clone(),
            published_label: self.published_at.as_deref().map(format_date_de),
            author_name: self.author.as_ref().map(|a| a.name.clone()),
            author_image: self.author.as_ref().and_then(|a| a.profile_image.clone()),
            category_name: self.categories.as_ref().map(|c| c.name.clone()),
            category_slug: self.categories.as_ref().map(|c| c.slug.clone()),
            reading_time: reading_time_minutes(&self.content),
            is_featured: self.is_featured,
        }
    }
}

/// Estimated reading time in whole minutes, never below one.
#[must_use]
pub fn reading_time_minutes(content: &str) -> usize {
    let words = strip_markup(content).split_whitespace().count();
    words.div_ceil(WORDS_PER_MINUTE).max(1)
}

/// Format an ISO-8601 timestamp as a German calendar date (`DD.MM.YYYY`).
///
/// Input that does not start with `YYYY-MM-DD` is returned unchanged.
#[must_use]
pub fn format_date_de(iso: &str) -> String {
    let date = iso.get(..10).unwrap_or(iso);
    let mut parts = date.split('-');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(y), Some(m), Some(d))
            if y.len() == 4
                && m.len() == 2
                && d.len() == 2
                && [y, m, d].iter().all(|p| p.chars().all(|c| c.is_ascii_digit())) =>
        {
            format!("{d}.{m}.{y}")
        }
        _ => iso.to_owned(),
    }
}

/// Number of pages needed for `total` items at `limit` per page.
#[must_use]
pub fn total_pages(total: u64, limit: u32) -> u32 {
    if total == 0 || limit == 0 {
        return 0;
    }
    u32::try_from(total.div_ceil(u64::from(limit))).unwrap_or(u32::MAX)
}

/// Plain-text excerpt of at most `max_chars` characters, cut on a word
/// boundary and suffixed with an ellipsis when shortened.
#[must_use]
pub fn excerpt_from_content(content: &str, max_chars: usize) -> String {
    let plain = strip_markup(content);
    let collapsed = plain.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= max_chars {
        return collapsed;
    }
    let cut: String = collapsed.chars().take(max_chars).collect();
    let trimmed = match cut.rfind(' ') {
        Some(idx) if idx > 0 => &cut[..idx],
        _ => cut.as_str(),
    };
    format!("{}…", trimmed.trim_end_matches(|c: char| c.is_ascii_punctuation()))
}

/// Drop HTML tags and the most common Markdown markers.
fn strip_markup(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut in_tag = false;
    for ch in content.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => {
                in_tag = false;
                out.push(' ');
            }
            _ if in_tag => {}
            '#' | '*' | '_' | '`' | '>' => {}
            _ => out.push(ch),
        }
    }
    out
}
