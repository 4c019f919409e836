//! Blog listing query: URL filters in, PostgREST parameters out.
//!
//! SYSTEM CONTEXT
//! ==============
//! The blog page keeps its filters in the URL (`?page=2&category=bi`). The
//! client turns those into a `BlogQuery`, calls `/api/blog` with the same
//! pairs, and the server translates the query into the parameter list the
//! content backend understands. Both directions live here so the mapping is
//! tested in one place.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use serde::{Deserialize, Serialize};

use crate::blog::Category;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 10;
pub const MAX_LIMIT: u32 = 50;

pub const BLOG_TITLE: &str = "Blog";
pub const BLOG_DESCRIPTION: &str =
    "Neuigkeiten, Tipps und Einblicke aus der Welt der digitalen Geschäftsprozesse und Business Intelligence";

const POST_COLUMNS: &str = "id,title,slug,excerpt,content,featured_image,published_at,updated_at,tags,is_featured,meta_title,meta_description,category_id";
const AUTHOR_EMBED: &str = "author:authors(id,name,profile_image,position,bio)";
const CATEGORY_COLUMNS: &str = "(id,name,slug,description)";

/// Characters with syntactic meaning inside PostgREST filter values.
const RESERVED: &[char] = &[',', '(', ')', '*', ':', '"', '\\'];
/// Array literal delimiters, also stripped from values placed inside `cs.{}`.
const ARRAY_DELIMITERS: &[char] = &['{', '}'];

/// Filters and paging for the blog listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogQuery {
    pub page: u32,
    pub limit: u32,
    pub category: Option<String>,
    pub tag: Option<String>,
    pub search: Option<String>,
    pub author: Option<String>,
}

impl Default for BlogQuery {
    fn default() -> Self {
        Self { page: DEFAULT_PAGE, limit: DEFAULT_LIMIT, category: None, tag: None, search: None, author: None }
    }
}

/// Category filter, split by how the backend must match it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CategoryFilter<'a> {
    Id(i64),
    Slug(&'a str),
}

impl BlogQuery {
    /// Build a query from raw URL pairs; unknown keys are ignored and
    /// unparsable numbers fall back to defaults.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            match key {
                "page" => query.page = value.trim().parse().unwrap_or(DEFAULT_PAGE),
                "limit" => query.limit = value.trim().parse().unwrap_or(DEFAULT_LIMIT),
                "category" => query.category = Some(value.to_owned()),
                "tag" => query.tag = Some(value.to_owned()),
                "search" => query.search = Some(value.to_owned()),
                "author" => query.author = Some(value.to_owned()),
                _ => {}
            }
        }
        query.normalized()
    }

    /// Clamp paging and drop blank filters.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.page = self.page.max(1);
        self.limit = if self.limit == 0 { DEFAULT_LIMIT } else { self.limit.min(MAX_LIMIT) };
        self.category = non_blank(self.category);
        self.tag = non_blank(self.tag);
        self.search = non_blank(self.search);
        self.author = non_blank(self.author);
        self
    }

    #[must_use]
    pub fn offset(&self) -> u32 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }

    #[must_use]
    pub fn category_filter(&self) -> Option<CategoryFilter<'_>> {
        let raw = self.category.as_deref()?;
        Some(match raw.parse::<i64>() {
            Ok(id) => CategoryFilter::Id(id),
            Err(_) => CategoryFilter::Slug(raw),
        })
    }

    #[must_use]
    pub fn has_filters(&self) -> bool {
        self.category.is_some() || self.tag.is_some() || self.search.is_some() || self.author.is_some()
    }

    /// Parameters for `GET {supabase}/rest/v1/blog_posts`.
    #[must_use]
    pub fn to_postgrest_params(&self) -> Vec<(String, String)> {
        let category = self.category_filter();
        let category_embed = match category {
            Some(CategoryFilter::Slug(_)) => format!("categories!inner{CATEGORY_COLUMNS}"),
            _ => format!("categories{CATEGORY_COLUMNS}"),
        };

        let mut params = vec![
            ("select".to_owned(), format!("{POST_COLUMNS},{AUTHOR_EMBED},{category_embed}")),
            ("published".to_owned(), "eq.true".to_owned()),
            ("order".to_owned(), "published_at.desc".to_owned()),
            ("offset".to_owned(), self.offset().to_string()),
            ("limit".to_owned(), self.limit.to_string()),
        ];

        match category {
            Some(CategoryFilter::Id(id)) => params.push(("category_id".to_owned(), format!("eq.{id}"))),
            Some(CategoryFilter::Slug(slug)) => {
                params.push(("categories.slug".to_owned(), format!("eq.{}", sanitize_filter_value(slug))));
            }
            None => {}
        }
        if let Some(tag) = &self.tag {
            let tag = sanitize_array_element(tag);
            if !tag.is_empty() {
                params.push(("tags".to_owned(), format!("cs.{{{tag}}}")));
            }
        }
        if let Some(search) = &self.search {
            let term = sanitize_filter_value(search);
            if !term.is_empty() {
                params.push(("or".to_owned(), format!("(title.ilike.*{term}*,content.ilike.*{term}*)")));
            }
        }
        if let Some(author) = &self.author {
            params.push(("author_id".to_owned(), format!("eq.{}", sanitize_filter_value(author))));
        }
        params
    }

    /// Pairs for the site's own `/api/blog` endpoint and for page URLs.
    /// Defaults are omitted so URLs stay short.
    #[must_use]
    pub fn to_api_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if self.page != DEFAULT_PAGE {
            pairs.push(("page", self.page.to_string()));
        }
        if self.limit != DEFAULT_LIMIT {
            pairs.push(("limit", self.limit.to_string()));
        }
        if let Some(category) = &self.category {
            pairs.push(("category", category.clone()));
        }
        if let Some(tag) = &self.tag {
            pairs.push(("tag", tag.clone()));
        }
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        if let Some(author) = &self.author {
            pairs.push(("author", author.clone()));
        }
        pairs
    }

    #[must_use]
    pub fn with_page(&self, page: u32) -> Self {
        Self { page: page.max(1), ..self.clone() }
    }

    #[must_use]
    pub fn with_category(&self, category: Option<String>) -> Self {
        Self { page: DEFAULT_PAGE, category: non_blank(category), ..self.clone() }
    }

    #[must_use]
    pub fn with_tag(&self, tag: Option<String>) -> Self {
        Self { page: DEFAULT_PAGE, tag: non_blank(tag), ..self.clone() }
    }

    #[must_use]
    pub fn with_search(&self, search: Option<String>) -> Self {
        Self { page: DEFAULT_PAGE, search: non_blank(search), ..self.clone() }
    }

    /// Page title and description for the active filter, in priority order
    /// category, tag, search.
    #[must_use]
    pub fn heading(&self, categories: &[Category]) -> (String, String) {
        if let Some(slug) = &self.category {
            if let Some(name) = categories.iter().find(|c| &c.slug == slug).map(|c| c.name.as_str()) {
                return (format!("Blog: {name}"), format!("Artikel zum Thema {name}: {BLOG_DESCRIPTION}"));
            }
        } else if let Some(tag) = &self.tag {
            return (format!("Blog: {tag}"), format!("Artikel mit dem Tag \"{tag}\": {BLOG_DESCRIPTION}"));
        } else if let Some(search) = &self.search {
            return (
                format!("Suchergebnisse für \"{search}\""),
                format!("Gefundene Artikel für die Suche \"{search}\""),
            );
        }
        (BLOG_TITLE.to_owned(), BLOG_DESCRIPTION.to_owned())
    }

    #[must_use]
    pub fn empty_message(&self) -> String {
        if let Some(search) = &self.search {
            format!("Keine Ergebnisse für \"{search}\" gefunden.")
        } else if let Some(category) = &self.category {
            format!("Keine Artikel in der Kategorie \"{category}\" gefunden.")
        } else if let Some(tag) = &self.tag {
            format!("Keine Artikel mit dem Tag \"{tag}\" gefunden.")
        } else {
            "Keine Blog-Beiträge gefunden.".to_owned()
        }
    }
}

/// Parameters for a single published post by slug.
#[must_use]
pub fn post_by_slug_params(slug: &str) -> Vec<(String, String)> {
    vec![
        ("select".to_owned(), format!("{POST_COLUMNS},{AUTHOR_EMBED},categories{CATEGORY_COLUMNS}")),
        ("slug".to_owned(), format!("eq.{}", sanitize_filter_value(slug))),
        ("published".to_owned(), "eq.true".to_owned()),
        ("limit".to_owned(), "1".to_owned()),
    ]
}

/// Parameters for the newest posts of a category, excluding one post.
#[must_use]
pub fn related_posts_params(category_id: i64, exclude_id: i64, limit: u32) -> Vec<(String, String)> {
    vec![
        ("select".to_owned(), format!("{POST_COLUMNS},{AUTHOR_EMBED},categories{CATEGORY_COLUMNS}")),
        ("category_id".to_owned(), format!("eq.{category_id}")),
        ("id".to_owned(), format!("neq.{exclude_id}")),
        ("published".to_owned(), "eq.true".to_owned()),
        ("order".to_owned(), "published_at.desc".to_owned()),
        ("limit".to_owned(), limit.to_string()),
    ]
}

/// Parameters for all categories, alphabetically.
#[must_use]
pub fn categories_params() -> Vec<(String, String)> {
    vec![
        ("select".to_owned(), "id,name,slug,description".to_owned()),
        ("order".to_owned(), "name.asc".to_owned()),
    ]
}

/// Parameters for the slugs and dates listed in the sitemap.
#[must_use]
pub fn sitemap_params() -> Vec<(String, String)> {
    vec![
        ("select".to_owned(), "slug,updated_at,published_at".to_owned()),
        ("published".to_owned(), "eq.true".to_owned()),
        ("order".to_owned(), "published_at.desc".to_owned()),
    ]
}

/// Remove characters that would change the meaning of a PostgREST filter.
#[must_use]
pub fn sanitize_filter_value(raw: &str) -> String {
    raw.chars()
        .filter(|c| !RESERVED.contains(c))
        .collect::<String>()
        .trim()
        .to_owned()
}

/// Percent-encode a URL component (RFC 3986 unreserved set kept).
#[must_use]
pub fn encode_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => out.push(char::from(byte)),
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

/// In-site path of a post page, slug encoded.
#[must_use]
pub fn post_path(slug: &str) -> String {
    format!("/blog/{}", encode_component(slug))
}

/// Sanitize a value for use as an element of a PostgREST array literal.
#[must_use]
pub fn sanitize_array_element(raw: &str) -> String {
    sanitize_filter_value(raw)
        .chars()
        .filter(|c| !ARRAY_DELIMITERS.contains(c))
        .collect::<String>()
        .trim()
        .to_owned()
}

/// Parameters for looking up a newsletter subscriber by address.
#[must_use]
pub fn subscriber_by_email_params(email: &str) -> Vec<(String, String)> {
    vec![
        ("select".to_owned(), "id".to_owned()),
        ("email".to_owned(), format!("eq.{}", sanitize_filter_value(&email.trim().to_lowercase()))),
        ("limit".to_owned(), "1".to_owned()),
    ]
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}
