//! In-memory doubles for route tests.

use std::sync::Mutex;

use async_trait::async_trait;

use site::blog::{Author, Category, PostCard, PostDetail, PostPage, PostRow};
use site::query::{BlogQuery, CategoryFilter};
use site::validation::NewsletterSignup;

use super::content::{ContactRecord, ContentError, ContentStore, SitemapPost, SubscriberRecord, build_post_page};
use super::mailer::{MailError, Mailer, OutgoingMail};
use super::newsletter::{NewsletterError, NewsletterList};

// =============================================================================
// CONTENT
// =============================================================================

#[derive(Default)]
pub struct MemoryContent {
    pub posts: Vec<PostRow>,
    pub categories: Vec<Category>,
    pub contacts: Mutex<Vec<ContactRecord>>,
    pub subscribers: Mutex<Vec<SubscriberRecord>>,
    pub fail: bool,
}

impl MemoryContent {
    pub fn with_posts(posts: Vec<PostRow>, categories: Vec<Category>) -> Self {
        Self { posts, categories, ..Self::default() }
    }

    pub fn failing() -> Self {
        Self { fail: true, ..Self::default() }
    }

    pub fn saved_contacts(&self) -> Vec<ContactRecord> {
        self.contacts
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    pub fn with_subscriber(email: &str) -> Self {
        let record = SubscriberRecord {
            email: email.to_owned(),
            first_name: None,
            last_name: None,
            subscribed_at: None,
            active: true,
        };
        Self { subscribers: Mutex::new(vec![record]), ..Self::default() }
    }

    pub fn saved_subscribers(&self) -> Vec<SubscriberRecord> {
        self.subscribers
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    fn check(&self) -> Result<(), ContentError> {
        if self.fail {
            return Err(ContentError::Status { status: 500, body: "boom".into() });
        }
        Ok(())
    }

    fn matches(query: &BlogQuery, post: &PostRow) -> bool {
        let category_ok = match query.category_filter() {
            None => true,
            Some(CategoryFilter::Id(id)) => post.category_id == Some(id),
            Some(CategoryFilter::Slug(slug)) => post.categories.as_ref().is_some_and(|c| c.slug == slug),
        };
        let tag_ok = query
            .tag
            .as_deref()
            .is_none_or(|tag| post.tags.as_ref().is_some_and(|tags| tags.iter().any(|t| t == tag)));
        let search_ok = query.search.as_deref().is_none_or(|term| {
            let term = term.to_lowercase();
            post.title.to_lowercase().contains(&term)
                || post.excerpt.as_deref().unwrap_or_default().to_lowercase().contains(&term)
                || post.content.to_lowercase().contains(&term)
        });
        let author_ok = query
            .author
            .as_deref()
            .is_none_or(|id| post.author.as_ref().and_then(|a| a.id.as_deref()) == Some(id));
        post.published_at.is_some() && category_ok && tag_ok && search_ok && author_ok
    }
}

#[async_trait]
impl ContentStore for MemoryContent {
    async fn list_posts(&self, query: &BlogQuery) -> Result<PostPage, ContentError> {
        self.check()?;
        let query = query.clone().normalized();
        let mut matching: Vec<&PostRow> = self.posts.iter().filter(|p| Self::matches(&query, p)).collect();
        matching.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        let total = matching.len() as u64;
        let rows = matching
            .into_iter()
            .skip(query.offset() as usize)
            .take(query.limit as usize)
            .cloned()
            .collect();
        Ok(build_post_page(&query, rows, Some(total)))
    }

    async fn get_post(&self, slug: &str) -> Result<Option<PostDetail>, ContentError> {
        self.check()?;
        Ok(self
            .posts
            .iter()
            .find(|p| p.slug == slug && p.published_at.is_some())
            .cloned()
            .map(PostRow::into_detail))
    }

    async fn related_posts(&self, category_id: i64, exclude_id: i64) -> Result<Vec<PostCard>, ContentError> {
        self.check()?;
        Ok(self
            .posts
            .iter()
            .filter(|p| p.category_id == Some(category_id) && p.id != exclude_id && p.published_at.is_some())
            .take(super::content::RELATED_LIMIT as usize)
            .cloned()
            .map(PostRow::into_card)
            .collect())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, ContentError> {
        self.check()?;
        Ok(self.categories.clone())
    }

    async fn sitemap_posts(&self) -> Result<Vec<SitemapPost>, ContentError> {
        self.check()?;
        Ok(self
            .posts
            .iter()
            .filter(|p| p.published_at.is_some())
            .map(|p| SitemapPost {
                slug: p.slug.clone(),
                updated_at: p.updated_at.clone(),
                published_at: p.published_at.clone(),
            })
            .collect())
    }

    async fn insert_contact_request(&self, record: &ContactRecord) -> Result<(), ContentError> {
        self.check()?;
        self.contacts
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(record.clone());
        Ok(())
    }

    async fn is_newsletter_subscriber(&self, email: &str) -> Result<bool, ContentError> {
        self.check()?;
        let email = email.trim().to_lowercase();
        Ok(self.saved_subscribers().iter().any(|s| s.email == email))
    }

    async fn insert_newsletter_subscriber(&self, record: &SubscriberRecord) -> Result<(), ContentError> {
        self.check()?;
        self.subscribers
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(record.clone());
        Ok(())
    }
}

// =============================================================================
// MAIL
// =============================================================================

#[derive(Default)]
pub struct MemoryMailer {
    pub sent: Mutex<Vec<OutgoingMail>>,
    /// Recipients whose delivery fails.
    pub reject: Vec<String>,
}

impl MemoryMailer {
    pub fn rejecting(recipient: &str) -> Self {
        Self { reject: vec![recipient.to_owned()], ..Self::default() }
    }

    pub fn sent(&self) -> Vec<OutgoingMail> {
        self.sent
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl Mailer for MemoryMailer {
    async fn send(&self, mail: OutgoingMail) -> Result<(), MailError> {
        if self.reject.contains(&mail.to) {
            return Err(MailError::Delivery(format!("rejected {}", mail.to)));
        }
        self.sent
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(mail);
        Ok(())
    }
}

// =============================================================================
// NEWSLETTER
// =============================================================================

#[derive(Default)]
pub struct MemoryNewsletter {
    pub subscribers: Mutex<Vec<String>>,
    pub fail: bool,
}

impl MemoryNewsletter {
    pub fn failing() -> Self {
        Self { fail: true, ..Self::default() }
    }

    pub fn subscribers(&self) -> Vec<String> {
        self.subscribers
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl NewsletterList for MemoryNewsletter {
    async fn subscribe(&self, signup: &NewsletterSignup) -> Result<(), NewsletterError> {
        if self.fail {
            return Err(NewsletterError::Status { status: 401, message: "Key not found".into() });
        }
        let email = signup.email.trim().to_lowercase();
        let mut subscribers = self
            .subscribers
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        // Brevo updates known contacts in place; the list holds each address once.
        if !subscribers.contains(&email) {
            subscribers.push(email);
        }
        Ok(())
    }
}

// =============================================================================
// FIXTURES
// =============================================================================

pub fn category(id: i64, name: &str, slug: &str) -> Category {
    Category { id, name: name.into(), slug: slug.into(), description: None }
}

pub fn post(id: i64, slug: &str, category: &Category, published_at: &str) -> PostRow {
    PostRow {
        id,
        title: format!("Beitrag {id}"),
        slug: slug.into(),
        excerpt: None,
        content: format!("Inhalt von Beitrag {id} über Daten und Analysen."),
        featured_image: None,
        published_at: Some(published_at.into()),
        updated_at: None,
        tags: Some(vec!["daten".into()]),
        is_featured: false,
        meta_title: None,
        meta_description: None,
        category_id: Some(category.id),
        author: Some(Author {
            id: Some("a-1".into()),
            name: "Julia Weber".into(),
            profile_image: None,
            position: Some("Beraterin".into()),
            bio: None,
        }),
        categories: Some(category.clone()),
    }
}
