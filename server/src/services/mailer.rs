//! Transactional mail for form submissions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Contact requests and job applications are forwarded to the company
//! inboxes through Resend. Contact senders also get a confirmation copy.
//! Newsletter subscribers get a welcome mail. Templates are compiled into
//! the binary and filled in a single pass over their `{{KEY}}` placeholders,
//! so a value that itself contains a placeholder is inserted verbatim. Every
//! user supplied value is HTML-escaped first.

use async_trait::async_trait;
use resend_rs::Resend;
use resend_rs::types::CreateEmailBaseOptions;

use site::validation::{ContactRequest, JobApplication, NewsletterSignup};

use crate::config::MailConfig;

const CONTACT_NOTIFICATION: &str = include_str!("../../templates/contact_notification.html");
const CONTACT_CONFIRMATION: &str = include_str!("../../templates/contact_confirmation.html");
const APPLICATION_NOTIFICATION: &str = include_str!("../../templates/application_notification.html");
const NEWSLETTER_CONFIRMATION: &str = include_str!("../../templates/newsletter_confirmation.html");

const NOT_PROVIDED: &str = "Nicht angegeben";
const NEWSLETTER_GREETING: &str = "liebe Leserin, lieber Leser";

#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("email delivery failed: {0}")]
    Delivery(String),
}

/// A rendered message ready for delivery.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutgoingMail {
    pub to: String,
    pub subject: String,
    pub html: String,
    pub reply_to: Option<String>,
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, mail: OutgoingMail) -> Result<(), MailError>;
}

// =============================================================================
// RESEND
// =============================================================================

pub struct ResendMailer {
    resend: Resend,
    from: String,
}

impl ResendMailer {
    #[must_use]
    pub fn new(config: &MailConfig) -> Self {
        Self { resend: Resend::new(&config.api_key), from: config.from.clone() }
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, mail: OutgoingMail) -> Result<(), MailError> {
        let mut email = CreateEmailBaseOptions::new(&self.from, [mail.to.as_str()], &mail.subject).with_html(&mail.html);
        if let Some(reply_to) = mail.reply_to.as_deref() {
            email = email.with_reply(reply_to);
        }

        self.resend
            .emails
            .send(email)
            .await
            .map_err(|e| MailError::Delivery(e.to_string()))?;
        Ok(())
    }
}

// =============================================================================
// MESSAGES
// =============================================================================

/// Notification to the company inbox about a new contact request.
#[must_use]
pub fn contact_notification(inbox: &str, request: &ContactRequest, reference: &str) -> OutgoingMail {
    let html = fill(
        CONTACT_NOTIFICATION,
        &[
            ("REFERENCE", escape_html(reference)),
            ("NAME", escape_html(&request.display_name())),
            ("EMAIL", escape_html(request.email.trim())),
            ("PHONE", optional(request.phone.as_deref())),
            ("COMPANY", optional(request.company.as_deref())),
            ("SUBJECT", escape_html(request.subject.trim())),
            ("MESSAGE", paragraphs(request.message.trim())),
        ],
    );

    OutgoingMail {
        to: inbox.to_owned(),
        subject: format!("Neue Kontaktanfrage: {}", request.subject.trim()),
        html,
        reply_to: Some(request.email.trim().to_owned()),
    }
}

/// Confirmation copy sent back to the person who filled in the form.
#[must_use]
pub fn contact_confirmation(request: &ContactRequest, reference: &str) -> OutgoingMail {
    let html = fill(
        CONTACT_CONFIRMATION,
        &[
            ("NAME", escape_html(request.first_name.trim())),
            ("SUBJECT", escape_html(request.subject.trim())),
            ("REFERENCE", escape_html(reference)),
        ],
    );

    OutgoingMail {
        to: request.email.trim().to_owned(),
        subject: "Ihre Anfrage bei Ritter Digital".to_owned(),
        html,
        reply_to: None,
    }
}

/// Notification to the careers inbox about a new application.
#[must_use]
pub fn application_notification(inbox: &str, application: &JobApplication, reference: &str) -> OutgoingMail {
    let resume = application
        .resume
        .as_ref()
        .map_or_else(|| NOT_PROVIDED.to_owned(), |r| escape_html(&r.file_name));

    let html = fill(
        APPLICATION_NOTIFICATION,
        &[
            ("POSITION", escape_html(application.position.trim())),
            ("REFERENCE", escape_html(reference)),
            ("NAME", escape_html(&application.display_name())),
            ("EMAIL", escape_html(application.email.trim())),
            ("PHONE", optional(application.phone.as_deref())),
            ("RESUME", resume),
            ("MESSAGE", paragraphs(application.message.trim())),
        ],
    );

    OutgoingMail {
        to: inbox.to_owned(),
        subject: format!("Neue Bewerbung: {} ({})", application.position.trim(), application.display_name()),
        html,
        reply_to: Some(application.email.trim().to_owned()),
    }
}

/// Welcome mail for a new newsletter subscriber.
#[must_use]
pub fn newsletter_confirmation(signup: &NewsletterSignup) -> OutgoingMail {
    let name = signup
        .first_name
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(NEWSLETTER_GREETING);
    let html = fill(
        NEWSLETTER_CONFIRMATION,
        &[("NAME", escape_html(name)), ("EMAIL", escape_html(signup.email.trim()))],
    );

    OutgoingMail {
        to: signup.email.trim().to_owned(),
        subject: "Ihre Anmeldung zum Ritter Digital Newsletter".to_owned(),
        html,
        reply_to: None,
    }
}

// =============================================================================
// HELPERS
// =============================================================================

/// Replace every `{{KEY}}` in `template` with its value in one pass.
///
/// Inserted values are never scanned again. Unknown or unterminated
/// placeholders are kept as written.
#[must_use]
pub fn fill(template: &str, values: &[(&str, String)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };
        let key = &after[..end];
        match values.iter().find(|(k, _)| *k == key) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after[end + 2..];
    }
    out.push_str(rest);
    out
}

#[must_use]
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escaped text with line breaks kept.
fn paragraphs(value: &str) -> String {
    escape_html(value).replace("\r\n", "\n").replace('\n', "<br>")
}

fn optional(value: Option<&str>) -> String {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => escape_html(v),
        None => NOT_PROVIDED.to_owned(),
    }
}

#[cfg(test)]
#[path = "mailer_test.rs"]
mod tests;
