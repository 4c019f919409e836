//! Form payloads and their validation rules.
//!
//! DESIGN
//! ======
//! Each form has one payload struct that is used on both sides: the client
//! validates it before submitting and shows errors next to the offending
//! fields, the server validates it again before doing any I/O and answers
//! with the same `[{ field, message }]` list. Validation always collects
//! every failing field instead of stopping at the first one.
//!
//! Lengths are counted in characters after trimming surrounding whitespace.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

pub const MAX_RESUME_BYTES: u64 = 5_000_000;

pub const RESUME_CONTENT_TYPES: &[&str] = &[
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .unwrap_or_else(|e| panic!("email pattern must compile: {e}"))
});

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\+|00)?[0-9\s\-()]{8,20}$").unwrap_or_else(|e| panic!("phone pattern must compile: {e}"))
});

// =============================================================================
// ERRORS
// =============================================================================

/// A single rule violation, rendered as the user-facing message.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Mindestens {0} Zeichen erforderlich")]
    MinLength(usize),
    #[error("Maximal {0} Zeichen erlaubt")]
    MaxLength(usize),
    #[error("Bitte geben Sie eine gültige E-Mail-Adresse ein")]
    Email,
    #[error("Bitte geben Sie eine gültige Telefonnummer ein")]
    Phone,
    #[error("Sie müssen der Datenschutzerklärung zustimmen")]
    Privacy,
    #[error("Dieses Feld ist erforderlich")]
    Required,
    #[error("Die Datei darf maximal 5MB groß sein")]
    FileTooLarge,
    #[error("Bitte laden Sie ein PDF oder Word-Dokument hoch")]
    FileType,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Ordered list of field errors.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(transparent)]
#[error("validation failed for {} field(s)", .errors.len())]
pub struct FieldErrors {
    errors: Vec<FieldError>,
}

impl FieldErrors {
    pub fn push(&mut self, field: &str, error: FormError) {
        self.errors.push(FieldError { field: field.to_owned(), message: error.to_string() });
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// First message recorded for `field`.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// `Ok(())` when nothing was recorded.
    ///
    /// # Errors
    ///
    /// Returns `self` if at least one field failed.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

/// Implemented by every form payload.
pub trait Validate {
    /// # Errors
    ///
    /// Returns every failing field with its message.
    fn validate(&self) -> Result<(), FieldErrors>;
}

// =============================================================================
// PAYLOADS
// =============================================================================

/// Contact form (`/kontakt`, home CTA).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub subject: String,
    pub message: String,
    pub privacy: bool,
}

impl ContactRequest {
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_owned()
    }
}

impl Validate for ContactRequest {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        check_length(&mut errors, "firstName", &self.first_name, 2, Some(50));
        check_length(&mut errors, "lastName", &self.last_name, 2, Some(50));
        check_email(&mut errors, "email", &self.email);
        check_optional_phone(&mut errors, "phone", self.phone.as_deref());
        check_length(&mut errors, "subject", &self.subject, 1, Some(200));
        check_length(&mut errors, "message", &self.message, 10, Some(1000));
        check_privacy(&mut errors, self.privacy);
        errors.into_result()
    }
}

/// Newsletter sign-up (footer and blog sidebar).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewsletterSignup {
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub privacy: bool,
}

impl NewsletterSignup {
    #[must_use]
    pub fn display_name(&self) -> Option<String> {
        let first = self.first_name.as_deref().map(str::trim).filter(|s| !s.is_empty())?;
        let last = self.last_name.as_deref().map(str::trim).unwrap_or_default();
        Some(format!("{first} {last}").trim().to_owned())
    }
}

impl Validate for NewsletterSignup {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        check_email(&mut errors, "email", &self.email);
        check_privacy(&mut errors, self.privacy);
        errors.into_result()
    }
}

/// Metadata of the CV attached to a job application.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResumeInfo {
    pub file_name: String,
    pub size_bytes: u64,
    pub content_type: String,
}

/// Application form on `/karriere`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JobApplication {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub position: String,
    pub message: String,
    pub resume: Option<ResumeInfo>,
    pub privacy: bool,
}

impl JobApplication {
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_owned()
    }
}

impl Validate for JobApplication {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        check_length(&mut errors, "firstName", &self.first_name, 2, None);
        check_length(&mut errors, "lastName", &self.last_name, 2, None);
        check_email(&mut errors, "email", &self.email);
        check_optional_phone(&mut errors, "phone", self.phone.as_deref());
        check_length(&mut errors, "position", &self.position, 2, None);
        check_length(&mut errors, "message", &self.message, 10, None);
        match &self.resume {
            None => errors.push("resume", FormError::Required),
            Some(resume) => {
                if resume.size_bytes > MAX_RESUME_BYTES {
                    errors.push("resume", FormError::FileTooLarge);
                } else if !RESUME_CONTENT_TYPES.contains(&resume.content_type.as_str()) {
                    errors.push("resume", FormError::FileType);
                }
            }
        }
        check_privacy(&mut errors, self.privacy);
        errors.into_result()
    }
}

// =============================================================================
// RULES
// =============================================================================

#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    !email.starts_with('.') && !email.contains("..") && EMAIL_RE.is_match(email)
}

#[must_use]
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone.trim())
}

fn check_length(errors: &mut FieldErrors, field: &str, value: &str, min: usize, max: Option<usize>) {
    let len = value.trim().chars().count();
    if len == 0 && min == 1 {
        errors.push(field, FormError::Required);
    } else if len < min {
        errors.push(field, FormError::MinLength(min));
    } else if let Some(max) = max
        && len > max
    {
        errors.push(field, FormError::MaxLength(max));
    }
}

fn check_email(errors: &mut FieldErrors, field: &str, value: &str) {
    if !is_valid_email(value) {
        errors.push(field, FormError::Email);
    }
}

fn check_optional_phone(errors: &mut FieldErrors, field: &str, value: Option<&str>) {
    if let Some(phone) = value.map(str::trim).filter(|p| !p.is_empty())
        && !is_valid_phone(phone)
    {
        errors.push(field, FormError::Phone);
    }
}

fn check_privacy(errors: &mut FieldErrors, accepted: bool) {
    if !accepted {
        errors.push("privacy", FormError::Privacy);
    }
}
