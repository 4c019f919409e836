//! JSON envelope shared by every `/api/*` endpoint.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::{Deserialize, Serialize};

use crate::validation::FieldErrors;

pub const MSG_VALIDATION: &str = "Validierungsfehler";
pub const MSG_INVALID_BODY: &str = "Ungültige Formulardaten";
pub const MSG_SERVER_ERROR: &str = "Ein serverseitiger Fehler ist aufgetreten";
pub const MSG_RATE_LIMITED: &str = "Zu viele Anfragen. Bitte versuchen Sie es später erneut.";
pub const MSG_UNAVAILABLE: &str = "Dieser Dienst ist vorübergehend nicht verfügbar.";
pub const MSG_NETWORK: &str = "Verbindung zum Server fehlgeschlagen. Bitte versuchen Sie es erneut.";

pub const MSG_CONTACT_SENT: &str = "Vielen Dank für Ihre Nachricht! Wir melden uns in Kürze bei Ihnen.";
pub const MSG_NEWSLETTER_SUBSCRIBED: &str = "Vielen Dank für Ihre Anmeldung zu unserem Newsletter!";
pub const MSG_NEWSLETTER_DUPLICATE: &str = "Sie sind bereits für unseren Newsletter angemeldet.";
pub const MSG_APPLICATION_SENT: &str = "Vielen Dank für Ihre Bewerbung! Wir melden uns schnellstmöglich bei Ihnen.";

/// `{ success, data | error, validationErrors? }`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_errors: Option<FieldErrors>,
}

impl<T> ApiResponse<T> {
    #[must_use]
    pub fn ok(data: T) -> Self {
        Self { success: true, data: Some(data), message: None, error: None, validation_errors: None }
    }

    #[must_use]
    pub fn failure(error: impl Into<String>) -> Self {
        Self { success: false, data: None, message: None, error: Some(error.into()), validation_errors: None }
    }

    #[must_use]
    pub fn invalid(errors: FieldErrors) -> Self {
        Self { validation_errors: Some(errors), ..Self::failure(MSG_VALIDATION) }
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Success payload, or the error text to show the visitor.
    ///
    /// # Errors
    ///
    /// Returns the server's error message (or a generic one) when the call
    /// did not succeed or carried no data.
    pub fn into_result(self) -> Result<T, String> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            _ => Err(self.error.unwrap_or_else(|| MSG_SERVER_ERROR.to_owned())),
        }
    }
}

/// Data returned by `POST /api/contact` and `POST /api/applications`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    pub reference: String,
}

/// Data returned by `POST /api/newsletter`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterReceipt {
    pub already_subscribed: bool,
}
