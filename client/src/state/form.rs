#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use site::validation::FieldErrors;

use crate::net::api::{SubmitError, Submitted};

/// Where a form is in its submit cycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded(String),
    Failed(String),
}

/// Status plus the field errors currently shown next to inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub status: FormStatus,
    pub errors: FieldErrors,
}

impl FormState {
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.status == FormStatus::Submitting
    }

    /// Apply local validation and move to `Submitting`.
    ///
    /// Returns `false` (nothing should be sent) while a submit is already
    /// in flight or when validation failed; in the latter case the errors
    /// are kept for display.
    pub fn begin_submit(&mut self, validation: Result<(), FieldErrors>) -> bool {
        if self.is_submitting() {
            return false;
        }
        match validation {
            Ok(()) => {
                self.errors = FieldErrors::default();
                self.status = FormStatus::Submitting;
                true
            }
            Err(errors) => {
                self.errors = errors;
                self.status = FormStatus::Idle;
                false
            }
        }
    }

    /// Record the server's answer. Returns `true` on success so the caller
    /// can clear its inputs and fire the analytics event.
    pub fn finish<T>(&mut self, outcome: Result<Submitted<T>, SubmitError>, fallback_message: &str) -> bool {
        match outcome {
            Ok(submitted) => {
                self.errors = FieldErrors::default();
                self.status = FormStatus::Succeeded(submitted.message.unwrap_or_else(|| fallback_message.to_owned()));
                true
            }
            Err(SubmitError::Invalid(errors)) => {
                self.errors = errors;
                self.status = FormStatus::Idle;
                false
            }
            Err(SubmitError::Failed(message)) => {
                self.status = FormStatus::Failed(message);
                false
            }
        }
    }

    #[must_use]
    pub fn field_error(&self, field: &str) -> Option<String> {
        self.errors.get(field).map(str::to_owned)
    }
}

/// Trimmed value of an optional input, `None` when left blank.
#[must_use]
pub fn optional(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
