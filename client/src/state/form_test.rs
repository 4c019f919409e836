use super::*;
use site::validation::FormError;

fn invalid_email() -> FieldErrors {
    let mut errors = FieldErrors::default();
    errors.push("email", FormError::Email);
    errors
}

#[test]
fn valid_input_starts_submitting() {
    let mut form = FormState::default();
    assert!(form.begin_submit(Ok(())));
    assert!(form.is_submitting());
}

#[test]
fn second_submit_is_refused_while_in_flight() {
    let mut form = FormState::default();
    assert!(form.begin_submit(Ok(())));
    assert!(!form.begin_submit(Ok(())));
    assert!(form.is_submitting());
}

#[test]
fn local_errors_block_the_request() {
    let mut form = FormState::default();
    assert!(!form.begin_submit(Err(invalid_email())));
    assert_eq!(form.status, FormStatus::Idle);
    assert!(form.field_error("email").is_some());
    assert_eq!(form.field_error("message"), None);
}

#[test]
fn success_clears_errors_and_keeps_server_message() {
    let mut form = FormState { errors: invalid_email(), ..FormState::default() };
    form.status = FormStatus::Submitting;
    let ok = form.finish(Ok(Submitted { data: (), message: Some("Vielen Dank".into()) }), "Gesendet");
    assert!(ok);
    assert_eq!(form.status, FormStatus::Succeeded("Vielen Dank".into()));
    assert!(form.errors.is_empty());
}

#[test]
fn success_without_message_uses_fallback() {
    let mut form = FormState::default();
    form.finish(Ok(Submitted { data: (), message: None }), "Gesendet");
    assert_eq!(form.status, FormStatus::Succeeded("Gesendet".into()));
}

#[test]
fn server_field_errors_return_to_idle() {
    let mut form = FormState::default();
    form.begin_submit(Ok(()));
    let ok = form.finish::<()>(Err(SubmitError::Invalid(invalid_email())), "Gesendet");
    assert!(!ok);
    assert_eq!(form.status, FormStatus::Idle);
    assert_eq!(form.field_error("email").as_deref(), Some("Bitte geben Sie eine gültige E-Mail-Adresse ein"));
}

#[test]
fn failure_is_shown_and_allows_retry() {
    let mut form = FormState::default();
    form.begin_submit(Ok(()));
    form.finish::<()>(Err(SubmitError::Failed("Zu viele Anfragen".into())), "Gesendet");
    assert_eq!(form.status, FormStatus::Failed("Zu viele Anfragen".into()));
    assert!(form.begin_submit(Ok(())));
}

#[test]
fn blank_optional_inputs_become_none() {
    assert_eq!(optional("   "), None);
    assert_eq!(optional(" ACME GmbH "), Some("ACME GmbH".to_owned()));
}
