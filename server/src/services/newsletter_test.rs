use super::*;

fn signup() -> NewsletterSignup {
    NewsletterSignup {
        email: " Anna@Example.de ".into(),
        first_name: Some("Anna".into()),
        last_name: Some("  ".into()),
        privacy: true,
    }
}

#[test]
fn create_contact_body_matches_brevo_shape() {
    let body = serde_json::to_value(CreateContact::from_signup(&signup(), 7)).unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "email": "anna@example.de",
            "attributes": { "FIRSTNAME": "Anna", "SOURCE": "Website" },
            "listIds": [7],
            "updateEnabled": true
        })
    );
}

#[test]
fn new_contact_is_created_on_list() {
    assert!(parse_brevo_response(201, r#"{"id":1}"#).is_ok());
}

#[test]
fn known_contact_not_on_list_is_updated_and_added() {
    // Brevo answers 204 when updateEnabled merges into an existing contact.
    assert!(parse_brevo_response(204, "").is_ok());
    let body = serde_json::to_value(CreateContact::from_signup(&signup(), 7)).unwrap();
    assert_eq!(body["updateEnabled"], true);
    assert_eq!(body["listIds"], serde_json::json!([7]));
}

#[test]
fn duplicate_parameter_is_an_error_not_a_subscription() {
    let body = r#"{"code":"duplicate_parameter","message":"SMS is already associated with another Contact"}"#;
    let err = parse_brevo_response(400, body).unwrap_err();
    assert!(matches!(err, NewsletterError::Status { status: 400, .. }));
}

#[test]
fn other_failures_carry_provider_message() {
    let err = parse_brevo_response(401, r#"{"code":"unauthorized","message":"Key not found"}"#).unwrap_err();
    assert!(matches!(err, NewsletterError::Status { status: 401, ref message } if message == "Key not found"));

    let err = parse_brevo_response(502, "Bad Gateway").unwrap_err();
    assert!(matches!(err, NewsletterError::Status { status: 502, ref message } if message == "Bad Gateway"));
}
