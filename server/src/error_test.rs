use super::*;
use site::validation::FormError;

async fn body_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn validation_errors_are_listed_per_field() {
    let mut errors = FieldErrors::default();
    errors.push("email", FormError::Email);
    let response = ApiError::Invalid(errors).into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Validierungsfehler");
    assert_eq!(json["validationErrors"][0]["field"], "email");
}

#[tokio::test]
async fn rate_limit_sets_retry_after() {
    let err = ApiError::from(RateLimitError::PerClientExceeded { limit: 5, window_secs: 600 });
    let response = err.into_response();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(response.headers()[header::RETRY_AFTER], "600");
}

#[tokio::test]
async fn upstream_details_are_not_exposed() {
    let err = ApiError::from(ContentError::Status { status: 500, body: "secret table name".into() });
    let response = err.into_response();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let json = body_json(response).await;
    assert_eq!(json["error"], MSG_SERVER_ERROR);
    assert!(!json.to_string().contains("secret"));
}

#[test]
fn status_mapping() {
    assert_eq!(ApiError::NotFound("Beitrag".into()).status(), StatusCode::NOT_FOUND);
    assert_eq!(ApiError::Unavailable("mail").status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(ApiError::BadRequest("eof".into()).status(), StatusCode::BAD_REQUEST);
    assert_eq!(ApiError::from(MailError::Delivery("x".into())).status(), StatusCode::BAD_GATEWAY);
}
