use super::*;

fn limiter(per_client: usize, global: usize) -> RateLimiter {
    RateLimiter::new(RateLimitConfig {
        per_client_limit: per_client,
        per_client_window: Duration::from_secs(600),
        global_limit: global,
        global_window: Duration::from_secs(60),
    })
}

#[test]
fn per_client_allows_up_to_limit() {
    let rl = RateLimiter::default();
    let now = Instant::now();

    for i in 0..DEFAULT_PER_CLIENT_LIMIT {
        assert!(rl.check_and_record_at("10.0.0.1", now).is_ok(), "request {i} should succeed");
    }
    assert_eq!(
        rl.check_and_record_at("10.0.0.1", now),
        Err(RateLimitError::PerClientExceeded { limit: 5, window_secs: 600 })
    );
}

#[test]
fn other_clients_are_not_affected() {
    let rl = limiter(1, 100);
    let now = Instant::now();
    rl.check_and_record_at("a", now).unwrap();
    assert!(rl.check_and_record_at("a", now).is_err());
    assert!(rl.check_and_record_at("b", now).is_ok());
}

#[test]
fn global_allows_up_to_limit() {
    let rl = limiter(100, 3);
    let now = Instant::now();

    for i in 0..3 {
        assert!(rl.check_and_record_at(&format!("client-{i}"), now).is_ok());
    }
    assert!(matches!(
        rl.check_and_record_at("client-x", now),
        Err(RateLimitError::GlobalExceeded { limit: 3, .. })
    ));
}

#[test]
fn window_expiry_allows_new_requests() {
    let rl = limiter(2, 100);
    let start = Instant::now();

    rl.check_and_record_at("a", start).unwrap();
    rl.check_and_record_at("a", start).unwrap();
    assert!(rl.check_and_record_at("a", start).is_err());

    let later = start + Duration::from_secs(601);
    assert!(rl.check_and_record_at("a", later).is_ok());
}

#[test]
fn rejected_requests_are_not_recorded() {
    let rl = limiter(1, 2);
    let now = Instant::now();
    rl.check_and_record_at("a", now).unwrap();
    for _ in 0..5 {
        assert!(rl.check_and_record_at("a", now).is_err());
    }
    // Only one global slot used, so another client still fits.
    assert!(rl.check_and_record_at("b", now).is_ok());
}

#[test]
fn idle_clients_are_forgotten() {
    let rl = limiter(5, 100);
    let start = Instant::now();
    rl.check_and_record_at("a", start).unwrap();
    rl.check_and_record_at("b", start).unwrap();
    assert_eq!(rl.tracked_clients(), 2);

    rl.check_and_record_at("c", start + Duration::from_secs(700)).unwrap();
    assert_eq!(rl.tracked_clients(), 1);
}

#[test]
fn retry_after_matches_window() {
    let err = RateLimitError::GlobalExceeded { limit: 1, window_secs: 60 };
    assert_eq!(err.retry_after_secs(), 60);
}
