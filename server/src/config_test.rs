use std::collections::HashMap;

use super::*;

fn config_from(pairs: &[(&str, &str)]) -> Result<SiteConfig, ConfigError> {
    let env: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    SiteConfig::from_lookup(|key| env.get(key).cloned())
}

#[test]
fn empty_environment_uses_defaults_and_disables_backends() {
    let config = config_from(&[]).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.site_url, DEFAULT_SITE_URL);
    assert_eq!(config.http_timeout, Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS));
    assert!(config.supabase.is_none());
    assert!(config.mail.is_none());
    assert!(config.brevo.is_none());
    assert_eq!(config.rate_limit, RateLimitConfig::default());
}

#[test]
fn supabase_needs_url_and_anon_key() {
    let config = config_from(&[("SUPABASE_URL", "https://x.supabase.co/")]).unwrap();
    assert!(config.supabase.is_none());

    let config = config_from(&[
        ("SUPABASE_URL", "https://x.supabase.co/"),
        ("SUPABASE_ANON_KEY", "anon"),
        ("SUPABASE_SERVICE_KEY", "service"),
    ])
    .unwrap();
    let supabase = config.supabase.unwrap();
    assert_eq!(supabase.url, "https://x.supabase.co");
    assert_eq!(supabase.service_key.as_deref(), Some("service"));
}

#[test]
fn mail_inboxes_default_to_company_address() {
    let config = config_from(&[("RESEND_API_KEY", "re_123"), ("CAREERS_INBOX", "jobs@example.de")]).unwrap();
    let mail = config.mail.unwrap();
    assert_eq!(mail.from, DEFAULT_MAIL_FROM);
    assert_eq!(mail.contact_inbox, CONTACT_INFO.email);
    assert_eq!(mail.careers_inbox, "jobs@example.de");
}

#[test]
fn brevo_list_id_defaults_and_parses() {
    assert_eq!(config_from(&[("BREVO_API_KEY", "k")]).unwrap().brevo.unwrap().list_id, DEFAULT_BREVO_LIST_ID);
    assert_eq!(
        config_from(&[("BREVO_API_KEY", "k"), ("BREVO_LIST_ID", "7")]).unwrap().brevo.unwrap().list_id,
        7
    );
}

#[test]
fn blank_values_count_as_missing() {
    let config = config_from(&[("PORT", "  "), ("RESEND_API_KEY", "")]).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert!(config.mail.is_none());
}

#[test]
fn malformed_numbers_are_rejected() {
    assert_eq!(
        config_from(&[("PORT", "abc")]),
        Err(ConfigError::InvalidValue { var: "PORT", value: "abc".into() })
    );
    assert!(config_from(&[("RATE_LIMIT_PER_CLIENT", "-1")]).is_err());
}

#[test]
fn site_url_must_be_http() {
    assert!(matches!(config_from(&[("SITE_URL", "ftp://x")]), Err(ConfigError::InvalidUrl { .. })));
    assert_eq!(config_from(&[("SITE_URL", "http://localhost:3000/")]).unwrap().site_url, "http://localhost:3000");
}

#[test]
fn rate_limits_are_overridable() {
    let config = config_from(&[("RATE_LIMIT_PER_CLIENT", "2"), ("RATE_LIMIT_GLOBAL_WINDOW_SECS", "30")]).unwrap();
    assert_eq!(config.rate_limit.per_client_limit, 2);
    assert_eq!(config.rate_limit.global_window, Duration::from_secs(30));
}

#[test]
fn trusted_proxies_default_to_none() {
    assert_eq!(config_from(&[]).unwrap().trusted_proxies, 0);
    assert_eq!(config_from(&[("TRUSTED_PROXIES", "1")]).unwrap().trusted_proxies, 1);
    assert!(config_from(&[("TRUSTED_PROXIES", "eins")]).is_err());
}
