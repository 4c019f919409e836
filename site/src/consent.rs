//! Cookie consent record and the analytics gates derived from it.
//!
//! The browser stores two keys: the coarse level under [`CONSENT_KEY`] and
//! the per-category switches as JSON under [`SETTINGS_KEY`]. Tracking
//! scripts load once the analytics category is on; page views and events
//! are only sent when the coarse level is `all`.

#[cfg(test)]
#[path = "consent_test.rs"]
mod consent_test;

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const CONSENT_KEY: &str = "cookie-consent";
pub const SETTINGS_KEY: &str = "cookie-settings";

/// Delay before the banner slides in for first-time visitors.
pub const BANNER_DELAY: Duration = Duration::from_millis(1000);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsentLevel {
    All,
    Custom,
    Essential,
}

impl ConsentLevel {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Custom => "custom",
            Self::Essential => "essential",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "all" => Some(Self::All),
            "custom" => Some(Self::Custom),
            "essential" => Some(Self::Essential),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsentSettings {
    pub essential: bool,
    pub functional: bool,
    pub analytics: bool,
    pub marketing: bool,
}

impl Default for ConsentSettings {
    fn default() -> Self {
        Self::essential_only()
    }
}

impl ConsentSettings {
    #[must_use]
    pub fn accept_all() -> Self {
        Self { essential: true, functional: true, analytics: true, marketing: true }
    }

    #[must_use]
    pub fn essential_only() -> Self {
        Self { essential: true, functional: false, analytics: false, marketing: false }
    }

    #[must_use]
    pub fn level(&self) -> ConsentLevel {
        match (self.functional, self.analytics, self.marketing) {
            (true, true, true) => ConsentLevel::All,
            (false, false, false) => ConsentLevel::Essential,
            _ => ConsentLevel::Custom,
        }
    }

    #[must_use]
    pub fn is_enabled(&self, category_id: &str) -> bool {
        match category_id {
            "essential" => true,
            "functional" => self.functional,
            "analytics" => self.analytics,
            "marketing" => self.marketing,
            _ => false,
        }
    }

    /// Toggle one category. Essential cookies cannot be switched off.
    #[must_use]
    pub fn with_category(mut self, category_id: &str, enabled: bool) -> Self {
        match category_id {
            "functional" => self.functional = enabled,
            "analytics" => self.analytics = enabled,
            "marketing" => self.marketing = enabled,
            _ => {}
        }
        self.essential = true;
        self
    }

    /// Values to write under [`CONSENT_KEY`] and [`SETTINGS_KEY`].
    ///
    /// # Errors
    ///
    /// Fails only if JSON serialization fails.
    pub fn to_storage(&self) -> Result<(&'static str, String), serde_json::Error> {
        Ok((self.level().as_str(), serde_json::to_string(self)?))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CookieInfo {
    pub name: &'static str,
    pub purpose: &'static str,
    pub provider: &'static str,
    pub expiry: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CookieCategory {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
    pub cookies: &'static [CookieInfo],
}

pub const COOKIE_CATEGORIES: &[CookieCategory] = &[
    CookieCategory {
        id: "essential",
        name: "Essenziell",
        description: "Diese Cookies sind für die Grundfunktionen der Website erforderlich und können nicht deaktiviert werden.",
        required: true,
        cookies: &[
            CookieInfo {
                name: "cookie-consent",
                purpose: "Speichert Ihre Cookie-Einstellungen",
                provider: "Ritter Digital",
                expiry: "1 Jahr",
            },
            CookieInfo {
                name: "session-id",
                purpose: "Verwaltet Ihre aktuelle Sitzung",
                provider: "Ritter Digital",
                expiry: "Sitzung",
            },
        ],
    },
    CookieCategory {
        id: "functional",
        name: "Funktional",
        description: "Diese Cookies ermöglichen erweiterte Funktionen und Personalisierung, wie z.B. Videos und Live-Chats.",
        required: false,
        cookies: &[
            CookieInfo {
                name: "preferences",
                purpose: "Speichert Ihre bevorzugten Einstellungen",
                provider: "Ritter Digital",
                expiry: "30 Tage",
            },
            CookieInfo {
                name: "language",
                purpose: "Speichert Ihre Spracheinstellungen",
                provider: "Ritter Digital",
                expiry: "30 Tage",
            },
        ],
    },
    CookieCategory {
        id: "analytics",
        name: "Analyse",
        description: "Diese Cookies helfen uns zu verstehen, wie Besucher mit unserer Website interagieren, indem sie Informationen anonym sammeln und melden.",
        required: false,
        cookies: &[
            CookieInfo {
                name: "_ga",
                purpose: "Verwendet von Google Analytics zum Unterscheiden einzelner Nutzer",
                provider: "Google",
                expiry: "2 Jahre",
            },
            CookieInfo {
                name: "_gid",
                purpose: "Verwendet von Google Analytics zum Identifizieren von Nutzern",
                provider: "Google",
                expiry: "24 Stunden",
            },
        ],
    },
    CookieCategory {
        id: "marketing",
        name: "Marketing",
        description: "Diese Cookies werden verwendet, um Besucher auf Websites zu verfolgen und relevante Anzeigen zu zeigen.",
        required: false,
        cookies: &[
            CookieInfo {
                name: "_fbp",
                purpose: "Verwendet von Facebook für Werbezwecke",
                provider: "Facebook",
                expiry: "3 Monate",
            },
            CookieInfo {
                name: "ads_prefs",
                purpose: "Speichert Ihre Werbeeinstellungen",
                provider: "Ritter Digital",
                expiry: "6 Monate",
            },
        ],
    },
];

/// What the browser had stored from a previous visit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoredConsent {
    Decided { level: ConsentLevel, settings: ConsentSettings },
    Undecided,
}

impl StoredConsent {
    #[must_use]
    pub fn banner_needed(&self) -> bool {
        matches!(self, Self::Undecided)
    }

    #[must_use]
    pub fn settings(&self) -> ConsentSettings {
        match self {
            Self::Decided { settings, .. } => *settings,
            Self::Undecided => ConsentSettings::essential_only(),
        }
    }

    #[must_use]
    pub fn level(&self) -> Option<ConsentLevel> {
        match self {
            Self::Decided { level, .. } => Some(*level),
            Self::Undecided => None,
        }
    }
}

/// Interpret the raw storage values.
///
/// Stored settings win and are merged over the defaults with essential
/// forced on. Without settings a stored `all` level means everything is
/// accepted and any other stored level means essential only. Unreadable
/// settings JSON is treated as missing.
#[must_use]
pub fn resolve_stored(level_raw: Option<&str>, settings_raw: Option<&str>) -> StoredConsent {
    let level = level_raw.and_then(ConsentLevel::parse);
    let settings = settings_raw.and_then(|raw| serde_json::from_str::<ConsentSettings>(raw).ok());

    match (level, settings) {
        (level, Some(mut settings)) => {
            settings.essential = true;
            StoredConsent::Decided { level: level.unwrap_or_else(|| settings.level()), settings }
        }
        (Some(ConsentLevel::All), None) => {
            StoredConsent::Decided { level: ConsentLevel::All, settings: ConsentSettings::accept_all() }
        }
        (Some(level), None) => StoredConsent::Decided { level, settings: ConsentSettings::essential_only() },
        (None, None) => StoredConsent::Undecided,
    }
}

/// Whether the tracking scripts may be injected.
#[must_use]
pub fn analytics_allowed(settings: &ConsentSettings) -> bool {
    settings.analytics
}

/// Whether page views and events may be sent.
#[must_use]
pub fn beacons_allowed(level: Option<ConsentLevel>) -> bool {
    level == Some(ConsentLevel::All)
}

/// A tracked interaction with its fixed action/category pair.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnalyticsEvent {
    pub action: &'static str,
    pub category: &'static str,
    pub label: Option<String>,
    pub value: Option<f64>,
}

impl AnalyticsEvent {
    fn new(action: &'static str, category: &'static str) -> Self {
        Self { action, category, label: None, value: None }
    }

    #[must_use]
    pub fn contact_form_submission() -> Self {
        Self::new("submit", "contact_form")
    }

    #[must_use]
    pub fn newsletter_subscription() -> Self {
        Self::new("subscribe", "newsletter")
    }

    #[must_use]
    pub fn application_submission(position: &str) -> Self {
        Self::new("submit", "application_form").with_label(position)
    }

    #[must_use]
    pub fn blog_search(term: &str) -> Self {
        Self::new("search", "blog").with_label(term)
    }

    #[must_use]
    pub fn cta_click(label: &str) -> Self {
        Self::new("click", "cta").with_label(label)
    }

    #[must_use]
    pub fn with_label(mut self, label: &str) -> Self {
        self.label = Some(label.to_owned());
        self
    }

    #[must_use]
    pub fn with_value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }

    /// Parameter object passed to `gtag('event', action, params)`.
    #[must_use]
    pub fn gtag_params(&self) -> serde_json::Value {
        let mut params = serde_json::Map::new();
        params.insert("event_category".to_owned(), self.category.into());
        if let Some(label) = &self.label {
            params.insert("event_label".to_owned(), label.as_str().into());
        }
        if let Some(value) = self.value {
            params.insert("value".to_owned(), value.into());
        }
        serde_json::Value::Object(params)
    }
}
