#[cfg(test)]
#[path = "consent_test.rs"]
mod consent_test;

use site::consent::{ConsentLevel, ConsentSettings, StoredConsent, resolve_stored};

/// Consent decision plus the cookie banner's UI state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConsentState {
    /// What is in effect right now.
    pub stored: StoredConsent,
    /// Toggles edited in the settings panel, not yet saved.
    pub draft: ConsentSettings,
    pub banner_visible: bool,
    pub settings_open: bool,
    /// Set once storage has been read in the browser.
    pub loaded: bool,
}

impl Default for ConsentState {
    fn default() -> Self {
        Self {
            stored: StoredConsent::Undecided,
            draft: ConsentSettings::essential_only(),
            banner_visible: false,
            settings_open: false,
            loaded: false,
        }
    }
}

impl ConsentState {
    /// State after reading storage. The banner itself is revealed later by
    /// [`Self::reveal_banner`] once the delay has passed.
    #[must_use]
    pub fn from_storage(level_raw: Option<&str>, settings_raw: Option<&str>) -> Self {
        let stored = resolve_stored(level_raw, settings_raw);
        Self { stored, draft: stored.settings(), loaded: true, ..Self::default() }
    }

    #[must_use]
    pub fn level(&self) -> Option<ConsentLevel> {
        self.stored.level()
    }

    #[must_use]
    pub fn settings(&self) -> ConsentSettings {
        self.stored.settings()
    }

    /// Show the banner if no decision exists yet.
    pub fn reveal_banner(&mut self) {
        if self.stored.banner_needed() {
            self.banner_visible = true;
        }
    }

    /// Reopen the banner from the footer link to change a decision.
    pub fn reopen(&mut self) {
        self.draft = self.settings();
        self.banner_visible = true;
        self.settings_open = true;
    }

    pub fn toggle_settings(&mut self) {
        self.settings_open = !self.settings_open;
    }

    pub fn toggle_draft(&mut self, category_id: &str) {
        let enabled = self.draft.is_enabled(category_id);
        self.draft = self.draft.with_category(category_id, !enabled);
    }

    /// Record a decision and close the banner. Returns the settings to
    /// persist.
    pub fn decide(&mut self, settings: ConsentSettings) -> ConsentSettings {
        let settings = settings.with_category("essential", true);
        self.stored = StoredConsent::Decided { level: settings.level(), settings };
        self.draft = settings;
        self.banner_visible = false;
        self.settings_open = false;
        settings
    }

    pub fn accept_all(&mut self) -> ConsentSettings {
        self.decide(ConsentSettings::accept_all())
    }

    pub fn essential_only(&mut self) -> ConsentSettings {
        self.decide(ConsentSettings::essential_only())
    }

    pub fn save_draft(&mut self) -> ConsentSettings {
        self.decide(self.draft)
    }
}
