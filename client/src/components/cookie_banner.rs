//! Cookie consent banner and the analytics gate behind it.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once in `App`. In the browser it reads the stored decision,
//! shows the banner after `BANNER_DELAY` when none exists, injects the
//! tracking scripts once analytics consent is present and reports a page
//! view on every route change. During SSR the banner renders hidden and no
//! effect runs.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use site::consent::{BANNER_DELAY, CONSENT_KEY, COOKIE_CATEGORIES, ConsentSettings, CookieCategory, SETTINGS_KEY};

use crate::state::consent::ConsentState;
use crate::util::{analytics, storage};

#[component]
pub fn CookieBanner() -> impl IntoView {
    let consent = expect_context::<RwSignal<ConsentState>>();
    let location = use_location();
    let loaded = Memo::new(move |_| consent.with(|c| c.loaded));

    Effect::new(move || {
        if consent.with_untracked(|c| c.loaded) {
            return;
        }
        let level = storage::get(CONSENT_KEY);
        let settings = storage::get(SETTINGS_KEY);
        consent.set(ConsentState::from_storage(level.as_deref(), settings.as_deref()));

        #[cfg(feature = "hydrate")]
        {
            let delay = u32::try_from(BANNER_DELAY.as_millis()).unwrap_or(u32::MAX);
            gloo_timers::callback::Timeout::new(delay, move || consent.update(ConsentState::reveal_banner)).forget();
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = BANNER_DELAY;
    });

    Effect::new(move || {
        let state = consent.get();
        if state.loaded {
            analytics::load(&state.settings());
        }
    });

    Effect::new(move || {
        let path = location.pathname.get();
        if loaded.get() {
            analytics::pageview(consent.with_untracked(ConsentState::level), &path);
        }
    });

    let accept_all = move |_| persist(consent.try_update(ConsentState::accept_all));
    let essential_only = move |_| persist(consent.try_update(ConsentState::essential_only));
    let save = move |_| persist(consent.try_update(ConsentState::save_draft));
    let settings_open = move || consent.with(|c| c.settings_open);

    view! {
        <Show when=move || consent.with(|c| c.banner_visible)>
            <div class="cookie-banner" role="dialog" aria-live="polite" aria-label="Cookie-Einstellungen">
                <div class="cookie-banner__body">
                    <h2 class="cookie-banner__title">"Wir respektieren Ihre Privatsphäre"</h2>
                    <p class="cookie-banner__text">
                        "Wir verwenden Cookies, um Ihnen die bestmögliche Nutzung unserer Website zu ermöglichen. "
                        "Einige sind essenziell, andere helfen uns, die Website zu verbessern. Mehr dazu in unserer "
                        <a href="/datenschutz">"Datenschutzerklärung"</a>
                        "."
                    </p>
                </div>

                <Show when=settings_open>
                    <ul class="cookie-banner__categories">
                        {COOKIE_CATEGORIES.iter().map(|category| view! { <CategoryToggle category=*category/> }).collect_view()}
                    </ul>
                </Show>

                <div class="cookie-banner__actions">
                    <button type="button" class="button button--ghost" on:click=move |_| consent.update(ConsentState::toggle_settings)>
                        {move || if settings_open() { "Einstellungen ausblenden" } else { "Einstellungen" }}
                    </button>
                    <Show
                        when=settings_open
                        fallback=move || view! {
                            <button type="button" class="button button--secondary" on:click=essential_only>
                                "Nur essenzielle"
                            </button>
                        }
                    >
                        <button type="button" class="button button--secondary" on:click=save>
                            "Auswahl speichern"
                        </button>
                    </Show>
                    <button type="button" class="button button--primary" on:click=accept_all>
                        "Alle akzeptieren"
                    </button>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn CategoryToggle(category: CookieCategory) -> impl IntoView {
    let consent = expect_context::<RwSignal<ConsentState>>();
    let id = category.id;
    let checked = move || consent.with(|c| c.draft.is_enabled(id));

    view! {
        <li class="cookie-banner__category">
            <label class="form__checkbox">
                <input
                    type="checkbox"
                    prop:checked=checked
                    disabled=category.required
                    on:change=move |_| consent.update(|c| c.toggle_draft(id))
                />
                <span class="cookie-banner__category-name">{category.name}</span>
            </label>
            <p class="cookie-banner__category-text">{category.description}</p>
            <ul class="cookie-banner__cookies">
                {category
                    .cookies
                    .iter()
                    .map(|cookie| {
                        view! {
                            <li>
                                <code>{cookie.name}</code>
                                {format!(" ({}, {}): {}", cookie.provider, cookie.expiry, cookie.purpose)}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </li>
    }
}

/// Write a decision to storage. `None` means the signal was already
/// disposed and there is nothing to save.
fn persist(settings: Option<ConsentSettings>) {
    let Some(settings) = settings else { return };
    match settings.to_storage() {
        Ok((level, json)) => {
            storage::set(CONSENT_KEY, level);
            storage::set(SETTINGS_KEY, &json);
        }
        Err(_e) => {
            #[cfg(feature = "hydrate")]
            log::warn!("consent settings could not be serialized: {_e}");
        }
    }
}
