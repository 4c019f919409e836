use super::*;

#[test]
fn default_is_undecided_and_hidden() {
    let state = ConsentState::default();
    assert_eq!(state.level(), None);
    assert!(!state.banner_visible);
    assert!(!state.loaded);
}

#[test]
fn banner_is_revealed_only_without_a_decision() {
    let mut fresh = ConsentState::from_storage(None, None);
    assert!(fresh.loaded);
    assert!(!fresh.banner_visible);
    fresh.reveal_banner();
    assert!(fresh.banner_visible);

    let mut decided = ConsentState::from_storage(Some("all"), None);
    decided.reveal_banner();
    assert!(!decided.banner_visible);
    assert_eq!(decided.settings(), ConsentSettings::accept_all());
}

#[test]
fn accept_all_closes_banner_with_level_all() {
    let mut state = ConsentState::from_storage(None, None);
    state.reveal_banner();
    let saved = state.accept_all();
    assert_eq!(saved, ConsentSettings::accept_all());
    assert_eq!(state.level(), Some(ConsentLevel::All));
    assert!(!state.banner_visible);
}

#[test]
fn essential_only_is_a_decision_too() {
    let mut state = ConsentState::from_storage(None, None);
    state.essential_only();
    assert_eq!(state.level(), Some(ConsentLevel::Essential));
    assert!(!state.stored.banner_needed());
}

#[test]
fn custom_draft_is_saved_with_essential_locked() {
    let mut state = ConsentState::from_storage(None, None);
    state.toggle_settings();
    state.toggle_draft("analytics");
    state.toggle_draft("essential");
    let saved = state.save_draft();
    assert!(saved.essential);
    assert!(saved.analytics);
    assert!(!saved.marketing);
    assert_eq!(state.level(), Some(ConsentLevel::Custom));
    assert!(!state.settings_open);
}

#[test]
fn reopen_starts_from_current_settings() {
    let mut state = ConsentState::from_storage(Some("all"), None);
    state.reopen();
    assert!(state.banner_visible);
    assert!(state.settings_open);
    assert_eq!(state.draft, ConsentSettings::accept_all());
}
