use super::*;

#[test]
fn idle_state_shows_content() {
    let state = TransitionState::default();
    assert!(state.is_settled());
}

#[test]
fn route_change_hides_content_until_reveal() {
    let mut state = TransitionState::default();
    let generation = state.begin(TransitionKind::RouteChange);
    assert!(state.show_logo);
    assert!(!state.show_content);
    assert!(state.animating);

    state.advance_to(generation, TransitionKind::RouteChange, Duration::from_millis(299), &[]);
    assert!(!state.show_content);

    state.advance_to(generation, TransitionKind::RouteChange, ROUTE_REVEAL_DELAY, &[]);
    assert!(state.show_content);
    assert!(state.show_logo);

    state.advance_to(generation, TransitionKind::RouteChange, ROUTE_COMPLETE_DELAY, &[]);
    assert!(state.is_settled());
}

#[test]
fn initial_load_keeps_content_and_completes_at_500ms() {
    let mut state = TransitionState::default();
    let generation = state.begin(TransitionKind::InitialLoad);
    assert!(state.show_content);
    assert!(state.show_logo);

    let changed = state.advance_to(generation, TransitionKind::InitialLoad, INITIAL_COMPLETE_DELAY, &[]);
    assert_eq!(changed, 1);
    assert!(state.is_settled());
}

#[test]
fn safety_timeout_reveals_content_when_completion_never_runs() {
    let mut state = TransitionState::default();
    let generation = state.begin(TransitionKind::RouteChange);
    let skip = [TransitionStep::RevealContent, TransitionStep::Complete];

    state.advance_to(generation, TransitionKind::RouteChange, Duration::from_millis(1499), &skip);
    assert!(!state.show_content);
    assert!(state.animating);

    state.advance_to(generation, TransitionKind::RouteChange, SAFETY_TIMEOUT, &skip);
    assert!(state.show_content);
    assert!(!state.show_logo);
    assert!(!state.animating);
}

#[test]
fn safety_timeout_is_noop_after_completion() {
    let mut state = TransitionState::default();
    let generation = state.begin(TransitionKind::InitialLoad);
    assert!(state.apply(generation, TransitionStep::Complete));
    assert!(!state.apply(generation, TransitionStep::SafetyTimeout));
}

#[test]
fn steps_from_superseded_transition_are_ignored() {
    let mut state = TransitionState::default();
    let first = state.begin(TransitionKind::RouteChange);
    let second = state.begin(TransitionKind::RouteChange);
    assert_ne!(first, second);

    assert!(!state.apply(first, TransitionStep::Complete));
    assert!(!state.apply(first, TransitionStep::SafetyTimeout));
    assert!(state.animating);

    assert!(state.apply(second, TransitionStep::SafetyTimeout));
    assert!(state.is_settled());
}

#[test]
fn every_schedule_ends_with_the_safety_step() {
    for kind in [TransitionKind::InitialLoad, TransitionKind::RouteChange] {
        let steps = schedule(kind);
        assert_eq!(steps.last(), Some(&(SAFETY_TIMEOUT, TransitionStep::SafetyTimeout)));
        assert!(steps.windows(2).all(|w| w[0].0 <= w[1].0));
    }
}
