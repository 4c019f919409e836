//! Page-transition state machine.
//!
//! Each navigation starts a new generation: the logo overlay is shown and
//! the page content fades out (route change) or stays (first load). Timed
//! steps then reveal the content and complete the transition. The browser
//! side schedules the steps with real timers; this module only decides what
//! each step does, so the timing rules can be tested without a DOM.
//!
//! A safety step is always scheduled. If the regular completion never runs
//! (timer dropped, hydration error, tab throttled) the safety step still
//! forces the content visible within [`SAFETY_TIMEOUT`].

#[cfg(test)]
#[path = "transition_test.rs"]
mod transition_test;

use std::time::Duration;

pub const SAFETY_TIMEOUT: Duration = Duration::from_millis(1500);
pub const INITIAL_COMPLETE_DELAY: Duration = Duration::from_millis(500);
pub const ROUTE_REVEAL_DELAY: Duration = Duration::from_millis(300);
pub const ROUTE_COMPLETE_DELAY: Duration = Duration::from_millis(600);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionKind {
    InitialLoad,
    RouteChange,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionStep {
    /// Swap in the new route behind the logo.
    RevealContent,
    /// Hide the logo and end the animation.
    Complete,
    /// Same effect as `Complete`; runs regardless of what happened before.
    SafetyTimeout,
}

const INITIAL_SCHEDULE: &[(Duration, TransitionStep)] = &[
    (INITIAL_COMPLETE_DELAY, TransitionStep::Complete),
    (SAFETY_TIMEOUT, TransitionStep::SafetyTimeout),
];

const ROUTE_SCHEDULE: &[(Duration, TransitionStep)] = &[
    (ROUTE_REVEAL_DELAY, TransitionStep::RevealContent),
    (ROUTE_COMPLETE_DELAY, TransitionStep::Complete),
    (SAFETY_TIMEOUT, TransitionStep::SafetyTimeout),
];

/// Steps to schedule for `kind`, ordered by delay.
#[must_use]
pub fn schedule(kind: TransitionKind) -> &'static [(Duration, TransitionStep)] {
    match kind {
        TransitionKind::InitialLoad => INITIAL_SCHEDULE,
        TransitionKind::RouteChange => ROUTE_SCHEDULE,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransitionState {
    pub show_logo: bool,
    pub show_content: bool,
    pub animating: bool,
    pub generation: u64,
}

impl Default for TransitionState {
    fn default() -> Self {
        Self { show_logo: false, show_content: true, animating: false, generation: 0 }
    }
}

impl TransitionState {
    /// Start a transition and return its generation. Steps carrying an
    /// older generation are ignored from now on.
    pub fn begin(&mut self, kind: TransitionKind) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.show_logo = true;
        self.animating = true;
        if kind == TransitionKind::RouteChange {
            self.show_content = false;
        }
        self.generation
    }

    /// Apply one scheduled step. Returns whether the state changed.
    pub fn apply(&mut self, generation: u64, step: TransitionStep) -> bool {
        if generation != self.generation {
            return false;
        }
        match step {
            TransitionStep::RevealContent => {
                if !self.animating || self.show_content {
                    return false;
                }
                self.show_content = true;
                true
            }
            TransitionStep::Complete | TransitionStep::SafetyTimeout => {
                if self.is_settled() {
                    return false;
                }
                self.show_logo = false;
                self.show_content = true;
                self.animating = false;
                true
            }
        }
    }

    /// Apply every step of `kind` due by `elapsed`, except those in `skip`.
    /// Returns the number of steps that changed the state.
    pub fn advance_to(
        &mut self,
        generation: u64,
        kind: TransitionKind,
        elapsed: Duration,
        skip: &[TransitionStep],
    ) -> usize {
        let mut changed = 0;
        for &(at, step) in schedule(kind) {
            if at <= elapsed && !skip.contains(&step) && self.apply(generation, step) {
                changed += 1;
            }
        }
        changed
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.show_content && !self.show_logo && !self.animating
    }
}
