//! Logo overlay shown while navigating between pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! The timing rules live in `site::transition`; this component only owns
//! the timers. Every pathname change starts a new generation and schedules
//! that generation's steps, dropping (and so cancelling) the previous
//! generation's pending timers. All pending timers are dropped when the
//! component is torn down. A step that still fires from an older generation
//! is ignored by `TransitionState::apply`, and the safety step makes the
//! content visible even if the regular completion is lost.
//!
//! Query-only changes (blog filters, paging) keep the same pathname and do
//! not animate.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use site::transition::{TransitionKind, TransitionState, schedule};

#[cfg(feature = "hydrate")]
use crate::util::timers::PendingTimers;

#[component]
pub fn PageTransition(children: Children) -> impl IntoView {
    let location = use_location();
    let state = RwSignal::new(TransitionState::default());
    let first_load = StoredValue::new(true);

    #[cfg(feature = "hydrate")]
    let timers = StoredValue::new_local(PendingTimers::<gloo_timers::callback::Timeout>::default());
    #[cfg(feature = "hydrate")]
    on_cleanup(move || {
        timers.try_update_value(PendingTimers::cancel_all);
    });

    Effect::new(move || {
        let _ = location.pathname.get();
        let kind = if first_load.get_value() {
            first_load.set_value(false);
            TransitionKind::InitialLoad
        } else {
            TransitionKind::RouteChange
        };
        let Some(generation) = state.try_update(|s| s.begin(kind)) else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            if kind == TransitionKind::RouteChange {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
            }
            let pending: Vec<_> = schedule(kind)
                .iter()
                .map(|&(delay, step)| {
                    let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
                    gloo_timers::callback::Timeout::new(millis, move || {
                        state.update(|s| {
                            s.apply(generation, step);
                        });
                    })
                })
                .collect();
            timers.update_value(|t| t.replace(pending));
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (generation, schedule(kind));
    });

    let overlay_visible = move || state.with(|s| s.show_logo);
    let content_hidden = move || !state.with(|s| s.show_content);
    let animating = move || state.with(|s| s.animating);

    view! {
        <div class="page-transition" class:page-transition--animating=animating>
            <div
                class="page-transition__overlay"
                class:page-transition__overlay--visible=overlay_visible
                aria-hidden="true"
            >
                <img src="/images/logo.svg" alt="" class="page-transition__logo" width="160" height="40"/>
            </div>
            <div class="page-transition__content" class:page-transition__content--hidden=content_hidden>
                {children()}
            </div>
        </div>
    }
}
