//! Client-side reactive state shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! Plain structs here are wrapped in `RwSignal`s by `app` and the form
//! components. Keeping the transitions as methods on the structs lets them
//! be tested without a browser.

pub mod consent;
pub mod form;
