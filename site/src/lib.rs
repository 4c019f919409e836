//! Shared site domain for both `server` and `client`.
//!
//! This crate owns everything that must behave identically on the server
//! and in the browser: blog record shapes, the blog query builder, the
//! pager window, form validation, cookie consent, the page-transition state
//! machine and the static company catalog. It has no I/O and no target
//! specific code, so it compiles unchanged for native and WASM builds.

pub mod api;
pub mod blog;
pub mod catalog;
pub mod consent;
pub mod pagination;
pub mod query;
pub mod transition;
pub mod validation;
