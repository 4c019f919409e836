//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped data loading and delegates rendering details
//! to `components`. Static company content comes from `site::catalog`; the
//! blog pages load through `net::api`.

pub mod about;
pub mod blog;
pub mod blog_post;
pub mod careers;
pub mod contact;
pub mod home;
pub mod legal;
pub mod not_found;
pub mod services;
