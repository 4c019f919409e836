//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps every call the browser makes to the server's `/api/*`
//! endpoints; `url` builds the paths and query strings for them and for
//! in-site navigation.

pub mod api;
pub mod url;
