//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Layout chrome (header, footer, cookie banner, transition overlay) is
//! mounted once by `App`; the rest are building blocks for pages. Shared
//! state comes from Leptos context, never from globals.

pub mod application_form;
pub mod blog_filter;
pub mod contact_form;
pub mod cookie_banner;
pub mod error_message;
pub mod footer;
pub mod form_field;
pub mod header;
pub mod job_listings;
pub mod loading_spinner;
pub mod newsletter_form;
pub mod page_transition;
pub mod pager;
pub mod post_card;
pub mod section_title;
