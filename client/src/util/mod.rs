//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, script injection)
//! from page and component logic. Each helper compiles to a no-op without
//! the `hydrate` feature so SSR output stays deterministic.

pub mod analytics;
pub mod content;
pub mod storage;
pub mod timers;
