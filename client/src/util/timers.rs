//! Ownership of pending timer handles.
//!
//! Browser timer handles (`gloo_timers::callback::Timeout`) cancel their
//! timer when dropped. Holding them here instead of calling `forget` lets a
//! component cancel whatever is still pending.

#[cfg(test)]
#[path = "timers_test.rs"]
mod timers_test;

/// Handles of the timers scheduled for the current generation.
#[derive(Debug)]
pub struct PendingTimers<H> {
    handles: Vec<H>,
}

impl<H> Default for PendingTimers<H> {
    fn default() -> Self {
        Self { handles: Vec::new() }
    }
}

impl<H> PendingTimers<H> {
    /// Install a new generation's handles. The previous ones are dropped.
    pub fn replace(&mut self, handles: Vec<H>) {
        self.handles = handles;
    }

    /// Drop every pending handle.
    pub fn cancel_all(&mut self) {
        self.handles.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}
