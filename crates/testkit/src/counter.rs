//! Invocation counters for producers and continuations.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Shared counter; clones count into the same total.
#[derive(Debug, Clone, Default)]
pub struct CallCounter {
    calls: Arc<AtomicUsize>,
}

impl CallCounter {
    /// Create a counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one call.
    pub fn record(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }

    /// Record one call and pass `value` through.
    pub fn tick<T>(&self, value: T) -> T {
        self.record();
        value
    }

    /// Calls recorded so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// True when nothing was recorded.
    pub fn untouched(&self) -> bool {
        self.calls() == 0
    }
}
