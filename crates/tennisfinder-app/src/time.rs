// Rust guideline compliant 2026-10-14

//! Wall-clock sources for creation timestamps.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tennisfinder_core::Tables;

/// A source of the current time in epoch milliseconds.
pub trait Clock: Send + Sync {
    /// Returns the current time in epoch milliseconds.
    fn now_millis(&self) -> i64;
}

/// The system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// A clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    millis: Arc<AtomicI64>,
}

impl ManualClock {
    /// Creates a clock frozen at `millis`.
    #[must_use]
    pub fn new(millis: i64) -> Self {
        Self {
            millis: Arc::new(AtomicI64::new(millis)),
        }
    }

    /// Sets the current time.
    pub fn set(&self, millis: i64) {
        self.millis.store(millis, Ordering::SeqCst);
    }

    /// Moves the clock forward by `delta` milliseconds.
    pub fn advance(&self, delta: i64) {
        self.millis.fetch_add(delta, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> i64 {
        self.millis.load(Ordering::SeqCst)
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now_millis(&self) -> i64 {
        (**self).now_millis()
    }
}

/// Returns a creation timestamp that never precedes the newest row in `table`.
///
/// Keeps `created_at` ordering consistent with insertion order even when the
/// wall clock steps backwards.
pub(crate) fn monotonic_created_at(
    tables: &Tables,
    table: &str,
    now: i64,
) -> tennisfinder_core::Result<i64> {
    let last = tables
        .last_inserted(table)?
        .and_then(|document| document.field("created_at"))
        .and_then(serde_json::Value::as_i64);
    Ok(last.map_or(now, |last| now.max(last)))
}
