use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Wall-clock milliseconds since the UNIX epoch.
pub fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

/// Strictly increasing millisecond timestamps for locally created records.
///
/// Follows the wall clock when it moves forward and otherwise steps one
/// millisecond past the last issued value. A per-call floor lifts only that
/// call's result; it is never remembered, so one far-future predecessor
/// cannot drag later timestamps with it.
#[derive(Debug, Default)]
pub struct MonotonicClock {
    last: AtomicU64,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next timestamp: after every previous unfloored one and at least `floor`.
    pub fn next(&self, floor: u64) -> u64 {
        let now = now_ms();
        let mut issued = now;
        // fetch_update only fails if the closure returns None.
        let _ = self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                issued = now.max(last.saturating_add(1));
                Some(issued)
            });
        issued.max(floor)
    }
}
