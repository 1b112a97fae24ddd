//! Client-side identities for locally added materials.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Timestamp-based id source, strictly increasing within the process.
///
/// Two ids requested in the same millisecond get consecutive values, so ids stay
/// unique even when the clock stalls or steps backwards.
#[derive(Debug, Default)]
pub struct LocalIdGenerator {
    last: AtomicU64,
}

impl LocalIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&self) -> String {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        let mut issued = now;
        // fetch_update only fails if the closure returns None, which it never does.
        let _ = self.last.fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
            issued = now.max(last + 1);
            Some(issued)
        });
        format!("local-{}", issued)
    }
}
