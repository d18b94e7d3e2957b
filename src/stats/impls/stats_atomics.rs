use std::sync::atomic::AtomicI64;
use chrono::Utc;
use crate::stats::structs::stats_atomics::StatsAtomics;

impl Default for StatsAtomics {
    fn default() -> Self {
        Self::new()
    }
}

impl StatsAtomics {
    pub fn new() -> StatsAtomics {
        StatsAtomics {
            started: AtomicI64::new(Utc::now().timestamp()),
            tcp4_announces_handled: AtomicI64::new(0),
            tcp4_failure: AtomicI64::new(0),
            tcp4_not_found: AtomicI64::new(0),
            tcp6_announces_handled: AtomicI64::new(0),
            tcp6_failure: AtomicI64::new(0),
            tcp6_not_found: AtomicI64::new(0),
            peers_updated: AtomicI64::new(0),
            peers_removed: AtomicI64::new(0),
            throttled: AtomicI64::new(0),
            skipped_corrupt: AtomicI64::new(0),
            skipped_expired: AtomicI64::new(0),
        }
    }
}
