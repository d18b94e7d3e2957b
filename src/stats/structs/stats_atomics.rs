use std::sync::atomic::AtomicI64;

#[derive(Debug)]
pub struct StatsAtomics {
    pub started: AtomicI64,
    pub tcp4_announces_handled: AtomicI64,
    pub tcp4_failure: AtomicI64,
    pub tcp4_not_found: AtomicI64,
    pub tcp6_announces_handled: AtomicI64,
    pub tcp6_failure: AtomicI64,
    pub tcp6_not_found: AtomicI64,
    pub peers_updated: AtomicI64,
    pub peers_removed: AtomicI64,
    pub throttled: AtomicI64,
    pub skipped_corrupt: AtomicI64,
    pub skipped_expired: AtomicI64,
}
