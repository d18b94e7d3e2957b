use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    /// Minimum seconds between two accepted updates of one peer, also sent as `interval`.
    pub request_interval: u64,
    /// Seconds after which a stored peer is left out of the swarm.
    pub peers_timeout: u64,
    /// Upper bound of store entries visited per swarm enumeration.
    pub peers_scan_limit: u64,
    pub tracker_id: String,
    /// Serialize the read-check-write of one peer key behind a lock.
    pub serialize_updates: bool,
    pub update_locks: u64,
}
