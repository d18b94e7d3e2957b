use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub started: i64,
    pub tcp4_announces_handled: i64,
    pub tcp4_failure: i64,
    pub tcp4_not_found: i64,
    pub tcp6_announces_handled: i64,
    pub tcp6_failure: i64,
    pub tcp6_not_found: i64,
    pub peers_updated: i64,
    pub peers_removed: i64,
    pub throttled: i64,
    pub skipped_corrupt: i64,
    pub skipped_expired: i64,
}
