use serde::{Deserialize, Serialize};

/// Counter selector for `PeerTracker::update_stats()`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum StatsEvent {
    Tcp4AnnouncesHandled,
    Tcp4Failure,
    Tcp4NotFound,
    Tcp6AnnouncesHandled,
    Tcp6Failure,
    Tcp6NotFound,
    PeersUpdated,
    PeersRemoved,
    Throttled,
    SkippedCorrupt,
    SkippedExpired,
}
