use chrono::{DateTime, Utc};
use crate::tracker::structs::response_peer::ResponsePeer;

/// Peers of one content id visible at request time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SwarmView {
    pub complete: u64,
    pub incomplete: u64,
    pub peers: Vec<ResponsePeer>,
    /// Keys whose value could not be decoded.
    pub skipped_corrupt: Vec<Vec<u8>>,
    /// Keys left out because their record is older than the freshness window.
    pub skipped_expired: Vec<(Vec<u8>, DateTime<Utc>)>,
}
