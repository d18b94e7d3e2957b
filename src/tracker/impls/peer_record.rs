use chrono::{DateTime, TimeDelta, Utc};
use crate::tracker::structs::announce_request::AnnounceRequest;
use crate::tracker::structs::peer_record::PeerRecord;

impl PeerRecord {
    pub fn new(request: AnnounceRequest, updated_at: DateTime<Utc>) -> PeerRecord {
        PeerRecord { request, updated_at }
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<PeerRecord, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    pub fn age(&self, now: DateTime<Utc>) -> TimeDelta {
        now.signed_duration_since(self.updated_at)
    }
}

/// Converts configured seconds into a `TimeDelta`, saturating on overflow.
pub fn seconds(value: u64) -> TimeDelta {
    i64::try_from(value).ok()
        .and_then(TimeDelta::try_seconds)
        .unwrap_or(TimeDelta::MAX)
}
