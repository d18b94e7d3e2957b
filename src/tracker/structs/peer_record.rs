use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::tracker::structs::announce_request::AnnounceRequest;

/// Stored form of an accepted announce, kept as JSON under `info_hash ++ peer_id`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PeerRecord {
    #[serde(flatten)]
    pub request: AnnounceRequest,
    pub updated_at: DateTime<Utc>,
}
