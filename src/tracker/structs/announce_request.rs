use std::net::IpAddr;
use serde::{Deserialize, Serialize};
use crate::common::common::serde_base64;
use crate::tracker::enums::announce_event::AnnounceEvent;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct AnnounceRequest {
    #[serde(with = "serde_base64")]
    pub info_hash: Vec<u8>,
    #[serde(with = "serde_base64")]
    pub peer_id: Vec<u8>,
    pub remote_ip: Option<IpAddr>,
    pub port: u16,
    pub event: AnnounceEvent,
    pub uploaded: i64,
    pub downloaded: i64,
    pub left: i64,
    pub support_crypto: bool,
    pub compact: bool,
}
