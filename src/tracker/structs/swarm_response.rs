use serde::{Deserialize, Serialize};
use crate::tracker::structs::response_peer::ResponsePeer;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SwarmResponse {
    pub interval: u64,
    #[serde(rename = "tracker id")]
    pub tracker_id: String,
    pub complete: u64,
    pub incomplete: u64,
    pub peers: Vec<ResponsePeer>,
}
