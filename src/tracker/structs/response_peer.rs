use serde::{Deserialize, Serialize};
use crate::common::common::serde_base64;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ResponsePeer {
    pub ip: String,
    #[serde(rename = "peer id", with = "serde_base64")]
    pub peer_id: Vec<u8>,
    pub port: u16,
}
