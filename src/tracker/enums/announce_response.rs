use serde::{Deserialize, Serialize};
use crate::tracker::structs::failure_response::FailureResponse;
use crate::tracker::structs::swarm_response::SwarmResponse;

/// Body of an announce reply, encoded as bencode or JSON.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum AnnounceResponse {
    Failure(FailureResponse),
    Swarm(SwarmResponse),
}
