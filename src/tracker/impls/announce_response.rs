use bip_bencode::{ben_bytes, ben_int, ben_list, ben_map, BMutAccess};
use log::error;
use crate::tracker::enums::announce_response::AnnounceResponse;
use crate::tracker::structs::failure_response::FailureResponse;
use crate::tracker::structs::swarm_response::SwarmResponse;
use crate::tracker::structs::swarm_view::SwarmView;

impl AnnounceResponse {
    pub fn failure(reason: &str) -> AnnounceResponse
    {
        AnnounceResponse::Failure(FailureResponse {
            failure_reason: reason.to_string(),
        })
    }

    pub fn swarm(interval: u64, tracker_id: &str, view: SwarmView) -> AnnounceResponse
    {
        AnnounceResponse::Swarm(SwarmResponse {
            interval,
            tracker_id: tracker_id.to_string(),
            complete: view.complete,
            incomplete: view.incomplete,
            peers: view.peers,
        })
    }

    pub fn failure_reason(&self) -> Option<&str>
    {
        match self {
            AnnounceResponse::Failure(failure) => Some(failure.failure_reason.as_str()),
            AnnounceResponse::Swarm(_) => None,
        }
    }

    /// Encodes as a bencoded dictionary when `compact` is set, otherwise as JSON.
    ///
    /// Peers are always a list of dictionaries, never the binary peer string.
    /// A JSON encoding failure is logged and yields an empty body.
    pub fn encode(&self, compact: bool) -> Vec<u8>
    {
        if compact {
            return self.to_bencode();
        }
        match serde_json::to_vec(self) {
            Ok(body) => body,
            Err(error) => {
                error!("[ANNOUNCE] Unable to encode JSON response: {}", error);
                Vec::new()
            }
        }
    }

    pub fn to_bencode(&self) -> Vec<u8>
    {
        match self {
            AnnounceResponse::Failure(failure) => {
                ben_map! {
                    "failure reason" => ben_bytes!(failure.failure_reason.clone())
                }.encode()
            }
            AnnounceResponse::Swarm(swarm) => {
                let mut peers_list = ben_list!();
                if let Some(peers_list_mut) = peers_list.list_mut() {
                    for peer in swarm.peers.iter() {
                        peers_list_mut.push(ben_map! {
                            "ip" => ben_bytes!(peer.ip.clone()),
                            "peer id" => ben_bytes!(peer.peer_id.clone()),
                            "port" => ben_int!(peer.port as i64)
                        });
                    }
                }
                ben_map! {
                    "interval" => ben_int!(swarm.interval as i64),
                    "tracker id" => ben_bytes!(swarm.tracker_id.clone()),
                    "complete" => ben_int!(swarm.complete as i64),
                    "incomplete" => ben_int!(swarm.incomplete as i64),
                    "peers" => peers_list
                }.encode()
            }
        }
    }
}
