use crate::tracker::structs::peer_record::PeerRecord;
use crate::tracker::structs::response_peer::ResponsePeer;

impl From<&PeerRecord> for ResponsePeer {
    fn from(record: &PeerRecord) -> Self {
        ResponsePeer {
            ip: record.request.remote_ip.map(|ip| ip.to_string()).unwrap_or_default(),
            peer_id: record.request.peer_id.clone(),
            port: record.request.port,
        }
    }
}
