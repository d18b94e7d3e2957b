use crate::tracker::structs::peer_record::PeerRecord;
use crate::tracker::structs::response_peer::ResponsePeer;
use crate::tracker::structs::swarm_view::SwarmView;

impl SwarmView {
    pub fn push_record(&mut self, record: &PeerRecord) {
        if record.request.left == 0 {
            self.complete += 1;
        } else {
            self.incomplete += 1;
        }
        self.peers.push(ResponsePeer::from(record));
    }
}
