use std::sync::Arc;
use crate::config::structs::http_trackers_config::HttpTrackersConfig;
use crate::tracker::structs::peer_tracker::PeerTracker;

pub struct HttpServiceData {
    pub peer_tracker: Arc<PeerTracker>,
    pub http_trackers_config: Arc<HttpTrackersConfig>,
}
