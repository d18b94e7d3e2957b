pub mod announce_event;
pub mod announce_request;
pub mod announce_response;
pub mod key_locks;
pub mod peer_record;
pub mod peer_tracker;
pub mod peer_tracker_announce;
pub mod response_peer;
pub mod swarm_view;
