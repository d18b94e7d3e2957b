pub mod announce_outcome;
pub mod announce_request;
pub mod failure_response;
pub mod key_locks;
pub mod peer_record;
pub mod peer_tracker;
pub mod response_peer;
pub mod swarm_response;
pub mod swarm_view;
