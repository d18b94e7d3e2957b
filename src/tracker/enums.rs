pub mod announce_action;
pub mod announce_event;
pub mod announce_response;
