use crate::tracker::enums::announce_action::AnnounceAction;
use crate::tracker::errors::AnnounceError;
use crate::tracker::structs::swarm_view::SwarmView;

/// Structured result of one announce, handed to the transport for logging
/// and encoding.
#[derive(Debug)]
pub struct AnnounceOutcome {
    /// `false` when the request could not be decoded.
    pub compact: bool,
    pub result: Result<(AnnounceAction, SwarmView), AnnounceError>,
}
