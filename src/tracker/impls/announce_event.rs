use std::fmt;
use crate::tracker::enums::announce_event::AnnounceEvent;

impl AnnounceEvent {
    /// Maps the raw `event` query value. Anything unrecognized is `Empty`.
    pub fn from_query_value(value: &[u8]) -> AnnounceEvent {
        match value {
            b"started" => AnnounceEvent::Started,
            b"stopped" => AnnounceEvent::Stopped,
            b"completed" => AnnounceEvent::Completed,
            _ => AnnounceEvent::Empty,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AnnounceEvent::Started => "started",
            AnnounceEvent::Stopped => "stopped",
            AnnounceEvent::Completed => "completed",
            AnnounceEvent::Empty => "",
        }
    }
}

impl fmt::Display for AnnounceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
