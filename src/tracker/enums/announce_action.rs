/// Store mutation performed by an accepted announce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnounceAction {
    Removed,
    Updated,
}
