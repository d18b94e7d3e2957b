use tokio::sync::Mutex;

/// Fixed set of async mutexes serializing the read-check-write of a peer key.
///
/// A key maps to `shards[key[last] % len]`. The last byte belongs to the peer
/// id's random tail, while its first bytes usually carry a client prefix.
#[derive(Debug)]
pub struct KeyLocks {
    pub shards: Vec<Mutex<()>>,
}
