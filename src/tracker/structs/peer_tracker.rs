use std::sync::Arc;
use crate::config::structs::configuration::Configuration;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::store::traits::peer_store::PeerStore;
use crate::tracker::structs::key_locks::KeyLocks;

pub struct PeerTracker {
    pub config: Arc<Configuration>,
    pub store: Arc<dyn PeerStore>,
    pub key_locks: Arc<KeyLocks>,
    pub stats: Arc<StatsAtomics>,
}
