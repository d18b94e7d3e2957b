use std::sync::Arc;
use crate::config::structs::configuration::Configuration;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::store::traits::peer_store::PeerStore;
use crate::tracker::structs::key_locks::KeyLocks;
use crate::tracker::structs::peer_tracker::PeerTracker;

impl PeerTracker {
    #[tracing::instrument(level = "debug", skip(store))]
    pub fn new(config: Arc<Configuration>, store: Arc<dyn PeerStore>) -> PeerTracker
    {
        let key_locks = KeyLocks::new(config.tracker_config.update_locks);
        PeerTracker {
            config,
            store,
            key_locks: Arc::new(key_locks),
            stats: Arc::new(StatsAtomics::new()),
        }
    }
}
