use tokio::sync::{Mutex, MutexGuard};
use crate::tracker::structs::key_locks::KeyLocks;

impl KeyLocks {
    #[tracing::instrument(level = "debug")]
    pub fn new(shards: u64) -> KeyLocks {
        let count = shards.max(1) as usize;
        KeyLocks {
            shards: (0..count).map(|_| Mutex::new(())).collect(),
        }
    }

    pub fn shard_index(&self, key: &[u8]) -> usize {
        key.last().copied().unwrap_or_default() as usize % self.shards.len()
    }

    pub async fn lock(&self, key: &[u8]) -> MutexGuard<'_, ()> {
        self.shards[self.shard_index(key)].lock().await
    }
}
