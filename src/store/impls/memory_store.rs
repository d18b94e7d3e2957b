use std::ops::Bound;
use async_trait::async_trait;
use crate::store::errors::StoreError;
use crate::store::structs::memory_store::MemoryStore;
use crate::store::traits::peer_store::{PeerStore, ScanVisitor};

impl MemoryStore {
    #[tracing::instrument(level = "debug")]
    pub fn new() -> MemoryStore {
        MemoryStore::default()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

#[async_trait]
impl PeerStore for MemoryStore {
    async fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.entries.read().get(key).cloned())
    }

    async fn put(&self, key: &[u8], value: &[u8]) -> Result<(), StoreError> {
        self.entries.write().insert(key.to_vec(), value.to_vec());
        Ok(())
    }

    async fn delete(&self, key: &[u8]) -> Result<(), StoreError> {
        self.entries.write().remove(key);
        Ok(())
    }

    async fn scan(
        &self,
        start_key: &[u8],
        max_count: usize,
        visit: &mut ScanVisitor<'_>,
    ) -> Result<(), StoreError> {
        let lock = self.entries.read();
        let range = lock.range::<[u8], _>((Bound::Included(start_key), Bound::Unbounded));
        for (key, value) in range.take(max_count) {
            if !visit(key, value) {
                break;
            }
        }
        Ok(())
    }
}
