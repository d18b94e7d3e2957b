use async_trait::async_trait;
use crate::store::errors::StoreError;

/// Callback invoked for every entry visited by [`PeerStore::scan`].
///
/// Returning `false` stops the scan.
pub type ScanVisitor<'a> = dyn FnMut(&[u8], &[u8]) -> bool + Send + 'a;

#[async_trait]
pub trait PeerStore: Send + Sync {
    async fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError>;

    async fn put(&self, key: &[u8], value: &[u8]) -> Result<(), StoreError>;

    async fn delete(&self, key: &[u8]) -> Result<(), StoreError>;

    /// Visits at most `max_count` entries in ascending key order, starting at
    /// the first key greater than or equal to `start_key`.
    async fn scan(
        &self,
        start_key: &[u8],
        max_count: usize,
        visit: &mut ScanVisitor<'_>,
    ) -> Result<(), StoreError>;
}
