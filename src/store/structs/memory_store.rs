use std::collections::BTreeMap;
use std::sync::Arc;
use parking_lot::RwLock;

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub(crate) entries: Arc<RwLock<BTreeMap<Vec<u8>, Vec<u8>>>>,
}
