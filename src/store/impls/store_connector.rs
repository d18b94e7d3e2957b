use std::sync::Arc;
use log::info;
use crate::config::structs::store_config::StoreConfig;
use crate::store::enums::store_engine::StoreEngine;
use crate::store::errors::StoreError;
use crate::store::structs::memory_store::MemoryStore;
use crate::store::structs::sqlite_store::SqliteStore;
use crate::store::structs::store_connector::StoreConnector;
use crate::store::traits::peer_store::PeerStore;

impl StoreConnector {
    #[tracing::instrument(level = "debug")]
    pub async fn connect(config: &StoreConfig) -> Result<Arc<dyn PeerStore>, StoreError> {
        match config.engine {
            StoreEngine::memory => {
                info!("[BOOT] Using the in-memory peer store, records are lost on shutdown");
                Ok(Arc::new(MemoryStore::new()))
            }
            StoreEngine::sqlite3 => {
                info!("[BOOT] Connecting to the SQLite peer store at {}", config.path);
                Ok(Arc::new(SqliteStore::connect(config).await?))
            }
        }
    }
}
