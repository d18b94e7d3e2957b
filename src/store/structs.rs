/// In-memory ordered store.
pub mod memory_store;

/// SQLite-backed store.
pub mod sqlite_store;

/// Backend factory.
pub mod store_connector;
