/// Backend selection for the peer store.
pub mod store_engine;
