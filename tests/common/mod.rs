#![allow(dead_code)]
use rand::RngExt;
use std::collections::HashMap;
use std::sync::Arc;
use percent_encoding::{percent_encode, NON_ALPHANUMERIC};
use tempfile::TempDir;
use snapshot_tracker::config::structs::configuration::Configuration;
use snapshot_tracker::config::structs::http_trackers_config::HttpTrackersConfig;
use snapshot_tracker::store::enums::store_engine::StoreEngine;
use snapshot_tracker::store::structs::memory_store::MemoryStore;
use snapshot_tracker::store::structs::store_connector::StoreConnector;
use snapshot_tracker::tracker::structs::peer_tracker::PeerTracker;

pub type TestTracker = Arc<PeerTracker>;
pub type TestConfig = Arc<Configuration>;

pub fn create_test_config() -> Configuration {
    let mut config: Configuration = Configuration::init();
    config.store.engine = StoreEngine::memory;
    config.store.path = String::new();
    config
}

pub fn create_test_http_config() -> Arc<HttpTrackersConfig> {
    Arc::new(HttpTrackersConfig {
        enabled: true,
        bind_address: "127.0.0.1:8080".to_string(),
        real_ip: String::new(),
        keep_alive: 5,
        request_timeout: 10,
        disconnect_timeout: 5,
        threads: 1,
        ssl: false,
        ssl_key: String::new(),
        ssl_cert: String::new(),
    })
}

/// Tracker over a fresh in-memory store. The store handle is returned so tests
/// can look at what was written.
pub fn create_test_tracker() -> (TestTracker, MemoryStore) {
    let store = MemoryStore::new();
    let tracker = PeerTracker::new(Arc::new(create_test_config()), Arc::new(store.clone()));
    (Arc::new(tracker), store)
}

pub async fn create_sqlite_tracker(temp_dir: &TempDir) -> TestTracker {
    let mut config = Configuration::init();
    config.store.engine = StoreEngine::sqlite3;
    config.store.path = format!("sqlite://{}", temp_dir.path().join("peers.db").display());
    let store = StoreConnector::connect(&config.store).await.expect("Failed to open SQLite store");
    Arc::new(PeerTracker::new(Arc::new(config), store))
}

pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

pub fn random_info_hash() -> [u8; 20] {
    let mut rng = rand::rng();
    rng.random()
}

pub fn random_peer_id() -> [u8; 20] {
    let mut rng = rand::rng();
    let mut peer_id: [u8; 20] = rng.random();
    peer_id[..8].copy_from_slice(b"-GT0002-");
    peer_id
}

pub fn store_key(info_hash: &[u8], peer_id: &[u8]) -> Vec<u8> {
    [info_hash, peer_id].concat()
}

pub fn announce_uri(info_hash: &[u8], peer_id: &[u8], left: i64, event: &str, compact: bool) -> String {
    let mut uri = format!(
        "/announce?info_hash={}&peer_id={}&port=6881&uploaded=0&downloaded=0&left={}",
        percent_encode(info_hash, NON_ALPHANUMERIC),
        percent_encode(peer_id, NON_ALPHANUMERIC),
        left
    );
    if !event.is_empty() {
        uri.push_str(&format!("&event={}", event));
    }
    if compact {
        uri.push_str("&compact=1");
    }
    uri
}

pub fn announce_query(info_hash: &[u8], peer_id: &[u8], left: i64, event: &str) -> HashMap<String, Vec<Vec<u8>>> {
    let mut query = HashMap::new();
    query.insert("info_hash".to_string(), vec![info_hash.to_vec()]);
    query.insert("peer_id".to_string(), vec![peer_id.to_vec()]);
    query.insert("port".to_string(), vec![b"6881".to_vec()]);
    query.insert("uploaded".to_string(), vec![b"0".to_vec()]);
    query.insert("downloaded".to_string(), vec![b"0".to_vec()]);
    query.insert("left".to_string(), vec![left.to_string().into_bytes()]);
    if !event.is_empty() {
        query.insert("event".to_string(), vec![event.as_bytes().to_vec()]);
    }
    query
}

pub fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|window| window == needle)
}
