/// Ordered byte-keyed peer record storage.
pub mod peer_store;
