//! Persistent peer store.
//!
//! The tracker keeps every peer record in an ordered key-value table keyed by
//! raw bytes (`info_hash ++ peer_id`). This module defines the contract the
//! announce handling relies on and the backends that fulfil it.
//!
//! # Architecture
//!
//! - `PeerStore` trait: point `get`/`put`/`delete` and a bounded ascending `scan`
//! - `MemoryStore`: a `BTreeMap` behind a `parking_lot` lock, used for tests and
//!   volatile deployments
//! - `SqliteStore`: a single SQLite table accessed through a `sqlx` pool, keys
//!   stored as `BLOB` so ordering is bytewise
//! - `StoreConnector`: builds the configured backend
//!
//! # Example
//!
//! ```rust,ignore
//! use snapshot_tracker::store::structs::store_connector::StoreConnector;
//!
//! let store = StoreConnector::connect(&config.store).await?;
//! store.put(b"key", b"value").await?;
//! ```

/// Store engine enumeration (memory, sqlite3).
pub mod enums;

/// Error types for store operations.
pub mod errors;

/// Implementation blocks for the store backends.
pub mod impls;

/// Data structures for the store backends.
pub mod structs;

/// The peer store trait.
pub mod traits;
