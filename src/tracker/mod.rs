//! Announce handling.
//!
//! This module holds the wire types of an announce exchange and the state
//! machine that turns one decoded request into a store mutation plus a swarm
//! view.
//!
//! # Flow
//!
//! `Received → Parsed → Validated → {Stopped | Throttled | Updated} → Responded`
//!
//! - Decode the query into an `AnnounceRequest` (`ParseError` on bad integers)
//! - Validate both identifiers are 20 bytes (`ValidationError`)
//! - `stopped` deletes the record at `info_hash ++ peer_id`
//! - any other event is refused with `"too early to update"` when the stored
//!   record is younger than the request interval, else the record is rewritten
//! - the swarm is read back with a bounded scan starting at `info_hash ++ 0^20`,
//!   skipping corrupt records and records older than the freshness window
//!
//! Every request re-reads the store. No peer state is cached in memory.
//!
//! # Concurrency
//!
//! The read-check-write of one key runs under a `KeyLocks` shard when
//! `serialize_updates` is enabled, so two concurrent announces of the same
//! peer cannot both pass the throttle check.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use snapshot_tracker::tracker::structs::peer_tracker::PeerTracker;
//!
//! let tracker = PeerTracker::new(Arc::new(config), store);
//! let outcome = tracker.handle_announce(Some("10.0.0.1:6881"), &query).await;
//! let body = tracker.announce_response(&outcome).encode(outcome.compact);
//! ```

/// Enumerations for announce events, actions and responses.
pub mod enums;

/// Error type for the announce flow.
pub mod errors;

/// Implementation blocks for the announce types and the state machine.
pub mod impls;

/// Data structures for requests, records, swarm views and responses.
pub mod structs;
