//! Basic tracker counters.
//!
//! Atomic counters updated by the HTTP adapter from each announce outcome and
//! printed periodically by the console loop in `main`.
//!
//! # Counters
//!
//! - announces handled, split by IPv4 and IPv6 clients
//! - failures (any failure reason sent back) and unknown paths
//! - peers updated, peers removed, throttled updates
//! - corrupt and expired records skipped during swarm reads
//!
//! # Example
//!
//! ```rust,ignore
//! use snapshot_tracker::stats::enums::stats_event::StatsEvent;
//!
//! tracker.update_stats(StatsEvent::Tcp4AnnouncesHandled, 1).await;
//! let stats = tracker.get_stats().await;
//! ```

/// Statistics event enumeration.
pub mod enums;

/// Implementation blocks for statistics operations.
pub mod impls;

/// Statistics data structures (atomic counters and snapshots).
pub mod structs;

/// Unit tests for statistics.
#[cfg(test)]
mod tests;
