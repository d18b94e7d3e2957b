//! # Snapshot Tracker
//!
//! A minimal BitTorrent announce tracker built with Rust and the Actix-web framework.
//!
//! ## Overview
//!
//! Peers announce over HTTP. Every accepted announce is written to an ordered
//! key-value store under `info_hash ++ peer_id`, and the reply lists the peers
//! of the same content id read back from the store. There is no in-memory swarm
//! state: each request re-reads the store.
//!
//! ## Features
//!
//! - **Update throttling**: one accepted refresh per peer per request interval
//! - **Lazy expiry**: records older than the freshness window are skipped, never reaped
//! - **Two wire formats**: bencoded replies for `compact=1`, JSON otherwise
//! - **Storage**: SQLite through `sqlx`, or an in-memory ordered map
//! - **Hardening**: per-key write serialization of the throttle check
//! - **Monitoring**: console counters and optional Sentry integration
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use snapshot_tracker::config::structs::configuration::Configuration;
//! use snapshot_tracker::store::structs::store_connector::StoreConnector;
//! use snapshot_tracker::tracker::structs::peer_tracker::PeerTracker;
//!
//! let config = Arc::new(Configuration::load_from_file("config.toml", false)?);
//! let store = StoreConnector::connect(&config.store).await?;
//! let tracker = Arc::new(PeerTracker::new(config, store));
//! ```
//!
//! ## Modules
//!
//! - [`common`] - Query parsing, remote address parsing, logging setup and errors
//! - [`config`] - Configuration management and TOML parsing
//! - [`http`] - HTTP/HTTPS announce endpoint
//! - [`stats`] - Basic atomic counters
//! - [`store`] - Ordered key-value peer store (SQLite, memory)
//! - [`structs`] - CLI argument parsing
//! - [`tracker`] - Announce codec and state machine

/// Common utilities and shared functionality.
///
/// Contains helper functions for query parsing, remote address parsing,
/// logging setup, and error handling used across all modules.
pub mod common;

/// Configuration management module.
///
/// Handles loading, parsing, validating and saving the TOML configuration.
pub mod config;

/// HTTP/HTTPS announce endpoint built on actix-web.
pub mod http;

/// Basic statistics counters.
pub mod stats;

/// Persistent peer store abstraction and its backends.
pub mod store;

/// Command-line interface structures.
pub mod structs;

/// Announce codec and state machine.
///
/// Decodes requests, applies the throttle and stop rules against the store,
/// enumerates the swarm and builds the encoded reply.
pub mod tracker;
