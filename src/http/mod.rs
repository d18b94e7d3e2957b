//! HTTP tracker endpoint.
//!
//! Maps each `GET /announce` request onto one `PeerTracker` announce and
//! writes the encoded reply. The status is always `200 OK`. Failures travel
//! in the `failure reason` field only.
//!
//! # Supported Endpoints
//!
//! - `/announce` - Handle peer announcements
//! - anything else - bencoded `failure reason = "unknown request"`
//!
//! # Features
//!
//! - Multiple concurrent HTTP/HTTPS server instances
//! - Bencoded (`compact=1`) or JSON replies
//! - Optional header carrying the real client address for proxied requests
//! - Outcome logging and counters, kept out of the announce core

/// Data structures shared with the request handlers.
pub mod structs;

/// Core HTTP service implementation.
#[allow(clippy::module_inception)]
pub mod http;
