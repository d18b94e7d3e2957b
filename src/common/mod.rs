//! Common utilities and shared functionality.
//!
//! This module contains helper functions and data structures used across
//! all other modules in the tracker codebase.
//!
//! # Utilities
//!
//! - Query string parsing (raw byte values, `+` as space)
//! - Remote address parsing
//! - Logging setup
//! - Serde helpers for byte strings
//!
//! # Example
//!
//! ```rust
//! use snapshot_tracker::common::common::parse_query;
//!
//! let params = parse_query(Some(String::from("port=6881&compact=1")));
//! assert_eq!(params.get("port"), Some(&vec![b"6881".to_vec()]));
//! ```

/// Common data structures (errors).
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;
