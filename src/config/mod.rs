//! Configuration management module.
//!
//! This module handles loading, parsing, and validating the tracker configuration
//! from TOML files.
//!
//! # Configuration Structure
//!
//! The configuration file (`config.toml` by default) contains sections for:
//! - **tracker_config**: announce interval, freshness window, scan cap, tracker id
//! - **store**: peer store engine, location and table name
//! - **http_server**: HTTP/HTTPS server instances
//! - **sentry_config**: error reporting
//!
//! # Example
//!
//! ```rust,ignore
//! use snapshot_tracker::config::structs::configuration::Configuration;
//!
//! // Load configuration from file, creating a default one when missing
//! let config = Configuration::load_from_file("config.toml", true)?;
//! ```

/// Configuration enumerations.
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;

/// Unit tests for configuration handling.
#[cfg(test)]
mod tests;
