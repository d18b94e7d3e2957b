use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use fern::colors::{Color, ColoredLevelConfig};
use log::info;
use crate::config::structs::configuration::Configuration;

/// Splits a raw query string into lowercase keys and their percent-decoded
/// byte values, keeping every occurrence of a repeated key in order.
///
/// Values are decoded the way HTML forms encode them: `+` becomes a space
/// before percent escapes are resolved, and no UTF-8 validation is applied.
pub fn parse_query(query: Option<String>) -> HashMap<String, Vec<Vec<u8>>> {
    let mut queries: HashMap<String, Vec<Vec<u8>>> = HashMap::new();
    let Some(raw_query) = query else {
        return queries;
    };
    for query_item in raw_query.split('&') {
        if query_item.is_empty() {
            continue;
        }
        let mut parts = query_item.splitn(2, '=');
        let key_name_raw = parts.next().unwrap_or_default();
        let key_name = String::from_utf8_lossy(&decode_component(key_name_raw)).to_lowercase();
        if key_name.is_empty() {
            continue;
        }
        let entry = queries.entry(key_name).or_default();
        if let Some(value_data_raw) = parts.next() {
            entry.push(decode_component(value_data_raw));
        }
    }
    queries
}

fn decode_component(raw: &str) -> Vec<u8> {
    let spaced = raw.replace('+', " ");
    percent_encoding::percent_decode_str(&spaced).collect::<Vec<u8>>()
}

/// Extracts the client IP from a remote address that may carry a port.
///
/// Accepts `1.2.3.4`, `1.2.3.4:5678`, `::1` and `[::1]:5678`.
pub fn parse_remote_ip(remote_addr: &str) -> Option<IpAddr> {
    let remote_addr = remote_addr.trim();
    if let Ok(socket_addr) = SocketAddr::from_str(remote_addr) {
        return Some(socket_addr.ip());
    }
    if let Ok(ip) = IpAddr::from_str(remote_addr.trim_start_matches('[').trim_end_matches(']')) {
        return Some(ip);
    }
    match remote_addr.rsplit_once(':') {
        Some((host, _port)) => IpAddr::from_str(host.trim_start_matches('[').trim_end_matches(']')).ok(),
        None => None,
    }
}

pub fn setup_logging(config: &Configuration)
{
    let level = match config.log_level.as_str() {
        "off" => log::LevelFilter::Off,
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => {
            panic!("Unknown log level encountered: '{}'", config.log_level.as_str());
        }
    };

    let colors = ColoredLevelConfig::new()
        .trace(Color::Cyan)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    if let Err(_err) = fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{:width$}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                colors.color(record.level()),
                record.target(),
                message,
                width = 5
            ))
        })
        .level(level)
        .level_for("sqlx", log::LevelFilter::Warn)
        .chain(std::io::stdout())
        .apply()
    {
        panic!("Failed to initialize logging.")
    }
    info!("logging initialized.");
}

/// Serde adapter storing raw byte strings as standard base64 text.
pub mod serde_base64 {
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        STANDARD.decode(encoded.as_bytes()).map_err(serde::de::Error::custom)
    }
}
