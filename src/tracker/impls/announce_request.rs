use std::collections::HashMap;
use std::str::FromStr;
use crate::common::common::parse_remote_ip;
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::errors::AnnounceError;
use crate::tracker::structs::announce_request::AnnounceRequest;

pub const ID_LENGTH: usize = 20;

impl AnnounceRequest {
    /// Builds a request from decoded query parameters.
    ///
    /// `downloaded`, `uploaded`, `left` and `port` are required integers.
    /// `info_hash` and `peer_id` are taken as raw bytes and only checked by
    /// [`AnnounceRequest::validate`].
    #[tracing::instrument(level = "debug")]
    pub fn decode(query: &HashMap<String, Vec<Vec<u8>>>, remote_addr: Option<&str>) -> Result<AnnounceRequest, AnnounceError>
    {
        fn first<'a>(query: &'a HashMap<String, Vec<Vec<u8>>>, field: &str) -> Option<&'a [u8]> {
            query.get(field)
                .and_then(|values| values.first())
                .map(|value| value.as_slice())
        }

        fn parse_integer<T: FromStr>(query: &HashMap<String, Vec<Vec<u8>>>, field: &str) -> Result<T, AnnounceError> {
            let bytes = first(query, field)
                .ok_or_else(|| AnnounceError::ParseError(format!("missing {}", field)))?;
            std::str::from_utf8(bytes).ok()
                .and_then(|value| value.parse::<T>().ok())
                .ok_or_else(|| AnnounceError::ParseError(format!("invalid {}", field)))
        }

        let downloaded = parse_integer::<i64>(query, "downloaded")?;
        let uploaded = parse_integer::<i64>(query, "uploaded")?;
        let left = parse_integer::<i64>(query, "left")?;
        let port = parse_integer::<u16>(query, "port")?;

        Ok(AnnounceRequest {
            info_hash: first(query, "info_hash").unwrap_or_default().to_vec(),
            peer_id: first(query, "peer_id").unwrap_or_default().to_vec(),
            remote_ip: remote_addr.and_then(parse_remote_ip),
            port,
            event: first(query, "event").map(AnnounceEvent::from_query_value).unwrap_or_default(),
            uploaded,
            downloaded,
            left,
            support_crypto: first(query, "supportcrypto") == Some(b"1".as_slice()),
            compact: first(query, "compact") == Some(b"1".as_slice()),
        })
    }

    pub fn validate(&self) -> Result<(), AnnounceError>
    {
        if self.info_hash.len() != ID_LENGTH {
            return Err(AnnounceError::ValidationError(String::from("invalid infohash")));
        }
        if self.peer_id.len() != ID_LENGTH {
            return Err(AnnounceError::ValidationError(String::from("invalid peer id")));
        }
        Ok(())
    }

    /// Store key of this peer: `info_hash ++ peer_id`.
    pub fn key(&self) -> Vec<u8>
    {
        [self.info_hash.as_slice(), self.peer_id.as_slice()].concat()
    }

    /// First key of this content id's scan window: `info_hash ++ 0^20`.
    pub fn swarm_start_key(&self) -> Vec<u8>
    {
        [self.info_hash.as_slice(), &[0u8; ID_LENGTH]].concat()
    }
}
