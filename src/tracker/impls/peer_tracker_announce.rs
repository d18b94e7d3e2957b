use std::collections::HashMap;
use chrono::{DateTime, Utc};
use log::debug;
use crate::tracker::enums::announce_action::AnnounceAction;
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::enums::announce_response::AnnounceResponse;
use crate::tracker::errors::AnnounceError;
use crate::tracker::impls::peer_record::seconds;
use crate::tracker::structs::announce_outcome::AnnounceOutcome;
use crate::tracker::structs::announce_request::AnnounceRequest;
use crate::tracker::structs::peer_record::PeerRecord;
use crate::tracker::structs::peer_tracker::PeerTracker;
use crate::tracker::structs::swarm_view::SwarmView;

impl PeerTracker {
    pub async fn handle_announce(&self, remote_addr: Option<&str>, query: &HashMap<String, Vec<Vec<u8>>>) -> AnnounceOutcome
    {
        self.handle_announce_at(remote_addr, query, Utc::now()).await
    }

    /// Runs one announce against the store as seen at `now`.
    #[tracing::instrument(level = "debug", skip(self, query))]
    pub async fn handle_announce_at(&self, remote_addr: Option<&str>, query: &HashMap<String, Vec<Vec<u8>>>, now: DateTime<Utc>) -> AnnounceOutcome
    {
        let request = match AnnounceRequest::decode(query, remote_addr) {
            Ok(request) => request,
            Err(error) => {
                return AnnounceOutcome {
                    compact: false,
                    result: Err(error),
                };
            }
        };
        AnnounceOutcome {
            compact: request.compact,
            result: self.announce(&request, now).await,
        }
    }

    pub async fn announce(&self, request: &AnnounceRequest, now: DateTime<Utc>) -> Result<(AnnounceAction, SwarmView), AnnounceError>
    {
        request.validate()?;
        let key = request.key();

        let action = if self.config.tracker_config.serialize_updates {
            let _guard = self.key_locks.lock(&key).await;
            self.apply_event(request, &key, now).await?
        } else {
            self.apply_event(request, &key, now).await?
        };

        let swarm = self.scan_swarm(request, now).await?;
        Ok((action, swarm))
    }

    async fn apply_event(&self, request: &AnnounceRequest, key: &[u8], now: DateTime<Utc>) -> Result<AnnounceAction, AnnounceError>
    {
        if request.event == AnnounceEvent::Stopped {
            debug!("[ANNOUNCE] Removing peer {}", hex::encode(key));
            self.store.delete(key).await?;
            return Ok(AnnounceAction::Removed);
        }

        let record_bytes = PeerRecord::new(request.clone(), now).to_bytes()?;

        if let Some(prior_bytes) = self.store.get(key).await? {
            match PeerRecord::from_bytes(&prior_bytes) {
                Ok(prior) => {
                    if prior.age(now) < seconds(self.config.tracker_config.request_interval) {
                        return Err(AnnounceError::ThrottleRejection);
                    }
                }
                Err(error) => {
                    debug!("[ANNOUNCE] Overwriting unreadable record {}: {}", hex::encode(key), error);
                }
            }
        }

        self.store.put(key, &record_bytes).await?;
        Ok(AnnounceAction::Updated)
    }

    /// Reads the swarm of the request's content id.
    ///
    /// The scan starts at `info_hash ++ 0^20`, visits at most
    /// `peers_scan_limit` entries and stops at the first key of another
    /// content id.
    pub async fn scan_swarm(&self, request: &AnnounceRequest, now: DateTime<Utc>) -> Result<SwarmView, AnnounceError>
    {
        let tracker_config = &self.config.tracker_config;
        let peers_timeout = seconds(tracker_config.peers_timeout);
        let scan_limit = usize::try_from(tracker_config.peers_scan_limit).unwrap_or(usize::MAX);
        let info_hash = request.info_hash.as_slice();

        let mut swarm = SwarmView::default();
        self.store.scan(&request.swarm_start_key(), scan_limit, &mut |key, value| {
            if !key.starts_with(info_hash) {
                return false;
            }
            match PeerRecord::from_bytes(value) {
                Err(_) => swarm.skipped_corrupt.push(key.to_vec()),
                Ok(record) if record.age(now) > peers_timeout => {
                    swarm.skipped_expired.push((key.to_vec(), record.updated_at));
                }
                Ok(record) => swarm.push_record(&record),
            }
            true
        }).await?;

        debug!("[ANNOUNCE] Swarm {} complete {} incomplete {}", hex::encode(info_hash), swarm.complete, swarm.incomplete);
        Ok(swarm)
    }

    /// Builds the reply for an outcome with the configured interval and tracker id.
    pub fn announce_response(&self, outcome: &AnnounceOutcome) -> AnnounceResponse
    {
        match &outcome.result {
            Ok((_, swarm)) => AnnounceResponse::swarm(
                self.config.tracker_config.request_interval,
                &self.config.tracker_config.tracker_id,
                swarm.clone(),
            ),
            Err(error) => AnnounceResponse::failure(&error.to_string()),
        }
    }
}
