mod common;

use chrono::{TimeDelta, Utc};
use proptest::prelude::*;
use snapshot_tracker::store::traits::peer_store::PeerStore;
use snapshot_tracker::tracker::enums::announce_action::AnnounceAction;
use snapshot_tracker::tracker::errors::AnnounceError;
use snapshot_tracker::tracker::structs::announce_request::AnnounceRequest;
use snapshot_tracker::tracker::structs::peer_record::PeerRecord;

#[tokio::test]
async fn test_sqlite_example_swarm() {
    let temp_dir = common::create_temp_dir();
    let tracker = common::create_sqlite_tracker(&temp_dir).await;
    let info_hash = common::random_info_hash();
    let first_peer = common::random_peer_id();
    let second_peer = common::random_peer_id();

    let outcome = tracker.handle_announce(Some("192.168.1.10:51413"), &common::announce_query(&info_hash, &first_peer, 0, "completed")).await;
    assert_eq!(outcome.result.unwrap().0, AnnounceAction::Updated);

    let stored = tracker.store.get(&common::store_key(&info_hash, &first_peer)).await.unwrap().unwrap();
    let record = PeerRecord::from_bytes(&stored).unwrap();
    assert_eq!(record.request.left, 0);
    assert_eq!(record.request.peer_id, first_peer.to_vec());

    let outcome = tracker.handle_announce(Some("192.168.1.11"), &common::announce_query(&info_hash, &second_peer, 5, "")).await;
    let (_, swarm) = outcome.result.unwrap();
    assert_eq!(swarm.complete, 1);
    assert_eq!(swarm.incomplete, 1);
    assert_eq!(swarm.peers.len(), 2);
}

#[tokio::test]
async fn test_sqlite_throttle_keeps_first_record() {
    let temp_dir = common::create_temp_dir();
    let tracker = common::create_sqlite_tracker(&temp_dir).await;
    let info_hash = common::random_info_hash();
    let peer_id = common::random_peer_id();
    let key = common::store_key(&info_hash, &peer_id);
    let now = Utc::now();

    tracker.handle_announce_at(None, &common::announce_query(&info_hash, &peer_id, 10, "started"), now).await.result.unwrap();
    let first = tracker.store.get(&key).await.unwrap();

    let outcome = tracker.handle_announce_at(None, &common::announce_query(&info_hash, &peer_id, 0, "completed"), now + TimeDelta::seconds(10)).await;
    assert!(matches!(outcome.result, Err(AnnounceError::ThrottleRejection)));
    assert_eq!(tracker.store.get(&key).await.unwrap(), first);
}

#[tokio::test]
async fn test_sqlite_stop_removes_record() {
    let temp_dir = common::create_temp_dir();
    let tracker = common::create_sqlite_tracker(&temp_dir).await;
    let info_hash = common::random_info_hash();
    let peer_id = common::random_peer_id();

    tracker.handle_announce(None, &common::announce_query(&info_hash, &peer_id, 0, "started")).await.result.unwrap();
    let (action, swarm) = tracker.handle_announce(None, &common::announce_query(&info_hash, &peer_id, 0, "stopped")).await.result.unwrap();
    assert_eq!(action, AnnounceAction::Removed);
    assert!(swarm.peers.is_empty());
    assert_eq!(tracker.store.get(&common::store_key(&info_hash, &peer_id)).await.unwrap(), None);
}

#[tokio::test]
async fn test_wrong_length_identifiers_do_not_touch_store() {
    let (tracker, store) = common::create_test_tracker();
    let info_hash = common::random_info_hash();
    let peer_id = common::random_peer_id();

    for (hash, peer) in [
        (info_hash[..19].to_vec(), peer_id.to_vec()),
        ([info_hash.as_slice(), &[1]].concat(), peer_id.to_vec()),
        (info_hash.to_vec(), peer_id[..19].to_vec()),
        (info_hash.to_vec(), [peer_id.as_slice(), &[1]].concat()),
    ] {
        let outcome = tracker.handle_announce(None, &common::announce_query(&hash, &peer, 0, "")).await;
        assert!(matches!(outcome.result, Err(AnnounceError::ValidationError(_))));
    }
    assert!(store.is_empty());
}

proptest! {
    #[test]
    fn prop_counts_match_visible_peers(lefts in proptest::collection::vec(0i64..3, 1..20), expired in proptest::collection::vec(any::<bool>(), 20)) {
        let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap();
        runtime.block_on(async {
            let (tracker, _store) = common::create_test_tracker();
            let info_hash = common::random_info_hash();
            let now = Utc::now();
            let mut visible = 0usize;
            let mut seeders = 0u64;

            for (index, left) in lefts.iter().enumerate() {
                let mut peer_id = common::random_peer_id();
                peer_id[19] = index as u8;
                let at = if expired[index] { now - TimeDelta::seconds(86_401) } else { now };
                tracker.handle_announce_at(None, &common::announce_query(&info_hash, &peer_id, *left, ""), at).await.result.unwrap();
                if !expired[index] {
                    visible += 1;
                    if *left == 0 {
                        seeders += 1;
                    }
                }
            }

            let request = AnnounceRequest::decode(&common::announce_query(&info_hash, &common::random_peer_id(), 0, ""), None).unwrap();
            let swarm = tracker.scan_swarm(&request, now).await.unwrap();

            prop_assert_eq!(swarm.peers.len(), visible);
            prop_assert_eq!(swarm.complete, seeders);
            prop_assert_eq!(swarm.complete + swarm.incomplete, swarm.peers.len() as u64);
            prop_assert_eq!(swarm.skipped_expired.len(), lefts.len() - visible);
            Ok(())
        })?;
    }
}
