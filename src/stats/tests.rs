mod stats_tests {
    use std::sync::Arc;
    use crate::config::structs::configuration::Configuration;
    use crate::stats::enums::stats_event::StatsEvent;
    use crate::store::structs::memory_store::MemoryStore;
    use crate::tracker::structs::peer_tracker::PeerTracker;

    fn tracker() -> PeerTracker {
        PeerTracker::new(Arc::new(Configuration::default()), Arc::new(MemoryStore::new()))
    }

    #[tokio::test]
    async fn test_fresh_counters_are_zero() {
        let stats = tracker().get_stats().await;
        assert!(stats.started > 0);
        assert_eq!(stats.tcp4_announces_handled, 0);
        assert_eq!(stats.peers_updated, 0);
        assert_eq!(stats.skipped_expired, 0);
    }

    #[tokio::test]
    async fn test_update_stats_adds_and_subtracts() {
        let tracker = tracker();
        tracker.update_stats(StatsEvent::PeersUpdated, 3).await;
        let stats = tracker.update_stats(StatsEvent::PeersUpdated, -1).await;
        assert_eq!(stats.peers_updated, 2);
        assert_eq!(stats.peers_removed, 0);
    }

    #[tokio::test]
    async fn test_set_stats_overwrites() {
        let tracker = tracker();
        tracker.update_stats(StatsEvent::Tcp6NotFound, 5).await;
        let stats = tracker.set_stats(StatsEvent::Tcp6NotFound, 1).await;
        assert_eq!(stats.tcp6_not_found, 1);
    }

    #[test]
    fn test_stats_event_serialization() {
        assert_eq!(serde_json::to_string(&StatsEvent::Throttled).unwrap(), "\"Throttled\"");
    }
}
