use std::sync::atomic::{AtomicI64, Ordering};
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;
use crate::tracker::structs::peer_tracker::PeerTracker;

impl PeerTracker {
    pub async fn get_stats(&self) -> Stats
    {
        Stats {
            started: self.stats.started.load(Ordering::SeqCst),
            tcp4_announces_handled: self.stats.tcp4_announces_handled.load(Ordering::SeqCst),
            tcp4_failure: self.stats.tcp4_failure.load(Ordering::SeqCst),
            tcp4_not_found: self.stats.tcp4_not_found.load(Ordering::SeqCst),
            tcp6_announces_handled: self.stats.tcp6_announces_handled.load(Ordering::SeqCst),
            tcp6_failure: self.stats.tcp6_failure.load(Ordering::SeqCst),
            tcp6_not_found: self.stats.tcp6_not_found.load(Ordering::SeqCst),
            peers_updated: self.stats.peers_updated.load(Ordering::SeqCst),
            peers_removed: self.stats.peers_removed.load(Ordering::SeqCst),
            throttled: self.stats.throttled.load(Ordering::SeqCst),
            skipped_corrupt: self.stats.skipped_corrupt.load(Ordering::SeqCst),
            skipped_expired: self.stats.skipped_expired.load(Ordering::SeqCst),
        }
    }

    pub async fn update_stats(&self, event: StatsEvent, value: i64) -> Stats
    {
        let counter = self.stats_counter(event);
        if value > 0 { counter.fetch_add(value, Ordering::SeqCst); }
        if value < 0 { counter.fetch_sub(-value, Ordering::SeqCst); }
        self.get_stats().await
    }

    pub async fn set_stats(&self, event: StatsEvent, value: i64) -> Stats
    {
        self.stats_counter(event).store(value, Ordering::SeqCst);
        self.get_stats().await
    }

    fn stats_counter(&self, event: StatsEvent) -> &AtomicI64
    {
        match event {
            StatsEvent::Tcp4AnnouncesHandled => &self.stats.tcp4_announces_handled,
            StatsEvent::Tcp4Failure => &self.stats.tcp4_failure,
            StatsEvent::Tcp4NotFound => &self.stats.tcp4_not_found,
            StatsEvent::Tcp6AnnouncesHandled => &self.stats.tcp6_announces_handled,
            StatsEvent::Tcp6Failure => &self.stats.tcp6_failure,
            StatsEvent::Tcp6NotFound => &self.stats.tcp6_not_found,
            StatsEvent::PeersUpdated => &self.stats.peers_updated,
            StatsEvent::PeersRemoved => &self.stats.peers_removed,
            StatsEvent::Throttled => &self.stats.throttled,
            StatsEvent::SkippedCorrupt => &self.stats.skipped_corrupt,
            StatsEvent::SkippedExpired => &self.stats.skipped_expired,
        }
    }
}
