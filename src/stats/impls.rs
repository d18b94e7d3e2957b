pub mod peer_tracker;
pub mod stats_atomics;
