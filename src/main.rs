use std::net::SocketAddr;
use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use futures_util::future::try_join_all;
use log::{error, info};
use parking_lot::deadlock;
use sentry::ClientInitGuard;
use tokio::runtime::Builder;
use tokio_shutdown::Shutdown;
use snapshot_tracker::common::common::setup_logging;
use snapshot_tracker::config::structs::configuration::Configuration;
use snapshot_tracker::http::http::http_service;
use snapshot_tracker::store::structs::store_connector::StoreConnector;
use snapshot_tracker::structs::Cli;
use snapshot_tracker::tracker::structs::peer_tracker::PeerTracker;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let mut config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => config,
        Err(_) => exit(101)
    };
    if let Some(store_path) = args.store_path.clone() {
        config.store.path = store_path;
    }
    let config = Arc::new(config);

    setup_logging(&config);

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let _sentry_guard: Option<ClientInitGuard> = if config.sentry_config.enabled {
        Some(sentry::init((config.sentry_config.dsn.clone(), sentry::ClientOptions {
            release: sentry::release_name!(),
            debug: config.sentry_config.debug,
            sample_rate: config.sentry_config.sample_rate,
            max_breadcrumbs: config.sentry_config.max_breadcrumbs,
            attach_stacktrace: config.sentry_config.attach_stacktrace,
            send_default_pii: config.sentry_config.send_default_pii,
            traces_sample_rate: config.sentry_config.traces_sample_rate,
            ..Default::default()
        })))
    } else {
        None
    };

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let store = match StoreConnector::connect(&config.store).await {
                Ok(store) => store,
                Err(error) => {
                    error!("[BOOT] Unable to open the peer store: {}", error);
                    exit(1);
                }
            };
            let tracker = Arc::new(PeerTracker::new(config.clone(), store));

            let tokio_shutdown = match Shutdown::new() {
                Ok(shutdown) => shutdown,
                Err(error) => {
                    error!("[BOOT] Unable to install the shutdown handler: {:?}", error);
                    exit(1);
                }
            };

            let deadlocks_handler = tokio_shutdown.clone();
            tokio::spawn(async move {
                info!("[BOOT] Starting thread for deadlocks...");
                let mut interval = tokio::time::interval(Duration::from_secs(30));
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            let deadlocks = deadlock::check_deadlock();
                            if !deadlocks.is_empty() {
                                info!("[DEADLOCK] Found {} deadlocks", deadlocks.len());
                                for (i, threads) in deadlocks.iter().enumerate() {
                                    info!("[DEADLOCK] #{i}");
                                    for t in threads {
                                        info!("[DEADLOCK] Thread ID: {:#?}", t.thread_id());
                                        sentry::capture_message(&format!("{:#?}", t.backtrace()), sentry::Level::Error);
                                    }
                                }
                            }
                        }
                        _ = deadlocks_handler.handle() => {
                            info!("[BOOT] Shutting down thread for deadlocks...");
                            return;
                        }
                    }
                }
            });

            let mut http_handles = Vec::new();
            let mut http_futures = Vec::new();
            for http_server_object in &config.http_server {
                if !http_server_object.enabled {
                    continue;
                }
                let address: SocketAddr = match http_server_object.bind_address.parse() {
                    Ok(address) => address,
                    Err(error) => {
                        error!("[BOOT] Invalid bind address {}: {}", http_server_object.bind_address, error);
                        exit(1);
                    }
                };
                match http_service(address, tracker.clone(), http_server_object.clone()).await {
                    Ok((handle, future)) => {
                        http_handles.push(handle);
                        http_futures.push(future);
                    }
                    Err(error) => {
                        error!("[BOOT] Unable to start HTTP server on {}: {}", address, error);
                        exit(1);
                    }
                }
            }

            if !http_futures.is_empty() {
                tokio::spawn(async move {
                    if let Err(error) = try_join_all(http_futures).await {
                        sentry::capture_error(&error);
                        error!("[HTTP] Server stopped with error: {}", error);
                    }
                });
            }

            let stats_handler = tokio_shutdown.clone();
            let tracker_spawn_stats = tracker.clone();
            let console_interval = tracker_spawn_stats.config.log_console_interval.max(1);
            info!("[BOOT] Starting thread for console updates with {console_interval} seconds delay...");

            tokio::spawn(async move {
                let mut interval = tokio::time::interval(Duration::from_secs(console_interval));
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            let stats = tracker_spawn_stats.get_stats().await;
                            info!(
                                "[STATS] Updated: {} - Removed: {} - Throttled: {} - Skipped corrupt: {} - Skipped expired: {}",
                                stats.peers_updated, stats.peers_removed, stats.throttled,
                                stats.skipped_corrupt, stats.skipped_expired
                            );
                            info!(
                                "[STATS TCP] IPv4: A:{} F:{} 404:{} | IPv6: A:{} F:{} 404:{}",
                                stats.tcp4_announces_handled, stats.tcp4_failure, stats.tcp4_not_found,
                                stats.tcp6_announces_handled, stats.tcp6_failure, stats.tcp6_not_found
                            );
                        }
                        _ = stats_handler.handle() => {
                            info!("[BOOT] Shutting down thread for console updates...");
                            return;
                        }
                    }
                }
            });

            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    info!("Shutdown request received, shutting down...");
                }
                _ = tokio_shutdown.handle() => {
                    info!("Shutdown request received, shutting down...");
                }
            }

            for handle in http_handles {
                handle.stop(true).await;
            }

            info!("Server shutting down completed");
            Ok(())
        })
}
