use std::fs::File;
use std::io::BufReader;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use actix_cors::Cors;
use actix_web::{App, http, HttpRequest, HttpResponse, HttpServer, web};
use actix_web::dev::{Server, ServerHandle};
use actix_web::http::header::ContentType;
use actix_web::web::{Data, ServiceConfig};
use bip_bencode::{ben_bytes, ben_map};
use log::{debug, error, info, warn};
use crate::common::common::{parse_query, parse_remote_ip};
use crate::config::structs::http_trackers_config::HttpTrackersConfig;
use crate::http::structs::http_service_data::HttpServiceData;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::enums::announce_action::AnnounceAction;
use crate::tracker::errors::AnnounceError;
use crate::tracker::structs::announce_outcome::AnnounceOutcome;
use crate::tracker::structs::peer_tracker::PeerTracker;

pub fn http_service_cors() -> Cors
{
    Cors::default()
        .send_wildcard()
        .allowed_methods(vec!["GET"])
        .allowed_headers(vec![http::header::X_FORWARDED_FOR, http::header::ACCEPT])
        .allowed_header(http::header::CONTENT_TYPE)
        .max_age(1)
}

pub fn http_service_routes(data: Arc<HttpServiceData>) -> Box<dyn Fn(&mut ServiceConfig)>
{
    Box::new(move |cfg: &mut ServiceConfig| {
        cfg.app_data(Data::new(data.clone()));
        cfg.service(web::resource("/announce").route(web::get().to(http_service_announce)));
        cfg.default_service(web::route().to(http_service_not_found));
    })
}

fn http_service_tls_config(http_server_object: &HttpTrackersConfig) -> Result<rustls::ServerConfig, std::io::Error>
{
    if http_server_object.ssl_key.is_empty() || http_server_object.ssl_cert.is_empty() {
        return Err(std::io::Error::other("no SSL key or SSL certificate given"));
    }

    let key_file = &mut BufReader::new(File::open(&http_server_object.ssl_key)?);
    let certs_file = &mut BufReader::new(File::open(&http_server_object.ssl_cert)?);

    let tls_certs = rustls_pemfile::certs(certs_file).collect::<Result<Vec<_>, _>>()?;
    let tls_key = rustls_pemfile::private_key(key_file)?
        .ok_or_else(|| std::io::Error::other("no private key found in SSL key file"))?;

    rustls::ServerConfig::builder()
        .with_no_client_auth()
        .with_single_cert(tls_certs, tls_key)
        .map_err(std::io::Error::other)
}

/// Binds one configured server instance. The returned future runs it until
/// the handle is stopped.
pub async fn http_service(
    addr: SocketAddr,
    data: Arc<PeerTracker>,
    http_server_object: HttpTrackersConfig
) -> Result<(ServerHandle, Server), std::io::Error>
{
    let keep_alive = http_server_object.keep_alive;
    let request_timeout = http_server_object.request_timeout;
    let disconnect_timeout = http_server_object.disconnect_timeout;
    let worker_threads = http_server_object.threads.max(1) as usize;
    let ssl = http_server_object.ssl;

    let service_data = Arc::new(HttpServiceData {
        peer_tracker: data,
        http_trackers_config: Arc::new(http_server_object.clone()),
    });

    let server = HttpServer::new(move || {
        App::new()
            .wrap(http_service_cors())
            .configure(http_service_routes(service_data.clone()))
    })
        .keep_alive(Duration::from_secs(keep_alive))
        .client_request_timeout(Duration::from_secs(request_timeout))
        .client_disconnect_timeout(Duration::from_secs(disconnect_timeout))
        .workers(worker_threads);

    let server = if ssl {
        info!("[HTTP] Starting server listener with SSL on {}", addr);
        let tls_config = http_service_tls_config(&http_server_object)?;
        server.bind_rustls_0_23((addr.ip(), addr.port()), tls_config)?
    } else {
        info!("[HTTP] Starting server listener on {}", addr);
        server.bind((addr.ip(), addr.port()))?
    };

    let server = server.disable_signals().run();
    Ok((server.handle(), server))
}

pub async fn http_service_announce(request: HttpRequest, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    let remote_addr = http_service_retrieve_remote_addr(&request, &data.http_trackers_config);
    let remote_ip = remote_addr.as_deref().and_then(parse_remote_ip);
    let tracker = data.peer_tracker.clone();

    debug!("[HTTP] Request from {}: {}", remote_addr.as_deref().unwrap_or("unknown"), request.uri());

    http_service_stats(&tracker, remote_ip, StatsEvent::Tcp4AnnouncesHandled, StatsEvent::Tcp6AnnouncesHandled).await;

    let query_map = parse_query(Some(request.query_string().to_string()));
    let outcome = tracker.handle_announce(remote_addr.as_deref(), &query_map).await;

    http_service_record_outcome(&tracker, remote_ip, &outcome).await;

    let body = tracker.announce_response(&outcome).encode(outcome.compact);
    let content_type = if outcome.compact { ContentType::plaintext() } else { ContentType::json() };
    HttpResponse::Ok().content_type(content_type).body(body)
}

pub async fn http_service_not_found(request: HttpRequest, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    let remote_addr = http_service_retrieve_remote_addr(&request, &data.http_trackers_config);
    let remote_ip = remote_addr.as_deref().and_then(parse_remote_ip);

    debug!("[HTTP] Request from {}: 404 Not Found", remote_addr.as_deref().unwrap_or("unknown"));

    http_service_stats(&data.peer_tracker, remote_ip, StatsEvent::Tcp4NotFound, StatsEvent::Tcp6NotFound).await;

    HttpResponse::NotFound().content_type(ContentType::plaintext()).body(ben_map! {
        "failure reason" => ben_bytes!("unknown request")
    }.encode())
}

/// Address of the client, read from the configured real-ip header when set,
/// otherwise from the socket. A header that is not a readable IP address
/// falls back to the socket address.
pub fn http_service_retrieve_remote_addr(request: &HttpRequest, http_server_object: &HttpTrackersConfig) -> Option<String>
{
    if !http_server_object.real_ip.is_empty() {
        if let Some(header) = request.headers().get(http_server_object.real_ip.as_str()) {
            match header.to_str() {
                Ok(value) if parse_remote_ip(value).is_some() => return Some(value.to_string()),
                _ => debug!("[HTTP] Ignoring unusable {} header: {:?}", http_server_object.real_ip, header),
            }
        }
    }
    request.peer_addr().map(|addr| addr.to_string())
}

async fn http_service_stats(tracker: &PeerTracker, remote_ip: Option<IpAddr>, v4_event: StatsEvent, v6_event: StatsEvent)
{
    match remote_ip {
        Some(IpAddr::V6(_)) => { tracker.update_stats(v6_event, 1).await; }
        _ => { tracker.update_stats(v4_event, 1).await; }
    }
}

/// Logs and counts what one announce did.
pub async fn http_service_record_outcome(tracker: &PeerTracker, remote_ip: Option<IpAddr>, outcome: &AnnounceOutcome)
{
    match &outcome.result {
        Ok((action, swarm)) => {
            match action {
                AnnounceAction::Updated => { tracker.update_stats(StatsEvent::PeersUpdated, 1).await; }
                AnnounceAction::Removed => { tracker.update_stats(StatsEvent::PeersRemoved, 1).await; }
            }
            for key in swarm.skipped_corrupt.iter() {
                error!("[ANNOUNCE] Fail to decode peer record {}", hex::encode(key));
            }
            for (key, updated_at) in swarm.skipped_expired.iter() {
                info!("[ANNOUNCE] Skipped peer record {} last updated {}", hex::encode(key), updated_at);
            }
            if !swarm.skipped_corrupt.is_empty() {
                tracker.update_stats(StatsEvent::SkippedCorrupt, swarm.skipped_corrupt.len() as i64).await;
            }
            if !swarm.skipped_expired.is_empty() {
                tracker.update_stats(StatsEvent::SkippedExpired, swarm.skipped_expired.len() as i64).await;
            }
        }
        Err(AnnounceError::ThrottleRejection) => {
            debug!("[ANNOUNCE] Too early to update peer from {:?}", remote_ip);
            tracker.update_stats(StatsEvent::Throttled, 1).await;
        }
        Err(announce_error) => {
            match announce_error {
                AnnounceError::StoreError(_) | AnnounceError::SerializationError(_) => {
                    error!("[ANNOUNCE] Request from {:?} failed: {}", remote_ip, announce_error);
                }
                _ => {
                    warn!("[ANNOUNCE] Request from {:?} rejected: {}", remote_ip, announce_error);
                }
            }
            http_service_stats(tracker, remote_ip, StatsEvent::Tcp4Failure, StatsEvent::Tcp6Failure).await;
        }
    }
}
