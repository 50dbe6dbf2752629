use axum::{
    http::{header, HeaderValue},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::{
    net::SocketAddr,
    path::{Path, PathBuf},
};
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::{
    services::{ServeDir, ServeFile},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::{CatalogError, CATALOG};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DIST_DIR: &str = "dist";
const DEFAULT_ASSET_MAX_AGE_SECONDS: u64 = 3_600;
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_LOG_FORMAT: LogFormat = LogFormat::Json;

const PORT_BOUNDS: (u16, u16) = (1, u16::MAX);
const ASSET_MAX_AGE_SECONDS_BOUNDS: (u64, u64) = (0, 365 * 24 * 60 * 60);
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const INDEX_FILE: &str = "index.html";

#[derive(Debug, Error)]
pub enum HostError {
    #[error("catalog failed validation: {0}")]
    Catalog(#[from] CatalogError),
    #[error("{} has no index.html; run `trunk build --release` first", .0.display())]
    MissingIndex(PathBuf),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("server stopped unexpectedly: {0}")]
    Serve(#[source] std::io::Error),
    #[error("failed to install log subscriber: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LogFormat {
    Json,
    Pretty,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct HostConfig {
    port: u16,
    dist_dir: PathBuf,
    asset_max_age_seconds: u64,
    log_level: String,
    log_format: LogFormat,
}

impl HostConfig {
    fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = parse_u16_with_bounds(lookup("PORT"), DEFAULT_PORT, PORT_BOUNDS);
        let dist_dir = parse_non_empty_string(lookup("DIST_DIR"))
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST_DIR));
        let asset_max_age_seconds = parse_u64_with_bounds(
            lookup("ASSET_MAX_AGE_SECONDS"),
            DEFAULT_ASSET_MAX_AGE_SECONDS,
            ASSET_MAX_AGE_SECONDS_BOUNDS,
        );
        let log_level = parse_log_level(lookup("LOG_LEVEL"));
        let log_format = parse_log_format(lookup("LOG_FORMAT"));

        Self {
            port,
            dist_dir,
            asset_max_age_seconds,
            log_level,
            log_format,
        }
    }
}

fn parse_non_empty_string(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_u16_with_bounds(value: Option<String>, default: u16, bounds: (u16, u16)) -> u16 {
    value
        .and_then(|value| value.trim().parse::<u16>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_u64_with_bounds(value: Option<String>, default: u64, bounds: (u64, u64)) -> u64 {
    value
        .and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_log_level(value: Option<String>) -> String {
    parse_non_empty_string(value)
        .map(|value| value.to_ascii_lowercase())
        .filter(|value| LOG_LEVELS.contains(&value.as_str()))
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
}

fn parse_log_format(value: Option<String>) -> LogFormat {
    match parse_non_empty_string(value)
        .map(|value| value.to_ascii_lowercase())
        .as_deref()
    {
        Some("json") => LogFormat::Json,
        Some("pretty") => LogFormat::Pretty,
        _ => DEFAULT_LOG_FORMAT,
    }
}

/// `RUST_LOG` wins over `LOG_LEVEL` when both are set.
fn init_logging(config: &HostConfig) -> Result<(), HostError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    match config.log_format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_target(false))
            .try_init()?,
        LogFormat::Pretty => registry
            .with(fmt::layer().compact().with_target(false))
            .try_init()?,
    }

    Ok(())
}

fn cache_control(max_age_seconds: u64) -> HeaderValue {
    HeaderValue::from_str(&format!("public, max-age={max_age_seconds}"))
        .unwrap_or_else(|_| HeaderValue::from_static("no-cache"))
}

fn ensure_index(dist_dir: &Path) -> Result<PathBuf, HostError> {
    let index = dist_dir.join(INDEX_FILE);
    if index.is_file() {
        Ok(index)
    } else {
        Err(HostError::MissingIndex(dist_dir.to_path_buf()))
    }
}

#[derive(Serialize)]
struct Health {
    ok: bool,
}

async fn healthz() -> impl IntoResponse {
    (
        [(header::CACHE_CONTROL, HeaderValue::from_static("no-store"))],
        Json(Health { ok: true }),
    )
}

/// Unknown paths fall back to the page shell so in-page anchors survive a
/// reload on any path.
fn router(config: &HostConfig, index: PathBuf) -> Router {
    let static_service = ServeDir::new(&config.dist_dir).not_found_service(ServeFile::new(index));

    Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(static_service)
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CACHE_CONTROL,
            cache_control(config.asset_max_age_seconds),
        ))
        .layer(TraceLayer::new_for_http())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::warn!(event = "signal_listener_failed", error = %error);
        std::future::pending::<()>().await;
    }
    tracing::info!(event = "shutdown_requested");
}

pub async fn run() -> Result<(), HostError> {
    let config = HostConfig::from_env();
    init_logging(&config)?;

    CATALOG.validate()?;
    let index = ensure_index(&config.dist_dir)?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| HostError::Bind { addr, source })?;

    tracing::info!(
        event = "host_listening",
        port = config.port,
        dist_dir = %config.dist_dir.display(),
        asset_max_age_seconds = config.asset_max_age_seconds,
        "serving portfolio on http://127.0.0.1:{}",
        config.port
    );

    axum::serve(listener, router(&config, index))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(HostError::Serve)?;

    tracing::info!(event = "host_stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let values: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |name: &str| values.get(name).cloned()
    }

    fn dist_fixture() -> TempDir {
        let dir = tempfile::tempdir().expect("temp dir");
        std::fs::write(
            dir.path().join(INDEX_FILE),
            "<!doctype html><div id=\"app\"></div>",
        )
        .expect("write index");
        std::fs::write(dir.path().join("app.css"), "body { margin: 0; }").expect("write css");
        dir
    }

    async fn spawn_host(dist: &TempDir) -> SocketAddr {
        let config = HostConfig {
            dist_dir: dist.path().to_path_buf(),
            ..HostConfig::from_lookup(|_| None)
        };
        let index = ensure_index(&config.dist_dir).expect("fixture has an index");
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");
        let app = router(&config, index);

        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        addr
    }

    #[test]
    fn config_defaults_without_environment() {
        let config = HostConfig::from_lookup(|_| None);

        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.dist_dir, PathBuf::from(DEFAULT_DIST_DIR));
        assert_eq!(config.asset_max_age_seconds, DEFAULT_ASSET_MAX_AGE_SECONDS);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn config_reads_trimmed_values() {
        let config = HostConfig::from_lookup(lookup_from(&[
            ("PORT", " 3000 "),
            ("DIST_DIR", "public"),
            ("ASSET_MAX_AGE_SECONDS", "0"),
            ("LOG_LEVEL", "DEBUG"),
            ("LOG_FORMAT", "pretty"),
        ]));

        assert_eq!(config.port, 3000);
        assert_eq!(config.dist_dir, PathBuf::from("public"));
        assert_eq!(config.asset_max_age_seconds, 0);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn out_of_bounds_or_garbage_values_fall_back() {
        let config = HostConfig::from_lookup(lookup_from(&[
            ("PORT", "0"),
            ("DIST_DIR", "   "),
            ("ASSET_MAX_AGE_SECONDS", "999999999999"),
            ("LOG_LEVEL", "loud"),
            ("LOG_FORMAT", "xml"),
        ]));

        assert_eq!(config, HostConfig::from_lookup(|_| None));
    }

    #[test]
    fn cache_control_formats_max_age() {
        assert_eq!(cache_control(3_600), "public, max-age=3600");
    }

    #[test]
    fn missing_index_is_reported() {
        let dir = tempfile::tempdir().expect("temp dir");

        let result = ensure_index(dir.path());

        assert!(matches!(result, Err(HostError::MissingIndex(path)) if path == dir.path()));
    }

    #[tokio::test]
    async fn healthz_reports_ok_without_caching() {
        let dist = dist_fixture();
        let addr = spawn_host(&dist).await;

        let response = reqwest::get(format!("http://{addr}/healthz"))
            .await
            .expect("healthz request");

        assert_eq!(response.status(), reqwest::StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get(reqwest::header::CACHE_CONTROL)
                .and_then(|value| value.to_str().ok()),
            Some("no-store")
        );
        let body: serde_json::Value = response.json().await.expect("json body");
        assert_eq!(body, serde_json::json!({ "ok": true }));
    }

    #[tokio::test]
    async fn assets_are_served_with_max_age() {
        let dist = dist_fixture();
        let addr = spawn_host(&dist).await;

        let response = reqwest::get(format!("http://{addr}/app.css"))
            .await
            .expect("asset request");

        assert_eq!(response.status(), reqwest::StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get(reqwest::header::CACHE_CONTROL)
                .and_then(|value| value.to_str().ok()),
            Some("public, max-age=3600")
        );
        assert_eq!(response.text().await.expect("body"), "body { margin: 0; }");
    }

    #[tokio::test]
    async fn unknown_paths_fall_back_to_the_page_shell() {
        let dist = dist_fixture();
        let addr = spawn_host(&dist).await;

        let body = reqwest::get(format!("http://{addr}/portfolio/anything"))
            .await
            .expect("fallback request")
            .text()
            .await
            .expect("body");

        assert!(body.contains("id=\"app\""));
    }
}
