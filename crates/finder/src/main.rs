//! Petal Finder - Birth control finder quiz.
//!
//! This binary serves the public quiz on port 3000.
//!
//! # Architecture
//!
//! - Axum web framework with classic form posts (no client-side JS)
//! - Askama templates for server-side rendering
//! - `petal-core` for the recommendation rules
//! - In-memory sessions keyed by a browser cookie
//!
//! # Privacy
//!
//! Quiz answers are medical information. They live in the server-side
//! session only, are never logged or persisted, and every page is served
//! with `Cache-Control: no-store`. Consultation contact details are
//! logged for the intake team; note text is not.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::net::SocketAddr;

use axum::{Router, routing::get};
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;

mod config;
mod error;
mod filters;
mod middleware;
mod models;
mod routes;
mod state;

use config::FinderConfig;
use sentry::integrations::tracing as sentry_tracing;
use state::AppState;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Set up Sentry when a DSN is configured.
///
/// The returned guard has to stay alive for the life of the process or
/// buffered events are dropped.
fn init_sentry(config: &FinderConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: config
                .sentry_environment
                .clone()
                .map(std::borrow::Cow::Owned),
            sample_rate: config.sentry_sample_rate,
            traces_sample_rate: config.sentry_traces_sample_rate,
            attach_stacktrace: true,
            // send_default_pii stays off; this service handles health data
            ..Default::default()
        },
    ));

    tracing::info!("Sentry error tracking enabled");
    Some(guard)
}

/// Map tracing levels onto Sentry events and breadcrumbs.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

#[tokio::main]
async fn main() {
    // Config comes first; Sentry wants its DSN before the subscriber exists
    let config = FinderConfig::from_env().expect("Failed to load finder configuration");
    let _sentry_guard = init_sentry(&config);

    // RUST_LOG wins when set, otherwise default to info for this crate
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "petal_finder=info,tower_http=debug".into());

    // Fly's log shipper wants JSON; local dev gets plain text
    let is_fly = std::env::var("FLY_APP_NAME").is_ok();
    let json_layer = is_fly.then(|| tracing_subscriber::fmt::layer().json().flatten_event(true));
    let text_layer = (!is_fly).then(tracing_subscriber::fmt::layer);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();

    let state = AppState::new(config.clone());

    // In-memory session store; quiz state does not survive a restart
    let session_layer = middleware::create_session_layer(state.config());

    let app = Router::new()
        .route("/health", get(health))
        .merge(routes::routes())
        // Pages carry the no-store policy; hashed static assets stay cacheable
        .layer(axum::middleware::from_fn(
            middleware::security_headers_middleware,
        ))
        .nest_service("/static", ServeDir::new("crates/finder/static"))
        .layer(session_layer)
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = tracing::field::Empty,
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &Span| {
                        span.record("status", response.status().as_u16());
                        span.record("latency_ms", latency.as_millis() as u64);
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
        .with_state(state)
        // Sentry hub and transaction layers wrap everything else
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction());

    let addr = config.socket_addr();
    tracing::info!("finder listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");

    // The rate limiter keys on the peer address, which needs connect info
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .expect("Server error");
}

/// Liveness probe. The finder has no backing services to check.
async fn health() -> &'static str {
    "ok"
}

/// Resolve on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received; draining connections");
}
