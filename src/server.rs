//! Server wiring: adapters, middleware, the idle-session reaper and the
//! listener.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use http::{header::CONTENT_TYPE, HeaderValue, Method};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::adapters::http::{api_router, AppState};
use crate::adapters::{InMemoryNotifier, InMemorySessionStore, TokioTimerService};
use crate::application::handlers::{HandlerContext, SessionHandler};
use crate::config::{AppConfig, ServerConfig};

/// Builds the handler context on the in-memory adapters.
pub fn in_memory_context(config: &AppConfig) -> HandlerContext {
    HandlerContext::new(
        Arc::new(InMemorySessionStore::new()),
        Arc::new(InMemoryNotifier::new()),
        Arc::new(TokioTimerService::new()),
        config.simulation.clone(),
    )
}

/// The API router with CORS, timeout and request tracing applied.
pub fn app(config: &AppConfig, state: AppState) -> Router {
    let router = api_router(state)
        .layer(cors_layer(&config.server))
        .layer(TimeoutLayer::new(config.server.request_timeout()));

    if config.features.enable_tracing {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    }
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    if origins.is_empty() {
        cors.allow_origin(Any)
    } else {
        cors.allow_origin(origins)
    }
}

/// Ends idle sessions every half idle-timeout, at least once a second.
pub fn spawn_idle_reaper(sessions: Arc<SessionHandler>, max_idle: Duration) {
    let period = (max_idle / 2).max(Duration::from_secs(1));
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            if let Err(err) = sessions.reap_idle(max_idle).await {
                tracing::warn!(error = %err, "idle session sweep failed");
            }
        }
    });
}

/// Binds the listener and serves until Ctrl+C or SIGTERM.
pub async fn run(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let state = AppState::new(in_memory_context(&config));
    spawn_idle_reaper(state.sessions.clone(), config.server.session_idle_timeout());

    let app = app(&config, state);
    let address = config.server.socket_addr()?;
    let listener = TcpListener::bind(address).await?;
    tracing::info!(%address, environment = ?config.server.environment, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => tracing::info!("received Ctrl+C, shutting down"),
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for Ctrl+C");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                tracing::info!("received terminate signal, shutting down");
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
