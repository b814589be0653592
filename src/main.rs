//! HTTP service exposing interview sessions.

use std::sync::Arc;
use std::time::Duration;

use axum::http::{HeaderValue, Method};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use hiring_assistant::adapters::http::{interview_router, InterviewAppState};
use hiring_assistant::adapters::session::{EvictionPolicy, InMemorySessionRegistry};
use hiring_assistant::bootstrap::{build_controller, init_tracing};
use hiring_assistant::config::{AppConfig, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.server.log_level, config.is_production());
    config.validate()?;

    let controller = build_controller(&config)?;
    let registry = InMemorySessionRegistry::new();
    let sweeper = registry.spawn_sweeper(
        EvictionPolicy::new(
            config.interview.ended_session_ttl(),
            config.interview.idle_session_ttl(),
        ),
        config.interview.session_sweep_interval(),
    );
    let state = InterviewAppState::new(
        Arc::new(controller),
        registry,
        config.interview.default_language,
    );

    let app = with_layers(interview_router().with_state(state), &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "Hiring assistant listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    sweeper.abort();
    tracing::info!("Server stopped");
    Ok(())
}

fn with_layers(router: Router, server: &ServerConfig) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(TraceLayer::new_for_http())
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TimeoutLayer::new(Duration::from_secs(
                server.request_timeout_secs,
            )))
            .layer(cors_layer(server)),
    )
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    if origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(origins)
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
