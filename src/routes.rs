//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`      - Health check: database (public)
//! - `/api/*`            - REST API (Bearer token optional, permission per surface)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket (configurable for proxy deployments)
//! - **Authentication** - Bearer token resolved to a principal
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{auth, rate_limit, tracing};
use crate::api::permissions::{AllowAny, require};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_governor::key_extractor::{PeerIpKeyExtractor, SmartIpKeyExtractor};
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `behind_proxy` - when `true`, rate limiting reads client IP from
///   `X-Forwarded-For` / `X-Real-IP` headers instead of the peer socket address;
///   enable only when the service runs behind a trusted reverse proxy
pub fn app_router(state: AppState, behind_proxy: bool) -> NormalizePath<Router> {
    let api_router = if behind_proxy {
        api_routes(state.clone()).layer(rate_limit::layer(SmartIpKeyExtractor))
    } else {
        api_routes(state.clone()).layer(rate_limit::layer(PeerIpKeyExtractor))
    };

    NormalizePathLayer::trim_trailing_slash().layer(assemble(api_router, state))
}

/// Routes of [`app_router`] without rate limiting and path normalization.
///
/// The peer-IP limiter needs `ConnectInfo`, which in-process clients such
/// as `axum_test::TestServer` do not provide.
pub fn router_without_rate_limit(state: AppState) -> Router {
    assemble(api_routes(state.clone()), state)
}

fn api_routes(state: AppState) -> Router<AppState> {
    api::routes::routes().route_layer(middleware::from_fn_with_state(state, auth::layer))
}

fn assemble(api_router: Router<AppState>, state: AppState) -> Router {
    let health = Router::new()
        .route("/health", get(health_handler))
        .route_layer(middleware::from_fn(require::<AllowAny>));

    Router::new()
        .merge(health)
        .nest("/api", api_router)
        .with_state(state)
        .layer(tracing::layer())
}
