//! HTTP request/response tracing middleware.

use axum::{body::Body, http::Request};
use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, MakeSpan, TraceLayer};
use tracing::{Level, Span, field};

/// Creates a tracing middleware for HTTP requests.
///
/// Each request runs inside a `request` span carrying `method`, `uri` and
/// `version`. The `principal` field starts empty and is filled in by
/// [`super::auth::layer`] once the caller is known.
///
/// # Example Logs
///
/// ```text
/// INFO request{method=POST uri=/api/authors version=HTTP/1.1 principal=ci}: finished processing request latency=4 ms status=201
/// ```
pub fn layer() -> TraceLayer<
    SharedClassifier<ServerErrorsAsFailures>,
    impl MakeSpan<Body> + Clone,
    DefaultOnRequest,
    DefaultOnResponse,
> {
    TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
                principal = field::Empty,
            )
        })
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}

/// Records the caller on the current request span.
pub fn record_principal(label: &str) {
    Span::current().record("principal", label);
}
