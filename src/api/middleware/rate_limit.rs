//! Rate limiting middleware using token bucket algorithm.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{GovernorLayer, governor::GovernorConfigBuilder, key_extractor::KeyExtractor};

/// Milliseconds after which one request slot is replenished.
const REPLENISH_INTERVAL_MS: u64 = 100;

/// Requests a single client may issue back to back.
const BURST_SIZE: u32 = 50;

/// Creates a per-client rate limiter for the API.
///
/// # Limits
///
/// - **Rate**: 10 requests per second
/// - **Burst**: 50 requests
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// The client key is produced by `key_extractor`:
///
/// - [`tower_governor::key_extractor::PeerIpKeyExtractor`] uses the socket
///   peer address and requires `ConnectInfo<SocketAddr>`
/// - [`tower_governor::key_extractor::SmartIpKeyExtractor`] prefers
///   `X-Forwarded-For` / `X-Real-IP` and is only safe behind a trusted proxy
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .nest("/api", api_routes())
///     .layer(rate_limit::layer(PeerIpKeyExtractor));
/// ```
pub fn layer<K>(key_extractor: K) -> GovernorLayer<K, NoOpMiddleware<QuantaInstant>, axum::body::Body>
where
    K: KeyExtractor,
{
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_millisecond(REPLENISH_INTERVAL_MS)
            .burst_size(BURST_SIZE)
            .key_extractor(key_extractor)
            .finish()
            .expect("rate limit quota is non-zero"),
    );

    GovernorLayer::new(governor_conf)
}
