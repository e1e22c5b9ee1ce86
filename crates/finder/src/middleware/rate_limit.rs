//! Rate limiting middleware using governor and `tower_governor`.
//!
//! The quiz itself is unauthenticated and cheap to serve, so only the
//! consultation endpoints are limited. `SmartIpKeyExtractor` reads the
//! usual proxy headers and falls back to the peer address, which requires
//! the server to be started with connect info (see `main.rs`).

use std::sync::Arc;

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use tower_governor::key_extractor::SmartIpKeyExtractor;
use tower_governor::{GovernorLayer, governor::GovernorConfigBuilder};

/// Rate limiter layer type for Axum.
pub type RateLimiterLayer =
    GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Create rate limiter for consultation endpoints: ~5 requests per minute
/// per IP.
///
/// Configuration: 1 request every 12 seconds (replenish), burst of 5.
/// Opening the form and re-submitting after a validation error both spend
/// a token, so a person fixing their typos stays under the burst;
/// scripted form spam does not.
///
/// # Panics
///
/// This function will not panic. The configuration uses only valid positive
/// integers (`per_second(12)` and `burst_size(5)`), which are always
/// accepted by `GovernorConfigBuilder`.
#[must_use]
pub fn contact_rate_limiter() -> RateLimiterLayer {
    let config = GovernorConfigBuilder::default()
        .key_extractor(SmartIpKeyExtractor)
        .per_second(12) // Replenish 1 token every 12 seconds (~5/minute)
        .burst_size(5) // Allow burst of 5 requests
        .finish()
        .expect("rate limiter config with per_second(12) and burst_size(5) is valid");
    GovernorLayer::new(Arc::new(config))
}
