//! Shared application state.

use std::sync::Arc;

use crate::config::{Config, Credentials};
use crate::ratelimit::{RateLimitConfig, RateLimiter};
use crate::telemetry::Metrics;

pub struct AppStateInner {
    pub credentials: Option<Credentials>,
    pub max_body_bytes: usize,
    pub metrics: Metrics,
    pub rate_limiter: RateLimiter,
}

pub type AppState = Arc<AppStateInner>;

pub fn build_state(config: &Config) -> AppState {
    if config.credentials.is_none() {
        tracing::warn!("LIVEKIT_API_KEY/LIVEKIT_API_SECRET not set; token requests will fail");
    }

    Arc::new(AppStateInner {
        credentials: config.credentials.clone(),
        max_body_bytes: config.max_body_bytes,
        metrics: Metrics::new(),
        rate_limiter: RateLimiter::new(RateLimitConfig {
            per_ip_per_min: config.rate_limit_per_min,
            ..RateLimitConfig::default()
        }),
    })
}

#[cfg(test)]
pub fn build_test_state(credentials: Option<Credentials>) -> AppState {
    build_state(&Config {
        credentials,
        rate_limit_per_min: 0,
        ..Config::default()
    })
}
