//! Fixed-window rate limiting for token issuance: a global per-second ceiling
//! plus a per-client-IP per-minute limit.

use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

const WINDOW: Duration = Duration::from_secs(60);
const CLEANUP_INTERVAL: Duration = Duration::from_secs(300);

pub struct RateLimiter {
    config: RateLimitConfig,
    state: Mutex<RateLimitState>,
}

#[derive(Debug, Clone, Copy)]
pub struct RateLimitConfig {
    pub global_per_sec: u32,
    /// Zero disables the per-IP limit.
    pub per_ip_per_min: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            global_per_sec: 1000,
            per_ip_per_min: 60,
        }
    }
}

struct RateLimitState {
    ip_counts: HashMap<IpAddr, WindowCounter>,
    global_count: WindowCounter,
    last_cleanup: Instant,
}

struct WindowCounter {
    count: u32,
    window_start: Instant,
}

impl WindowCounter {
    fn new() -> Self {
        Self { count: 0, window_start: Instant::now() }
    }

    fn increment(&mut self, limit: u32, window: Duration) -> bool {
        let now = Instant::now();
        if now.duration_since(self.window_start) > window {
            self.count = 0;
            self.window_start = now;
        }
        self.count += 1;
        self.count <= limit
    }
}

impl RateLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            config,
            state: Mutex::new(RateLimitState {
                ip_counts: HashMap::new(),
                global_count: WindowCounter::new(),
                last_cleanup: Instant::now(),
            }),
        }
    }

    pub fn check(&self, ip: IpAddr) -> Result<(), RateLimitError> {
        let mut state = self.lock();
        self.maybe_cleanup(&mut state);

        if !state.global_count.increment(self.config.global_per_sec, Duration::from_secs(1)) {
            return Err(RateLimitError::Global);
        }

        if self.config.per_ip_per_min == 0 {
            return Ok(());
        }

        let counter = state.ip_counts.entry(ip).or_insert_with(WindowCounter::new);
        if !counter.increment(self.config.per_ip_per_min, WINDOW) {
            return Err(RateLimitError::PerIp {
                limit: self.config.per_ip_per_min,
                window_secs: WINDOW.as_secs(),
            });
        }

        Ok(())
    }

    // Poisoned locks are recovered; counters hold no invariants worth aborting for.
    fn lock(&self) -> MutexGuard<'_, RateLimitState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn maybe_cleanup(&self, state: &mut RateLimitState) {
        let now = Instant::now();
        if now.duration_since(state.last_cleanup) > CLEANUP_INTERVAL {
            let cutoff = now - WINDOW - Duration::from_secs(60);
            state.ip_counts.retain(|_, c| c.window_start > cutoff);
            state.last_cleanup = now;
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum RateLimitError {
    Global,
    PerIp { limit: u32, window_secs: u64 },
}

impl std::fmt::Display for RateLimitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Global => write!(f, "global rate limit exceeded"),
            Self::PerIp { limit, window_secs } => {
                write!(f, "rate limit: {} requests per {}s", limit, window_secs)
            }
        }
    }
}
