//! Client-side request throttling
//!
//! A single direct `governor` limiter shared by every request from one
//! client. The backend does not advertise limits, so the budget comes from
//! `preferences.requests_per_second`.

use std::num::NonZeroU32;

use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use log::debug;

/// Requests per second when nothing is configured
pub const DEFAULT_REQUESTS_PER_SECOND: u32 = 10;

/// Request throttle applied before every HTTP call.
pub struct RequestThrottle {
    limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
    per_second: NonZeroU32,
}

impl RequestThrottle {
    /// Create a throttle allowing `per_second` requests each second.
    ///
    /// Zero is treated as one.
    pub fn new(per_second: u32) -> Self {
        let per_second = NonZeroU32::new(per_second).unwrap_or(NonZeroU32::MIN);
        Self {
            limiter: RateLimiter::direct(Quota::per_second(per_second)),
            per_second,
        }
    }

    /// Wait until a request may be sent.
    pub async fn until_ready(&self) {
        if self.limiter.check().is_err() {
            debug!("Throttling request ({} req/s)", self.per_second);
            self.limiter.until_ready().await;
        }
    }

    pub fn per_second(&self) -> u32 {
        self.per_second.get()
    }
}

impl Default for RequestThrottle {
    fn default() -> Self {
        Self::new(DEFAULT_REQUESTS_PER_SECOND)
    }
}
