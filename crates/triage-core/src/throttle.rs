//! Request pacing for the oracle. The upstream service enforces a request
//! rate limit, so the engine awaits an injected gate before every call
//! instead of sleeping ad hoc. Swapping the gate swaps the policy.

use async_trait::async_trait;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

/// Scheduling policy awaited before each oracle call.
#[async_trait]
pub trait RequestGate: Send + Sync {
    async fn acquire(&self);
}

/// Enforces a minimum spacing between consecutive acquisitions. Concurrent
/// callers are serialized through the gate, so the spacing holds in the
/// bounded-concurrency mode too.
pub struct FixedIntervalGate {
    interval: Duration,
    last: Mutex<Option<Instant>>,
}

impl FixedIntervalGate {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: Mutex::new(None),
        }
    }
}

#[async_trait]
impl RequestGate for FixedIntervalGate {
    async fn acquire(&self) {
        let mut last = self.last.lock().await;
        if let Some(prev) = *last {
            let ready = prev + self.interval;
            if ready > Instant::now() {
                tokio::time::sleep_until(ready).await;
            }
        }
        *last = Some(Instant::now());
    }
}

/// Gate that never delays, for tests and oracles without a rate limit.
pub struct NoThrottle;

#[async_trait]
impl RequestGate for NoThrottle {
    async fn acquire(&self) {}
}
