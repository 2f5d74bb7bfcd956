//! Artificial response latency.
//!
//! Handlers await a `LatencyPolicy` before answering so frontends can be
//! developed against realistic loading states. The policy is injected as
//! application data; tests use `NoLatency`.

use async_trait::async_trait;
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;

#[async_trait]
pub trait LatencyPolicy: Send + Sync {
    /// Suspends the current request without blocking a worker thread.
    async fn pause(&self);
}

pub struct NoLatency;

#[async_trait]
impl LatencyPolicy for NoLatency {
    async fn pause(&self) {}
}

/// Uniform random delay in `[0, max]`
pub struct RandomLatency {
    max: Duration,
}

impl RandomLatency {
    pub fn new(max: Duration) -> Self {
        Self { max }
    }

    fn next_delay(&self) -> Duration {
        let max_ms = self.max.as_millis() as u64;
        Duration::from_millis(rand::thread_rng().gen_range(0..=max_ms))
    }
}

#[async_trait]
impl LatencyPolicy for RandomLatency {
    async fn pause(&self) {
        let delay = self.next_delay();
        log::debug!("⏳ Delaying response by {}ms", delay.as_millis());
        tokio::time::sleep(delay).await;
    }
}

/// Picks the policy for a configured upper bound; zero turns latency off.
pub fn from_max_delay(max_delay_ms: u64) -> Arc<dyn LatencyPolicy> {
    if max_delay_ms == 0 {
        Arc::new(NoLatency)
    } else {
        Arc::new(RandomLatency::new(Duration::from_millis(max_delay_ms)))
    }
}
