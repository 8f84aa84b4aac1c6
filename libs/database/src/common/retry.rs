//! Exponential backoff for store connections.
//!
//! A policy is `max_retries` extra attempts after the first one. The wait
//! before retry `n` is `initial_delay_ms * backoff_multiplier^(n-1)`, capped
//! at `max_delay_ms` and optionally scaled into the upper half of that range.

use std::collections::hash_map::RandomState;
use std::fmt::Display;
use std::future::Future;
use std::hash::BuildHasher;
use std::time::{Duration, SystemTime};

#[derive(Debug, Clone)]
pub struct RetryConfig {
    pub max_retries: u32,
    pub initial_delay_ms: u64,
    pub max_delay_ms: u64,
    pub backoff_multiplier: f64,
    /// Scale each wait by a factor in `[0.5, 1.0)`
    pub use_jitter: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay_ms: 100,
            max_delay_ms: 5_000,
            backoff_multiplier: 2.0,
            use_jitter: true,
        }
    }
}

impl RetryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_retries(self, max_retries: u32) -> Self {
        Self {
            max_retries,
            ..self
        }
    }

    pub fn with_initial_delay(self, initial_delay_ms: u64) -> Self {
        Self {
            initial_delay_ms,
            ..self
        }
    }

    pub fn with_max_delay(self, max_delay_ms: u64) -> Self {
        Self {
            max_delay_ms,
            ..self
        }
    }

    pub fn without_jitter(self) -> Self {
        Self {
            use_jitter: false,
            ..self
        }
    }

    /// Un-jittered wait before retry `retry` (1-based), in milliseconds.
    pub fn nominal_delay_ms(&self, retry: u32) -> u64 {
        let steps = retry.saturating_sub(1).min(i32::MAX as u32) as i32;
        let grown = self.initial_delay_ms as f64 * self.backoff_multiplier.powi(steps);
        if grown.is_finite() {
            (grown as u64).min(self.max_delay_ms)
        } else {
            self.max_delay_ms
        }
    }

    /// Actual wait before retry `retry`, jitter applied when enabled.
    fn delay(&self, retry: u32) -> Duration {
        let nominal = self.nominal_delay_ms(retry);
        let millis = if self.use_jitter {
            (nominal as f64 * jitter_factor()) as u64
        } else {
            nominal
        };
        Duration::from_millis(millis)
    }
}

/// Pseudo-random factor in `[0.5, 1.0)` from a freshly seeded hasher.
fn jitter_factor() -> f64 {
    let sample = RandomState::new().hash_one(SystemTime::now()) % 500;
    0.5 + sample as f64 / 1_000.0
}

/// Run `operation` until it succeeds or the policy's retries are spent.
///
/// The last error is returned unchanged.
///
/// ```ignore
/// let client = retry_with_backoff(
///     || database::mongodb::connect(&url),
///     RetryConfig::new().with_max_retries(5),
/// )
/// .await?;
/// ```
pub async fn retry_with_backoff<F, Fut, T, E>(mut operation: F, config: RetryConfig) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    for retry in 1..=config.max_retries {
        match operation().await {
            Ok(value) => {
                if retry > 1 {
                    tracing::debug!(retries = retry - 1, "Recovered after retrying");
                }
                return Ok(value);
            }
            Err(error) => {
                let wait = config.delay(retry);
                tracing::debug!(
                    retry,
                    max_retries = config.max_retries,
                    wait_ms = wait.as_millis() as u64,
                    %error,
                    "Attempt failed, backing off"
                );
                tokio::time::sleep(wait).await;
            }
        }
    }

    operation().await.inspect_err(|error| {
        tracing::warn!(attempts = config.max_retries + 1, %error, "Giving up");
    })
}

/// [`retry_with_backoff`] under the default policy.
pub async fn retry<F, Fut, T, E>(operation: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    retry_with_backoff(operation, RetryConfig::default()).await
}
