//! Bounded retries for reads that sit on the hot path of every request.
//!
//! [`RetryContext`] reruns an operation while its error is classified as transient by
//! [`Error::to_retry_strategy`], sleeping with exponential backoff between attempts.

use std::{future::Future, time::Duration};

use crate::server::error::{retry::ErrorRetryStrategy, Error};

/// Attempt budget and backoff for [`RetryContext::run`].
///
/// Defaults to 3 attempts with a 1 second first backoff, doubled after every failure.
#[derive(Clone, Debug)]
pub struct RetryContext {
    max_attempts: u32,
    initial_backoff: Duration,
}

impl Default for RetryContext {
    fn default() -> Self {
        Self::new()
    }
}

impl RetryContext {
    const MAX_ATTEMPTS: u32 = 3;
    const INITIAL_BACKOFF: Duration = Duration::from_secs(1);

    /// Creates a new instance of [`RetryContext`] with the default budget
    pub fn new() -> Self {
        Self {
            max_attempts: Self::MAX_ATTEMPTS,
            initial_backoff: Self::INITIAL_BACKOFF,
        }
    }

    pub fn with_initial_backoff(mut self, initial_backoff: Duration) -> Self {
        self.initial_backoff = initial_backoff;
        self
    }

    /// Runs `operation` until it succeeds, fails permanently or the budget is spent.
    ///
    /// `operation` is called once per attempt and must build a fresh future each time.
    /// `label` only appears in logs.
    pub async fn run<R, F, Fut>(&self, label: &str, operation: F) -> Result<R, Error>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<R, Error>>,
    {
        let mut backoff = self.initial_backoff;

        for attempt in 1..=self.max_attempts {
            let err = match operation().await {
                Ok(result) => return Ok(result),
                Err(err) => err,
            };

            if matches!(err.to_retry_strategy(), ErrorRetryStrategy::Fail) {
                return Err(err);
            }

            if attempt == self.max_attempts {
                tracing::error!(
                    attempts = attempt,
                    "Giving up on {} after transient failures: {}",
                    label,
                    err
                );

                return Err(err);
            }

            tracing::warn!(
                attempt,
                ?backoff,
                "Transient failure during {}, retrying: {}",
                label,
                err
            );

            tokio::time::sleep(backoff).await;
            backoff *= 2;
        }

        Err(Error::InternalError(format!(
            "retry budget for {} allows no attempts",
            label
        )))
    }
}
