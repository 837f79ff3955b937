use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;

use crate::error::{Error, Result};

/// Default overall timeout for a request/response exchange
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Shared count of timeout scopes that have not been released yet.
#[derive(Debug, Clone, Default)]
pub(crate) struct ScopeCounter(Arc<AtomicUsize>);

impl ScopeCounter {
    pub(crate) fn active(&self) -> usize {
        self.0.load(Ordering::Acquire)
    }
}

/// Deadline shared by sending a request and reading its body.
///
/// A scope is started when a request is built and released exactly once:
/// either explicitly through [`TimeoutScope::release`] or when it is dropped.
/// Release is tied to `Drop`, so no path can release twice or skip it.
#[derive(Debug)]
pub struct TimeoutScope {
    deadline: Instant,
    timeout: Duration,
    counter: ScopeCounter,
}

impl TimeoutScope {
    pub(crate) fn start(timeout: Duration, counter: &ScopeCounter) -> Self {
        counter.0.fetch_add(1, Ordering::AcqRel);
        Self {
            deadline: Instant::now() + timeout,
            timeout,
            counter: counter.clone(),
        }
    }

    /// Get the instant at which the scope expires
    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    /// Get the timeout this scope was started with
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Check if the deadline has already passed
    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.deadline
    }

    /// Run a future, failing with [`Error::Timeout`] once the deadline passes
    pub async fn run<F, T>(&self, future: F) -> Result<T>
    where
        F: Future<Output = T>,
    {
        tokio::time::timeout_at(self.deadline, future)
            .await
            .map_err(|_| Error::timeout(self.timeout))
    }

    /// Release the scope
    pub fn release(self) {}
}

impl Drop for TimeoutScope {
    fn drop(&mut self) {
        let previous = self.counter.0.fetch_sub(1, Ordering::AcqRel);
        debug_assert!(previous > 0, "timeout scope released twice");
        tracing::trace!(timeout = ?self.timeout, "timeout scope released");
    }
}
