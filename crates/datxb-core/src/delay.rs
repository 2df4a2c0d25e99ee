//! Injectable latency for the simulated backend.
//!
//! Submissions wait through a [`Delay`] instead of calling the timer
//! directly, so tests can swap in [`NoDelay`] and resolve immediately.

use std::future;
use std::time::Duration;

use futures_util::future::BoxFuture;

pub trait Delay: Send + Sync {
    /// Returns a future that resolves after `duration`.
    fn sleep(&self, duration: Duration) -> BoxFuture<'static, ()>;
}

/// Real wall-clock delay backed by the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioDelay;

impl Delay for TokioDelay {
    fn sleep(&self, duration: Duration) -> BoxFuture<'static, ()> {
        Box::pin(tokio::time::sleep(duration))
    }
}

/// Resolves immediately regardless of the requested duration.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl Delay for NoDelay {
    fn sleep(&self, _duration: Duration) -> BoxFuture<'static, ()> {
        Box::pin(future::ready(()))
    }
}
