//! Tokio-based clock implementation.

use async_trait::async_trait;
use std::time::Duration;

use crate::traits::Clock;

/// Production clock implementation using Tokio's time functions.
///
/// This provider uses Tokio's async sleep, making it suitable for
/// production use. For testing, use a fake clock that fast-forwards time
/// without actually waiting.
///
/// # Examples
///
/// ```rust
/// use starknet_erc721_rs::providers::TokioClock;
///
/// let clock = TokioClock::new();
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TokioClock;

impl TokioClock {
    /// Creates a new Tokio clock instance.
    pub fn new() -> Self {
        Self
    }
}

impl Default for TokioClock {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Clock for TokioClock {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
