//! Run engine for the pull request loop
//!
//! Two-phase pattern:
//! 1. Plan - generate the iteration's randomized content (pure)
//! 2. Execute - drive the remote operations in order (effectful)

mod execute;
mod plan;

pub use execute::{RunReport, execute_run};
pub use plan::IterationPlan;

use async_trait::async_trait;

/// Progress callback for streaming status lines during a run
#[async_trait]
pub trait ProgressCallback: Send + Sync {
    /// Called with each human-readable status line
    async fn on_message(&self, message: &str);
}

/// Progress callback that discards all messages (for tests)
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopProgress;

#[async_trait]
impl ProgressCallback for NoopProgress {
    async fn on_message(&self, _message: &str) {}
}
