//! Progress bridging between the run engine and the terminal

use crate::cli::style::spinner_style;
use async_trait::async_trait;
use indicatif::ProgressBar;
use pr_mill::run::ProgressCallback;
use std::time::Duration;

/// Streams run status lines above a live spinner
pub struct CliProgress {
    bar: ProgressBar,
}

impl CliProgress {
    /// Create a compact spinner-backed progress printer
    pub fn compact() -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(spinner_style());
        bar.enable_steady_tick(Duration::from_millis(80));
        Self { bar }
    }

    /// Stop the spinner and clear its line
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

#[async_trait]
impl ProgressCallback for CliProgress {
    async fn on_message(&self, message: &str) {
        self.bar.println(message);
    }
}
