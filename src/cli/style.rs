//! Terminal styling helpers
//!
//! Thin wrappers over owo-colors that degrade to plain text when the
//! stream does not support color.

use indicatif::ProgressStyle;
use owo_colors::{OwoColorize, Stream};

/// Check mark used in success lines
pub const CHECK: &str = "✓";

/// A green check mark
pub fn check() -> String {
    CHECK
        .if_supports_color(Stream::Stdout, |t| t.green())
        .to_string()
}

/// Spinner style for long-running operations
pub fn spinner_style() -> ProgressStyle {
    ProgressStyle::default_spinner()
}

/// Styling extensions used across the CLI
pub trait Stylize: std::fmt::Display + Sized {
    /// De-emphasized secondary text
    fn muted(&self) -> String {
        self.if_supports_color(Stream::Stdout, |t| t.dimmed())
            .to_string()
    }

    /// Emphasized text
    fn emphasis(&self) -> String {
        self.if_supports_color(Stream::Stdout, |t| t.bold())
            .to_string()
    }

    /// Highlighted value (names, counts, branches)
    fn accent(&self) -> String {
        self.if_supports_color(Stream::Stdout, |t| t.cyan())
            .to_string()
    }

    /// Successful outcome
    fn success(&self) -> String {
        self.if_supports_color(Stream::Stdout, |t| t.green())
            .to_string()
    }

    /// Warning outcome
    fn warn(&self) -> String {
        self.if_supports_color(Stream::Stdout, |t| t.yellow())
            .to_string()
    }

    /// Fatal error text
    fn error(&self) -> String {
        self.if_supports_color(Stream::Stderr, |t| t.red())
            .to_string()
    }
}

impl<T: std::fmt::Display + Sized> Stylize for T {}
