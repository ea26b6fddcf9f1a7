//! Error types for pr-mill

/// Result alias using the crate error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by pr-mill
///
/// Configuration errors are fatal and surface before any network activity.
/// Remote operation errors are caught at the run loop's call sites and only
/// abandon the current iteration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required configuration field is missing or empty
    #[error("{0} is required")]
    MissingRequired(&'static str),

    /// A configuration field is present but invalid
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// GitHub API operation failed
    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    /// Error from the octocrab client
    #[error(transparent)]
    Octocrab(#[from] octocrab::Error),

    /// Internal error (terminal interaction, unexpected state)
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Whether this error is a pre-flight configuration failure
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::MissingRequired(_) | Self::InvalidConfig(_))
    }
}
