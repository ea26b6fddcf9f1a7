//! Run configuration and validation

use crate::error::{Error, Result};

/// Default base branch when none is given
pub const DEFAULT_BASE_BRANCH: &str = "main";

/// A personal access token, opaque for the lifetime of one run.
///
/// The value never appears in `Debug` output; use [`expose`] at the single
/// point where the HTTP client is constructed.
///
/// [`expose`]: AuthToken::expose
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    /// Wrap a raw token string
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Access the raw token value
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Whether the token is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AuthToken(***)")
    }
}

impl From<String> for AuthToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

/// Configuration for one run, immutable after validation
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// GitHub personal access token
    pub token: AuthToken,
    /// Repository owner (the GitHub username)
    pub owner: String,
    /// Target repository name
    pub repo: String,
    /// Number of pull requests to create
    pub count: u32,
    /// Base branch that pull requests target
    pub base_branch: String,
}

impl RunConfig {
    /// Check configuration invariants.
    ///
    /// Pure and side-effect free; must pass before any network activity.
    /// Fails with the first missing field, in the order the original flags
    /// are collected: token, username, repository.
    pub fn validate(&self) -> Result<()> {
        if self.token.is_empty() {
            return Err(Error::MissingRequired("GitHub token"));
        }
        if self.owner.is_empty() {
            return Err(Error::MissingRequired("GitHub username"));
        }
        if self.repo.is_empty() {
            return Err(Error::MissingRequired("Target repository"));
        }
        if self.count == 0 {
            return Err(Error::InvalidConfig(
                "number of pull requests must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
