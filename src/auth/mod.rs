//! Authentication for GitHub
//!
//! Resolves the personal access token from the command line or environment.
//! Interactive prompting for a still-missing token is the CLI layer's job.

use crate::config::AuthToken;

/// Environment variable consulted when no token flag is given
pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

/// Source of authentication token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthSource {
    /// Token from the `--token` flag
    Flag,
    /// Token from environment variable
    EnvVar,
}

/// Resolve the token from the flag value, falling back to [`TOKEN_ENV_VAR`].
///
/// Returns `None` when neither source provides a non-empty value.
pub fn resolve_token(flag: Option<String>) -> Option<(AuthToken, AuthSource)> {
    if let Some(token) = flag.filter(|t| !t.is_empty()) {
        return Some((AuthToken::new(token), AuthSource::Flag));
    }

    std::env::var(TOKEN_ENV_VAR)
        .ok()
        .filter(|t| !t.is_empty())
        .map(|t| (AuthToken::new(t), AuthSource::EnvVar))
}
