//! Platform services for GitHub
//!
//! Provides the repository operations the run engine consumes.

mod github;

pub use github::GitHubService;

use crate::error::Result;
use crate::types::{MergeResult, PullRequest, RepoConfig};
use async_trait::async_trait;

/// Repository service trait for branch, file, and PR operations
///
/// This trait abstracts the remote API so the same run loop can be driven
/// against a mock in tests. Every operation is independently fallible; the
/// run engine decides which failures abandon an iteration.
#[async_trait]
pub trait RepoService: Send + Sync {
    /// Create a new branch pointing at the current head of `base`.
    ///
    /// Resolves the base branch's commit sha and creates a new ref for it.
    /// Fails if the base branch is absent or the new name collides.
    async fn create_branch(&self, base: &str, branch: &str) -> Result<()>;

    /// Create or update a file on `branch` with a commit carrying `message`.
    ///
    /// An existing file at `path` is looked up first to obtain its blob sha;
    /// absence of the file is not an error. The write is atomic server-side.
    async fn create_or_update_file(
        &self,
        branch: &str,
        path: &str,
        content: &str,
        message: &str,
    ) -> Result<()>;

    /// Open a pull request merging `head` into `base`
    async fn create_pull_request(
        &self,
        base: &str,
        head: &str,
        title: &str,
        body: &str,
    ) -> Result<PullRequest>;

    /// Merge a pull request with a merge commit (never squash or rebase)
    async fn merge_pull_request(&self, number: u64) -> Result<MergeResult>;

    /// Get the repository coordinates
    fn repo(&self) -> &RepoConfig;
}
