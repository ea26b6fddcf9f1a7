//! Mock repository service for testing
//!
//! Manually implements `RepoService` with call tracking, an ordered event
//! ledger, error injection, and configurable merge responses.

use async_trait::async_trait;
use pr_mill::error::{Error, Result};
use pr_mill::platform::RepoService;
use pr_mill::types::{MergeResult, PullRequest, RepoConfig};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

/// Call record for `create_branch`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateBranchCall {
    pub base: String,
    pub branch: String,
}

/// Call record for `create_or_update_file`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateFileCall {
    pub branch: String,
    pub path: String,
    pub content: String,
    pub message: String,
}

/// Call record for `create_pull_request`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePrCall {
    pub base: String,
    pub head: String,
    pub title: String,
    pub body: String,
}

/// Call record for `merge_pull_request`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeCall {
    pub number: u64,
}

/// Simple mock repository service for testing
///
/// Features:
/// - Auto-incrementing PR numbers
/// - Call tracking plus an ordered event ledger for order assertions
/// - Error injection for failure path testing
/// - Configurable merge responses per PR number (default: merged)
pub struct MockRepoService {
    config: RepoConfig,
    next_pr_number: AtomicU64,
    // Call tracking
    create_branch_calls: Mutex<Vec<CreateBranchCall>>,
    create_file_calls: Mutex<Vec<CreateFileCall>>,
    create_pr_calls: Mutex<Vec<CreatePrCall>>,
    merge_calls: Mutex<Vec<MergeCall>>,
    events: Mutex<Vec<&'static str>>,
    // Error injection
    error_on_create_branch: Mutex<Option<String>>,
    error_on_create_file: Mutex<Option<String>>,
    error_on_create_pr: Mutex<Option<String>>,
    error_on_merge: Mutex<Option<String>>,
    // Merge responses by PR number
    merge_responses: Mutex<HashMap<u64, MergeResult>>,
}

impl MockRepoService {
    /// Create a new mock with the given repository coordinates
    pub fn with_config(config: RepoConfig) -> Self {
        Self {
            config,
            next_pr_number: AtomicU64::new(1),
            create_branch_calls: Mutex::new(Vec::new()),
            create_file_calls: Mutex::new(Vec::new()),
            create_pr_calls: Mutex::new(Vec::new()),
            merge_calls: Mutex::new(Vec::new()),
            events: Mutex::new(Vec::new()),
            error_on_create_branch: Mutex::new(None),
            error_on_create_file: Mutex::new(None),
            error_on_create_pr: Mutex::new(None),
            error_on_merge: Mutex::new(None),
            merge_responses: Mutex::new(HashMap::new()),
        }
    }

    // === Error injection methods ===

    /// Make `create_branch` return an error
    pub fn fail_create_branch(&self, msg: &str) {
        *self.error_on_create_branch.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `create_or_update_file` return an error
    pub fn fail_create_file(&self, msg: &str) {
        *self.error_on_create_file.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `create_pull_request` return an error
    pub fn fail_create_pr(&self, msg: &str) {
        *self.error_on_create_pr.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `merge_pull_request` return an error
    pub fn fail_merge(&self, msg: &str) {
        *self.error_on_merge.lock().unwrap() = Some(msg.to_string());
    }

    /// Set the merge response for a specific PR number
    pub fn set_merge_response(&self, number: u64, result: MergeResult) {
        self.merge_responses.lock().unwrap().insert(number, result);
    }

    // === Call verification methods ===

    /// Get all `create_branch` calls
    pub fn get_create_branch_calls(&self) -> Vec<CreateBranchCall> {
        self.create_branch_calls.lock().unwrap().clone()
    }

    /// Get all `create_or_update_file` calls
    pub fn get_create_file_calls(&self) -> Vec<CreateFileCall> {
        self.create_file_calls.lock().unwrap().clone()
    }

    /// Get all `create_pull_request` calls
    pub fn get_create_pr_calls(&self) -> Vec<CreatePrCall> {
        self.create_pr_calls.lock().unwrap().clone()
    }

    /// Get all `merge_pull_request` calls
    pub fn get_merge_calls(&self) -> Vec<MergeCall> {
        self.merge_calls.lock().unwrap().clone()
    }

    /// Get the ordered ledger of operations across the whole run
    pub fn events(&self) -> Vec<&'static str> {
        self.events.lock().unwrap().clone()
    }

    /// Count of branch creation attempts
    pub fn branch_call_count(&self) -> usize {
        self.create_branch_calls.lock().unwrap().len()
    }

    /// Count of file write attempts
    pub fn file_call_count(&self) -> usize {
        self.create_file_calls.lock().unwrap().len()
    }

    /// Count of PR creation attempts
    pub fn pr_call_count(&self) -> usize {
        self.create_pr_calls.lock().unwrap().len()
    }

    /// Count of merge attempts
    pub fn merge_call_count(&self) -> usize {
        self.merge_calls.lock().unwrap().len()
    }

    /// Assert the exact sequence of operations
    pub fn assert_event_order(&self, expected: &[&str]) {
        let events = self.events();
        assert_eq!(
            events, expected,
            "Expected operations {expected:?} but got: {events:?}"
        );
    }
}

#[async_trait]
impl RepoService for MockRepoService {
    async fn create_branch(&self, base: &str, branch: &str) -> Result<()> {
        self.create_branch_calls
            .lock()
            .unwrap()
            .push(CreateBranchCall {
                base: base.to_string(),
                branch: branch.to_string(),
            });
        self.events.lock().unwrap().push("create_branch");

        if let Some(msg) = self.error_on_create_branch.lock().unwrap().as_ref() {
            return Err(Error::GitHubApi(msg.clone()));
        }
        Ok(())
    }

    async fn create_or_update_file(
        &self,
        branch: &str,
        path: &str,
        content: &str,
        message: &str,
    ) -> Result<()> {
        self.create_file_calls.lock().unwrap().push(CreateFileCall {
            branch: branch.to_string(),
            path: path.to_string(),
            content: content.to_string(),
            message: message.to_string(),
        });
        self.events.lock().unwrap().push("create_file");

        if let Some(msg) = self.error_on_create_file.lock().unwrap().as_ref() {
            return Err(Error::GitHubApi(msg.clone()));
        }
        Ok(())
    }

    async fn create_pull_request(
        &self,
        base: &str,
        head: &str,
        title: &str,
        body: &str,
    ) -> Result<PullRequest> {
        self.create_pr_calls.lock().unwrap().push(CreatePrCall {
            base: base.to_string(),
            head: head.to_string(),
            title: title.to_string(),
            body: body.to_string(),
        });
        self.events.lock().unwrap().push("create_pr");

        if let Some(msg) = self.error_on_create_pr.lock().unwrap().as_ref() {
            return Err(Error::GitHubApi(msg.clone()));
        }

        let number = self.next_pr_number.fetch_add(1, Ordering::SeqCst);
        Ok(PullRequest {
            number,
            html_url: format!("https://github.com/octocat/sandbox/pull/{number}"),
            base_ref: base.to_string(),
            head_ref: head.to_string(),
            title: title.to_string(),
        })
    }

    async fn merge_pull_request(&self, number: u64) -> Result<MergeResult> {
        self.merge_calls.lock().unwrap().push(MergeCall { number });
        self.events.lock().unwrap().push("merge");

        if let Some(msg) = self.error_on_merge.lock().unwrap().as_ref() {
            return Err(Error::GitHubApi(msg.clone()));
        }

        let responses = self.merge_responses.lock().unwrap();
        Ok(responses.get(&number).cloned().unwrap_or(MergeResult {
            merged: true,
            sha: Some(format!("merged_sha_{number}")),
            message: None,
        }))
    }

    fn repo(&self) -> &RepoConfig {
        &self.config
    }
}
