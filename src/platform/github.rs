//! GitHub platform service implementation

use crate::error::{Error, Result};
use crate::platform::RepoService;
use crate::types::{MergeResult, PullRequest, RepoConfig};
use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use octocrab::Octocrab;
use octocrab::params::repos::Reference;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

/// Default API host when no override is given
const DEFAULT_API_BASE: &str = "https://api.github.com";

/// GitHub service using octocrab
///
/// Refs and pulls go through octocrab's typed API. The contents endpoints go
/// through raw HTTP requests because the upload requires explicit base64
/// encoding and sha handling.
pub struct GitHubService {
    client: Octocrab,
    config: RepoConfig,
    /// Token for raw HTTP requests (contents API)
    token: String,
    /// HTTP client for raw requests (contents API)
    http_client: Client,
    /// API base URL for raw requests
    api_base: String,
}

/// Response shape for the contents lookup; only the blob sha is needed
#[derive(Deserialize)]
struct ContentInfo {
    sha: String,
}

impl GitHubService {
    /// Create a new GitHub service.
    ///
    /// `api_base` overrides the API root (tests point it at a local server);
    /// `None` targets github.com.
    pub fn new(token: &str, owner: String, repo: String, api_base: Option<String>) -> Result<Self> {
        let mut builder = Octocrab::builder().personal_token(token.to_string());

        let api_base = if let Some(base) = api_base {
            let base = base.trim_end_matches('/').to_string();
            builder = builder
                .base_uri(&base)
                .map_err(|e| Error::GitHubApi(e.to_string()))?;
            base
        } else {
            DEFAULT_API_BASE.to_string()
        };

        let client = builder
            .build()
            .map_err(|e| Error::GitHubApi(e.to_string()))?;

        let http_client = Client::builder()
            .user_agent("pr-mill")
            .build()
            .map_err(|e| Error::GitHubApi(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            config: RepoConfig { owner, repo },
            token: token.to_string(),
            http_client,
            api_base,
        })
    }

    /// Look up the blob sha of an existing file on a branch.
    ///
    /// Returns `Ok(None)` when the file does not exist yet - absence is a
    /// normal outcome for the first write, not a failure.
    async fn lookup_file_sha(&self, branch: &str, path: &str) -> Result<Option<String>> {
        let url = format!(
            "{}/repos/{}/{}/contents/{}",
            self.api_base, self.config.owner, self.config.repo, path
        );

        let response = self
            .http_client
            .get(&url)
            .query(&[("ref", branch)])
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .send()
            .await
            .map_err(|e| Error::GitHubApi(format!("Failed to fetch file contents: {e}")))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            debug!(path, branch, "file absent, creating fresh");
            return Ok(None);
        }

        if !response.status().is_success() {
            return Err(Error::GitHubApi(format!(
                "Contents lookup for {path} returned {}",
                response.status()
            )));
        }

        let info: ContentInfo = response
            .json()
            .await
            .map_err(|e| Error::GitHubApi(format!("Failed to parse file contents: {e}")))?;

        debug!(path, branch, sha = %info.sha, "found existing file");
        Ok(Some(info.sha))
    }
}

/// Helper to convert octocrab PR to our `PullRequest` type
fn pr_from_octocrab(pr: &octocrab::models::pulls::PullRequest) -> PullRequest {
    PullRequest {
        number: pr.number,
        html_url: pr
            .html_url
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default(),
        base_ref: pr.base.ref_field.clone(),
        head_ref: pr.head.ref_field.clone(),
        title: pr.title.as_deref().unwrap_or_default().to_string(),
    }
}

#[async_trait]
impl RepoService for GitHubService {
    async fn create_branch(&self, base: &str, branch: &str) -> Result<()> {
        debug!(base, branch, "creating branch");

        let base_ref = self
            .client
            .repos(&self.config.owner, &self.config.repo)
            .get_ref(&Reference::Branch(base.to_string()))
            .await?;

        let sha = match base_ref.object {
            octocrab::models::repos::Object::Commit { sha, .. }
            | octocrab::models::repos::Object::Tag { sha, .. } => sha,
            _ => {
                return Err(Error::GitHubApi(format!(
                    "Base branch {base} resolved to an unexpected object type"
                )));
            }
        };

        self.client
            .repos(&self.config.owner, &self.config.repo)
            .create_ref(&Reference::Branch(branch.to_string()), sha)
            .await?;

        debug!(branch, "created branch");
        Ok(())
    }

    async fn create_or_update_file(
        &self,
        branch: &str,
        path: &str,
        content: &str,
        message: &str,
    ) -> Result<()> {
        debug!(branch, path, "writing file");

        let sha = self.lookup_file_sha(branch, path).await?;

        let mut body = serde_json::json!({
            "message": message,
            "content": BASE64.encode(content),
            "branch": branch,
        });
        if let Some(existing_sha) = sha {
            body["sha"] = serde_json::Value::String(existing_sha);
        }

        let url = format!(
            "{}/repos/{}/{}/contents/{}",
            self.api_base, self.config.owner, self.config.repo, path
        );

        let response = self
            .http_client
            .put(&url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::GitHubApi(format!("Failed to write file: {e}")))?;

        if !response.status().is_success() {
            return Err(Error::GitHubApi(format!(
                "Contents write for {path} returned {}",
                response.status()
            )));
        }

        debug!(branch, path, "wrote file");
        Ok(())
    }

    async fn create_pull_request(
        &self,
        base: &str,
        head: &str,
        title: &str,
        body: &str,
    ) -> Result<PullRequest> {
        debug!(head, base, "creating PR");

        let pr = self
            .client
            .pulls(&self.config.owner, &self.config.repo)
            .create(title, head, base)
            .body(body)
            .send()
            .await?;

        let result = pr_from_octocrab(&pr);
        debug!(pr_number = result.number, "created PR");
        Ok(result)
    }

    async fn merge_pull_request(&self, number: u64) -> Result<MergeResult> {
        debug!(pr_number = number, "merging PR");

        let result = self
            .client
            .pulls(&self.config.owner, &self.config.repo)
            .merge(number)
            .method(octocrab::params::pulls::MergeMethod::Merge)
            .send()
            .await
            .map_err(|e| Error::GitHubApi(format!("Merge failed: {e}")))?;

        let merge_result = MergeResult {
            merged: result.merged,
            sha: result.sha,
            message: result.message,
        };

        debug!(
            pr_number = number,
            merged = merge_result.merged,
            sha = ?merge_result.sha,
            "merge complete"
        );
        Ok(merge_result)
    }

    fn repo(&self) -> &RepoConfig {
        &self.config
    }
}
