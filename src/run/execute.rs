//! Run execution - effectful operations
//!
//! This module drives the remote operations for each iteration in strict
//! order. A failed step abandons the remainder of its iteration (merge
//! failures excepted, which are logged and skipped past); the run itself
//! only aborts on pre-flight configuration errors.

use crate::config::RunConfig;
use crate::error::Result;
use crate::generate::{Pacing, TextSource};
use crate::platform::RepoService;
use crate::run::{IterationPlan, ProgressCallback};
use crate::types::PullRequest;
use chrono::Utc;
use tokio::time::sleep;

/// Result of run execution
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    /// Pull requests that were opened, in creation order
    pub opened_prs: Vec<PullRequest>,
    /// Numbers of pull requests that merged successfully
    pub merged_prs: Vec<u64>,
    /// Numbers of pull requests whose merge failed (left open)
    pub failed_merges: Vec<u64>,
    /// Iterations abandoned before a pull request was opened
    pub abandoned_iterations: u32,
}

impl RunReport {
    /// Check whether every iteration opened and merged a pull request
    pub fn is_clean(&self) -> bool {
        self.failed_merges.is_empty() && self.abandoned_iterations == 0
    }

    /// Number of pull requests merged
    pub fn merge_count(&self) -> usize {
        self.merged_prs.len()
    }

    /// Number of pull requests opened
    pub fn opened_count(&self) -> usize {
        self.opened_prs.len()
    }
}

/// Execute the run loop (EFFECTFUL)
///
/// Performs `config.count` iterations sequentially. Each iteration creates a
/// branch, commits a file to it, opens a pull request, pauses, and merges.
/// Branch/file/PR failures abandon the rest of that iteration; merge failures
/// are logged and do not abort the run. The caller must have validated
/// `config` beforehand.
///
/// # Arguments
/// * `config` - validated run configuration
/// * `platform` - repository service for the remote API calls
/// * `text` - randomized text source for iteration content
/// * `pacing` - delay source for the pre-merge and inter-iteration pauses
/// * `progress` - callback for status lines
pub async fn execute_run(
    config: &RunConfig,
    platform: &dyn RepoService,
    text: &dyn TextSource,
    pacing: &dyn Pacing,
    progress: &dyn ProgressCallback,
) -> Result<RunReport> {
    let mut report = RunReport::default();

    for i in 0..config.count {
        progress
            .on_message(&format!(
                "🔄 Creating pull request {} of {}",
                i + 1,
                config.count
            ))
            .await;

        let plan = IterationPlan::generate(text, Utc::now());

        match platform
            .create_branch(&config.base_branch, &plan.branch_name)
            .await
        {
            Ok(()) => {
                progress
                    .on_message(&format!("✅ Created new branch: {}", plan.branch_name))
                    .await;
            }
            Err(e) => {
                progress
                    .on_message(&format!("❌ Error creating branch: {e}"))
                    .await;
                report.abandoned_iterations += 1;
                continue;
            }
        }

        match platform
            .create_or_update_file(
                &plan.branch_name,
                &plan.file_name,
                &plan.file_content,
                &plan.commit_message,
            )
            .await
        {
            Ok(()) => {
                progress
                    .on_message(&format!(
                        "✅ Created/updated file: {} on branch: {}",
                        plan.file_name, plan.branch_name
                    ))
                    .await;
            }
            Err(e) => {
                progress
                    .on_message(&format!("❌ Error creating/updating file: {e}"))
                    .await;
                report.abandoned_iterations += 1;
                continue;
            }
        }

        let pr = match platform
            .create_pull_request(
                &config.base_branch,
                &plan.branch_name,
                &plan.pr_title,
                &plan.pr_body,
            )
            .await
        {
            Ok(pr) => {
                progress
                    .on_message(&format!(
                        "✅ Created pull request #{}: {}",
                        pr.number, pr.title
                    ))
                    .await;
                pr
            }
            Err(e) => {
                progress
                    .on_message(&format!("❌ Error creating pull request: {e}"))
                    .await;
                report.abandoned_iterations += 1;
                continue;
            }
        };
        report.opened_prs.push(pr.clone());

        progress
            .on_message("⏳ Waiting 5 seconds before merging...")
            .await;
        sleep(pacing.pre_merge()).await;

        match platform.merge_pull_request(pr.number).await {
            Ok(result) if result.merged => {
                progress
                    .on_message(&format!("✅ Merged pull request #{}", pr.number))
                    .await;
                report.merged_prs.push(pr.number);
            }
            Ok(result) => {
                // Merge API returned but didn't merge
                let detail = result
                    .message
                    .unwrap_or_else(|| "merge was not performed".to_string());
                progress
                    .on_message(&format!(
                        "❌ Error merging pull request #{}: {detail}",
                        pr.number
                    ))
                    .await;
                report.failed_merges.push(pr.number);
            }
            Err(e) => {
                progress
                    .on_message(&format!("❌ Error merging pull request #{}: {e}", pr.number))
                    .await;
                report.failed_merges.push(pr.number);
            }
        }

        if i + 1 < config.count {
            let gap = pacing.between_iterations();
            progress
                .on_message(&format!(
                    "⏳ Waiting {} seconds before next pull request...",
                    gap.as_secs()
                ))
                .await;
            sleep(gap).await;
        }
    }

    Ok(report)
}
