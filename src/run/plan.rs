//! Iteration planning - pure functions for generating run content
//!
//! No I/O happens here - the text source and timestamp are passed in, making
//! the generated shapes easy to unit test.

use crate::generate::TextSource;
use chrono::{DateTime, Utc};

/// Everything one iteration creates on the remote, generated fresh each loop.
///
/// Names carry a millisecond timestamp suffix so repeated iterations never
/// collide. The plan has no persisted identity; it is discarded once the
/// iteration completes or is abandoned.
#[derive(Debug, Clone)]
pub struct IterationPlan {
    /// Branch to create off the base branch
    pub branch_name: String,
    /// Markdown file committed to the branch
    pub file_name: String,
    /// Contents of the committed file
    pub file_content: String,
    /// Commit message for the file write
    pub commit_message: String,
    /// Pull request title
    pub pr_title: String,
    /// Pull request body
    pub pr_body: String,
}

impl IterationPlan {
    /// Generate a plan from randomized text plus a uniqueness timestamp
    pub fn generate(text: &dyn TextSource, now: DateTime<Utc>) -> Self {
        let millis = now.timestamp_millis();

        let branch_name = format!("feature-{}-{millis}", text.slug());
        let file_name = format!("feature-{}-{millis}.md", text.word());
        let file_content = format!(
            "# {}\n\n{}\n\nCreated at: {}",
            text.sentence(),
            text.paragraphs(3),
            now.to_rfc3339()
        );
        let commit_message = format!("Add {file_name} with new feature description");
        let pr_title = format!("Feature: {}", text.sentence());
        let pr_body = text.paragraphs(2);

        Self {
            branch_name,
            file_name,
            file_content,
            commit_message,
            pr_title,
            pr_body,
        }
    }
}
