//! Run command - drive the pull request loop end to end

use crate::cli::CliProgress;
use crate::cli::style::{CHECK, Stylize};
use anstream::println;
use pr_mill::config::RunConfig;
use pr_mill::error::Result;
use pr_mill::generate::{HumanPacing, LoremText};
use pr_mill::platform::{GitHubService, RepoService};
use pr_mill::run::{RunReport, execute_run};
use terminal_link::Link;

/// Run the pull request loop against GitHub
pub async fn run_loop(config: &RunConfig) -> Result<()> {
    let platform = GitHubService::new(
        config.token.expose(),
        config.owner.clone(),
        config.repo.clone(),
        None,
    )?;

    println!("{}", "Starting pull request run".emphasis());
    println!(
        "📊 Creating {} pull request(s) in {}\n",
        config.count.accent(),
        platform.repo().slug().accent()
    );

    let progress = CliProgress::compact();
    let report = execute_run(config, &platform, &LoremText, &HumanPacing, &progress).await?;
    progress.finish();

    print_summary(&report);
    Ok(())
}

/// Print the completion summary with links to the opened PRs
fn print_summary(report: &RunReport) {
    println!();
    if report.is_clean() {
        println!(
            "{}",
            "✨ All pull requests created and merged!".success()
        );
    } else {
        println!(
            "{} {} opened, {} merged, {} merge failure(s), {} abandoned iteration(s)",
            format!("{CHECK} Run complete:").emphasis(),
            report.opened_count().accent(),
            report.merge_count().accent(),
            report.failed_merges.len().warn(),
            report.abandoned_iterations.warn()
        );
    }

    for pr in &report.opened_prs {
        let label = format!("#{} {}", pr.number, pr.title);
        if supports_hyperlinks::supports_hyperlinks() {
            println!("   {}", Link::new(&label, &pr.html_url));
        } else {
            println!("   {label} {}", pr.html_url.muted());
        }
    }
}
