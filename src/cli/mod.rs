//! CLI for pr-mill
//!
//! Configuration is resolved in three layers: flags, then environment
//! variables, then interactive prompts (unless `--non-interactive`).

mod progress;
mod prompt;
mod run;
mod style;

pub use progress::CliProgress;
pub use style::Stylize;

use clap::Parser;
use pr_mill::auth::resolve_token;
use pr_mill::config::{AuthToken, DEFAULT_BASE_BRANCH, RunConfig};
use pr_mill::error::Result;
use tracing::debug;

/// Environment variable fallback for `--username`
pub const USERNAME_ENV_VAR: &str = "GITHUB_USERNAME";

/// Environment variable fallback for `--repo`
pub const REPO_ENV_VAR: &str = "TARGET_REPO";

/// Command-line arguments
#[derive(Debug, Parser)]
#[command(
    name = "pr-mill",
    version,
    about = "Create and merge pull requests to build up activity on a GitHub repository"
)]
pub struct Cli {
    /// GitHub personal access token (falls back to GITHUB_TOKEN)
    #[arg(short, long)]
    pub token: Option<String>,

    /// GitHub username that owns the target repository (falls back to GITHUB_USERNAME)
    #[arg(short, long)]
    pub username: Option<String>,

    /// Target repository name (falls back to TARGET_REPO)
    #[arg(short, long)]
    pub repo: Option<String>,

    /// Number of pull requests to create
    #[arg(short, long, default_value_t = 1)]
    pub number: u32,

    /// Base branch pull requests are opened against
    #[arg(long, default_value = DEFAULT_BASE_BRANCH)]
    pub base: String,

    /// Run without interactive prompts
    #[arg(long)]
    pub non_interactive: bool,
}

/// Run the CLI command: resolve configuration, validate, drive the loop
pub async fn run(cli: Cli) -> Result<()> {
    let config = resolve_config(cli)?;
    config.validate()?;
    run::run_loop(&config).await
}

/// Resolve a `RunConfig` from flags, environment, and prompts.
///
/// Prompting only fills fields that are still missing; validation remains
/// the configuration's job so `--non-interactive` runs surface the same
/// errors without a terminal.
fn resolve_config(cli: Cli) -> Result<RunConfig> {
    let interactive = !cli.non_interactive;

    let token = match resolve_token(cli.token) {
        Some((token, source)) => {
            debug!(source = ?source, "resolved token");
            token
        }
        None if interactive => AuthToken::new(prompt::prompt_token()?),
        None => AuthToken::new(String::new()),
    };

    let owner = match cli
        .username
        .filter(|v| !v.is_empty())
        .or_else(|| env_fallback(USERNAME_ENV_VAR))
    {
        Some(owner) => owner,
        None if interactive => prompt::prompt_username()?,
        None => String::new(),
    };

    let repo = match cli
        .repo
        .filter(|v| !v.is_empty())
        .or_else(|| env_fallback(REPO_ENV_VAR))
    {
        Some(repo) => repo,
        None if interactive => prompt::prompt_repo()?,
        None => String::new(),
    };

    Ok(RunConfig {
        token,
        owner,
        repo,
        count: cli.number,
        base_branch: cli.base,
    })
}

/// Read an environment variable, treating empty values as unset
fn env_fallback(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|v| !v.is_empty())
}
