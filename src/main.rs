//! relog - CLI entry point.

use anyhow::{Context, Result};
use clap::Parser;
use octocrab::Octocrab;
use tracing::info;
use tracing_subscriber::EnvFilter;

use relog::changelog::{Report, collect_entries};
use relog::config::Config;
use relog::error::GitHubError;
use relog::github::fetch_compare_commits;
use relog::jira::JiraClient;
use relog::output::set_output_record;

/// Generate a categorized changelog for the commits between two tags.
#[derive(Parser, Debug)]
#[command(name = "relog")]
#[command(about = "Generate a categorized changelog for the commits between two tags")]
#[command(version)]
struct Cli {
    /// Print the raw multi-line report instead of a workflow output record
    #[arg(long)]
    bare: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Diagnostics go to stderr; stdout carries only the output record.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Step 1: Load configuration
    let config = Config::from_env().context("Incomplete configuration")?;
    let bare = cli.bare || config.bare_output;

    // Step 2: Build the GitHub client
    let octocrab = Octocrab::builder()
        .personal_token(config.github_token.clone())
        .build()
        .context("Failed to build GitHub client")?;

    // Step 3: List the compared commits
    let commits = match fetch_compare_commits(
        &octocrab,
        &config.repository,
        &config.previous_tag,
        &config.current_tag,
    )
    .await
    {
        Ok(commits) => commits,
        Err(GitHubError::ComparisonNotFound { .. }) => {
            // An unresolvable repository or tag yields an empty changelog,
            // not a failed run.
            info!(
                "Comparison not found for {}; emitting empty changelog",
                config.repository
            );
            emit(bare, "");
            return Ok(());
        }
        Err(e) => return Err(e).context("Failed to fetch compared commits"),
    };

    info!(
        "Found {} commit(s) between {} and {}",
        commits.len(),
        config.previous_tag,
        config.current_tag
    );

    // Step 4: Build categorized entries, one Jira lookup per keyed commit
    let jira = JiraClient::new(config.jira_token.clone());
    let entries = collect_entries(&commits, &config.repository, &jira).await;

    info!("Kept {} commit(s) with issue keys", entries.len());

    // Step 5: Render and emit the report
    let report = Report::new(
        &config.repository,
        &config.previous_tag,
        &config.current_tag,
        entries,
    );
    emit(bare, &report.render());

    Ok(())
}

/// Print the report on stdout, raw or as a workflow output record.
fn emit(bare: bool, text: &str) {
    if bare {
        println!("{text}");
    } else {
        println!("{}", set_output_record("changelog", text));
    }
}
