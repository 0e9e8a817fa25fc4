//! Per-commit entry construction.

use crate::changelog::category::{Category, classify_issue};
use crate::changelog::links::{rewrite_issue_key, rewrite_pr_refs};
use crate::github::RawCommit;
use crate::jira::JiraClient;

/// One rendered changelog line with its bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogEntry {
    pub text: String,
    pub category: Category,
}

/// Build the entry for one commit, or `None` when the commit carries no
/// issue key.
///
/// Exactly one Jira lookup happens per commit that has a key; keyless
/// commits are rejected before any network call.
pub async fn build_entry(
    commit: &RawCommit,
    repo: &str,
    jira: &JiraClient,
) -> Option<ChangelogEntry> {
    let first_line = commit.message.lines().next().unwrap_or("");

    let (rewritten, key) = rewrite_issue_key(first_line, jira.base_url());
    let key = key?;

    let category = classify_issue(jira, &key).await;
    let text = rewrite_pr_refs(&rewritten, repo);

    Some(ChangelogEntry {
        text: format!("- {text}"),
        category,
    })
}

/// Build entries for a commit sequence, skipping merge commits.
///
/// Commits are processed one at a time, each lookup awaited before the next
/// commit starts, and input order is preserved.
pub async fn collect_entries(
    commits: &[RawCommit],
    repo: &str,
    jira: &JiraClient,
) -> Vec<ChangelogEntry> {
    let mut entries = Vec::new();

    for commit in commits {
        if commit.is_merge() {
            continue;
        }
        if let Some(entry) = build_entry(commit, repo, jira).await {
            entries.push(entry);
        }
    }

    entries
}
