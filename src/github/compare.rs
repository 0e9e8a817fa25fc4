//! Commit listing via the GitHub compare API.

use octocrab::Octocrab;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::GitHubError;

/// A commit from the compared range, reduced to what the changelog needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawCommit {
    pub message: String,
    pub parent_count: usize,
}

impl RawCommit {
    /// Merge commits carry two or more parents and never become entries.
    pub fn is_merge(&self) -> bool {
        self.parent_count >= 2
    }
}

/// Compare response, decoded down to the fields we read.
#[derive(Debug, Deserialize)]
struct Comparison {
    total_commits: usize,
    commits: Vec<CompareCommit>,
}

#[derive(Debug, Deserialize)]
struct CompareCommit {
    commit: CommitDetail,
    #[serde(default)]
    parents: Vec<ParentRef>,
}

#[derive(Debug, Deserialize)]
struct CommitDetail {
    message: String,
}

#[derive(Debug, Deserialize)]
struct ParentRef {
    #[allow(dead_code)]
    sha: String,
}

#[derive(Serialize)]
struct PageParams {
    per_page: u8,
    page: u32,
}

const PER_PAGE: u8 = 100;

/// Fetch the commits between two tags, in the order the compare API
/// returns them.
///
/// The octocrab client is a parameter so tests can point it at a mock
/// server. Returns `GitHubError::ComparisonNotFound` when the repository or
/// either tag does not resolve.
pub async fn fetch_compare_commits(
    octocrab: &Octocrab,
    repo: &str,
    base: &str,
    head: &str,
) -> Result<Vec<RawCommit>, GitHubError> {
    let route = format!("/repos/{repo}/compare/{base}...{head}");

    let mut commits = Vec::new();
    let mut page = 1u32;

    loop {
        let result: Result<Comparison, octocrab::Error> = octocrab
            .get(&route, Some(&PageParams { per_page: PER_PAGE, page }))
            .await;

        let comparison = match result {
            Ok(comparison) => comparison,
            Err(e) => {
                // Check error content using both Display and Debug output
                // to handle different octocrab error formats
                let err_display = e.to_string();
                let err_debug = format!("{:?}", e);

                if err_display.to_lowercase().contains("rate limit")
                    || err_debug.to_lowercase().contains("rate limit")
                {
                    return Err(GitHubError::RateLimited {
                        reset_time: "unknown".to_string(),
                    });
                }
                if err_display.contains("Not Found") || err_debug.contains("Not Found") {
                    return Err(GitHubError::ComparisonNotFound {
                        repo: repo.to_string(),
                        base: base.to_string(),
                        head: head.to_string(),
                    });
                }
                return Err(GitHubError::FetchCompare(Box::new(e)));
            }
        };

        let total = comparison.total_commits;
        let received = comparison.commits.len();

        commits.extend(comparison.commits.into_iter().map(|c| RawCommit {
            message: c.commit.message,
            parent_count: c.parents.len(),
        }));

        if received == 0 || commits.len() >= total {
            break;
        }

        page += 1;

        // Safety limit to prevent infinite loops
        if page > 50 {
            warn!(
                "Reached 50-page safety limit while fetching comparison for {}",
                repo
            );
            break;
        }
    }

    Ok(commits)
}
