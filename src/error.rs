//! Error types for relog modules using thiserror.

use thiserror::Error;

/// Errors from GitHub API operations.
#[derive(Error, Debug)]
pub enum GitHubError {
    #[error("Comparison not found: {repo} has no range {base}...{head}")]
    ComparisonNotFound {
        repo: String,
        base: String,
        head: String,
    },

    #[error("Rate limited by GitHub API. Resets at: {reset_time}")]
    RateLimited { reset_time: String },

    #[error("Failed to fetch comparison: {0}")]
    FetchCompare(#[source] Box<octocrab::Error>),
}

/// Errors from Jira issue lookups.
#[derive(Error, Debug)]
pub enum JiraError {
    #[error("Issue not found: {0}")]
    NotFound(String),

    #[error("Jira authentication failed (HTTP {0}). Check the issue tracker token")]
    Auth(u16),

    #[error("Jira returned HTTP {status} for {key}")]
    UnexpectedStatus { key: String, status: u16 },

    #[error("Failed to reach Jira: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Jira returned an unreadable issue payload: {0}")]
    InvalidResponse(#[source] reqwest::Error),
}

/// Errors from configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Required environment variable {0} is not set or empty")]
    MissingVariable(&'static str),
}
