//! relog - A CLI tool that generates a categorized release changelog between two tags.
//!
//! # Overview
//!
//! relog lists the commits between two tags via the GitHub compare API, looks
//! up the Jira issue referenced by each commit message to categorize it, and
//! renders a grouped markdown changelog (Improvements, Bugs, Miscellaneous)
//! suitable for a CI output channel.

pub mod changelog;
pub mod config;
pub mod error;
pub mod github;
pub mod jira;
pub mod output;

// Re-export commonly used types
pub use changelog::{Category, ChangelogEntry, Report};
pub use config::Config;
pub use error::{ConfigError, GitHubError, JiraError};
pub use github::RawCommit;
pub use jira::{IssueMetadata, JiraClient};
