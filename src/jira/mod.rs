//! Jira issue lookups over the REST API.

pub mod client;

pub use client::{DEFAULT_JIRA_BASE_URL, IssueMetadata, JiraClient};
