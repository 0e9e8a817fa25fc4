//! Entry categories derived from Jira issue metadata.

use tracing::debug;

use crate::jira::{IssueMetadata, JiraClient};

/// Report buckets, in rendering order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Improvement,
    Bug,
    Miscellaneous,
}

impl Category {
    /// Get the markdown heading for the category's bucket.
    pub fn heading(&self) -> &'static str {
        match self {
            Self::Improvement => "Improvements",
            Self::Bug => "Bugs",
            Self::Miscellaneous => "Miscellaneous",
        }
    }

    /// Get the fixed rendering order of the bucket.
    pub fn order(&self) -> u8 {
        match self {
            Self::Improvement => 0,
            Self::Bug => 1,
            Self::Miscellaneous => 2,
        }
    }

    /// Map issue metadata to a category.
    ///
    /// The "QA" component wins over everything, including a "Bug" issue
    /// type. Anything that is neither lands in Improvements.
    pub fn from_metadata(metadata: &IssueMetadata) -> Self {
        if metadata.components.iter().any(|c| c == "QA") {
            Self::Miscellaneous
        } else if metadata.issue_type == "Bug" {
            Self::Bug
        } else {
            Self::Improvement
        }
    }
}

/// Look up an issue and derive its category.
///
/// Fail-open: any lookup failure (unknown key, auth, transport) classifies
/// the entry as Improvement instead of aborting the run.
pub async fn classify_issue(jira: &JiraClient, key: &str) -> Category {
    match jira.fetch_issue(key).await {
        Ok(metadata) => Category::from_metadata(&metadata),
        Err(e) => {
            debug!("Jira lookup for {} failed ({}); defaulting to Improvement", key, e);
            Category::Improvement
        }
    }
}
