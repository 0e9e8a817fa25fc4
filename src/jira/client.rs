//! Jira REST client.
//!
//! One lookup per issue key, no caching, no retries. Failure handling is the
//! caller's concern; this client only reports what happened, typed.

use reqwest::StatusCode;
use serde::Deserialize;

use crate::error::JiraError;

/// Production issue tracker.
pub const DEFAULT_JIRA_BASE_URL: &str = "https://issues.ibexa.co";

/// The issue attributes the classifier reads.
#[derive(Debug, Clone, Default)]
pub struct IssueMetadata {
    pub components: Vec<String>,
    pub issue_type: String,
}

/// Issue payload, decoded down to the fields we read.
#[derive(Debug, Deserialize)]
struct IssueResponse {
    fields: IssueFields,
}

#[derive(Debug, Deserialize)]
struct IssueFields {
    #[serde(default)]
    components: Vec<ComponentRef>,
    issuetype: Option<IssueTypeRef>,
}

#[derive(Debug, Deserialize)]
struct ComponentRef {
    name: String,
}

#[derive(Debug, Deserialize)]
struct IssueTypeRef {
    name: String,
}

/// Jira client carrying the HTTP client and bearer credential.
#[derive(Debug, Clone)]
pub struct JiraClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl JiraClient {
    /// Create a client against the production tracker.
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_base_url(token, DEFAULT_JIRA_BASE_URL)
    }

    /// Create a client against an arbitrary base URL.
    ///
    /// This allows dependency injection for testing with mock servers.
    pub fn with_base_url(token: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    /// Base URL of the tracker this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Canonical browse link for an issue key.
    pub fn browse_url(&self, key: &str) -> String {
        format!("{}/browse/{}", self.base_url, key)
    }

    /// Fetch the classification-relevant metadata of one issue.
    pub async fn fetch_issue(&self, key: &str) -> Result<IssueMetadata, JiraError> {
        let url = format!(
            "{}/rest/api/2/issue/{}?fields=components,issuetype",
            self.base_url, key
        );

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.token)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(JiraError::Transport)?;

        match response.status() {
            status if status.is_success() => {}
            StatusCode::NOT_FOUND => return Err(JiraError::NotFound(key.to_string())),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(JiraError::Auth(response.status().as_u16()));
            }
            status => {
                return Err(JiraError::UnexpectedStatus {
                    key: key.to_string(),
                    status: status.as_u16(),
                });
            }
        }

        let issue: IssueResponse = response.json().await.map_err(JiraError::InvalidResponse)?;

        Ok(IssueMetadata {
            components: issue
                .fields
                .components
                .into_iter()
                .map(|c| c.name)
                .collect(),
            issue_type: issue
                .fields
                .issuetype
                .map(|t| t.name)
                .unwrap_or_default(),
        })
    }
}
