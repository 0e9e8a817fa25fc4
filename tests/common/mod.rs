//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Build a Jira issue payload with the given components and issue type.
pub fn jira_issue(components: &[&str], issue_type: &str) -> Value {
    let component_objects: Vec<Value> = components
        .iter()
        .map(|name| json!({ "name": name }))
        .collect();

    json!({
        "fields": {
            "components": component_objects,
            "issuetype": { "name": issue_type }
        }
    })
}

/// Mount a successful issue lookup for `key`.
pub async fn mount_jira_issue(server: &MockServer, key: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(format!("/rest/api/2/issue/{key}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Mount a failing issue lookup for `key`.
pub async fn mount_jira_error(server: &MockServer, key: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(format!("/rest/api/2/issue/{key}")))
        .respond_with(ResponseTemplate::new(status).set_body_json(json!({
            "errorMessages": ["Issue does not exist or you do not have permission to see it."]
        })))
        .mount(server)
        .await;
}

/// Build one commit object of a compare payload.
pub fn compare_commit(message: &str, parent_count: usize) -> Value {
    let parents: Vec<Value> = (0..parent_count)
        .map(|i| json!({ "sha": format!("{:040x}", i + 1) }))
        .collect();

    json!({
        "commit": { "message": message },
        "parents": parents
    })
}

/// Build a compare payload for one page of commits.
pub fn compare_payload(total_commits: usize, commits: Vec<Value>) -> Value {
    json!({
        "total_commits": total_commits,
        "commits": commits
    })
}
