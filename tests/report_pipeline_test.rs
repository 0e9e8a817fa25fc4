//! Integration tests for the commit-to-report pipeline.

mod common;

use relog::changelog::{Report, collect_entries};
use relog::github::RawCommit;
use relog::jira::JiraClient;
use wiremock::MockServer;

const REPO: &str = "ibexa/core";

fn commit(message: &str, parent_count: usize) -> RawCommit {
    RawCommit {
        message: message.to_string(),
        parent_count,
    }
}

fn mock_jira(server: &MockServer) -> JiraClient {
    JiraClient::with_base_url("test-token", server.uri())
}

#[tokio::test]
async fn test_end_to_end_single_bug() {
    let server = MockServer::start().await;
    common::mount_jira_issue(&server, "ABC-12", common::jira_issue(&[], "Bug")).await;

    let commits = vec![
        commit("ABC-12 Fix crash (#45)", 1),
        commit("Merge pull request #50", 2),
        commit("no ticket here", 1),
    ];

    let jira = mock_jira(&server);
    let entries = collect_entries(&commits, REPO, &jira).await;
    let report = Report::new(REPO, "v1.0.0", "v1.1.0", entries);
    let rendered = report.render();

    let expected_entry = format!(
        "- [ABC-12]({base}/browse/ABC-12) Fix crash ([#45](https://github.com/ibexa/core/pull/45))",
        base = server.uri()
    );

    assert!(rendered.contains("### Bugs\n"));
    assert!(rendered.contains(&expected_entry));
    assert!(!rendered.contains("### Improvements"));
    assert!(!rendered.contains("### Miscellaneous"));
    assert!(!rendered.contains("Merge pull request"));
    assert!(!rendered.contains("no ticket here"));
}

#[tokio::test]
async fn test_merge_commit_with_key_is_still_excluded() {
    let server = MockServer::start().await;
    common::mount_jira_issue(&server, "ABC-1", common::jira_issue(&[], "Bug")).await;

    let commits = vec![commit("ABC-1 Merge branch into main", 2)];

    let jira = mock_jira(&server);
    let entries = collect_entries(&commits, REPO, &jira).await;

    assert!(entries.is_empty());
}

#[tokio::test]
async fn test_entries_grouped_and_ordered() {
    let server = MockServer::start().await;
    common::mount_jira_issue(&server, "ABC-1", common::jira_issue(&["Backend"], "Story")).await;
    common::mount_jira_issue(&server, "ABC-2", common::jira_issue(&[], "Bug")).await;
    common::mount_jira_issue(&server, "ABC-3", common::jira_issue(&["QA"], "Task")).await;
    common::mount_jira_issue(&server, "ABC-4", common::jira_issue(&[], "Bug")).await;

    let commits = vec![
        commit("ABC-2 Fix first bug", 1),
        commit("ABC-3 Update CI config", 1),
        commit("ABC-1 Improve indexing", 1),
        commit("ABC-4 Fix second bug", 1),
    ];

    let jira = mock_jira(&server);
    let entries = collect_entries(&commits, REPO, &jira).await;
    assert_eq!(entries.len(), 4);

    let rendered = Report::new(REPO, "v1.0.0", "v1.1.0", entries).render();

    // Fixed bucket order, insertion order inside each bucket.
    let improvements = rendered.find("### Improvements").unwrap();
    let bugs = rendered.find("### Bugs").unwrap();
    let misc = rendered.find("### Miscellaneous").unwrap();
    assert!(improvements < bugs);
    assert!(bugs < misc);

    let first_bug = rendered.find("Fix first bug").unwrap();
    let second_bug = rendered.find("Fix second bug").unwrap();
    assert!(first_bug < second_bug);
}

#[tokio::test]
async fn test_lookup_failure_lands_in_improvements() {
    let server = MockServer::start().await;
    common::mount_jira_error(&server, "TYPO-99", 404).await;

    let commits = vec![commit("TYPO-99 Misc change (#7)", 1)];

    let jira = mock_jira(&server);
    let entries = collect_entries(&commits, REPO, &jira).await;
    let rendered = Report::new(REPO, "v1.0.0", "v1.1.0", entries).render();

    assert!(rendered.contains("### Improvements\n"));
    assert!(rendered.contains("[#7](https://github.com/ibexa/core/pull/7)"));
}

#[tokio::test]
async fn test_empty_report_body() {
    let server = MockServer::start().await;

    let commits = vec![
        commit("Merge pull request #50", 2),
        commit("no ticket here", 1),
    ];

    let jira = mock_jira(&server);
    let entries = collect_entries(&commits, REPO, &jira).await;
    let rendered = Report::new(REPO, "v1.0.0", "v1.1.0", entries).render();

    let expected = "[ibexa/core](https://github.com/ibexa/core) changes between \
                    [v1.0.0](https://github.com/ibexa/core/releases/tag/v1.0.0) and \
                    [v1.1.0](https://github.com/ibexa/core/releases/tag/v1.1.0)\
                    \n\nNo significant changes.";
    assert_eq!(rendered, expected);
}

#[tokio::test]
async fn test_output_record_roundtrip() {
    let server = MockServer::start().await;
    common::mount_jira_issue(&server, "ABC-12", common::jira_issue(&[], "Bug")).await;

    let commits = vec![commit("ABC-12 Fix crash", 1)];

    let jira = mock_jira(&server);
    let entries = collect_entries(&commits, REPO, &jira).await;
    let rendered = Report::new(REPO, "v1.0.0", "v1.1.0", entries).render();
    let record = relog::output::set_output_record("changelog", &rendered);

    assert!(record.starts_with("::set-output name=changelog::"));
    assert!(!record.contains('\n'));
    assert!(record.contains("%0A%0A### Bugs%0A"));
}
