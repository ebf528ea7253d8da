use httpmock::prelude::*;
use serde_json::{json, Value};

use ghweek_github::{GithubApiClient, GithubApiClientConfig};
use ghweek_report::{
    discover_items, reconcile, render_report, ItemUrl, ReportCategory, ReportConfig, ReportError,
};

const PR_URL: &str = "https://github.com/acme/widgets/pull/42";

fn client_for(server: &MockServer) -> GithubApiClient {
    GithubApiClient::new(GithubApiClientConfig {
        api_base: server.base_url(),
        token: "test-token".to_string(),
        request_timeout_ms: 3_000,
    })
    .expect("client")
}

fn opened_pr_event(title: &str) -> Value {
    json!({
        "id": "2",
        "type": "PullRequestEvent",
        "created_at": "2026-01-07T10:00:00Z",
        "payload": {
            "action": "opened",
            "number": 42,
            "pull_request": {
                "html_url": PR_URL,
                "title": title,
                "state": "open",
                "user": { "login": "octo" },
                "labels": []
            }
        }
    })
}

fn issue_comment_on_pr_event(title: &str) -> Value {
    json!({
        "id": "1",
        "type": "IssueCommentEvent",
        "created_at": "2026-01-06T10:00:00Z",
        "payload": {
            "action": "created",
            "issue": {
                "html_url": PR_URL,
                "title": title,
                "pull_request": { "url": "https://api.github.com/repos/acme/widgets/pulls/42" }
            },
            "comment": { "body": "ready for another look" }
        }
    })
}

#[tokio::test]
async fn integration_single_open_pull_request_reports_under_review_with_live_title() {
    let server = MockServer::start();
    let listing = server.mock(|when, then| {
        when.method(GET).path("/users/octo/events/public");
        then.status(200).json_body(json!([
            opened_pr_event("Event title"),
            issue_comment_on_pr_event("Even older title"),
        ]));
    });
    let lookup = server.mock(|when, then| {
        when.method(GET).path("/repos/acme/widgets/pulls/42");
        then.status(200).json_body(json!({
            "html_url": PR_URL,
            "title": "Reconciled title",
            "state": "open",
            "merged": false,
            "user": { "login": "octo" },
            "labels": [{ "name": "enhancement" }]
        }));
    });

    let client = client_for(&server);
    let config = ReportConfig::new("octo");
    let events = client
        .list_user_events("octo", false)
        .await
        .expect("events");
    let discovered = discover_items(&events, &config).expect("discover");
    assert_eq!(discovered.item_count(), 1);

    let partition = reconcile(discovered, &client, &config)
        .await
        .expect("reconcile");
    listing.assert_calls(1);
    lookup.assert_calls(1);
    assert_eq!(
        partition.category_of(&ItemUrl::from(PR_URL)),
        Some(ReportCategory::UnderReview)
    );

    let report = render_report(&partition);
    assert_eq!(
        report,
        format!("* GitHub\n    * Under Review\n        * [Reconciled title]({PR_URL})")
    );
    assert_eq!(report.matches("Under Review").count(), 1);
    assert!(!report.contains("Event title"));
}

#[tokio::test]
async fn integration_lookup_failure_aborts_reconciliation() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/repos/acme/widgets/pulls/42");
        then.status(404).body("{\"message\":\"Not Found\"}");
    });

    let client = client_for(&server);
    let config = ReportConfig::new("octo");
    let events = vec![serde_json::from_value(opened_pr_event("Gone")).expect("event")];
    let discovered = discover_items(&events, &config).expect("discover");
    let error = reconcile(discovered, &client, &config)
        .await
        .expect_err("lookup should fail");
    match &error {
        ReportError::PullRequestLookup { url, source } => {
            assert_eq!(url, PR_URL);
            assert!(format!("{source:#}").contains("status 404"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn integration_reviewed_pull_request_from_another_author_ignores_wip_label() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/repos/acme/widgets/pulls/42");
        then.status(200).json_body(json!({
            "html_url": PR_URL,
            "title": "Teammate change",
            "state": "open",
            "merged": false,
            "user": { "login": "hubot" },
            "labels": [{ "name": "do-not-merge/work-in-progress" }]
        }));
    });

    let client = client_for(&server);
    let config = ReportConfig::new("octo");
    let events =
        vec![serde_json::from_value(issue_comment_on_pr_event("Teammate change")).expect("event")];
    let discovered = discover_items(&events, &config).expect("discover");
    let partition = reconcile(discovered, &client, &config)
        .await
        .expect("reconcile");
    assert_eq!(
        partition.category_of(&ItemUrl::from(PR_URL)),
        Some(ReportCategory::Reviewed)
    );
    assert!(partition.in_progress.is_empty());
}
