use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::github_types::{GithubIssue, GithubPullRequest, RawGithubEvent};

#[derive(Debug, Clone, Deserialize)]
/// Payload of `IssueCommentEvent` and `IssuesEvent`.
pub struct IssuePayload {
    #[serde(default)]
    pub action: Option<String>,
    pub issue: GithubIssue,
}

#[derive(Debug, Clone, Deserialize)]
/// Payload of `PullRequestEvent` and `PullRequestReviewCommentEvent`.
pub struct PullRequestPayload {
    #[serde(default)]
    pub action: Option<String>,
    pub pull_request: GithubPullRequest,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommitCommentPayload {
    #[serde(default)]
    pub comment: Option<CommitComment>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommitComment {
    #[serde(default)]
    pub html_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
/// Payload of `CreateEvent` and `DeleteEvent`.
pub struct RefPayload {
    #[serde(rename = "ref", default)]
    pub git_ref: Option<String>,
    #[serde(default)]
    pub ref_type: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PushPayload {
    #[serde(rename = "ref", default)]
    pub git_ref: Option<String>,
    #[serde(default)]
    pub size: Option<u64>,
}

#[derive(Debug, Clone)]
/// Enumerates the activity event shapes ghweek understands.
pub enum ActivityEvent {
    IssueComment(IssuePayload),
    Issues(IssuePayload),
    PullRequest(PullRequestPayload),
    PullRequestReviewComment(PullRequestPayload),
    CommitComment(CommitCommentPayload),
    Create(RefPayload),
    Push(PushPayload),
    Delete(RefPayload),
    Unrecognized { kind: String, payload: Value },
}

impl ActivityEvent {
    /// Decodes the payload of `event` according to its `type` field.
    ///
    /// Unknown types become `Unrecognized`; a known type whose payload does
    /// not fit its shape is an error.
    pub fn decode(event: &RawGithubEvent) -> Result<Self, serde_json::Error> {
        let decoded = match event.kind.as_str() {
            "IssueCommentEvent" => Self::IssueComment(decode_payload(&event.payload)?),
            "IssuesEvent" => Self::Issues(decode_payload(&event.payload)?),
            "PullRequestEvent" => Self::PullRequest(decode_payload(&event.payload)?),
            "PullRequestReviewCommentEvent" => {
                Self::PullRequestReviewComment(decode_payload(&event.payload)?)
            }
            "CommitCommentEvent" => Self::CommitComment(decode_payload(&event.payload)?),
            "CreateEvent" => Self::Create(decode_payload(&event.payload)?),
            "PushEvent" => Self::Push(decode_payload(&event.payload)?),
            "DeleteEvent" => Self::Delete(decode_payload(&event.payload)?),
            other => Self::Unrecognized {
                kind: other.to_string(),
                payload: event.payload.clone(),
            },
        };
        Ok(decoded)
    }

    pub fn kind_label(&self) -> &str {
        match self {
            Self::IssueComment(_) => "IssueCommentEvent",
            Self::Issues(_) => "IssuesEvent",
            Self::PullRequest(_) => "PullRequestEvent",
            Self::PullRequestReviewComment(_) => "PullRequestReviewCommentEvent",
            Self::CommitComment(_) => "CommitCommentEvent",
            Self::Create(_) => "CreateEvent",
            Self::Push(_) => "PushEvent",
            Self::Delete(_) => "DeleteEvent",
            Self::Unrecognized { kind, .. } => kind,
        }
    }
}

fn decode_payload<T: DeserializeOwned>(payload: &Value) -> Result<T, serde_json::Error> {
    T::deserialize(payload)
}

#[cfg(test)]
mod tests {
    use super::ActivityEvent;
    use crate::github_types::RawGithubEvent;
    use serde_json::{json, Value};

    fn raw_event(kind: &str, payload: Value) -> RawGithubEvent {
        serde_json::from_value(json!({
            "id": "1",
            "type": kind,
            "created_at": "2026-01-06T12:00:00Z",
            "payload": payload,
        }))
        .expect("raw event")
    }

    #[test]
    fn unit_decode_routes_issue_comment_payload() {
        let event = raw_event(
            "IssueCommentEvent",
            json!({
                "action": "created",
                "issue": { "html_url": "https://github.com/acme/widgets/issues/3", "title": "Crash" },
                "comment": { "body": "same here" }
            }),
        );
        match ActivityEvent::decode(&event).expect("decode") {
            ActivityEvent::IssueComment(payload) => {
                assert_eq!(payload.issue.title, "Crash");
                assert_eq!(payload.action.as_deref(), Some("created"));
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn functional_decode_keeps_unknown_types_as_unrecognized() {
        let event = raw_event("WatchEvent", json!({ "action": "started" }));
        let decoded = ActivityEvent::decode(&event).expect("decode");
        assert_eq!(decoded.kind_label(), "WatchEvent");
        match decoded {
            ActivityEvent::Unrecognized { payload, .. } => {
                assert_eq!(payload["action"], "started");
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn functional_decode_accepts_ignored_shapes() {
        let push = raw_event("PushEvent", json!({ "ref": "refs/heads/main", "size": 2 }));
        assert!(matches!(
            ActivityEvent::decode(&push).expect("decode"),
            ActivityEvent::Push(_)
        ));
        let create = raw_event("CreateEvent", json!({ "ref": "feature", "ref_type": "branch" }));
        assert!(matches!(
            ActivityEvent::decode(&create).expect("decode"),
            ActivityEvent::Create(_)
        ));
    }

    #[test]
    fn regression_decode_rejects_known_type_with_malformed_payload() {
        let event = raw_event("PullRequestEvent", json!({ "action": "opened" }));
        assert!(ActivityEvent::decode(&event).is_err());

        let event = raw_event("IssuesEvent", json!("not an object"));
        assert!(ActivityEvent::decode(&event).is_err());
    }

    #[test]
    fn unit_decode_reads_commit_comment_url() {
        let event = raw_event(
            "CommitCommentEvent",
            json!({
                "comment": {
                    "html_url": "https://github.com/acme/widgets/commit/abc#r1",
                    "body": "nit"
                }
            }),
        );
        match ActivityEvent::decode(&event).expect("decode") {
            ActivityEvent::CommitComment(payload) => {
                let comment = payload.comment.expect("comment");
                assert_eq!(
                    comment.html_url.as_deref(),
                    Some("https://github.com/acme/widgets/commit/abc#r1")
                );
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }
}
