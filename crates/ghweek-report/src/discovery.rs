//! Routes activity events into the name registry, the plain issue set and the
//! pull request reference map.

use std::collections::{BTreeMap, BTreeSet};

use ghweek_github::activity_event::{IssuePayload, PullRequestPayload};
use ghweek_github::{ActivityEvent, GithubIssue, GithubPullRequest, RawGithubEvent};

use crate::error::ReportError;
use crate::name_registry::{ItemUrl, NameRegistry};
use crate::pull_request_ref::PullRequestRef;
use crate::report_config::ReportConfig;

#[derive(Debug, Clone, Default)]
/// Everything discovery learned from one event stream.
pub struct DiscoveredItems {
    pub names: NameRegistry,
    pub issues: BTreeSet<ItemUrl>,
    pub pull_requests: BTreeMap<ItemUrl, PullRequestRef>,
}

impl DiscoveredItems {
    /// Number of distinct issues and pull requests discovered.
    pub fn item_count(&self) -> usize {
        self.issues.len() + self.pull_requests.len()
    }

    fn add_issue(&mut self, issue: &GithubIssue, web_root: &str) -> Result<(), ReportError> {
        let url = self.names.record_first_seen(issue);
        if issue.is_pull_request() {
            self.insert_pull_request(url, web_root)
        } else {
            self.issues.insert(url);
            Ok(())
        }
    }

    fn add_pull_request(
        &mut self,
        pull_request: &GithubPullRequest,
        web_root: &str,
    ) -> Result<(), ReportError> {
        let url = self.names.record_first_seen(pull_request);
        self.insert_pull_request(url, web_root)
    }

    fn insert_pull_request(&mut self, url: ItemUrl, web_root: &str) -> Result<(), ReportError> {
        if self.pull_requests.contains_key(&url) {
            return Ok(());
        }
        let reference = PullRequestRef::parse(url.as_str(), web_root)?;
        self.pull_requests.insert(url, reference);
        Ok(())
    }
}

/// Decodes and routes `events`, which must be ordered newest first.
pub fn discover_items(
    events: &[RawGithubEvent],
    config: &ReportConfig,
) -> Result<DiscoveredItems, ReportError> {
    let decoded = events
        .iter()
        .map(|event| {
            ActivityEvent::decode(event).map_err(|source| ReportError::EventDecode {
                event_id: event.id.clone(),
                kind: event.kind.clone(),
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let web_root = config.normalized_web_root();
    let mut items = DiscoveredItems::default();
    for event in &decoded {
        match event {
            ActivityEvent::IssueComment(IssuePayload { action, issue })
            | ActivityEvent::Issues(IssuePayload { action, issue }) => {
                tracing::debug!(
                    kind = event.kind_label(),
                    action = action.as_deref().unwrap_or_default(),
                    url = %issue.html_url,
                    "discovered issue activity"
                );
                items.add_issue(issue, &web_root)?;
            }
            ActivityEvent::PullRequest(PullRequestPayload {
                action,
                pull_request,
            })
            | ActivityEvent::PullRequestReviewComment(PullRequestPayload {
                action,
                pull_request,
            }) => {
                tracing::debug!(
                    kind = event.kind_label(),
                    action = action.as_deref().unwrap_or_default(),
                    url = %pull_request.html_url,
                    "discovered pull request activity"
                );
                items.add_pull_request(pull_request, &web_root)?;
            }
            ActivityEvent::CommitComment(payload) => {
                let url = payload
                    .comment
                    .as_ref()
                    .and_then(|comment| comment.html_url.as_deref())
                    .unwrap_or_default();
                tracing::info!(url, "ignoring commit comment event");
            }
            ActivityEvent::Create(payload) | ActivityEvent::Delete(payload) => {
                tracing::debug!(
                    kind = event.kind_label(),
                    git_ref = payload.git_ref.as_deref().unwrap_or_default(),
                    ref_type = payload.ref_type.as_deref().unwrap_or_default(),
                    "ignoring ref event"
                );
            }
            ActivityEvent::Push(payload) => {
                tracing::debug!(
                    git_ref = payload.git_ref.as_deref().unwrap_or_default(),
                    commits = payload.size.unwrap_or_default(),
                    "ignoring push event"
                );
            }
            ActivityEvent::Unrecognized { kind, payload } => {
                tracing::info!(
                    kind = %kind,
                    payload = %payload,
                    "ignoring unrecognized event type"
                );
            }
        }
    }
    tracing::debug!(
        issues = items.issues.len(),
        pull_requests = items.pull_requests.len(),
        "discovered activity items"
    );
    Ok(items)
}
