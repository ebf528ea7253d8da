use chrono::{Duration, NaiveDate};
use thiserror::Error;

#[derive(Debug, Error)]
/// Fatal failures of the discovery and reconciliation engine.
///
/// Soft anomalies (unknown pull-request states, unnamed category members) are
/// logged instead and never surface here.
pub enum ReportError {
    #[error("unable to decode {kind} payload of event '{event_id}'")]
    EventDecode {
        event_id: String,
        kind: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid pull request url '{url}': {reason}")]
    InvalidPullRequestUrl { url: String, reason: String },
    #[error("unable to get pull request '{url}'")]
    PullRequestLookup {
        url: String,
        #[source]
        source: anyhow::Error,
    },
    #[error("report window from {start} lasting {duration} is out of range")]
    WindowOutOfRange { start: NaiveDate, duration: Duration },
}
