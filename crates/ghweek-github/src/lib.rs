//! GitHub wire types and REST transport for ghweek.
//!
//! Provides the serde models for issues, pull requests and user activity
//! events, the typed `ActivityEvent` union, and the async API client used to
//! list events and fetch pull requests.

pub mod activity_event;
pub mod github_api_client;
pub mod github_transport_helpers;
pub mod github_types;

pub use activity_event::ActivityEvent;
pub use github_api_client::{GithubApiClient, GithubApiClientConfig, GithubApiError};
pub use github_types::{
    GithubIssue, GithubLabel, GithubPullRequest, GithubUser, Nameable, RawGithubEvent,
};
