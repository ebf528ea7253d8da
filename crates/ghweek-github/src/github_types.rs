use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

/// Anything that carries a title and a canonical web address.
pub trait Nameable {
    fn title(&self) -> &str;
    fn html_url(&self) -> &str;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
/// Public struct `GithubUser` used across ghweek components.
pub struct GithubUser {
    pub login: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
/// Public struct `GithubLabel` used across ghweek components.
pub struct GithubLabel {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
/// Issue as embedded in issue and issue-comment event payloads.
///
/// GitHub reports pull requests through the issues API too; those carry a
/// `pull_request` object.
pub struct GithubIssue {
    pub html_url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub pull_request: Option<Value>,
}

impl GithubIssue {
    pub fn is_pull_request(&self) -> bool {
        self.pull_request
            .as_ref()
            .is_some_and(|value| !value.is_null())
    }
}

impl Nameable for GithubIssue {
    fn title(&self) -> &str {
        &self.title
    }

    fn html_url(&self) -> &str {
        &self.html_url
    }
}

#[derive(Debug, Clone, Deserialize)]
/// Pull request as returned by `GET /repos/{owner}/{repo}/pulls/{number}`
/// and as embedded in pull-request event payloads.
///
/// Event payloads may omit `merged`, so it defaults to false.
pub struct GithubPullRequest {
    pub html_url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub number: u64,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub merged: bool,
    #[serde(default)]
    pub user: GithubUser,
    #[serde(default)]
    pub labels: Vec<GithubLabel>,
}

impl GithubPullRequest {
    pub fn author_login(&self) -> &str {
        &self.user.login
    }

    pub fn has_label(&self, name: &str) -> bool {
        self.labels.iter().any(|label| label.name == name)
    }
}

impl Nameable for GithubPullRequest {
    fn title(&self) -> &str {
        &self.title
    }

    fn html_url(&self) -> &str {
        &self.html_url
    }
}

#[derive(Debug, Clone, Deserialize)]
/// One entry of the user events listing, payload still undecoded.
pub struct RawGithubEvent {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub payload: Value,
}
