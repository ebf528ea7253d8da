use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::github_transport_helpers::{has_next_page, truncate_for_error};
use crate::github_types::{GithubPullRequest, RawGithubEvent};

const EVENTS_PAGE_SIZE: &str = "100";
const ERROR_BODY_MAX_CHARS: usize = 800;

#[derive(Debug, Error)]
/// Enumerates supported `GithubApiError` values.
pub enum GithubApiError {
    #[error("invalid github authorization header")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
    #[error("github api {operation} request failed")]
    Http {
        operation: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("github api {operation} failed with status {status}: {body}")]
    HttpStatus {
        operation: String,
        status: u16,
        body: String,
    },
    #[error("failed to decode github {operation}")]
    Decode {
        operation: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone)]
/// Connection settings for [`GithubApiClient`].
pub struct GithubApiClientConfig {
    pub api_base: String,
    pub token: String,
    pub request_timeout_ms: u64,
}

#[derive(Clone)]
/// Thin async client over the GitHub REST endpoints ghweek needs.
///
/// Failures are returned as-is; nothing is retried.
pub struct GithubApiClient {
    http: reqwest::Client,
    api_base: String,
}

impl GithubApiClient {
    pub fn new(config: GithubApiClientConfig) -> Result<Self, GithubApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            reqwest::header::USER_AGENT,
            HeaderValue::from_static("ghweek-activity-report"),
        );
        headers.insert(
            reqwest::header::ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "x-github-api-version",
            HeaderValue::from_static("2022-11-28"),
        );
        let token = config.token.trim();
        if !token.is_empty() {
            let auth_header = format!("Bearer {token}");
            headers.insert(
                reqwest::header::AUTHORIZATION,
                HeaderValue::from_str(&auth_header)?,
            );
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_millis(config.request_timeout_ms.max(1)))
            .build()
            .map_err(|source| GithubApiError::Http {
                operation: "client setup".to_string(),
                source,
            })?;
        Ok(Self {
            http,
            api_base: config.api_base.trim_end_matches('/').to_string(),
        })
    }

    /// Lists the events performed by `user`, newest first, following
    /// pagination until the `Link` header stops advertising a next page.
    pub async fn list_user_events(
        &self,
        user: &str,
        include_private: bool,
    ) -> Result<Vec<RawGithubEvent>, GithubApiError> {
        let url = if include_private {
            format!("{}/users/{user}/events", self.api_base)
        } else {
            format!("{}/users/{user}/events/public", self.api_base)
        };
        let mut page = 1_u32;
        let mut rows = Vec::new();
        loop {
            let page_value = page.to_string();
            let request = self.http.get(&url).query(&[
                ("per_page", EVENTS_PAGE_SIZE),
                ("page", page_value.as_str()),
            ]);
            let (chunk, headers): (Vec<RawGithubEvent>, HeaderMap) =
                self.request_json("list user events", request).await?;
            tracing::debug!(page, events = chunk.len(), "fetched github events page");
            rows.extend(chunk);
            if !has_next_page(&headers) {
                break;
            }
            page = page.saturating_add(1);
        }
        Ok(rows)
    }

    pub async fn get_pull_request(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> Result<GithubPullRequest, GithubApiError> {
        let request = self.http.get(format!(
            "{}/repos/{owner}/{repo}/pulls/{number}",
            self.api_base
        ));
        let (pull_request, _) = self.request_json("get pull request", request).await?;
        Ok(pull_request)
    }

    async fn request_json<T>(
        &self,
        operation: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<(T, HeaderMap), GithubApiError>
    where
        T: DeserializeOwned,
    {
        let response = request.send().await.map_err(|source| GithubApiError::Http {
            operation: operation.to_string(),
            source,
        })?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .text()
            .await
            .map_err(|source| GithubApiError::Http {
                operation: operation.to_string(),
                source,
            })?;
        if !status.is_success() {
            return Err(GithubApiError::HttpStatus {
                operation: operation.to_string(),
                status: status.as_u16(),
                body: truncate_for_error(&body, ERROR_BODY_MAX_CHARS),
            });
        }
        let parsed = serde_json::from_str::<T>(&body).map_err(|source| GithubApiError::Decode {
            operation: operation.to_string(),
            source,
        })?;
        Ok((parsed, headers))
    }
}
