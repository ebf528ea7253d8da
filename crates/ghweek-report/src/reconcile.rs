//! Live-state reconciliation of discovered pull requests.

use std::collections::BTreeSet;

use async_trait::async_trait;
use ghweek_github::{GithubApiClient, GithubPullRequest};

use crate::discovery::DiscoveredItems;
use crate::error::ReportError;
use crate::name_registry::{ItemUrl, NameRegistry};
use crate::pull_request_ref::PullRequestRef;
use crate::report_config::ReportConfig;

#[async_trait]
/// Trait contract for fetching the current state of a pull request.
pub trait PullRequestSource: Send + Sync {
    async fn get_pull_request(
        &self,
        reference: &PullRequestRef,
    ) -> anyhow::Result<GithubPullRequest>;
}

#[async_trait]
impl PullRequestSource for GithubApiClient {
    async fn get_pull_request(
        &self,
        reference: &PullRequestRef,
    ) -> anyhow::Result<GithubPullRequest> {
        let pull_request = GithubApiClient::get_pull_request(
            self,
            &reference.owner,
            &reference.repository,
            reference.number,
        )
        .await?;
        Ok(pull_request)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Enumerates supported `ReportCategory` values, in report order.
pub enum ReportCategory {
    Merged,
    Abandoned,
    UnderReview,
    InProgress,
    Reviewed,
    Issues,
    /// Pull requests whose live state is neither open nor closed. Kept apart
    /// from the six-way partition but still reported.
    UnknownState,
}

impl ReportCategory {
    pub const REPORT_ORDER: [Self; 7] = [
        Self::Merged,
        Self::Abandoned,
        Self::UnderReview,
        Self::InProgress,
        Self::Reviewed,
        Self::Issues,
        Self::UnknownState,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::Merged => "Merged",
            Self::Abandoned => "Abandoned",
            Self::UnderReview => "Under Review",
            Self::InProgress => "In Progress",
            Self::Reviewed => "Reviewed",
            Self::Issues => "Issues",
            Self::UnknownState => "Unknown State",
        }
    }
}

#[derive(Debug, Clone, Default)]
/// Disjoint category sets plus the names to render them with.
pub struct CategoryPartition {
    pub names: NameRegistry,
    pub merged: BTreeSet<ItemUrl>,
    pub abandoned: BTreeSet<ItemUrl>,
    pub under_review: BTreeSet<ItemUrl>,
    pub in_progress: BTreeSet<ItemUrl>,
    pub reviewed: BTreeSet<ItemUrl>,
    pub issues: BTreeSet<ItemUrl>,
    pub unknown_state: BTreeSet<ItemUrl>,
}

impl CategoryPartition {
    pub fn members(&self, category: ReportCategory) -> &BTreeSet<ItemUrl> {
        match category {
            ReportCategory::Merged => &self.merged,
            ReportCategory::Abandoned => &self.abandoned,
            ReportCategory::UnderReview => &self.under_review,
            ReportCategory::InProgress => &self.in_progress,
            ReportCategory::Reviewed => &self.reviewed,
            ReportCategory::Issues => &self.issues,
            ReportCategory::UnknownState => &self.unknown_state,
        }
    }

    fn members_mut(&mut self, category: ReportCategory) -> &mut BTreeSet<ItemUrl> {
        match category {
            ReportCategory::Merged => &mut self.merged,
            ReportCategory::Abandoned => &mut self.abandoned,
            ReportCategory::UnderReview => &mut self.under_review,
            ReportCategory::InProgress => &mut self.in_progress,
            ReportCategory::Reviewed => &mut self.reviewed,
            ReportCategory::Issues => &mut self.issues,
            ReportCategory::UnknownState => &mut self.unknown_state,
        }
    }

    /// Category holding `url`, if any.
    pub fn category_of(&self, url: &ItemUrl) -> Option<ReportCategory> {
        ReportCategory::REPORT_ORDER
            .into_iter()
            .find(|category| self.members(*category).contains(url))
    }

    pub fn total_members(&self) -> usize {
        ReportCategory::REPORT_ORDER
            .into_iter()
            .map(|category| self.members(category).len())
            .sum()
    }
}

/// Picks the category for a pull request from its live state.
///
/// Authorship is checked first: anything not authored by the acting user is
/// `Reviewed` whatever its state.
pub fn classify_pull_request(
    pull_request: &GithubPullRequest,
    config: &ReportConfig,
) -> ReportCategory {
    if pull_request.author_login() != config.acting_user {
        return ReportCategory::Reviewed;
    }
    match pull_request.state.as_str() {
        "open" if pull_request.has_label(&config.wip_label) => ReportCategory::InProgress,
        "open" => ReportCategory::UnderReview,
        "closed" if pull_request.merged => ReportCategory::Merged,
        "closed" => ReportCategory::Abandoned,
        _ => ReportCategory::UnknownState,
    }
}

/// Queries every discovered pull request once, refreshes its display name and
/// assigns it a category. Plain issues go straight to `Issues`.
pub async fn reconcile<S>(
    discovered: DiscoveredItems,
    source: &S,
    config: &ReportConfig,
) -> Result<CategoryPartition, ReportError>
where
    S: PullRequestSource + ?Sized,
{
    let DiscoveredItems {
        names,
        issues,
        pull_requests,
    } = discovered;
    let mut partition = CategoryPartition {
        names,
        ..CategoryPartition::default()
    };

    for (url, reference) in &pull_requests {
        let pull_request = source.get_pull_request(reference).await.map_err(|error| {
            ReportError::PullRequestLookup {
                url: url.to_string(),
                source: error,
            }
        })?;
        partition.names.force_override(url, &pull_request);

        let category = classify_pull_request(&pull_request, config);
        if category == ReportCategory::UnknownState {
            tracing::warn!(
                url = %url,
                state = %pull_request.state,
                "pull request is in an unknown state"
            );
        }
        partition.members_mut(category).insert(url.clone());
    }

    partition.issues = issues;
    Ok(partition)
}
