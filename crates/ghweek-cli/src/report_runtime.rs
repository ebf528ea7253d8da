use anyhow::{Context, Result};
use chrono::NaiveDate;
use ghweek_github::{GithubApiClient, GithubApiClientConfig};
use ghweek_report::report_window::last_completed_week_monday;
use ghweek_report::{discover_items, reconcile, render_report, ReportConfig, ReportWindow};

use crate::cli_args::{Cli, START_DATE_FORMAT};
use crate::token_source::resolve_token;

impl Cli {
    fn report_config(&self) -> ReportConfig {
        ReportConfig {
            acting_user: self.user.clone(),
            wip_label: self.wip_label.clone(),
            web_root: self.web_root.clone(),
        }
    }

    fn report_window(&self, today: NaiveDate) -> Result<ReportWindow> {
        let start = self
            .start
            .unwrap_or_else(|| last_completed_week_monday(today));
        ReportWindow::new(start, self.duration).context("invalid --start/--duration")
    }
}

/// Fetches, classifies and renders the report described by `cli`.
///
/// `today` anchors the default start date.
pub(crate) async fn run_report(cli: &Cli, today: NaiveDate) -> Result<String> {
    let token = resolve_token(cli.token_file.as_deref(), cli.token.as_deref())?;
    let client = GithubApiClient::new(GithubApiClientConfig {
        api_base: cli.api_base.clone(),
        token,
        request_timeout_ms: cli.request_timeout_ms,
    })
    .context("failed to create github api client")?;

    let window = cli.report_window(today)?;
    tracing::info!(
        start = %window.start.format(START_DATE_FORMAT),
        end = %window.end.format(START_DATE_FORMAT),
        user = %cli.user,
        "searching for events"
    );
    let events = client
        .list_user_events(&cli.user, cli.include_private)
        .await
        .with_context(|| format!("unable to list events for '{}'", cli.user))?;
    let events = window.filter_events(events);

    let config = cli.report_config();
    let discovered = discover_items(&events, &config)?;
    let partition = reconcile(discovered, &client, &config).await?;
    Ok(render_report(&partition))
}
