use std::path::PathBuf;

use chrono::{Duration, NaiveDate};
use clap::Parser;
use ghweek_report::report_config::{DEFAULT_WEB_ROOT, DEFAULT_WIP_LABEL};

pub(crate) const START_DATE_FORMAT: &str = "%m-%d-%Y";

fn parse_start_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value.trim(), START_DATE_FORMAT)
        .map_err(|error| format!("expected MM-DD-YYYY date: {error}"))
}

/// Parses durations such as `168h`, `7d`, `1w` or `1h30m`.
pub(crate) fn parse_report_duration(value: &str) -> Result<Duration, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("duration must not be empty".to_string());
    }
    let mut total = Duration::zero();
    let mut digits = String::new();
    for ch in trimmed.chars() {
        if ch.is_ascii_digit() {
            digits.push(ch);
            continue;
        }
        if digits.is_empty() {
            return Err(format!("missing amount before unit '{ch}'"));
        }
        let amount = digits
            .parse::<i64>()
            .map_err(|error| format!("failed to parse integer: {error}"))?;
        digits.clear();
        let part = match ch {
            'w' => Duration::try_weeks(amount),
            'd' => Duration::try_days(amount),
            'h' => Duration::try_hours(amount),
            'm' => Duration::try_minutes(amount),
            's' => Duration::try_seconds(amount),
            other => {
                return Err(format!(
                    "unknown duration unit '{other}', expected w, d, h, m or s"
                ))
            }
        }
        .ok_or_else(|| "duration is out of range".to_string())?;
        total = total
            .checked_add(&part)
            .ok_or_else(|| "duration is out of range".to_string())?;
    }
    if !digits.is_empty() {
        return Err(format!("missing unit after '{digits}'"));
    }
    if total <= Duration::zero() {
        return Err("duration must be greater than 0".to_string());
    }
    Ok(total)
}

#[derive(Debug, Parser)]
#[command(
    name = "ghweek",
    about = "Summarize a contributor's GitHub activity for one week",
    version
)]
/// Command-line configuration for one report run.
pub(crate) struct Cli {
    #[arg(
        long,
        env = "GHWEEK_USER",
        help = "GitHub login whose activity is reported"
    )]
    pub(crate) user: String,

    #[arg(
        long = "token-file",
        env = "GHWEEK_TOKEN_FILE",
        help = "Path to a file holding the GitHub access token"
    )]
    pub(crate) token_file: Option<PathBuf>,

    #[arg(
        long,
        env = "GITHUB_TOKEN",
        hide_env_values = true,
        help = "GitHub access token, used when --token-file is not given"
    )]
    pub(crate) token: Option<String>,

    #[arg(
        long,
        env = "GHWEEK_START",
        value_parser = parse_start_date,
        help = "Start date in MM-DD-YYYY format. Defaults to the Monday of the last completed week"
    )]
    pub(crate) start: Option<NaiveDate>,

    #[arg(
        long,
        env = "GHWEEK_DURATION",
        default_value = "1w",
        value_parser = parse_report_duration,
        help = "Length of the report window from the start date, e.g. 168h, 7d or 1w"
    )]
    pub(crate) duration: Duration,

    #[arg(
        long = "wip-label",
        env = "GHWEEK_WIP_LABEL",
        default_value = DEFAULT_WIP_LABEL,
        help = "Label marking an open pull request as work in progress"
    )]
    pub(crate) wip_label: String,

    #[arg(
        long = "api-base",
        env = "GHWEEK_API_BASE",
        default_value = "https://api.github.com",
        help = "GitHub REST API base url"
    )]
    pub(crate) api_base: String,

    #[arg(
        long = "web-root",
        env = "GHWEEK_WEB_ROOT",
        default_value = DEFAULT_WEB_ROOT,
        help = "Web root that pull request urls start with"
    )]
    pub(crate) web_root: String,

    #[arg(
        long = "include-private",
        help = "List private events too; requires a token for the same user"
    )]
    pub(crate) include_private: bool,

    #[arg(
        long = "request-timeout-ms",
        default_value_t = 30_000,
        value_parser = clap::value_parser!(u64).range(1..),
        help = "Timeout for each GitHub API request in milliseconds"
    )]
    pub(crate) request_timeout_ms: u64,

    #[arg(short, long, help = "Log debug diagnostics to stderr")]
    pub(crate) verbose: bool,
}
