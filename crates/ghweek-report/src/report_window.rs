use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use ghweek_github::RawGithubEvent;

use crate::error::ReportError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Time span a report covers. Both bounds are exclusive.
pub struct ReportWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl ReportWindow {
    /// Window starting at UTC midnight of `start_date`.
    ///
    /// Fails when the end falls outside the representable date range.
    pub fn new(start_date: NaiveDate, duration: Duration) -> Result<Self, ReportError> {
        let start = start_date.and_time(chrono::NaiveTime::MIN).and_utc();
        let end = start
            .checked_add_signed(duration)
            .ok_or(ReportError::WindowOutOfRange {
                start: start_date,
                duration,
            })?;
        Ok(Self { start, end })
    }

    pub fn contains(&self, timestamp: DateTime<Utc>) -> bool {
        timestamp > self.start && timestamp < self.end
    }

    /// Keeps the events created inside the window, preserving their order.
    pub fn filter_events(&self, events: Vec<RawGithubEvent>) -> Vec<RawGithubEvent> {
        events
            .into_iter()
            .filter(|event| self.contains(event.created_at))
            .collect()
    }
}

/// Monday of the most recent fully completed Monday-to-Sunday week.
pub fn last_completed_week_monday(today: NaiveDate) -> NaiveDate {
    let days_back = 7 + i64::from(today.weekday().num_days_from_monday());
    today - Duration::days(days_back)
}
