use crate::error::ReportError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Structured coordinates of a pull request.
pub struct PullRequestRef {
    pub owner: String,
    pub repository: String,
    pub number: u64,
}

impl PullRequestRef {
    /// Decomposes `https://<web-root>/<owner>/<repo>/<kind>/<number>`.
    ///
    /// `web_root` must end with `/`. Anything after the number is ignored.
    pub fn parse(url: &str, web_root: &str) -> Result<Self, ReportError> {
        let invalid = |reason: String| ReportError::InvalidPullRequestUrl {
            url: url.to_string(),
            reason,
        };
        let path = url
            .strip_prefix(web_root)
            .ok_or_else(|| invalid(format!("expected prefix '{web_root}'")))?;
        let segments = path.split('/').collect::<Vec<_>>();
        if segments.len() < 4 {
            return Err(invalid(format!(
                "expected at least 4 path segments, found {}",
                segments.len()
            )));
        }
        let number = segments[3].parse::<u64>().map_err(|error| {
            invalid(format!("unable to parse number '{}': {error}", segments[3]))
        })?;
        if number == 0 {
            return Err(invalid("pull request number must be positive".to_string()));
        }
        Ok(Self {
            owner: segments[0].to_string(),
            repository: segments[1].to_string(),
            number,
        })
    }
}
