pub const DEFAULT_WIP_LABEL: &str = "do-not-merge/work-in-progress";
pub const DEFAULT_WEB_ROOT: &str = "https://github.com/";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Settings threaded into discovery and reconciliation.
pub struct ReportConfig {
    /// Login of the contributor the report is for.
    pub acting_user: String,
    /// Label marking an open pull request as not ready for review.
    pub wip_label: String,
    /// Web root every pull-request url must start with.
    pub web_root: String,
}

impl ReportConfig {
    pub fn new(acting_user: impl Into<String>) -> Self {
        Self {
            acting_user: acting_user.into(),
            wip_label: DEFAULT_WIP_LABEL.to_string(),
            web_root: DEFAULT_WEB_ROOT.to_string(),
        }
    }

    /// Web root with exactly one trailing slash.
    pub fn normalized_web_root(&self) -> String {
        format!("{}/", self.web_root.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::{ReportConfig, DEFAULT_WEB_ROOT, DEFAULT_WIP_LABEL};

    #[test]
    fn unit_report_config_new_applies_defaults() {
        let config = ReportConfig::new("octo");
        assert_eq!(config.acting_user, "octo");
        assert_eq!(config.wip_label, DEFAULT_WIP_LABEL);
        assert_eq!(config.web_root, DEFAULT_WEB_ROOT);
    }

    #[test]
    fn regression_normalized_web_root_adds_single_trailing_slash() {
        let mut config = ReportConfig::new("octo");
        config.web_root = "https://git.example.com".to_string();
        assert_eq!(config.normalized_web_root(), "https://git.example.com/");
        config.web_root = "https://git.example.com//".to_string();
        assert_eq!(config.normalized_web_root(), "https://git.example.com/");
    }
}
