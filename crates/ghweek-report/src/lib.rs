//! Classification and reconciliation engine for the ghweek activity report.
//!
//! Discovery turns activity events into a deduplicated set of issues and pull
//! requests, reconciliation sorts each pull request into a report category
//! using its live state, and rendering produces the nested Markdown summary.

pub mod discovery;
pub mod error;
pub mod name_registry;
pub mod pull_request_ref;
pub mod reconcile;
pub mod report_config;
pub mod report_render;
pub mod report_window;

pub use discovery::{discover_items, DiscoveredItems};
pub use error::ReportError;
pub use name_registry::{ItemUrl, NameRegistry};
pub use pull_request_ref::PullRequestRef;
pub use reconcile::{reconcile, CategoryPartition, PullRequestSource, ReportCategory};
pub use report_config::ReportConfig;
pub use report_render::render_report;
pub use report_window::ReportWindow;
