use crate::reconcile::{CategoryPartition, ReportCategory};

const REPORT_HEADING: &str = "GitHub";
const INDENT_UNIT: &str = "    ";

fn bullet(depth: usize, text: &str) -> String {
    format!("{}* {text}", INDENT_UNIT.repeat(depth))
}

fn render_section(
    partition: &CategoryPartition,
    category: ReportCategory,
    lines: &mut Vec<String>,
) {
    let members = partition.members(category);
    if members.is_empty() {
        return;
    }
    lines.push(bullet(1, category.title()));
    for url in members {
        match partition.names.name(url) {
            Some(name) => lines.push(bullet(2, name)),
            None => tracing::warn!(url = %url, "did not have a name for report item"),
        }
    }
}

/// Renders the nested Markdown list for `partition`.
///
/// Empty categories are left out entirely and the result has no trailing
/// newline.
pub fn render_report(partition: &CategoryPartition) -> String {
    let mut lines = vec![bullet(0, REPORT_HEADING)];
    for category in ReportCategory::REPORT_ORDER {
        render_section(partition, category, &mut lines);
    }
    lines.join("\n")
}
