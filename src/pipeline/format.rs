use chrono::{DateTime, Local};

use crate::models::{ReportType, Sex, TestResult};
use crate::reference::terms::describe;

use super::categorize::categorize;
use super::classify::classify_status;

pub const REPORT_TITLE: &str = "MEDICAL REPORT SIMPLIFICATION";

/// Renders the simplified report: a header, then one section per non-empty
/// panel with each test's status, meaning and note.
pub fn format_report(
    report_type: ReportType,
    results: &[TestResult],
    sex: Option<Sex>,
    generated_at: DateTime<Local>,
) -> String {
    let mut lines: Vec<String> = vec![
        REPORT_TITLE.to_string(),
        "=".repeat(50),
        format!("Report Type: {}", report_type.display_heading()),
        format!("Analysis Date: {}", generated_at.format("%Y-%m-%d %H:%M")),
        String::new(),
    ];

    if results.is_empty() {
        lines.push("No structured test results found in the report.".to_string());
        lines.push("Please ensure your report contains values with normal ranges.".to_string());
        return lines.join("\n");
    }

    for (panel, tests) in categorize(results) {
        if tests.is_empty() {
            continue;
        }

        lines.push(panel.title().to_uppercase());
        lines.push("-".repeat(30));

        for test in tests {
            let (display_name, description) = describe(&test.test_name);
            let verdict = classify_status(&test.test_name, &test.value, &test.normal_range, sex);

            lines.push(format!(
                "{} {}: {} {}",
                verdict.label.glyph(),
                display_name,
                test.value,
                test.units
            ));
            lines.push(format!("   Status: {}", verdict.label));
            lines.push(format!("   What it means: {}", description));
            lines.push(format!("   Note: {}", verdict.message));
            lines.push(String::new());
        }
    }

    lines.join("\n")
}
