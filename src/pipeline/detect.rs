use crate::models::ReportType;

/// Keyword sets per report type, in priority order. The first type with any
/// keyword present in the lower-cased text wins.
pub static REPORT_TYPE_KEYWORDS: &[(ReportType, &[&str])] = &[
    (ReportType::Diabetes, &["hba1c", "glucose", "diabetes", "glycemic"]),
    (ReportType::Cardiac, &["cholesterol", "ldl", "hdl", "triglycerides", "lipid"]),
    (ReportType::BloodWork, &["cbc", "complete blood count", "wbc", "rbc", "hemoglobin"]),
    (ReportType::Thyroid, &["tsh", "t4", "t3", "thyroid"]),
    (ReportType::Liver, &["alt", "ast", "bilirubin", "liver"]),
    (ReportType::Kidney, &["creatinine", "bun", "egfr", "kidney"]),
];

pub fn detect_report_type(text: &str) -> ReportType {
    let lower = text.to_lowercase();
    REPORT_TYPE_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(report_type, _)| *report_type)
        .unwrap_or(ReportType::General)
}
