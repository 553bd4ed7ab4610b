use crate::models::ReportType;

const GENERAL_ADVICE: &[&str] = &[
    "General Advice:",
    "• Share these results with your healthcare provider",
    "• Discuss any symptoms or concerns with your doctor",
    "• Follow up as recommended by your healthcare team",
    "• Maintain regular health check-ups",
];

const URGENT_ADVICE: &[&str] = &[
    "\u{1f6a8} URGENT RECOMMENDATIONS:",
    "• Seek immediate medical attention if you have symptoms",
    "• Contact your healthcare provider today",
    "• Do not ignore these critical results",
];

const FOLLOW_UP_ADVICE: &[&str] = &[
    "Important Next Steps:",
    "• Schedule a follow-up appointment with your doctor",
    "• Discuss potential causes and treatment options",
    "• Consider lifestyle modifications if appropriate",
];

const GLUCOSE_ADVICE: &[&str] = &[
    "Blood Sugar Management:",
    "• Monitor blood glucose levels regularly",
    "• Follow a balanced diet with controlled carbohydrates",
    "• Engage in regular physical activity",
    "• Maintain a healthy weight",
];

const HEART_ADVICE: &[&str] = &[
    "Heart Health:",
    "• Follow a heart-healthy diet (Mediterranean style)",
    "• Exercise regularly (30 minutes most days)",
    "• Manage stress through relaxation techniques",
    "• Avoid smoking and limit alcohol",
];

const KIDNEY_ADVICE: &[&str] = &[
    "Kidney Health:",
    "• Stay well-hydrated with water",
    "• Monitor blood pressure regularly",
    "• Limit salt intake",
    "• Review medications with your doctor",
];

const DISCLAIMER: &[&str] = &[
    "Important Disclaimer:",
    "• This analysis is for informational purposes only",
    "• Always consult qualified healthcare providers for medical advice",
    "• Do not make treatment decisions based solely on this information",
];

/// Builds the advice block from the already formatted report text. Checks
/// are plain substring tests on that text, so any "High" or "Low" anywhere
/// in it triggers the follow-up block.
pub fn generate_recommendations(simplified_text: &str, report_type: ReportType) -> String {
    let lower = simplified_text.to_lowercase();

    let mut lines: Vec<&str> = vec!["HEALTH RECOMMENDATIONS", "==============================", ""];
    let mut push_block = |block: &[&'static str]| {
        lines.extend_from_slice(block);
        lines.push("");
    };

    push_block(GENERAL_ADVICE);

    if simplified_text.contains("Critically") {
        push_block(URGENT_ADVICE);
    }
    if simplified_text.contains("High") || simplified_text.contains("Low") {
        push_block(FOLLOW_UP_ADVICE);
    }
    if report_type == ReportType::Diabetes || lower.contains("glucose") {
        push_block(GLUCOSE_ADVICE);
    }
    if report_type == ReportType::Cardiac || ["cholesterol", "ldl"].iter().any(|t| lower.contains(t)) {
        push_block(HEART_ADVICE);
    }
    if report_type == ReportType::Kidney || ["creatinine", "egfr"].iter().any(|t| lower.contains(t)) {
        push_block(KIDNEY_ADVICE);
    }

    lines.push("");
    lines.extend_from_slice(DISCLAIMER);

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_has_general_advice_and_disclaimer() {
        let text = generate_recommendations("", ReportType::General);
        assert!(text.starts_with("HEALTH RECOMMENDATIONS\n==============================\n\nGeneral Advice:"));
        assert!(text.ends_with("• Do not make treatment decisions based solely on this information"));
        assert!(!text.contains("URGENT"));
        assert!(!text.contains("Important Next Steps"));
        assert!(!text.contains("Blood Sugar Management"));
    }

    #[test]
    fn critical_results_add_urgent_and_follow_up() {
        let text = generate_recommendations("   Status: Critically High", ReportType::General);
        let urgent = text.find("URGENT RECOMMENDATIONS").unwrap();
        let next_steps = text.find("Important Next Steps").unwrap();
        assert!(urgent < next_steps);
    }

    #[test]
    fn report_type_triggers_topic_blocks() {
        assert!(generate_recommendations("", ReportType::Diabetes).contains("Blood Sugar Management:"));
        assert!(generate_recommendations("", ReportType::Cardiac).contains("Heart Health:"));
        assert!(generate_recommendations("", ReportType::Kidney).contains("Kidney Health:"));
    }

    #[test]
    fn text_keywords_trigger_topic_blocks() {
        let text = generate_recommendations("LDL (Bad Cholesterol) ... Creatinine", ReportType::General);
        assert!(text.contains("Heart Health:"));
        assert!(text.contains("Kidney Health:"));
        assert!(!text.contains("Blood Sugar Management:"));
    }

    #[test]
    fn blocks_keep_fixed_order() {
        let text = generate_recommendations(
            "Critically Low glucose cholesterol egfr",
            ReportType::General,
        );
        let order = [
            "General Advice:",
            "URGENT RECOMMENDATIONS:",
            "Important Next Steps:",
            "Blood Sugar Management:",
            "Heart Health:",
            "Kidney Health:",
            "Important Disclaimer:",
        ];
        let positions: Vec<_> = order.iter().map(|h| text.find(h).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
