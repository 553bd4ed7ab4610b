use crate::models::{Sex, StatusLabel, StatusVerdict};
use crate::reference::{canonical_key, lookup_range};

pub const UNREADABLE_VALUE_MESSAGE: &str =
    "Unable to interpret value - consult your healthcare provider";
pub const NO_RANGE_MESSAGE: &str = "Please consult your healthcare provider for interpretation";

/// Percent below `low` beyond which a value is `Low` / `Critically Low`.
const LOW_THRESHOLDS: (f64, f64) = (15.0, 30.0);
/// Percent above `high` beyond which a value is `High` / `Critically High`.
const HIGH_THRESHOLDS: (f64, f64) = (25.0, 50.0);

/// Classifies a raw value against the range printed in the report, or
/// against the built-in fallback range for the test when the report gives
/// fewer than two numbers.
pub fn classify_status(
    test_name: &str,
    value: &str,
    normal_range: &str,
    sex: Option<Sex>,
) -> StatusVerdict {
    let value = match value.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => return StatusVerdict::new(StatusLabel::ReviewNeeded, UNREADABLE_VALUE_MESSAGE),
    };

    let tokens = numeric_tokens(normal_range);
    let (low, high) = if tokens.len() >= 2 {
        match (tokens[0].parse::<f64>(), tokens[1].parse::<f64>()) {
            (Ok(low), Ok(high)) => (low, high),
            _ => return StatusVerdict::new(StatusLabel::ReviewNeeded, UNREADABLE_VALUE_MESSAGE),
        }
    } else if let Some(range) = lookup_range(&canonical_key(test_name)) {
        range.bounds.for_sex(sex)
    } else {
        return StatusVerdict::new(StatusLabel::ReviewNeeded, NO_RANGE_MESSAGE);
    };

    classify_against(value, low, high)
}

/// Tiers a value against known bounds.
pub fn classify_against(value: f64, low: f64, high: f64) -> StatusVerdict {
    let range = format!("{}-{}", format_bound(low), format_bound(high));

    if low <= value && value <= high {
        return StatusVerdict::new(StatusLabel::Normal, format!("Within normal range ({})", range));
    }

    if value < low {
        let deviation = (low - value) / low * 100.0;
        if deviation > LOW_THRESHOLDS.1 {
            StatusVerdict::new(
                StatusLabel::CriticallyLow,
                format!("Significantly below normal range ({}) - Seek immediate medical attention", range),
            )
        } else if deviation > LOW_THRESHOLDS.0 {
            StatusVerdict::new(
                StatusLabel::Low,
                format!("Below normal range ({}) - Discuss with your doctor", range),
            )
        } else {
            StatusVerdict::new(
                StatusLabel::SlightlyLow,
                format!("Just below normal range ({}) - Monitor and discuss if symptomatic", range),
            )
        }
    } else {
        let deviation = (value - high) / high * 100.0;
        if deviation > HIGH_THRESHOLDS.1 {
            StatusVerdict::new(
                StatusLabel::CriticallyHigh,
                format!("Significantly above normal range ({}) - Seek immediate medical attention", range),
            )
        } else if deviation > HIGH_THRESHOLDS.0 {
            StatusVerdict::new(
                StatusLabel::High,
                format!("Above normal range ({}) - Discuss with your doctor", range),
            )
        } else {
            StatusVerdict::new(
                StatusLabel::SlightlyHigh,
                format!("Just above normal range ({}) - Monitor and discuss if symptomatic", range),
            )
        }
    }
}

/// Maximal runs of digits and dots, e.g. `["13.8", "17.2"]` for `13.8-17.2`.
fn numeric_tokens(text: &str) -> Vec<&str> {
    text.split(|c: char| !(c.is_ascii_digit() || c == '.'))
        .filter(|t| !t.is_empty())
        .collect()
}

/// Whole numbers keep one decimal place (`70.0`), others print as-is.
fn format_bound(bound: f64) -> String {
    if bound.fract() == 0.0 && bound.abs() < 1e16 {
        format!("{:.1}", bound)
    } else {
        bound.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(value: &str, range: &str) -> StatusLabel {
        classify_status("Unlisted", value, range, None).label
    }

    #[test]
    fn glucose_thirty_percent_over_is_high() {
        let verdict = classify_status("Glucose", "130", "70-100", None);
        assert_eq!(verdict.label, StatusLabel::High);
        assert_eq!(verdict.message, "Above normal range (70.0-100.0) - Discuss with your doctor");
    }

    #[test]
    fn hemoglobin_below_range_is_low() {
        let verdict = classify_status("Hemoglobin", "10", "13.8-17.2", None);
        assert_eq!(verdict.label, StatusLabel::Low);
        assert!(verdict.message.contains("(13.8-17.2)"));
    }

    #[test]
    fn inside_bounds_is_normal() {
        for value in ["70", "85.5", "100"] {
            assert_eq!(label(value, "70-100"), StatusLabel::Normal);
        }
        let verdict = classify_status("Glucose", "90", "70-100", None);
        assert_eq!(verdict.message, "Within normal range (70.0-100.0)");
    }

    #[test]
    fn low_side_tiers() {
        // low = 100: deviation equals 100 - value
        assert_eq!(label("90", "100-200"), StatusLabel::SlightlyLow);
        assert_eq!(label("86", "100-200"), StatusLabel::SlightlyLow);
        assert_eq!(label("84", "100-200"), StatusLabel::Low);
        assert_eq!(label("71", "100-200"), StatusLabel::Low);
        assert_eq!(label("69", "100-200"), StatusLabel::CriticallyLow);
    }

    #[test]
    fn high_side_tiers() {
        // high = 100: deviation equals value - 100
        assert_eq!(label("120", "50-100"), StatusLabel::SlightlyHigh);
        assert_eq!(label("125", "50-100"), StatusLabel::SlightlyHigh);
        assert_eq!(label("126", "50-100"), StatusLabel::High);
        assert_eq!(label("150", "50-100"), StatusLabel::High);
        assert_eq!(label("151", "50-100"), StatusLabel::CriticallyHigh);
    }

    #[test]
    fn severity_grows_monotonically_below_range() {
        let rank = |l: StatusLabel| match l {
            StatusLabel::Normal => 0,
            StatusLabel::SlightlyLow => 1,
            StatusLabel::Low => 2,
            StatusLabel::CriticallyLow => 3,
            other => panic!("unexpected {:?}", other),
        };
        let mut previous = 0;
        for step in 0..=100 {
            let value = 100.0 - step as f64;
            let current = rank(classify_against(value, 100.0, 200.0).label);
            assert!(current >= previous, "severity dropped at {}", value);
            previous = current;
        }
        assert_eq!(previous, 3);
    }

    #[test]
    fn non_numeric_value_needs_review() {
        let verdict = classify_status("Glucose", "abc", "70-100", None);
        assert_eq!(verdict.label, StatusLabel::ReviewNeeded);
        assert_eq!(verdict.message, UNREADABLE_VALUE_MESSAGE);
        assert_eq!(label("", "70-100"), StatusLabel::ReviewNeeded);
    }

    #[test]
    fn malformed_range_token_needs_review() {
        let verdict = classify_status("Glucose", "90", ". - 100", None);
        assert_eq!(verdict.label, StatusLabel::ReviewNeeded);
        assert_eq!(verdict.message, UNREADABLE_VALUE_MESSAGE);
    }

    #[test]
    fn falls_back_to_reference_table() {
        let verdict = classify_status("Glucose", "130", "", None);
        assert_eq!(verdict.label, StatusLabel::High);
        assert!(verdict.message.contains("(70.0-100.0)"));

        let verdict = classify_status(" HbA1c ", "5.0", "", None);
        assert_eq!(verdict.label, StatusLabel::Normal);
        assert_eq!(verdict.message, "Within normal range (4.0-5.6)");
    }

    #[test]
    fn fallback_uses_male_range_unless_told_otherwise() {
        // 13.0 is low for men (13.8-17.2) but normal for women (12.1-15.1)
        assert_eq!(
            classify_status("Hemoglobin", "13.0", "", None).label,
            StatusLabel::SlightlyLow
        );
        assert_eq!(
            classify_status("Hemoglobin", "13.0", "", Some(Sex::Female)).label,
            StatusLabel::Normal
        );
    }

    #[test]
    fn unknown_test_without_range_needs_review() {
        let verdict = classify_status("Lipase", "40", "", None);
        assert_eq!(verdict.label, StatusLabel::ReviewNeeded);
        assert_eq!(verdict.message, NO_RANGE_MESSAGE);
    }

    #[test]
    fn bound_formatting() {
        assert_eq!(format_bound(70.0), "70.0");
        assert_eq!(format_bound(13.8), "13.8");
        assert_eq!(format_bound(0.0), "0.0");
    }
}
