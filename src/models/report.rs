use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// A single `(name, value, units, range)` tuple pulled out of report text.
///
/// Values are kept exactly as matched; the same physical line may produce
/// several entries when more than one pattern fires on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TestResult {
    /// Test name as it appeared in the report, trimmed
    pub test_name: String,
    /// Raw numeric text of the measured value
    pub value: String,
    /// Units with punctuation other than `/` and `%` removed
    pub units: String,
    /// Reference range text reduced to digits, dots and dashes
    pub normal_range: String,
}

/// Coarse classification of a whole report by keyword theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReportType {
    Diabetes,
    Cardiac,
    BloodWork,
    Thyroid,
    Liver,
    Kidney,
    General,
}

impl ReportType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportType::Diabetes => "diabetes",
            ReportType::Cardiac => "cardiac",
            ReportType::BloodWork => "blood_work",
            ReportType::Thyroid => "thyroid",
            ReportType::Liver => "liver",
            ReportType::Kidney => "kidney",
            ReportType::General => "general",
        }
    }

    /// Heading form used in the simplified report, e.g. `BLOOD WORK`.
    pub fn display_heading(&self) -> String {
        self.as_str().to_uppercase().replace('_', " ")
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Biological sex used to pick between sex-specific reference ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl std::str::FromStr for Sex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Sex::Male),
            "female" | "f" => Ok(Sex::Female),
            other => Err(format!("unknown sex '{}', expected 'male' or 'female'", other)),
        }
    }
}

/// Severity label attached to each classified test value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusLabel {
    Normal,
    SlightlyLow,
    Low,
    CriticallyLow,
    SlightlyHigh,
    High,
    CriticallyHigh,
    ReviewNeeded,
}

impl StatusLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusLabel::Normal => "Normal",
            StatusLabel::SlightlyLow => "Slightly Low",
            StatusLabel::Low => "Low",
            StatusLabel::CriticallyLow => "Critically Low",
            StatusLabel::SlightlyHigh => "Slightly High",
            StatusLabel::High => "High",
            StatusLabel::CriticallyHigh => "Critically High",
            StatusLabel::ReviewNeeded => "Review Needed",
        }
    }

    /// Visual marker shown next to each test in the simplified report.
    pub fn glyph(&self) -> &'static str {
        match self {
            StatusLabel::Normal => "\u{2705}",
            StatusLabel::SlightlyLow | StatusLabel::SlightlyHigh => "\u{26a0}\u{fe0f}",
            StatusLabel::Low => "\u{1f53b}",
            StatusLabel::High => "\u{1f53a}",
            StatusLabel::CriticallyLow | StatusLabel::CriticallyHigh => "\u{1f6a8}",
            StatusLabel::ReviewNeeded => "\u{2753}",
        }
    }
}

impl fmt::Display for StatusLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusVerdict {
    pub label: StatusLabel,
    pub message: String,
}

impl StatusVerdict {
    pub fn new<S: Into<String>>(label: StatusLabel, message: S) -> Self {
        Self { label, message: message.into() }
    }
}
