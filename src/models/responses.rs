use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

use super::report::ReportType;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProcessingSummary {
    /// Number of test results extracted from the report
    pub tests_found: usize,
    /// Detected report type
    pub report_type: ReportType,
    /// Wall-clock processing time, rounded to two decimals
    pub processing_time_seconds: f64,
    /// Character count of the preprocessed text
    pub character_count: usize,
}

/// Successful response of both simplify endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProcessingResult {
    /// Preprocessed report text, truncated with `...` when long
    pub original_text: String,
    /// Categorized, human-readable explanation of every extracted test
    pub simplified_text: String,
    /// Generic advice derived from the simplified text
    pub recommendations: String,
    pub report_type: ReportType,
    pub summary: ProcessingSummary,
    pub timestamp: DateTime<Utc>,
    /// Always `success`
    pub status: String,
}

/// Error payload produced when the pipeline itself rejects the input.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PipelineErrorResponse {
    pub error: String,
    /// Always `error`
    pub status: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct SimplifyTextRequest {
    /// Raw report text, at most the configured maximum length
    pub text: Option<String>,
    /// `male` or `female`; selects sex-specific fallback ranges. Male ranges
    /// are used when absent or blank
    #[serde(default)]
    pub sex: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ServiceInfoResponse {
    pub message: String,
    pub status: String,
    pub version: String,
    pub features: Vec<String>,
    /// Endpoint path mapped to a short description
    pub endpoints: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}
