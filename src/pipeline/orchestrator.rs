use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::Path;
use std::time::Instant;

use chrono::{Local, Utc};
use tracing::{error, info};

use crate::config::Config;
use crate::errors::PipelineError;
use crate::extraction::TextExtractor;
use crate::models::{ProcessingResult, ProcessingSummary, Sex};

use super::detect::detect_report_type;
use super::format::format_report;
use super::parser::ResultParser;
use super::preprocess::Preprocessor;
use super::recommend::generate_recommendations;

/// Where the raw report text comes from.
#[derive(Debug, Clone, Copy)]
pub enum ReportInput<'a> {
    Text(&'a str),
    File { path: &'a Path, content_type: &'a str },
}

impl ReportInput<'_> {
    fn describe(&self) -> String {
        match self {
            ReportInput::Text(_) => "text input".to_string(),
            ReportInput::File { path, .. } => path.display().to_string(),
        }
    }
}

/// Runs the full extraction → preprocess → parse → explain pipeline.
///
/// Holds only compiled regexes and configuration, so one instance is shared
/// across all requests behind an `Arc`.
#[derive(Debug)]
pub struct MedicalReportSimplifier {
    preprocessor: Preprocessor,
    parser: ResultParser,
    extractor: TextExtractor,
    preview_chars: usize,
}

impl MedicalReportSimplifier {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        Ok(Self {
            preprocessor: Preprocessor::new(config.ocr_correction)?,
            parser: ResultParser::new()?,
            extractor: TextExtractor::new(config.ocr_language.clone()),
            preview_chars: config.preview_chars,
        })
    }

    pub fn process_report(
        &self,
        input: ReportInput<'_>,
        sex: Option<Sex>,
    ) -> Result<ProcessingResult, PipelineError> {
        info!("Processing report: {}", input.describe());

        match catch_unwind(AssertUnwindSafe(|| self.run(input, sex))) {
            Ok(Ok(result)) => Ok(result),
            Ok(Err(e)) => Err(e),
            Err(panic) => {
                let message = panic_message(panic.as_ref());
                error!("Error processing report: {}", message);
                Err(PipelineError::Processing { message })
            }
        }
    }

    fn run(&self, input: ReportInput<'_>, sex: Option<Sex>) -> Result<ProcessingResult, PipelineError> {
        let start = Instant::now();

        let raw_text = match input {
            ReportInput::Text(text) => text.to_string(),
            ReportInput::File { path, content_type } => self.extractor.extract_text(path, content_type),
        };

        if raw_text.trim().is_empty() {
            return Err(PipelineError::EmptyInput);
        }

        let cleaned_text = self.preprocessor.preprocess(&raw_text);
        let report_type = detect_report_type(&cleaned_text);
        let results = self.parser.parse(&cleaned_text);
        let simplified_text = format_report(report_type, &results, sex, Local::now());
        let recommendations = generate_recommendations(&simplified_text, report_type);

        let elapsed = start.elapsed().as_secs_f64();
        let processing_time_seconds = (elapsed * 100.0).round() / 100.0;

        info!(
            "Simplified {} report: {} tests found in {:.3}s",
            report_type,
            results.len(),
            elapsed
        );

        Ok(ProcessingResult {
            original_text: self.preview(&cleaned_text),
            simplified_text,
            recommendations,
            report_type,
            summary: ProcessingSummary {
                tests_found: results.len(),
                report_type,
                processing_time_seconds,
                character_count: cleaned_text.chars().count(),
            },
            timestamp: Utc::now(),
            status: "success".to_string(),
        })
    }

    fn preview(&self, text: &str) -> String {
        match text.char_indices().nth(self.preview_chars) {
            Some((cut, _)) => format!("{}...", &text[..cut]),
            None => text.to_string(),
        }
    }
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unexpected failure".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ReportType;

    fn simplifier() -> MedicalReportSimplifier {
        MedicalReportSimplifier::new(&Config::default()).unwrap()
    }

    #[test]
    fn preview_truncates_by_characters() {
        let mut config = Config::default();
        config.preview_chars = 3;
        let simplifier = MedicalReportSimplifier::new(&config).unwrap();

        assert_eq!(simplifier.preview("abc"), "abc");
        assert_eq!(simplifier.preview("ab\u{e9}d"), "ab\u{e9}...");
    }

    #[test]
    fn glucose_round_trip() {
        let result = simplifier()
            .process_report(ReportInput::Text("Glucose: 130 mg/dL (70-100)"), None)
            .unwrap();

        assert_eq!(result.status, "success");
        assert_eq!(result.report_type, ReportType::Diabetes);
        assert_eq!(result.summary.tests_found, 1);
        assert_eq!(result.summary.character_count, 27);
        assert_eq!(result.original_text, "Glucose: 130 mg/dL (70-100)");
        assert!(result.simplified_text.contains("   Status: High"));
        assert!(result.recommendations.contains("Blood Sugar Management:"));
    }

    #[test]
    fn whitespace_only_text_is_rejected() {
        let err = simplifier()
            .process_report(ReportInput::Text("  \n\t "), None)
            .unwrap_err();
        assert!(matches!(err, PipelineError::EmptyInput));
    }

    #[test]
    fn missing_file_is_reported_as_empty_input() {
        let err = simplifier()
            .process_report(
                ReportInput::File {
                    path: Path::new("/nonexistent/report.txt"),
                    content_type: "text/plain",
                },
                None,
            )
            .unwrap_err();
        assert!(matches!(err, PipelineError::EmptyInput));
    }

    #[test]
    fn long_text_is_truncated_in_preview_only() {
        let text = "Sodium 140 mmol/L (135-145) ".repeat(60);
        let result = simplifier().process_report(ReportInput::Text(&text), None).unwrap();

        assert_eq!(result.original_text.chars().count(), 1003);
        assert!(result.original_text.ends_with("..."));
        assert!(result.summary.character_count > 1000);
    }

    #[test]
    fn panic_payloads_become_messages() {
        let panic = std::panic::catch_unwind(|| panic!("boom")).unwrap_err();
        assert_eq!(panic_message(panic.as_ref()), "boom");
    }
}
