//! The report simplification pipeline.
//!
//! Each stage is a plain function or a small struct holding compiled
//! regexes. [`orchestrator::MedicalReportSimplifier`] wires them together.

pub mod categorize;
pub mod classify;
pub mod detect;
pub mod format;
pub mod orchestrator;
pub mod parser;
pub mod preprocess;
pub mod recommend;

pub use orchestrator::{MedicalReportSimplifier, ReportInput};
pub use preprocess::OcrCorrection;
