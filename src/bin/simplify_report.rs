//! Offline report simplification.
//!
//! Runs the same pipeline as the HTTP service on a local file or an inline
//! string and prints the JSON result to stdout. Logs go to stderr.
//!
//! Usage:
//!   simplify_report --file labs.pdf
//!   simplify_report --file scan.dat --content-type image/png --sex female
//!   simplify_report --text "Glucose: 130 mg/dL (70-100)"

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use medsimplify::{
    config::Config,
    content_type::{guess_content_type, SupportedContentType},
    errors::{ApiError, AppError},
    models::Sex,
    pipeline::{MedicalReportSimplifier, ReportInput},
};

#[derive(Parser)]
#[command(name = "simplify_report", about = "Explain a lab report in plain language")]
struct Cli {
    /// Report file to read (text, PDF, JPEG or PNG)
    #[arg(long, conflicts_with = "text", required_unless_present = "text")]
    file: Option<PathBuf>,

    /// Declared content type of --file; guessed from the extension when omitted
    #[arg(long, requires = "file")]
    content_type: Option<String>,

    /// Report text given inline
    #[arg(long)]
    text: Option<String>,

    /// Use sex-specific reference ranges (male or female)
    #[arg(long)]
    sex: Option<Sex>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("simplify_report: {:#}", e);
            std::process::exit(1);
        }
    }
}

/// Prints the result or the pipeline's error payload; `Ok(false)` means the
/// report was rejected.
fn run(cli: Cli) -> Result<bool> {
    let config = Config::from_env()?;
    let simplifier = MedicalReportSimplifier::new(&config)?;

    let outcome = match (&cli.file, &cli.text) {
        (Some(path), _) => {
            let declared = cli
                .content_type
                .clone()
                .or_else(|| guess_content_type(path).map(str::to_string))
                .with_context(|| format!("cannot guess the content type of {}", path.display()))?;

            let Some(content_type) = SupportedContentType::from_mime(&declared) else {
                bail!(ApiError::unsupported_media_type(declared).user_message());
            };

            simplifier.process_report(
                ReportInput::File { path, content_type: content_type.mime_type() },
                cli.sex,
            )
        }
        (None, Some(text)) => simplifier.process_report(ReportInput::Text(text), cli.sex),
        (None, None) => bail!("either --file or --text is required"),
    };

    match outcome {
        Ok(result) => {
            println!("{}", serde_json::to_string_pretty(&result)?);
            Ok(true)
        }
        Err(e) => {
            println!("{}", serde_json::to_string_pretty(&e.to_payload())?);
            Ok(false)
        }
    }
}
