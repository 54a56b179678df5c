//! eolaudit - Dependency end-of-life audit CLI tool
//!
//! This tool audits a project's declared dependencies against an
//! end-of-life dataset:
//! - Frontend (package.json)
//! - Backend (pom.xml)

use clap::Parser;
use eolaudit::cli::CliArgs;
use eolaudit::dataset::{DatasetSource, FileSource, HttpClient, HttpSource};
use eolaudit::orchestrator::Orchestrator;
use eolaudit::output::{create_formatter, OutputConfig};
use std::io::{self, Write};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    // Run the main logic and handle errors
    match run(args).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    // Print version info in verbose mode
    if args.verbose {
        eprintln!("eolaudit v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("Frontend manifest: {}", args.frontend.display());
        eprintln!("Backend manifest: {}", args.backend.display());
    }

    let source: Box<dyn DatasetSource> = match &args.dataset_file {
        Some(path) => Box::new(FileSource::new(path)),
        None => Box::new(HttpSource::new(HttpClient::new()?, &args.dataset_url)),
    };

    // A dataset failure aborts the whole run; no partial report.
    let orchestrator = Orchestrator::new(args.clone());
    let report = orchestrator.run(source.as_ref()).await?;

    // Output the report
    let config = OutputConfig::from_cli(args.json, args.no_color);
    let formatter = create_formatter(config);
    let mut stdout = io::stdout().lock();
    formatter.format(&report, &mut stdout)?;
    stdout.flush()?;

    // Surface per-section extraction failures
    for error in &report.errors {
        eprintln!("Warning: {}", error);
    }

    // Determine the exit code
    if report.has_errors() {
        // Partial success - one of the manifest sections failed
        Ok(ExitCode::from(2))
    } else if report.has_eol() {
        // End-of-life dependencies found; non-zero so CI can gate on it
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
