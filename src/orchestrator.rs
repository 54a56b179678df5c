//! Audit orchestrator
//!
//! Coordinates the batch flow: load dataset → extract manifests → classify
//! → assemble the report. The dataset load is fatal; a manifest failure
//! voids only its own section and the run continues.

use crate::classify;
use crate::cli::CliArgs;
use crate::dataset::{DatasetSource, EolDataset};
use crate::domain::{AuditReport, SectionReport};
use crate::error::FetchError;
use crate::manifest::{
    extract_from_path, ManifestExtractor, PackageJsonExtractor, PomXmlExtractor,
};
use crate::progress::Progress;
use std::path::Path;

/// Orchestrator for the audit workflow
pub struct Orchestrator {
    args: CliArgs,
}

impl Orchestrator {
    /// Create a new orchestrator with the given CLI arguments
    pub fn new(args: CliArgs) -> Self {
        Self { args }
    }

    /// Run the audit against the given dataset source
    pub async fn run(&self, source: &dyn DatasetSource) -> Result<AuditReport, FetchError> {
        let mut progress = Progress::new(!self.args.quiet);

        progress.spinner(&format!(
            "Fetching end-of-life dataset from {}...",
            source.describe()
        ));
        let dataset = source.load().await;
        progress.finish_and_clear();
        let dataset = dataset?;

        if self.args.verbose {
            let today = chrono::Local::now().date_naive().to_string();
            eprintln!(
                "dataset covers {} products, {} with support past {}",
                dataset.len(),
                dataset.supported_products(&today).len(),
                today
            );
        }

        let mut errors = Vec::new();
        let frontend =
            audit_section(&PackageJsonExtractor, &self.args.frontend, &dataset, &mut errors);
        let backend =
            audit_section(&PomXmlExtractor, &self.args.backend, &dataset, &mut errors);

        Ok(AuditReport {
            frontend,
            backend,
            errors,
        })
    }
}

fn audit_section(
    extractor: &dyn ManifestExtractor,
    path: &Path,
    dataset: &EolDataset,
    errors: &mut Vec<String>,
) -> SectionReport {
    match extract_from_path(extractor, path, dataset) {
        Ok(resolved) => SectionReport::from_results(classify::classify_all(&resolved)),
        Err(e) => {
            errors.push(format!("{}: {}", extractor.section(), e));
            SectionReport::default()
        }
    }
}
