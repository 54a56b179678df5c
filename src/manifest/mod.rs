//! Manifest extraction
//!
//! Both extractors produce the same normalized output: one
//! `ResolvedDependency` per declared dependency, with the version resolved
//! against the end-of-life dataset.
//! - package.json: flat name→range mapping (Frontend)
//! - pom.xml: hierarchical tree with property indirection and
//!   parent-managed versions (Backend)

mod package_json;
mod pom_xml;

pub use package_json::PackageJsonExtractor;
pub use pom_xml::PomXmlExtractor;

use crate::dataset::EolDataset;
use crate::domain::ResolvedDependency;
use crate::error::ManifestError;
use std::path::Path;

/// Trait for extracting resolved dependencies from a manifest document
pub trait ManifestExtractor {
    /// Extract and resolve every declared dependency
    fn extract(
        &self,
        content: &str,
        dataset: &EolDataset,
    ) -> Result<Vec<ResolvedDependency>, ManifestError>;

    /// Section label used in reports
    fn section(&self) -> &'static str;
}

/// Read a manifest from disk and run the extractor over it
pub fn extract_from_path(
    extractor: &dyn ManifestExtractor,
    path: &Path,
    dataset: &EolDataset,
) -> Result<Vec<ResolvedDependency>, ManifestError> {
    if !path.exists() {
        return Err(ManifestError::not_found(path));
    }
    let content = std::fs::read_to_string(path).map_err(|e| ManifestError::read(path, e))?;
    extractor.extract(&content, dataset)
}
