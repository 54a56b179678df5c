//! package.json extractor for the frontend section
//!
//! Walks the `dependencies` map in manifest order and resolves each entry
//! against the dataset. Only the single most recent supported release is
//! kept per dependency; the full list is a backend-manifest concern.

use crate::dataset::EolDataset;
use crate::domain::ResolvedDependency;
use crate::error::ManifestError;
use crate::manifest::ManifestExtractor;
use serde_json::Value;
use std::path::PathBuf;

/// Extractor for package.json files
pub struct PackageJsonExtractor;

impl ManifestExtractor for PackageJsonExtractor {
    fn extract(
        &self,
        content: &str,
        dataset: &EolDataset,
    ) -> Result<Vec<ResolvedDependency>, ManifestError> {
        let json: Value = serde_json::from_str(content)
            .map_err(|e| ManifestError::json(PathBuf::from("package.json"), e.to_string()))?;

        let mut resolved = Vec::new();

        if let Some(deps) = json.get("dependencies").and_then(|v| v.as_object()) {
            for (name, range) in deps {
                let Some(range) = range.as_str() else {
                    continue;
                };
                // Names are looked up verbatim; npm package names are
                // already lowercase.
                if dataset.contains(name) {
                    resolved.push(ResolvedDependency::single(
                        name.clone(),
                        range,
                        dataset.latest_supported(name),
                    ));
                } else {
                    resolved.push(ResolvedDependency::unchecked(name.clone(), range));
                }
            }
        }

        Ok(resolved)
    }

    fn section(&self) -> &'static str {
        "Frontend"
    }
}
