//! Classification results and report buckets

use serde::{Deserialize, Serialize};
use std::fmt;

/// Report bucket for a classified dependency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Bucket {
    /// Declared version is no longer supported
    EndOfLife,
    /// Declared version is at or above a supported release
    UpToDate,
    /// Product is not covered by the dataset
    Unchecked,
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Bucket::EndOfLife => "end-of-life",
            Bucket::UpToDate => "up-to-date",
            Bucket::Unchecked => "unchecked",
        };
        write!(f, "{}", label)
    }
}

/// Outcome of classifying one dependency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Product key
    pub dependency: String,
    /// Declared version as written in the manifest
    pub used: String,
    /// Assigned bucket
    pub bucket: Bucket,
    /// Version to upgrade to, for end-of-life dependencies
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<String>,
}

impl ClassificationResult {
    /// Creates an end-of-life result
    pub fn end_of_life(
        dependency: impl Into<String>,
        used: impl Into<String>,
        required: Option<String>,
    ) -> Self {
        Self {
            dependency: dependency.into(),
            used: used.into(),
            bucket: Bucket::EndOfLife,
            required,
        }
    }

    /// Creates an up-to-date result
    pub fn up_to_date(dependency: impl Into<String>, used: impl Into<String>) -> Self {
        Self {
            dependency: dependency.into(),
            used: used.into(),
            bucket: Bucket::UpToDate,
            required: None,
        }
    }

    /// Creates an unchecked result
    pub fn unchecked(dependency: impl Into<String>, used: impl Into<String>) -> Self {
        Self {
            dependency: dependency.into(),
            used: used.into(),
            bucket: Bucket::Unchecked,
            required: None,
        }
    }
}

/// One manifest's classified dependencies, partitioned into buckets
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionReport {
    pub end_of_life: Vec<ClassificationResult>,
    pub up_to_date: Vec<ClassificationResult>,
    pub unchecked: Vec<ClassificationResult>,
}

impl SectionReport {
    /// Partition classification results into buckets, preserving order
    pub fn from_results(results: impl IntoIterator<Item = ClassificationResult>) -> Self {
        let mut section = Self::default();
        for result in results {
            match result.bucket {
                Bucket::EndOfLife => section.end_of_life.push(result),
                Bucket::UpToDate => section.up_to_date.push(result),
                Bucket::Unchecked => section.unchecked.push(result),
            }
        }
        section
    }

    /// True when the section holds at least one end-of-life dependency
    pub fn has_eol(&self) -> bool {
        !self.end_of_life.is_empty()
    }

    /// Total number of classified dependencies in the section
    pub fn len(&self) -> usize {
        self.end_of_life.len() + self.up_to_date.len() + self.unchecked.len()
    }

    /// True when no dependency landed in any bucket
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The complete audit outcome across both manifests
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuditReport {
    pub frontend: SectionReport,
    pub backend: SectionReport,
    /// Per-section extraction failures (the other section still reports)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl AuditReport {
    /// True when any section holds an end-of-life dependency
    pub fn has_eol(&self) -> bool {
        self.frontend.has_eol() || self.backend.has_eol()
    }

    /// True when any manifest section failed to extract
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}
