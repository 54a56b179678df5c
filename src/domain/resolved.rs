//! Resolved dependency structures

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a declared version was resolved against the dataset.
///
/// The shape is decided once at extraction time; downstream code matches on
/// the variant instead of probing for optional fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Resolution {
    /// The product is not covered by the dataset.
    Unchecked { used: String },
    /// Flat-manifest shape: only the most recent supported release is kept.
    Single {
        used: String,
        latest_supported: Option<String>,
    },
    /// Tree-manifest shape: the full supported release list, dataset order.
    List { used: String, supported: Vec<String> },
}

/// A dependency extracted from a manifest, with its declared version
/// resolved against the end-of-life dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedDependency {
    /// Product key, lowercase
    pub name: String,
    /// Resolution outcome
    #[serde(flatten)]
    pub resolution: Resolution,
}

impl ResolvedDependency {
    /// Creates an unchecked dependency (product absent from the dataset)
    pub fn unchecked(name: impl Into<String>, used: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            resolution: Resolution::Unchecked { used: used.into() },
        }
    }

    /// Creates a dependency resolved against a single latest-supported release
    pub fn single(
        name: impl Into<String>,
        used: impl Into<String>,
        latest_supported: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            resolution: Resolution::Single {
                used: used.into(),
                latest_supported,
            },
        }
    }

    /// Creates a dependency resolved against a supported release list
    pub fn list(
        name: impl Into<String>,
        used: impl Into<String>,
        supported: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            resolution: Resolution::List {
                used: used.into(),
                supported,
            },
        }
    }

    /// Returns the declared (resolved) version string
    pub fn used(&self) -> &str {
        match &self.resolution {
            Resolution::Unchecked { used }
            | Resolution::Single { used, .. }
            | Resolution::List { used, .. } => used,
        }
    }
}

impl fmt::Display for ResolvedDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = match &self.resolution {
            Resolution::Unchecked { .. } => " (unchecked)",
            Resolution::Single { .. } | Resolution::List { .. } => "",
        };
        write!(f, "{}@{}{}", self.name, self.used(), marker)
    }
}
