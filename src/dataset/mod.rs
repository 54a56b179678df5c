//! End-of-life dataset model and accessor
//!
//! The dataset maps a lowercase product key to an ordered release list,
//! most recent first. Two filters exist and stay distinct:
//! - the per-release `isEol` boolean, which drives every classification
//! - a product-level filter comparing release `eol` dates against the
//!   current date, used only for dataset diagnostics

mod client;
mod source;

pub use client::HttpClient;
pub use source::{DatasetSource, FileSource, HttpSource, DEFAULT_DATASET_URL};

use serde::Deserialize;
use std::collections::HashMap;

/// A single release entry for a product
#[derive(Debug, Clone, Deserialize)]
pub struct Release {
    /// Release name, e.g. "3.4" or "21"
    pub name: String,
    /// Whether the release is end-of-life. Entries without the flag count
    /// as end-of-life.
    #[serde(rename = "isEol", default = "eol_by_default")]
    pub is_eol: bool,
    /// EOL date (ISO), when the dataset provides one
    #[serde(default)]
    pub eol: Option<String>,
}

fn eol_by_default() -> bool {
    true
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductResult {
    pub releases: Option<Vec<Release>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductEntry {
    pub result: Option<ProductResult>,
}

/// The fetched end-of-life dataset, keyed by lowercase product name
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EolDataset(HashMap<String, ProductEntry>);

impl EolDataset {
    /// Parse a dataset from its JSON document
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    fn releases(&self, product: &str) -> Option<&[Release]> {
        self.0.get(product)?.result.as_ref()?.releases.as_deref()
    }

    /// True when the dataset carries a release list for this product.
    /// Products without one are always unchecked.
    pub fn contains(&self, product: &str) -> bool {
        self.releases(product).is_some()
    }

    /// Non-EOL release names for a product, in dataset order (most recent
    /// first). Unknown products yield an empty list; absence is a normal
    /// case, never an error.
    pub fn supported_versions(&self, product: &str) -> Vec<String> {
        self.releases(product)
            .unwrap_or(&[])
            .iter()
            .filter(|r| !r.is_eol)
            .map(|r| r.name.clone())
            .collect()
    }

    /// First non-EOL release name for a product
    pub fn latest_supported(&self, product: &str) -> Option<String> {
        self.releases(product)?
            .iter()
            .find(|r| !r.is_eol)
            .map(|r| r.name.clone())
    }

    /// Products with at least one release whose EOL date is strictly after
    /// `today` (ISO date string; lexicographic comparison matches the
    /// dataset convention). Diagnostics only; classification relies on the
    /// per-release `isEol` flag instead.
    pub fn supported_products(&self, today: &str) -> Vec<&str> {
        let mut products: Vec<&str> = self
            .0
            .iter()
            .filter(|(_, entry)| {
                entry
                    .result
                    .as_ref()
                    .and_then(|r| r.releases.as_ref())
                    .is_some_and(|releases| {
                        releases
                            .iter()
                            .any(|rel| rel.eol.as_deref().is_some_and(|date| date > today))
                    })
            })
            .map(|(key, _)| key.as_str())
            .collect();
        products.sort_unstable();
        products
    }

    /// Number of products in the dataset
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
