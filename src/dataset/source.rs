//! Dataset sources
//!
//! One `EolDataset` is consumed per run; it comes either from the published
//! JSON release over HTTP or from a local file for offline and CI use.

use super::{EolDataset, HttpClient};
use crate::error::FetchError;
use async_trait::async_trait;
use std::path::PathBuf;

/// Fixed download location for the published dataset. The newest release
/// carries the tag "latest".
pub const DEFAULT_DATASET_URL: &str =
    "https://github.com/HenryJobst/endoflife.json/releases/download/latest/endoflife.json";

/// A place the end-of-life dataset can be loaded from
#[async_trait]
pub trait DatasetSource {
    /// Load the full dataset. Failure here is fatal for the run.
    async fn load(&self) -> Result<EolDataset, FetchError>;

    /// Human-readable origin for progress and error messages
    fn describe(&self) -> String;
}

/// Dataset downloaded over HTTP
pub struct HttpSource {
    client: HttpClient,
    url: String,
}

impl HttpSource {
    pub fn new(client: HttpClient, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl DatasetSource for HttpSource {
    async fn load(&self) -> Result<EolDataset, FetchError> {
        self.client.get_json(&self.url).await
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Dataset read from a local JSON file
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DatasetSource for FileSource {
    async fn load(&self) -> Result<EolDataset, FetchError> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| FetchError::file(&self.path, e.to_string()))?;
        EolDataset::from_json(&content)
            .map_err(|e| FetchError::file(&self.path, format!("invalid dataset JSON: {}", e)))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
