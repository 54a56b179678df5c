//! Application error types using thiserror
//!
//! Error hierarchy:
//! - FetchError: dataset retrieval failures (fatal for the whole run)
//! - ManifestError: manifest loading/parsing failures (fatal per section)
//!
//! Version-parse and placeholder-resolution failures are not errors; they
//! are recovered inline by string-comparison fallbacks in the classifier.

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Dataset retrieval related errors
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Manifest file related errors
    #[error(transparent)]
    Manifest(#[from] ManifestError),
}

/// Errors related to end-of-life dataset retrieval
#[derive(Error, Debug)]
pub enum FetchError {
    /// Network request failed
    #[error("failed to fetch end-of-life dataset from {url}: {message}")]
    Network { url: String, message: String },

    /// Timeout
    #[error("timeout while fetching end-of-life dataset from {url}")]
    Timeout { url: String },

    /// Response body was not a valid dataset
    #[error("invalid dataset response from {url}: {message}")]
    InvalidResponse { url: String, message: String },

    /// Local dataset file could not be loaded
    #[error("failed to load dataset file {path}: {message}")]
    File { path: PathBuf, message: String },
}

/// Errors related to manifest file operations
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Manifest file not found
    #[error("manifest file not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read manifest file
    #[error("failed to read manifest file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing error (for package.json)
    #[error("failed to parse JSON in {path}: {message}")]
    Json { path: PathBuf, message: String },

    /// XML parsing error (for pom.xml)
    #[error("failed to parse XML in {path}: {message}")]
    Xml { path: PathBuf, message: String },
}

impl FetchError {
    /// Creates a new Network error
    pub fn network(url: impl Into<String>, message: impl Into<String>) -> Self {
        FetchError::Network {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Creates a new Timeout error
    pub fn timeout(url: impl Into<String>) -> Self {
        FetchError::Timeout { url: url.into() }
    }

    /// Creates a new InvalidResponse error
    pub fn invalid_response(url: impl Into<String>, message: impl Into<String>) -> Self {
        FetchError::InvalidResponse {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Creates a new File error
    pub fn file(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        FetchError::File {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl ManifestError {
    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        ManifestError::NotFound { path: path.into() }
    }

    /// Creates a new Read error
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::Read {
            path: path.into(),
            source,
        }
    }

    /// Creates a new Json error
    pub fn json(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ManifestError::Json {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a new Xml error
    pub fn xml(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ManifestError::Xml {
            path: path.into(),
            message: message.into(),
        }
    }
}
