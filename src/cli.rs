//! CLI argument parsing module for eolaudit

use clap::Parser;
use std::path::PathBuf;

use crate::dataset::DEFAULT_DATASET_URL;

/// Audit project dependencies against the end-of-life dataset
#[derive(Parser, Debug, Clone)]
#[command(
    name = "eolaudit",
    version,
    about = "Dependency end-of-life audit for frontend and backend manifests"
)]
pub struct CliArgs {
    /// Frontend manifest path (package.json)
    #[arg(long, default_value = "frontend/package.json")]
    pub frontend: PathBuf,

    /// Backend manifest path (pom.xml)
    #[arg(long, default_value = "backend/pom.xml")]
    pub backend: PathBuf,

    /// Download URL for the end-of-life dataset
    #[arg(long, default_value = DEFAULT_DATASET_URL)]
    pub dataset_url: String,

    /// Load the dataset from a local JSON file instead of downloading
    #[arg(long, conflicts_with = "dataset_url")]
    pub dataset_file: Option<PathBuf>,

    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Minimal output - no progress display
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
