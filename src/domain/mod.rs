//! Core domain types shared across the audit pipeline

mod classification;
mod resolved;

pub use classification::{AuditReport, Bucket, ClassificationResult, SectionReport};
pub use resolved::{Resolution, ResolvedDependency};
