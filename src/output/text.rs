//! Text output formatter
//!
//! Renders two sections (Frontend, Backend) of three fixed-width bucket
//! tables each. Column widths are 30/20/20 with dash-rule separators and a
//! literal `None` placeholder for empty buckets.

use crate::domain::{AuditReport, ClassificationResult, SectionReport};
use crate::output::OutputFormatter;
use colored::Colorize;
use std::io::Write;

const NAME_WIDTH: usize = 30;
const VERSION_WIDTH: usize = 20;

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Whether to color bucket headings
    color: bool,
}

/// Bucket heading styles
#[derive(Clone, Copy)]
enum Severity {
    Bad,
    Good,
    Neutral,
}

impl TextFormatter {
    /// Create a new text formatter with colors enabled
    pub fn new() -> Self {
        Self { color: true }
    }

    /// Create a new text formatter with an explicit color setting
    pub fn with_color(color: bool) -> Self {
        Self { color }
    }

    fn heading(&self, label: &str, severity: Severity) -> String {
        if !self.color {
            return label.to_string();
        }
        match severity {
            Severity::Bad => label.red().bold().to_string(),
            Severity::Good => label.green().to_string(),
            Severity::Neutral => label.yellow().to_string(),
        }
    }

    fn write_section(
        &self,
        name: &str,
        section: &SectionReport,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        writeln!(writer, "=== {} ===", name)?;
        self.write_bucket(
            "End-of-life dependencies:",
            Severity::Bad,
            &section.end_of_life,
            true,
            writer,
        )?;
        writeln!(writer)?;
        self.write_bucket(
            "Up-to-date dependencies:",
            Severity::Good,
            &section.up_to_date,
            false,
            writer,
        )?;
        writeln!(writer)?;
        self.write_bucket(
            "Unchecked dependencies:",
            Severity::Neutral,
            &section.unchecked,
            false,
            writer,
        )
    }

    fn write_bucket(
        &self,
        label: &str,
        severity: Severity,
        rows: &[ClassificationResult],
        with_required: bool,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        writeln!(writer, "{}", self.heading(label, severity))?;

        if rows.is_empty() {
            writeln!(writer, "None")?;
            return Ok(());
        }

        if with_required {
            writeln!(
                writer,
                "{:<NAME_WIDTH$} {:<VERSION_WIDTH$} {:<VERSION_WIDTH$}",
                "Dependency", "Used Version", "Required Version"
            )?;
            writeln!(writer, "{}", "-".repeat(70))?;
            for row in rows {
                writeln!(
                    writer,
                    "{:<NAME_WIDTH$} {:<VERSION_WIDTH$} {:<VERSION_WIDTH$}",
                    row.dependency,
                    row.used,
                    row.required.as_deref().unwrap_or("None")
                )?;
            }
        } else {
            writeln!(
                writer,
                "{:<NAME_WIDTH$} {:<VERSION_WIDTH$}",
                "Dependency", "Used Version"
            )?;
            writeln!(writer, "{}", "-".repeat(50))?;
            for row in rows {
                writeln!(
                    writer,
                    "{:<NAME_WIDTH$} {:<VERSION_WIDTH$}",
                    row.dependency, row.used
                )?;
            }
        }

        Ok(())
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &AuditReport, writer: &mut dyn Write) -> std::io::Result<()> {
        self.write_section("Frontend", &report.frontend, writer)?;
        writeln!(writer)?;
        self.write_section("Backend", &report.backend, writer)
    }
}
