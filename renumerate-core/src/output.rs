use crate::executor::RenameReport;
use crate::policy::{NamingPolicy, SortMode};
use crate::preview::{render_report, Preview};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt::Write;
use std::path::PathBuf;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Summary,
    Json,
}

/// Result of a rename operation, in any run mode
#[derive(Debug, Serialize)]
pub struct RenameResult {
    pub directory: PathBuf,
    pub policy: NamingPolicy,
    pub report: RenameReport,
}

/// One row of a `list` result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListedFile {
    pub name: String,
    /// First number in the stem, 0 when there is none
    pub number: u64,
    /// Stem without its first number
    pub text: String,
    /// Every digit of the stem
    pub digits: String,
    /// Every non-digit character of the stem
    pub text_only: String,
    /// Last number in the stem, 0 when there is none
    pub trailing: u64,
}

/// Result of a list operation
#[derive(Debug, Serialize, Deserialize)]
pub struct ListResult {
    pub directory: PathBuf,
    pub sort: SortMode,
    pub files: Vec<ListedFile>,
}

/// Result of a version command
#[derive(Debug, Serialize, Deserialize)]
pub struct VersionResult {
    pub name: String,
    pub version: String,
}

/// Trait for formatting output in different formats
pub trait OutputFormatter {
    fn format(&self, format: OutputFormat) -> String;
    fn format_json(&self) -> String;
    fn format_summary(&self) -> String;
}

impl OutputFormatter for RenameResult {
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(),
        }
    }

    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": !self.report.has_failures(),
            "operation": "rename",
            "directory": self.directory,
            "mode": self.report.mode,
            "policy": {
                "scheme": self.policy.scheme,
                "sort": self.policy.sort,
                "prefix": self.policy.prefix,
                "suffix": self.policy.suffix,
            },
            "summary": self.report.summary,
            "renames": self.report.outcomes,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        render_report(&self.report, Preview::List, false)
    }
}

impl OutputFormatter for ListResult {
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(),
        }
    }

    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": true,
            "operation": "list",
            "directory": self.directory,
            "sort": self.sort,
            "files": self.files,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        let mut output = String::new();

        if self.files.is_empty() {
            writeln!(output, "No files in {}", self.directory.display()).unwrap();
            return output;
        }

        for (index, file) in self.files.iter().enumerate() {
            writeln!(
                output,
                "{:>4}. {} (number: {}, text: {:?}, digits: {:?}, text only: {:?}, trailing: {})",
                index + 1,
                file.name,
                file.number,
                file.text,
                file.digits,
                file.text_only,
                file.trailing
            )
            .unwrap();
        }
        writeln!(output, "{} files, sorted by {}", self.files.len(), self.sort).unwrap();

        output
    }
}

impl OutputFormatter for VersionResult {
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(),
        }
    }

    fn format_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        format!("{} {}", self.name, self.version)
    }
}
